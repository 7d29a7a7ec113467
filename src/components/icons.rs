//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuChevronDown as CaretDown, LuChevronLeft as ChevronLeft, LuChevronRight as ChevronRight,
        LuChevronUp as CaretUp, LuChevronsUpDown as CaretUpdown, LuEye as Preview,
        LuFileX as NoData, LuPlus as Plus, LuSearch as Search, LuTrash2 as Remove, LuX as Close,
    };
}

mod bootstrap {
    pub use icondata::{
        BsCaretDownFill as CaretDown, BsCaretUpFill as CaretUp, BsChevronExpand as CaretUpdown,
        BsChevronLeft as ChevronLeft, BsChevronRight as ChevronRight, BsEye as Preview,
        BsFileEarmarkX as NoData, BsPlusLg as Plus, BsSearch as Search, BsTrash as Remove,
        BsXLg as Close,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(CARET_UP, CaretUp);
themed_icon!(CARET_DOWN, CaretDown);
themed_icon!(CARET_UPDOWN, CaretUpdown);
themed_icon!(CHEVRON_LEFT, ChevronLeft);
themed_icon!(CHEVRON_RIGHT, ChevronRight);
themed_icon!(SEARCH, Search);
themed_icon!(CLOSE, Close);
themed_icon!(PLUS, Plus);
themed_icon!(REMOVE, Remove);
themed_icon!(PREVIEW, Preview);
themed_icon!(NO_DATA, NoData);
