//! UI components.
//!
//! `table/` is the generic data table; `pages/` holds the route-mounted
//! containers that own server data and compose the rest.

pub mod badge;
pub mod icons;
pub mod modal;
pub mod pages;
pub mod pagination;
pub mod result_modal;
pub mod router;
pub mod search_bar;
pub mod sms_modal;
pub mod table;
pub mod team_tabs;
pub mod toast;

pub use router::AppRouter;
