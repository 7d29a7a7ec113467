//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.

// =============================================================================
// API Configuration
// =============================================================================

/// Base URL of the recruitment REST API.
pub const API_BASE_URL: &str = "https://recruit-api.example.org/api/v1";

/// Fetch request timeout in milliseconds.
pub const FETCH_TIMEOUT_MS: i32 = 10000;

/// localStorage key holding the staff access token.
pub const ACCESS_TOKEN_KEY: &str = "accessToken";

// =============================================================================
// List Configuration
// =============================================================================

/// Default rows per page.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Page sizes offered by the pagination size selector.
pub const PAGE_SIZES: &[u32] = &[10, 20, 50];

/// Extra rows requested on top of `totalCount` when "select all pages"
/// refetches the full result set, covering rows submitted in between.
pub const SELECT_ALL_OVERFETCH: u64 = 100;

// =============================================================================
// Toast Configuration
// =============================================================================

/// How long a toast notification stays visible, in milliseconds.
pub const TOAST_DURATION_MS: u32 = 3000;

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - familiar, slightly bolder (default)
/// - `Lucide` - minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
/// Change this value to switch icon styles globally.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;
