//! Central Configuration Constants
//!
//! Single source of truth for all configuration defaults.
//! To change the contributor cut, only edit this file.

/// App name
pub const APP_NAME: &str = "RxCompass Core";

/// App version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default number of top contributors fed into the region analysis
///
/// The prediction backend sends the 10 strongest feature contributors
/// per patient; the analysis re-applies the same cut defensively.
pub const DEFAULT_TOP_CONTRIBUTORS: usize = 10;

// ============================================
// Helper functions to read from env with fallback
// ============================================

/// Get top-contributor count from environment or use default
pub fn get_top_contributors() -> usize {
    std::env::var("RXCOMPASS_TOP_CONTRIBUTORS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_TOP_CONTRIBUTORS)
}
