//! Application constants: timing and layout dimensions.

use std::time::Duration;

// ============================================================================
// Timing
// ============================================================================

/// Main loop tick; drives redraws, the spinner and toast countdowns.
pub const TICK_RATE: Duration = Duration::from_millis(100);

/// Spinner frames shown while a fetch is outstanding.
pub const SPINNER_FRAMES: [&str; 4] = ["|", "/", "-", "\\"];

// ============================================================================
// Layout
// ============================================================================

/// Width assumed before the terminal reports its size.
pub const DEFAULT_TERMINAL_WIDTH: u16 = 80;

/// Height of the application header (in rows).
pub const HEADER_HEIGHT: u16 = 3;

/// Height of the query form (in rows).
pub const QUERY_FORM_HEIGHT: u16 = 3;

/// Height of the footer (in rows).
pub const FOOTER_HEIGHT: u16 = 1;

/// Minimum width of one card (in columns).
pub const CARD_MIN_WIDTH: u16 = 36;

/// Height of one card (in rows).
///
/// Border, title, token id, description (2 lines), image link, contract,
/// copy indicator, border.
pub const CARD_HEIGHT: u16 = 9;

/// Most cards placed side by side.
pub const MAX_GRID_COLUMNS: usize = 4;
