//! Named constants for TUI layout and navigation.

/// Number of items to scroll per page-up/page-down action.
pub(crate) const PAGE_SIZE: usize = 10;

/// Width of one company card in the logo grid, borders included.
pub(crate) const CARD_WIDTH: u16 = 26;

/// Height of one company card in the logo grid, borders included.
pub(crate) const CARD_HEIGHT: u16 = 4;

/// How long a status message stays in the footer.
pub(crate) const STATUS_MESSAGE_SECS: u64 = 4;

/// Ticks per spinner frame.
pub(crate) const SPINNER_TICKS_PER_FRAME: u64 = 1;
