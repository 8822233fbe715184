//! Unified error type for quasi-snake.
//!
//! We avoid `alloc` - all error variants carry no data.
//! Implements `defmt::Format` for efficient on-target logging.

/// Failures reported by the capabilities the UI core consumes.
///
/// None of these ever leave the core: callers log them and fall back
/// to defaults or carry on with in-memory state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// Persistent storage read or write failed.
    Storage,

    /// Access past the end of persistent storage.
    OutOfBounds,

    /// I²C transaction to the display failed.
    Display,
}
