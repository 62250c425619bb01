//! Stacking-order allocator shared by every managed window.

/// Default starting value of the focus counter; the first issued z-index is one above it.
pub const DEFAULT_BASE_Z_INDEX: u32 = 10;

/// Largest base a layout may configure.
pub const MAX_BASE_Z_INDEX: u32 = 1_000_000;

/// Monotonic z-index source.
///
/// Every call to [`FocusCounter::issue`] returns a value strictly greater than all values issued
/// before it, so the most recently fronted window always paints on top. The counter is 64 bits
/// wide and never saturates in practice, even from a `u32::MAX` base.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusCounter {
    last: u64,
}

impl Default for FocusCounter {
    fn default() -> Self {
        Self::starting_at(DEFAULT_BASE_Z_INDEX)
    }
}

impl FocusCounter {
    pub const fn starting_at(base: u32) -> Self {
        Self { last: base as u64 }
    }

    pub fn issue(&mut self) -> u64 {
        self.last += 1;
        self.last
    }

    /// Highest value issued so far (or the base when nothing was issued).
    pub const fn current(&self) -> u64 {
        self.last
    }
}
