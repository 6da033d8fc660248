//! Fixed-capacity ring of code-point byte offsets

use super::MAX_N;

/// Remembers the byte offset of the last [`MAX_N`] code points visited.
///
/// Code points are numbered from 1. Slot `position % MAX_N` holds the offset
/// of code point `position`; a slot that was never written reads as 0, which
/// is the offset of the first code point.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct OffsetRing {
    slots: [usize; MAX_N],
}

impl OffsetRing {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub(crate) fn record(&mut self, position: usize, offset: usize) {
        self.slots[position % MAX_N] = offset;
    }

    /// Offset of code point `position`. Only the last `MAX_N` positions are valid.
    #[inline]
    pub(crate) fn offset_of(&self, position: usize) -> usize {
        self.slots[position % MAX_N]
    }
}
