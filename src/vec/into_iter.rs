use core::iter::FusedIterator;
use core::ops::Range;

use super::buffer::IntBuffer;

/// An owning iterator over the items of an `IntVec`.
#[derive(Debug)]
pub struct IntoIter {
    remain: Range<usize>,
    buf: IntBuffer,
}

impl IntoIter {
    pub(super) fn new(buf: IntBuffer) -> Self {
        let end = buf.length();
        Self {
            remain: Range { start: 0, end },
            buf,
        }
    }

    /// Access the remaining items as a slice.
    pub fn as_slice(&self) -> &[i32] {
        &self.buf.as_slice()[self.remain.clone()]
    }

    /// Access the remaining items as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [i32] {
        let remain = self.remain.clone();
        &mut self.buf.as_mut_slice()[remain]
    }

    /// The number of remaining items.
    pub const fn len(&self) -> usize {
        self.remain.end - self.remain.start
    }

    /// Check whether any items remain.
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl AsRef<[i32]> for IntoIter {
    fn as_ref(&self) -> &[i32] {
        self.as_slice()
    }
}

impl AsMut<[i32]> for IntoIter {
    fn as_mut(&mut self) -> &mut [i32] {
        self.as_mut_slice()
    }
}

impl Iterator for IntoIter {
    type Item = i32;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.remain.next()?;
        Some(self.buf.as_slice()[index])
    }

    #[inline]
    fn count(self) -> usize
    where
        Self: Sized,
    {
        self.len()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.len();
        (len, Some(len))
    }
}

impl DoubleEndedIterator for IntoIter {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        let index = self.remain.next_back()?;
        Some(self.buf.as_slice()[index])
    }
}

impl ExactSizeIterator for IntoIter {}

impl FusedIterator for IntoIter {}
