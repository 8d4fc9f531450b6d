//! Random-access cursors over the storage of an `IntVec`.
//!
//! A [`Cursor`] wraps a raw position and nothing else. It holds no borrow of
//! the vector it was obtained from, so it survives any mutation of that
//! vector, but it is invalidated by every operation which may reallocate:
//! a `push` past the current capacity, a growing `reserve`, clone assignment,
//! `take`, `swap`, or dropping the vector. An invalidated cursor may still be
//! moved around, but it must not be dereferenced, and comparing it against
//! cursors obtained after the reallocation gives meaningless results.

use core::fmt;
use core::iter::FusedIterator;
use core::marker::PhantomData;
use core::mem::size_of;
use core::ops::{Add, AddAssign, Sub, SubAssign};
use core::ptr;

/// A position within the contiguous storage of an `IntVec`.
///
/// Movement and comparison operate purely on the wrapped position and are
/// always safe. Dereferencing is `unsafe`: the caller must ensure the cursor
/// refers to an initialized item of a live vector which has not been
/// reallocated since the cursor was obtained.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cursor {
    ptr: *mut i32,
}

impl Cursor {
    /// A cursor at the null position, comparable only against other null cursors.
    pub const fn null() -> Self {
        Self {
            ptr: ptr::null_mut(),
        }
    }

    /// Wrap a raw position.
    #[inline]
    pub const fn from_ptr(ptr: *mut i32) -> Self {
        Self { ptr }
    }

    /// Access the wrapped position.
    #[inline]
    pub const fn as_ptr(self) -> *mut i32 {
        self.ptr
    }

    /// Check whether this cursor is at the null position.
    #[inline]
    pub fn is_null(self) -> bool {
        self.ptr.is_null()
    }

    /// Read the item at this position.
    ///
    /// # Safety
    /// The cursor must refer to an initialized item of a live, unmoved buffer.
    #[inline]
    pub unsafe fn read(self) -> i32 {
        debug_assert!(!self.is_null(), "dereferenced a null cursor");
        self.ptr.read()
    }

    /// Overwrite the item at this position.
    ///
    /// # Safety
    /// The cursor must refer to an initialized item of a live, unmoved buffer,
    /// and no reference to that item may be alive.
    #[inline]
    pub unsafe fn write(self, value: i32) {
        debug_assert!(!self.is_null(), "dereferenced a null cursor");
        self.ptr.write(value)
    }

    /// Obtain a reference to the item at this position.
    ///
    /// # Safety
    /// The cursor must refer to an initialized item of a buffer which remains
    /// live and unmodified for the lifetime `'a`.
    #[inline]
    pub unsafe fn as_ref<'a>(self) -> &'a i32 {
        debug_assert!(!self.is_null(), "dereferenced a null cursor");
        &*self.ptr
    }

    /// Obtain a mutable reference to the item at this position.
    ///
    /// # Safety
    /// The cursor must refer to an initialized item of a buffer which remains
    /// live for the lifetime `'a`, and no other reference to that item may be
    /// used during `'a`.
    #[inline]
    pub unsafe fn as_mut<'a>(self) -> &'a mut i32 {
        debug_assert!(!self.is_null(), "dereferenced a null cursor");
        &mut *self.ptr
    }

    /// Obtain a reference to the item `offset` positions away, equivalent to
    /// `(self + offset).as_ref()`.
    ///
    /// # Safety
    /// See [`Cursor::as_ref`].
    #[inline]
    pub unsafe fn at<'a>(self, offset: isize) -> &'a i32 {
        (self + offset).as_ref()
    }

    /// Obtain a mutable reference to the item `offset` positions away,
    /// equivalent to `(self + offset).as_mut()`.
    ///
    /// # Safety
    /// See [`Cursor::as_mut`].
    #[inline]
    pub unsafe fn at_mut<'a>(self, offset: isize) -> &'a mut i32 {
        (self + offset).as_mut()
    }

    /// Move forward one position, returning the updated cursor.
    #[inline]
    pub fn inc(&mut self) -> &mut Self {
        *self += 1;
        self
    }

    /// Move backward one position, returning the updated cursor.
    #[inline]
    pub fn dec(&mut self) -> &mut Self {
        *self -= 1;
        self
    }

    /// Move forward one position, returning the cursor as it was before.
    #[inline]
    pub fn post_inc(&mut self) -> Self {
        let prev = *self;
        *self += 1;
        prev
    }

    /// Move backward one position, returning the cursor as it was before.
    #[inline]
    pub fn post_dec(&mut self) -> Self {
        let prev = *self;
        *self -= 1;
        prev
    }

    /// Move by a signed number of positions.
    #[inline]
    pub fn offset(self, count: isize) -> Self {
        Self {
            ptr: self.ptr.wrapping_offset(count),
        }
    }

    /// The signed number of positions from `origin` to this cursor. Both
    /// cursors must be positioned within the same buffer for the result to
    /// be meaningful.
    #[inline]
    pub fn distance(self, origin: Self) -> isize {
        let bytes = (self.ptr as usize).wrapping_sub(origin.ptr as usize) as isize;
        bytes / size_of::<i32>() as isize
    }

    /// Iterate the items in the range `[self, end)`.
    ///
    /// # Safety
    /// Both cursors must be positioned within the initialized items of the same
    /// buffer with `self <= end`, and that buffer must remain live and
    /// unmodified for the lifetime `'a`.
    #[inline]
    pub unsafe fn iter_to<'a>(self, end: Self) -> CursorIter<'a> {
        debug_assert!(self <= end, "cursor range is reversed");
        CursorIter {
            front: self,
            back: end,
            _marker: PhantomData,
        }
    }
}

impl Default for Cursor {
    #[inline]
    fn default() -> Self {
        Self::null()
    }
}

impl fmt::Debug for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Cursor").field(&self.ptr).finish()
    }
}

impl Add<isize> for Cursor {
    type Output = Cursor;

    #[inline]
    fn add(self, rhs: isize) -> Self::Output {
        self.offset(rhs)
    }
}

impl Add<Cursor> for isize {
    type Output = Cursor;

    #[inline]
    fn add(self, rhs: Cursor) -> Self::Output {
        rhs.offset(self)
    }
}

impl Sub<isize> for Cursor {
    type Output = Cursor;

    #[inline]
    fn sub(self, rhs: isize) -> Self::Output {
        self.offset(rhs.wrapping_neg())
    }
}

impl Sub for Cursor {
    type Output = isize;

    #[inline]
    fn sub(self, rhs: Cursor) -> Self::Output {
        self.distance(rhs)
    }
}

impl AddAssign<isize> for Cursor {
    #[inline]
    fn add_assign(&mut self, rhs: isize) {
        *self = self.offset(rhs);
    }
}

impl SubAssign<isize> for Cursor {
    #[inline]
    fn sub_assign(&mut self, rhs: isize) {
        *self = *self - rhs;
    }
}

/// An iterator over the items between two cursors.
#[derive(Debug, Clone)]
pub struct CursorIter<'a> {
    front: Cursor,
    back: Cursor,
    _marker: PhantomData<&'a i32>,
}

impl<'a> Iterator for CursorIter<'a> {
    type Item = &'a i32;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            None
        } else {
            // SAFETY: guaranteed by the caller of `Cursor::iter_to`
            Some(unsafe { self.front.post_inc().as_ref() })
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.len();
        (len, Some(len))
    }
}

impl<'a> DoubleEndedIterator for CursorIter<'a> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            None
        } else {
            self.back -= 1;
            // SAFETY: guaranteed by the caller of `Cursor::iter_to`
            Some(unsafe { self.back.as_ref() })
        }
    }
}

impl<'a> ExactSizeIterator for CursorIter<'a> {
    #[inline]
    fn len(&self) -> usize {
        self.back.distance(self.front).max(0) as usize
    }
}

impl<'a> FusedIterator for CursorIter<'a> {}
