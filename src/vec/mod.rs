//! A growable, contiguous vector of integers.

use core::borrow::{Borrow, BorrowMut};
use core::fmt;
use core::mem;
use core::ops::{Deref, DerefMut};
use core::ptr;

use const_default::ConstDefault;

use crate::capacity::{Grow, GrowDoubling};
use crate::error::{StorageError, UnderflowError, UpdateError};

use self::buffer::IntBuffer;

pub use self::{
    cursor::{Cursor, CursorIter},
    into_iter::IntoIter,
};

pub(crate) mod buffer;

#[macro_use]
mod macros;

mod cursor;
mod into_iter;

/// A contiguous, growable sequence of `i32` values.
///
/// Cloning performs a deep copy into independent storage with the same
/// capacity. Moving transfers the allocation; [`IntVec::take`] moves out of a
/// mutable reference and leaves an empty vector behind.
///
/// Appending grows the capacity from zero to one and then by doubling, so
/// that `push` runs in amortized constant time. Capacity is never released
/// except by dropping the vector.
#[repr(transparent)]
pub struct IntVec {
    buffer: IntBuffer,
}

impl IntVec {
    /// Constructs a new, empty `IntVec`.
    ///
    /// The vector will not allocate until elements are pushed onto it.
    ///
    /// # Examples
    ///
    /// ```
    /// # use intvec::IntVec;
    /// let vec = IntVec::new();
    /// assert_eq!(vec.len(), 0);
    /// assert_eq!(vec.capacity(), 0);
    /// ```
    pub const fn new() -> Self {
        Self {
            buffer: IntBuffer::EMPTY,
        }
    }

    /// Try to construct an empty `IntVec` with exactly `capacity` slots.
    pub fn try_with_capacity(capacity: usize) -> Result<Self, StorageError> {
        Ok(Self {
            buffer: IntBuffer::try_alloc(capacity, false)?,
        })
    }

    /// Construct an empty `IntVec` with exactly `capacity` slots.
    pub fn with_capacity(capacity: usize) -> Self {
        match Self::try_with_capacity(capacity) {
            Ok(res) => res,
            Err(error) => error.panic(),
        }
    }

    /// Try to construct an `IntVec` holding `len` zeroes, with a capacity of
    /// exactly `len`.
    pub fn try_zeroed(len: usize) -> Result<Self, StorageError> {
        let mut buffer = IntBuffer::try_alloc(len, true)?;
        // SAFETY: every slot of the allocation has been zeroed
        unsafe { buffer.set_length(len) };
        Ok(Self { buffer })
    }

    /// Construct an `IntVec` holding `len` zeroes, with a capacity of
    /// exactly `len`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use intvec::IntVec;
    /// let vec = IntVec::zeroed(3);
    /// assert_eq!(vec, [0, 0, 0]);
    /// assert_eq!(vec.capacity(), 3);
    /// ```
    pub fn zeroed(len: usize) -> Self {
        match Self::try_zeroed(len) {
            Ok(res) => res,
            Err(error) => error.panic(),
        }
    }

    /// Try to construct an `IntVec` holding a copy of `data`, with a capacity
    /// of exactly `data.len()`.
    pub fn try_from_slice(data: &[i32]) -> Result<Self, StorageError> {
        let mut vec = Self::try_with_capacity(data.len())?;
        // SAFETY: the capacity is sufficient for all of `data`
        unsafe { vec.extend_unchecked(data) };
        Ok(vec)
    }

    /// Construct an `IntVec` holding a copy of `data`, with a capacity of
    /// exactly `data.len()`.
    pub fn from_slice(data: &[i32]) -> Self {
        match Self::try_from_slice(data) {
            Ok(res) => res,
            Err(error) => error.panic(),
        }
    }

    /// Try to produce a deep copy of this vector. The copy has the same
    /// capacity as the source.
    pub fn try_clone(&self) -> Result<Self, StorageError> {
        Ok(Self {
            buffer: self.buffer.try_copy(self.buffer.capacity())?,
        })
    }

    /// Try to replace the contents of this vector with a deep copy of
    /// `source`, adopting its capacity. On failure this vector is unchanged.
    pub fn try_clone_from(&mut self, source: &Self) -> Result<(), StorageError> {
        self.buffer = source.buffer.try_copy(source.buffer.capacity())?;
        Ok(())
    }

    /// Move the contents out of this vector, leaving it empty with no
    /// allocation.
    ///
    /// # Examples
    ///
    /// ```
    /// # use intvec::intvec;
    /// let mut src = intvec![1, 2];
    /// let dst = src.take();
    /// assert_eq!(dst, [1, 2]);
    /// assert_eq!((src.len(), src.capacity()), (0, 0));
    /// ```
    #[inline]
    pub fn take(&mut self) -> Self {
        mem::take(self)
    }
}

impl IntVec {
    /// Access the start of the storage. The pointer is null when the
    /// vector holds no allocation.
    #[inline]
    pub fn as_ptr(&self) -> *const i32 {
        if self.buffer.capacity() == 0 {
            ptr::null()
        } else {
            self.buffer.data_ptr()
        }
    }

    /// Mutably access the start of the storage. The pointer is null when the
    /// vector holds no allocation.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut i32 {
        if self.buffer.capacity() == 0 {
            ptr::null_mut()
        } else {
            self.buffer.data_ptr_mut()
        }
    }

    /// Access the items as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[i32] {
        self.buffer.as_slice()
    }

    /// Access the items as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [i32] {
        self.buffer.as_mut_slice()
    }

    /// The number of allocated slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// The number of items in the vector.
    #[inline]
    pub fn len(&self) -> usize {
        self.buffer.length()
    }

    /// Check whether the vector holds no items.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check whether the next `push` must reallocate.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.len() == self.capacity()
    }

    /// Truncate the vector to zero items. The capacity and the allocation
    /// are retained.
    #[inline]
    pub fn clear(&mut self) {
        // SAFETY: zero never exceeds the capacity
        unsafe { self.buffer.set_length(0) };
    }

    /// Access an item without a bounds check.
    ///
    /// # Safety
    /// `index` must be less than `self.len()`.
    #[inline]
    pub unsafe fn get_unchecked(&self, index: usize) -> &i32 {
        debug_assert!(index < self.len(), "index out of range");
        &*self.buffer.data_ptr().add(index)
    }

    /// Mutably access an item without a bounds check.
    ///
    /// # Safety
    /// `index` must be less than `self.len()`.
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut i32 {
        debug_assert!(index < self.len(), "index out of range");
        &mut *self.buffer.data_ptr_mut().add(index)
    }

    /// Ensure the capacity is at least `capacity`. A larger capacity is
    /// allocated exactly, never rounded up; a smaller one is ignored.
    #[inline]
    pub fn reserve(&mut self, capacity: usize) {
        match self.try_reserve(capacity) {
            Ok(_) => (),
            Err(error) => error.panic(),
        }
    }

    /// Try to ensure the capacity is at least `capacity`. On failure the
    /// vector is unchanged.
    #[inline]
    pub fn try_reserve(&mut self, capacity: usize) -> Result<(), StorageError> {
        self.buffer.grow_buffer(capacity)
    }

    fn _try_grow(&mut self, additional: usize) -> Result<(), StorageError> {
        let buf_cap = self.buffer.capacity();
        let Some(buf_needed) = self.buffer.length().checked_add(additional) else {
            return Err(StorageError::CapacityLimit);
        };
        if buf_cap >= buf_needed {
            return Ok(());
        }
        self.buffer.grow_buffer(GrowDoubling::next_capacity(buf_cap, buf_needed))
    }

    /// Append an item, growing the capacity if the vector is full.
    ///
    /// # Examples
    ///
    /// ```
    /// # use intvec::IntVec;
    /// let mut vec = IntVec::new();
    /// vec.push(1);
    /// vec.push(2);
    /// vec.push(3);
    /// assert_eq!(vec, [1, 2, 3]);
    /// assert_eq!(vec.capacity(), 4);
    /// ```
    pub fn push(&mut self, item: i32) {
        match self._try_grow(1) {
            Ok(_) => (),
            Err(error) => error.panic(),
        }
        unsafe {
            self.push_unchecked(item);
        }
    }

    /// Try to append an item. If storage cannot be obtained, the item is
    /// returned in the error and the vector is unchanged.
    pub fn try_push(&mut self, item: i32) -> Result<(), UpdateError<i32>> {
        if let Err(error) = self._try_grow(1) {
            return Err(UpdateError::new(error, item));
        }
        unsafe {
            self.push_unchecked(item);
        }
        Ok(())
    }

    /// # Safety
    /// The vector must not be full.
    #[inline]
    unsafe fn push_unchecked(&mut self, item: i32) {
        let length = self.buffer.length();
        self.buffer.uninit_index(length).write(item);
        self.buffer.set_length(length + 1);
    }

    /// Remove and return the last item. The slot is retired but not released.
    ///
    /// # Examples
    ///
    /// ```
    /// # use intvec::{intvec, UnderflowError};
    /// let mut vec = intvec![4];
    /// assert_eq!(vec.pop_back(), Ok(4));
    /// assert_eq!(vec.pop_back(), Err(UnderflowError));
    /// assert_eq!(vec.capacity(), 1);
    /// ```
    pub fn pop_back(&mut self) -> Result<i32, UnderflowError> {
        let mut tail = self.buffer.length();
        if tail > 0 {
            tail -= 1;
            unsafe {
                self.buffer.set_length(tail);
                Ok(self.buffer.uninit_index(tail).assume_init_read())
            }
        } else {
            Err(UnderflowError)
        }
    }

    /// Exchange the contents and capacity of two vectors without copying.
    ///
    /// This shadows the element-wise `slice::swap`, which remains available
    /// through [`IntVec::as_mut_slice`].
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(&mut self.buffer, &mut other.buffer);
    }

    /// A cursor at the first item. A vector without storage yields the
    /// null cursor.
    #[inline]
    pub fn begin(&self) -> Cursor {
        Cursor::from_ptr(self.as_ptr() as *mut i32)
    }

    /// A cursor one past the last item.
    #[inline]
    pub fn end(&self) -> Cursor {
        self.begin().offset(self.len() as isize)
    }

    /// Try to append every item produced by `iter`. Storage for the lower
    /// bound of the iterator's size hint is obtained up front; if that fails
    /// the vector is unchanged. Items appended before a later failure remain.
    pub fn try_extend<A: IntoIterator<Item = i32>>(
        &mut self,
        iter: A,
    ) -> Result<(), StorageError> {
        let iter = iter.into_iter();
        let (min, _) = iter.size_hint();
        self._try_grow(min)?;
        for item in iter {
            self.try_push(item).map_err(|err| err.error)?;
        }
        Ok(())
    }

    /// Append a copy of every item in `items`.
    pub fn extend_from_slice(&mut self, items: &[i32]) {
        match self.try_extend_from_slice(items) {
            Ok(_) => (),
            Err(error) => error.panic(),
        }
    }

    /// Try to append a copy of every item in `items`. On failure the vector
    /// is unchanged.
    pub fn try_extend_from_slice(&mut self, items: &[i32]) -> Result<(), StorageError> {
        self._try_grow(items.len())?;
        unsafe { self.extend_unchecked(items) };
        Ok(())
    }

    /// # Safety
    /// The spare capacity must be sufficient for all of `items`.
    unsafe fn extend_unchecked(&mut self, items: &[i32]) {
        let cur_len = self.buffer.length();
        if !items.is_empty() {
            ptr::copy_nonoverlapping(
                items.as_ptr(),
                self.buffer.data_ptr_mut().add(cur_len),
                items.len(),
            );
            self.buffer.set_length(cur_len + items.len());
        }
    }
}

impl AsRef<[i32]> for IntVec {
    #[inline]
    fn as_ref(&self) -> &[i32] {
        self.as_slice()
    }
}

impl AsMut<[i32]> for IntVec {
    #[inline]
    fn as_mut(&mut self) -> &mut [i32] {
        self.as_mut_slice()
    }
}

impl Borrow<[i32]> for IntVec {
    #[inline]
    fn borrow(&self) -> &[i32] {
        self.as_slice()
    }
}

impl BorrowMut<[i32]> for IntVec {
    #[inline]
    fn borrow_mut(&mut self) -> &mut [i32] {
        self.as_mut_slice()
    }
}

impl Clone for IntVec {
    fn clone(&self) -> Self {
        match self.try_clone() {
            Ok(res) => res,
            Err(error) => error.panic(),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        if let Err(error) = self.try_clone_from(source) {
            error.panic();
        }
    }
}

impl ConstDefault for IntVec {
    const DEFAULT: Self = Self::new();
}

impl fmt::Debug for IntVec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_slice().fmt(f)
    }
}

impl Default for IntVec {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl Deref for IntVec {
    type Target = [i32];

    #[inline]
    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl DerefMut for IntVec {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl Extend<i32> for IntVec {
    fn extend<A: IntoIterator<Item = i32>>(&mut self, iter: A) {
        if let Err(error) = self.try_extend(iter) {
            error.panic();
        }
    }
}

impl<'a> Extend<&'a i32> for IntVec {
    #[inline]
    fn extend<A: IntoIterator<Item = &'a i32>>(&mut self, iter: A) {
        self.extend(iter.into_iter().copied())
    }
}

impl FromIterator<i32> for IntVec {
    #[inline]
    fn from_iter<A: IntoIterator<Item = i32>>(iter: A) -> Self {
        let mut vec = Self::new();
        vec.extend(iter);
        vec
    }
}

impl From<&[i32]> for IntVec {
    #[inline]
    fn from(data: &[i32]) -> Self {
        Self::from_slice(data)
    }
}

impl<const N: usize> From<&[i32; N]> for IntVec {
    #[inline]
    fn from(data: &[i32; N]) -> Self {
        Self::from_slice(data)
    }
}

impl<const N: usize> From<[i32; N]> for IntVec {
    #[inline]
    fn from(data: [i32; N]) -> Self {
        Self::from_slice(&data)
    }
}

impl From<IntVec> for alloc_crate::vec::Vec<i32> {
    #[inline]
    fn from(vec: IntVec) -> Self {
        vec.as_slice().to_vec()
    }
}

impl IntoIterator for IntVec {
    type Item = i32;
    type IntoIter = IntoIter;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.buffer)
    }
}

impl<'a> IntoIterator for &'a IntVec {
    type Item = &'a i32;
    type IntoIter = core::slice::Iter<'a, i32>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl<'a> IntoIterator for &'a mut IntVec {
    type Item = &'a mut i32;
    type IntoIter = core::slice::IterMut<'a, i32>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.as_mut_slice().iter_mut()
    }
}

impl PartialEq for IntVec {
    #[inline]
    fn eq(&self, other: &IntVec) -> bool {
        self.as_slice().eq(other.as_slice())
    }
}

impl Eq for IntVec {}

impl PartialEq<[i32]> for IntVec {
    #[inline]
    fn eq(&self, other: &[i32]) -> bool {
        self.as_slice().eq(other)
    }
}

impl PartialEq<&[i32]> for IntVec {
    #[inline]
    fn eq(&self, other: &&[i32]) -> bool {
        self.as_slice().eq(*other)
    }
}

impl<const N: usize> PartialEq<[i32; N]> for IntVec {
    #[inline]
    fn eq(&self, other: &[i32; N]) -> bool {
        self.as_slice().eq(&other[..])
    }
}

impl<const N: usize> PartialEq<&[i32; N]> for IntVec {
    #[inline]
    fn eq(&self, other: &&[i32; N]) -> bool {
        self.as_slice().eq(&other[..])
    }
}

impl PartialEq<IntVec> for [i32] {
    #[inline]
    fn eq(&self, other: &IntVec) -> bool {
        other.eq(self)
    }
}

impl PartialEq<IntVec> for &[i32] {
    #[inline]
    fn eq(&self, other: &IntVec) -> bool {
        other.eq(self)
    }
}

impl<const N: usize> PartialEq<IntVec> for [i32; N] {
    #[inline]
    fn eq(&self, other: &IntVec) -> bool {
        other.eq(self)
    }
}

impl PartialEq<alloc_crate::vec::Vec<i32>> for IntVec {
    #[inline]
    fn eq(&self, other: &alloc_crate::vec::Vec<i32>) -> bool {
        self.as_slice().eq(other.as_slice())
    }
}

impl PartialEq<IntVec> for alloc_crate::vec::Vec<i32> {
    #[inline]
    fn eq(&self, other: &IntVec) -> bool {
        other.eq(self)
    }
}

#[cfg(feature = "zeroize")]
impl zeroize::Zeroize for IntVec {
    /// Zero every allocated slot and truncate to zero items. The capacity is
    /// retained.
    fn zeroize(&mut self) {
        zeroize::Zeroize::zeroize(self.buffer.as_uninit_slice());
        self.clear();
    }
}
