//! `IntVec` backing buffer.

use core::alloc::Layout;
use core::mem::{self, MaybeUninit};
use core::ptr::{self, NonNull};
use core::slice;

use crate::alloc::{allocate, release};
use crate::error::StorageError;

/// The header associated with each `IntVec` buffer.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) struct VecHeader {
    /// The number of allocated slots.
    pub capacity: usize,
    /// The number of initialized items.
    pub length: usize,
}

impl VecHeader {
    pub const EMPTY: Self = VecHeader {
        capacity: 0,
        length: 0,
    };

    #[inline]
    pub fn layout(&self) -> Result<Layout, StorageError> {
        Layout::array::<i32>(self.capacity).map_err(StorageError::LayoutError)
    }
}

/// An exclusively owned allocation of `capacity` integer slots, of which the
/// first `length` are initialized. A zero capacity buffer holds no allocation
/// and carries a dangling data pointer.
#[derive(Debug)]
pub(crate) struct IntBuffer {
    header: VecHeader,
    data: NonNull<i32>,
}

impl IntBuffer {
    pub const EMPTY: Self = Self {
        header: VecHeader::EMPTY,
        data: NonNull::dangling(),
    };

    /// Allocate a buffer with exactly `capacity` slots and a length of zero.
    /// When `zeroed` is set, every slot is initialized to zero.
    pub fn try_alloc(capacity: usize, zeroed: bool) -> Result<Self, StorageError> {
        if capacity == 0 {
            return Ok(Self::EMPTY);
        }
        let header = VecHeader {
            capacity,
            length: 0,
        };
        let layout = header.layout()?;
        let data = allocate(layout, zeroed)?;
        Ok(Self {
            header,
            data: data.cast(),
        })
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.header.capacity
    }

    #[inline]
    pub fn length(&self) -> usize {
        self.header.length
    }

    /// Set the current length of the buffer.
    ///
    /// # Safety
    /// `length` must not exceed the capacity, and every slot below `length`
    /// must have been initialized.
    #[inline]
    pub unsafe fn set_length(&mut self, length: usize) {
        debug_assert!(length <= self.header.capacity);
        self.header.length = length;
    }

    #[inline]
    pub fn data_ptr(&self) -> *const i32 {
        self.data.as_ptr()
    }

    #[inline]
    pub fn data_ptr_mut(&mut self) -> *mut i32 {
        self.data.as_ptr()
    }

    #[inline]
    pub fn as_slice(&self) -> &[i32] {
        unsafe { slice::from_raw_parts(self.data_ptr(), self.length()) }
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [i32] {
        unsafe { slice::from_raw_parts_mut(self.data_ptr_mut(), self.length()) }
    }

    /// Access every allocated slot, initialized or not.
    #[cfg(feature = "zeroize")]
    #[inline]
    pub fn as_uninit_slice(&mut self) -> &mut [MaybeUninit<i32>] {
        unsafe { slice::from_raw_parts_mut(self.data_ptr_mut().cast(), self.capacity()) }
    }

    /// Access a slot of the buffer as a `MaybeUninit<i32>`.
    ///
    /// # Safety
    /// The index must be within the bounds of the buffer's capacity, otherwise a
    /// memory access error may occur.
    #[inline]
    pub unsafe fn uninit_index(&mut self, index: usize) -> &mut MaybeUninit<i32> {
        &mut *self.data_ptr_mut().add(index).cast()
    }

    /// Create a new buffer of exactly `capacity` slots holding a copy of the
    /// initialized items of this buffer. `capacity` must not be smaller than
    /// the current length.
    pub fn try_copy(&self, capacity: usize) -> Result<Self, StorageError> {
        debug_assert!(capacity >= self.length());
        let mut copy = Self::try_alloc(capacity, false)?;
        let length = self.length();
        if length > 0 {
            unsafe {
                ptr::copy_nonoverlapping(self.data_ptr(), copy.data_ptr_mut(), length);
                copy.set_length(length);
            }
        }
        Ok(copy)
    }

    /// Replace the allocation with one of exactly `capacity` slots, carrying
    /// over the initialized items. A capacity which does not exceed the current
    /// capacity leaves the buffer untouched. On failure the buffer is unchanged.
    pub fn grow_buffer(&mut self, capacity: usize) -> Result<(), StorageError> {
        if capacity <= self.capacity() {
            return Ok(());
        }
        let grown = self.try_copy(capacity)?;
        drop(mem::replace(self, grown));
        Ok(())
    }
}

// SAFETY: the allocation is exclusively owned and holds plain integers.
unsafe impl Send for IntBuffer {}
unsafe impl Sync for IntBuffer {}

impl Default for IntBuffer {
    #[inline]
    fn default() -> Self {
        Self::EMPTY
    }
}

impl Drop for IntBuffer {
    fn drop(&mut self) {
        if self.header.capacity > 0 {
            // SAFETY: a non-zero capacity buffer was produced by `allocate`
            // using this layout, which was computed successfully at that time.
            unsafe {
                let layout = Layout::array::<i32>(self.header.capacity).unwrap_unchecked();
                release(self.data.cast(), layout);
            }
        }
    }
}
