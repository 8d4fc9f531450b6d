//! Support for memory allocation.

use core::alloc::Layout;
use core::ptr::NonNull;

#[cfg(not(feature = "allocator-api2"))]
use alloc_crate::alloc::{
    alloc as raw_alloc, alloc_zeroed as raw_alloc_zeroed, dealloc as raw_dealloc,
};

#[cfg(feature = "allocator-api2")]
use allocator_api2::alloc::{Allocator, Global};

use crate::error::StorageError;

#[cfg(not(test))]
pub use alloc_crate::alloc::handle_alloc_error;

#[cfg(test)]
/// Custom allocation error handler.
pub fn handle_alloc_error(layout: Layout) -> ! {
    panic!("memory allocation of {} bytes failed", layout.size());
}

/// Allocate a block of memory fitting `layout` from the global allocator.
/// When `zeroed` is set, the block is filled with zero bytes.
///
/// The layout must have a non-zero size.
#[cfg(not(feature = "allocator-api2"))]
#[inline]
pub(crate) fn allocate(layout: Layout, zeroed: bool) -> Result<NonNull<u8>, StorageError> {
    debug_assert!(layout.size() > 0, "zero-sized allocation");
    // SAFETY: the layout has a non-zero size.
    let ptr = unsafe {
        if zeroed {
            raw_alloc_zeroed(layout)
        } else {
            raw_alloc(layout)
        }
    };
    NonNull::new(ptr).ok_or(StorageError::AllocError(layout))
}

/// Allocate a block of memory fitting `layout` from the global allocator.
/// When `zeroed` is set, the block is filled with zero bytes.
///
/// The layout must have a non-zero size.
#[cfg(feature = "allocator-api2")]
#[inline]
pub(crate) fn allocate(layout: Layout, zeroed: bool) -> Result<NonNull<u8>, StorageError> {
    debug_assert!(layout.size() > 0, "zero-sized allocation");
    let res = if zeroed {
        Global.allocate_zeroed(layout)
    } else {
        Global.allocate(layout)
    };
    match res {
        Ok(ptr) => Ok(ptr.cast()),
        Err(_) => Err(StorageError::AllocError(layout)),
    }
}

/// Release a block of memory previously returned by `allocate`.
///
/// # Safety
/// `ptr` must have been produced by `allocate` with the same `layout`, and
/// must not be used after this call.
#[inline]
pub(crate) unsafe fn release(ptr: NonNull<u8>, layout: Layout) {
    if layout.size() > 0 {
        #[cfg(not(feature = "allocator-api2"))]
        raw_dealloc(ptr.as_ptr(), layout);
        #[cfg(feature = "allocator-api2")]
        Global.deallocate(ptr, layout);
    }
}
