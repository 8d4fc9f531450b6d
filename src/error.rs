//! Error handling.

use core::alloc::{Layout, LayoutError};
use core::fmt;

/// An enumeration of error types raised when storage cannot be obtained.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StorageError {
    /// A memory allocation failed.
    AllocError(Layout),
    /// The requested capacity cannot be represented.
    CapacityLimit,
    /// The requested capacity did not produce an allocatable layout.
    LayoutError(LayoutError),
}

impl StorageError {
    /// Generic description of this error.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AllocError(_) => "Allocation error",
            Self::CapacityLimit => "Exceeded storage capacity limit",
            Self::LayoutError(_) => "Layout error",
        }
    }

    /// Generate a panic with this error as the reason.
    #[cold]
    #[inline(never)]
    pub fn panic(self) -> ! {
        if let Self::AllocError(layout) = self {
            crate::alloc::handle_alloc_error(layout);
        } else {
            panic!("{}", self.as_str())
        }
    }
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<LayoutError> for StorageError {
    fn from(err: LayoutError) -> Self {
        Self::LayoutError(err)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for StorageError {}

/// The error raised when removing the last element of an empty vector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UnderflowError;

impl UnderflowError {
    /// Generic description of this error.
    pub fn as_str(&self) -> &'static str {
        "Cannot pop from empty vector"
    }

    /// Generate a panic with this error as the reason.
    #[cold]
    #[inline(never)]
    pub fn panic(self) -> ! {
        panic!("{}", self.as_str())
    }
}

impl fmt::Display for UnderflowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(feature = "std")]
impl std::error::Error for UnderflowError {}

/// An error raised by collection update operations when appropriate
/// storage was not available. Includes the value that could not be stored.
#[derive(Clone)]
pub struct UpdateError<T> {
    pub(crate) error: StorageError,
    pub(crate) value: T,
}

impl<T> UpdateError<T> {
    pub(crate) fn new(error: StorageError, value: T) -> Self {
        Self { error, value }
    }

    /// Generic description of this error
    pub fn as_str(&self) -> &'static str {
        "Update error"
    }

    /// Get a reference to the contained `StorageError`
    pub fn error(&self) -> &StorageError {
        &self.error
    }

    /// Unwrap the inner value of this error
    pub fn into_value(self) -> T {
        self.value
    }

    /// Generate a panic with this error as the reason
    #[cold]
    #[inline(never)]
    pub fn panic(self) -> ! {
        self.error.panic()
    }
}

impl<T> fmt::Debug for UpdateError<T> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UpdateError")
            .field("error", &self.error)
            .finish_non_exhaustive()
    }
}

impl<T> fmt::Display for UpdateError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_fmt(format_args!("{}: {}", self.as_str(), self.error))
    }
}

#[cfg(feature = "std")]
impl<T> std::error::Error for UpdateError<T> {}

#[cfg(test)]
mod tests {
    use super::{StorageError, UnderflowError, UpdateError};
    use core::alloc::Layout;

    #[test]
    #[should_panic(expected = "memory allocation of 8 bytes failed")]
    fn alloc_error_panic() {
        // Under test, crate::alloc::handle_alloc_error is an explicit panic
        // so that #[should_panic] can observe it.
        let a = StorageError::AllocError(Layout::new::<u64>());
        a.panic();
    }

    #[test]
    #[should_panic(expected = "Layout error")]
    fn layout_error_panic() {
        let err = Layout::from_size_align(0, 3).expect_err("expected layout error");
        let a = StorageError::LayoutError(err);
        a.panic();
    }

    #[test]
    #[should_panic(expected = "Cannot pop from empty vector")]
    fn underflow_panic() {
        UnderflowError.panic();
    }

    #[test]
    fn update_error_returns_value() {
        let err = UpdateError::new(StorageError::CapacityLimit, 17i32);
        assert_eq!(err.error(), &StorageError::CapacityLimit);
        assert_eq!(
            format!("{}", err),
            "Update error: Exceeded storage capacity limit"
        );
        assert_eq!(err.into_value(), 17);
    }
}
