//! A growable, contiguous vector of integers with random-access cursors.
//!
//! [`IntVec`] owns a single allocation sized to its capacity. Appending grows
//! the capacity from zero to one and then by doubling; every other change of
//! capacity is explicit. Iteration is available both through the standard
//! slice iterators and through raw [`Cursor`] positions obtained with
//! [`IntVec::begin`] and [`IntVec::end`].

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

#[doc = include_str!("../README.md")]
#[cfg(doctest)]
struct _ReadmeDoctests;

#[cfg(test)]
#[macro_use]
extern crate std;

extern crate alloc as alloc_crate;

pub(crate) mod alloc;

pub mod capacity;

pub(crate) mod error;

pub mod vec;

pub use self::{
    error::{StorageError, UnderflowError, UpdateError},
    vec::{Cursor, CursorIter, IntVec, IntoIter},
};
