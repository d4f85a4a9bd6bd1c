#![cfg_attr(not(feature = "std"), no_std)]

//! Helpers shared by the digit signature and range proof crates: field arithmetic over vectors,
//! fallible sampling of field elements, the random oracle used for Fiat-Shamir challenges and
//! serde support for arkworks objects.

extern crate alloc;

#[macro_use]
pub mod macros;
pub mod ff;
pub mod hashing_utils;
pub mod misc;
pub mod msm;
pub mod serde_utils;
