//! A small vector math library for graphics, physics, and simulation code.
//!
//! This library provides fixed-size 2-, 3- and 4-component numeric vectors as a single
//! const-generic [`Vector`] type, along with the usual arithmetic operators, geometric operations
//! (dot product, cross product, length, normalization), and explicit conversion between element
//! types.
//!
//! # Goals & Non-Goals
//!
//! - Plain value types only: vectors are `Copy`, live on the stack, and involve no allocation,
//!   locking, or shared ownership.
//! - Named component access (`v.x`, `v.r`, `v.width`) and indexed access (`v[0]`) always refer to
//!   the same underlying storage.
//! - Be generic over the element type, but don't try to support non-[`Copy`] numeric types (eg.
//!   "big decimals").
//! - Never second-guess scalar arithmetic: division by zero, overflow, and friends behave exactly
//!   as they do on the element type. The only checked failure is an out-of-bounds index, which
//!   panics.
//! - No matrices, quaternions, or SIMD; dynamically-sized vectors are out of scope.

mod traits;
mod vector;

pub use traits::*;
pub use vector::*;
