//! # bitarith-math
//!
//! Wrapping `i32` arithmetic computed from bitwise operators alone.
//!
//! - [`add`]: carry-propagation loop (`a ^ b` plus `(a & b) << 1`)
//! - [`subtract`]: two's-complement negation (`!b + 1`) fed back into [`add`]
//! - [`divide`]: shift-and-subtract long division, truncating toward zero
//!
//! Results match the native `wrapping_*` operators bit-for-bit. The only
//! fallible operation is [`divide`], which returns [`ArithmeticError`] for a
//! zero divisor.

pub mod division;
pub mod ops;

// Re-export the primitives at the crate root
pub use division::{divide, ArithmeticError};
pub use ops::{add, subtract};
