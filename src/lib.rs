//! Fixed-width 128-bit integer arithmetic for number theoretic computation.
//!
//! [`UInt128`] is an unsigned 128-bit integer stored as two 64-bit limbs and
//! [`Int128`] is its two's complement signed counterpart. Beyond the usual
//! operator surface both types carry the kernels that repeated number
//! theoretic work leans on: word-exact division ladders, a Lehmer gcd,
//! modular arithmetic with a Montgomery form, and exact integer square and
//! cube roots.
//!
//! Arithmetic wraps modulo 2^128. Division by zero panics.

pub mod error;
pub mod int128;
pub mod numeric;
pub mod uint128;

mod div;
mod gcd;
mod limb;
mod modular;
mod mul;
mod root;
mod u256;

pub use int128::Int128;
pub use uint128::UInt128;
