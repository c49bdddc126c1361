//! Pseudo-random streams used to build noise tables.

mod xorshift;

pub use xorshift::XorShift32;
