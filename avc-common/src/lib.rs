//! An internal crate containing the bit-level primitives shared by the crates of the
//! avc project.
//!
//! This crate is not meant for external consumption.

#![no_std]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod bit;
