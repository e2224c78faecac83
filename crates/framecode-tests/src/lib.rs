//! Integration test crate for Framecode.
//!
//! This crate exists solely to hold end-to-end tests that drive the public
//! API the way a front end does: text in, arithmetic, text out.

#[cfg(test)]
mod roundtrip;

#[cfg(test)]
mod arithmetic;
