//! Unit Tests Module
//!
//! Grammar, builder and token-type façade tests against the public API.

pub mod encoder;
