//! Setting handlers for each configuration key.

pub mod simple;

pub use simple::*;
