//! Public entry points for foreign function interfaces.

pub mod accessors;
pub mod callbacks;
pub mod ffi;
pub mod handles;
