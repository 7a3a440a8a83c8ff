//! Various utilities for reading ID3v2 tags

pub(crate) mod alloc;
pub mod synchsafe;
pub(crate) mod text;
