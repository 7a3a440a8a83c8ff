//! Decode ID3v2.3 and ID3v2.4 tags from an in-memory buffer.
//!
//! The caller is responsible for locating the tag and handing over its bytes, starting with the
//! "ID3" signature. [`read_header`] can be used to find out how many bytes that is.
//!
//! # Examples
//!
//! ## Reading a tag
//!
//! ```rust
//! # fn main() -> id3v2_decode::error::Result<()> {
//! use id3v2_decode::{FrameContent, TextEncoding};
//!
//! #[rustfmt::skip]
//! let bytes = [
//! 	// Header: ID3v2.3, no flags, 21 bytes
//! 	b'I', b'D', b'3', 3, 0, 0, 0, 0, 0, 21,
//! 	// A "TIT2" frame holding "Title"
//! 	b'T', b'I', b'T', b'2', 0, 0, 0, 7, 0, 0,
//! 	0, b'T', b'i', b't', b'l', b'e', 0,
//! 	// Padding
//! 	0, 0, 0, 0,
//! ];
//!
//! let tag = id3v2_decode::parse(&bytes)?.expect("should be a tag");
//! assert_eq!(tag.version().major, 3);
//! assert_eq!(tag.len(), 1);
//!
//! let FrameContent::Text(title) = tag.frames()[0].content() else {
//! 	unreachable!()
//! };
//! assert_eq!(title.encoding, TextEncoding::Latin1);
//! assert_eq!(title.value, "Title");
//! # Ok(()) }
//! ```
//!
//! ## Finding the tag size
//!
//! ```rust
//! # fn main() -> id3v2_decode::error::Result<()> {
//! let start_of_file = [b'I', b'D', b'3', 4, 0, 0, 0, 0, 0x01, 0x00];
//!
//! if let Some(header) = id3v2_decode::read_header(&start_of_file)? {
//! 	// Read `header.full_tag_size()` bytes from the file, then call `id3v2_decode::parse`
//! 	assert_eq!(header.full_tag_size(), 138);
//! }
//! # Ok(()) }
//! ```
//!
//! # Malformed tags
//!
//! By default, frames that can't be decoded are skipped, see [`ParsingMode`](config::ParsingMode)
//! for the other options.
//!
//! # Important notes
//!
//! * Unsynchronisation, compression, and encryption are reported through the flags, but the
//!   frame content is never transformed.
//! * Only text ("T...", excluding "TXXX") and attached picture ("APIC") frames are decoded.

pub mod config;
pub mod error;
pub mod frame;
mod header;
mod items;
pub(crate) mod macros;
pub mod picture;
mod read;
mod restrictions;
mod tag;
pub mod util;

pub use read::{parse, parse_with_options, read_header};

pub use frame::{Frame, FrameContent, FrameFlags, FrameHeader, FrameId, Preservation};
pub use header::{ExtendedHeader, Id3v2Header, Id3v2TagFlags, Id3v2Version};
pub use items::{AttachedPictureFrame, TextInformationFrame, UnknownFrame};
pub use restrictions::{
	ImageSizeRestrictions, TagRestrictions, TagSizeRestrictions, TextSizeRestrictions,
};
pub use tag::Id3v2Tag;
pub use util::text::TextEncoding;
