//! ID3v2 frames and their headers
//!
//! Every frame starts with a 10 byte header:
//!
//! | Bytes | Field                           |
//! |-------|---------------------------------|
//! | 0..4  | [`FrameId`]                     |
//! | 4..8  | Synchsafe content size          |
//! | 8..10 | [`FrameFlags`] (status, format) |

pub(crate) mod content;
pub(crate) mod header;
pub(crate) mod read;

use crate::items::{AttachedPictureFrame, TextInformationFrame, UnknownFrame};
pub use header::{FrameHeader, FrameId};

/// Represents an `ID3v2` frame
///
/// The header is always kept as it was read, the content is decoded based on the frame ID.
/// See [`FrameContent`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Frame {
	pub(crate) header: FrameHeader,
	pub(crate) content: FrameContent,
}

impl Frame {
	/// Create a new [`Frame`] from a header and its decoded content
	pub const fn new(header: FrameHeader, content: FrameContent) -> Self {
		Self { header, content }
	}

	/// Get the ID of the frame
	pub const fn id(&self) -> &FrameId {
		&self.header.id
	}

	/// Extract the string from the [`FrameId`]
	pub fn id_str(&self) -> &str {
		self.header.id.as_str()
	}

	/// Get the flags for the frame
	pub const fn flags(&self) -> FrameFlags {
		self.header.flags
	}

	/// Get the frame header
	pub const fn header(&self) -> &FrameHeader {
		&self.header
	}

	/// Get the decoded content of the frame
	pub const fn content(&self) -> &FrameContent {
		&self.content
	}

	/// Consume the frame, returning its content
	pub fn into_content(self) -> FrameContent {
		self.content
	}
}

/// The decoded content of a [`Frame`]
///
/// The variant is decided by the frame ID alone:
///
/// * "T..." (excluding "TXXX") - [`FrameContent::Text`]
/// * "APIC" - [`FrameContent::AttachedPicture`]
/// * Everything else, including "TXXX" - [`FrameContent::Unknown`]
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum FrameContent {
	/// Represents a "T..." (excluding TXXX) frame
	Text(TextInformationFrame),
	/// Represents an "APIC" frame
	AttachedPicture(AttachedPictureFrame),
	/// The raw content of any other frame
	Unknown(UnknownFrame),
}

impl FrameContent {
	/// Get the content as a [`TextInformationFrame`], if it is one
	pub fn as_text(&self) -> Option<&TextInformationFrame> {
		match self {
			Self::Text(text) => Some(text),
			_ => None,
		}
	}

	/// Get the content as an [`AttachedPictureFrame`], if it is one
	pub fn as_picture(&self) -> Option<&AttachedPictureFrame> {
		match self {
			Self::AttachedPicture(picture) => Some(picture),
			_ => None,
		}
	}

	/// Get the content as an [`UnknownFrame`], if it is one
	pub fn as_unknown(&self) -> Option<&UnknownFrame> {
		match self {
			Self::Unknown(unknown) => Some(unknown),
			_ => None,
		}
	}

	/// A short name for the kind of content, used in logs
	pub fn name(&self) -> &'static str {
		match self {
			Self::Text(_) => "Text",
			Self::AttachedPicture(_) => "AttachedPicture",
			Self::Unknown(_) => "Unknown",
		}
	}
}

impl From<TextInformationFrame> for FrameContent {
	fn from(value: TextInformationFrame) -> Self {
		Self::Text(value)
	}
}

impl From<AttachedPictureFrame> for FrameContent {
	fn from(value: AttachedPictureFrame) -> Self {
		Self::AttachedPicture(value)
	}
}

impl From<UnknownFrame> for FrameContent {
	fn from(value: UnknownFrame) -> Self {
		Self::Unknown(value)
	}
}

/// What should happen to a frame when the tag or file is altered
#[derive(Default, Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Preservation {
	/// The frame should be kept (flag bit clear)
	#[default]
	Preserved,
	/// The frame should be discarded (flag bit set)
	Discarded,
}

impl Preservation {
	fn from_bit(set: bool) -> Self {
		if set { Self::Discarded } else { Self::Preserved }
	}
}

/// Various flags to describe the content of an item
///
/// NOTE: The flags are only decoded, the frame content is never decompressed, decrypted, or
/// resynchronised. Any extra bytes a flag announces (group identifier, encryption method,
/// data length indicator) remain at the start of the content.
#[derive(Default, Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct FrameFlags {
	/// Whether to keep the frame when the tag is altered
	pub tag_alter_preservation: Preservation,
	/// Whether to keep the frame when the file is altered
	pub file_alter_preservation: Preservation,
	/// Item cannot be written to
	pub read_only: bool,
	/// The frame belongs to a group
	pub grouping: bool,
	/// Frame is zlib compressed
	pub compression: bool,
	/// Frame is encrypted
	pub encryption: bool,
	/// Frame is unsynchronised
	///
	/// In short, this makes all "0xFF X (X >= 0xE0)" combinations into "0xFF 0x00 X" to avoid confusion
	/// with the MPEG frame header, which is often identified by its "frame sync" (11 set bits).
	pub unsynchronisation: bool,
	/// Frame has a data length indicator
	pub data_length_indicator: bool,
}

impl FrameFlags {
	/// Parse the flags from an ID3v2.4 frame
	///
	/// The first byte holds the status flags, the second the format flags.
	///
	/// # Examples
	///
	/// ```rust
	/// use id3v2_decode::{FrameFlags, Preservation};
	///
	/// let flags = FrameFlags::parse_id3v24(0x4001);
	/// assert_eq!(flags.tag_alter_preservation, Preservation::Discarded);
	/// assert_eq!(flags.file_alter_preservation, Preservation::Preserved);
	/// assert!(flags.data_length_indicator);
	/// ```
	pub fn parse_id3v24(flags: u16) -> Self {
		FrameFlags {
			tag_alter_preservation: Preservation::from_bit(flags & 0x4000 == 0x4000),
			file_alter_preservation: Preservation::from_bit(flags & 0x2000 == 0x2000),
			read_only: flags & 0x1000 == 0x1000,
			grouping: flags & 0x0040 == 0x0040,
			compression: flags & 0x0008 == 0x0008,
			encryption: flags & 0x0004 == 0x0004,
			unsynchronisation: flags & 0x0002 == 0x0002,
			data_length_indicator: flags & 0x0001 == 0x0001,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::{FrameFlags, Preservation};

	#[test_log::test]
	fn no_flags() {
		assert_eq!(FrameFlags::parse_id3v24(0), FrameFlags::default());
	}

	#[test_log::test]
	fn every_flag() {
		let flags = FrameFlags::parse_id3v24(0xFFFF);

		assert_eq!(flags.tag_alter_preservation, Preservation::Discarded);
		assert_eq!(flags.file_alter_preservation, Preservation::Discarded);
		assert!(flags.read_only);
		assert!(flags.grouping);
		assert!(flags.compression);
		assert!(flags.encryption);
		assert!(flags.unsynchronisation);
		assert!(flags.data_length_indicator);
	}

	#[test_log::test]
	fn status_flags() {
		let flags = FrameFlags::parse_id3v24(0x3000);

		assert_eq!(flags.tag_alter_preservation, Preservation::Preserved);
		assert_eq!(flags.file_alter_preservation, Preservation::Discarded);
		assert!(flags.read_only);
		assert!(!flags.grouping);
	}

	#[test_log::test]
	fn undefined_bits_are_ignored() {
		// ID3v2.3 bit positions, and the unused bits of ID3v2.4
		assert_eq!(FrameFlags::parse_id3v24(0x8FB0), FrameFlags::default());
	}
}
