#[cfg(test)]
mod tests;

use crate::frame::{Frame, FrameContent};
use crate::header::{ExtendedHeader, Id3v2TagFlags, Id3v2Version};
use crate::items::{AttachedPictureFrame, TextInformationFrame};

/// A decoded ID3v2 tag
///
/// The tag is never modified after it is read. Frames are kept in the order they appear in
/// the tag, duplicates included.
///
/// ## Supported versions
///
/// Only ID3v2.3 and ID3v2.4 tags are read. Both are read with the ID3v2.4 frame layout
/// (synchsafe frame sizes, ID3v2.4 flag positions).
///
/// ## Frame contents
///
/// Only text ("T...", excluding "TXXX") and attached picture ("APIC") frames are decoded, the
/// content of every other frame is kept as [`FrameContent::Unknown`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Id3v2Tag {
	pub(crate) version: Id3v2Version,
	pub(crate) flags: Id3v2TagFlags,
	pub(crate) extended_header: Option<ExtendedHeader>,
	pub(crate) frames: Vec<Frame>,
}

impl IntoIterator for Id3v2Tag {
	type Item = Frame;
	type IntoIter = std::vec::IntoIter<Frame>;

	fn into_iter(self) -> Self::IntoIter {
		self.frames.into_iter()
	}
}

impl<'a> IntoIterator for &'a Id3v2Tag {
	type Item = &'a Frame;
	type IntoIter = std::slice::Iter<'a, Frame>;

	fn into_iter(self) -> Self::IntoIter {
		self.frames.iter()
	}
}

impl Id3v2Tag {
	/// The version of the tag, as stored in its header
	pub fn version(&self) -> Id3v2Version {
		self.version
	}

	/// The tag-wide flags
	pub fn flags(&self) -> Id3v2TagFlags {
		self.flags
	}

	/// The extended header, if the tag has one
	pub fn extended_header(&self) -> Option<&ExtendedHeader> {
		self.extended_header.as_ref()
	}

	/// All frames, in the order they were read
	pub fn frames(&self) -> &[Frame] {
		&self.frames
	}

	/// Returns the number of frames in the tag
	pub fn len(&self) -> usize {
		self.frames.len()
	}

	/// Whether the tag has no frames
	pub fn is_empty(&self) -> bool {
		self.frames.is_empty()
	}

	/// Returns an iterator over the frames
	pub fn iter(&self) -> impl Iterator<Item = &Frame> {
		self.frames.iter()
	}

	/// Consume the tag, returning its frames
	pub fn into_frames(self) -> Vec<Frame> {
		self.frames
	}
}

impl Id3v2Tag {
	/// Gets the first [`Frame`] with the id
	pub fn get(&self, id: &str) -> Option<&Frame> {
		self.frames.iter().find(|f| f.id_str() == id)
	}

	/// Gets every [`Frame`] with the id
	pub fn get_all<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a Frame> + 'a {
		self.frames.iter().filter(move |f| f.id_str() == id)
	}

	/// Gets the text for a frame
	///
	/// NOTE: In ID3v2.4, there could be multiple values separated by null characters (`'\0'`).
	///       Use [`TextInformationFrame::values`] to split them.
	///
	/// NOTE: This will not work for `TXXX` frames, they are never decoded.
	///
	/// # Examples
	///
	/// ```rust
	/// # fn main() -> id3v2_decode::error::Result<()> {
	/// #[rustfmt::skip]
	/// let bytes = [
	/// 	b'I', b'D', b'3', 4, 0, 0, 0, 0, 0, 17,
	/// 	b'T', b'I', b'T', b'2', 0, 0, 0, 7, 0, 0,
	/// 	0, b'T', b'i', b't', b'l', b'e', 0,
	/// ];
	///
	/// let tag = id3v2_decode::parse(&bytes)?.expect("should be a tag");
	/// assert_eq!(tag.get_text("TIT2"), Some("Title"));
	/// assert_eq!(tag.get_text("TPE1"), None);
	/// # Ok(()) }
	/// ```
	pub fn get_text(&self, id: &str) -> Option<&str> {
		if let Some(FrameContent::Text(TextInformationFrame { value, .. })) =
			self.get(id).map(Frame::content)
		{
			return Some(value);
		}

		None
	}

	/// Returns an iterator over all attached pictures, in the order they were read
	pub fn pictures(&self) -> impl Iterator<Item = &AttachedPictureFrame> {
		self.frames.iter().filter_map(|f| f.content().as_picture())
	}
}
