//! Contains the errors that can arise while decoding a tag
//!
//! The primary error is [`Id3Error`]. The type of error is determined by [`ErrorKind`],
//! and errors that arise within a frame carry a [`FrameLocation`].

use crate::frame::FrameId;

use std::collections::TryReserveError;
use std::fmt::{Debug, Display, Formatter};

/// Alias for `Result<T, Id3Error>`
pub type Result<T> = std::result::Result<T, Id3Error>;

/// The types of errors that can occur
#[derive(Debug)]
#[non_exhaustive]
pub enum ErrorKind {
	/// Attempting to copy an abnormally large amount of data
	///
	/// See [`ParseOptions::allocation_limit`](crate::config::ParseOptions::allocation_limit)
	TooMuchData,
	/// Errors that arise while decoding text
	TextDecode(&'static str),
	/// Errors that arise while reading ID3v2 tags
	Id3v2(Id3v2Error),

	// Conversions for external errors
	/// Failure to allocate enough memory
	Alloc(TryReserveError),
}

/// The types of errors that can occur while reading ID3v2 tags
#[derive(Debug)]
#[non_exhaustive]
pub enum Id3v2ErrorKind {
	// Header
	/// Arises when an unsupported ID3v2 version is found
	///
	/// Only ID3v2.3 and ID3v2.4 share the frame layout this crate reads.
	BadId3v2Version(u8, u8),
	/// Arises when the "ID3" signature is present, but the 10 byte header is cut short
	TruncatedHeader,
	/// Arises when the tag declares more bytes than the input holds
	BadTagSize {
		/// The size stored in the header
		declared: u32,
		/// The number of bytes available after the header
		available: usize,
	},
	/// Arises when an extended header has an invalid size (must be >= 4 bytes and no larger than the tag)
	BadExtendedHeaderSize,
	/// Arises when a size field has the high bit of one of its bytes set
	BadSynchsafeInteger([u8; 4]),

	// Frame
	/// Arises when a frame ID contains invalid characters (must be within `'A'..'Z'` or `'0'..'9'`)
	BadFrameId(Vec<u8>),
	/// Arises when a frame doesn't have enough data
	BadFrameLength,
	/// Arises when a text encoding byte is not one of the 4 defined encodings
	BadTextEncoding(u8),
}

impl Display for Id3v2ErrorKind {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			// Header
			Self::BadId3v2Version(major, revision) => write!(
				f,
				"Found an unsupported version (v{major}.{revision}), expected a major revision in: \
				 (3, 4)"
			),
			Self::TruncatedHeader => write!(f, "Tag header is shorter than 10 bytes"),
			Self::BadTagSize {
				declared,
				available,
			} => write!(
				f,
				"Tag declares {declared} bytes, but only {available} are available"
			),
			Self::BadExtendedHeaderSize => {
				write!(f, "Found an extended header with an invalid size")
			},
			Self::BadSynchsafeInteger(bytes) => {
				write!(f, "Found a size that is not synchsafe: {bytes:02X?}")
			},

			// Frame
			Self::BadFrameId(frame_id) => write!(f, "Failed to parse a frame ID: 0x{frame_id:x?}"),
			Self::BadFrameLength => write!(
				f,
				"Frame isn't long enough to extract the necessary information"
			),
			Self::BadTextEncoding(encoding) => {
				write!(f, "Found an invalid text encoding: {encoding}")
			},
		}
	}
}

/// An error that arises while reading an ID3v2 tag
pub struct Id3v2Error {
	kind: Id3v2ErrorKind,
}

impl Id3v2Error {
	/// Create a new `Id3v2Error` from an [`Id3v2ErrorKind`]
	#[must_use]
	pub const fn new(kind: Id3v2ErrorKind) -> Self {
		Self { kind }
	}

	/// Returns the [`Id3v2ErrorKind`]
	pub fn kind(&self) -> &Id3v2ErrorKind {
		&self.kind
	}
}

impl Debug for Id3v2Error {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "ID3v2: {:?}", self.kind)
	}
}

impl Display for Id3v2Error {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "ID3v2: {}", self.kind)
	}
}

/// Where in the input a frame error occurred
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameLocation {
	id: Option<FrameId>,
	offset: usize,
}

impl FrameLocation {
	/// The ID of the offending frame, if it could be read
	pub fn id(&self) -> Option<&FrameId> {
		self.id.as_ref()
	}

	/// The offset of the frame header from the start of the input
	pub fn offset(&self) -> usize {
		self.offset
	}
}

impl Display for FrameLocation {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match &self.id {
			Some(id) => write!(f, "frame `{id}` at offset {}", self.offset),
			None => write!(f, "frame at offset {}", self.offset),
		}
	}
}

/// Errors that could occur while decoding a tag
pub struct Id3Error {
	pub(crate) kind: ErrorKind,
	pub(crate) frame: Option<FrameLocation>,
}

impl Id3Error {
	/// Create an `Id3Error` from an [`ErrorKind`]
	///
	/// # Examples
	///
	/// ```rust
	/// use id3v2_decode::error::{ErrorKind, Id3Error};
	///
	/// let too_much_data = Id3Error::new(ErrorKind::TooMuchData);
	/// assert!(too_much_data.frame().is_none());
	/// ```
	#[must_use]
	pub const fn new(kind: ErrorKind) -> Self {
		Self { kind, frame: None }
	}

	/// Returns the [`ErrorKind`]
	pub fn kind(&self) -> &ErrorKind {
		&self.kind
	}

	/// Returns the location of the frame that caused the error, if the error arose within a frame
	pub fn frame(&self) -> Option<&FrameLocation> {
		self.frame.as_ref()
	}

	/// Returns the [`Id3v2ErrorKind`], if this is an ID3v2 error
	pub fn id3v2_kind(&self) -> Option<&Id3v2ErrorKind> {
		match &self.kind {
			ErrorKind::Id3v2(err) => Some(err.kind()),
			_ => None,
		}
	}

	// The first location attached wins, it is always the innermost one
	pub(crate) fn at_frame(mut self, id: Option<&FrameId>, offset: usize) -> Self {
		if self.frame.is_none() {
			self.frame = Some(FrameLocation {
				id: id.cloned(),
				offset,
			});
		}

		self
	}
}

impl std::error::Error for Id3Error {}

impl Debug for Id3Error {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match &self.frame {
			Some(frame) => write!(f, "{:?} ({frame:?})", self.kind),
			None => write!(f, "{:?}", self.kind),
		}
	}
}

impl From<Id3v2Error> for Id3Error {
	fn from(input: Id3v2Error) -> Self {
		Self::new(ErrorKind::Id3v2(input))
	}
}

impl From<TryReserveError> for Id3Error {
	fn from(input: TryReserveError) -> Self {
		Self::new(ErrorKind::Alloc(input))
	}
}

impl Display for Id3Error {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self.kind {
			// Conversions
			ErrorKind::Alloc(ref err) => write!(f, "{err}")?,

			ErrorKind::TooMuchData => write!(
				f,
				"Attempted to read an abnormally large amount of data"
			)?,
			ErrorKind::TextDecode(message) => write!(f, "Text decoding: {message}")?,
			ErrorKind::Id3v2(ref id3v2_err) => write!(f, "{id3v2_err}")?,
		}

		if let Some(frame) = &self.frame {
			write!(f, " ({frame})")?;
		}

		Ok(())
	}
}
