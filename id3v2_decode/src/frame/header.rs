use crate::error::Result;
use crate::frame::FrameFlags;
use crate::macros::id3v2_err;
use crate::util::text::latin1_decode;

use std::borrow::Cow;
use std::fmt::{Display, Formatter};

/// The size of a frame header
pub(crate) const FRAME_HEADER_SIZE: usize = 10;

/// An ID3v2 frame header
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FrameHeader {
	pub(crate) id: FrameId,
	/// The flags describing the frame
	pub flags: FrameFlags,
}

impl FrameHeader {
	/// Create a new [`FrameHeader`]
	pub const fn new(id: FrameId, flags: FrameFlags) -> Self {
		Self { id, flags }
	}

	/// Get the ID of the frame
	pub const fn id(&self) -> &FrameId {
		&self.id
	}
}

/// An ID3v2 frame ID
///
/// A valid ID is exactly 4 characters within `'A'..='Z'` and `'0'..='9'`. Since an ID can never
/// be all zeroes, a zero run marks the start of the tag padding.
#[derive(PartialEq, Clone, Debug, Eq, Hash)]
pub struct FrameId(pub(crate) Cow<'static, str>);

impl FrameId {
	/// Attempts to create a `FrameId` from an ID string
	///
	/// # Errors
	///
	/// * `id` contains invalid characters (must be 'A'..='Z' and '0'..='9')
	/// * `id` is not 4 characters long
	///
	/// # Examples
	///
	/// ```rust
	/// use id3v2_decode::FrameId;
	///
	/// assert!(FrameId::new("TIT2").is_ok());
	/// assert!(FrameId::new("TT2").is_err());
	/// assert!(FrameId::new("tit2").is_err());
	/// ```
	pub fn new<I>(id: I) -> Result<Self>
	where
		I: Into<Cow<'static, str>>,
	{
		let id = id.into();
		Self::verify_id(id.as_bytes())?;
		Ok(Self(id))
	}

	/// Decode an ID from the first 4 bytes of a frame header
	pub(crate) fn parse(id_bytes: [u8; 4]) -> Result<Self> {
		Self::verify_id(&id_bytes)?;
		Ok(Self(Cow::Owned(latin1_decode(&id_bytes))))
	}

	/// Decode an ID without verifying its characters, used for [`ParsingMode::Relaxed`](crate::config::ParsingMode::Relaxed)
	pub(crate) fn parse_unchecked(id_bytes: [u8; 4]) -> Self {
		Self(Cow::Owned(latin1_decode(&id_bytes)))
	}

	fn verify_id(id: &[u8]) -> Result<()> {
		if id.len() != 4 || !id.iter().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()) {
			id3v2_err!(@BAIL BadFrameId(id.to_vec()));
		}

		Ok(())
	}

	/// Extracts the string from the ID
	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl Display for FrameId {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

impl PartialEq<str> for FrameId {
	fn eq(&self, other: &str) -> bool {
		self.as_str() == other
	}
}

impl PartialEq<&str> for FrameId {
	fn eq(&self, other: &&str) -> bool {
		self.as_str() == *other
	}
}

/// The fields of a frame header, before the content is looked at
#[derive(Debug)]
pub(crate) struct RawFrameHeader {
	pub(crate) id: Result<FrameId>,
	pub(crate) id_bytes: [u8; 4],
	pub(crate) size: Result<u32>,
	pub(crate) flags: FrameFlags,
}

impl RawFrameHeader {
	pub(crate) fn parse(
		header: &[u8; FRAME_HEADER_SIZE],
		parse_mode: crate::config::ParsingMode,
	) -> Self {
		let id_bytes = [header[0], header[1], header[2], header[3]];
		let size = crate::util::synchsafe::decode_size(
			[header[4], header[5], header[6], header[7]],
			parse_mode,
		);

		RawFrameHeader {
			id: FrameId::parse(id_bytes),
			id_bytes,
			size,
			flags: FrameFlags::parse_id3v24(u16::from_be_bytes([header[8], header[9]])),
		}
	}
}
