use crate::config::ParsingMode;
use crate::error::Result;
use crate::macros::{id3v2_err, parse_mode_choice};
use crate::restrictions::TagRestrictions;
use crate::util::synchsafe::decode_size;

use std::fmt::{Display, Formatter};
use std::io::Read;

use byteorder::ReadBytesExt;

/// The size of the tag header, and of the footer if one is present
pub(crate) const ID3V2_HEADER_SIZE: usize = 10;

/// The ID3v2 version, as stored in the tag header
#[derive(PartialEq, Eq, Debug, Clone, Copy, Hash)]
pub struct Id3v2Version {
	/// The major version (3 for ID3v2.3, 4 for ID3v2.4)
	pub major: u8,
	/// The revision number
	pub revision: u8,
}

impl Display for Id3v2Version {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "ID3v2.{}.{}", self.major, self.revision)
	}
}

/// Flags that apply to the entire tag
#[derive(Default, Copy, Clone, Debug, PartialEq, Eq)]
pub struct Id3v2TagFlags {
	/// Whether or not all frames are unsynchronised
	///
	/// NOTE: This is only reported, the content of the tag is never resynchronised.
	pub unsynchronisation: bool,
	/// Indicates if the tag is in an experimental stage
	pub experimental: bool,
	/// Indicates that the tag includes a footer
	///
	/// The footer follows the bytes counted by the tag size, and is never read.
	pub footer: bool,
}

/// A decoded ID3v2 tag header
///
/// This only describes the first 10 bytes of a tag, see [`read_header`](crate::read_header).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Id3v2Header {
	pub(crate) version: Id3v2Version,
	pub(crate) flags: Id3v2TagFlags,
	pub(crate) extended_header: bool,
	/// The size of the tag contents (**DOES NOT INCLUDE THE HEADER/FOOTER**)
	pub(crate) size: u32,
}

impl Id3v2Header {
	/// Parse the header, returning `None` if the input doesn't start with "ID3"
	pub(crate) fn parse(bytes: &[u8], parse_mode: ParsingMode) -> Result<Option<Self>> {
		if bytes.get(..3) != Some(b"ID3".as_slice()) {
			return Ok(None);
		}

		log::debug!("Parsing ID3v2 header");

		let Some(header) = bytes.first_chunk::<ID3V2_HEADER_SIZE>() else {
			id3v2_err!(@BAIL TruncatedHeader);
		};

		let version = Id3v2Version {
			major: header[3],
			revision: header[4],
		};

		// ID3v2.2 uses 6 byte frame headers, which cannot be read the same way
		if !matches!(version.major, 3 | 4) {
			id3v2_err!(@BAIL BadId3v2Version(version.major, version.revision));
		}

		let flags = header[5];
		let flags_parsed = Id3v2TagFlags {
			unsynchronisation: flags & 0x80 == 0x80,
			experimental: flags & 0x20 == 0x20,
			footer: flags & 0x10 == 0x10,
		};

		let size = decode_size([header[6], header[7], header[8], header[9]], parse_mode)?;

		Ok(Some(Id3v2Header {
			version,
			flags: flags_parsed,
			extended_header: flags & 0x40 == 0x40,
			size,
		}))
	}

	/// The version of the tag
	pub fn version(&self) -> Id3v2Version {
		self.version
	}

	/// The tag-wide flags
	pub fn flags(&self) -> Id3v2TagFlags {
		self.flags
	}

	/// Whether an extended header follows the tag header
	pub fn has_extended_header(&self) -> bool {
		self.extended_header
	}

	/// The size of the tag, excluding the header and footer
	///
	/// This includes the extended header, frames, and padding.
	pub fn size(&self) -> u32 {
		self.size
	}

	/// The total size of the tag, including the header and footer
	///
	/// # Examples
	///
	/// ```rust
	/// # fn main() -> id3v2_decode::error::Result<()> {
	/// // An ID3v2.4 tag with a footer, and 257 bytes of content
	/// let bytes = [b'I', b'D', b'3', 4, 0, 0x10, 0x00, 0x00, 0x02, 0x01];
	///
	/// let header = id3v2_decode::read_header(&bytes)?.expect("should be a tag");
	/// assert_eq!(header.size(), 257);
	/// assert_eq!(header.full_tag_size(), 277);
	/// # Ok(()) }
	/// ```
	pub fn full_tag_size(&self) -> u64 {
		let footer = if self.flags.footer { ID3V2_HEADER_SIZE } else { 0 };
		u64::from(self.size) + (ID3V2_HEADER_SIZE + footer) as u64
	}
}

/// The extended header of an ID3v2 tag
///
/// The extended header is always skipped as a whole, using its size. For ID3v2.4 tags, the
/// fields within it are decoded as well.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ExtendedHeader {
	pub(crate) size: u32,
	pub(crate) tag_is_update: bool,
	pub(crate) crc: Option<u64>,
	pub(crate) restrictions: Option<TagRestrictions>,
}

impl ExtendedHeader {
	/// Parse the extended header from the start of the tag body
	pub(crate) fn parse(
		body: &[u8],
		version: Id3v2Version,
		parse_mode: ParsingMode,
	) -> Result<Self> {
		let Some(size_bytes) = body.first_chunk::<4>() else {
			id3v2_err!(@BAIL BadExtendedHeaderSize);
		};

		let size = decode_size(*size_bytes, parse_mode)?;
		log::trace!("Reading extended header of size {}", size);

		// The size includes the size field itself
		let Some(block) = body.get(..size as usize).filter(|block| block.len() >= 4) else {
			id3v2_err!(@BAIL BadExtendedHeaderSize);
		};

		let mut extended_header = ExtendedHeader {
			size,
			tag_is_update: false,
			crc: None,
			restrictions: None,
		};

		if version.major == 4 {
			if let Err(e) = extended_header.read_v4_fields(&block[4..]) {
				parse_mode_choice!(
					parse_mode,
					STRICT: id3v2_err!(@BAIL BadExtendedHeaderSize),
					DEFAULT: log::warn!("Unable to read the extended header fields, ignoring: {}", e),
				);

				extended_header.tag_is_update = false;
				extended_header.crc = None;
				extended_header.restrictions = None;
			}
		}

		Ok(extended_header)
	}

	fn read_v4_fields(&mut self, mut reader: &[u8]) -> std::io::Result<()> {
		// Useless byte since there's only 1 byte for flags
		let _num_flag_bytes = reader.read_u8()?;

		let extended_flags = reader.read_u8()?;

		// Every flag is followed by a length byte and its data, in the order of the flag bits
		if extended_flags & 0x40 == 0x40 {
			// No data
			let _data_length = reader.read_u8()?;
			self.tag_is_update = true;
		}

		if extended_flags & 0x20 == 0x20 {
			// 35 bits, spread over 5 synchsafe bytes
			let _data_length = reader.read_u8()?;

			let mut crc = [0; 5];
			reader.read_exact(&mut crc)?;
			self.crc = Some(
				crc.iter()
					.fold(0_u64, |value, byte| (value << 7) | u64::from(byte & 0x7F)),
			);
		}

		if extended_flags & 0x10 == 0x10 {
			// We don't care about the length byte, it is always 1
			let _data_length = reader.read_u8()?;
			self.restrictions = Some(TagRestrictions::from_byte(reader.read_u8()?));
		}

		Ok(())
	}

	/// The size of the extended header, including its own size field
	pub fn size(&self) -> u32 {
		self.size
	}

	/// Whether this tag is an update of an earlier tag (ID3v2.4 only)
	pub fn tag_is_update(&self) -> bool {
		self.tag_is_update
	}

	/// The CRC-32 of the frames and padding, if stored (ID3v2.4 only)
	///
	/// NOTE: The CRC is not verified.
	pub fn crc(&self) -> Option<u64> {
		self.crc
	}

	/// The tag restrictions, if stored (ID3v2.4 only)
	pub fn restrictions(&self) -> Option<TagRestrictions> {
		self.restrictions
	}
}
