use crate::config::ParseOptions;
use crate::error::Result;
use crate::frame::content::verify_encoding;
use crate::macros::id3v2_err;
use crate::picture::{MimeType, PictureType};
use crate::util::alloc::fallible_copy;
use crate::util::text::{TextEncoding, decode_text, latin1_decode, read_to_terminator};

use byteorder::ReadBytesExt;

/// An `ID3v2` attached picture frame
///
/// The picture data is never interpreted, it is kept exactly as stored.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct AttachedPictureFrame {
	/// The encoding of the description
	pub encoding: TextEncoding,
	/// The MIME type of the picture, as stored
	///
	/// See [`AttachedPictureFrame::mime`] for a classified version.
	pub mime_type: String,
	/// The picture type
	pub picture_type: PictureType,
	/// The picture description
	pub description: String,
	/// The raw picture data
	pub data: Vec<u8>,
}

impl AttachedPictureFrame {
	/// Get an [`AttachedPictureFrame`] from ID3v2 A/PIC bytes:
	///
	/// NOTE: This expects *only* the frame content
	///
	/// The MIME type is always read as ISO-8859-1, the encoding byte only applies to the
	/// description. If the description is missing its terminator, it runs to the end of the
	/// content and the picture data is empty.
	///
	/// # Errors
	///
	/// * There isn't enough data present
	/// * The encoding byte is not a valid [`TextEncoding`]
	/// * Unable to decode the description
	/// * The picture data exceeds [`ParseOptions::allocation_limit`]
	///
	/// # Examples
	///
	/// ```rust
	/// use id3v2_decode::config::ParseOptions;
	/// use id3v2_decode::picture::PictureType;
	/// use id3v2_decode::AttachedPictureFrame;
	///
	/// # fn main() -> id3v2_decode::error::Result<()> {
	/// let content = b"\x00image/png\x00\x03Cover\x00\x89PNG";
	///
	/// let picture = AttachedPictureFrame::parse(content, ParseOptions::new())?;
	/// assert_eq!(picture.mime_type, "image/png");
	/// assert_eq!(picture.picture_type, PictureType::CoverFront);
	/// assert_eq!(picture.description, "Cover");
	/// assert_eq!(picture.data, b"\x89PNG");
	/// # Ok(()) }
	/// ```
	pub fn parse(content: &[u8], parse_options: ParseOptions) -> Result<Self> {
		let mut reader = content;

		let Ok(encoding_byte) = reader.read_u8() else {
			id3v2_err!(@BAIL BadFrameLength);
		};
		let encoding = verify_encoding(encoding_byte)?;

		let (mime_type, terminator_len) = read_to_terminator(&mut reader, TextEncoding::Latin1);
		if terminator_len == 0 {
			log::warn!("APIC frame is missing the MIME type terminator");
			id3v2_err!(@BAIL BadFrameLength);
		}

		let Ok(picture_type) = reader.read_u8() else {
			id3v2_err!(@BAIL BadFrameLength);
		};

		let remaining = reader;
		let (mut description, terminator_len) = read_to_terminator(&mut reader, encoding);
		if terminator_len == 0 {
			log::debug!("APIC description is not terminated, assuming there is no picture data");
			description = remaining.to_vec();
		}

		let description = decode_text(&description, encoding)?;
		let mime_type = latin1_decode(&mime_type);
		let data = fallible_copy(reader, parse_options.allocation_limit)?;

		log::trace!(
			"Read attached picture (MIME type: {:?}, size: {})",
			mime_type,
			data.len()
		);

		Ok(Self {
			encoding,
			mime_type,
			picture_type: PictureType::from_u8(picture_type),
			description,
			data,
		})
	}

	/// Classify the stored MIME type
	///
	/// # Examples
	///
	/// ```rust
	/// use id3v2_decode::config::ParseOptions;
	/// use id3v2_decode::picture::MimeType;
	/// use id3v2_decode::AttachedPictureFrame;
	///
	/// # fn main() -> id3v2_decode::error::Result<()> {
	/// let picture = AttachedPictureFrame::parse(b"\x00image/jpeg\x00\x00\x00", ParseOptions::new())?;
	/// assert_eq!(picture.mime(), MimeType::Jpeg);
	/// # Ok(()) }
	/// ```
	pub fn mime(&self) -> MimeType {
		MimeType::from_str(&self.mime_type)
	}
}

#[cfg(test)]
mod tests {
	use super::AttachedPictureFrame;
	use crate::config::ParseOptions;
	use crate::error::{ErrorKind, Id3v2ErrorKind};
	use crate::picture::PictureType;
	use crate::util::text::TextEncoding;

	#[test_log::test]
	fn utf16_description() {
		#[rustfmt::skip]
		let content = [
			// Encoding
			0x01,
			// MIME type
			b'i', b'm', b'a', b'g', b'e', b'/', b'j', b'p', b'e', b'g', 0x00,
			// Picture type
			0x04,
			// Description: BOM + "A\x00" + terminator. The zero byte of the "A" code unit must
			// not be taken as a terminator.
			0xFF, 0xFE, b'A', 0x00, 0x00, 0x00,
			// Picture data
			0xFF, 0xD8, 0xFF, 0x00,
		];

		let picture = AttachedPictureFrame::parse(&content, ParseOptions::new()).unwrap();
		assert_eq!(picture.encoding, TextEncoding::UTF16);
		assert_eq!(picture.mime_type, "image/jpeg");
		assert_eq!(picture.picture_type, PictureType::CoverBack);
		assert_eq!(picture.description, "A");
		assert_eq!(picture.data, [0xFF, 0xD8, 0xFF, 0x00]);
	}

	#[test_log::test]
	fn undefined_picture_type() {
		let picture =
			AttachedPictureFrame::parse(b"\x00image/gif\x00\x30\x00GIF", ParseOptions::new())
				.unwrap();

		assert_eq!(picture.picture_type, PictureType::Undefined(0x30));
		assert_eq!(picture.description, "");
		assert_eq!(picture.data, b"GIF");
	}

	#[test_log::test]
	fn unterminated_description() {
		let picture =
			AttachedPictureFrame::parse(b"\x03image/png\x00\x03Cover", ParseOptions::new())
				.unwrap();

		assert_eq!(picture.description, "Cover");
		assert!(picture.data.is_empty());
	}

	#[test_log::test]
	fn missing_mime_terminator() {
		let err = AttachedPictureFrame::parse(b"\x00image/png", ParseOptions::new()).unwrap_err();
		assert!(matches!(
			err.id3v2_kind(),
			Some(Id3v2ErrorKind::BadFrameLength)
		));
	}

	#[test_log::test]
	fn missing_picture_type() {
		let err = AttachedPictureFrame::parse(b"\x00image/png\x00", ParseOptions::new()).unwrap_err();
		assert!(matches!(
			err.id3v2_kind(),
			Some(Id3v2ErrorKind::BadFrameLength)
		));
	}

	#[test_log::test]
	fn picture_over_allocation_limit() {
		let err = AttachedPictureFrame::parse(
			b"\x00image/png\x00\x03\x00\x01\x02\x03\x04",
			ParseOptions::new().allocation_limit(4),
		)
		.unwrap_err();

		assert!(matches!(err.kind(), ErrorKind::TooMuchData));
	}
}
