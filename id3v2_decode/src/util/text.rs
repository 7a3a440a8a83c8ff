use crate::error::{ErrorKind, Id3Error, Result};
use crate::macros::err;

use std::io::Read;

use byteorder::ReadBytesExt;

/// The text encoding for use in ID3v2 frames
#[derive(Debug, Clone, Eq, PartialEq, Copy, Hash)]
#[repr(u8)]
pub enum TextEncoding {
	/// ISO-8859-1
	Latin1 = 0,
	/// UTF-16 with a byte order mark
	UTF16 = 1,
	/// UTF-16 big endian
	UTF16BE = 2,
	/// UTF-8
	UTF8 = 3,
}

impl TextEncoding {
	/// Get a `TextEncoding` from a u8, must be 0-3 inclusive
	///
	/// # Examples
	///
	/// ```rust
	/// use id3v2_decode::TextEncoding;
	///
	/// assert_eq!(TextEncoding::from_u8(1), Some(TextEncoding::UTF16));
	/// assert_eq!(TextEncoding::from_u8(4), None);
	/// ```
	pub fn from_u8(byte: u8) -> Option<Self> {
		match byte {
			0 => Some(Self::Latin1),
			1 => Some(Self::UTF16),
			2 => Some(Self::UTF16BE),
			3 => Some(Self::UTF8),
			_ => None,
		}
	}

	/// The number of null bytes that terminate a string in this encoding
	///
	/// # Examples
	///
	/// ```rust
	/// use id3v2_decode::TextEncoding;
	///
	/// assert_eq!(TextEncoding::UTF16BE.terminator_len(), 2);
	/// assert_eq!(TextEncoding::UTF8.terminator_len(), 1);
	/// ```
	pub fn terminator_len(self) -> usize {
		match self {
			Self::UTF16 | Self::UTF16BE => 2,
			Self::Latin1 | Self::UTF8 => 1,
		}
	}
}

/// Read up to (and including) the next terminator, returning the text bytes and the length of the terminator
///
/// UTF-16 terminators are only matched on 2 byte boundaries. If no terminator is found, the
/// reader is exhausted and the terminator length is 0.
pub(crate) fn read_to_terminator<R>(reader: &mut R, encoding: TextEncoding) -> (Vec<u8>, usize)
where
	R: Read,
{
	let mut text_bytes = Vec::new();
	let mut terminator_len = 0;

	match encoding {
		TextEncoding::Latin1 | TextEncoding::UTF8 => {
			while let Ok(byte) = reader.read_u8() {
				if byte == 0 {
					terminator_len = 1;
					break;
				}

				text_bytes.push(byte)
			}
		},
		TextEncoding::UTF16 | TextEncoding::UTF16BE => {
			while let (Ok(b1), Ok(b2)) = (reader.read_u8(), reader.read_u8()) {
				if b1 == 0 && b2 == 0 {
					terminator_len = 2;
					break;
				}

				text_bytes.push(b1);
				text_bytes.push(b2)
			}
		},
	}

	(text_bytes, terminator_len)
}

/// Strip a single trailing terminator, if present
///
/// The trailing bytes are only dropped when they are zero, ID3v2.4 allows the final terminator
/// to be omitted. Input too short to hold a terminator is treated as empty.
pub(crate) fn strip_terminator(bytes: &[u8], encoding: TextEncoding) -> &[u8] {
	let terminator_len = encoding.terminator_len();
	if bytes.len() < terminator_len {
		return &[];
	}

	let (text, terminator) = bytes.split_at(bytes.len() - terminator_len);
	let aligned = terminator_len == 1 || bytes.len() % 2 == 0;
	if aligned && terminator.iter().all(|b| *b == 0) {
		return text;
	}

	bytes
}

/// Decode text that has already been separated from its terminator
pub(crate) fn decode_text(bytes: &[u8], encoding: TextEncoding) -> Result<String> {
	if bytes.is_empty() {
		return Ok(String::new());
	}

	match encoding {
		TextEncoding::Latin1 => Ok(latin1_decode(bytes)),
		TextEncoding::UTF16 => {
			if bytes.len() % 2 != 0 {
				err!(TextDecode("UTF-16 string has an odd length"));
			}

			match bytes {
				[0xFE, 0xFF, rest @ ..] => utf16_decode_bytes(rest, u16::from_be_bytes),
				[0xFF, 0xFE, rest @ ..] => utf16_decode_bytes(rest, u16::from_le_bytes),
				_ => err!(TextDecode("UTF-16 string has an invalid byte order mark")),
			}
		},
		TextEncoding::UTF16BE => {
			if bytes.len() % 2 != 0 {
				err!(TextDecode("UTF-16 string has an odd length"));
			}

			utf16_decode_bytes(bytes, u16::from_be_bytes)
		},
		TextEncoding::UTF8 => std::str::from_utf8(bytes)
			.map(str::to_owned)
			.map_err(|_| Id3Error::new(ErrorKind::TextDecode("Expected a UTF-8 string"))),
	}
}

pub(crate) fn latin1_decode(bytes: &[u8]) -> String {
	bytes.iter().map(|c| char::from(*c)).collect::<String>()
}

pub(crate) fn utf16_decode_bytes(bytes: &[u8], endianness: fn([u8; 2]) -> u16) -> Result<String> {
	if bytes.is_empty() {
		return Ok(String::new());
	}

	let unverified: Vec<u16> = bytes
		.chunks_exact(2)
		// In ID3v2.4, it is possible to have multiple UTF-16 strings separated by null.
		// This also makes it possible for us to encounter multiple BOMs in a single string.
		// We must filter them out.
		.filter_map(|c| match *c {
			[0xFF, 0xFE] | [0xFE, 0xFF] => None,
			[b1, b2] => Some(endianness([b1, b2])),
			_ => None,
		})
		.collect();

	String::from_utf16(&unverified)
		.map_err(|_| Id3Error::new(ErrorKind::TextDecode("Given an invalid UTF-16 string")))
}

#[cfg(test)]
mod tests {
	use crate::util::text::{TextEncoding, decode_text, read_to_terminator, strip_terminator};

	const TEST_STRING: &str = "l\u{00f8}ft\u{00a5}";

	#[test_log::test]
	fn text_decode() {
		// No BOM
		let utf16_decode = decode_text(
			&[0x00, 0x6C, 0x00, 0xF8, 0x00, 0x66, 0x00, 0x74, 0x00, 0xA5],
			TextEncoding::UTF16BE,
		)
		.unwrap();

		assert_eq!(utf16_decode, TEST_STRING.to_string());

		// BOM test
		let be_utf16_decode = decode_text(
			&[
				0xFE, 0xFF, 0x00, 0x6C, 0x00, 0xF8, 0x00, 0x66, 0x00, 0x74, 0x00, 0xA5,
			],
			TextEncoding::UTF16,
		)
		.unwrap();
		let le_utf16_decode = decode_text(
			&[
				0xFF, 0xFE, 0x6C, 0x00, 0xF8, 0x00, 0x66, 0x00, 0x74, 0x00, 0xA5, 0x00,
			],
			TextEncoding::UTF16,
		)
		.unwrap();

		assert_eq!(be_utf16_decode, le_utf16_decode);
		assert_eq!(be_utf16_decode, TEST_STRING.to_string());

		let utf8_decode = decode_text(TEST_STRING.as_bytes(), TextEncoding::UTF8).unwrap();
		assert_eq!(utf8_decode, TEST_STRING.to_string());

		let latin1_decode =
			decode_text(&[0x6C, 0xF8, 0x66, 0x74, 0xA5], TextEncoding::Latin1).unwrap();
		assert_eq!(latin1_decode, TEST_STRING.to_string());
	}

	#[test_log::test]
	fn text_decode_errors() {
		assert!(decode_text(&[0x00, 0x41], TextEncoding::UTF16).is_err());
		assert!(decode_text(&[0xFF, 0xFE, 0x41], TextEncoding::UTF16).is_err());
		assert!(decode_text(&[0xC3], TextEncoding::UTF8).is_err());
		// Unpaired surrogate
		assert!(decode_text(&[0xD8, 0x00], TextEncoding::UTF16BE).is_err());
	}

	#[test_log::test]
	fn bom_only_is_empty() {
		assert_eq!(decode_text(&[0xFF, 0xFE], TextEncoding::UTF16).unwrap(), "");
	}

	#[test_log::test]
	fn terminator_stripping() {
		assert_eq!(strip_terminator(b"abc\0", TextEncoding::Latin1), b"abc");
		assert_eq!(strip_terminator(b"abc", TextEncoding::UTF8), b"abc");
		assert_eq!(strip_terminator(b"", TextEncoding::UTF8), b"");
		assert_eq!(
			strip_terminator(&[0x00, 0x41, 0x00, 0x00], TextEncoding::UTF16BE),
			&[0x00, 0x41]
		);
		// A lone trailing zero is part of the last UTF-16 code unit, not a terminator
		assert_eq!(
			strip_terminator(&[0x41, 0x00, 0x00], TextEncoding::UTF16BE),
			&[0x41, 0x00, 0x00]
		);
		assert_eq!(strip_terminator(&[0x41], TextEncoding::UTF16), b"");
	}

	#[test_log::test]
	fn read_utf16_to_aligned_terminator() {
		// "A" (LE) followed by a terminator. The zero byte pair at offset 1..3 is not aligned.
		let mut reader = &[0x41, 0x00, 0x00, 0x42, 0x00, 0x00, 0xAA][..];
		let (text, terminator_len) = read_to_terminator(&mut reader, TextEncoding::UTF16);

		assert_eq!(text, [0x41, 0x00, 0x00, 0x42]);
		assert_eq!(terminator_len, 2);
		assert_eq!(reader, &[0xAA]);
	}

	#[test_log::test]
	fn read_to_missing_terminator() {
		let mut reader = &b"abc"[..];
		let (text, terminator_len) = read_to_terminator(&mut reader, TextEncoding::Latin1);

		assert_eq!(text, b"abc");
		assert_eq!(terminator_len, 0);
		assert!(reader.is_empty());
	}
}
