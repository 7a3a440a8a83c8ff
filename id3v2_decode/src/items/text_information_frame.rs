use crate::error::Result;
use crate::frame::content::verify_encoding;
use crate::util::text::{TextEncoding, decode_text, strip_terminator};

/// An `ID3v2` text frame
///
/// This is the content of every "T..." frame, excluding "TXXX".
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TextInformationFrame {
	/// The encoding of the text
	pub encoding: TextEncoding,
	/// The text itself
	///
	/// In ID3v2.4, a frame may hold multiple values separated by null characters, see
	/// [`TextInformationFrame::values`].
	pub value: String,
}

impl TextInformationFrame {
	/// Create a new [`TextInformationFrame`]
	pub fn new(encoding: TextEncoding, value: impl Into<String>) -> Self {
		Self {
			encoding,
			value: value.into(),
		}
	}

	/// Read a [`TextInformationFrame`] from a slice
	///
	/// NOTE: This expects the frame header to have already been skipped
	///
	/// A single trailing terminator is stripped. Content too short to hold a terminator is
	/// read as an empty string.
	///
	/// # Errors
	///
	/// * The encoding byte is not a valid [`TextEncoding`]
	/// * Unable to decode the text
	///
	/// # Examples
	///
	/// ```rust
	/// use id3v2_decode::{TextEncoding, TextInformationFrame};
	///
	/// # fn main() -> id3v2_decode::error::Result<()> {
	/// let frame = TextInformationFrame::parse(b"\x00Title\x00")?;
	/// assert_eq!(frame.encoding, TextEncoding::Latin1);
	/// assert_eq!(frame.value, "Title");
	/// # Ok(()) }
	/// ```
	pub fn parse(content: &[u8]) -> Result<Self> {
		let Some((&encoding_byte, text)) = content.split_first() else {
			return Ok(Self::new(TextEncoding::Latin1, String::new()));
		};

		let encoding = verify_encoding(encoding_byte)?;
		let value = decode_text(strip_terminator(text, encoding), encoding)?;

		Ok(Self { encoding, value })
	}

	/// Get each of the null separated values
	///
	/// # Examples
	///
	/// ```rust
	/// use id3v2_decode::{TextEncoding, TextInformationFrame};
	///
	/// let frame = TextInformationFrame::new(TextEncoding::UTF8, "Rock\0Pop");
	/// assert_eq!(frame.values().collect::<Vec<_>>(), ["Rock", "Pop"]);
	/// ```
	pub fn values(&self) -> impl Iterator<Item = &str> {
		self.value.split('\0')
	}
}
