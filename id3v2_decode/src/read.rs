use crate::config::{ParseOptions, ParsingMode};
use crate::error::Result;
use crate::frame::Frame;
use crate::frame::read::ParsedFrame;
use crate::header::{ExtendedHeader, ID3V2_HEADER_SIZE, Id3v2Header};
use crate::macros::{id3v2_err, parse_mode_choice};
use crate::tag::Id3v2Tag;

/// Decode an ID3v2 tag from the start of `bytes` with the default [`ParseOptions`]
///
/// `bytes` should hold the entire tag, starting with the header.
///
/// Returns `Ok(None)` if `bytes` doesn't start with "ID3".
///
/// # Errors
///
/// The tag is recognized, but malformed. See [`ParsingMode::BestAttempt`] for the malformations
/// that are recovered from.
///
/// # Examples
///
/// ```rust
/// # fn main() -> id3v2_decode::error::Result<()> {
/// assert!(id3v2_decode::parse(b"fLaC")?.is_none());
///
/// // An empty ID3v2.3 tag with 4 bytes of padding
/// let tag = id3v2_decode::parse(b"ID3\x03\x00\x00\x00\x00\x00\x04\x00\x00\x00\x00")?
/// 	.expect("should be a tag");
/// assert!(tag.is_empty());
/// # Ok(()) }
/// ```
pub fn parse(bytes: &[u8]) -> Result<Option<Id3v2Tag>> {
	parse_with_options(bytes, ParseOptions::new())
}

/// Decode an ID3v2 tag from the start of `bytes`
///
/// See [`parse`] and [`ParseOptions`].
///
/// # Errors
///
/// The tag is recognized, but malformed. What counts as malformed depends on
/// [`ParseOptions::parsing_mode`].
///
/// # Examples
///
/// ```rust
/// use id3v2_decode::config::{ParseOptions, ParsingMode};
///
/// // The tag claims 16 bytes, but there are only 4
/// let bytes = b"ID3\x04\x00\x00\x00\x00\x00\x10\x00\x00\x00\x00";
///
/// let strict = ParseOptions::new().parsing_mode(ParsingMode::Strict);
/// assert!(id3v2_decode::parse_with_options(bytes, strict).is_err());
///
/// let best_attempt = ParseOptions::new().parsing_mode(ParsingMode::BestAttempt);
/// assert!(id3v2_decode::parse_with_options(bytes, best_attempt).is_ok());
/// ```
pub fn parse_with_options(bytes: &[u8], parse_options: ParseOptions) -> Result<Option<Id3v2Tag>> {
	let parse_mode = parse_options.parsing_mode;

	let Some(header) = Id3v2Header::parse(bytes, parse_mode)? else {
		log::trace!("No ID3v2 signature found");
		return Ok(None);
	};

	log::debug!(
		"Parsing ID3v2 tag, size: {}, version: {}",
		header.size,
		header.version
	);

	let available = &bytes[ID3V2_HEADER_SIZE..];
	let body = match available.get(..header.size as usize) {
		Some(body) => body,
		None => {
			parse_mode_choice!(
				parse_mode,
				STRICT: id3v2_err!(@BAIL BadTagSize {
					declared: header.size,
					available: available.len(),
				}),
				DEFAULT: log::warn!(
					"Tag declares {} bytes, only {} are available, reading what is there",
					header.size,
					available.len()
				),
			);

			available
		},
	};

	let mut frames_start = ID3V2_HEADER_SIZE;
	let mut extended_header = None;
	if header.extended_header {
		let parsed = ExtendedHeader::parse(body, header.version, parse_mode)?;
		frames_start += parsed.size as usize;
		extended_header = Some(parsed);
	}

	let frames = read_all_frames(
		&bytes[frames_start..ID3V2_HEADER_SIZE + body.len()],
		frames_start,
		parse_options,
	)?;

	log::debug!("Read {} frames", frames.len());

	Ok(Some(Id3v2Tag {
		version: header.version,
		flags: header.flags,
		extended_header,
		frames,
	}))
}

/// Decode only the 10 byte header of an ID3v2 tag
///
/// This is useful to find the number of bytes to read before calling [`parse`], see
/// [`Id3v2Header::full_tag_size`].
///
/// Returns `Ok(None)` if `bytes` doesn't start with "ID3".
///
/// # Errors
///
/// * `bytes` is shorter than 10 bytes
/// * The version is not supported
pub fn read_header(bytes: &[u8]) -> Result<Option<Id3v2Header>> {
	Id3v2Header::parse(bytes, ParsingMode::BestAttempt)
}

fn read_all_frames(
	body: &[u8],
	base_offset: usize,
	parse_options: ParseOptions,
) -> Result<Vec<Frame>> {
	let mut frames = Vec::new();

	let mut reader = body;
	loop {
		let offset = base_offset + (body.len() - reader.len());
		match ParsedFrame::read(&mut reader, offset, parse_options)? {
			ParsedFrame::Next(frame) => frames.push(frame),
			// The frame was skipped, but we can expect more frames
			ParsedFrame::Skip => {},
			// Padding, or the rest of the tag can't be trusted
			ParsedFrame::Eof => break,
		}
	}

	Ok(frames)
}
