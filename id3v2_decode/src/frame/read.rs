use super::Frame;
use super::content::{ATTACHED_PICTURE_ID, parse_content};
use super::header::{FRAME_HEADER_SIZE, FrameHeader, FrameId, RawFrameHeader};
use crate::config::{ParseOptions, ParsingMode};
use crate::error::Result;
use crate::items::UnknownFrame;
use crate::macros::{id3v2_err, parse_mode_choice};

/// The size of the zero run that marks the start of the padding
const PADDING_SENTINEL_SIZE: usize = 4;

pub(crate) enum ParsedFrame {
	Next(Frame),
	Skip,
	Eof,
}

impl ParsedFrame {
	/// Read the next frame, advancing `reader` past it
	///
	/// `offset` is the position of the frame header in the input, for error reporting.
	pub(crate) fn read(
		reader: &mut &[u8],
		offset: usize,
		parse_options: ParseOptions,
	) -> Result<Self> {
		let parse_mode = parse_options.parsing_mode;

		// A frame ID is never all zeroes, so a zero run (or a shorter all-zero tail) is the padding
		let sentinel = &reader[..reader.len().min(PADDING_SENTINEL_SIZE)];
		if sentinel.iter().all(|b| *b == 0) {
			if !reader.is_empty() {
				log::trace!("Found padding at offset {}, stopping", offset);
			}

			return Ok(Self::Eof);
		}

		let Some((header, rest)) = reader.split_first_chunk::<FRAME_HEADER_SIZE>() else {
			parse_mode_choice!(
				parse_mode,
				STRICT: return Err(id3v2_err!(BadFrameLength).at_frame(None, offset)),
				DEFAULT: {
					log::warn!(
						"Found a truncated frame header at offset {}, stopping",
						offset
					);
					return Ok(Self::Eof);
				},
			);
		};

		let raw = RawFrameHeader::parse(header, parse_mode);
		let size = raw
			.size
			.map_err(|e| e.at_frame(raw.id.as_ref().ok(), offset))?;

		log::trace!(
			"Reading frame {:?} (size: {}, offset: {})",
			String::from_utf8_lossy(&raw.id_bytes),
			size,
			offset
		);

		let Some((content, remaining)) = rest.split_at_checked(size as usize) else {
			parse_mode_choice!(
				parse_mode,
				STRICT: return Err(
					id3v2_err!(BadFrameLength).at_frame(raw.id.as_ref().ok(), offset)
				),
				DEFAULT: {
					log::warn!(
						"Frame at offset {} claims {} bytes, only {} remain, stopping",
						offset,
						size,
						rest.len()
					);
					return Ok(Self::Eof);
				},
			);
		};

		// The frame bounds are known from here on, so a bad frame can be skipped
		*reader = remaining;

		let (id, valid_id) = match raw.id {
			Ok(id) => (id, true),
			Err(e) => match parse_mode {
				ParsingMode::Strict => return Err(e.at_frame(None, offset)),
				ParsingMode::BestAttempt => {
					log::warn!("Skipping frame at offset {}: {}", offset, e);
					return Ok(Self::Skip);
				},
				ParsingMode::Relaxed => {
					log::warn!("Keeping frame at offset {} as unknown: {}", offset, e);
					(FrameId::parse_unchecked(raw.id_bytes), false)
				},
			},
		};

		if !parse_options.read_cover_art && id == ATTACHED_PICTURE_ID {
			log::trace!("Skipping attached picture");
			return Ok(Self::Skip);
		}

		let parsed_content = if valid_id {
			parse_content(content, &id, parse_options)
		} else {
			UnknownFrame::parse(content, parse_options).map(Into::into)
		};

		let content = match parsed_content {
			Ok(content) => content,
			Err(e) => {
				let e = e.at_frame(Some(&id), offset);
				match parse_mode {
					ParsingMode::Strict => return Err(e),
					ParsingMode::BestAttempt => {
						log::warn!("Failed to decode frame, skipping: {}", e);
						return Ok(Self::Skip);
					},
					ParsingMode::Relaxed => match UnknownFrame::parse(content, parse_options) {
						Ok(unknown) => {
							log::warn!("Failed to decode frame, keeping its raw content: {}", e);
							unknown.into()
						},
						Err(unknown_err) => {
							log::warn!("Failed to decode frame, skipping: {}", unknown_err);
							return Ok(Self::Skip);
						},
					},
				}
			},
		};

		log::trace!("Decoded frame {} as {}", id, content.name());
		Ok(Self::Next(Frame::new(FrameHeader::new(id, raw.flags), content)))
	}
}
