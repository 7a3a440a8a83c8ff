use crate::config::ParseOptions;
use crate::error::Result;
use crate::frame::{FrameContent, FrameId};
use crate::items::{AttachedPictureFrame, TextInformationFrame, UnknownFrame};
use crate::macros::id3v2_err;
use crate::util::text::TextEncoding;

pub(crate) const ATTACHED_PICTURE_ID: &str = "APIC";
pub(crate) const USER_DEFINED_TEXT_ID: &str = "TXXX";

pub(crate) fn parse_content(
	content: &[u8],
	id: &FrameId,
	parse_options: ParseOptions,
) -> Result<FrameContent> {
	log::trace!("Parsing frame content for ID: {}", id);

	Ok(match id.as_str() {
		ATTACHED_PICTURE_ID => AttachedPictureFrame::parse(content, parse_options)?.into(),
		// TXXX has a description before its value, it is kept as-is
		i if i.starts_with('T') && i != USER_DEFINED_TEXT_ID => {
			TextInformationFrame::parse(content)?.into()
		},
		_ => UnknownFrame::parse(content, parse_options)?.into(),
	})
}

pub(crate) fn verify_encoding(encoding: u8) -> Result<TextEncoding> {
	match TextEncoding::from_u8(encoding) {
		None => id3v2_err!(@BAIL BadTextEncoding(encoding)),
		Some(e) => Ok(e),
	}
}
