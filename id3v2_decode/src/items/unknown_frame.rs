use crate::config::ParseOptions;
use crate::error::Result;
use crate::util::alloc::fallible_copy;

/// The content of a frame that isn't decoded
///
/// This is used for every frame that isn't a text frame or an attached picture, including "TXXX".
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct UnknownFrame {
	/// The frame content, exactly as stored
	pub data: Vec<u8>,
}

impl UnknownFrame {
	/// Create a new [`UnknownFrame`]
	pub fn new(data: Vec<u8>) -> Self {
		Self { data }
	}

	/// Copy the frame content
	///
	/// # Errors
	///
	/// * The content exceeds [`ParseOptions::allocation_limit`]
	pub fn parse(content: &[u8], parse_options: ParseOptions) -> Result<Self> {
		Ok(Self::new(fallible_copy(
			content,
			parse_options.allocation_limit,
		)?))
	}
}
