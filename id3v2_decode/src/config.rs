//! Options to control how tags are decoded

/// The parsing strictness mode
///
/// This decides what happens when a recognized tag contains malformed data.
///
/// # Examples
///
/// ```rust
/// use id3v2_decode::config::{ParseOptions, ParsingMode};
///
/// // We only want to read well-formed tags
/// let parse_options = ParseOptions::new().parsing_mode(ParsingMode::Strict);
/// ```
#[derive(Copy, Clone, Debug, Ord, PartialOrd, Eq, PartialEq, Default)]
#[non_exhaustive]
pub enum ParsingMode {
	/// Will eagerly error on invalid input
	///
	/// This mode will eagerly error on any malformed input.
	///
	/// ## Examples of behavior
	///
	/// * Unable to decode text - The parser will error and the entire tag is discarded
	/// * A frame declares more bytes than the tag holds - The parser will error
	/// * A size field is not synchsafe - The parser will error
	Strict,
	/// Default mode, less eager to error on recoverably malformed input
	///
	/// This mode will skip any frame it is unable to decode, and keep all others.
	///
	/// ## Examples of behavior
	///
	/// * Unable to decode text - The frame is skipped and the parser moves on
	/// * A frame declares more bytes than the tag holds - Parsing stops, all frames read so far are kept
	/// * The tag declares more bytes than were provided - Only the provided bytes are read
	#[default]
	BestAttempt,
	/// Least eager to error, may produce invalid/partial output
	///
	/// This mode behaves like [`ParsingMode::BestAttempt`], but keeps frames it is unable
	/// to decode as [`FrameContent::Unknown`](crate::frame::FrameContent::Unknown).
	///
	/// ## Examples of behavior
	///
	/// * Unable to decode text - The frame is kept with its raw content
	/// * A frame ID contains invalid characters - The frame is kept with its raw content
	Relaxed,
}

/// Options to control how tags are decoded
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub struct ParseOptions {
	pub(crate) parsing_mode: ParsingMode,
	pub(crate) read_cover_art: bool,
	pub(crate) allocation_limit: usize,
}

impl Default for ParseOptions {
	/// The default implementation for `ParseOptions`
	///
	/// The defaults are as follows:
	///
	/// ```rust,ignore
	/// ParseOptions {
	/// 	parsing_mode: ParsingMode::BestAttempt,
	/// 	read_cover_art: true,
	/// 	allocation_limit: 16 * 1024 * 1024,
	/// }
	/// ```
	fn default() -> Self {
		Self::new()
	}
}

impl ParseOptions {
	/// Default parsing mode
	pub const DEFAULT_PARSING_MODE: ParsingMode = ParsingMode::BestAttempt;

	/// Default allocation limit for any single picture or frame
	pub const DEFAULT_ALLOCATION_LIMIT: usize = 16 * 1024 * 1024;

	/// Creates a new `ParseOptions`, alias for `Default` implementation
	///
	/// See also: [`ParseOptions::default`]
	///
	/// # Examples
	///
	/// ```rust
	/// use id3v2_decode::config::ParseOptions;
	///
	/// let parse_options = ParseOptions::new();
	/// ```
	#[must_use]
	pub const fn new() -> Self {
		Self {
			parsing_mode: Self::DEFAULT_PARSING_MODE,
			read_cover_art: true,
			allocation_limit: Self::DEFAULT_ALLOCATION_LIMIT,
		}
	}

	/// The parsing mode to use, see [`ParsingMode`] for details
	///
	/// # Examples
	///
	/// ```rust
	/// use id3v2_decode::config::{ParseOptions, ParsingMode};
	///
	/// // By default, `parsing_mode` is ParsingMode::BestAttempt. Here, we need absolute correctness.
	/// let parse_options = ParseOptions::new().parsing_mode(ParsingMode::Strict);
	/// ```
	pub fn parsing_mode(&mut self, parsing_mode: ParsingMode) -> Self {
		self.parsing_mode = parsing_mode;
		*self
	}

	/// Whether or not to read cover art
	///
	/// When disabled, "APIC" frames are skipped entirely.
	///
	/// # Examples
	///
	/// ```rust
	/// use id3v2_decode::config::ParseOptions;
	///
	/// // Reading cover art is expensive, and I do not need it!
	/// let parse_options = ParseOptions::new().read_cover_art(false);
	/// ```
	pub fn read_cover_art(&mut self, read_cover_art: bool) -> Self {
		self.read_cover_art = read_cover_art;
		*self
	}

	/// The maximum number of bytes to copy out of the input for any single frame
	///
	/// This applies to picture data and to the raw content of unknown frames. If a frame
	/// exceeds this limit, the parser will return [`ErrorKind::TooMuchData`](crate::error::ErrorKind::TooMuchData)
	/// (or skip the frame, depending on the [`ParsingMode`]).
	///
	/// # Examples
	///
	/// ```rust
	/// use id3v2_decode::config::ParseOptions;
	///
	/// // I have files with gigantic images, I'll double the allocation limit!
	/// let parse_options =
	/// 	ParseOptions::new().allocation_limit(ParseOptions::DEFAULT_ALLOCATION_LIMIT * 2);
	/// ```
	pub fn allocation_limit(&mut self, allocation_limit: usize) -> Self {
		self.allocation_limit = allocation_limit;
		*self
	}
}
