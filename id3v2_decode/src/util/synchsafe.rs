//! Utilities for working with synchsafe integers
//!
//! Every size in an ID3v2 tag is stored as a 32-bit integer where only the lower 7 bits of each
//! byte are used, so the size can never be mistaken for an MPEG frame sync.

use crate::config::ParsingMode;
use crate::error::Result;
use crate::macros::{id3v2_err, parse_mode_choice};

use byteorder::{BigEndian, ByteOrder};

/// An integer that can be read from its synchsafe variant
pub trait SynchsafeInteger: Sized {
	/// Unsynchronise a synchsafe integer
	///
	/// The high bit of every byte is ignored.
	///
	/// # Examples
	///
	/// ```rust
	/// use id3v2_decode::util::synchsafe::SynchsafeInteger;
	///
	/// // [0x00, 0x00, 0x02, 0x01]
	/// let synch_number = 0x0000_0201_u32;
	/// assert_eq!(synch_number.unsynch(), 257);
	/// ```
	fn unsynch(self) -> Self;

	/// Whether the high bit of every byte is clear
	///
	/// # Examples
	///
	/// ```rust
	/// use id3v2_decode::util::synchsafe::SynchsafeInteger;
	///
	/// assert!(0x7F7F_7F7F_u32.is_synchsafe());
	/// assert!(!0x0000_0080_u32.is_synchsafe());
	/// ```
	fn is_synchsafe(self) -> bool;
}

impl SynchsafeInteger for u32 {
	fn unsynch(self) -> Self {
		let u = self;
		((u & 0x7F00_0000) >> 3) | ((u & 0x7F_0000) >> 2) | ((u & 0x7F00) >> 1) | (u & 0x7F)
	}

	fn is_synchsafe(self) -> bool {
		self & 0x8080_8080 == 0
	}
}

/// Decode a 4 byte synchsafe size field
///
/// A field with a high bit set is an error in [`ParsingMode::Strict`], otherwise the high bits
/// are dropped.
pub(crate) fn decode_size(raw: [u8; 4], parse_mode: ParsingMode) -> Result<u32> {
	let size = BigEndian::read_u32(&raw);

	if !size.is_synchsafe() {
		parse_mode_choice!(
			parse_mode,
			STRICT: id3v2_err!(@BAIL BadSynchsafeInteger(raw)),
			DEFAULT: log::warn!("Size {raw:02X?} is not synchsafe, ignoring the high bits"),
		);
	}

	Ok(size.unsynch())
}
