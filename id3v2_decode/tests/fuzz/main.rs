#![allow(missing_docs)]

#[path = "../util/mod.rs"]
mod util;

use id3v2_decode::config::{ParseOptions, ParsingMode};
use proptest::collection::vec;
use proptest::prelude::*;
use proptest::sample::Index;

use util::{TagBuilder, frame, text_frame};

const MODES: [ParsingMode; 3] = [
	ParsingMode::Strict,
	ParsingMode::BestAttempt,
	ParsingMode::Relaxed,
];

// Only checks that nothing panics, any result is fine
fn read_all_modes(bytes: &[u8]) {
	for mode in MODES {
		let _ = id3v2_decode::parse_with_options(bytes, ParseOptions::new().parsing_mode(mode));
	}

	let _ = id3v2_decode::read_header(bytes);
}

fn sample_tag() -> Vec<u8> {
	#[rustfmt::skip]
	let extended_header = [
		0x00, 0x00, 0x00, 0x0F,
		0x01, 0x70,
		0x00,
		0x05, 0x00, 0x00, 0x00, 0x01, 0x7F,
		0x01, 0x40,
	];

	TagBuilder::v4()
		.extended_header(&extended_header)
		.frame(&text_frame(b"TIT2", 1, &[0xFF, 0xFE, b'H', 0, b'i', 0, 0, 0]))
		.frame(&frame(
			b"APIC",
			[0, 0],
			b"\x01image/jpeg\x00\x03\xFF\xFEA\x00\x00\x00\xFF\xD8\xFF",
		))
		.frame(&frame(b"TXXX", [0x60, 0x4F], b"\x00desc\x00value"))
		.frame(&text_frame(b"TCON", 3, b"Rock\0Pop"))
		.padding(8)
		.build()
}

#[test_log::test]
fn sample_tag_is_valid() {
	let tag = id3v2_decode::parse_with_options(
		&sample_tag(),
		ParseOptions::new().parsing_mode(ParsingMode::Strict),
	)
	.unwrap()
	.unwrap();

	assert_eq!(tag.len(), 4);
}

#[test_log::test]
fn every_truncation() {
	let tag = sample_tag();
	for len in 0..=tag.len() {
		read_all_modes(&tag[..len]);
	}
}

#[test_log::test]
fn single_byte_mutations() {
	let tag = sample_tag();
	for position in 0..tag.len() {
		for value in [0x00, 0x01, 0x7F, 0x80, 0xFE, 0xFF] {
			let mut mutated = tag.clone();
			mutated[position] = value;
			read_all_modes(&mutated);
		}
	}
}

#[test_log::test]
fn huge_declared_sizes() {
	// Maximum tag size, and a frame claiming the maximum size, with almost no data behind them
	read_all_modes(b"ID3\x04\x00\x00\x7F\x7F\x7F\x7F");
	read_all_modes(b"ID3\x04\x00\x40\x7F\x7F\x7F\x7F\x7F\x7F\x7F\x7F");
	read_all_modes(b"ID3\x04\x00\x00\x00\x00\x00\x14TIT2\x7F\x7F\x7F\x7F\x00\x00\x00\x00");
	read_all_modes(b"ID3\x03\x00\x00\x00\x00\x00\x14APIC\xFF\xFF\xFF\xFF\x00\x00\x00\x00");
}

proptest! {
	#[test]
	fn mutated_sample_never_panics(
		mutations in vec((any::<Index>(), any::<u8>()), 1..8),
		len in any::<Index>(),
	) {
		let mut tag = sample_tag();
		for (position, value) in mutations {
			let position = position.index(tag.len());
			tag[position] = value;
		}

		let len = len.index(tag.len() + 1);
		read_all_modes(&tag[..len]);
	}

	#[test]
	fn arbitrary_body_never_panics(
		body in vec(any::<u8>(), 0..256),
		major in 3_u8..=4,
		flags in any::<u8>(),
	) {
		// Declare the body as the tag, so the frame scanner sees all of it
		let mut bytes = TagBuilder::new(major)
			.declared_size(body.len() as u32)
			.flags(flags & 0xF0)
			.build();
		bytes.extend_from_slice(&body);
		read_all_modes(&bytes);

		// And the same bytes after an empty tag, which must never be read
		let mut bytes = TagBuilder::new(major).build();
		bytes.extend_from_slice(&body);
		let tag = id3v2_decode::parse(&bytes).unwrap().unwrap();
		prop_assert!(tag.is_empty());
	}

	#[test]
	fn no_signature_is_always_absent(bytes in vec(any::<u8>(), 0..64)) {
		prop_assume!(!bytes.starts_with(b"ID3"));

		for mode in MODES {
			let options = ParseOptions::new().parsing_mode(mode);
			let parsed = id3v2_decode::parse_with_options(&bytes, options);
			prop_assert!(matches!(parsed, Ok(None)));
		}

		prop_assert!(matches!(id3v2_decode::read_header(&bytes), Ok(None)));
	}
}
