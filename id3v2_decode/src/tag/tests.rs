use crate::frame::FrameContent;
use crate::picture::{MimeType, PictureType};
use crate::tag::Id3v2Tag;
use crate::util::text::TextEncoding;

#[path = "../../tests/util/mod.rs"]
mod util;

use util::TagBuilder;

fn tag(frames: &[Vec<u8>]) -> Id3v2Tag {
	let bytes = frames
		.iter()
		.fold(TagBuilder::v4(), |builder, frame| builder.frame(frame))
		.build();

	crate::parse(&bytes).unwrap().unwrap()
}

fn sample() -> Id3v2Tag {
	tag(&[
		util::frame(b"TIT2", [0, 0], b"\x00Foo title"),
		util::frame(b"TPE1", [0, 0], b"\x03Bar artist\x00Baz artist"),
		util::frame(b"APIC", [0, 0], b"\x00image/png\x00\x03\x00\x89PNG"),
		util::frame(b"TPE1", [0, 0], b"\x00Qux artist"),
		util::frame(b"COMM", [0, 0], b"\x00eng\x00\x00Comment"),
		util::frame(b"APIC", [0, 0], b"\x00-->\x00\x04Back\x00https://example.com"),
	])
}

#[test_log::test]
fn get_returns_first() {
	let tag = sample();

	let artist = tag.get("TPE1").unwrap().content().as_text().unwrap();
	assert_eq!(artist.encoding, TextEncoding::UTF8);
	assert_eq!(artist.value, "Bar artist\0Baz artist");

	assert!(tag.get("TALB").is_none());
}

#[test_log::test]
fn get_all_in_order() {
	let tag = sample();

	let artists = tag
		.get_all("TPE1")
		.filter_map(|f| f.content().as_text())
		.map(|text| text.value.as_str())
		.collect::<Vec<_>>();
	assert_eq!(artists, ["Bar artist\0Baz artist", "Qux artist"]);

	assert_eq!(tag.get_all("TALB").count(), 0);
}

#[test_log::test]
fn get_text() {
	let tag = sample();

	assert_eq!(tag.get_text("TIT2"), Some("Foo title"));
	assert_eq!(tag.get_text("TPE1"), Some("Bar artist\0Baz artist"));

	// Not text frames
	assert_eq!(tag.get_text("COMM"), None);
	assert_eq!(tag.get_text("APIC"), None);
}

#[test_log::test]
fn pictures() {
	let tag = sample();

	let pictures = tag.pictures().collect::<Vec<_>>();
	assert_eq!(pictures.len(), 2);

	assert_eq!(pictures[0].mime(), MimeType::Png);
	assert_eq!(pictures[0].picture_type, PictureType::CoverFront);
	assert_eq!(pictures[0].description, "");
	assert_eq!(pictures[0].data, b"\x89PNG");

	assert_eq!(pictures[1].mime(), MimeType::Link);
	assert_eq!(pictures[1].picture_type, PictureType::CoverBack);
	assert_eq!(pictures[1].description, "Back");
	assert_eq!(pictures[1].data, b"https://example.com");
}

#[test_log::test]
fn iteration() {
	let tag = sample();
	assert_eq!(tag.len(), 6);
	assert!(!tag.is_empty());

	let ids = (&tag).into_iter().map(|f| f.id_str()).collect::<Vec<_>>();
	assert_eq!(ids, ["TIT2", "TPE1", "APIC", "TPE1", "COMM", "APIC"]);
	assert_eq!(tag.iter().count(), tag.frames().len());

	let contents = tag
		.into_iter()
		.map(|f| f.into_content().name())
		.collect::<Vec<_>>();
	assert_eq!(
		contents,
		["Text", "Text", "AttachedPicture", "Text", "Unknown", "AttachedPicture"]
	);
}

#[test_log::test]
fn empty_tag() {
	let tag = tag(&[]);

	assert!(tag.is_empty());
	assert!(tag.get("TIT2").is_none());
	assert_eq!(tag.pictures().count(), 0);
	assert!(tag.into_frames().is_empty());
}

#[test_log::test]
fn frames_keep_their_content() {
	let tag = sample();

	let comment = tag.get("COMM").unwrap();
	assert!(matches!(
		comment.content(),
		FrameContent::Unknown(unknown) if unknown.data == b"\x00eng\x00\x00Comment"
	));
}
