#![allow(dead_code)]

use std::path::Path;

/// Encode `n` as a 4 byte synchsafe integer
pub fn synchsafe(n: u32) -> [u8; 4] {
	assert!(n <= 0x0FFF_FFFF, "{n} doesn't fit in a synchsafe integer");
	[
		((n >> 21) & 0x7F) as u8,
		((n >> 14) & 0x7F) as u8,
		((n >> 7) & 0x7F) as u8,
		(n & 0x7F) as u8,
	]
}

/// Build a frame with an ID3v2.4 header
pub fn frame(id: &[u8; 4], flags: [u8; 2], content: &[u8]) -> Vec<u8> {
	let mut frame = Vec::with_capacity(10 + content.len());
	frame.extend_from_slice(id);
	frame.extend_from_slice(&synchsafe(content.len() as u32));
	frame.extend_from_slice(&flags);
	frame.extend_from_slice(content);
	frame
}

/// Build a text frame with the given encoding byte and already encoded text
pub fn text_frame(id: &[u8; 4], encoding: u8, text: &[u8]) -> Vec<u8> {
	let mut content = vec![encoding];
	content.extend_from_slice(text);
	frame(id, [0, 0], &content)
}

/// Builds a tag byte-by-byte
pub struct TagBuilder {
	major: u8,
	flags: u8,
	extended_header: Vec<u8>,
	body: Vec<u8>,
	padding: usize,
	declared_size: Option<u32>,
}

impl TagBuilder {
	pub fn v3() -> Self {
		Self::new(3)
	}

	pub fn v4() -> Self {
		Self::new(4)
	}

	pub fn new(major: u8) -> Self {
		Self {
			major,
			flags: 0,
			extended_header: Vec::new(),
			body: Vec::new(),
			padding: 0,
			declared_size: None,
		}
	}

	/// Set the raw tag flags byte, the extended header bit is handled separately
	pub fn flags(mut self, flags: u8) -> Self {
		self.flags = flags;
		self
	}

	/// Add a raw extended header, including its size field
	pub fn extended_header(mut self, extended_header: &[u8]) -> Self {
		self.extended_header = extended_header.to_vec();
		self
	}

	pub fn frame(mut self, frame: &[u8]) -> Self {
		self.body.extend_from_slice(frame);
		self
	}

	pub fn padding(mut self, padding: usize) -> Self {
		self.padding = padding;
		self
	}

	/// Override the size stored in the tag header
	pub fn declared_size(mut self, size: u32) -> Self {
		self.declared_size = Some(size);
		self
	}

	pub fn build(self) -> Vec<u8> {
		let size = self.extended_header.len() + self.body.len() + self.padding;

		let mut flags = self.flags;
		if !self.extended_header.is_empty() {
			flags |= 0x40;
		}

		let mut tag = vec![b'I', b'D', b'3', self.major, 0, flags];
		tag.extend_from_slice(&synchsafe(self.declared_size.unwrap_or(size as u32)));
		tag.extend_from_slice(&self.extended_header);
		tag.extend_from_slice(&self.body);
		tag.resize(tag.len() + self.padding, 0);
		tag
	}
}

pub fn read_asset(name: &str) -> Vec<u8> {
	let path = Path::new(env!("CARGO_MANIFEST_DIR"))
		.join("tests/assets")
		.join(name);
	std::fs::read(path).unwrap()
}
