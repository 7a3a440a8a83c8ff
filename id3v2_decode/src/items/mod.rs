mod attached_picture_frame;
mod text_information_frame;
mod unknown_frame;

pub use attached_picture_frame::AttachedPictureFrame;
pub use text_information_frame::TextInformationFrame;
pub use unknown_frame::UnknownFrame;
