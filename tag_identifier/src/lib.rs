pub mod identifier;
pub mod reader;
pub mod report;
pub mod technology;

pub mod error;

pub use error::{ReaderError, RecordError, TagError};
pub use identifier::TagIdentifier;
pub use report::{format, render, IdentifierReport};
pub use technology::{classify, DetectionRecord, TagTechnology};
