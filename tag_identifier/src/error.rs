use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TagError {
    #[error("unable to obtain the tag identifier")]
    NoIdentifier,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    #[error("invalid uid hex: {0}")]
    InvalidHex(String),
    #[error("invalid manufacturer code '{0}'")]
    InvalidManufacturerCode(String),
    #[error("ISO15693 record needs a manufacturer code")]
    MissingManufacturerCode,
}

#[derive(Error, Debug)]
pub enum ReaderError {
    #[error("no tag available")]
    NoTag,
    #[error("unable to obtain the tag identifier")]
    NoIdentifier,
}

impl From<TagError> for ReaderError {
    fn from(error: TagError) -> Self {
        match error {
            TagError::NoIdentifier => ReaderError::NoIdentifier,
        }
    }
}
