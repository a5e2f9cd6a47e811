use crate::error;
use crate::identifier;

use std::fmt;

use log::{debug, warn};

use error::{RecordError, TagError};
use identifier::TagIdentifier;

/// Technology family a detected tag speaks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagTechnology {
    MiFare,
    Iso7816 { initial_selected_aid: Option<String> },
    Iso15693 { ic_manufacturer_code: u8 },
    FeliCa,
    Unknown,
}

impl TagTechnology {
    pub fn label(&self) -> &'static str {
        match self {
            TagTechnology::MiFare => "MiFare / ISO14443",
            TagTechnology::Iso7816 { .. } => "ISO7816 (APDU)",
            TagTechnology::Iso15693 { .. } => "ISO15693",
            TagTechnology::FeliCa => "FeliCa",
            TagTechnology::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for TagTechnology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Raw detection record handed over by the NFC session.
///
/// Identifier fields are optional: the session may fail to read them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetectionRecord {
    MiFare {
        identifier: Option<Vec<u8>>,
    },
    Iso7816 {
        identifier: Option<Vec<u8>>,
        initial_selected_aid: Option<String>,
    },
    Iso15693 {
        identifier: Option<Vec<u8>>,
        ic_manufacturer_code: u8,
    },
    FeliCa {
        current_idm: Option<Vec<u8>>,
    },
    Unknown,
}

impl DetectionRecord {
    /// Builds a record from its textual form.
    ///
    /// `technology` is one of `mifare`, `iso7816`, `iso15693`, `felica`
    /// (case-insensitive), anything else gives `Unknown`. `aux` carries the
    /// AID for ISO7816 and the decimal or `0x`-prefixed manufacturer code for
    /// ISO15693.
    pub fn parse(technology: &str, uid_hex: &str, aux: Option<&str>) -> Result<Self, RecordError> {
        let record = match technology.to_ascii_lowercase().as_str() {
            "mifare" => DetectionRecord::MiFare {
                identifier: Self::parse_uid(uid_hex)?,
            },
            "iso7816" => DetectionRecord::Iso7816 {
                identifier: Self::parse_uid(uid_hex)?,
                initial_selected_aid: aux.map(|x| x.to_owned()),
            },
            "iso15693" => DetectionRecord::Iso15693 {
                identifier: Self::parse_uid(uid_hex)?,
                ic_manufacturer_code: Self::parse_code(
                    aux.ok_or(RecordError::MissingManufacturerCode)?,
                )?,
            },
            "felica" => DetectionRecord::FeliCa {
                current_idm: Self::parse_uid(uid_hex)?,
            },
            _ => DetectionRecord::Unknown,
        };

        Ok(record)
    }

    /// Empty input means the session could not read the identifier.
    fn parse_uid(uid_hex: &str) -> Result<Option<Vec<u8>>, RecordError> {
        match uid_hex.trim() {
            "" => Ok(None),
            x => Ok(Some(
                hex::decode(x).map_err(|e| RecordError::InvalidHex(format!("{}", e)))?,
            )),
        }
    }

    fn parse_code(code: &str) -> Result<u8, RecordError> {
        let code = code.trim();
        let parsed = match code.strip_prefix("0x").or_else(|| code.strip_prefix("0X")) {
            Some(x) => u8::from_str_radix(x, 16),
            None => code.parse::<u8>(),
        };

        parsed.map_err(|_| RecordError::InvalidManufacturerCode(code.to_owned()))
    }
}

/// Splits a detection record into its technology and identifier.
///
/// Fails with [`TagError::NoIdentifier`] when the identifier is absent or
/// empty, and always for unrecognized records.
pub fn classify(record: DetectionRecord) -> Result<(TagTechnology, TagIdentifier), TagError> {
    let (technology, raw) = match record {
        DetectionRecord::MiFare { identifier } => (TagTechnology::MiFare, identifier),
        DetectionRecord::Iso7816 {
            identifier,
            initial_selected_aid,
        } => (TagTechnology::Iso7816 { initial_selected_aid }, identifier),
        DetectionRecord::Iso15693 {
            identifier,
            ic_manufacturer_code,
        } => (TagTechnology::Iso15693 { ic_manufacturer_code }, identifier),
        DetectionRecord::FeliCa { current_idm } => (TagTechnology::FeliCa, current_idm),
        DetectionRecord::Unknown => (TagTechnology::Unknown, None),
    };

    let identifier = match raw {
        Some(x) => TagIdentifier::from_raw(x),
        None => Err(TagError::NoIdentifier),
    };

    match identifier {
        Ok(x) => {
            debug!("classified {} tag, uid {}", technology, x);
            Ok((technology, x))
        }
        Err(e) => {
            warn!("no identifier for {} tag", technology);
            Err(e)
        }
    }
}
