use crate::identifier;
use crate::technology;

use std::fmt;

use log::{debug, warn};

use identifier::{TagIdentifier, DECIMAL_WIDTH};
use technology::TagTechnology;

/// Shown in place of a missing ISO7816 application identifier.
pub const AID_PLACEHOLDER: &str = "—";

/// Human-readable summary of one detected tag.
///
/// The two decimal values are folded into a `u64`. Identifiers longer than
/// 8 bytes keep only their low-order 8 bytes there; check
/// [`IdentifierReport::is_decimal_truncated`] before relying on them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentifierReport {
    technology: String,
    hex: String,
    length: usize,
    decimal_be: u64,
    decimal_rev: u64,
    extra_info: Vec<String>,
}

impl IdentifierReport {
    pub fn technology(&self) -> &str {
        &self.technology
    }

    pub fn hex(&self) -> &str {
        &self.hex
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn decimal_be(&self) -> u64 {
        self.decimal_be
    }

    pub fn decimal_rev(&self) -> u64 {
        self.decimal_rev
    }

    pub fn extra_info(&self) -> &[String] {
        &self.extra_info
    }

    pub fn is_decimal_truncated(&self) -> bool {
        self.length > DECIMAL_WIDTH
    }

    fn lines(&self) -> Vec<String> {
        let mut lines = vec![
            format!("Type: {}", self.technology),
            format!("UID (hex): {}", self.hex),
            format!("UID length (bytes): {}", self.length),
            format!("UID decimal (big-endian): {}", self.decimal_be),
            format!("UID decimal (reversed bytes): {}", self.decimal_rev),
        ];

        if !self.extra_info.is_empty() {
            lines.push(String::new());
            lines.extend(self.extra_info.iter().cloned());
        }

        lines
    }
}

impl fmt::Display for IdentifierReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lines().join("\n"))
    }
}

/// Builds the report for a classified tag.
pub fn format(technology: &TagTechnology, identifier: &TagIdentifier) -> IdentifierReport {
    let extra_info = match technology {
        TagTechnology::Iso7816 {
            initial_selected_aid,
        } => vec![format!(
            "AID(s): {}",
            initial_selected_aid.as_deref().unwrap_or(AID_PLACEHOLDER)
        )],
        TagTechnology::Iso15693 {
            ic_manufacturer_code,
        } => vec![format!("IC Manufacturer Code: {}", ic_manufacturer_code)],
        TagTechnology::MiFare | TagTechnology::FeliCa | TagTechnology::Unknown => vec![],
    };

    if identifier.is_decimal_truncated() {
        warn!(
            "uid {} is {} bytes long, decimal values keep only the last {} bytes",
            identifier,
            identifier.len(),
            DECIMAL_WIDTH
        );
    }

    let report = IdentifierReport {
        technology: technology.label().to_owned(),
        hex: identifier.hex(),
        length: identifier.len(),
        decimal_be: identifier.decimal_be(),
        decimal_rev: identifier.decimal_rev(),
        extra_info,
    };

    debug!("report built: {:?}", report);
    report
}

/// Multi-line text of the report, without a trailing newline.
pub fn render(report: &IdentifierReport) -> String {
    report.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uid(bytes: &[u8]) -> TagIdentifier {
        TagIdentifier::from_raw(bytes.to_vec()).unwrap()
    }

    #[test]
    fn mifare_test() {
        let report = format(&TagTechnology::MiFare, &uid(&[0x04, 0x1A, 0x2B, 0x3C]));

        assert_eq!(report.technology(), "MiFare / ISO14443");
        assert_eq!(report.hex(), "041A2B3C");
        assert_eq!(report.length(), 4);
        assert_eq!(report.decimal_be(), 0x041A2B3C);
        assert_eq!(report.decimal_be(), 68823868);
        assert_eq!(report.decimal_rev(), 0x3C2B1A04);
        assert_eq!(report.decimal_rev(), 1009457668);
        assert!(report.extra_info().is_empty());
        assert!(!report.is_decimal_truncated());

        assert_eq!(
            render(&report),
            "Type: MiFare / ISO14443\n\
             UID (hex): 041A2B3C\n\
             UID length (bytes): 4\n\
             UID decimal (big-endian): 68823868\n\
             UID decimal (reversed bytes): 1009457668"
        );
    }

    #[test]
    fn iso15693_test() {
        let technology = TagTechnology::Iso15693 {
            ic_manufacturer_code: 0x07,
        };
        let report = format(&technology, &uid(&[0xE0, 0x04]));

        assert_eq!(report.hex(), "E004");
        assert_eq!(report.extra_info(), &["IC Manufacturer Code: 7".to_owned()]);
        assert_eq!(
            render(&report),
            "Type: ISO15693\n\
             UID (hex): E004\n\
             UID length (bytes): 2\n\
             UID decimal (big-endian): 57348\n\
             UID decimal (reversed bytes): 1248\n\
             \n\
             IC Manufacturer Code: 7"
        );
    }

    #[test]
    fn iso7816_test() {
        let technology = TagTechnology::Iso7816 {
            initial_selected_aid: None,
        };
        let report = format(&technology, &uid(&[0x08, 0x11, 0x22, 0x33]));
        assert_eq!(report.extra_info(), &["AID(s): —".to_owned()]);
        assert!(render(&report).ends_with("\n\nAID(s): —"));

        let technology = TagTechnology::Iso7816 {
            initial_selected_aid: Some("A0000002471001".to_owned()),
        };
        let report = format(&technology, &uid(&[0x08, 0x11, 0x22, 0x33]));
        assert_eq!(report.extra_info(), &["AID(s): A0000002471001".to_owned()]);
    }

    #[test]
    fn felica_test() {
        let report = format(&TagTechnology::FeliCa, &uid(&[0x01, 0x2E, 0x4C, 0xD2]));

        assert_eq!(report.technology(), "FeliCa");
        assert!(report.extra_info().is_empty());
        assert_eq!(render(&report).lines().count(), 5);
        assert!(!render(&report).ends_with('\n'));
    }

    #[test]
    fn single_byte_test() {
        let report = format(&TagTechnology::MiFare, &uid(&[0xA5]));

        assert_eq!(report.hex(), "A5");
        assert_eq!(report.decimal_be(), 165);
        assert_eq!(report.decimal_be(), report.decimal_rev());
    }

    #[test]
    fn long_uid_test() {
        let bytes = [0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0A];
        let report = format(&TagTechnology::MiFare, &uid(&bytes));

        assert_eq!(report.hex(), "0102030405060708090A");
        assert_eq!(report.length(), 10);
        assert!(report.is_decimal_truncated());
        assert_eq!(report.decimal_be(), 217304205466536202);
        assert_eq!(report.decimal_rev(), 578437695752307201);

        assert_eq!(
            render(&report),
            "Type: MiFare / ISO14443\n\
             UID (hex): 0102030405060708090A\n\
             UID length (bytes): 10\n\
             UID decimal (big-endian): 217304205466536202\n\
             UID decimal (reversed bytes): 578437695752307201"
        );
    }
}
