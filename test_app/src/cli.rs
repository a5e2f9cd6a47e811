use clap::{Parser, ValueEnum};

/// Replays one tag detection and prints its identifier report.
#[derive(Parser, Debug)]
#[command(name = "test_app")]
#[command(about = "Tag identifier report from a recorded detection", long_about = None)]
pub struct Args {
    /// Technology family of the detected tag
    #[arg(value_enum)]
    pub technology: Technology,

    /// Tag identifier as hex; pass "" for a tag without identifier
    #[arg(value_name = "UID_HEX")]
    pub uid_hex: String,

    /// ISO7816 selected AID or ISO15693 manufacturer code (decimal or 0x-prefixed)
    #[arg(value_name = "AUX")]
    pub aux: Option<String>,

    /// Scan timeout in seconds
    #[arg(short, long, default_value = "60")]
    pub timeout: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Technology {
    Mifare,
    Iso7816,
    Iso15693,
    Felica,
    Unknown,
}

impl Technology {
    /// Name understood by `DetectionRecord::parse`
    pub fn name(&self) -> &'static str {
        match self {
            Technology::Mifare => "mifare",
            Technology::Iso7816 => "iso7816",
            Technology::Iso15693 => "iso15693",
            Technology::Felica => "felica",
            Technology::Unknown => "unknown",
        }
    }
}
