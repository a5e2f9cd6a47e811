use crate::error;
use crate::report;
use crate::technology;

use std::cell::RefCell;
use std::collections::VecDeque;

use cancellation::CancellationToken;
use log::{info, warn};

use error::ReaderError;
use report::IdentifierReport;
use technology::DetectionRecord;

/// NFC session able to wait for a single tag.
pub trait TagReader {
    /// Blocks until one tag is detected or `ct` is canceled.
    fn scan_once(&self, ct: &CancellationToken) -> Result<ScanResult, ReaderError>;
}

#[derive(Debug)]
pub enum ScanResult {
    Canceled,
    Detected(DetectionRecord),
}

#[derive(Debug)]
pub enum ReportResult {
    Canceled,
    Success(IdentifierReport),
}

/// Runs one scan and turns the detected tag into a report.
pub fn read_report(
    reader: &impl TagReader,
    ct: &CancellationToken,
) -> Result<ReportResult, ReaderError> {
    let record = match reader.scan_once(ct)? {
        ScanResult::Canceled => {
            info!("scan canceled");
            return Ok(ReportResult::Canceled);
        }
        ScanResult::Detected(x) => x,
    };

    let (technology, identifier) = technology::classify(record)?;
    let report = report::format(&technology, &identifier);

    info!("tag read: {} {}", report.technology(), report.hex());
    Ok(ReportResult::Success(report))
}

/// Reader replaying pre-recorded detections, one per scan.
pub struct ReplayReader {
    records: RefCell<VecDeque<DetectionRecord>>,
}

impl ReplayReader {
    pub fn new(records: Vec<DetectionRecord>) -> Self {
        Self {
            records: RefCell::new(records.into()),
        }
    }

    pub fn push(&self, record: DetectionRecord) {
        self.records.borrow_mut().push_back(record);
    }

    pub fn remaining(&self) -> usize {
        self.records.borrow().len()
    }
}

impl TagReader for ReplayReader {
    fn scan_once(&self, ct: &CancellationToken) -> Result<ScanResult, ReaderError> {
        if ct.is_canceled() {
            return Ok(ScanResult::Canceled);
        }

        match self.records.borrow_mut().pop_front() {
            Some(record) => Ok(ScanResult::Detected(record)),
            None => {
                warn!("replay reader has no more records");
                Err(ReaderError::NoTag)
            }
        }
    }
}
