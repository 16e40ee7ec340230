use crate::error::OrfResult;
use crate::io::{OnError, ReadReport, SkippedRecord};
use crate::orf::{find_orfs, Orf, ScanConfig};
use crate::seq::record::SeqRecord;
use log::{debug, warn};

/// Reported ORFs for one input sequence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OrfReport {
    pub header: Box<str>,
    pub orfs: Vec<Orf>,
}

impl OrfReport {
    pub fn id(&self) -> &str {
        self.header.split_whitespace().next().unwrap_or("")
    }
}

pub fn scan_record(record: &SeqRecord, config: &ScanConfig) -> OrfResult<OrfReport> {
    let orfs = find_orfs(record.seq(), config)?;
    debug!("{}: {} orfs reported", record.id(), orfs.len());
    Ok(OrfReport {
        header: record.header.clone(),
        orfs,
    })
}

/// Scan independent records, in parallel when the `parallel` feature is on.
/// Reports come back in input order. Under `OnError::Skip` a failing record is
/// listed in `skipped` and the rest are still reported.
pub fn scan_records(
    records: &[SeqRecord],
    config: &ScanConfig,
    on_error: OnError,
) -> OrfResult<ReadReport<Vec<OrfReport>>> {
    config.validate()?;

    let results: Vec<OrfResult<OrfReport>> =
        par_map!(records, |record: &SeqRecord| scan_record(record, config));

    let mut data = Vec::with_capacity(results.len());
    let mut skipped = Vec::new();
    for (index, (record, result)) in records.iter().zip(results).enumerate() {
        match result {
            Ok(report) => data.push(report),
            Err(err) if on_error == OnError::Skip && err.is_record_local() => {
                warn!("skipping record {index} ({}): {err}", record.id());
                skipped.push(SkippedRecord {
                    index,
                    id: Some(record.id().into()),
                    message: err.to_string().into_boxed_str(),
                });
            }
            Err(err) => return Err(err),
        }
    }

    Ok(ReadReport { data, skipped })
}
