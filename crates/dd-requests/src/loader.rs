//! CSV request loader.
//!
//! # CSV format
//!
//! One row per passenger call.  Rows need not be sorted.
//!
//! ```csv
//! time,id,source,dest
//! 0,1,1,51
//! 0,2,1,37
//! 10,3,20,1
//! ```
//!
//! | Column   | Meaning                                   |
//! |----------|-------------------------------------------|
//! | `time`   | arrival tick                              |
//! | `id`     | request id, unique within the file        |
//! | `source` | floor where the passenger calls           |
//! | `dest`   | floor the passenger is travelling to      |
//!
//! Values are parsed as signed integers so that negative times and floors
//! reach [`RequestValidator`][crate::RequestValidator] and are reported per
//! request.  Malformed rows (non-numeric fields, missing columns) fail the
//! whole load.

use std::io::{Read, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use dd_core::RequestId;

use crate::{CallRequest, RequestError, RequestResult};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize, Serialize)]
struct RequestRecord {
    time:   i64,
    id:     u32,
    source: i64,
    dest:   i64,
}

impl From<RequestRecord> for CallRequest {
    fn from(r: RequestRecord) -> Self {
        CallRequest { time: r.time, id: RequestId(r.id), source: r.source, dest: r.dest }
    }
}

impl From<&CallRequest> for RequestRecord {
    fn from(c: &CallRequest) -> Self {
        RequestRecord { time: c.time, id: c.id.0, source: c.source, dest: c.dest }
    }
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load call requests from a CSV file, in file order.
pub fn load_requests_csv(path: &Path) -> RequestResult<Vec<CallRequest>> {
    let file = std::fs::File::open(path)?;
    load_requests_reader(file)
}

/// Like [`load_requests_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or reading stdin.
pub fn load_requests_reader<R: Read>(reader: R) -> RequestResult<Vec<CallRequest>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut requests = Vec::new();
    for (row, result) in csv_reader.deserialize::<RequestRecord>().enumerate() {
        // Row numbers are 1-based and skip the header line.
        let record = result.map_err(|e| RequestError::Parse(format!("row {}: {e}", row + 1)))?;
        requests.push(record.into());
    }
    log::debug!("loaded {} call requests", requests.len());
    Ok(requests)
}

/// Write `requests` as CSV in the format [`load_requests_reader`] reads.
///
/// Used to save a generated workload so a run can be replayed.
pub fn write_requests<W: Write>(writer: W, requests: &[CallRequest]) -> RequestResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for request in requests {
        csv_writer.serialize(RequestRecord::from(request))?;
    }
    csv_writer.flush()?;
    Ok(())
}
