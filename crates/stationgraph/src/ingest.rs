//! Trip-record ingestion from station CSV exports.
//!
//! A trip export row carries 15 comma-separated fields; only the six
//! station fields matter here. Malformed or incomplete rows are filtered
//! out before they reach the graph; the core assumes well-typed numbers.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::Result;
use crate::graph::Graph;
use crate::station::Station;

const FIELDS_PER_RECORD: usize = 15;
const START_STATION_ID: usize = 3;
const START_LATITUDE: usize = 5;
const START_LONGITUDE: usize = 6;
const END_STATION_ID: usize = 7;
const END_LATITUDE: usize = 9;
const END_LONGITUDE: usize = 10;

/// One trip between two stations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TripRecord {
    pub start: Station,
    pub end: Station,
}

impl TripRecord {
    /// Parses one data row, with spaces stripped. `None` when the row has
    /// the wrong field count or a non-numeric station field.
    pub fn parse(line: &str) -> Option<TripRecord> {
        let cleaned: String = line.chars().filter(|c| *c != ' ').collect();
        let fields: Vec<&str> = cleaned.split(',').collect();
        if fields.len() != FIELDS_PER_RECORD {
            return None;
        }
        let start = Station::new(
            fields[START_STATION_ID].parse().ok()?,
            fields[START_LATITUDE].parse().ok()?,
            fields[START_LONGITUDE].parse().ok()?,
        );
        let end = Station::new(
            fields[END_STATION_ID].parse().ok()?,
            fields[END_LATITUDE].parse().ok()?,
            fields[END_LONGITUDE].parse().ok()?,
        );
        Some(TripRecord { start, end })
    }
}

/// Counters for one ingestion pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestStats {
    /// Data rows read (header excluded).
    pub records: usize,
    /// Rows applied to the graph.
    pub applied: usize,
    /// Rows dropped as malformed.
    pub skipped: usize,
}

/// Feeds one record into the graph: both stations inserted (idempotent on
/// repeat ids), then a deduplicated edge between them (idempotent on repeat
/// pairs; self-pairs rejected by the self-loop rule).
pub fn apply(graph: &mut Graph, record: &TripRecord) {
    graph.insert_vertex(record.start);
    graph.insert_vertex(record.end);
    graph.insert_edge_deduplicating(record.start.id, record.end.id);
}

/// Loads every data row of a trip CSV export into `graph`. The first line
/// is a header and is skipped.
pub fn load_csv(graph: &mut Graph, path: impl AsRef<Path>) -> Result<IngestStats> {
    let path = path.as_ref();
    let reader = BufReader::new(File::open(path)?);
    let mut stats = IngestStats::default();

    for (line_no, line) in reader.lines().enumerate() {
        let line = line?;
        if line_no == 0 {
            continue;
        }
        stats.records += 1;
        match TripRecord::parse(&line) {
            Some(record) => {
                apply(graph, &record);
                stats.applied += 1;
            }
            None => {
                stats.skipped += 1;
                tracing::debug!(
                    line = line_no + 1,
                    path = %path.display(),
                    "skipping malformed trip record"
                );
            }
        }
    }

    tracing::debug!(
        path = %path.display(),
        records = stats.records,
        applied = stats.applied,
        skipped = stats.skipped,
        "trip file ingested"
    );
    Ok(stats)
}
