//! Plain-text persistence: one `name,x,y,z` record per line, no header and
//! no quoting.

use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::command::parse_number;
use crate::error::{Error, Result};
use crate::store::VectorStore;
use crate::vector::Vector3;

/// A line that `load` could not turn into an entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// 1-based line number in the file.
    pub line_no: usize,
    pub content: String,
    pub reason: String,
}

/// Summary of a best-effort `load`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub loaded: usize,
    pub skipped: Vec<SkippedLine>,
}

impl fmt::Display for LoadReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, skipped) in self.skipped.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "Warning: bad line ignored: {}", skipped.content)?;
        }
        Ok(())
    }
}

/// Write every entry to `path`, replacing any existing file.
///
/// Coordinates are written with 6 decimals. Returns the number of records
/// written. The store is never modified.
pub fn save(store: &VectorStore, path: &Path) -> Result<usize> {
    let file = File::create(path).map_err(|e| Error::io(path, e))?;
    let mut out = BufWriter::new(file);

    for entry in store.iter() {
        let Vector3 { x, y, z } = entry.value;
        writeln!(out, "{},{:.6},{:.6},{:.6}", entry.name, x, y, z)
            .map_err(|e| Error::io(path, e))?;
    }
    out.flush().map_err(|e| Error::io(path, e))?;

    log::info!("Saved {} vectors to {}", store.len(), path.display());
    Ok(store.len())
}

/// Replace the store's contents with the records in `path`.
///
/// If the file cannot be opened the store is left as it was. Once it is
/// open, the store is cleared and each non-empty line is loaded
/// independently: malformed lines are reported in the returned
/// [`LoadReport`] and skipped. A read error part way through keeps the
/// entries loaded so far.
pub fn load(store: &mut VectorStore, path: &Path) -> Result<LoadReport> {
    let file = File::open(path).map_err(|e| Error::io(path, e))?;
    let mut reader = BufReader::new(file);

    store.clear();

    let mut report = LoadReport::default();
    let mut buf = Vec::new();
    let mut line_no = 0;

    loop {
        buf.clear();
        let read = reader
            .read_until(b'\n', &mut buf)
            .map_err(|e| Error::io(path, e))?;
        if read == 0 {
            break;
        }
        line_no += 1;

        let text = String::from_utf8_lossy(&buf);
        let line = text.trim();
        if line.is_empty() {
            continue;
        }

        match parse_record(line).and_then(|(name, value)| store.set(name, value)) {
            Ok(()) => report.loaded += 1,
            Err(e) => {
                log::warn!("{}:{}: skipping '{}': {}", path.display(), line_no, line, e);
                report.skipped.push(SkippedLine {
                    line_no,
                    content: line.to_string(),
                    reason: e.to_string(),
                });
            }
        }
    }

    log::info!(
        "Loaded {} vectors from {} ({} lines skipped)",
        report.loaded,
        path.display(),
        report.skipped.len()
    );
    Ok(report)
}

fn parse_record(line: &str) -> Result<(&str, Vector3)> {
    let malformed = || Error::InvalidExpression(format!("expected name,x,y,z: {line}"));

    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    let [name, x, y, z] = fields[..] else {
        return Err(malformed());
    };

    let coord = |field: &str| parse_number(field).ok_or_else(malformed);
    Ok((name, Vector3::from([coord(x)?, coord(y)?, coord(z)?])))
}
