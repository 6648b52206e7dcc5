#![warn(missing_docs)]
//! Test and tooling surfaces: canned scenes plus a JSONL record sink.

mod fixtures;

use anyhow::Result;
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

pub use fixtures::*;

/// A sink that writes newline-delimited JSON records.
pub struct JsonlSink {
    writer: Box<dyn Write>,
}

impl JsonlSink {
    /// Create a new sink writing to a file at `path`.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::create(path)?;
        Ok(Self::from_writer(BufWriter::new(file)))
    }

    /// Create a sink writing to standard output.
    pub fn stdout() -> Self {
        Self::from_writer(io::stdout())
    }

    /// Wrap an arbitrary writer.
    pub fn from_writer<W: Write + 'static>(writer: W) -> Self {
        Self {
            writer: Box::new(writer),
        }
    }

    /// Append a record to the log.
    pub fn write<T: Serialize>(&mut self, record: &T) -> Result<()> {
        let line = serde_json::to_string(record)?;
        self.writer.write_all(line.as_bytes())?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }

    /// Flush buffered records.
    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn records_are_written_one_per_line() {
        let path = std::env::temp_dir().join(format!(
            "pointercast-testkit-{}.jsonl",
            std::process::id()
        ));
        {
            let mut sink = JsonlSink::create(&path).expect("can create temp log");
            sink.write(&json!({ "pointer": 0, "hits": 2 }))
                .expect("can write record");
            sink.write(&json!({ "pointer": 1, "hits": 0 }))
                .expect("can write record");
            sink.flush().expect("can flush");
        }

        let contents = std::fs::read_to_string(&path).expect("can read log");
        let lines: Vec<_> = contents.lines().collect();
        assert_eq!(lines.len(), 2);
        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["hits"], 2);
        let _ = std::fs::remove_file(path);
    }
}
