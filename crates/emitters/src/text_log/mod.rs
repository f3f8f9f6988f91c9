//! Text log emitter - append-only CSV file.
//!
//! Writes one line per data point to a text file. The file is created
//! with a header row on first use; subsequent runs append to it.
//!
//! # Output Format
//!
//! ```text
//! name, value, timestamp, kind, properties
//! startup_ms, 42, 2025-01-15T10:30:45.123Z, integer, {env: prod}
//! ready, , 2025-01-15T10:30:45.124Z, event, {env: prod}
//! ```
//!
//! The file is opened for append on every emit call and closed after the
//! batch is written, so external log rotation is safe between batches.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::SecondsFormat;
use tracing::debug;

use beacon_metrics::{DataPoint, EmitError, Emitter, Properties};

use crate::common::EmitterError;

const HEADER: &str = "name, value, timestamp, kind, properties";

/// Emitter that appends data points to a CSV text file.
#[derive(Debug)]
pub struct TextLogEmitter {
    path: PathBuf,
}

impl TextLogEmitter {
    /// Create the emitter, writing a header row if `path` does not exist
    /// yet. An existing file is appended to untouched.
    pub fn create(path: impl Into<PathBuf>) -> Result<Self, EmitterError> {
        let path = path.into();
        if !path.exists() {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, format!("{HEADER}\n"))?;
        }
        Ok(Self { path })
    }

    /// Path of the log file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_batch(&self, properties: &Properties, batch: &[DataPoint]) -> Result<(), EmitterError> {
        let rendered_props = render_properties(properties);

        let mut file = OpenOptions::new().append(true).open(&self.path)?;
        for point in batch {
            writeln!(file, "{}", render_line(point, &rendered_props))?;
        }
        file.flush()?;

        debug!(points = batch.len(), path = %self.path.display(), "batch appended");
        Ok(())
    }
}

impl Emitter for TextLogEmitter {
    fn emit(&mut self, properties: &Properties, batch: &[DataPoint]) -> Result<(), EmitError> {
        self.write_batch(properties, batch)?;
        Ok(())
    }
}

/// One CSV line for one data point.
fn render_line(point: &DataPoint, rendered_props: &str) -> String {
    format!(
        "{}, {}, {}, {}, {}",
        point.name(),
        point.value(),
        point.recorded_at().to_rfc3339_opts(SecondsFormat::Millis, true),
        point.kind(),
        rendered_props,
    )
}

/// Property map in `{key: value; key: value}` form.
fn render_properties(properties: &Properties) -> String {
    let inner = properties
        .iter()
        .map(|(k, v)| format!("{k}: {v}"))
        .collect::<Vec<_>>()
        .join("; ");
    format!("{{{inner}}}")
}
