use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Destination for an exported summary (clipboard, file, terminal...).
pub trait SummarySink: Send + Sync {
    fn name(&self) -> &'static str;
    fn write(&self, text: &str) -> Result<(), ExportError>;
}

/// Export sink failure. Never propagated into the resolution state.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to write summary to {}: {source}", .path.display())]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write summary to stdout: {0}")]
    Stdout(#[source] std::io::Error),
    #[error("export sink unavailable: {0}")]
    Unavailable(String),
}

/// What happened to an export attempt. Only the first two variants should
/// produce a "copied" confirmation for the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportOutcome {
    Delivered,
    DeliveredViaFallback,
    Dropped,
}

impl ExportOutcome {
    pub fn confirmed(self) -> bool {
        !matches!(self, Self::Dropped)
    }
}

/// Best-effort export: try `primary`, then `fallback`, then give up quietly.
pub fn export_summary(
    primary: &dyn SummarySink,
    fallback: &dyn SummarySink,
    text: &str,
) -> ExportOutcome {
    let primary_error = match primary.write(text) {
        Ok(()) => {
            info!(sink = primary.name(), "summary exported");
            return ExportOutcome::Delivered;
        }
        Err(err) => err,
    };
    warn!(sink = primary.name(), error = %primary_error, "summary export failed, trying fallback");

    match fallback.write(text) {
        Ok(()) => {
            info!(sink = fallback.name(), "summary exported via fallback");
            ExportOutcome::DeliveredViaFallback
        }
        Err(err) => {
            warn!(sink = fallback.name(), error = %err, "fallback export failed, summary dropped");
            ExportOutcome::Dropped
        }
    }
}

/// Writes the summary to a file, replacing previous contents.
#[derive(Debug, Clone)]
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SummarySink for FileSink {
    fn name(&self) -> &'static str {
        "file"
    }

    fn write(&self, text: &str) -> Result<(), ExportError> {
        let mut contents = text.to_string();
        contents.push('\n');
        fs::write(&self.path, contents).map_err(|source| ExportError::File {
            path: self.path.clone(),
            source,
        })
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSink;

impl SummarySink for StdoutSink {
    fn name(&self) -> &'static str {
        "stdout"
    }

    fn write(&self, text: &str) -> Result<(), ExportError> {
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{text}")
            .and_then(|()| stdout.flush())
            .map_err(ExportError::Stdout)
    }
}
