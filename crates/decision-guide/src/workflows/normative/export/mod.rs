mod sink;
mod summary;

pub use sink::{export_summary, ExportError, ExportOutcome, FileSink, StdoutSink, SummarySink};
pub use summary::{format_path, format_summary, ATTRIBUTION, SUMMARY_TITLE};
