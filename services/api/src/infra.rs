use decision_guide::workflows::normative::{parse_answer_pair, Answer, Factor};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// clap value parser for `DS=H` style arguments.
pub(crate) fn parse_answer_arg(raw: &str) -> Result<(Factor, Answer), String> {
    parse_answer_pair(raw).map_err(|err| err.to_string())
}
