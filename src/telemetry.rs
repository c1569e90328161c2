//! Opt-in JSON trace log scoped to this crate, with every line tagged by the
//! touch-UI session it came from.

use crate::config::{LogConfig, TouchUiConfig};
use crate::device::DeviceClass;
use crate::policy::is_configurable;
use std::env;
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};
use tracing::level_filters::LevelFilter;
use tracing::Span;
use tracing_subscriber::filter::Targets;
use tracing_subscriber::fmt::{self, time::UtcTime, MakeWriter};
use tracing_subscriber::prelude::*;

const TRACE_LOG_ENV: &str = "TOUCHUI_TRACE_LOG";
const TRACE_TARGET: &str = "touchui";

static TRACING_INIT: OnceLock<()> = OnceLock::new();

pub fn tracing_log_path() -> PathBuf {
    env::var(TRACE_LOG_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| env::temp_dir().join("touchui_trace.jsonl"))
}

/// Span carrying the static policy inputs; events recorded inside it inherit them.
pub fn session_span(config: &TouchUiConfig, device: DeviceClass) -> Span {
    tracing::info_span!(
        target: TRACE_TARGET,
        "touchui_session",
        display_mode = %config.display_mode,
        device = %device,
        configurable = is_configurable(config.display_mode, device),
    )
}

/// Only this crate's events pass; host and dependency noise stays out of the file.
fn trace_subscriber<W>(make_writer: W) -> impl tracing::Subscriber + Send + Sync
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let layer = fmt::layer()
        .json()
        .with_timer(UtcTime::rfc_3339())
        .with_writer(make_writer)
        .with_current_span(true)
        .with_span_list(false)
        .with_filter(Targets::new().with_target(TRACE_TARGET, LevelFilter::DEBUG));
    tracing_subscriber::registry().with(layer)
}

fn init_tracing_once(config: &LogConfig, once: &OnceLock<()>) {
    if !config.logs || config.no_logs {
        return;
    }

    let _ = once.get_or_init(|| {
        let path = tracing_log_path();
        let file = match OpenOptions::new().create(true).append(true).open(&path) {
            Ok(file) => file,
            Err(_) => return,
        };
        let _ = tracing::subscriber::set_global_default(trace_subscriber(Mutex::new(file)));
    });
}

pub fn init_tracing(config: &LogConfig) {
    init_tracing_once(config, &TRACING_INIT);
}
