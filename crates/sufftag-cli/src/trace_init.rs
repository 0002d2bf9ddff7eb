use std::path::Path;
use std::sync::Once;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

const DEFAULT_FILTER: &str = "sufftag_core=info,sufftag_cli=info";
const TRACE_FILE: &str = "sufftag-trace.jsonl";

/// Install the global subscriber once.
///
/// With `log_dir`, events go to `sufftag-trace.jsonl` in that directory as
/// JSON lines; otherwise to stderr. `RUST_LOG` overrides the default filter.
///
/// The returned guard owns the file writer's background thread. Queued events
/// are written out only when it is dropped, so keep it alive until exit.
pub fn init_tracing(log_dir: Option<&Path>) -> Option<WorkerGuard> {
    let mut guard = None;
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
        match log_dir {
            Some(dir) => {
                let (subscriber, g) = json_file_subscriber(dir, filter);
                subscriber.init();
                guard = Some(g);
            }
            None => {
                tracing_subscriber::fmt()
                    .compact()
                    .with_writer(std::io::stderr)
                    .with_env_filter(filter)
                    .init();
            }
        }
    });
    guard
}

fn json_file_subscriber(
    dir: &Path,
    filter: EnvFilter,
) -> (impl tracing::Subscriber + Send + Sync + 'static, WorkerGuard) {
    let file_appender = tracing_appender::rolling::never(dir, TRACE_FILE);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
    let subscriber = tracing_subscriber::fmt()
        .json()
        .with_writer(non_blocking)
        .with_target(true)
        .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
        .with_env_filter(filter)
        .finish();
    (subscriber, guard)
}
