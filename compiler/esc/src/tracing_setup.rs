//! Log output for the driver.
//!
//! Nothing is installed unless `ES_LOG` (or, failing that, `RUST_LOG`) is
//! set, so ordinary runs pay nothing for the instrumentation in the
//! library crates. Example: `ES_LOG=es_eval=debug es run demo.es`.

use std::sync::Once;

use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;
use tracing_tree::HierarchicalLayer;

static TRACING_INIT: Once = Once::new();

/// Variables consulted for filter directives, in order.
pub const FILTER_VARS: [&str; 2] = ["ES_LOG", "RUST_LOG"];

/// Install the hierarchical stderr subscriber. Safe to call more than once.
pub fn init() {
    TRACING_INIT.call_once(|| {
        let Some(directives) = FILTER_VARS.iter().find_map(|var| std::env::var(var).ok()) else {
            return;
        };
        let filter = EnvFilter::try_new(&directives).unwrap_or_else(|err| {
            eprintln!("warning: ignoring invalid log filter `{directives}`: {err}");
            EnvFilter::new("warn")
        });
        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(
                HierarchicalLayer::new(2)
                    .with_targets(true)
                    .with_bracketed_fields(true),
            )
            .try_init();
    });
}
