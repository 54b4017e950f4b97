//! Tracing subscriber for the binary.

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install a hierarchical stderr subscriber when `RUST_LOG` is set.
///
/// Safe to call more than once. Enable with e.g. `RUST_LOG=redex_eval=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            let tree = tracing_tree::HierarchicalLayer::new(2)
                .with_writer(std::io::stderr)
                .with_targets(true)
                .with_bracketed_fields(true);
            tracing_subscriber::registry().with(tree).with(filter).init();
        }
    });
}
