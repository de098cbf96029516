use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// install a global fmt subscriber, filtered by `RUST_LOG` with `amortization_rs=info` as the floor
///
/// Safe to call more than once; only the first call installs anything. The
/// library itself never calls this.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("amortization_rs=info"));

        // another subscriber may already be installed by the host application
        let _ = fmt().with_env_filter(filter).try_init();
    });
}
