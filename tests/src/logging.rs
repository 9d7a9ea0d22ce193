use std::sync::Once;
use tracing_subscriber::EnvFilter;

/// Installs a test-friendly subscriber once per process. Filtered by
/// `RUST_LOG`.
pub(crate) fn init() {
    static INIT: Once = Once::new();

    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}
