//! Tracing support.
//!
//! With the `tracing` feature enabled this re-exports the `tracing` macros
//! the crate uses and provides [`init_tracing`], which installs a formatting
//! subscriber filtered by the `LINKGRAPH_LOG` environment variable.  With the
//! feature disabled the same names resolve to no-op replacements.

#[cfg(feature = "tracing")]
mod enabled {
    use std::sync::Once;

    use tracing_subscriber::{EnvFilter, fmt};

    /// Environment variable holding the log filter, in `EnvFilter` syntax.
    pub const LOG_ENV_VAR: &str = "LINKGRAPH_LOG";

    const DEFAULT_FILTER: &str = "warn";

    /// Installs a global subscriber that writes to stdout.  Output goes
    /// through the test harness's capture, so tests and the demo binary can
    /// share it.  Only the first call has any effect, and an
    /// already-installed subscriber is left in place.
    pub fn init_tracing() {
        static INIT: Once = Once::new();
        INIT.call_once(|| {
            let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
            let _ = fmt()
                .with_env_filter(filter)
                .with_test_writer()
                .try_init();
        });
    }

    pub use tracing::{debug, info_span, trace};
}

#[cfg(not(feature = "tracing"))]
mod disabled {
    pub const LOG_ENV_VAR: &str = "LINKGRAPH_LOG";

    pub fn init_tracing() {
        // No-op when tracing is disabled
    }

    #[doc(hidden)]
    #[macro_export]
    macro_rules! __linkgraph_noop_span {
        ($($args:tt)*) => {{ $crate::tracing_support::NoOpSpan }};
    }

    #[doc(hidden)]
    #[macro_export]
    macro_rules! __linkgraph_noop_event {
        ($($args:tt)*) => {{}};
    }

    pub use crate::{
        __linkgraph_noop_event as debug, __linkgraph_noop_event as trace,
        __linkgraph_noop_span as info_span,
    };

    pub struct NoOpSpan;

    impl NoOpSpan {
        pub fn entered(self) -> NoOpSpanGuard {
            NoOpSpanGuard
        }
    }

    pub struct NoOpSpanGuard;
}

#[cfg(feature = "tracing")]
pub use enabled::*;

#[cfg(not(feature = "tracing"))]
pub use disabled::*;
