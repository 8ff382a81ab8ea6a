//! State

use std::sync::Arc;

use windsor_app::context::AppContext;

/// Default cap on request bodies: 25 MiB.
pub(crate) const DEFAULT_MAX_REQUEST_BODY_BYTES: usize = 25 * 1024 * 1024;

#[derive(Debug, Clone)]
pub(crate) struct State {
    pub(crate) app: AppContext,
    pub(crate) max_request_body_bytes: usize,
}

impl State {
    #[must_use]
    pub(crate) fn new(app: AppContext, max_request_body_bytes: usize) -> Self {
        Self {
            app,
            max_request_body_bytes,
        }
    }

    #[must_use]
    pub(crate) fn from_app_context(app: AppContext, max_request_body_bytes: usize) -> Arc<Self> {
        Arc::new(Self::new(app, max_request_body_bytes))
    }
}
