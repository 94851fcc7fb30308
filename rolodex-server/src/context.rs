//! Request-scoped context threaded through every layer

use std::fmt;

use uuid::Uuid;

/// Per-request diagnostic context.
///
/// Created once by the HTTP handler and passed by reference down to the
/// repository. It only feeds tracing spans and log fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestContext {
    correlation_id: Uuid,
}

impl RequestContext {
    /// New context with a fresh random correlation id.
    pub fn new() -> Self {
        Self {
            correlation_id: Uuid::new_v4(),
        }
    }

    pub fn with_correlation_id(correlation_id: Uuid) -> Self {
        Self { correlation_id }
    }

    pub fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

impl Default for RequestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RequestContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.correlation_id, f)
    }
}
