//! HTTP middleware stack for the server.
//!
//! # Middleware Order (outermost first)
//!
//! 1. Path normalization (trailing slash trimmed, applied in [`crate::app::serve`])
//! 2. Sentry layers (capture errors, transactions)
//! 3. `TraceLayer` (request span with a `request_id` field)
//! 4. Request ID (reuse or generate `x-request-id`)

pub mod request_id;

pub use request_id::{REQUEST_ID_HEADER, RequestId, request_id_middleware};
