//! Tower middleware shared by every route.
//!
//! Request flows outermost to innermost:
//! 1. `RequestIdLayer` - extract or generate `x-request-id`
//! 2. `MetricsLayer` - request count and latency
//! 3. `TraceLayer` - request span
//! 4. `TimeoutLayer` - request timeout
//! 5. `CorsLayer`

pub mod metrics;
pub mod request_id;

pub use metrics::MetricsLayer;
pub use request_id::{REQUEST_ID_HEADER, RequestId, RequestIdLayer};
