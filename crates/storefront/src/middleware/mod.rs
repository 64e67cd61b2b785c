//! HTTP middleware stack for the storefront.
//!
//! # Middleware Order (outermost first)
//!
//! 1. Sentry layers (added by the binary)
//! 2. `TraceLayer` (request span)
//! 3. Request ID (record in span, echo in response)

pub mod request_id;

pub use request_id::{REQUEST_ID_HEADER, request_id_middleware};
