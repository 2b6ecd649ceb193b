//! Payload and reply models
//!
//! Serializable types for canned payloads and the JSON lines written back
//! to callers.

pub mod payload;
pub mod responses;

// Re-export commonly used types
pub use payload::{Payload, PayloadItem};
pub use responses::{Reply, ReplySource, StatsResponse};
