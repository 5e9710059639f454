//! Queue operations for the SQS example
//!
//! Every call is a single request to SQS whose error is returned to the
//! caller without retrying or reclassifying it.

/// SQS client wrapper
pub mod client;
/// Error types for queue operations
pub mod error;
/// Result and metadata types
pub mod types;

pub use client::QueueClient;
pub use error::{QueueError, QueueResult, ServiceErrorDetails};
pub use types::{ClientInfo, SendAndReceiveResult};
