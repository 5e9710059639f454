//! Usage example for the Amazon SQS client
//!
//! Wraps the queue and message calls made by the example runner and the
//! integration tests, and exposes the details (error code, HTTP status,
//! message, request id) that SQS attaches to failed requests.

#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    dead_code
)]

/// Message checksums
pub mod checksum;
/// Queue and message operations
pub mod queue;
/// Configuration types
pub mod types;

pub use checksum::{md5_hex, original_message_md5, ORIGINAL_MESSAGE};
pub use queue::{
    ClientInfo, QueueClient, QueueError, QueueResult, SendAndReceiveResult, ServiceErrorDetails,
};
pub use types::SqsConfig;
