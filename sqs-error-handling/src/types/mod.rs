/// SQS client configuration
pub mod config;

pub use config::SqsConfig;
