//! Configuration for the SQS client used by the example

use std::env;
use std::time::Duration;

use aws_config::{timeout::TimeoutConfig, BehaviorVersion, Region};
use aws_sdk_sqs::Client as SqsClient;

/// Region used when `AWS_REGION` is not set
pub const DEFAULT_REGION: &str = "us-west-2";

/// Environment variable holding the SQS endpoint override
pub const SQS_ENDPOINT_VAR: &str = "SQS_ENDPOINT";

/// Environment variable holding the receive wait time in seconds
pub const RECEIVE_WAIT_SECONDS_VAR: &str = "SQS_RECEIVE_WAIT_SECONDS";

/// Wait time for receive calls when none is configured
pub const DEFAULT_RECEIVE_WAIT_SECONDS: i32 = 3;

/// Region, endpoint and timing settings for the SQS client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SqsConfig {
    /// AWS region the client signs requests for
    pub region: String,
    /// Endpoint override; `None` uses the SDK's resolved endpoint
    pub endpoint_url: Option<String>,
    /// Long-polling wait time for receive calls
    pub receive_wait_time_seconds: i32,
}

impl Default for SqsConfig {
    fn default() -> Self {
        Self {
            region: DEFAULT_REGION.to_string(),
            endpoint_url: None,
            receive_wait_time_seconds: DEFAULT_RECEIVE_WAIT_SECONDS,
        }
    }
}

impl SqsConfig {
    /// Creates a configuration for `region` with an optional endpoint override
    ///
    /// An empty endpoint is treated the same as no endpoint.
    #[must_use]
    pub fn new(region: impl Into<String>, endpoint_url: Option<String>) -> Self {
        Self {
            region: region.into(),
            endpoint_url: endpoint_url.filter(|url| !url.trim().is_empty()),
            receive_wait_time_seconds: DEFAULT_RECEIVE_WAIT_SECONDS,
        }
    }

    /// Sets the receive wait time
    #[must_use]
    pub const fn with_receive_wait_time_seconds(mut self, seconds: i32) -> Self {
        self.receive_wait_time_seconds = seconds;
        self
    }

    /// Reads the configuration from `AWS_REGION`, `SQS_ENDPOINT` and
    /// `SQS_RECEIVE_WAIT_SECONDS`
    ///
    /// Unset or unparsable values fall back to their defaults.
    #[must_use]
    pub fn from_env() -> Self {
        let region = env::var("AWS_REGION")
            .ok()
            .map(|val| val.trim().to_string())
            .filter(|val| !val.is_empty())
            .unwrap_or_else(|| DEFAULT_REGION.to_string());

        let receive_wait_time_seconds = env::var(RECEIVE_WAIT_SECONDS_VAR)
            .ok()
            .and_then(|val| val.trim().parse::<i32>().ok())
            .unwrap_or(DEFAULT_RECEIVE_WAIT_SECONDS);

        Self::new(region, env::var(SQS_ENDPOINT_VAR).ok())
            .with_receive_wait_time_seconds(receive_wait_time_seconds)
    }

    /// AWS configuration with the region, endpoint override and timeout settings
    ///
    /// Credentials come from the default provider chain.
    pub async fn aws_config(&self) -> aws_config::SdkConfig {
        let timeout_config = TimeoutConfig::builder()
            .operation_timeout(Duration::from_secs(30))
            .build();

        let mut loader = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(self.region.clone()))
            .timeout_config(timeout_config);

        if let Some(endpoint_url) = &self.endpoint_url {
            loader = loader.endpoint_url(endpoint_url.as_str());
        }

        loader.load().await
    }

    /// Builds an SQS client from [`Self::aws_config`]
    pub async fn sqs_client(&self) -> SqsClient {
        SqsClient::new(&self.aws_config().await)
    }
}
