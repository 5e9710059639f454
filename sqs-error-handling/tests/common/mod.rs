//! Queue test setup utilities

#![allow(dead_code)]

use std::env;

use aws_credential_types::{provider::SharedCredentialsProvider, Credentials};
use aws_sdk_sqs::Client as SqsClient;
use pretty_assertions::assert_eq;
use sqs_error_handling::{QueueClient, QueueError, SqsConfig};
use std::sync::Arc;
use uuid::Uuid;

/// Loads `.env.example` and initializes tracing for tests
fn setup_test_env() {
    // Values already present in the environment take precedence
    dotenvy::from_path(".env.example").ok();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init()
        .ok();
}

/// Builds a queue client from the environment
///
/// Falls back to the LocalStack test credentials when no access key is set.
pub async fn queue_client() -> QueueClient {
    setup_test_env();

    let config = SqsConfig::from_env();
    let mut sdk_config = config.aws_config().await;

    if env::var("AWS_ACCESS_KEY_ID").is_err() {
        let credentials = Credentials::from_keys(
            "test", // AWS_ACCESS_KEY_ID
            "test", // AWS_SECRET_ACCESS_KEY
            None,   // no session token
        );
        sdk_config = sdk_config
            .to_builder()
            .credentials_provider(SharedCredentialsProvider::new(credentials))
            .build();
    }

    QueueClient::new(Arc::new(SqsClient::new(&sdk_config)), config)
}

/// Test context that owns a uniquely named standard queue
///
/// The queue is only deleted by [`QueueTestContext::cleanup`].
pub struct QueueTestContext {
    pub client: QueueClient,
    pub queue_name: String,
    pub queue_url: String,
}

impl QueueTestContext {
    /// Creates a new test context with a unique standard queue
    pub async fn new(test_name: &str) -> Self {
        Self::with_client(queue_client().await, test_name).await
    }

    /// Creates the unique queue through an already configured client
    pub async fn with_client(client: QueueClient, test_name: &str) -> Self {
        let queue_name = format!("{}-{}", test_name, Uuid::new_v4());

        let queue_url = client
            .create_queue(&queue_name)
            .await
            .expect("Failed to create test queue")
            .queue_url()
            .expect("Queue URL not returned")
            .to_string();

        Self {
            client,
            queue_name,
            queue_url,
        }
    }

    /// Deletes the test queue; await it at the end of each test
    pub async fn cleanup(self) {
        self.client
            .delete_queue(&self.queue_url)
            .await
            .expect("Failed to delete test queue");
    }
}

/// Asserts that `err` is a service error with the expected code, status and
/// message, and that SQS assigned it a request id
pub fn assert_service_error(err: &QueueError, code: &str, status_code: u16, message: &str) {
    let details = err
        .service_error_details()
        .unwrap_or_else(|| panic!("Expected a service error, got: {err:?}"));

    assert_eq!(details.code.as_deref(), Some(code), "Unexpected error code");
    assert_eq!(details.status_code, status_code, "Unexpected status code");

    let actual_message = details.message.unwrap_or_default();
    assert!(
        actual_message.contains(message),
        "Message: \"{actual_message}\" doesn't contain expected \"{message}\""
    );

    assert!(
        details.request_id.is_some_and(|id| !id.is_empty()),
        "Expecting a non-empty request id"
    );
}
