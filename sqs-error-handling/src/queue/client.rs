//! Thin wrapper over the SQS client
//!
//! Each method issues the request shown in its name and hands back the SDK
//! output or error as-is.

use std::sync::Arc;

use aws_sdk_sqs::operation::create_queue::CreateQueueOutput;
use aws_sdk_sqs::operation::delete_queue::DeleteQueueOutput;
use aws_sdk_sqs::operation::list_queues::ListQueuesOutput;
use aws_sdk_sqs::Client as SqsClient;
use tracing::{debug, instrument};

use crate::checksum::ORIGINAL_MESSAGE;
use crate::queue::{
    error::{QueueError, QueueResult},
    types::{ClientInfo, SendAndReceiveResult},
};
use crate::types::SqsConfig;

/// Deduplication id that standard queues reject
const INVALID_DEDUPLICATION_ID: &str = "some-id";

/// Receipt handle that does not belong to any delivery
const INVALID_RECEIPT_HANDLE: &str = "some-handle";

/// SQS client together with the settings it was built from
pub struct QueueClient {
    sqs_client: Arc<SqsClient>,
    config: SqsConfig,
}

impl QueueClient {
    /// Creates a new queue client
    ///
    /// # Arguments
    ///
    /// * `sqs_client` - Pre-configured SQS client
    /// * `config` - Settings the client was built from
    #[must_use]
    pub const fn new(sqs_client: Arc<SqsClient>, config: SqsConfig) -> Self {
        Self { sqs_client, config }
    }

    /// Builds the SQS client from `config` and wraps it
    pub async fn from_config(config: SqsConfig) -> Self {
        let sqs_client = Arc::new(config.sqs_client().await);
        Self::new(sqs_client, config)
    }

    /// Returns the underlying SQS client
    #[must_use]
    pub fn sqs_client(&self) -> Arc<SqsClient> {
        Arc::clone(&self.sqs_client)
    }

    /// Returns the settings the client was built from
    #[must_use]
    pub const fn config(&self) -> &SqsConfig {
        &self.config
    }

    /// Describes the protocol the client speaks
    ///
    /// SQS is served over AWS JSON 1.0 with the `AmazonSQS` target prefix.
    #[must_use]
    pub fn client_info(&self) -> ClientInfo {
        ClientInfo {
            service_id: "SQS",
            api_version: "2012-11-05",
            json_version: "1.0",
            target_prefix: "AmazonSQS",
            sdk_version: aws_sdk_sqs::meta::PKG_VERSION,
            region: self
                .sqs_client
                .config()
                .region()
                .map(ToString::to_string),
            endpoint_url: self.config.endpoint_url.clone(),
        }
    }

    /// Creates a standard queue named `queue_name`
    ///
    /// # Errors
    ///
    /// Returns `QueueError::CreateQueue` if SQS rejects the request
    #[instrument(skip(self))]
    pub async fn create_queue(&self, queue_name: &str) -> QueueResult<CreateQueueOutput> {
        let result = self
            .sqs_client
            .create_queue()
            .queue_name(queue_name)
            .send()
            .await?;

        debug!(queue_url = ?result.queue_url(), "Created queue");
        Ok(result)
    }

    /// Lists the queues whose name starts with `prefix`
    ///
    /// # Errors
    ///
    /// Returns `QueueError::ListQueues` if SQS rejects the request
    #[instrument(skip(self))]
    pub async fn list_queues(&self, prefix: &str) -> QueueResult<ListQueuesOutput> {
        let result = self
            .sqs_client
            .list_queues()
            .queue_name_prefix(prefix)
            .send()
            .await?;

        debug!(count = result.queue_urls().len(), "Listed queues");
        Ok(result)
    }

    /// Deletes the queue at `queue_url`
    ///
    /// # Errors
    ///
    /// Returns `QueueError::DeleteQueue` if SQS rejects the request
    #[instrument(skip(self))]
    pub async fn delete_queue(&self, queue_url: &str) -> QueueResult<DeleteQueueOutput> {
        Ok(self
            .sqs_client
            .delete_queue()
            .queue_url(queue_url)
            .send()
            .await?)
    }

    /// Sends [`ORIGINAL_MESSAGE`], then receives one message and deletes it
    ///
    /// # Returns
    ///
    /// The checksum SQS reported for the sent message and the body that was
    /// received
    ///
    /// # Errors
    ///
    /// Returns the error of the first step that fails. An empty receive
    /// yields `QueueError::NoMessageReceived`.
    #[instrument(skip(self))]
    pub async fn send_receive_and_delete_message(
        &self,
        queue_url: &str,
    ) -> QueueResult<SendAndReceiveResult> {
        let result = self
            .sqs_client
            .send_message()
            .queue_url(queue_url)
            .message_body(ORIGINAL_MESSAGE)
            .send()
            .await?;

        let sent_message_md5 = result
            .md5_of_message_body()
            .ok_or(QueueError::MissingField("MD5OfMessageBody"))?
            .to_string();
        debug!(message_id = ?result.message_id(), %sent_message_md5, "Sent message");

        let received_message_body = self.receive_and_delete_message(queue_url).await?;

        Ok(SendAndReceiveResult {
            sent_message_md5,
            received_message_body,
        })
    }

    /// Sends a message with a deduplication id, which only FIFO queues accept
    ///
    /// # Errors
    ///
    /// Returns `QueueError::SendMessage`; on a standard queue SQS answers
    /// `InvalidParameterValue`
    #[instrument(skip(self))]
    pub async fn send_message_with_invalid_input(&self, queue_url: &str) -> QueueResult<()> {
        self.sqs_client
            .send_message()
            .queue_url(queue_url)
            .message_body(ORIGINAL_MESSAGE)
            .message_deduplication_id(INVALID_DEDUPLICATION_ID)
            .send()
            .await?;

        Ok(())
    }

    /// Deletes a message using a receipt handle SQS never issued
    ///
    /// # Errors
    ///
    /// Returns `QueueError::DeleteMessage`; SQS answers `ReceiptHandleIsInvalid`
    #[instrument(skip(self))]
    pub async fn delete_message_with_invalid_input(&self, queue_url: &str) -> QueueResult<()> {
        self.delete_message(queue_url, INVALID_RECEIPT_HANDLE).await
    }

    async fn receive_and_delete_message(&self, queue_url: &str) -> QueueResult<String> {
        let result = self
            .sqs_client
            .receive_message()
            .queue_url(queue_url)
            .wait_time_seconds(self.config.receive_wait_time_seconds)
            .send()
            .await?;

        let message = result
            .messages()
            .first()
            .ok_or(QueueError::NoMessageReceived)?;
        let body = message
            .body()
            .ok_or(QueueError::MissingField("Body"))?
            .to_string();
        let receipt_handle = message
            .receipt_handle()
            .ok_or(QueueError::MissingField("ReceiptHandle"))?;

        self.delete_message(queue_url, receipt_handle).await?;
        Ok(body)
    }

    async fn delete_message(&self, queue_url: &str, receipt_handle: &str) -> QueueResult<()> {
        self.sqs_client
            .delete_message()
            .queue_url(queue_url)
            .receipt_handle(receipt_handle)
            .send()
            .await?;

        Ok(())
    }
}
