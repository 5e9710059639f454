use aws_sdk_sqs::error::{ProvideErrorMetadata, SdkError};
use aws_sdk_sqs::operation::create_queue::CreateQueueError;
use aws_sdk_sqs::operation::delete_message::DeleteMessageError;
use aws_sdk_sqs::operation::delete_queue::DeleteQueueError;
use aws_sdk_sqs::operation::list_queues::ListQueuesError;
use aws_sdk_sqs::operation::receive_message::ReceiveMessageError;
use aws_sdk_sqs::operation::send_message::SendMessageError;
use aws_sdk_sqs::operation::RequestId;
use thiserror::Error;

/// Result type alias for queue operations
pub type QueueResult<T> = Result<T, QueueError>;

/// Error types for queue operations
///
/// SDK errors are kept as returned by the client so callers can inspect them.
#[derive(Error, Debug)]
pub enum QueueError {
    /// Error creating a queue
    #[error("Failed to create SQS queue")]
    CreateQueue(#[from] SdkError<CreateQueueError>),

    /// Error listing queues
    #[error("Failed to list SQS queues")]
    ListQueues(#[from] SdkError<ListQueuesError>),

    /// Error deleting a queue
    #[error("Failed to delete SQS queue")]
    DeleteQueue(#[from] SdkError<DeleteQueueError>),

    /// Error sending message to SQS
    #[error("Failed to send message to SQS")]
    SendMessage(#[from] SdkError<SendMessageError>),

    /// Error receiving messages from SQS
    #[error("Failed to receive messages from SQS")]
    ReceiveMessage(#[from] SdkError<ReceiveMessageError>),

    /// Error deleting message from SQS
    #[error("Failed to delete message from SQS")]
    DeleteMessage(#[from] SdkError<DeleteMessageError>),

    /// The receive call returned without any message
    #[error("No message received within the wait time")]
    NoMessageReceived,

    /// A field the example relies on was absent from the response
    #[error("Response is missing field: {0}")]
    MissingField(&'static str),
}

/// Details SQS attaches to a failed request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceErrorDetails {
    /// Error code, e.g. `AWS.SimpleQueueService.NonExistentQueue`
    pub code: Option<String>,
    /// HTTP status code of the response
    pub status_code: u16,
    /// Human-readable message
    pub message: Option<String>,
    /// Request id assigned by the service
    pub request_id: Option<String>,
}

impl QueueError {
    /// Returns the service-side details when the error came back from SQS
    ///
    /// Transport failures, timeouts and local errors have no details.
    #[must_use]
    pub fn service_error_details(&self) -> Option<ServiceErrorDetails> {
        match self {
            Self::CreateQueue(sdk_err) => Self::details_from_sdk_error(sdk_err),
            Self::ListQueues(sdk_err) => Self::details_from_sdk_error(sdk_err),
            Self::DeleteQueue(sdk_err) => Self::details_from_sdk_error(sdk_err),
            Self::SendMessage(sdk_err) => Self::details_from_sdk_error(sdk_err),
            Self::ReceiveMessage(sdk_err) => Self::details_from_sdk_error(sdk_err),
            Self::DeleteMessage(sdk_err) => Self::details_from_sdk_error(sdk_err),
            Self::NoMessageReceived | Self::MissingField(_) => None,
        }
    }

    /// Error code reported by the service
    #[must_use]
    pub fn code(&self) -> Option<String> {
        self.service_error_details().and_then(|details| details.code)
    }

    /// HTTP status code reported by the service
    #[must_use]
    pub fn status_code(&self) -> Option<u16> {
        self.service_error_details()
            .map(|details| details.status_code)
    }

    fn details_from_sdk_error<E>(sdk_err: &SdkError<E>) -> Option<ServiceErrorDetails>
    where
        E: ProvideErrorMetadata + RequestId,
    {
        if let SdkError::ServiceError(err) = sdk_err {
            let inner = err.err();
            return Some(ServiceErrorDetails {
                code: inner.code().map(ToString::to_string),
                status_code: err.raw().status().as_u16(),
                message: inner.message().map(ToString::to_string),
                request_id: inner.request_id().map(ToString::to_string),
            });
        }
        None
    }
}
