use crate::checksum::md5_hex;

/// Outcome of sending a message and reading it back
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendAndReceiveResult {
    /// `MD5OfMessageBody` reported by SQS for the sent message
    pub sent_message_md5: String,
    /// Body of the message that was received and deleted
    pub received_message_body: String,
}

impl SendAndReceiveResult {
    /// Whether the received body hashes to the checksum reported on send
    #[must_use]
    pub fn checksum_matches(&self) -> bool {
        md5_hex(&self.received_message_body) == self.sent_message_md5
    }
}

/// Protocol and endpoint information for the SQS client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientInfo {
    /// Service identifier
    pub service_id: &'static str,
    /// API version of the service model
    pub api_version: &'static str,
    /// AWS JSON protocol version used on the wire
    pub json_version: &'static str,
    /// Prefix of the `X-Amz-Target` header
    pub target_prefix: &'static str,
    /// Version of the `aws-sdk-sqs` crate
    pub sdk_version: &'static str,
    /// Region the client is configured for
    pub region: Option<String>,
    /// Endpoint override, if any
    pub endpoint_url: Option<String>,
}
