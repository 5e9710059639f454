use md5::{Digest, Md5};

/// Body of the message sent by the round-trip example
pub const ORIGINAL_MESSAGE: &str = "a-message";

/// Returns the lowercase hex MD5 of `message`, in the format SQS reports as
/// `MD5OfMessageBody`
#[must_use]
pub fn md5_hex(message: &str) -> String {
    hex::encode(Md5::digest(message.as_bytes()))
}

/// MD5 of [`ORIGINAL_MESSAGE`]
#[must_use]
pub fn original_message_md5() -> String {
    md5_hex(ORIGINAL_MESSAGE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_md5_hex_known_values() {
        assert_eq!(md5_hex(""), "d41d8cd98f00b204e9800998ecf8427e");
        assert_eq!(md5_hex("hello world"), "5eb63bbbe01eeed093cb22bb8f5acdc3");
    }

    #[test]
    fn test_original_message_md5() {
        assert_eq!(original_message_md5(), "4a7b87e71c9ababf6f0d8f2be6c4580d");
    }

    #[test]
    fn test_md5_hex_is_lowercase() {
        let digest = md5_hex(ORIGINAL_MESSAGE);
        assert_eq!(digest.len(), 32);
        assert!(digest
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
    }
}
