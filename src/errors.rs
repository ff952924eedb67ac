use thiserror::Error;

use crate::domain::entities::verification_status;

/// Errors produced while verifying a receipt.
#[derive(Debug, Error)]
pub enum VerifyReceiptError {
    /// The callout to the verification endpoint failed at the HTTP level.
    #[error("verify receipt callout failed")]
    Transport(#[from] reqwest::Error),

    /// The verification endpoint returned a body that is not valid JSON.
    #[error("verify receipt response is not valid JSON")]
    MalformedResponse(#[source] serde_json::Error),

    /// The verification endpoint returned a JSON body without an integer
    /// `status` field.
    #[error("verify receipt response is missing an integer `status` field")]
    MissingStatus,

    /// The verification concluded with one of the documented error status
    /// codes.
    #[error("invalid receipt (status {status}): {}", verification_status::describe(*.status))]
    InvalidReceipt { status: i64 },
}

impl VerifyReceiptError {
    pub(crate) fn invalid_receipt(status: i64) -> Self {
        Self::InvalidReceipt { status }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_receipt_message_includes_the_documented_description() {
        let error = VerifyReceiptError::invalid_receipt(21004);
        assert_eq!(
            error.to_string(),
            "invalid receipt (status 21004): The shared secret you provided does not match \
             the shared secret on file for your account."
        );
    }

    #[test]
    fn invalid_receipt_message_handles_undocumented_codes() {
        let error = VerifyReceiptError::invalid_receipt(9999);
        assert_eq!(
            error.to_string(),
            "invalid receipt (status 9999): Undocumented status code."
        );
    }
}
