use async_trait::async_trait;

use crate::{domain::entities::receipt_response::ReceiptResponse, errors::VerifyReceiptError};

#[async_trait]
pub trait ReceiptVerifier: Send + Sync {
    /// Verifies the receipt against the App Store and returns the decoded
    /// response body.
    ///
    /// exclude_old_transactions:
    ///   When true, the response includes only the latest renewal
    ///   transaction for each auto-renewable subscription product.
    async fn verify(
        &self,
        exclude_old_transactions: bool,
    ) -> Result<ReceiptResponse, VerifyReceiptError>;

    /// Verifies a receipt that contains auto-renewable subscriptions,
    /// requesting only the latest renewal transaction for each product.
    async fn verify_renewable(&self) -> Result<ReceiptResponse, VerifyReceiptError>;
}
