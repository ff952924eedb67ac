use serde::Serialize;

/// Request payload accepted by the verifyReceipt endpoint.
///
/// https://developer.apple.com/documentation/appstorereceipts/requestbody
#[derive(Debug, Serialize)]
pub(crate) struct VerifyReceiptRequestModel<'a> {
    /// The Base64-encoded receipt data, exactly as produced on the device.
    #[serde(rename = "receipt-data")]
    pub(crate) receipt_data: &'a str,

    /// The app's shared secret. Required for receipts that contain
    /// auto-renewable subscriptions.
    pub(crate) password: &'a str,

    /// Set to true for auto-renewable subscriptions to receive only the
    /// latest renewal transaction for each product.
    #[serde(rename = "exclude-old-transactions")]
    pub(crate) exclude_old_transactions: bool,
}
