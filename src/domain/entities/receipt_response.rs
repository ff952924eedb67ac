use serde_json::{Map, Value};

/// Decoded body returned by the verifyReceipt endpoint on success.
///
/// The body is exposed as-is. The accessors below read the documented
/// top-level fields without validating them; fields are absent for receipt
/// types that do not carry them.
///
/// https://developer.apple.com/documentation/appstorereceipts/responsebody
#[derive(Debug, Clone)]
pub struct ReceiptResponse {
    status: i64,
    body: Map<String, Value>,
}

impl ReceiptResponse {
    pub(crate) fn new(status: i64, body: Map<String, Value>) -> Self {
        Self { status, body }
    }

    /// Status code the verification concluded with.
    pub fn status(&self) -> i64 {
        self.status
    }

    /// The environment the receipt was generated in, either `"Production"`
    /// or `"Sandbox"`.
    pub fn environment(&self) -> Option<&str> {
        self.body.get("environment").and_then(Value::as_str)
    }

    /// Whether the request may be retried at a later point. Only set by the
    /// App Store on a subset of transient failures.
    pub fn is_retryable(&self) -> bool {
        self.body
            .get("is-retryable")
            .and_then(Value::as_bool)
            .unwrap_or(false)
    }

    /// JSON representation of the receipt that was sent for verification.
    pub fn receipt(&self) -> Option<&Map<String, Value>> {
        self.body.get("receipt").and_then(Value::as_object)
    }

    /// The latest Base64-encoded app receipt. Only returned for receipts
    /// that contain auto-renewable subscriptions.
    pub fn latest_receipt(&self) -> Option<&str> {
        self.body.get("latest_receipt").and_then(Value::as_str)
    }

    /// All in-app purchase transactions of the receipt, excluding finished
    /// consumables. Only returned for receipts that contain auto-renewable
    /// subscriptions.
    pub fn latest_receipt_info(&self) -> Option<&[Value]> {
        self.body
            .get("latest_receipt_info")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
    }

    /// Renewal status of each auto-renewable subscription of the receipt.
    pub fn pending_renewal_info(&self) -> Option<&[Value]> {
        self.body
            .get("pending_renewal_info")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
    }

    /// An arbitrary top-level field of the response body.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.body.get(key)
    }

    /// The full decoded response body.
    pub fn body(&self) -> &Map<String, Value> {
        &self.body
    }

    /// Consumes the response, returning the full decoded body.
    pub fn into_body(self) -> Map<String, Value> {
        self.body
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn response(body: Value) -> ReceiptResponse {
        let map = body.as_object().cloned().unwrap();
        let status = map.get("status").and_then(Value::as_i64).unwrap();
        ReceiptResponse::new(status, map)
    }

    #[test]
    fn reads_documented_fields() {
        let response = response(json!({
            "status": 0,
            "environment": "Production",
            "is-retryable": true,
            "receipt": {"bundle_id": "com.example.app"},
            "latest_receipt": "ZmFrZSByZWNlaXB0",
            "latest_receipt_info": [{"product_id": "com.example.app.pro"}],
            "pending_renewal_info": [{"auto_renew_status": "1"}],
        }));

        assert_eq!(response.status(), 0);
        assert_eq!(response.environment(), Some("Production"));
        assert!(response.is_retryable());
        assert_eq!(
            response.receipt().and_then(|r| r.get("bundle_id")),
            Some(&json!("com.example.app"))
        );
        assert_eq!(response.latest_receipt(), Some("ZmFrZSByZWNlaXB0"));
        assert_eq!(response.latest_receipt_info().map(<[Value]>::len), Some(1));
        assert_eq!(response.pending_renewal_info().map(<[Value]>::len), Some(1));
    }

    #[test]
    fn absent_fields_read_as_none() {
        let response = response(json!({"status": 0}));

        assert_eq!(response.environment(), None);
        assert!(!response.is_retryable());
        assert_eq!(response.receipt(), None);
        assert_eq!(response.latest_receipt(), None);
        assert_eq!(response.latest_receipt_info(), None);
        assert_eq!(response.pending_renewal_info(), None);
        assert_eq!(response.get("latest_receipt"), None);
    }

    #[test]
    fn body_round_trips_unmodified() {
        let raw = json!({"status": 0, "receipt": {"bundle_id": "com.example.app"}});
        let response = response(raw.clone());

        assert_eq!(Value::Object(response.body().clone()), raw);
        assert_eq!(Value::Object(response.into_body()), raw);
    }
}
