/// Base URL of the production verification host.
pub(crate) const PRODUCTION_BASE_URL: &str = "https://buy.itunes.apple.com";

/// Base URL of the sandbox verification host.
pub(crate) const SANDBOX_BASE_URL: &str = "https://sandbox.itunes.apple.com";

/// Path of the receipt verification endpoint, relative to either base URL.
pub(crate) const VERIFY_RECEIPT_PATH: &str = "/verifyReceipt";
