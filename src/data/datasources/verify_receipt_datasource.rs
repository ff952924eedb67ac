use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::{
    constants::{PRODUCTION_BASE_URL, SANDBOX_BASE_URL, VERIFY_RECEIPT_PATH},
    data::models::verify_receipt_api::verify_receipt_request_model::VerifyReceiptRequestModel,
    domain::entities::environment::Environment,
    errors::VerifyReceiptError,
};

#[async_trait]
pub(crate) trait VerifyReceiptDatasource: Send + Sync {
    /// verifyReceipt:
    /// https://developer.apple.com/documentation/appstorereceipts/verifyreceipt
    ///
    /// environment:
    ///   The verification host the request is sent to.
    /// request:
    ///   The JSON payload submitted to the endpoint.
    async fn verify_receipt(
        &self,
        environment: Environment,
        request: &VerifyReceiptRequestModel<'_>,
    ) -> Result<Map<String, Value>, VerifyReceiptError>;
}

pub(crate) struct VerifyReceiptDatasourceImpl {
    client: reqwest::Client,
    production_base_url: String,
    sandbox_base_url: String,
}

#[async_trait]
impl VerifyReceiptDatasource for VerifyReceiptDatasourceImpl {
    async fn verify_receipt(
        &self,
        environment: Environment,
        request: &VerifyReceiptRequestModel<'_>,
    ) -> Result<Map<String, Value>, VerifyReceiptError> {
        let url = format!("{}{}", self.base_url(environment), VERIFY_RECEIPT_PATH);
        self.callout(&url, request).await
    }
}

impl VerifyReceiptDatasourceImpl {
    pub(crate) fn new() -> Self {
        Self::with_base_urls(
            PRODUCTION_BASE_URL.to_string(),
            SANDBOX_BASE_URL.to_string(),
        )
    }

    fn with_base_urls(production_base_url: String, sandbox_base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            production_base_url,
            sandbox_base_url,
        }
    }

    fn base_url(&self, environment: Environment) -> &str {
        match environment {
            Environment::Production => &self.production_base_url,
            Environment::Sandbox => &self.sandbox_base_url,
        }
    }

    async fn callout(
        &self,
        url: &str,
        request: &VerifyReceiptRequestModel<'_>,
    ) -> Result<Map<String, Value>, VerifyReceiptError> {
        tracing::debug!(%url, "sending verify receipt callout");
        let response = self
            .client
            .post(url)
            .json(request)
            .send()
            .await?
            .error_for_status()?;

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(VerifyReceiptError::MalformedResponse)
    }
}
