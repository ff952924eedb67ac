use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::{
    data::{
        datasources::verify_receipt_datasource::VerifyReceiptDatasource,
        models::verify_receipt_api::verify_receipt_request_model::VerifyReceiptRequestModel,
    },
    domain::{
        entities::{
            environment::Environment, receipt_response::ReceiptResponse, verification_status,
        },
        repositories::receipt_verifier::ReceiptVerifier,
    },
    errors::VerifyReceiptError,
};

pub(crate) struct ReceiptVerifierImpl<D: VerifyReceiptDatasource> {
    datasource: D,
    receipt_data: String,
    password: String,
}

#[async_trait]
impl<D: VerifyReceiptDatasource> ReceiptVerifier for ReceiptVerifierImpl<D> {
    async fn verify(
        &self,
        exclude_old_transactions: bool,
    ) -> Result<ReceiptResponse, VerifyReceiptError> {
        let request = VerifyReceiptRequestModel {
            receipt_data: &self.receipt_data,
            password: &self.password,
            exclude_old_transactions,
        };

        let mut body = self
            .datasource
            .verify_receipt(Environment::Production, &request)
            .await?;
        let mut status = read_status(&body)?;

        // Receipts issued by the test environment are re-checked against the
        // sandbox host, at most once. A second 21007 fails below like any
        // other error code.
        if verification_status::is_from_test_environment(status) {
            tracing::debug!(status, "receipt is from the test environment, retrying");
            body = self
                .datasource
                .verify_receipt(Environment::Sandbox, &request)
                .await?;
            status = read_status(&body)?;
        }

        if verification_status::is_invalid(status) {
            return Err(VerifyReceiptError::invalid_receipt(status));
        }

        Ok(ReceiptResponse::new(status, body))
    }

    async fn verify_renewable(&self) -> Result<ReceiptResponse, VerifyReceiptError> {
        self.verify(true).await
    }
}

impl<D: VerifyReceiptDatasource> ReceiptVerifierImpl<D> {
    pub(crate) fn new(datasource: D, receipt_data: String, password: String) -> Self {
        Self {
            datasource,
            receipt_data,
            password,
        }
    }
}

fn read_status(body: &Map<String, Value>) -> Result<i64, VerifyReceiptError> {
    body.get("status")
        .and_then(Value::as_i64)
        .ok_or(VerifyReceiptError::MissingStatus)
}
