use crate::{
    data::{
        datasources::verify_receipt_datasource::VerifyReceiptDatasourceImpl,
        repositories::receipt_verifier_impl::ReceiptVerifierImpl,
    },
    domain::{
        entities::receipt_response::ReceiptResponse,
        repositories::receipt_verifier::ReceiptVerifier,
    },
    errors::VerifyReceiptError,
};

pub struct ReceiptUtil<R: ReceiptVerifier> {
    receipt_verifier: R,
}

impl<R: ReceiptVerifier> ReceiptUtil<R> {
    pub async fn verify(
        &self,
        exclude_old_transactions: bool,
    ) -> Result<ReceiptResponse, VerifyReceiptError> {
        self.receipt_verifier.verify(exclude_old_transactions).await
    }

    pub async fn verify_renewable(&self) -> Result<ReceiptResponse, VerifyReceiptError> {
        self.receipt_verifier.verify_renewable().await
    }
}

impl ReceiptUtil<ReceiptVerifierImpl<VerifyReceiptDatasourceImpl>> {
    pub fn new(receipt_data: String, password: String) -> Self {
        Self {
            receipt_verifier: ReceiptVerifierImpl::new(
                VerifyReceiptDatasourceImpl::new(),
                receipt_data,
                password,
            ),
        }
    }
}
