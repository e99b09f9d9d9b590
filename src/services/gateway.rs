use crate::models::payment::{PaymentDetail, PaymentRequest, PaymentResponse};
use crate::services::bank::{AcquiringBank, BankError, SimulatedBank};
use crate::services::repository::{InMemoryRepository, PaymentRepository, StorageError};
use crate::utils::masking::mask_card_number;
use thiserror::Error;
use tracing::info;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("acquiring bank failure: {0}")]
    Bank(#[from] BankError),
    #[error("storage failure: {0}")]
    Storage(#[from] StorageError),
}

/// Composes bank, repository, and masker into the two public use cases.
/// Nothing else reaches the bank or the repository directly.
pub struct PaymentGateway<B = SimulatedBank, R = InMemoryRepository> {
    bank: B,
    repository: R,
}

/// Concrete wiring used by the HTTP handlers.
pub type AppGateway = PaymentGateway;

impl<B: AcquiringBank, R: PaymentRepository> PaymentGateway<B, R> {
    pub fn new(bank: B, repository: R) -> Self {
        Self { bank, repository }
    }

    /// Submits a payment for authorization and stores the outcome keyed by
    /// the minted id. An absent request yields an absent response and
    /// touches neither the bank nor the store.
    pub async fn submit_payment(
        &self,
        request: Option<PaymentRequest>,
    ) -> Result<Option<PaymentResponse>, GatewayError> {
        let Some(request) = request else {
            return Ok(None);
        };

        let response = self.bank.authorize(&request).await?;
        info!("Payment {} {:?}", response.id, response.status);

        // Stored raw; the PAN is masked on the read path only.
        let detail = PaymentDetail::new(request, response.clone());
        self.repository.upsert(detail).await?;

        Ok(Some(response))
    }

    /// Looks up a stored payment. The returned copy carries a masked card
    /// number; the stored record keeps the original digits, so repeated
    /// reads stay correct.
    pub async fn get_payment_detail(
        &self,
        id: Uuid,
    ) -> Result<Option<PaymentDetail>, GatewayError> {
        let detail = self.repository.get(id).await?.map(|mut detail| {
            detail.request.card_number = mask_card_number(&detail.request.card_number);
            detail
        });
        Ok(detail)
    }
}
