use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    pub card_number: String,
    pub card_holder_name: String,
    pub cvv: String,
    /// "MM/YY"
    pub expiry_date: String,
    pub currency: String,
    pub amount: Decimal,
}

impl PaymentRequest {
    /// Structural checks shared by the edge pre-check and the bank.
    /// Card-number length is checked here, before anything downstream
    /// treats the value as a 16-digit PAN.
    pub fn is_well_formed(&self) -> bool {
        !self.cvv.is_empty()
            && !self.card_number.is_empty()
            && !self.card_holder_name.is_empty()
            && !self.currency.is_empty()
            && !self.expiry_date.is_empty()
            && self.amount > Decimal::ZERO
            && self.card_number.len() == 16
            && self.currency.len() == 3
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionStatus {
    Authorized,
    Declined,
}

/// Minted exactly once per submission by the acquiring bank.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentResponse {
    pub id: Uuid,
    pub status: TransactionStatus,
}

/// Stored record of one submission. The id always equals the response id.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentDetail {
    pub id: Uuid,
    pub request: PaymentRequest,
    pub response: PaymentResponse,
}

impl PaymentDetail {
    pub fn new(request: PaymentRequest, response: PaymentResponse) -> Self {
        Self {
            id: response.id,
            request,
            response,
        }
    }
}
