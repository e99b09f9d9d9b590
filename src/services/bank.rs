use crate::models::payment::{PaymentRequest, PaymentResponse, TransactionStatus};
use async_trait::async_trait;
use chrono::{Local, NaiveDate};
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum BankError {
    #[error("I/O error talking to the acquiring bank: {0}")]
    Io(#[from] std::io::Error),
}

#[async_trait]
pub trait AcquiringBank: Send + Sync {
    /// Mints a fresh transaction id and returns the authorization decision.
    /// Business declines are encoded in the response status, never as errors.
    async fn authorize(&self, request: &PaymentRequest) -> Result<PaymentResponse, BankError>;
}

/// Simulated acquiring bank. The decision is a pure function of the request
/// and today's date; the only non-deterministic output is the minted id.
#[derive(Debug, Default)]
pub struct SimulatedBank;

impl SimulatedBank {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl AcquiringBank for SimulatedBank {
    async fn authorize(&self, request: &PaymentRequest) -> Result<PaymentResponse, BankError> {
        Ok(PaymentResponse {
            id: Uuid::new_v4(),
            status: decide(request, Local::now().date_naive()),
        })
    }
}

fn decide(request: &PaymentRequest, today: NaiveDate) -> TransactionStatus {
    if !request.is_well_formed() {
        return TransactionStatus::Declined;
    }

    // The card is good through the last calendar day of its expiry month.
    match expiry_last_day(&request.expiry_date) {
        Some(last_day) if today <= last_day => TransactionStatus::Authorized,
        _ => TransactionStatus::Declined,
    }
}

/// Last calendar day of the expiry month, or None when the "MM/YY" string
/// does not parse. Year arithmetic is checked: an absurd-but-parseable year
/// falls out as None (declined) rather than overflowing.
fn expiry_last_day(expiry_date: &str) -> Option<NaiveDate> {
    let parts: Vec<&str> = expiry_date.split('/').collect();
    if parts.len() != 2 {
        return None;
    }

    let month: u32 = parts[0].parse().ok()?;
    if !(1..=12).contains(&month) {
        return None;
    }
    let year: i32 = parts[1].parse::<i32>().ok()?.checked_add(2000)?;

    let next_month = if month == 12 {
        NaiveDate::from_ymd_opt(year.checked_add(1)?, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    next_month?.pred_opt()
}
