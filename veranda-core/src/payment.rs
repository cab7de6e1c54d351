use serde::{Deserialize, Serialize};

/// Charge derived from a stay: nightly rate times the number of nights.
///
/// Computed per booking attempt and handed to a payment processor; never
/// stored. The amount is in whole currency units.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PaymentRequest {
    amount: i64,
}

impl PaymentRequest {
    /// Derive the charge for a stay of `nights` nights at `nightly_rate`.
    pub fn for_stay(nightly_rate: i64, nights: u32) -> Self {
        Self {
            amount: nightly_rate * i64::from(nights),
        }
    }

    pub fn amount(&self) -> i64 {
        self.amount
    }
}

/// Capability to charge a guest for a stay.
///
/// A processor reports success or failure for the whole charge and leaves no
/// partial state behind; its only side effect is an informational log line.
pub trait PaymentProcessor: Send + Sync {
    /// Attempt to charge the request, returning whether it succeeded.
    fn process_payment(&self, request: &PaymentRequest) -> bool;
}

/// Reporting capability for processors that can describe a charge without
/// submitting it.
///
/// Kept separate from `PaymentProcessor` so the booking flow depends only on
/// the charging capability.
pub trait PaymentInfo {
    /// Human-readable description of how the charge would be processed.
    fn charge_info(&self, request: &PaymentRequest) -> String;
}
