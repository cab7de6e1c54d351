use std::fmt;

use crate::payment::{PaymentInfo, PaymentProcessor, PaymentRequest};

/// Card identifier that never reveals its full digits.
///
/// Debug and Display render only the trailing four, so the number cannot
/// leak through log macros like `tracing::info!("{:?}", processor)`.
#[derive(Clone)]
pub struct CardNumber(String);

impl CardNumber {
    pub fn new(number: impl Into<String>) -> Self {
        Self(number.into())
    }

    /// Trailing four characters, or the whole identifier when shorter.
    pub fn last4(&self) -> String {
        let chars: Vec<char> = self.0.chars().collect();
        let split = chars.len().saturating_sub(4);
        chars[split..].iter().collect()
    }
}

impl fmt::Debug for CardNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "**** **** **** {}", self.last4())
    }
}

impl fmt::Display for CardNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "**** **** **** {}", self.last4())
    }
}

/// Charges stays against a credit card.
///
/// In this toy system the charge always succeeds.
#[derive(Debug, Clone)]
pub struct CreditCardProcessor {
    card: CardNumber,
}

impl CreditCardProcessor {
    pub fn new(card_number: impl Into<String>) -> Self {
        Self {
            card: CardNumber::new(card_number),
        }
    }
}

impl PaymentProcessor for CreditCardProcessor {
    fn process_payment(&self, request: &PaymentRequest) -> bool {
        tracing::info!(
            "Charging {} to card ending in {}",
            request.amount(),
            self.card.last4()
        );
        true
    }
}

/// Charges stays against a PayPal account.
///
/// In this toy system the charge always succeeds. The account email and
/// currency are held privately and surface only in the log line and the
/// `PaymentInfo` report.
#[derive(Debug, Clone)]
pub struct PayPalProcessor {
    email: String,
    currency: String,
}

impl PayPalProcessor {
    pub fn new(email: impl Into<String>, currency: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            currency: currency.into(),
        }
    }
}

impl PaymentProcessor for PayPalProcessor {
    fn process_payment(&self, request: &PaymentRequest) -> bool {
        tracing::info!(
            "Charging {} {} to PayPal account {}",
            request.amount(),
            self.currency,
            self.email
        );
        true
    }
}

impl PaymentInfo for PayPalProcessor {
    fn charge_info(&self, request: &PaymentRequest) -> String {
        format!(
            "PayPal charge of {} {} for {}",
            request.amount(),
            self.currency,
            self.email
        )
    }
}
