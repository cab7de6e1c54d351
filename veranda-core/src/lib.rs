pub mod payment;
pub mod processors;

pub use payment::{PaymentInfo, PaymentProcessor, PaymentRequest};
pub use processors::{CardNumber, CreditCardProcessor, PayPalProcessor};
