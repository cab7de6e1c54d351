use std::fmt;

use serde::{Deserialize, Serialize};

/// Fixed reason attached to a declined charge.
const PAYMENT_DECLINED_REASON: &str = "payment error";

/// Result of one booking attempt.
///
/// Produced per call and never retained. `Display` renders the guest-facing
/// message for either side.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingOutcome {
    Success {
        guest_name: String,
        room_name: String,
        nights: u32,
    },
    Failure {
        reason: String,
    },
}

impl BookingOutcome {
    /// Outcome for a stay whose charge went through.
    pub fn success(
        guest_name: impl Into<String>,
        room_name: impl Into<String>,
        nights: u32,
    ) -> Self {
        Self::Success {
            guest_name: guest_name.into(),
            room_name: room_name.into(),
            nights,
        }
    }

    /// Fixed outcome for a declined charge.
    pub fn payment_declined() -> Self {
        Self::Failure {
            reason: PAYMENT_DECLINED_REASON.to_string(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}

impl fmt::Display for BookingOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success {
                guest_name,
                room_name,
                nights,
            } => write!(
                f,
                "Booking successful for {} in {} for {} nights.",
                guest_name, room_name, nights
            ),
            Self::Failure { reason } => write!(f, "Booking failed due to {}.", reason),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_message() {
        let outcome = BookingOutcome::success("John Doe", "Standard Room", 3);

        assert!(outcome.is_success());
        assert_eq!(
            outcome.to_string(),
            "Booking successful for John Doe in Standard Room for 3 nights."
        );
    }

    #[test]
    fn test_declined_message() {
        let outcome = BookingOutcome::payment_declined();

        assert!(!outcome.is_success());
        assert_eq!(outcome.to_string(), "Booking failed due to payment error.");
    }

    #[test]
    fn test_outcome_serialization() {
        let outcome = BookingOutcome::payment_declined();
        let json = serde_json::to_value(&outcome).expect("Failed to serialize");

        assert_eq!(
            json,
            serde_json::json!({ "FAILURE": { "reason": "payment error" } })
        );
    }
}
