use std::sync::Arc;

use veranda_catalog::Room;
use veranda_core::{PaymentProcessor, PaymentRequest};

use crate::models::BookingOutcome;

/// Books stays by charging the guest through an injected payment processor.
///
/// The service depends only on the `PaymentProcessor` capability, so any
/// concrete processor can be swapped in without touching the booking flow.
pub struct BookingService {
    processor: Arc<dyn PaymentProcessor>,
}

impl BookingService {
    pub fn new(processor: Arc<dyn PaymentProcessor>) -> Self {
        Self { processor }
    }

    /// Book `nights` nights in `room` for `guest_name`.
    ///
    /// Derives the charge from the room's nightly rate, submits it, and
    /// reports the outcome. Every path returns a value; a declined charge is
    /// an outcome, not an error.
    pub fn book_room(&self, room: &dyn Room, guest_name: &str, nights: u32) -> BookingOutcome {
        let request = PaymentRequest::for_stay(room.nightly_rate(), nights);

        if self.processor.process_payment(&request) {
            tracing::info!("Booking confirmed for {} in {}", guest_name, room.name());
            BookingOutcome::success(guest_name, room.name(), nights)
        } else {
            BookingOutcome::payment_declined()
        }
    }
}
