use veranda_booking::{BookingOutcome, BookingService};
use veranda_catalog::Room;

/// Application facade over the booking workflow.
///
/// Wraps a fully wired `BookingService` so callers hold a single entry
/// point. The facade adds no behavior of its own.
pub struct HotelBookingApp {
    booking_service: BookingService,
}

impl HotelBookingApp {
    pub fn new(booking_service: BookingService) -> Self {
        Self { booking_service }
    }

    /// Books `room` for `guest_name`, forwarding the service's outcome
    /// unchanged.
    pub fn make_booking(&self, room: &dyn Room, guest_name: &str, nights: u32) -> BookingOutcome {
        self.booking_service.book_room(room, guest_name, nights)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use veranda_catalog::StandardRoom;
    use veranda_core::{PaymentProcessor, PaymentRequest};

    struct AcceptingProcessor;

    impl PaymentProcessor for AcceptingProcessor {
        fn process_payment(&self, _request: &PaymentRequest) -> bool {
            true
        }
    }

    struct DecliningProcessor;

    impl PaymentProcessor for DecliningProcessor {
        fn process_payment(&self, _request: &PaymentRequest) -> bool {
            false
        }
    }

    #[test]
    fn test_facade_forwards_to_service() {
        let processor: Arc<dyn PaymentProcessor> = Arc::new(AcceptingProcessor);
        let app = HotelBookingApp::new(BookingService::new(Arc::clone(&processor)));
        let service = BookingService::new(processor);

        let via_app = app.make_booking(&StandardRoom, "John Doe", 3);
        let via_service = service.book_room(&StandardRoom, "John Doe", 3);

        assert_eq!(via_app, via_service);
    }

    #[test]
    fn test_facade_forwards_failures_unchanged() {
        let app = HotelBookingApp::new(BookingService::new(Arc::new(DecliningProcessor)));

        let outcome = app.make_booking(&StandardRoom, "John Doe", 3);

        assert!(!outcome.is_success());
        assert_eq!(
            outcome.to_string(),
            "Booking failed due to payment error."
        );
    }
}
