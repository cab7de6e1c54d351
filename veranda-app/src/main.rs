use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use veranda_app::HotelBookingApp;
use veranda_booking::BookingService;
use veranda_catalog::{DeluxeRoom, StandardRoom};
use veranda_core::{CreditCardProcessor, PayPalProcessor};

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "veranda_app=info,veranda_booking=info,veranda_core=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Veranda booking demo");

    let card_app = HotelBookingApp::new(BookingService::new(Arc::new(CreditCardProcessor::new(
        "4242424242424242",
    ))));
    println!("{}", card_app.make_booking(&StandardRoom, "John Doe", 3));

    let paypal_app = HotelBookingApp::new(BookingService::new(Arc::new(PayPalProcessor::new(
        "jane.doe@example.com",
        "EUR",
    ))));
    println!("{}", paypal_app.make_booking(&DeluxeRoom, "Jane Doe", 2));
}
