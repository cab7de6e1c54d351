/// Capability shared by every bookable room category.
///
/// Implementations are stateless: a fixed display name and a fixed nightly
/// rate. Adding a category means adding a new impl; the booking flow never
/// changes.
pub trait Room: Send + Sync {
    /// Nightly rate in whole currency units. Always non-negative.
    fn nightly_rate(&self) -> i64;

    /// Display name of the category. Always non-empty.
    fn name(&self) -> &str;
}

/// Entry-level category.
#[derive(Debug, Clone, Copy)]
pub struct StandardRoom;

impl Room for StandardRoom {
    fn nightly_rate(&self) -> i64 {
        100
    }

    fn name(&self) -> &str {
        "Standard Room"
    }
}

/// Mid-tier category.
#[derive(Debug, Clone, Copy)]
pub struct DeluxeRoom;

impl Room for DeluxeRoom {
    fn nightly_rate(&self) -> i64 {
        200
    }

    fn name(&self) -> &str {
        "Deluxe Room"
    }
}

/// Top-tier category.
#[derive(Debug, Clone, Copy)]
pub struct SuiteRoom;

impl Room for SuiteRoom {
    fn nightly_rate(&self) -> i64 {
        300
    }

    fn name(&self) -> &str {
        "Suite Room"
    }
}
