//! Randomized booking fixtures with per-field override support.

use chrono::{Duration, Utc};
use fake::Fake;
use fake::faker::lorem::en::Sentence;
use fake::faker::name::en::{FirstName, LastName};
use rand::Rng;

use crate::domain::{BookingDates, BookingPayload};

/// Stock admin account of the booking API under test.
pub const DEFAULT_USERNAME: &str = "admin";
pub const DEFAULT_PASSWORD: &str = "password123";

/// Fields to pin instead of randomizing.
///
/// Merging is shallow: an overridden `bookingdates` replaces the generated
/// date pair wholesale, it is never merged field by field.
#[derive(Debug, Clone, Default)]
pub struct BookingOverrides {
    pub firstname: Option<String>,
    pub lastname: Option<String>,
    pub totalprice: Option<i64>,
    pub depositpaid: Option<bool>,
    pub bookingdates: Option<BookingDates>,
    pub additionalneeds: Option<String>,
}

/// Produce a syntactically valid, plausible booking payload.
///
/// Check-in lands today or tomorrow; check-out follows it by 2 to 15 days,
/// so generated date ranges always satisfy `checkin <= checkout`. The total
/// price is drawn uniformly from `[50, 2000]`. Successive calls are
/// independent; there is no seeding.
pub fn generate_booking(overrides: BookingOverrides) -> BookingPayload {
    let mut rng = rand::thread_rng();
    let checkin = Utc::now().date_naive() + Duration::days(rng.gen_range(0..=1));
    let checkout = checkin + Duration::days(rng.gen_range(2..=15));
    BookingPayload {
        firstname: overrides.firstname.unwrap_or_else(|| FirstName().fake()),
        lastname: overrides.lastname.unwrap_or_else(|| LastName().fake()),
        totalprice: overrides
            .totalprice
            .unwrap_or_else(|| rng.gen_range(50..=2000)),
        depositpaid: overrides.depositpaid.unwrap_or_else(|| rng.gen_bool(0.5)),
        bookingdates: overrides
            .bookingdates
            .unwrap_or(BookingDates { checkin, checkout }),
        additionalneeds: overrides
            .additionalneeds
            .unwrap_or_else(|| Sentence(3..8).fake()),
    }
}

/// Shorthand for the no-override case.
pub fn generate_booking_data() -> BookingPayload {
    generate_booking(BookingOverrides::default())
}
