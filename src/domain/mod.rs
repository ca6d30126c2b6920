mod booking;

pub use booking::{BookingDates, BookingPayload, BookingRecord};
