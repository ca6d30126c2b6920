use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The date range of a stay. Serialized as `YYYY-MM-DD` strings on the wire.
///
/// Invariant: `checkin <= checkout`. The API accepts inverted ranges, but the
/// generator never produces them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingDates {
    pub checkin: NaiveDate,
    pub checkout: NaiveDate,
}

/// A booking as submitted to the API. The server assigns the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingPayload {
    pub firstname: String,
    pub lastname: String,
    pub totalprice: i64,
    pub depositpaid: bool,
    pub bookingdates: BookingDates,
    pub additionalneeds: String,
}

/// The envelope returned by `POST /booking`: the server-issued id plus an
/// echo of the submitted payload.
#[derive(Debug, Clone, Deserialize)]
pub struct BookingRecord {
    pub bookingid: i64,
    pub booking: BookingPayload,
}
