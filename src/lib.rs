pub mod booking_client;
pub mod configuration;
pub mod domain;
pub mod telemetry;
pub mod test_data;
