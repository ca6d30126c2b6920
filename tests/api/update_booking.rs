use crate::helpers::{CookieAbsent, spawn_api};
use crate::test_data::{MALFORMED_TOKEN, TEST_TOKEN};
use booking_api_suite::booking_client::AuthToken;
use booking_api_suite::domain::{BookingDates, BookingPayload};
use booking_api_suite::test_data::{BookingOverrides, generate_booking};
use chrono::NaiveDate;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, ResponseTemplate};

fn update_details() -> BookingPayload {
    generate_booking(BookingOverrides {
        firstname: Some("UserWasUpdated".into()),
        lastname: Some("Successfully".into()),
        totalprice: Some(1234),
        depositpaid: Some(false),
        bookingdates: Some(BookingDates {
            checkin: NaiveDate::from_ymd_opt(2028, 1, 1).unwrap(),
            checkout: NaiveDate::from_ymd_opt(2028, 1, 5).unwrap(),
        }),
        additionalneeds: Some("All needs met by update".into()),
    })
}

#[tokio::test]
async fn an_authorized_update_is_applied_and_round_trips() {
    // Arrange
    let api = spawn_api().await;
    let update = update_details();
    let cookie = format!("token={TEST_TOKEN}");
    Mock::given(path("/booking/7"))
        .and(method("PUT"))
        .and(header("Cookie", cookie.as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(&update))
        .expect(1)
        .mount(&api.server)
        .await;
    Mock::given(path("/booking/7"))
        .and(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&update))
        .expect(1)
        .mount(&api.server)
        .await;
    // Act
    let response = api.put_booking(7, &update, Some(&api.auth_token())).await;
    // Assert
    assert_eq!(200, response.status().as_u16());
    let updated: BookingPayload = response
        .json()
        .await
        .expect("Failed to parse the update response");
    assert_eq!(update, updated);
    // A follow-up fetch reflects the update
    let fetched: BookingPayload = api
        .get_booking(7)
        .await
        .json()
        .await
        .expect("Failed to parse the booking");
    assert_eq!(update, fetched);
}

#[tokio::test]
async fn an_update_without_a_token_is_forbidden() {
    // Arrange
    let api = spawn_api().await;
    Mock::given(path("/booking/7"))
        .and(method("PUT"))
        .and(CookieAbsent)
        .respond_with(ResponseTemplate::new(403).set_body_string("Forbidden"))
        .expect(1)
        .mount(&api.server)
        .await;
    let update = generate_booking(BookingOverrides {
        firstname: Some("NoAuthUpdateAttempt".into()),
        ..Default::default()
    });
    // Act
    let response = api.put_booking(7, &update, None).await;
    // Assert
    assert_eq!(403, response.status().as_u16());
    let body = response.text().await.expect("Failed to read the body");
    assert_eq!("Forbidden", body);
}

#[tokio::test]
async fn an_update_with_a_malformed_token_is_forbidden() {
    // Arrange
    let api = spawn_api().await;
    let cookie = format!("token={MALFORMED_TOKEN}");
    Mock::given(path("/booking/7"))
        .and(method("PUT"))
        .and(header("Cookie", cookie.as_str()))
        .respond_with(ResponseTemplate::new(403).set_body_string("Forbidden"))
        .expect(1)
        .mount(&api.server)
        .await;
    let update = generate_booking(BookingOverrides {
        firstname: Some("InvalidAuthUpdateAttempt".into()),
        ..Default::default()
    });
    let malformed = AuthToken::new(MALFORMED_TOKEN.into());
    // Act
    let response = api.put_booking(7, &update, Some(&malformed)).await;
    // Assert
    assert_eq!(403, response.status().as_u16());
    let body = response.text().await.expect("Failed to read the body");
    assert_eq!("Forbidden", body);
}
