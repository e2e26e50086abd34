/*
 * Responsibility
 * - Reservation write form + its rule table
 * - Reservation response shapes, including the customer/restaurant view
 */
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::api::dto::datetime;
use crate::api::dto::orders::OrderResponse;
use crate::repos::reservation_repo::{ReservationDetailsRow, ReservationRow};
use crate::services::validation::{RuleSet, checks};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ReservationForm {
    #[serde(deserialize_with = "datetime::optional")]
    pub reservation_date: Option<NaiveDateTime>,
    pub party_size: i32,
    pub customer_id: i32,
    pub restaurant_id: i32,
    pub table_id: i32,
}

pub fn rules() -> RuleSet<ReservationForm> {
    RuleSet::<ReservationForm>::new()
        .rule("reservationDate", |r| checks::date_present(r.reservation_date.as_ref()), "Reservation Date is required.")
        .rule("reservationDate", |r| checks::date_present(r.reservation_date.as_ref()), "Reservation Date must be a valid date.")
        .rule("partySize", |r| r.party_size > 0, "Party Size must be greater than 0.")
        .rule("customerId", |r| checks::id_present(r.customer_id), "Customer ID is required.")
        .rule("customerId", |r| r.customer_id > 0, "Customer ID must be greater than 0.")
        .rule("restaurantId", |r| checks::id_present(r.restaurant_id), "Restaurant ID is required.")
        .rule("restaurantId", |r| r.restaurant_id > 0, "Restaurant ID must be greater than 0.")
        .rule("tableId", |r| checks::id_present(r.table_id), "Table ID is required.")
        .rule("tableId", |r| r.table_id > 0, "Table ID must be greater than 0.")
}

/// Query string for `GET /reservations`.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ReservationListQuery {
    pub with_extra_info: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationResponse {
    pub reservation_id: i32,
    pub customer_id: i32,
    pub restaurant_id: i32,
    pub table_id: i32,
    pub reservation_date: NaiveDateTime,
    pub party_size: i32,
}

impl From<ReservationRow> for ReservationResponse {
    fn from(row: ReservationRow) -> Self {
        Self {
            reservation_id: row.reservation_id,
            customer_id: row.customer_id,
            restaurant_id: row.restaurant_id,
            table_id: row.table_id,
            reservation_date: row.reservation_date,
            party_size: row.party_size,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationWithDetailsResponse {
    pub reservation_id: i32,
    pub reservation_date: NaiveDateTime,
    pub party_size: i32,
    pub customer_id: i32,
    pub customer_first_name: String,
    pub customer_last_name: String,
    pub restaurant_id: i32,
    pub restaurant_name: String,
}

impl From<ReservationDetailsRow> for ReservationWithDetailsResponse {
    fn from(row: ReservationDetailsRow) -> Self {
        Self {
            reservation_id: row.reservation_id,
            reservation_date: row.reservation_date,
            party_size: row.party_size,
            customer_id: row.customer_id,
            customer_first_name: row.customer_first_name,
            customer_last_name: row.customer_last_name,
            restaurant_id: row.restaurant_id,
            restaurant_name: row.restaurant_name,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationWithListsResponse {
    #[serde(flatten)]
    pub reservation: ReservationResponse,
    pub orders: Vec<OrderResponse>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> ReservationForm {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn complete_reservation_passes() {
        let form = parse(
            r#"{"reservationDate":"2025-06-01T19:00:00","partySize":4,"customerId":1,"restaurantId":1,"tableId":3}"#,
        );
        assert!(rules().validate(&form).is_ok());
    }

    #[test]
    fn missing_date_reports_required_and_validity() {
        let form = parse(r#"{"partySize":4,"customerId":1,"restaurantId":1,"tableId":3}"#);
        let err = rules().validate(&form).unwrap_err();
        assert_eq!(
            err.messages_for("reservationDate"),
            vec!["Reservation Date is required.", "Reservation Date must be a valid date."]
        );
    }

    #[test]
    fn default_date_is_not_a_valid_date() {
        let form = parse(
            r#"{"reservationDate":"0001-01-01T00:00:00","partySize":4,"customerId":1,"restaurantId":1,"tableId":3}"#,
        );
        let err = rules().validate(&form).unwrap_err();
        assert_eq!(err.messages_for("reservationDate").len(), 2);
        assert_eq!(err.failures().len(), 2);
    }

    #[test]
    fn client_timestamp_forms_are_accepted() {
        for date in ["2025-06-01T19:00:00Z", "2025-06-01T19:00:00.000Z", "2025-06-01T21:00:00+02:00"] {
            let form = parse(&format!(
                r#"{{"reservationDate":"{date}","partySize":4,"customerId":1,"restaurantId":1,"tableId":3}}"#
            ));
            assert_eq!(
                form.reservation_date.map(|d| d.to_string()).as_deref(),
                Some("2025-06-01 19:00:00"),
                "{date}"
            );
            assert!(rules().validate(&form).is_ok());
        }

        let date_only = parse(
            r#"{"reservationDate":"2025-06-01","partySize":4,"customerId":1,"restaurantId":1,"tableId":3}"#,
        );
        assert_eq!(
            date_only.reservation_date.map(|d| d.to_string()).as_deref(),
            Some("2025-06-01 00:00:00")
        );
    }

    #[test]
    fn unparsable_date_is_a_json_error() {
        let result = serde_json::from_str::<ReservationForm>(r#"{"reservationDate":"soon"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn zero_party_and_negative_table_fail() {
        let form = parse(
            r#"{"reservationDate":"2025-06-01T19:00:00","partySize":0,"customerId":1,"restaurantId":1,"tableId":-1}"#,
        );
        let err = rules().validate(&form).unwrap_err();
        assert!(err.has_field("partySize"));
        assert_eq!(err.messages_for("tableId"), vec!["Table ID must be greater than 0."]);
        assert!(!err.has_field("customerId"));
    }
}
