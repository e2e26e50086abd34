use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::api::dto::datetime;
use crate::api::dto::menu_items::MenuItemResponse;
use crate::api::dto::order_items::OrderItemResponse;
use crate::repos::order_repo::OrderRow;
use crate::services::validation::{RuleSet, checks};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OrderForm {
    #[serde(deserialize_with = "datetime::optional")]
    pub order_date: Option<NaiveDateTime>,
    pub total_amount: Decimal,
    pub reservation_id: i32,
    pub employee_id: i32,
}

pub fn rules() -> RuleSet<OrderForm> {
    RuleSet::<OrderForm>::new()
        .rule("orderDate", |o| checks::date_present(o.order_date.as_ref()), "Order date is required.")
        .rule("totalAmount", |o| checks::positive_decimal(&o.total_amount), "Total amount must be greater than 0.")
        .rule("totalAmount", |o| checks::precision_scale(&o.total_amount, 18, 2), "Total amount must be a valid decimal with up to 2 decimal places.")
        .rule("reservationId", |o| checks::id_present(o.reservation_id), "Reservation ID is required.")
        .rule("reservationId", |o| o.reservation_id > 0, "Reservation ID must be greater than 0.")
        .rule("employeeId", |o| checks::id_present(o.employee_id), "Employee ID is required.")
        .rule("employeeId", |o| o.employee_id > 0, "Employee ID must be greater than 0.")
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    pub order_id: i32,
    pub reservation_id: i32,
    pub employee_id: i32,
    pub order_date: NaiveDateTime,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_amount: Decimal,
}

impl From<OrderRow> for OrderResponse {
    fn from(row: OrderRow) -> Self {
        Self {
            order_id: row.order_id,
            reservation_id: row.reservation_id,
            employee_id: row.employee_id,
            order_date: row.order_date,
            total_amount: row.total_amount,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderWithListsResponse {
    #[serde(flatten)]
    pub order: OrderResponse,
    pub order_items: Vec<OrderItemResponse>,
}

/// One line of an order, carrying the menu item it refers to.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLineResponse {
    pub order_item_id: i32,
    pub order_id: i32,
    pub quantity: i32,
    pub menu_item: MenuItemResponse,
}

/// An order of a reservation with its lines.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderWithItemsResponse {
    #[serde(flatten)]
    pub order: OrderResponse,
    pub order_items: Vec<OrderLineResponse>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::str::FromStr;

    fn valid() -> OrderForm {
        OrderForm {
            order_date: NaiveDate::from_ymd_opt(2025, 3, 14)
                .and_then(|d| d.and_hms_opt(19, 30, 0)),
            total_amount: Decimal::from_str("42.50").unwrap(),
            reservation_id: 1,
            employee_id: 2,
        }
    }

    #[test]
    fn valid_order_passes() {
        assert!(rules().validate(&valid()).is_ok());
    }

    #[test]
    fn missing_or_default_date_fails() {
        let missing = OrderForm {
            order_date: None,
            ..valid()
        };
        assert!(rules().validate(&missing).unwrap_err().has_field("orderDate"));

        let form: OrderForm = serde_json::from_str(
            r#"{"orderDate":"0001-01-01T00:00:00","totalAmount":1,"reservationId":1,"employeeId":1}"#,
        )
        .unwrap();
        let err = rules().validate(&form).unwrap_err();
        assert_eq!(err.messages_for("orderDate"), vec!["Order date is required."]);
        assert_eq!(err.failures().len(), 1);
    }

    #[test]
    fn utc_offset_and_date_only_inputs_bind() {
        let cases = [
            ("2025-03-14T19:30:00Z", "2025-03-14 19:30:00"),
            ("2025-03-14T21:30:00+02:00", "2025-03-14 19:30:00"),
            ("2025-03-14", "2025-03-14 00:00:00"),
        ];
        for (input, expected) in cases {
            let form: OrderForm = serde_json::from_str(&format!(
                r#"{{"orderDate":"{input}","totalAmount":1,"reservationId":1,"employeeId":1}}"#
            ))
            .unwrap();
            assert_eq!(form.order_date.unwrap().to_string(), expected);
            assert!(rules().validate(&form).is_ok());
        }
    }

    #[test]
    fn null_date_is_missing() {
        let form: OrderForm = serde_json::from_str(
            r#"{"orderDate":null,"totalAmount":1,"reservationId":1,"employeeId":1}"#,
        )
        .unwrap();
        assert_eq!(rules().validate(&form).unwrap_err().messages_for("orderDate").len(), 1);
    }

    #[test]
    fn empty_order_reports_every_field() {
        let err = rules().validate(&OrderForm::default()).unwrap_err();
        for field in ["orderDate", "totalAmount", "reservationId", "employeeId"] {
            assert!(err.has_field(field), "{field} should fail");
        }
    }
}
