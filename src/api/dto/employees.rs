/*
 * Responsibility
 * - Employee write form + its rule table
 * - Employee response shapes, including the restaurant-details view
 */
use serde::{Deserialize, Serialize};

use crate::api::dto::orders::OrderResponse;
use crate::repos::employee_repo::{EmployeeRow, EmployeeWithRestaurantRow};
use crate::services::validation::{RuleSet, checks};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EmployeeForm {
    pub first_name: String,
    pub last_name: String,
    pub position: String,
    pub restaurant_id: i32,
}

pub fn rules() -> RuleSet<EmployeeForm> {
    RuleSet::<EmployeeForm>::new()
        .rule("firstName", |e| checks::not_blank(&e.first_name), "'First Name' must not be empty.")
        .rule("firstName", |e| checks::min_chars(&e.first_name, 2), "'First Name' must be at least 2 characters long.")
        .rule("firstName", |e| checks::letters_and_spaces(&e.first_name), "'First Name' is not in the correct format.")
        .rule("lastName", |e| checks::not_blank(&e.last_name), "'Last Name' must not be empty.")
        .rule("lastName", |e| checks::min_chars(&e.last_name, 2), "'Last Name' must be at least 2 characters long.")
        .rule("lastName", |e| checks::letters_and_spaces(&e.last_name), "'Last Name' is not in the correct format.")
        .rule("position", |e| checks::not_blank(&e.position), "'Position' must not be empty.")
        .rule("restaurantId", |e| checks::id_present(e.restaurant_id), "Restaurant ID is required.")
        .rule("restaurantId", |e| e.restaurant_id > 0, "Restaurant ID must be greater than 0.")
}

/// Query string for `GET /employees`.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EmployeeListQuery {
    pub with_restaurant_details: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeResponse {
    pub employee_id: i32,
    pub restaurant_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub position: String,
}

impl From<EmployeeRow> for EmployeeResponse {
    fn from(row: EmployeeRow) -> Self {
        Self {
            employee_id: row.employee_id,
            restaurant_id: row.restaurant_id,
            first_name: row.first_name,
            last_name: row.last_name,
            position: row.position,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeWithRestaurantDetailsResponse {
    pub employee_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub position: String,
    pub restaurant_id: i32,
    pub restaurant_name: String,
    pub address: String,
    pub phone_number: String,
    pub opening_hours: String,
}

impl From<EmployeeWithRestaurantRow> for EmployeeWithRestaurantDetailsResponse {
    fn from(row: EmployeeWithRestaurantRow) -> Self {
        Self {
            employee_id: row.employee_id,
            first_name: row.first_name,
            last_name: row.last_name,
            position: row.position,
            restaurant_id: row.restaurant_id,
            restaurant_name: row.restaurant_name,
            address: row.address,
            phone_number: row.phone_number,
            opening_hours: row.opening_hours,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeWithListsResponse {
    #[serde(flatten)]
    pub employee: EmployeeResponse,
    pub orders: Vec<OrderResponse>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> EmployeeForm {
        EmployeeForm {
            first_name: "Anna".into(),
            last_name: "Karenina".into(),
            position: "Manager".into(),
            restaurant_id: 2,
        }
    }

    #[test]
    fn valid_employee_passes() {
        assert!(rules().validate(&valid()).is_ok());
    }

    #[test]
    fn blank_position_and_missing_restaurant_fail() {
        let form = EmployeeForm {
            position: " ".into(),
            restaurant_id: 0,
            ..valid()
        };
        let err = rules().validate(&form).unwrap_err();
        assert!(err.has_field("position"));
        assert_eq!(err.messages_for("restaurantId").len(), 2);
        assert!(!err.has_field("firstName"));
    }

    #[test]
    fn single_letter_name_is_too_short() {
        let form = EmployeeForm {
            first_name: "A".into(),
            ..valid()
        };
        let err = rules().validate(&form).unwrap_err();
        assert_eq!(
            err.messages_for("firstName"),
            vec!["'First Name' must be at least 2 characters long."]
        );
    }
}
