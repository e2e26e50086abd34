/*
 * Responsibility
 * - Restaurant write form + its rule table
 * - Restaurant response shapes (flat, and with child lists)
 */
use serde::{Deserialize, Serialize};

use crate::api::dto::employees::EmployeeResponse;
use crate::api::dto::menu_items::MenuItemResponse;
use crate::api::dto::reservations::ReservationResponse;
use crate::api::dto::tables::TableResponse;
use crate::repos::restaurant_repo::RestaurantRow;
use crate::services::validation::{RuleSet, checks};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RestaurantForm {
    pub name: String,
    pub address: String,
    pub phone_number: String,
    pub opening_hours: String,
}

pub fn rules() -> RuleSet<RestaurantForm> {
    RuleSet::<RestaurantForm>::new()
        .rule("name", |r| checks::not_blank(&r.name), "Name is required.")
        .rule("name", |r| checks::min_chars(&r.name, 2), "Name must be at least 2 characters long.")
        .rule("address", |r| checks::not_blank(&r.address), "Address is required.")
        .rule("address", |r| checks::min_chars(&r.address, 5), "Address must be at least 5 characters long.")
        .rule("phoneNumber", |r| checks::not_blank(&r.phone_number), "Phone Number is required.")
        .rule("phoneNumber", |r| checks::digits_only(&r.phone_number), "Phone Number must be numeric.")
        .rule("openingHours", |r| checks::not_blank(&r.opening_hours), "Opening Hours are required.")
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantResponse {
    pub restaurant_id: i32,
    pub name: String,
    pub address: String,
    pub phone_number: String,
    pub opening_hours: String,
}

impl From<RestaurantRow> for RestaurantResponse {
    fn from(row: RestaurantRow) -> Self {
        Self {
            restaurant_id: row.restaurant_id,
            name: row.name,
            address: row.address,
            phone_number: row.phone_number,
            opening_hours: row.opening_hours,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantWithListsResponse {
    #[serde(flatten)]
    pub restaurant: RestaurantResponse,
    pub tables: Vec<TableResponse>,
    pub employees: Vec<EmployeeResponse>,
    pub menu_items: Vec<MenuItemResponse>,
    pub reservations: Vec<ReservationResponse>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> RestaurantForm {
        RestaurantForm {
            name: "Le Bistro".into(),
            address: "12 Rue de Rivoli".into(),
            phone_number: "331234567".into(),
            opening_hours: "Mon-Sun 11:00-23:00".into(),
        }
    }

    #[test]
    fn valid_restaurant_passes() {
        assert!(rules().validate(&valid()).is_ok());
    }

    #[test]
    fn short_address_and_missing_hours_fail() {
        let form = RestaurantForm {
            address: "Main".into(),
            opening_hours: "  ".into(),
            ..valid()
        };
        let err = rules().validate(&form).unwrap_err();
        assert_eq!(
            err.messages_for("address"),
            vec!["Address must be at least 5 characters long."]
        );
        assert_eq!(
            err.messages_for("openingHours"),
            vec!["Opening Hours are required."]
        );
    }

    #[test]
    fn empty_form_fails_every_field() {
        let err = rules().validate(&RestaurantForm::default()).unwrap_err();
        let map = err.into_field_map();
        assert_eq!(
            map.keys().map(String::as_str).collect::<Vec<_>>(),
            vec!["address", "name", "openingHours", "phoneNumber"]
        );
    }
}
