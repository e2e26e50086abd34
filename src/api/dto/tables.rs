use serde::{Deserialize, Serialize};

use crate::api::dto::reservations::ReservationResponse;
use crate::repos::table_repo::TableRow;
use crate::services::validation::{RuleSet, checks};

pub const MAX_TABLE_CAPACITY: i32 = 20;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TableForm {
    pub capacity: i32,
    pub restaurant_id: i32,
}

pub fn rules() -> RuleSet<TableForm> {
    RuleSet::<TableForm>::new()
        .rule("capacity", |t| t.capacity > 0, "Capacity must be greater than 0.")
        .rule("capacity", |t| t.capacity <= MAX_TABLE_CAPACITY, "Capacity must be 20 or less.")
        .rule("restaurantId", |t| checks::id_present(t.restaurant_id), "Restaurant ID is required.")
        .rule("restaurantId", |t| t.restaurant_id > 0, "Restaurant ID must be greater than 0.")
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableResponse {
    pub table_id: i32,
    pub restaurant_id: i32,
    pub capacity: i32,
}

impl From<TableRow> for TableResponse {
    fn from(row: TableRow) -> Self {
        Self {
            table_id: row.table_id,
            restaurant_id: row.restaurant_id,
            capacity: row.capacity,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableWithListsResponse {
    #[serde(flatten)]
    pub table: TableResponse,
    pub reservations: Vec<ReservationResponse>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(capacity: i32) -> TableForm {
        TableForm {
            capacity,
            restaurant_id: 1,
        }
    }

    #[test]
    fn capacity_bounds() {
        let rules = rules();
        assert!(rules.validate(&table(20)).is_ok());
        assert!(rules.validate(&table(1)).is_ok());

        let over = rules.validate(&table(21)).unwrap_err();
        assert_eq!(over.messages_for("capacity"), vec!["Capacity must be 20 or less."]);

        let zero = rules.validate(&table(0)).unwrap_err();
        assert_eq!(zero.messages_for("capacity"), vec!["Capacity must be greater than 0."]);
    }

    #[test]
    fn missing_restaurant_reports_both_rules() {
        let err = rules().validate(&TableForm { capacity: 4, restaurant_id: 0 }).unwrap_err();
        assert_eq!(
            err.messages_for("restaurantId"),
            vec!["Restaurant ID is required.", "Restaurant ID must be greater than 0."]
        );
    }

    #[test]
    fn negative_restaurant_id_is_present_but_not_positive() {
        let err = rules().validate(&TableForm { capacity: 4, restaurant_id: -3 }).unwrap_err();
        assert_eq!(
            err.messages_for("restaurantId"),
            vec!["Restaurant ID must be greater than 0."]
        );
    }
}
