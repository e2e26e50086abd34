use serde::{Deserialize, Serialize};

use crate::repos::order_item_repo::OrderItemRow;
use crate::services::validation::{RuleSet, checks};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OrderItemForm {
    pub quantity: i32,
    pub order_id: i32,
    pub menu_item_id: i32,
}

pub fn rules() -> RuleSet<OrderItemForm> {
    RuleSet::<OrderItemForm>::new()
        .rule("quantity", |i| i.quantity > 0, "Quantity must be greater than 0.")
        .rule("orderId", |i| checks::id_present(i.order_id), "Order ID is required.")
        .rule("orderId", |i| i.order_id > 0, "Order ID must be greater than 0.")
        .rule("menuItemId", |i| checks::id_present(i.menu_item_id), "Menu Item ID is required.")
        .rule("menuItemId", |i| i.menu_item_id > 0, "Menu Item ID must be greater than 0.")
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemResponse {
    pub order_item_id: i32,
    pub order_id: i32,
    pub menu_item_id: i32,
    pub quantity: i32,
}

impl From<OrderItemRow> for OrderItemResponse {
    fn from(row: OrderItemRow) -> Self {
        Self {
            order_item_id: row.order_item_id,
            order_id: row.order_id,
            menu_item_id: row.menu_item_id,
            quantity: row.quantity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quantity_must_be_positive() {
        let form = OrderItemForm {
            quantity: 0,
            order_id: 1,
            menu_item_id: 1,
        };
        let err = rules().validate(&form).unwrap_err();
        assert_eq!(err.messages_for("quantity"), vec!["Quantity must be greater than 0."]);
        assert_eq!(err.failures().len(), 1);
    }

    #[test]
    fn missing_ids_fail_both_rules_each() {
        let form = OrderItemForm {
            quantity: 2,
            ..OrderItemForm::default()
        };
        let err = rules().validate(&form).unwrap_err();
        assert_eq!(err.messages_for("orderId").len(), 2);
        assert_eq!(err.messages_for("menuItemId").len(), 2);
    }
}
