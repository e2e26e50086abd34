use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::api::dto::order_items::OrderItemResponse;
use crate::repos::menu_item_repo::MenuItemRow;
use crate::services::validation::{RuleSet, checks};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MenuItemForm {
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub restaurant_id: i32,
}

pub fn rules() -> RuleSet<MenuItemForm> {
    RuleSet::<MenuItemForm>::new()
        .rule("name", |m| checks::not_blank(&m.name), "Name is required.")
        .rule("name", |m| checks::min_chars(&m.name, 2), "Name must be at least 2 characters long.")
        .rule("name", |m| checks::max_chars(&m.name, 100), "Name must be less than 100 characters long.")
        .rule("description", |m| checks::not_blank(&m.description), "Description is required.")
        .rule("description", |m| checks::min_chars(&m.description, 10), "Description must be at least 10 characters long.")
        .rule("description", |m| checks::max_chars(&m.description, 500), "Description must be less than 500 characters long.")
        .rule("price", |m| checks::positive_decimal(&m.price), "Price must be greater than 0.")
        .rule("price", |m| checks::precision_scale(&m.price, 18, 2), "Price must be a valid decimal with up to 2 decimal places.")
        .rule("restaurantId", |m| checks::id_present(m.restaurant_id), "Restaurant ID is required.")
        .rule("restaurantId", |m| m.restaurant_id > 0, "Restaurant ID must be greater than 0.")
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemResponse {
    pub menu_item_id: i32,
    pub restaurant_id: i32,
    pub name: String,
    pub description: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
}

impl From<MenuItemRow> for MenuItemResponse {
    fn from(row: MenuItemRow) -> Self {
        Self {
            menu_item_id: row.menu_item_id,
            restaurant_id: row.restaurant_id,
            name: row.name,
            description: row.description,
            price: row.price,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemWithListsResponse {
    #[serde(flatten)]
    pub menu_item: MenuItemResponse,
    pub order_items: Vec<OrderItemResponse>,
}
