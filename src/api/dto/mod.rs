/*
 * Responsibility
 * - Request/response shapes at the HTTP boundary
 * - validators(): every write form mapped to its rule table, built once at startup
 */
pub mod authentication;
pub mod customers;
pub mod datetime;
pub mod employees;
pub mod menu_items;
pub mod order_items;
pub mod orders;
pub mod reservations;
pub mod restaurants;
pub mod tables;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::services::validation::ValidatorRegistry;

pub fn validators() -> ValidatorRegistry {
    ValidatorRegistry::new()
        .register(customers::rules())
        .register(employees::rules())
        .register(menu_items::rules())
        .register(order_items::rules())
        .register(orders::rules())
        .register(reservations::rules())
        .register(restaurants::rules())
        .register(tables::rules())
}

/// `?includeLists=true` on single-entity reads.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IncludeListsQuery {
    pub include_lists: bool,
}

/// Money aggregate rendered as a bare JSON number.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(transparent)]
pub struct Amount(#[serde(with = "rust_decimal::serde::float")] pub Decimal);
