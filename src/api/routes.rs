/*
 * Responsibility
 * - URL structure under /api
 * - Only /authentication is public; every entity route sits behind the access middleware
 */
use axum::{
    Router,
    routing::{get, post},
};

use crate::api::handlers::{
    authentication, customers, employees, menu_items, order_items, orders, reservations,
    restaurants, tables,
};
use crate::middleware;
use crate::state::AppState;

pub fn routes(state: AppState) -> Router<AppState> {
    let public = Router::new().route(
        "/authentication/authenticate",
        post(authentication::authenticate),
    );

    let protected = Router::new()
        .route(
            "/customers",
            get(customers::list_customers).post(customers::create_customer),
        )
        .route(
            "/customers/{id}",
            get(customers::get_customer)
                .put(customers::update_customer)
                .delete(customers::delete_customer),
        )
        .route(
            "/restaurants",
            get(restaurants::list_restaurants).post(restaurants::create_restaurant),
        )
        .route(
            "/restaurants/{id}",
            get(restaurants::get_restaurant)
                .put(restaurants::update_restaurant)
                .delete(restaurants::delete_restaurant),
        )
        .route(
            "/restaurants/{id}/total-revenue",
            get(restaurants::total_revenue),
        )
        .route(
            "/tables",
            get(tables::list_tables).post(tables::create_table),
        )
        .route(
            "/tables/{id}",
            get(tables::get_table)
                .put(tables::update_table)
                .delete(tables::delete_table),
        )
        .route(
            "/employees",
            get(employees::list_employees).post(employees::create_employee),
        )
        .route("/employees/managers", get(employees::list_managers))
        .route(
            "/employees/{id}",
            get(employees::get_employee)
                .put(employees::update_employee)
                .delete(employees::delete_employee),
        )
        .route(
            "/employees/{id}/average-order-amount",
            get(employees::average_order_amount),
        )
        .route(
            "/menu-items",
            get(menu_items::list_menu_items).post(menu_items::create_menu_item),
        )
        .route(
            "/menu-items/{id}",
            get(menu_items::get_menu_item)
                .put(menu_items::update_menu_item)
                .delete(menu_items::delete_menu_item),
        )
        .route(
            "/orders",
            get(orders::list_orders).post(orders::create_order),
        )
        .route(
            "/orders/{id}",
            get(orders::get_order)
                .put(orders::update_order)
                .delete(orders::delete_order),
        )
        .route(
            "/order-items",
            get(order_items::list_order_items).post(order_items::create_order_item),
        )
        .route(
            "/order-items/{id}",
            get(order_items::get_order_item)
                .put(order_items::update_order_item)
                .delete(order_items::delete_order_item),
        )
        .route(
            "/reservations",
            get(reservations::list_reservations).post(reservations::create_reservation),
        )
        .route(
            "/reservations/customer/{id}",
            get(reservations::list_for_customer),
        )
        .route(
            "/reservations/{id}",
            get(reservations::get_reservation)
                .put(reservations::update_reservation)
                .delete(reservations::delete_reservation),
        )
        .route("/reservations/{id}/orders", get(reservations::list_orders))
        .route(
            "/reservations/{id}/menu-items",
            get(reservations::list_menu_items),
        );

    let protected = middleware::auth::access::apply(protected, state);

    public.merge(protected)
}
