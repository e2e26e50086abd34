pub mod customer_repo;
pub mod employee_repo;
pub mod error;
pub mod menu_item_repo;
pub mod order_item_repo;
pub mod order_repo;
pub mod reservation_repo;
pub mod restaurant_repo;
pub mod table_repo;
