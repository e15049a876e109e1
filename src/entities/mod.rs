pub mod order;
pub mod reservation;
pub mod restaurant_table;
pub mod user;
