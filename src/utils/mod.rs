pub mod order_number;
pub mod password;
pub mod status;
