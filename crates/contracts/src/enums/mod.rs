pub mod order_status;
pub mod technician_role;

pub use order_status::OrderStatus;
pub use technician_role::TechnicianRole;
