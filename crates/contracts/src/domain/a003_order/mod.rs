pub mod aggregate;
pub mod seed;

pub use aggregate::{Order, OrderError, OrderFilter, OrderItem, OrderStatus};
