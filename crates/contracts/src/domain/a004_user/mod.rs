pub mod aggregate;
pub mod seed;

pub use aggregate::{User, UserFilter, UserOrder, UserStatus};
