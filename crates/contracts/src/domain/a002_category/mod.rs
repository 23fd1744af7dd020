pub mod aggregate;
pub mod form;
pub mod seed;

pub use aggregate::Category;
pub use form::CategoryDraft;
