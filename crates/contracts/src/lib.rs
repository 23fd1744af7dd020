//! Domain layer of the administration console.
//!
//! Everything here is pure data and logic: entity records, their seed
//! collections, the owned [`domain::common::EntityStore`], search and
//! categorical filters, form drafts and status transitions. The `frontend`
//! crate renders it.

pub mod dashboards;
pub mod domain;
pub mod shared;
