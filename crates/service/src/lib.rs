//! Business layer on top of the catalog models.
//! - Slug assignment with bounded uniqueness probing.
//! - Aggregate duplication of a service and its child collections.
//! - Read-path aggregation for the public pages.
//! - CRUD used by the admin HTTP surface.

pub mod catalog;
pub mod children;
pub mod duplicate;
pub mod errors;
pub mod pages;
pub mod pagination;
pub mod slug;
#[cfg(test)]
pub mod test_support;
