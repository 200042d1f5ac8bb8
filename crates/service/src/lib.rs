//! Service layer exposing group CRUD and membership mutation on top of models.
//! - Separates business logic from data access.
//! - Reuses validation and entity definitions in `models` crate.
//! - Provides clear error types and documented interfaces.

pub mod errors;
pub mod group_service;
pub mod pagination;
#[cfg(test)]
pub mod test_support;
