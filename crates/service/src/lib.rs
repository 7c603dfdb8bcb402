//! Service layer providing business-oriented CRUD operations on top of models.
//! - Separates business logic from data access through per-entity repositories.
//! - Reuses entity definitions in `models` crate.
//! - Owns input validation rules and external id generation.

pub mod errors;
pub mod ids;
pub mod labs;
pub mod results;
pub mod seed;
pub mod validation;
#[cfg(test)]
pub mod test_support;
