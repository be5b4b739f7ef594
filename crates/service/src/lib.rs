//! Service layer providing the collection operations on top of models.
//! - Every operation takes the database handle explicitly.
//! - Writes run in their own transaction and commit before returning.
//! - Reuses entity definitions in the `models` crate.

pub mod errors;
pub mod pagination;
pub mod companies;
pub mod collections;
#[cfg(test)]
pub mod test_support;
