//! Service layer providing the beer operations on top of `models`.
//! - Separates business logic from data access.
//! - Storage is reached only through the `BeerRepository` port.

pub mod beer;
#[cfg(test)]
pub mod test_support;
