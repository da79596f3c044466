//! One module per entity. Each translates domain operations into
//! parameterized statements; storage faults bubble up as `DatabaseError`,
//! row-count outcomes come back as `MutationOutcome`.
//!
//! Mutations that participate in a cascade take a generic executor so they
//! run equally against the pool or inside a transaction.

pub mod articles;
pub mod associations;
pub mod bookmarks;
pub mod categories;
pub mod comments;
pub mod completed_articles;
pub mod faqs;
pub mod followed_packages;
pub mod guides;
pub mod packages;
pub mod users;
