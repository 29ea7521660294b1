//! Common test utilities for Dramanet integration tests

#![allow(dead_code)]

pub mod corpus;

pub use corpus::{doll_house, doll_house_json, lady_from_the_sea, random_corpus};

use dramanet::{Gender, GenderOverrides};

/// Overrides as the usual gender file would give them.
pub fn ibsen_overrides() -> GenderOverrides {
    GenderOverrides::new()
        .with_global("Nora", Gender::Female)
        .with_global("Helmer", Gender::Male)
        .with_global("Ellida", Gender::Female)
        .with_global("Bolette", Gender::Female)
        .with_global("Wangel", Gender::Male)
        .with_global("Fru Linde", Gender::Female)
        .with_global("Doktor Rank", Gender::Male)
}
