//! Command implementations for the Herald CLI

pub mod inspect;
pub mod scheme;
