//! Error handling for the Sueca referee.

pub mod domain;

pub use domain::DomainError;
