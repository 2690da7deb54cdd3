//! Error kinds shared by all layers.
//!
//! Four kinds, split by the point in the lifecycle where they fire:
//!
//! - [`ZError::DuplicateKey`] - ingestion time, when a short name is declared twice
//! - [`ZError::NoSuchSection`] - resolution time, undeclared or blank name in a chain
//! - [`ZError::RecursiveKey`] - resolution time, cycle in the parent-link graph
//! - [`ZError::NoOption`] - lookup time, only after a fully valid chain walk
//!
//! All four surface directly to the caller; none is retried internally.
//! Structural errors (the first three) are never absorbed into boolean
//! results; only a content miss after a valid walk becomes `false`.

use thiserror::Error;

/// Errors from declaration ingestion and chain resolution.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ZError {
    /// A short name was declared twice. Fires on the second insertion,
    /// regardless of insertion order, before any resolution runs.
    #[error("duplicate section name: '{0}'")]
    DuplicateKey(String),

    /// A queried root or a parent link refers to a section that was never
    /// declared, or to a blank name component.
    #[error("no such section: '{0}'")]
    NoSuchSection(String),

    /// A short name would be visited twice in the same chain walk.
    /// Takes precedence over option lookups on the same query.
    #[error("recursive section reference: '{0}'")]
    RecursiveKey(String),

    /// A fully valid, cycle-free chain plus the DEFAULT layer defines no
    /// value for the option.
    #[error("no option '{option}' in section '{section}'")]
    NoOption {
        /// The queried section's short name.
        section: String,
        /// The option key, as queried.
        option: String,
    },
}
