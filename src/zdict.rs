//! Declaration registry: one entry per declared short name.
//!
//! # Architecture
//!
//! The parent-link graph is a directed graph stored arena-style: an
//! insertion-ordered table from short name to its declaration record, each
//! record carrying at most one outgoing edge (the parent reference). The
//! registry owns structural validity of *names*; option content lives in
//! the flat store and is connected to this table only through short names.
//!
//! # Invariants
//!
//! - Each short name maps to exactly one declaration; a second insertion
//!   fails immediately with [`ZError::DuplicateKey`], never at resolution
//! - Declarations are immutable once inserted
//! - Enumeration observes insertion order

use indexmap::IndexMap;

use crate::error::ZError;
use crate::name::NameCodec;

/// One parsed `[...]` header.
///
/// Created during ingestion of the flat store's section list and immutable
/// afterwards. The parent reference is stored exactly as declared (trimmed);
/// it is reduced to a short name only when a chain is walked, so a blank
/// reference like `[aa : ]` stays distinguishable from no reference at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionDecl {
    /// The raw name, possibly containing separators, as it appeared in source.
    pub composite: String,
    /// The canonical lookup identifier: first component, trimmed.
    pub short: String,
    /// The declared parent reference, trimmed. `None` when the composite
    /// contains no separator; `Some("")` when the parent component is blank.
    pub parent: Option<String>,
}

/// Insertion-ordered registry of section declarations, keyed by short name.
///
/// # Example
///
/// ```
/// use zini::{NameCodec, ZDict};
///
/// let codec = NameCodec::default();
/// let mut dict = ZDict::new();
/// dict.insert("aa : bb", &codec).unwrap();
/// dict.insert("bb", &codec).unwrap();
///
/// assert!(dict.contains("aa"));
/// assert_eq!(dict.parent_of("aa").unwrap(), Some("bb"));
/// assert_eq!(dict.parent_of("bb").unwrap(), None);
/// assert!(dict.insert("aa : cc", &codec).is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ZDict {
    entries: IndexMap<String, SectionDecl>,
}

impl ZDict {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a declaration for a composite name.
    ///
    /// The short name and parent reference are derived through the codec.
    /// A blank short name is stored like any other (under the empty key);
    /// it is unreachable by valid lookups and resolution through it reports
    /// a missing section.
    ///
    /// # Errors
    ///
    /// Returns [`ZError::DuplicateKey`] if the short name is already
    /// declared, even when the parent differs.
    pub fn insert(&mut self, composite: &str, codec: &NameCodec) -> Result<(), ZError> {
        let (short, parent) = codec.split(composite);
        if self.entries.contains_key(short) {
            return Err(ZError::DuplicateKey(short.to_string()));
        }
        let decl = SectionDecl {
            composite: composite.to_string(),
            short: short.to_string(),
            parent: parent.map(str::to_string),
        };
        self.entries.insert(short.to_string(), decl);
        Ok(())
    }

    /// Whether a short name is declared.
    pub fn contains(&self, short: &str) -> bool {
        self.entries.contains_key(short)
    }

    /// The declared parent reference of a short name.
    ///
    /// `Ok(None)` means the declaration carries no separator at all.
    /// A blank-but-present parent comes back as `Ok(Some(""))`.
    ///
    /// # Errors
    ///
    /// Returns [`ZError::NoSuchSection`] if the short name is unknown.
    pub fn parent_of(&self, short: &str) -> Result<Option<&str>, ZError> {
        self.entries
            .get(short)
            .map(|decl| decl.parent.as_deref())
            .ok_or_else(|| ZError::NoSuchSection(short.to_string()))
    }

    /// The composite form a short name was declared with.
    pub fn composite_of(&self, short: &str) -> Option<&str> {
        self.entries.get(short).map(|decl| decl.composite.as_str())
    }

    /// The full declaration record for a short name.
    pub fn get(&self, short: &str) -> Option<&SectionDecl> {
        self.entries.get(short)
    }

    /// All declared short names, in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// All declared composite forms, exactly as declared, in insertion order.
    pub fn composites(&self) -> impl Iterator<Item = &str> {
        self.entries.values().map(|decl| decl.composite.as_str())
    }

    /// Number of declarations.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
