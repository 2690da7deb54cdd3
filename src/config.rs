//! Public façade: option lookup with inheritance-chain fallback.
//!
//! # Lookup order
//!
//! A `get` on section `S` probes, in order:
//!
//! 1. `S` itself, then each ancestor in chain order (structural validity
//!    of the whole chain is verified first: cycles and broken links error
//!    out before any value is returned)
//! 2. the reserved `DEFAULT` section
//!
//! and fails with [`ZError::NoOption`] only after both layers miss.

use std::collections::HashSet;

use tracing::debug;

use crate::error::ZError;
use crate::name::NameCodec;
use crate::resolver::ChainResolver;
use crate::store::{FlatStore, DEFAULT_SECTION};
use crate::zdict::ZDict;

/// Configuration with single inheritance between sections.
///
/// Wraps a flat section/option store plus the registry of composite-name
/// declarations ingested from it. Construction runs ingestion once
/// (duplicate short names fail here); afterwards the value is immutable
/// and queries are read-only.
///
/// # Example
///
/// ```
/// use zini::{MemoryStore, ZConfig, ZError};
///
/// let mut store = MemoryStore::new();
/// store.add_section("aa : bb");
/// store.set("bb", "x", "bbb");
///
/// let config = ZConfig::new(store).unwrap();
/// assert_eq!(config.get("aa", "x").unwrap(), "bbb");
/// assert_eq!(config.get("aa : bb", "x").unwrap(), "bbb");
/// assert_eq!(
///     config.get("aa", "y").unwrap_err(),
///     ZError::NoOption { section: "aa".into(), option: "y".into() },
/// );
/// ```
#[derive(Debug, Clone)]
pub struct ZConfig<S: FlatStore> {
    store: S,
    codec: NameCodec,
    dict: ZDict,
}

impl<S: FlatStore> ZConfig<S> {
    /// Build a configuration with the conventional `":"` separator.
    ///
    /// # Errors
    ///
    /// Returns [`ZError::DuplicateKey`] if two declared sections share a
    /// short name.
    pub fn new(store: S) -> Result<Self, ZError> {
        Self::from_store(store, NameCodec::default())
    }

    /// Build a configuration with an explicit codec.
    ///
    /// Ingests every declared section name into the declaration registry,
    /// in declaration order.
    ///
    /// # Errors
    ///
    /// Returns [`ZError::DuplicateKey`] if two declared sections share a
    /// short name.
    pub fn from_store(store: S, codec: NameCodec) -> Result<Self, ZError> {
        let mut dict = ZDict::new();
        for name in store.section_names() {
            dict.insert(name, &codec)?;
        }
        debug!(
            sections = dict.len(),
            separator = codec.separator(),
            "ingested section declarations"
        );
        Ok(Self { store, codec, dict })
    }

    /// The effective value of an option on a section.
    ///
    /// `name` may be a short name or a full composite form; only its short
    /// name matters for resolution. Querying [`DEFAULT_SECTION`] answers
    /// from the defaults layer directly, with no chain walk.
    ///
    /// # Errors
    ///
    /// - [`ZError::NoSuchSection`] / [`ZError::RecursiveKey`] if the chain
    ///   is structurally broken, even when another path holds the value
    /// - [`ZError::NoOption`] if the valid chain plus `DEFAULT` misses
    pub fn get(&self, name: &str, option: &str) -> Result<String, ZError> {
        let short = self.codec.short_name(name);
        if short == DEFAULT_SECTION {
            return self
                .store
                .default_value(option)
                .map(str::to_string)
                .ok_or_else(|| ZError::NoOption {
                    section: short.to_string(),
                    option: option.to_string(),
                });
        }

        let chain = self.resolver().resolve(name)?;
        debug!(name, option, ?chain, "probing chain for option");
        for member in &chain {
            if let Some(declared) = self.dict.composite_of(member) {
                if self.store.section_exists(declared) {
                    if let Some(value) = self.store.option_value(declared, option) {
                        return Ok(value.to_string());
                    }
                }
            }
        }
        if let Some(value) = self.store.default_value(option) {
            return Ok(value.to_string());
        }
        Err(ZError::NoOption {
            section: short.to_string(),
            option: option.to_string(),
        })
    }

    /// Like [`get`](Self::get), but a missing option yields `fallback`.
    ///
    /// Only the [`ZError::NoOption`] outcome is replaced; structural
    /// errors still propagate.
    pub fn get_or(&self, name: &str, option: &str, fallback: &str) -> Result<String, ZError> {
        match self.get(name, option) {
            Err(ZError::NoOption { .. }) => Ok(fallback.to_string()),
            other => other,
        }
    }

    /// Whether a name's short name is a declared section.
    ///
    /// A membership test only: the section's chain is not resolved, so
    /// this can be true for a section whose parents are broken.
    /// [`DEFAULT_SECTION`] is not a section.
    pub fn has_section(&self, name: &str) -> bool {
        self.dict.contains(self.codec.short_name(name))
    }

    /// Whether an option is reachable from a section through its chain or
    /// the defaults layer.
    ///
    /// An undeclared root and a content miss after a valid walk are both
    /// `Ok(false)`; a malformed graph is not silently absorbed.
    ///
    /// # Errors
    ///
    /// [`ZError::NoSuchSection`] / [`ZError::RecursiveKey`] for a broken
    /// or cyclic chain behind a declared root.
    pub fn has_option(&self, name: &str, option: &str) -> Result<bool, ZError> {
        let short = self.codec.short_name(name);
        if short != DEFAULT_SECTION && !self.dict.contains(short) {
            return Ok(false);
        }
        match self.get(name, option) {
            Ok(_) => Ok(true),
            Err(ZError::NoOption { .. }) => Ok(false),
            Err(err) => Err(err),
        }
    }

    /// Every declared composite name, exactly as declared.
    ///
    /// A raw enumeration of the declaration registry: no cycle or
    /// existence checking runs, so this legitimately reports names whose
    /// resolution would fail.
    pub fn sections(&self) -> HashSet<String> {
        self.dict.composites().map(str::to_string).collect()
    }

    /// Diagnostic accessor: the fully resolved ancestor chain of a name,
    /// as short names.
    ///
    /// # Errors
    ///
    /// Same structural errors as [`get`](Self::get).
    pub fn resolved_chain(&self, name: &str) -> Result<Vec<String>, ZError> {
        self.resolver().resolve(name)
    }

    /// The underlying flat store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// The codec this configuration splits names with.
    pub fn codec(&self) -> &NameCodec {
        &self.codec
    }

    fn resolver(&self) -> ChainResolver<'_> {
        ChainResolver::new(&self.dict, &self.codec)
    }
}
