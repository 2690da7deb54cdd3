//! Flat store interface and the in-memory implementation.
//!
//! The flat store is the external collaborator that owns option content:
//! a mapping from declared section name to its options, plus the reserved
//! `DEFAULT` section. Producing it (INI tokenization, file I/O, encodings)
//! is out of scope here; the core only reads it through [`FlatStore`].
//!
//! The declaration registry and the flat store are deliberately two
//! separate ownership domains, connected only through section names, so
//! structural validity of inheritance is checked independently of content.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// The reserved default section, outside the inheritance graph.
///
/// Its values are visible to every section as the final fallback layer,
/// after the ancestor chain is exhausted. It is never itself subject to
/// chain resolution, cycle or duplicate checking.
pub const DEFAULT_SECTION: &str = "DEFAULT";

/// Read access to an already-parsed flat section/option store.
///
/// Section lookups are keyed by the name exactly as declared (the raw
/// header). Option keys are matched case-insensitively by convention;
/// implementations own that normalization.
pub trait FlatStore {
    /// Declared section names, in declaration order, exactly as declared.
    /// Does not include [`DEFAULT_SECTION`].
    fn section_names(&self) -> Vec<&str>;

    /// Whether a section was declared under exactly this name.
    fn section_exists(&self, name: &str) -> bool;

    /// The value of an option in a section, without any fallback.
    fn option_value(&self, name: &str, option: &str) -> Option<&str>;

    /// The value of an option in the reserved `DEFAULT` section.
    fn default_value(&self, option: &str) -> Option<&str>;
}

/// In-memory flat store.
///
/// Sections and options preserve declaration order. Option keys are
/// lower-cased on write and on lookup. Setting options on
/// [`DEFAULT_SECTION`] routes to the defaults layer.
///
/// Serde-serializable, so a store can be loaded from any format with a
/// mapping-of-mappings shape:
///
/// ```
/// use zini::{FlatStore, MemoryStore};
///
/// let store: MemoryStore = serde_json::from_str(
///     r#"{ "sections": { "aa : bb": { "x": "aaa" }, "bb": {} },
///          "defaults": { "y": "yyy" } }"#,
/// ).unwrap();
/// assert_eq!(store.option_value("aa : bb", "x"), Some("aaa"));
/// assert_eq!(store.default_value("y"), Some("yyy"));
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MemoryStore {
    /// Declared sections, keyed by raw header name, in declaration order.
    sections: IndexMap<String, IndexMap<String, String>>,
    /// The reserved `DEFAULT` section's options.
    #[serde(default)]
    defaults: IndexMap<String, String>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a section under its raw header name.
    ///
    /// Redeclaring the same raw name is a no-op at this layer; uniqueness
    /// of *short* names is the declaration registry's concern, enforced at
    /// ingestion. Declaring [`DEFAULT_SECTION`] is also a no-op: the
    /// defaults layer always exists.
    pub fn add_section(&mut self, name: impl Into<String>) {
        let name = name.into();
        if name == DEFAULT_SECTION {
            return;
        }
        self.sections.entry(name).or_default();
    }

    /// Set an option on a section, declaring the section if needed.
    ///
    /// The option key is lower-cased. Setting on [`DEFAULT_SECTION`]
    /// writes the defaults layer instead.
    pub fn set(
        &mut self,
        section: impl Into<String>,
        option: impl Into<String>,
        value: impl Into<String>,
    ) {
        let section = section.into();
        let option = option.into().to_lowercase();
        if section == DEFAULT_SECTION {
            self.defaults.insert(option, value.into());
        } else {
            self.sections
                .entry(section)
                .or_default()
                .insert(option, value.into());
        }
    }

    /// Number of declared sections, excluding `DEFAULT`.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Whether no section is declared.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

impl FlatStore for MemoryStore {
    fn section_names(&self) -> Vec<&str> {
        self.sections.keys().map(String::as_str).collect()
    }

    fn section_exists(&self, name: &str) -> bool {
        self.sections.contains_key(name)
    }

    fn option_value(&self, name: &str, option: &str) -> Option<&str> {
        self.sections
            .get(name)?
            .get(&option.to_lowercase())
            .map(String::as_str)
    }

    fn default_value(&self, option: &str) -> Option<&str> {
        self.defaults.get(&option.to_lowercase()).map(String::as_str)
    }
}
