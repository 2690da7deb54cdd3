//! Composite section name splitting and joining.
//!
//! A composite section name embeds at most one inheritance link:
//! `child : parent` under the default `":"` separator, `child.parent` under
//! `"."`. The codec splits on the first occurrence of the separator and
//! trims both parts; everything after the first separator is the parent
//! reference as a whole (a reference like `bb : cc` is itself reduced to its
//! own short name `bb` when the chain is walked: single inheritance, never
//! multiple parents).
//!
//! The codec never rejects a name. Blank components come back as empty
//! strings and are treated downstream as "no such section", so malformed
//! headers fail at resolution time with a precise error instead of here.

/// Splits and joins composite section names on a configurable separator.
///
/// # Example
///
/// ```
/// use zini::NameCodec;
///
/// let codec = NameCodec::default();
/// assert_eq!(codec.split("aa : bb"), ("aa", Some("bb")));
/// assert_eq!(codec.split("aa"), ("aa", None));
///
/// let dotted = NameCodec::new(".");
/// assert_eq!(dotted.split("aa.bb"), ("aa", Some("bb")));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameCodec {
    separator: String,
}

impl Default for NameCodec {
    /// The conventional separator, `":"`.
    fn default() -> Self {
        Self::new(":")
    }
}

impl NameCodec {
    /// Create a codec for the given separator token.
    ///
    /// Any non-empty token works; an empty token means no name ever splits,
    /// so every composite name is its own short name.
    pub fn new(separator: impl Into<String>) -> Self {
        Self {
            separator: separator.into(),
        }
    }

    /// The separator token.
    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// Split a composite name into `(short_name, parent_reference)`.
    ///
    /// Splits on the first occurrence of the separator and trims both
    /// parts. Without a separator the parent is `None`. A blank component
    /// is returned as an empty string, not an error.
    ///
    /// # Example
    ///
    /// ```
    /// use zini::NameCodec;
    ///
    /// let codec = NameCodec::default();
    /// assert_eq!(codec.split("  aa  "), ("aa", None));
    /// assert_eq!(codec.split("aa : bb : cc"), ("aa", Some("bb : cc")));
    /// assert_eq!(codec.split("aa : "), ("aa", Some("")));
    /// assert_eq!(codec.split(" : bb"), ("", Some("bb")));
    /// ```
    pub fn split<'a>(&self, composite: &'a str) -> (&'a str, Option<&'a str>) {
        if self.separator.is_empty() {
            return (composite.trim(), None);
        }
        match composite.split_once(&self.separator) {
            Some((short, parent)) => (short.trim(), Some(parent.trim())),
            None => (composite.trim(), None),
        }
    }

    /// The short name of a composite: the trimmed part before the first
    /// separator. Empty if the component is blank.
    pub fn short_name<'a>(&self, composite: &'a str) -> &'a str {
        self.split(composite).0
    }

    /// Join a short name and a parent reference back into a composite form.
    ///
    /// Round-trip/debug helper; resolution never needs it.
    ///
    /// # Example
    ///
    /// ```
    /// use zini::NameCodec;
    ///
    /// let codec = NameCodec::default();
    /// assert_eq!(codec.join("aa", Some("bb")), "aa : bb");
    /// assert_eq!(codec.join("aa", None), "aa");
    /// ```
    pub fn join(&self, short: &str, parent: Option<&str>) -> String {
        match parent {
            Some(parent) => format!("{short} {} {parent}", self.separator),
            None => short.to_string(),
        }
    }
}
