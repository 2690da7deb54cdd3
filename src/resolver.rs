//! Ancestor-chain resolution over the declaration registry.
//!
//! # Algorithm
//!
//! Iterative parent-walking with a visited-order list: start at the query
//! root's short name and repeatedly follow the declared parent reference,
//! reducing each reference to its own short name through the codec. No
//! recursion, so adversarial inputs cannot exhaust the call stack, and the
//! cycle check stays explicit.
//!
//! At each hop, structural validity is verified before content would ever
//! be consulted:
//!
//! 1. A parent short name already in the chain → [`ZError::RecursiveKey`]
//! 2. A blank or undeclared parent short name → [`ZError::NoSuchSection`],
//!    at the first broken link, regardless of other paths to a value
//!
//! Chains are recomputed on every query. Declarations are append-only
//! within one parse, but the same registry is queried with many roots, and
//! cycle detection bounds every walk by the number of declared sections.

use tracing::trace;

use crate::error::ZError;
use crate::name::NameCodec;
use crate::zdict::ZDict;

/// Resolves a short name into its ordered ancestor chain.
///
/// Borrows the registry and codec; construction is free, so a resolver is
/// typically created per query.
///
/// # Example
///
/// ```
/// use zini::{ChainResolver, NameCodec, ZDict};
///
/// let codec = NameCodec::default();
/// let mut dict = ZDict::new();
/// dict.insert("aa : bb", &codec).unwrap();
/// dict.insert("bb : cc", &codec).unwrap();
/// dict.insert("cc", &codec).unwrap();
///
/// let resolver = ChainResolver::new(&dict, &codec);
/// assert_eq!(resolver.resolve("aa").unwrap(), vec!["aa", "bb", "cc"]);
/// ```
#[derive(Debug)]
pub struct ChainResolver<'a> {
    dict: &'a ZDict,
    codec: &'a NameCodec,
}

impl<'a> ChainResolver<'a> {
    /// Create a resolver over a registry and codec.
    pub fn new(dict: &'a ZDict, codec: &'a NameCodec) -> Self {
        Self { dict, codec }
    }

    /// Resolve the ordered ancestor chain for a name.
    ///
    /// The name may itself be composite; only its short name matters.
    /// Returns `[root, parent(root), grandparent(root), ...]`, each short
    /// name exactly once, ending at the first declaration with no parent
    /// reference.
    ///
    /// # Errors
    ///
    /// - [`ZError::NoSuchSection`] if the root, or any parent link in the
    ///   chain, is blank or was never declared
    /// - [`ZError::RecursiveKey`] if a short name would be visited twice
    pub fn resolve(&self, name: &str) -> Result<Vec<String>, ZError> {
        let root = self.codec.short_name(name);
        if root.is_empty() || !self.dict.contains(root) {
            return Err(ZError::NoSuchSection(root.to_string()));
        }

        let mut chain: Vec<String> = Vec::new();
        let mut current = root.to_string();
        loop {
            chain.push(current.clone());

            // The chain member is always declared, so parent_of cannot fail.
            let parent_ref = match self.dict.parent_of(&current)? {
                None => {
                    trace!(root, ?chain, "resolved ancestor chain");
                    return Ok(chain);
                }
                Some(parent_ref) => parent_ref,
            };

            let parent = self.codec.short_name(parent_ref);
            if chain.iter().any(|seen| seen == parent) {
                trace!(root, parent, "cycle in parent links");
                return Err(ZError::RecursiveKey(parent.to_string()));
            }
            if parent.is_empty() || !self.dict.contains(parent) {
                trace!(root, parent = parent_ref, "broken parent link");
                return Err(ZError::NoSuchSection(parent.to_string()));
            }
            current = parent.to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(composites: &[&str], root: &str) -> Result<Vec<String>, ZError> {
        let codec = NameCodec::default();
        let mut dict = ZDict::new();
        for composite in composites {
            dict.insert(composite, &codec).unwrap();
        }
        ChainResolver::new(&dict, &codec).resolve(root)
    }

    #[test]
    fn single_section_resolves_to_itself() {
        assert_eq!(resolve(&["aa"], "aa").unwrap(), vec!["aa"]);
    }

    #[test]
    fn chain_walks_parents_in_order() {
        assert_eq!(
            resolve(&["aa : bb", "bb : cc", "cc"], "aa").unwrap(),
            vec!["aa", "bb", "cc"]
        );
        assert_eq!(
            resolve(&["aa : bb", "bb : cc", "cc"], "bb").unwrap(),
            vec!["bb", "cc"]
        );
    }

    #[test]
    fn composite_query_uses_its_short_name() {
        assert_eq!(
            resolve(&["aa : bb", "bb"], "aa : bb").unwrap(),
            vec!["aa", "bb"]
        );
    }

    #[test]
    fn undeclared_root_is_missing_section() {
        assert_eq!(
            resolve(&["aa : bb", "bb"], "ss").unwrap_err(),
            ZError::NoSuchSection("ss".into())
        );
    }

    #[test]
    fn undeclared_parent_breaks_at_first_link() {
        assert_eq!(
            resolve(&["aa : bb", "bb : cc", "cc : dd"], "aa").unwrap_err(),
            ZError::NoSuchSection("dd".into())
        );
    }

    #[test]
    fn blank_parent_is_missing_section() {
        assert_eq!(
            resolve(&["aa : "], "aa").unwrap_err(),
            ZError::NoSuchSection(String::new())
        );
    }

    #[test]
    fn blank_short_name_is_missing_section() {
        // "[ : aa]" declares nothing reachable: querying "aa" misses.
        assert_eq!(
            resolve(&[" : aa"], "aa").unwrap_err(),
            ZError::NoSuchSection("aa".into())
        );
    }

    #[test]
    fn self_cycle_detected() {
        assert_eq!(
            resolve(&["aa : aa"], "aa").unwrap_err(),
            ZError::RecursiveKey("aa".into())
        );
    }

    #[test]
    fn long_cycle_detected() {
        assert_eq!(
            resolve(&["aa : bb", "bb : cc", "cc : aa"], "aa").unwrap_err(),
            ZError::RecursiveKey("aa".into())
        );
        // The same cycle fires from any entry point.
        assert_eq!(
            resolve(&["aa : bb", "bb : cc", "cc : aa"], "bb").unwrap_err(),
            ZError::RecursiveKey("bb".into())
        );
    }

    #[test]
    fn cycle_checked_before_existence_of_links_beyond_it() {
        // cc points back to aa and nothing points at dd; the cycle is what
        // fires, not a missing section further along some other path.
        assert_eq!(
            resolve(&["aa : bb", "bb : cc", "cc : aa", "dd"], "aa").unwrap_err(),
            ZError::RecursiveKey("aa".into())
        );
    }

    #[test]
    fn multi_level_composite_reduces_parent_to_short_name() {
        // The parent reference "bb : cc" is a single link to bb; the tail
        // is carried by bb's own declaration, not by this reference.
        assert_eq!(
            resolve(&["aa : bb : cc", "bb : dd", "dd"], "aa").unwrap(),
            vec!["aa", "bb", "dd"]
        );
    }

    #[test]
    fn chain_recomputed_per_query() {
        let codec = NameCodec::default();
        let mut dict = ZDict::new();
        dict.insert("aa : bb", &codec).unwrap();
        let resolver = ChainResolver::new(&dict, &codec);
        assert!(resolver.resolve("aa").is_err());
        drop(resolver);

        // bb appears after the failed query; the next resolve sees it.
        dict.insert("bb", &codec).unwrap();
        let resolver = ChainResolver::new(&dict, &codec);
        assert_eq!(resolver.resolve("aa").unwrap(), vec!["aa", "bb"]);
    }
}
