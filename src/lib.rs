//! Zini - INI-style configuration with single inheritance between sections
//!
//! Zini extends a flat section/option configuration model with single
//! inheritance, expressed by embedding a separator token in a section's
//! name: `[child : parent]` declares that looking up an option on `child`
//! falls back to `parent`, then to `parent`'s own parent, and so on, before
//! finally consulting the reserved `DEFAULT` section.
//!
//! Zini does not parse INI text itself. The underlying flat format (headers,
//! `key=value` lines, comments, encodings) is the concern of whatever
//! produced the [`store::FlatStore`] it is handed; the crate only resolves
//! names and walks inheritance chains over that store.
//!
//! # Architecture
//!
//! The codebase is layered leaves-first:
//!
//! - [`name`] - Splits composite section names on the configured separator
//! - [`zdict`] - Declaration registry: short name → parent link, duplicate-checked
//! - [`resolver`] - Expands a short name into its full ancestor chain, cycle-checked
//! - [`store`] - Flat store interface and the in-memory implementation
//! - [`config`] - Public façade: `get`, `has_section`, `has_option`, `sections`
//! - [`error`] - The four error kinds shared by all layers
//!
//! # Correctness Invariants
//!
//! 1. Each short name maps to exactly one declaration; a second declaration
//!    fails at insertion time, never later
//! 2. No short name appears twice in a resolved chain; cycles are detected
//!    during resolution, before any option content is consulted
//! 3. A broken parent link fails at its first occurrence in the chain, even
//!    when another path would have reached the queried option
//! 4. `DEFAULT` sits outside the inheritance graph: always the final
//!    fallback, never a chain member
//!
//! # Example
//!
//! ```
//! use zini::{MemoryStore, ZConfig};
//!
//! let mut store = MemoryStore::new();
//! store.add_section("aa : bb");
//! store.add_section("bb : cc");
//! store.add_section("cc");
//! store.set("cc", "x", "ccc");
//!
//! let config = ZConfig::new(store).unwrap();
//! assert_eq!(config.get("aa", "x").unwrap(), "ccc");
//! assert_eq!(config.resolved_chain("aa").unwrap(), vec!["aa", "bb", "cc"]);
//! ```

pub mod config;
pub mod error;
pub mod name;
pub mod resolver;
pub mod store;
pub mod zdict;

pub use config::ZConfig;
pub use error::ZError;
pub use name::NameCodec;
pub use resolver::ChainResolver;
pub use store::{FlatStore, MemoryStore, DEFAULT_SECTION};
pub use zdict::{SectionDecl, ZDict};
