//! The same resolution semantics under the `"."` separator.
//!
//! Splitting is uniform across separators: the first component is always
//! the section's own name, so `aa.bb` under `"."` is token-for-token
//! interchangeable with `aa : bb` under `":"`.

use pretty_assertions::assert_eq;

use zini::{MemoryStore, NameCodec, ZConfig, ZError};

fn config(sections: &[(&str, &[(&str, &str)])]) -> Result<ZConfig<MemoryStore>, ZError> {
    let mut store = MemoryStore::new();
    for (name, options) in sections {
        store.add_section(*name);
        for (key, value) in *options {
            store.set(*name, *key, *value);
        }
    }
    ZConfig::from_store(store, NameCodec::new("."))
}

fn valid(sections: &[(&str, &[(&str, &str)])]) -> ZConfig<MemoryStore> {
    config(sections).expect("ingestion should succeed")
}

#[test]
fn get_falls_back_through_the_chain() {
    let conf = valid(&[("aa.bb", &[]), ("bb.cc", &[]), ("cc", &[("x", "ccc")])]);
    assert_eq!(conf.get("aa", "x").unwrap(), "ccc");
    assert_eq!(conf.get("aa.bb", "x").unwrap(), "ccc");
    assert_eq!(conf.resolved_chain("aa").unwrap(), vec!["aa", "bb", "cc"]);
}

#[test]
fn broken_link_beats_reachable_value() {
    let conf = valid(&[("aa.bb", &[]), ("bb.cc", &[]), ("cc.dd", &[("x", "ccc")])]);
    assert_eq!(
        conf.get("aa", "x").unwrap_err(),
        ZError::NoSuchSection("dd".into())
    );
}

#[test]
fn cycle_raises_recursive_key() {
    let conf = valid(&[("aa.bb", &[]), ("bb.cc", &[]), ("cc.aa", &[("x", "ccc")])]);
    assert_eq!(
        conf.get("aa", "x").unwrap_err(),
        ZError::RecursiveKey("aa".into())
    );
}

#[test]
fn duplicate_short_name_fails_ingestion() {
    let err = config(&[("aa.bb", &[]), ("aa.cc", &[("x", "aaa")])]).unwrap_err();
    assert_eq!(err, ZError::DuplicateKey("aa".into()));
}

#[test]
fn blank_components_fail_resolution() {
    let conf = valid(&[("aa.", &[("x", "aaa")])]);
    assert_eq!(
        conf.get("aa", "x").unwrap_err(),
        ZError::NoSuchSection(String::new())
    );

    let conf = valid(&[(".aa", &[("x", "aaa")])]);
    assert_eq!(
        conf.get("aa", "x").unwrap_err(),
        ZError::NoSuchSection("aa".into())
    );
}

#[test]
fn colon_is_an_ordinary_character_under_dot() {
    // "aa : bb" carries no dot, so it is one (odd) section name.
    let conf = valid(&[("aa : bb", &[("x", "aaa")])]);
    assert!(conf.has_section("aa : bb"));
    assert!(!conf.has_section("aa"));
    assert_eq!(conf.get("aa : bb", "x").unwrap(), "aaa");
}

#[test]
fn default_layer_behaves_identically() {
    let conf = valid(&[
        ("DEFAULT", &[("x", "ddd"), ("y", "ddd")]),
        ("aa.bb", &[("x", "aaa")]),
        ("bb", &[("x", "bbb")]),
    ]);
    assert_eq!(conf.get("aa", "y").unwrap(), "ddd");
    assert_eq!(conf.get("DEFAULT", "x").unwrap(), "ddd");
}

#[test]
fn dot_and_colon_configs_agree_on_equivalent_inputs() {
    let dotted = valid(&[("aa.bb", &[]), ("bb.cc", &[]), ("cc", &[("x", "ccc")])]);

    let mut store = MemoryStore::new();
    store.add_section("aa : bb");
    store.add_section("bb : cc");
    store.add_section("cc");
    store.set("cc", "x", "ccc");
    let colon = ZConfig::new(store).unwrap();

    assert_eq!(
        dotted.get("aa", "x").unwrap(),
        colon.get("aa", "x").unwrap()
    );
    assert_eq!(
        dotted.resolved_chain("aa").unwrap(),
        colon.resolved_chain("aa").unwrap()
    );
}
