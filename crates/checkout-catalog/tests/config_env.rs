//! `CHECKOUT_CATALOG_PATH` handling. Kept in its own test binary because it
//! mutates the process environment.

use checkout_catalog::{CatalogConfig, CATALOG_PATH_ENV};
use checkout_core::{ItemCatalog, Money};

#[test]
fn environment_path_is_used_when_no_path_given() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.toml");
    std::fs::write(
        &path,
        r#"
        [[items]]
        name = "Bread"
        pricing = { kind = "unit", price_cents = 300 }
        "#,
    )
    .unwrap();

    std::env::set_var(CATALOG_PATH_ENV, &path);
    let from_env = CatalogConfig::load(None);

    // An explicit path still wins over the environment.
    let explicit = CatalogConfig::load(Some(dir.path().join("missing.toml")));
    std::env::remove_var(CATALOG_PATH_ENV);

    let catalog = from_env.unwrap().build().unwrap();
    assert_eq!(catalog.price_for("Bread", 2).unwrap(), Money::from_units(6));
    assert!(explicit.unwrap().items.is_empty());
}
