use invs::{Config, Inventory, InvsError};
use tempfile::TempDir;

#[test]
fn save_then_load_round_trips() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("inventory.json");

    let mut inventory = Inventory::new();
    inventory.add("apple", 12).unwrap();
    inventory.add("banana", 15).unwrap();
    inventory.add("orange", 3).unwrap();
    inventory.save(&path).unwrap();

    let loaded = Inventory::load(&path);
    assert_eq!(loaded, inventory);
    assert_eq!(loaded.check_low_items(5), vec!["orange".to_string()]);
}

#[test]
fn ignored_failures_keep_legacy_behaviour() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("inventory.json");

    let mut inventory = Inventory::load(&path);
    assert!(inventory.is_empty());

    let _ = inventory.add("apple", 10);
    let _ = inventory.add("", 10);
    let _ = inventory.remove("grape", 1);
    assert_eq!(inventory.len(), 1);
    assert_eq!(inventory.get_qty("grape"), 0);
    assert_eq!(inventory.get("grape"), None);

    let _ = inventory.save(&path);
    assert_eq!(Inventory::load(&path).get_qty("apple"), 10);
}

#[test]
fn try_load_reports_what_load_recovers() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("inventory.json");
    assert!(matches!(Inventory::try_load(&path), Err(InvsError::Io(_))));

    std::fs::write(&path, "{oops").unwrap();
    assert!(matches!(Inventory::try_load(&path), Err(InvsError::Serde(_))));
}

#[test]
fn config_points_at_the_inventory() {
    let dir = TempDir::new().unwrap();
    let config = Config {
        path: dir.path().join("stock.json"),
        ..Config::default()
    };
    assert_eq!(config.threshold, 5);

    let inventory: Inventory = [("nails", 2), ("screws", 40)].into_iter().collect();
    inventory.save(&config.path).unwrap();
    assert_eq!(
        Inventory::load(&config.path).check_low_items(config.threshold),
        vec!["nails".to_string()]
    );
}
