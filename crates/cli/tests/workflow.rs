//! Whole-system flow: seed, register, login, update, export.

use chrono::{TimeZone, Utc};

use toolcrib_core::DataPaths;
use toolcrib_credentials::CredentialStore;
use toolcrib_inventory::InventoryStore;
use toolcrib_report::ReportGenerator;

#[test]
fn register_login_update_and_export() {
    let dir = tempfile::tempdir().unwrap();
    let paths = DataPaths::new(dir.path());

    let credentials = CredentialStore::open(&paths);
    let inventory = InventoryStore::open(&paths);

    assert!(credentials.initialize().unwrap());
    assert!(inventory.seed_default().unwrap());

    credentials
        .register("Asha Perera", "Colombo", "asha", "secret")
        .unwrap();
    let account = credentials.login("asha", "secret").unwrap();
    assert_eq!(account.teacher_name, "Asha Perera");

    // Catalog order before the update, to check it survives.
    let names_before: Vec<String> = inventory
        .list()
        .unwrap()
        .into_iter()
        .map(|(name, _)| name)
        .collect();

    let outcome = inventory
        .update("Hand saw/Bow saw", "5", "3", "2", "two blades snapped")
        .unwrap();
    let regression = outcome.regression.expect("0 -> 2 is an increase");
    assert_eq!(regression.previous, 0);
    assert_eq!(regression.current, 2);

    let records = inventory.list().unwrap();
    let names_after: Vec<String> = records.iter().map(|(name, _)| name.clone()).collect();
    assert_eq!(names_before, names_after);

    let (_, saw) = records
        .iter()
        .find(|(name, _)| name == "Hand saw/Bow saw")
        .unwrap();
    assert_eq!(saw.quantity_in_hand, 5);
    assert_eq!(saw.number_working, 3);
    assert_eq!(saw.number_not_working, 2);
    assert_eq!(saw.reason, "two blades snapped");

    let generated_at = Utc.with_ymd_and_hms(2026, 8, 24, 12, 0, 0).unwrap();
    let artifact = ReportGenerator::open(&paths)
        .generate(&account.teacher_name, &records, generated_at)
        .unwrap();

    assert_eq!(
        artifact.path.file_name().unwrap(),
        "inventory_report_20260824_120000.txt"
    );
    assert_eq!(artifact.totals.components, records.len());
    assert_eq!(artifact.totals.quantity, 5);
    assert_eq!(artifact.totals.working, 3);
    assert_eq!(artifact.totals.not_working, 2);

    let text = std::fs::read_to_string(&artifact.path).unwrap();
    assert!(text.contains("Generated By:   Asha Perera"));
    assert!(text.contains("Total Not Working: 2"));
}
