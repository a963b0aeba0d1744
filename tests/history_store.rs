mod common;

use adgenius::history::{FileStorage, HistoryStore, MemoryStorage, Storage, DEGRADED_LIMIT, HISTORY_LIMIT, HISTORY_SLOT};
use adgenius::{CampaignRecord, Controller};
use common::{content, image, strategy};

fn record(ts: u64, slogan: &str) -> CampaignRecord {
    CampaignRecord::new(ts, &strategy(), &content(slogan), &[image("A"), image("B")])
}

#[test]
fn file_storage_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    {
        let mut store = HistoryStore::open(FileStorage::new(dir.path()));
        store.append(record(1_000, "first"));
        store.append(record(2_000, "second"));
    }
    assert!(dir.path().join(format!("{}.json", HISTORY_SLOT)).exists());

    let store = HistoryStore::open(FileStorage::new(dir.path()));
    let ids: Vec<&str> = store.records().iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, ["2000", "1000"]);
    assert_eq!(store.find("1000").unwrap().result.slogan, "first");
}

#[test]
fn corrupt_file_is_cleared_at_startup() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(format!("{}.json", HISTORY_SLOT));
    std::fs::write(&path, "[{\"id\": ").unwrap();

    let controller = Controller::new(FileStorage::new(dir.path()));
    assert!(controller.history().is_empty());
    assert!(!path.exists());
}

#[test]
fn oversized_write_degrades_to_three_records() {
    // Room for a few records but not five
    let one = serde_json::to_string(&vec![record(1, "campaign 1")]).unwrap().len();
    let mut store = HistoryStore::open(MemoryStorage::with_capacity(one * 4));
    for ts in 1..=4 {
        store.append(record(ts, &format!("campaign {}", ts)));
    }
    assert_eq!(store.len(), 4);

    store.append(record(5, "campaign 5"));
    assert_eq!(store.len(), DEGRADED_LIMIT);
    assert_eq!(store.records()[0].result.slogan, "campaign 5");

    // The slot still holds the last successful write
    let raw = store.storage().read(HISTORY_SLOT).unwrap().unwrap();
    let persisted: Vec<CampaignRecord> = serde_json::from_str(&raw).unwrap();
    assert_eq!(persisted.len(), 4);
}

#[test]
fn malformed_entries_are_dropped_individually() {
    let good = serde_json::to_value(record(7, "kept")).unwrap();
    let raw = serde_json::json!([good, {"id": "broken"}, 42]).to_string();
    let mut storage = MemoryStorage::new();
    storage.insert(HISTORY_SLOT, &raw);

    let store = HistoryStore::open(storage);
    assert_eq!(store.len(), 1);
    assert_eq!(store.records()[0].id, "7");
}

#[test]
fn oversized_slot_is_truncated_on_load() {
    let records: Vec<CampaignRecord> = (0..8).rev().map(|ts| record(ts, "r")).collect();
    let mut storage = MemoryStorage::new();
    storage.insert(HISTORY_SLOT, &serde_json::to_string(&records).unwrap());

    let store = HistoryStore::open(storage);
    assert_eq!(store.len(), HISTORY_LIMIT);
    assert_eq!(store.records()[0].id, "7");
}

#[test]
fn records_never_carry_image_bytes() {
    let mut s = strategy();
    s.product_image = Some(adgenius::ProductImage::from_bytes(b"photo-bytes"));
    let r = CampaignRecord::new(9, &s, &content("c"), &[image("A"), image("B"), image("C")]);
    let json = serde_json::to_string(&r).unwrap();
    assert!(json.contains("\"productImage\":\"(Image Stored)\""));
    assert_eq!(r.posters.len(), 2);
}
