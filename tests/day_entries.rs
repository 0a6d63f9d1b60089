use chrono::NaiveDate;
use egui::pos2;
use inkday::{DayEntry, Drawing, JournalStore, Stroke, WidgetExport};

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn sample_drawing() -> Drawing {
    let mut drawing = Drawing::new();
    drawing.add_stroke(Stroke::line(vec![pos2(10.0, 10.0), pos2(20.0, 20.0)]));
    drawing.add_stroke(Stroke::dot(pos2(50.0, 50.0)));
    drawing
}

#[test]
fn save_and_load_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let store = JournalStore::new(dir.path());
    let date = day(2026, 8, 30);

    let mut entry = DayEntry::new(date);
    entry.set_body("rained all day");
    entry.set_drawing(sample_drawing());
    store.save(&entry).unwrap();

    let loaded = store.load(date).unwrap().expect("entry should exist");
    assert_eq!(loaded, entry);
    assert_eq!(loaded.drawing(), sample_drawing());
}

#[test]
fn loading_an_unrecorded_day_yields_none() {
    let dir = tempfile::tempdir().unwrap();
    let store = JournalStore::new(dir.path());

    assert!(store.load(day(2026, 1, 1)).unwrap().is_none());
    assert!(!store.exists(day(2026, 1, 1)));
}

#[test]
fn empty_fields_are_cleared_not_stored() {
    let mut entry = DayEntry::new(day(2026, 8, 30));
    assert!(entry.is_empty());

    entry.set_body("   ");
    assert!(entry.body.is_none());

    entry.set_drawing(Drawing::new());
    assert!(entry.drawing.is_none());
    assert!(entry.is_empty());

    // Clearing the drawing after the fact drops the field again.
    entry.set_drawing(sample_drawing());
    assert!(!entry.is_empty());
    entry.set_drawing(Drawing::new());
    assert!(entry.is_empty());
}

#[test]
fn delete_removes_the_record() {
    let dir = tempfile::tempdir().unwrap();
    let store = JournalStore::new(dir.path());
    let date = day(2026, 8, 30);

    let mut entry = DayEntry::new(date);
    entry.set_body("to be deleted");
    store.save(&entry).unwrap();
    assert!(store.exists(date));

    store.delete(date).unwrap();
    assert!(!store.exists(date));
    assert!(store.load(date).unwrap().is_none());

    // Deleting again is harmless.
    store.delete(date).unwrap();
}

#[test]
fn dates_lists_recorded_days_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let store = JournalStore::new(dir.path());

    for date in [day(2026, 3, 5), day(2025, 12, 31), day(2026, 1, 1)] {
        let mut entry = DayEntry::new(date);
        entry.set_body("x");
        store.save(&entry).unwrap();
    }
    // Stray files in the store directory are ignored.
    std::fs::write(dir.path().join("notes.txt"), "not an entry").unwrap();

    assert_eq!(
        store.dates().unwrap(),
        vec![day(2025, 12, 31), day(2026, 1, 1), day(2026, 3, 5)]
    );
}

#[test]
fn widget_export_round_trips_drawing_bytes() {
    let dir = tempfile::tempdir().unwrap();
    let export = WidgetExport::new(dir.path());
    let date = day(2026, 8, 30);

    export.publish(date, &sample_drawing()).unwrap();
    let fetched = export.fetch(date).unwrap().expect("export should exist");
    assert_eq!(fetched, sample_drawing());

    // The latest slot holds the same bytes.
    assert!(dir.path().join("latest.json").exists());

    export.remove(date).unwrap();
    assert!(export.fetch(date).unwrap().is_none());
}

#[test]
fn widget_fetch_fails_open_on_corrupt_bytes() {
    let dir = tempfile::tempdir().unwrap();
    let export = WidgetExport::new(dir.path());
    let date = day(2026, 8, 30);

    std::fs::write(dir.path().join(format!("{date}.json")), b"garbage").unwrap();

    let fetched = export.fetch(date).unwrap().expect("file exists");
    assert!(fetched.is_empty());
}
