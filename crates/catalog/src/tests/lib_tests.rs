use super::*;
use chrono::NaiveDate;

fn record(id: &str, day: u32) -> EventDetail {
    EventDetail {
        id: EventId::new(id),
        title: format!("event {id}"),
        date: NaiveDate::from_ymd_opt(2025, 1, day).expect("date"),
        time: "09:00".into(),
        venue: "Hall".into(),
        short_description: "short".into(),
        full_description: "full".into(),
        organizer_name: "Org".into(),
        organizer_email: "org@example.com".into(),
        organizer_phone: None,
        map_placeholder: "map".into(),
    }
}

#[tokio::test]
async fn canonical_catalog_lists_in_insertion_order() {
    let catalog = Catalog::canonical();
    let summaries = catalog.list_summaries().await.expect("summaries");
    let ids: Vec<&str> = summaries.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, ["1", "2", "3", "4", "5"]);
}

#[tokio::test]
async fn every_detail_matches_its_summary() {
    let catalog = Catalog::canonical();
    let summaries = catalog.list_summaries().await.expect("summaries");
    for summary in summaries {
        let Lookup::Found(detail) = catalog.get_detail(&summary.id).await.expect("lookup") else {
            panic!("missing detail for {}", summary.id);
        };
        assert_eq!(detail.summary(), summary);
    }
}

#[tokio::test]
async fn unknown_ids_are_absent_not_errors() {
    let catalog = Catalog::canonical();
    for id in ["999", "", "  ", "1/../2", "🙂"] {
        let lookup = catalog
            .get_detail(&EventId::new(id))
            .await
            .expect("lookup never fails");
        assert_eq!(lookup, Lookup::Absent, "id {id:?}");
    }
}

#[tokio::test]
async fn repeated_queries_are_structurally_equal() {
    let catalog = Catalog::canonical();
    let first = catalog.list_summaries().await.expect("first");
    let second = catalog.list_summaries().await.expect("second");
    assert_eq!(first, second);

    let id = EventId::new("4");
    let a = catalog.get_detail(&id).await.expect("a");
    let b = catalog.get_detail(&id).await.expect("b");
    assert_eq!(a, b);
}

#[tokio::test]
async fn record_four_has_no_phone() {
    let catalog = Catalog::canonical();
    let detail = catalog
        .get_detail(&EventId::new("4"))
        .await
        .expect("lookup")
        .into_option()
        .expect("found");
    assert_eq!(detail.organizer_phone, None);
    assert_eq!(detail.organizer_email, "david.kumar@perftest.net");
}

#[test]
fn rejects_duplicate_ids() {
    let err = Catalog::new(vec![record("a", 1), record("b", 2), record("a", 3)])
        .expect_err("duplicate");
    assert!(matches!(err, CatalogError::DuplicateId(id) if id.as_str() == "a"));
}

#[test]
fn parses_json_fixture() {
    let raw = r#"[
        {
            "id": "x1",
            "title": "Fuzzing 101",
            "date": "2025-02-01",
            "time": "18:30",
            "venue": "Basement",
            "shortDescription": "Break things.",
            "fullDescription": "Break things on purpose.",
            "organizerName": "Grace",
            "organizerEmail": "grace@example.com",
            "mapPlaceholder": "Map of the basement"
        }
    ]"#;
    let catalog = Catalog::from_json_str(raw).expect("catalog");
    assert_eq!(catalog.len(), 1);
    let detail = catalog.find(&EventId::new("x1")).expect("record");
    assert_eq!(detail.title, "Fuzzing 101");
    assert_eq!(detail.organizer_phone, None);
}

#[test]
fn rejects_malformed_json() {
    let err = Catalog::from_json_str("{\"id\": 1}").expect_err("not an array");
    assert!(matches!(err, CatalogError::Parse(_)));
}

#[test]
fn missing_file_reports_path() {
    let err = Catalog::from_json_file("/definitely/not/here/events.json").expect_err("missing");
    assert!(err.to_string().contains("/definitely/not/here/events.json"));
}

#[test]
fn empty_catalog_is_empty() {
    assert!(Catalog::empty().is_empty());
    assert_eq!(Catalog::canonical().len(), 5);
}
