use salary_split_core::{
    evaluate, BucketId, EngineInput, FieldStore, FieldUpdate, Frequency, MemoryAdapter,
};

#[test]
fn evaluate_combines_allocation_and_projection() {
    let mut store = FieldStore::load(MemoryAdapter::new());
    let rent = store.create().unwrap();
    let savings = store.create().unwrap();
    store.update_raw(&rent, "amount", "1,000");
    store.update_raw(&savings, "kind", "percent");
    store.update_raw(&savings, "amount", "20");

    let output = evaluate(&EngineInput {
        salary: 4000.0,
        buckets: store.buckets(),
        selected: Some(&savings),
        frequency: Frequency::parse(Some("monthly")),
    });

    assert_eq!(output.allocation.entries[0].value, 1000.0);
    assert_eq!(output.allocation.entries[1].value, 800.0);
    assert_eq!(output.allocation.personal, 2200.0);
    assert_eq!(output.projection.monthly, 800.0);
    assert_eq!(output.projection.yearly, 9600.0);
}

#[test]
fn evaluate_without_selection_or_frequency_projects_zero() {
    let mut store = FieldStore::load(MemoryAdapter::new());
    let id = store.create().unwrap();
    store.update(&id, FieldUpdate::Amount(100.0));

    let unselected = evaluate(&EngineInput {
        salary: 500.0,
        buckets: store.buckets(),
        selected: None,
        frequency: Frequency::Daily,
    });
    assert_eq!(unselected.projection.monthly, 0.0);
    assert_eq!(unselected.allocation.personal, 400.0);

    let unset = evaluate(&EngineInput {
        salary: 500.0,
        buckets: store.buckets(),
        selected: Some(&id),
        frequency: Frequency::parse(None),
    });
    assert_eq!(unset.projection.yearly, 0.0);
}

#[test]
fn deleting_selected_bucket_drops_projection_to_zero() {
    let mut store = FieldStore::load(MemoryAdapter::new());
    let id = store.create().unwrap();
    store.update(&id, FieldUpdate::Amount(10.0));
    let selected = BucketId::new(id.as_str());
    store.delete(&id);

    let output = evaluate(&EngineInput {
        salary: 100.0,
        buckets: store.buckets(),
        selected: Some(&selected),
        frequency: Frequency::Daily,
    });
    assert_eq!(output.projection.monthly, 0.0);
    assert_eq!(output.allocation.personal, 100.0);
}
