use salary_split_core::{
    calculate, project, project_selection, Bucket, BucketId, BucketKind, Frequency, Projection,
};

#[test]
fn frequency_multipliers_match_payment_cadence() {
    let cases = [
        (Frequency::Daily, 3000.0, 36000.0),
        (Frequency::Weekly, 400.0, 4800.0),
        (Frequency::Monthly, 100.0, 1200.0),
        (Frequency::Unset, 0.0, 0.0),
    ];
    for (frequency, monthly, yearly) in cases {
        assert_eq!(
            project(100.0, frequency),
            Projection { monthly, yearly },
            "frequency {frequency:?}"
        );
    }
}

#[test]
fn yearly_is_always_twelve_months() {
    for frequency in [Frequency::Daily, Frequency::Weekly, Frequency::Monthly] {
        let projection = project(37.25, frequency);
        assert_eq!(projection.yearly, projection.monthly * 12.0);
    }
}

#[test]
fn selection_uses_computed_bucket_value() {
    let mut savings = Bucket::new(BucketId::new("savings"), "Savings", "#0088FE");
    savings.kind = BucketKind::Percent;
    savings.amount = 10.0;
    let buckets = vec![savings];
    let allocation = calculate(1000.0, &buckets);

    let projection = project_selection(&allocation, Some(&BucketId::new("savings")), Frequency::Weekly);
    assert_eq!(projection.monthly, 400.0);
    assert_eq!(projection.yearly, 4800.0);
}

#[test]
fn missing_selection_projects_zero() {
    let buckets = vec![Bucket::new(BucketId::new("a"), "A", "#0088FE")];
    let allocation = calculate(1000.0, &buckets);

    assert_eq!(
        project_selection(&allocation, None, Frequency::Daily),
        Projection::default()
    );
    assert_eq!(
        project_selection(&allocation, Some(&BucketId::new("deleted")), Frequency::Daily),
        Projection::default()
    );
}

#[test]
fn projection_is_idempotent() {
    assert_eq!(
        project(12.5, Frequency::Daily),
        project(12.5, Frequency::Daily)
    );
}
