use super::*;

fn record(amount_cents: i64, status: PaymentStatus) -> PaymentRecord {
    PaymentRecord {
        id: uuid::Uuid::new_v4().to_string(),
        child_name: "Noah".to_owned(),
        description: "4 × Algebra".to_owned(),
        amount_cents,
        when_label: "Jul 28".to_owned(),
        status,
    }
}

#[test]
fn totals_split_by_status() {
    let items = vec![
        record(4500, PaymentStatus::Paid),
        record(6000, PaymentStatus::Due),
        record(1500, PaymentStatus::Paid),
    ];
    assert_eq!(total_paid_cents(&items), 6000);
    assert_eq!(total_due_cents(&items), 6000);
}

#[test]
fn totals_on_empty_history_are_zero() {
    assert_eq!(total_paid_cents(&[]), 0);
    assert_eq!(total_due_cents(&[]), 0);
}

#[test]
fn status_labels() {
    assert_eq!(PaymentStatus::Paid.label(), "Paid");
    assert_eq!(PaymentStatus::Due.label(), "Due");
}
