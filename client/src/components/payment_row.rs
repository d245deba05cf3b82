//! Payment history row for the parent's Payments screen.

use leptos::prelude::*;

use crate::state::payments::{PaymentRecord, PaymentStatus};
use crate::util::format;

#[component]
pub fn PaymentRow(record: PaymentRecord) -> impl IntoView {
    let status_class = match record.status {
        PaymentStatus::Paid => "payment-row__status payment-row__status--paid",
        PaymentStatus::Due => "payment-row__status payment-row__status--due",
    };
    view! {
        <div class="payment-row">
            <div class="payment-row__main">
                <span class="payment-row__description">{record.description}</span>
                <span class="payment-row__child">{record.child_name}</span>
            </div>
            <div class="payment-row__meta">
                <span class="payment-row__when">{record.when_label}</span>
                <span class="payment-row__amount">{format::money(record.amount_cents)}</span>
                <span class=status_class>{record.status.label()}</span>
            </div>
        </div>
    }
}
