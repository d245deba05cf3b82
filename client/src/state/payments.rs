//! Parent-side payment history state.
//!
//! Display only — no payment processing happens in this client; records
//! come from the in-memory fixtures.

#[cfg(test)]
#[path = "payments_test.rs"]
mod payments_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaymentStatus {
    Paid,
    Due,
}

impl PaymentStatus {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Paid => "Paid",
            Self::Due => "Due",
        }
    }
}

/// One line of the payment history.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PaymentRecord {
    pub id: String,
    /// Child the lesson block was booked for.
    pub child_name: String,
    /// e.g. `"4 × Algebra with R. Okafor"`.
    pub description: String,
    pub amount_cents: i64,
    /// Preformatted display date, e.g. `"Jul 28"`.
    pub when_label: String,
    pub status: PaymentStatus,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PaymentsState {
    pub items: Vec<PaymentRecord>,
}

/// Sum of settled payments.
#[must_use]
pub fn total_paid_cents(items: &[PaymentRecord]) -> i64 {
    items.iter().filter(|p| p.status == PaymentStatus::Paid).map(|p| p.amount_cents).sum()
}

/// Sum of outstanding payments.
#[must_use]
pub fn total_due_cents(items: &[PaymentRecord]) -> i64 {
    items.iter().filter(|p| p.status == PaymentStatus::Due).map(|p| p.amount_cents).sum()
}
