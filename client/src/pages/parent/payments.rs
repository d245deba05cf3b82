//! Parent payments — history list and totals. Display only; settling a
//! payment happens outside this client.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::empty_state::EmptyState;
use crate::components::page_header::PageHeader;
use crate::components::payment_row::PaymentRow;
use crate::components::stat_tile::StatTile;
use crate::nav::GraphKind;
use crate::state::auth::SessionState;
use crate::state::payments::{self, PaymentsState};
use crate::util::auth::install_graph_guard;
use crate::util::format;

#[component]
pub fn ParentPaymentsPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<SessionState>>();
    let payments_state = expect_context::<RwSignal<PaymentsState>>();
    let navigate = use_navigate();
    install_graph_guard(auth, GraphKind::Parent, navigate);

    let paid = move || format::money(payments::total_paid_cents(&payments_state.get().items));
    let due = move || format::money(payments::total_due_cents(&payments_state.get().items));
    let items = move || payments_state.get().items;

    view! {
        <div class="screen parent-payments">
            <PageHeader title="Payments"/>
            <div class="stat-row">
                <StatTile label="Paid to date" value=paid()/>
                <StatTile label="Outstanding" value=due()/>
            </div>
            <Show
                when=move || !items().is_empty()
                fallback=move || view! { <EmptyState message="No payments yet."/> }
            >
                <div class="screen__list">
                    {move || {
                        items()
                            .into_iter()
                            .map(|record| view! { <PaymentRow record=record/> })
                            .collect::<Vec<_>>()
                    }}
                </div>
            </Show>
        </div>
    }
}
