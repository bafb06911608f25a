//! Ordered list of transactions for the dashboard.

use leptos::prelude::*;

use crate::net::types::Transaction;
use crate::state::transactions::format_amount;

/// Renders transactions in the order the backend returned them.
#[component]
pub fn TransactionList(items: Vec<Transaction>) -> impl IntoView {
    view! {
        <ul class="transaction-list">
            {items
                .into_iter()
                .map(|Transaction { id, description, amount }| {
                    let amount_class = if amount < 0.0 {
                        "transaction-list__amount transaction-list__amount--debit"
                    } else {
                        "transaction-list__amount"
                    };
                    view! {
                        <li class="transaction-list__item" data-id=id>
                            <span class="transaction-list__description">{description}</span>
                            " - "
                            <span class=amount_class>{format_amount(amount)}</span>
                        </li>
                    }
                })
                .collect::<Vec<_>>()}
        </ul>
    }
}
