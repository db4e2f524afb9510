use yew::prelude::*;

use crate::models::{format_currency, total_cost, ExpenseRecord};

#[derive(Properties, PartialEq)]
pub struct ExpenseListProps {
    /// Date the listed expenses belong to (ISO YYYY-MM-DD).
    pub date: String,
    pub expenses: Vec<ExpenseRecord>,
    pub loading: bool,
}

/// Expense list for the selected date plus the client-computed running
/// total. The list is always rendered from scratch off the latest fetch.
#[function_component(ExpenseList)]
pub fn expense_list(props: &ExpenseListProps) -> Html {
    let total = total_cost(&props.expenses);

    html! {
        <section class="expenses-section">
            <h2>{format!("Expenses on {}", props.date)}</h2>

            {if props.loading {
                html! { <div class="loading">{"Loading expenses..."}</div> }
            } else {
                html! {
                    <>
                        <ul class="expense-list">
                            {for props.expenses.iter().map(|expense| {
                                html! {
                                    <li>
                                        {format!("{} - {} ", expense.name, format_currency(expense.cost))}
                                        <strong>{format!("({})", expense.category)}</strong>
                                    </li>
                                }
                            })}
                        </ul>
                        <p class="total-expenses">
                            {format!("Total: {}", format_currency(total))}
                        </p>
                    </>
                }
            }}
        </section>
    }
}
