use yew::prelude::*;

use crate::models::{format_currency, BudgetFigures};

#[derive(Properties, PartialEq)]
pub struct BudgetSummaryCardProps {
    /// Last complete set of figures received; `None` until a budget exists.
    pub figures: Option<BudgetFigures>,
}

/// Income, spending limit, and month-to-date spending for the current month,
/// with an alert that shows only while spending exceeds the limit.
#[function_component(BudgetSummaryCard)]
pub fn budget_summary_card(props: &BudgetSummaryCardProps) -> Html {
    html! {
        <section class="budget-summary-section">
            <h2>{"Budget Summary"}</h2>

            {match &props.figures {
                Some(figures) => html! {
                    <>
                        <p class="monthly-income">
                            {format!("Monthly income: {}", format_currency(figures.income))}
                        </p>
                        <p class="spending-limit">
                            {format!("Spending limit: {}", format_currency(figures.limit))}
                        </p>
                        <p class="total-spending">
                            {format!("Total spending: {}", format_currency(figures.total_spending))}
                        </p>

                        {if figures.over_limit() {
                            html! {
                                <div class="spending-alert">
                                    {"You have exceeded your spending limit!"}
                                </div>
                            }
                        } else { html! {} }}
                    </>
                },
                None => html! {
                    <p class="no-budget">{"No budget configured for this month yet."}</p>
                },
            }}
        </section>
    }
}
