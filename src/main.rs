use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

mod components;
mod models;
mod services;

use components::forms::{BudgetForm, CategoryForm, ExpenseForm};
use components::{BudgetSummaryCard, DismissGuard, ExpenseList, Flash, FlashMessage, ReportChart};
use models::{BudgetFigures, BudgetSummary, ExpenseRecord, MonthlyReport};
use services::date_utils::{self, month_name};
use services::{ApiClient, ApiError, Logger};

const FLASH_DISMISS_MS: u32 = 4000;

/// What a finished expense fetch does to the view: a successful response
/// replaces the rendered list, a failed one keeps it and surfaces a
/// generic notice.
fn apply_expense_fetch(
    fetched: Result<Vec<ExpenseRecord>, ApiError>,
) -> (Option<Vec<ExpenseRecord>>, Option<FlashMessage>) {
    match fetched {
        Ok(records) => (Some(records), None),
        Err(_) => (
            None,
            Some(FlashMessage::error(
                "Could not load expenses. Please try again.",
            )),
        ),
    }
}

/// Same for a budget fetch. A payload missing income or the spending
/// percentage updates nothing and is not an error; only transport and
/// decode failures surface a notice.
fn apply_budget_fetch(
    fetched: Result<BudgetSummary, ApiError>,
) -> (Option<BudgetFigures>, Option<FlashMessage>) {
    match fetched {
        Ok(summary) => (summary.figures(), None),
        Err(_) => (
            None,
            Some(FlashMessage::error(
                "Could not load the budget summary. Please try again.",
            )),
        ),
    }
}

#[function_component(App)]
fn app() -> Html {
    // The one piece of client state that drives fetching: the selected date.
    let selected_date = use_state(date_utils::current_date);

    let expenses = use_state(Vec::<ExpenseRecord>::new);
    let expenses_loading = use_state(|| true);
    let budget_figures = use_state(|| Option::<BudgetFigures>::None);
    let report = use_state(|| Option::<MonthlyReport>::None);
    let report_month = use_state(String::new);
    let report_year = use_state(String::new);
    let flash = use_state(|| Option::<FlashMessage>::None);

    let dismiss_guard = use_mut_ref(DismissGuard::default);

    let show_flash = {
        let flash = flash.clone();
        let dismiss_guard = dismiss_guard.clone();
        Callback::from(move |message: FlashMessage| {
            let seq = dismiss_guard.borrow_mut().shown();
            flash.set(Some(message));

            let flash = flash.clone();
            let dismiss_guard = dismiss_guard.clone();
            spawn_local(async move {
                gloo::timers::future::TimeoutFuture::new(FLASH_DISMISS_MS).await;
                // A timer may only clear the message it was started for.
                if dismiss_guard.borrow().may_dismiss(seq) {
                    flash.set(None);
                }
            });
        })
    };

    // Re-fetch the expense list and the budget summary for whatever date is
    // currently selected. The list is replaced wholesale; rapid date changes
    // race and the last response wins.
    let refresh = {
        let selected_date = selected_date.clone();
        let expenses = expenses.clone();
        let expenses_loading = expenses_loading.clone();
        let budget_figures = budget_figures.clone();
        let show_flash = show_flash.clone();

        Callback::from(move |_| {
            let date = (*selected_date).clone();
            let expenses = expenses.clone();
            let expenses_loading = expenses_loading.clone();
            let budget_figures = budget_figures.clone();
            let show_flash = show_flash.clone();

            spawn_local(async move {
                let api = ApiClient::new();

                expenses_loading.set(true);
                let fetched = api.get_expenses(&date).await;
                if let Err(e) = &fetched {
                    Logger::error("app", &format!("failed to fetch expenses: {}", e));
                }
                // A failed fetch keeps the previously rendered list.
                let (records, notice) = apply_expense_fetch(fetched);
                if let Some(records) = records {
                    expenses.set(records);
                }
                if let Some(notice) = notice {
                    show_flash.emit(notice);
                }
                expenses_loading.set(false);

                match date_utils::month_and_year(&date) {
                    Some((month, year)) => {
                        let fetched = api.get_budget(month, year).await;
                        if let Err(e) = &fetched {
                            Logger::error("app", &format!("failed to fetch budget: {}", e));
                        }
                        let (figures, notice) = apply_budget_fetch(fetched);
                        if let Some(figures) = figures {
                            budget_figures.set(Some(figures));
                        }
                        if let Some(notice) = notice {
                            show_flash.emit(notice);
                        }
                    }
                    None => {
                        Logger::warn("app", &format!("selected date did not parse: {}", date));
                    }
                }
            });
        })
    };

    // Initial load, and every change of the selected date.
    use_effect_with(selected_date.clone(), {
        let refresh = refresh.clone();
        move |_| {
            refresh.emit(());
            || ()
        }
    });

    let on_date_change = {
        let selected_date = selected_date.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            selected_date.set(input.value());
        })
    };

    // The budget form names its own month/year; refresh the summary for that
    // pair rather than the selected date's.
    let on_budget_set = {
        let budget_figures = budget_figures.clone();
        let show_flash = show_flash.clone();
        Callback::from(move |(month, year): (u32, i32)| {
            let budget_figures = budget_figures.clone();
            let show_flash = show_flash.clone();
            spawn_local(async move {
                let fetched = ApiClient::new().get_budget(month, year).await;
                if let Err(e) = &fetched {
                    Logger::error("app", &format!("failed to fetch budget: {}", e));
                }
                let (figures, notice) = apply_budget_fetch(fetched);
                if let Some(figures) = figures {
                    budget_figures.set(Some(figures));
                }
                if let Some(notice) = notice {
                    show_flash.emit(notice);
                }
            });
        })
    };

    let on_report_month_change = {
        let report_month = report_month.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            report_month.set(select.value());
        })
    };

    let on_report_year_change = {
        let report_year = report_year.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            report_year.set(input.value());
        })
    };

    let generate_report = {
        let report_month = report_month.clone();
        let report_year = report_year.clone();
        let report = report.clone();
        let show_flash = show_flash.clone();

        Callback::from(move |_: MouseEvent| {
            let month = (*report_month).clone();
            let year = (*report_year).clone();

            // Year is mandatory; nothing is sent without one.
            if year.trim().is_empty() {
                show_flash.emit(FlashMessage::error("Please enter a valid year."));
                return;
            }

            let report = report.clone();
            let show_flash = show_flash.clone();

            spawn_local(async move {
                match ApiClient::new().monthly_report(&month, &year).await {
                    Ok(data) if data.is_empty() => {
                        show_flash.emit(FlashMessage::error("No expenses found for this month."));
                    }
                    Ok(data) => report.set(Some(data)),
                    Err(e) => {
                        Logger::error("app", &format!("failed to fetch monthly report: {}", e));
                        show_flash.emit(FlashMessage::error(
                            "Could not load the monthly report. Please try again.",
                        ));
                    }
                }
            });
        })
    };

    html! {
        <>
            <header class="header">
                <div class="container">
                    <h1>{"Expense Tracker"}</h1>
                </div>
            </header>

            <main class="main">
                <div class="container">
                    <Flash message={(*flash).clone()} />

                    <section class="date-section">
                        <label for="selected-date">{"Showing expenses for"}</label>
                        <input
                            type="date"
                            id="selected-date"
                            value={(*selected_date).clone()}
                            onchange={on_date_change}
                        />
                    </section>

                    <ExpenseList
                        date={(*selected_date).clone()}
                        expenses={(*expenses).clone()}
                        loading={*expenses_loading}
                    />

                    <BudgetSummaryCard figures={*budget_figures} />

                    <ExpenseForm
                        selected_date={(*selected_date).clone()}
                        on_flash={show_flash.clone()}
                        on_expense_added={refresh.clone()}
                    />

                    <CategoryForm on_flash={show_flash.clone()} />

                    <BudgetForm
                        on_flash={show_flash.clone()}
                        on_budget_set={on_budget_set}
                    />

                    <section class="report-section">
                        <h2>{"Monthly Report"}</h2>

                        <div class="report-controls">
                            <select class="month-selector" onchange={on_report_month_change}>
                                <option value="" selected={report_month.is_empty()}>
                                    {"All months"}
                                </option>
                                {for (1..=12u32).map(|m| {
                                    let value = format!("{:02}", m);
                                    html! {
                                        <option value={value.clone()} selected={*report_month == value}>
                                            {month_name(m)}
                                        </option>
                                    }
                                })}
                            </select>

                            <input
                                type="number"
                                class="year-selector"
                                placeholder="Year"
                                value={(*report_year).clone()}
                                onchange={on_report_year_change}
                            />

                            <button class="btn btn-secondary" onclick={generate_report}>
                                {"Generate Report"}
                            </button>
                        </div>

                        {if let Some(data) = (*report).clone() {
                            html! { <ReportChart report={data} /> }
                        } else { html! {} }}
                    </section>
                </div>
            </main>
        </>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::FlashLevel;

    #[test]
    fn failed_expense_fetch_keeps_list_and_notifies() {
        let (records, notice) =
            apply_expense_fetch(Err(ApiError::Network("connection refused".to_string())));
        assert_eq!(records, None);
        let notice = notice.expect("a failed fetch must surface a notice");
        assert_eq!(notice.level, FlashLevel::Error);
    }

    #[test]
    fn successful_expense_fetch_replaces_list_silently() {
        let fetched = vec![ExpenseRecord {
            name: "Coffee".to_string(),
            cost: 10.5,
            category: "Food".to_string(),
        }];
        let (records, notice) = apply_expense_fetch(Ok(fetched.clone()));
        assert_eq!(records, Some(fetched));
        assert_eq!(notice, None);
    }

    #[test]
    fn budget_fetch_updates_only_on_complete_payloads() {
        let full = BudgetSummary {
            income: Some(1000.0),
            spending_percentage: Some(50.0),
            total_spending: Some(600.0),
        };
        let (figures, notice) = apply_budget_fetch(Ok(full));
        assert_eq!(figures.map(|f| f.limit), Some(500.0));
        assert_eq!(notice, None);

        // No budget configured: nothing to render, nothing to report.
        let (figures, notice) = apply_budget_fetch(Ok(BudgetSummary::default()));
        assert_eq!(figures, None);
        assert_eq!(notice, None);
    }

    #[test]
    fn failed_budget_fetch_notifies_and_keeps_figures() {
        let (figures, notice) =
            apply_budget_fetch(Err(ApiError::Decode("unexpected body".to_string())));
        assert_eq!(figures, None);
        let notice = notice.expect("a failed fetch must surface a notice");
        assert_eq!(notice.level, FlashLevel::Error);
    }
}
