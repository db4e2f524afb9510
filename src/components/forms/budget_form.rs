use web_sys::{FormData, HtmlFormElement};
use yew::prelude::*;

use crate::components::FlashMessage;
use crate::services::date_utils::month_name;
use crate::services::{ApiClient, ApiError, Logger};

#[derive(Properties, PartialEq)]
pub struct BudgetFormProps {
    pub on_flash: Callback<FlashMessage>,
    /// Fired with the (month, year) the user configured, so the summary can
    /// be refreshed for that month rather than the selected date's.
    pub on_budget_set: Callback<(u32, i32)>,
}

/// The (month, year) pair named in the submitted budget form.
fn parse_month_year(month: &str, year: &str) -> Option<(u32, i32)> {
    let month = month.trim().parse::<u32>().ok().filter(|m| (1..=12).contains(m))?;
    let year = year.trim().parse::<i32>().ok()?;
    Some((month, year))
}

/// Form posting income and spending percentage for one month to
/// `/set_budget`.
#[function_component(BudgetForm)]
pub fn budget_form(props: &BudgetFormProps) -> Html {
    let submitting = use_state(|| false);

    let onsubmit = {
        let on_flash = props.on_flash.clone();
        let on_budget_set = props.on_budget_set.clone();
        let submitting = submitting.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let form: HtmlFormElement = e.target_unchecked_into();
            let form_data = match FormData::new_with_form(&form) {
                Ok(data) => data,
                Err(_) => {
                    Logger::error("budget_form", "could not read form data");
                    return;
                }
            };

            let month = form_data.get("month").as_string().unwrap_or_default();
            let year = form_data.get("year").as_string().unwrap_or_default();
            let income = form_data.get("income").as_string().unwrap_or_default();
            if year.trim().is_empty() || income.trim().is_empty() {
                on_flash.emit(FlashMessage::error("Please fill in a year and an income."));
                return;
            }

            let on_flash = on_flash.clone();
            let on_budget_set = on_budget_set.clone();
            let submitting = submitting.clone();
            submitting.set(true);

            wasm_bindgen_futures::spawn_local(async move {
                match ApiClient::new().set_budget(form_data).await {
                    Ok(message) => {
                        form.reset();
                        on_flash.emit(FlashMessage::success(message));
                        match parse_month_year(&month, &year) {
                            Some(pair) => on_budget_set.emit(pair),
                            None => Logger::warn(
                                "budget_form",
                                "submitted month/year did not parse, skipping summary refresh",
                            ),
                        }
                    }
                    Err(ApiError::Backend(message)) => {
                        on_flash.emit(FlashMessage::error(message));
                    }
                    Err(e) => {
                        Logger::error("budget_form", &e.to_string());
                        on_flash.emit(FlashMessage::error(
                            "Could not save the budget. Please try again.",
                        ));
                    }
                }
                submitting.set(false);
            });
        })
    };

    html! {
        <section class="set-budget-section">
            <h2>{"Set Budget"}</h2>

            <form class="budget-form" onsubmit={onsubmit}>
                <div class="form-group">
                    <label for="budget-month">{"Month"}</label>
                    <select id="budget-month" name="month" disabled={*submitting}>
                        {for (1..=12u32).map(|m| {
                            html! { <option value={m.to_string()}>{month_name(m)}</option> }
                        })}
                    </select>
                </div>

                <div class="form-group">
                    <label for="budget-year">{"Year"}</label>
                    <input
                        type="number"
                        id="budget-year"
                        name="year"
                        placeholder="2025"
                        disabled={*submitting}
                    />
                </div>

                <div class="form-group">
                    <label for="budget-income">{"Monthly income"}</label>
                    <input
                        type="number"
                        id="budget-income"
                        name="income"
                        placeholder="50000"
                        step="0.01"
                        min="0"
                        disabled={*submitting}
                    />
                </div>

                <div class="form-group">
                    <label for="budget-percentage">{"Spending limit (% of income)"}</label>
                    <input
                        type="number"
                        id="budget-percentage"
                        name="spendingPercentage"
                        placeholder="50"
                        min="0"
                        max="100"
                        disabled={*submitting}
                    />
                </div>

                <button type="submit" class="btn btn-primary" disabled={*submitting}>
                    {if *submitting { "Saving..." } else { "Set Budget" }}
                </button>
            </form>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_year_parses_padded_and_unpadded() {
        assert_eq!(parse_month_year("3", "2025"), Some((3, 2025)));
        assert_eq!(parse_month_year("03", "2025"), Some((3, 2025)));
        assert_eq!(parse_month_year("12", "1999"), Some((12, 1999)));
    }

    #[test]
    fn month_year_rejects_out_of_range_or_garbage() {
        assert_eq!(parse_month_year("0", "2025"), None);
        assert_eq!(parse_month_year("13", "2025"), None);
        assert_eq!(parse_month_year("June", "2025"), None);
        assert_eq!(parse_month_year("6", ""), None);
    }
}
