use web_sys::{FormData, HtmlFormElement};
use yew::prelude::*;

use crate::components::FlashMessage;
use crate::services::{ApiClient, ApiError, Logger};

#[derive(Properties, PartialEq)]
pub struct ExpenseFormProps {
    /// Date (ISO YYYY-MM-DD) attached to the submitted fields.
    pub selected_date: String,
    pub on_flash: Callback<FlashMessage>,
    /// Fired after the backend confirms the new expense.
    pub on_expense_added: Callback<()>,
}

/// Form posting a new expense to `/add_expense` as multipart form data.
///
/// Fields are only cleared on confirmed success, so a failed request never
/// discards what the user typed.
#[function_component(ExpenseForm)]
pub fn expense_form(props: &ExpenseFormProps) -> Html {
    let submitting = use_state(|| false);

    let onsubmit = {
        let selected_date = props.selected_date.clone();
        let on_flash = props.on_flash.clone();
        let on_expense_added = props.on_expense_added.clone();
        let submitting = submitting.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let form: HtmlFormElement = e.target_unchecked_into();
            let form_data = match FormData::new_with_form(&form) {
                Ok(data) => data,
                Err(_) => {
                    Logger::error("expense_form", "could not read form data");
                    return;
                }
            };

            let name = form_data.get("name").as_string().unwrap_or_default();
            let cost = form_data.get("cost").as_string().unwrap_or_default();
            if name.trim().is_empty() || cost.trim().is_empty() {
                on_flash.emit(FlashMessage::error("Please fill in a name and a cost."));
                return;
            }

            if form_data.append_with_str("date", &selected_date).is_err() {
                Logger::error("expense_form", "could not attach date to form data");
                return;
            }

            let on_flash = on_flash.clone();
            let on_expense_added = on_expense_added.clone();
            let submitting = submitting.clone();
            submitting.set(true);

            wasm_bindgen_futures::spawn_local(async move {
                match ApiClient::new().add_expense(form_data).await {
                    Ok(message) => {
                        form.reset();
                        on_flash.emit(FlashMessage::success(message));
                        on_expense_added.emit(());
                    }
                    Err(ApiError::Backend(message)) => {
                        on_flash.emit(FlashMessage::error(message));
                    }
                    Err(e) => {
                        Logger::error("expense_form", &e.to_string());
                        on_flash.emit(FlashMessage::error(
                            "Could not add the expense. Please try again.",
                        ));
                    }
                }
                submitting.set(false);
            });
        })
    };

    html! {
        <section class="add-expense-section">
            <h2>{"Add Expense"}</h2>

            <form class="expense-form" onsubmit={onsubmit}>
                <div class="form-group">
                    <label for="expense-name">{"What did you spend on?"}</label>
                    <input
                        type="text"
                        id="expense-name"
                        name="name"
                        placeholder="Groceries, fuel, rent..."
                        disabled={*submitting}
                    />
                </div>

                <div class="form-group">
                    <label for="expense-cost">{"How much did it cost?"}</label>
                    <input
                        type="number"
                        id="expense-cost"
                        name="cost"
                        placeholder="250.00"
                        step="0.01"
                        min="0.01"
                        disabled={*submitting}
                    />
                </div>

                <div class="form-group">
                    <label for="expense-category">{"Category (optional)"}</label>
                    <input
                        type="text"
                        id="expense-category"
                        name="category"
                        placeholder="Food, Travel..."
                        disabled={*submitting}
                    />
                </div>

                <button type="submit" class="btn btn-primary" disabled={*submitting}>
                    {if *submitting { "Adding..." } else { "Add Expense" }}
                </button>
            </form>
        </section>
    }
}
