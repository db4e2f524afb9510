use web_sys::{FormData, HtmlFormElement};
use yew::prelude::*;

use crate::components::FlashMessage;
use crate::services::{ApiClient, ApiError, Logger};

#[derive(Properties, PartialEq)]
pub struct CategoryFormProps {
    pub on_flash: Callback<FlashMessage>,
}

/// Form posting a new category to `/add_category`.
///
/// On success the whole page reloads so that every category-dependent
/// control is rebuilt from fresh server state.
#[function_component(CategoryForm)]
pub fn category_form(props: &CategoryFormProps) -> Html {
    let submitting = use_state(|| false);

    let onsubmit = {
        let on_flash = props.on_flash.clone();
        let submitting = submitting.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let form: HtmlFormElement = e.target_unchecked_into();
            let form_data = match FormData::new_with_form(&form) {
                Ok(data) => data,
                Err(_) => {
                    Logger::error("category_form", "could not read form data");
                    return;
                }
            };

            let category = form_data.get("category").as_string().unwrap_or_default();
            if category.trim().is_empty() {
                on_flash.emit(FlashMessage::error("Please enter a category name."));
                return;
            }

            let on_flash = on_flash.clone();
            let submitting = submitting.clone();
            submitting.set(true);

            wasm_bindgen_futures::spawn_local(async move {
                match ApiClient::new().add_category(form_data).await {
                    Ok(message) => {
                        on_flash.emit(FlashMessage::success(message));
                        // Let the notice show before the reload wipes the page.
                        gloo::timers::future::TimeoutFuture::new(800).await;
                        if let Some(window) = web_sys::window() {
                            let _ = window.location().reload();
                        }
                    }
                    Err(ApiError::Backend(message)) => {
                        on_flash.emit(FlashMessage::error(message));
                    }
                    Err(e) => {
                        Logger::error("category_form", &e.to_string());
                        on_flash.emit(FlashMessage::error(
                            "Could not add the category. Please try again.",
                        ));
                    }
                }
                submitting.set(false);
            });
        })
    };

    html! {
        <section class="add-category-section">
            <h2>{"Add Category"}</h2>

            <form class="category-form" onsubmit={onsubmit}>
                <div class="form-group">
                    <label for="category-name">{"Category name"}</label>
                    <input
                        type="text"
                        id="category-name"
                        name="category"
                        placeholder="Food, Travel, Rent..."
                        disabled={*submitting}
                    />
                </div>

                <button type="submit" class="btn btn-primary" disabled={*submitting}>
                    {if *submitting { "Adding..." } else { "Add Category" }}
                </button>
            </form>
        </section>
    }
}
