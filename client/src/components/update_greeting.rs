//! Update-greeting form, rendered from the `greeting` template context.

use leptos::html::Input;
use leptos::prelude::*;

use crate::state::page::PageState;

/// Renders `#update-greeting-form` while the page holds a greeting.
///
/// The input is only mounted while the section is rendered, so an unmounted
/// `input_ref` is how callers tell "no value" from an empty one.
#[component]
pub fn UpdateGreetingSection(
    page: RwSignal<PageState>,
    input_ref: NodeRef<Input>,
    on_submit: Callback<()>,
) -> impl IntoView {
    let greeting = move || page.with(|p| p.update_greeting.clone());

    view! {
        <div id="update-greeting-section">
            {move || {
                greeting()
                    .map(|greeting| {
                        view! {
                            <form
                                id="update-greeting-form"
                                class="greet-form"
                                on:submit=move |ev: leptos::ev::SubmitEvent| {
                                    ev.prevent_default();
                                    on_submit.run(());
                                }
                            >
                                <label for="update-greeting-input">"Greeting"</label>
                                <input
                                    id="update-greeting-input"
                                    class="greet-input"
                                    type="text"
                                    value=greeting
                                    node_ref=input_ref
                                />
                                <button class="btn" type="submit">"Update"</button>
                            </form>
                        }
                    })
            }}
        </div>
    }
}
