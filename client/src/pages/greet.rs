//! The greeting page: sign-in chrome, greeting form, update form, modals.

use leptos::html::Input;
use leptos::prelude::*;

use crate::components::modal::ModalDialog;
use crate::components::update_greeting::UpdateGreetingSection;
use crate::state::page::{ModalKind, PageState};

/// DOM id the identity SDK renders its sign-in button into.
pub const SIGNIN_BUTTON_ID: &str = "signin-btn";

/// User intents the page reports to its controller.
#[derive(Clone, Copy)]
pub struct PageActions {
    /// Greeting form submitted; `None` when the name input is not mounted.
    pub on_greet: Callback<Option<String>>,
    /// Update form submitted; `None` when the update input is not mounted.
    pub on_update: Callback<Option<String>>,
    pub on_sign_out: Callback<()>,
}

fn input_value(input: NodeRef<Input>) -> Option<String> {
    input.get_untracked().map(|el| el.value())
}

fn display(visible: bool) -> &'static str {
    if visible { "block" } else { "none" }
}

#[component]
pub fn GreetPage(page: RwSignal<PageState>, actions: PageActions) -> impl IntoView {
    let name_ref = NodeRef::<Input>::new();
    let update_ref = NodeRef::<Input>::new();

    let on_greet = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if page.with_untracked(|p| p.greeting_form_bound) {
            actions.on_greet.run(input_value(name_ref));
        }
    };
    let on_update = Callback::new(move |()| {
        if page.with_untracked(|p| p.update_form_bound) {
            actions.on_update.run(input_value(update_ref));
        }
    });
    let on_sign_out = move |_| {
        if page.with_untracked(|p| p.signout_bound) {
            actions.on_sign_out.run(());
        }
    };

    view! {
        <header class="greet-header">
            <div id=SIGNIN_BUTTON_ID style:display=move || display(page.with(|p| p.signin_button_visible))></div>
            <div id="userinfo" style:display=move || display(page.with(|p| p.userinfo_visible))>
                <span id="email-text">{move || page.with(|p| p.email_text.clone())}</span>
                <button id="signout-btn" class="btn" on:click=on_sign_out>"Sign out"</button>
            </div>
        </header>
        <main
            id="page-wrapper"
            class="page-wrapper"
            class=("page-wrapper--hidden", move || !page.with(|p| p.page_wrapper_visible))
        >
            <form id="greeting-form" class="greet-form" on:submit=on_greet>
                <label for="greeting-name">"Name"</label>
                <input id="greeting-name" class="greet-input" type="text" node_ref=name_ref/>
                <button class="btn" type="submit">"Greet"</button>
            </form>
            <UpdateGreetingSection page input_ref=update_ref on_submit=on_update/>
        </main>
        <ModalDialog id="result-modal" title="Result" kind=ModalKind::Result page/>
        <ModalDialog id="error-modal" title="Error" kind=ModalKind::Error page/>
    }
}
