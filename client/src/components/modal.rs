//! Result/error modal dialog.

use leptos::prelude::*;

use crate::state::page::{MODAL_CONFIG, Modal, ModalKind, PageState};

/// Modal shown while `page.modal` holds a modal of this `kind`.
///
/// Dismissal follows the modal's `ModalConfig`: the backdrop closes it when
/// enabled, Escape only when `keyboard` is set.
#[component]
pub fn ModalDialog(id: &'static str, title: &'static str, kind: ModalKind, page: RwSignal<PageState>) -> impl IntoView {
    let shown = move || page.with(|p| p.modal.as_ref().filter(|m| m.kind == kind).cloned());
    let config = move || shown().map_or(MODAL_CONFIG, |m: Modal| m.config);
    let dismiss = move || page.update(|p| p.modal = None);

    let on_backdrop = move |_| {
        if config().backdrop {
            dismiss();
        }
    };
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            if config().keyboard {
                dismiss();
            }
        }
    };

    view! {
        <Show when=move || shown().is_some()>
            <div class="dialog-backdrop" on:click=on_backdrop>
                <div
                    id=id
                    class="dialog"
                    class=("dialog--error", kind == ModalKind::Error)
                    on:click=move |ev| ev.stop_propagation()
                    on:keydown=on_keydown
                    tabindex="0"
                >
                    <h2>{title}</h2>
                    <p class="dialog__text">{move || shown().map(|m| m.text).unwrap_or_default()}</p>
                    <div class="dialog__actions">
                        <button class="btn btn--primary" on:click=move |_| dismiss()>"Close"</button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
