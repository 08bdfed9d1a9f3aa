//! Root application component and browser wiring.

use leptos::prelude::*;

use crate::pages::greet::GreetPage;
use crate::state::page::PageState;

/// Root application component.
///
/// Provides the page state and, in the browser, connects the page to the
/// lifecycle controller.
#[component]
pub fn App() -> impl IntoView {
    let page = RwSignal::new(PageState::default());
    provide_context(page);

    #[cfg(feature = "csr")]
    let actions = browser::connect(page);
    #[cfg(not(feature = "csr"))]
    let actions = crate::pages::greet::PageActions {
        on_greet: Callback::new(|_| log::debug!("greet ignored outside the browser")),
        on_update: Callback::new(|_| log::debug!("update ignored outside the browser")),
        on_sign_out: Callback::new(|()| log::debug!("sign out ignored outside the browser")),
    };

    view! { <GreetPage page actions/> }
}

/// Mount the app into `<body>` with console logging and panic reporting.
#[cfg(feature = "csr")]
pub fn mount() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("console logger unavailable: {e}").into());
    }
    leptos::mount::mount_to_body(App);
}

#[cfg(feature = "csr")]
mod browser {
    use std::rc::Rc;

    use leptos::prelude::*;
    use leptos::task::spawn_local;

    use crate::config::ClientConfig;
    use crate::net::api::BrowserTransport;
    use crate::pages::greet::{PageActions, SIGNIN_BUTTON_ID};
    use crate::pages::lifecycle::PageController;
    use crate::session::google::GoogleSession;
    use crate::state::page::PageState;

    type BrowserController = PageController<GoogleSession, BrowserTransport, RwSignal<PageState>>;

    /// Build the controller, start the SDK, run the initial lifecycle and
    /// return the callbacks the page reports user intent through.
    pub(super) fn connect(page: RwSignal<PageState>) -> PageActions {
        let controller: Rc<BrowserController> = Rc::new(PageController::new(GoogleSession, BrowserTransport, page));
        let config = ClientConfig::from_document();

        let boot = Rc::clone(&controller);
        spawn_local(async move {
            if let Err(e) = GoogleSession::init(config.google_client_id.as_deref()).await {
                log::error!("identity SDK init failed: {e}");
                boot.load_page0_without_session(e).await;
                return;
            }
            if let Err(e) = GoogleSession::render_button(SIGNIN_BUTTON_ID) {
                log::warn!("sign-in button not rendered: {e}");
            }
            let on_change = Rc::clone(&boot);
            if let Err(e) = GoogleSession::listen(move || {
                let ctrl = Rc::clone(&on_change);
                spawn_local(async move { ctrl.load_page0().await });
            }) {
                log::warn!("session listener not installed: {e}");
            }
            boot.load_page0().await;
        });

        let stored = StoredValue::new_local(controller);
        PageActions {
            on_greet: Callback::new(move |name: Option<String>| {
                let ctrl = stored.get_value();
                spawn_local(async move { ctrl.do_greeting(name).await });
            }),
            on_update: Callback::new(move |greeting: Option<String>| {
                let ctrl = stored.get_value();
                spawn_local(async move { ctrl.do_update_greeting(greeting).await });
            }),
            on_sign_out: Callback::new(move |()| {
                let ctrl = stored.get_value();
                spawn_local(async move { ctrl.sign_out().await });
            }),
        }
    }
}
