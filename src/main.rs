use log::{info, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MediaQueryListEvent;
use yew::prelude::*;
use yew_router::prelude::*;

mod animate;
mod config;
mod theme;
mod components {
    pub mod language_menu;
    pub mod nav;
}
mod pages {
    pub mod home;
    pub mod service_request;
}
mod request {
    pub mod client;
    pub mod fields;
    pub mod form;
    pub mod payload;
    pub mod submission;
    pub mod validation;
}

use components::nav::Nav;
use pages::{home::Home, service_request::ServiceRequest};
use theme::{LocalThemeStore, ThemeAction, ThemeState};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/request")]
    Request,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::Request => {
            info!("Rendering Request page");
            html! { <ServiceRequest /> }
        }
        Route::NotFound => {
            info!("Unknown path, rendering Home page");
            html! { <Home /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    let theme_state = use_reducer(|| ThemeState::load(&LocalThemeStore, theme::system_prefers_dark()));

    // Apply and persist on every theme change
    {
        use_effect_with_deps(
            move |state: &ThemeState| {
                theme::apply_to_document(state.theme);
                state.persist(&LocalThemeStore);
                || ()
            },
            (*theme_state).clone(),
        );
    }

    // Follow the system colour scheme while no preference is stored
    {
        let theme_state = theme_state.clone();
        use_effect_with_deps(
            move |_| {
                let query = theme::color_scheme_query();
                let callback = Closure::<dyn Fn(MediaQueryListEvent)>::new(move |e: MediaQueryListEvent| {
                    theme_state.dispatch(ThemeAction::SystemChanged(e.matches()));
                });
                if let Some(query) = &query {
                    if query
                        .add_event_listener_with_callback("change", callback.as_ref().unchecked_ref())
                        .is_err()
                    {
                        warn!("Could not watch the system colour scheme");
                    }
                }
                move || {
                    if let Some(query) = query {
                        if query
                            .remove_event_listener_with_callback(
                                "change",
                                callback.as_ref().unchecked_ref(),
                            )
                            .is_err()
                        {
                            warn!("Could not stop watching the system colour scheme");
                        }
                    }
                }
            },
            (),
        );
    }

    // Scroll animations hook onto whatever the first render produced
    {
        use_effect_with_deps(
            move |_| {
                animate::init_scroll_animations();
                || ()
            },
            (),
        );
    }

    let on_toggle_theme = {
        let theme_state = theme_state.clone();
        Callback::from(move |_: ()| theme_state.dispatch(ThemeAction::Toggle))
    };

    html! {
        <BrowserRouter>
            <Nav theme={theme_state.theme} on_toggle_theme={on_toggle_theme} />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
