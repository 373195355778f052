use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::language_menu::LanguageMenu;
use crate::theme::Theme;
use crate::Route;

/// Classes of `main-nav`: hidden until the burger opens it on small screens.
pub fn main_nav_classes(open: bool) -> Classes {
    if open {
        classes!("main-nav", "md:flex", "active", "flex")
    } else {
        classes!("main-nav", "md:flex", "hidden")
    }
}

#[derive(Properties, PartialEq)]
pub struct ThemeToggleProps {
    pub theme: Theme,
    #[prop_or_default]
    pub mobile: bool,
    pub on_toggle: Callback<()>,
}

#[function_component(ThemeToggle)]
pub fn theme_toggle(props: &ThemeToggleProps) -> Html {
    let onclick = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |_: MouseEvent| on_toggle.emit(()))
    };
    let icon = props.theme.toggle_icon();

    if props.mobile {
        html! {
            <button id="darkModeToggleMobile" class="mobile-theme-toggle" {onclick}>
                <i class={classes!(icon, "mr-2")}></i>
                <span>{props.theme.toggle_label()}</span>
            </button>
        }
    } else {
        html! {
            <button id="darkModeToggle" class="theme-toggle" aria-label="Toggle dark mode" {onclick}>
                <i class={classes!(icon, "text-xl")}></i>
            </button>
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub theme: Theme,
    pub on_toggle_theme: Callback<()>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let NavProps { theme, on_toggle_theme } = props;
    let menu_open = use_state(|| false);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    html! {
        <header class="site-header">
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"Nexa Services"}
                </Link<Route>>

                <div class="nav-tools">
                    <LanguageMenu />
                    <ThemeToggle theme={*theme} on_toggle={on_toggle_theme.clone()} />
                    <button id="menu-btn" class="md:hidden" aria-label="Open menu" onclick={toggle_menu}>
                        <i class="fas fa-bars text-xl"></i>
                    </button>
                </div>

                <nav id="main-nav" class={main_nav_classes(*menu_open)}>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Home} classes="nav-link">
                            {"Home"}
                        </Link<Route>>
                    </div>
                    <a href="/#services" class="nav-link" onclick={close_menu.clone()}>{"Services"}</a>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Request} classes="nav-request-button">
                            {"Request a Service"}
                        </Link<Route>>
                    </div>
                    <div class="md:hidden">
                        <ThemeToggle theme={*theme} mobile=true on_toggle={on_toggle_theme.clone()} />
                    </div>
                </nav>
            </div>
        </header>
    }
}
