use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config::LANGUAGES;

/// Code of the language whose href is the longest prefix of `path`.
pub fn current_language(path: &str) -> &'static str {
    LANGUAGES
        .iter()
        .filter(|(_, _, href)| path.starts_with(href))
        .max_by_key(|(_, _, href)| href.len())
        .map(|(code, _, _)| *code)
        .unwrap_or("en")
}

#[function_component(LanguageMenu)]
pub fn language_menu() -> Html {
    let open = use_state(|| false);
    let node = use_node_ref();

    // Only clicks outside the selector close it.
    {
        let open = open.clone();
        use_click_away(node.clone(), move |_: Event| {
            if *open {
                open.set(false);
            }
        });
    }

    let toggle = {
        let open = open.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            open.set(!*open);
        })
    };

    let path = web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_default();
    let current = current_language(&path);

    html! {
        <div class="language-selector relative" ref={node}>
            <button id="languageToggle" class="flex items-center gap-1" onclick={toggle}>
                <i class="fas fa-globe"></i>
                <span class="uppercase">{current}</span>
                <i class="fas fa-chevron-down text-xs"></i>
            </button>
            <div
                id="languageMenu"
                class={classes!("language-menu", (*open).then(|| "show"))}
                onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}
            >
                { for LANGUAGES.iter().map(|(code, label, href)| html! {
                    <a
                        href={*href}
                        lang={*code}
                        class={classes!("language-option", (*code == current).then(|| "active"))}
                    >
                        {*label}
                    </a>
                }) }
            </div>
        </div>
    }
}
