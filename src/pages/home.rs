use yew::prelude::*;
use yew_router::prelude::*;

use crate::config::SERVICES;
use crate::Route;

fn service_icon(service: &str) -> &'static str {
    match service {
        "Web Development" => "fas fa-code",
        "Mobile App Development" => "fas fa-mobile-alt",
        "Cloud Hosting" => "fas fa-cloud",
        "IT Consulting" => "fas fa-lightbulb",
        _ => "fas fa-tools",
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    html! {
        <main>
            <section class="hero" data-aos="fade-up">
                <div class="hero-content">
                    <h1>{"Technology that works for your business"}</h1>
                    <p class="hero-subtitle">
                        {"Websites, apps, hosting and support from one team."}
                    </p>
                    <Link<Route> to={Route::Request} classes="hero-cta">
                        {"Request a Service"}
                    </Link<Route>>
                </div>
            </section>

            <section id="services" class="services">
                <h2 data-aos="fade-up">{"What we do"}</h2>
                <div class="services-grid">
                    { for SERVICES.iter().enumerate().map(|(i, service)| html! {
                        <div class="service-card" data-aos="zoom-in" data-aos-delay={(i * 100).to_string()}>
                            <i class={classes!(service_icon(service), "text-3xl")}></i>
                            <h3>{*service}</h3>
                        </div>
                    }) }
                </div>
            </section>

            <section class="cta" data-aos="fade-up">
                <h2>{"Ready to start?"}</h2>
                <Link<Route> to={Route::Request} classes="hero-cta">
                    {"Tell us what you need"}
                </Link<Route>>
            </section>
        </main>
    }
}
