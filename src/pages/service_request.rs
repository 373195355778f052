use yew::prelude::*;

use crate::request::form::RequestForm;

#[function_component(ServiceRequest)]
pub fn service_request() -> Html {
    html! {
        <main class="request-page">
            <section class="request-container" data-aos="fade-up">
                <h1>{"Request a Service"}</h1>
                <p>{"Fill in the form and our team will contact you within one business day."}</p>
                <RequestForm />
            </section>
        </main>
    }
}
