use gloo_console::log;
use log::{debug, warn};
use web_sys::{HtmlElement, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config::{self, COUNTRY_CODES, CUSTOM_COUNTRY_CODE, SERVICES, SERVICE_PLACEHOLDER};
use crate::request::client::{self, RemoteReply, TransportError};
use crate::request::fields::{FieldId, FormValues, FIELDS};
use crate::request::submission::{Effect, FormEvent, Phase, SubmissionMachine, TriggerState};
use crate::request::validation::ValidationResult;

const SUBMIT_LABEL: &str = "Submit Request";
const DISABLED_TITLE: &str = "Form submission is currently disabled.";

pub enum RequestFormMsg {
    Submit(SubmitEvent),
    CountryCodeChanged(String),
    Settled(Result<RemoteReply, TransportError>),
}

pub struct RequestForm {
    machine: SubmissionMachine,
    endpoint: Option<&'static str>,
    inputs: Vec<(FieldId, NodeRef)>,
    errors: ValidationResult,
    trigger: TriggerState,
    custom_code: bool,
    succeeded: bool,
}

impl Component for RequestForm {
    type Message = RequestFormMsg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        let endpoint = config::form_endpoint();
        let machine = SubmissionMachine::new(endpoint.clone());
        Self {
            trigger: machine.trigger(),
            machine,
            endpoint: endpoint.ok(),
            inputs: FIELDS.iter().map(|field| (field.id, NodeRef::default())).collect(),
            errors: ValidationResult::default(),
            custom_code: false,
            succeeded: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            RequestFormMsg::Submit(e) => {
                e.prevent_default();
                if *self.machine.phase() == Phase::Disabled {
                    return false;
                }
                let values = self.read_values();
                let effects = self.machine.handle(FormEvent::Submitted(values));
                self.apply(ctx, effects);
                true
            }
            RequestFormMsg::CountryCodeChanged(code) => {
                self.custom_code = code == CUSTOM_COUNTRY_CODE;
                true
            }
            RequestFormMsg::Settled(result) => {
                let event = match result {
                    Ok(reply) => {
                        log!(format!("Google Sheets Response: {:?}", reply));
                        FormEvent::ResponseReceived(reply)
                    }
                    Err(e) => FormEvent::TransportFailed(e.to_string()),
                };
                let effects = self.machine.handle(event);
                self.apply(ctx, effects);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let onsubmit = ctx.link().callback(RequestFormMsg::Submit);
        let on_code_change = ctx.link().callback(|e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            RequestFormMsg::CountryCodeChanged(select.value())
        });
        let form_style = if self.succeeded { "display: none;" } else { "" };

        html! {
            <div class="request-form-wrapper">
                <style>
                    {r#"
                    .error-message {
                        color: #dc2626;
                        font-size: 0.875rem;
                        margin-top: 0.25rem;
                    }
                    .form-success {
                        display: none;
                    }
                    .form-success.visible {
                        display: block;
                        animation: fadeIn 0.5s ease-in-out;
                    }
                    @keyframes fadeIn {
                        from { opacity: 0; }
                        to { opacity: 1; }
                    }
                    "#}
                </style>
                <form id="serviceRequestForm" class="space-y-6" novalidate=true style={form_style} {onsubmit}>
                    <div>
                        <label for="fullName">{"Full Name"}</label>
                        <input type="text" id="fullName" name="fullName" ref={self.input(FieldId::FullName)} />
                        { self.error_slot(FieldId::FullName) }
                    </div>

                    <div>
                        <label for="phoneNumber">{"Phone Number"}</label>
                        <div class="flex gap-2">
                            <select id="countryCode" name="countryCode" ref={self.input(FieldId::CountryCode)} onchange={on_code_change}>
                                <option value="" selected=true>{"Code"}</option>
                                { for COUNTRY_CODES.iter().map(|(code, label)| html! {
                                    <option value={*code}>{*label}</option>
                                }) }
                                <option value={CUSTOM_COUNTRY_CODE}>{"Other"}</option>
                            </select>
                            <input type="tel" id="phoneNumber" name="phoneNumber" ref={self.input(FieldId::PhoneNumber)} />
                        </div>
                        <div id="customCodeContainer" class={classes!("mt-2", (!self.custom_code).then(|| "hidden"))}>
                            <input
                                type="text"
                                id="customCountryCode"
                                name="customCountryCode"
                                placeholder="+123"
                                required={self.custom_code}
                                ref={self.input(FieldId::CustomCountryCode)}
                            />
                        </div>
                        { self.error_slot(FieldId::CountryCode) }
                        { self.error_slot(FieldId::PhoneNumber) }
                    </div>

                    <div>
                        <label for="email">{"Email Address"}</label>
                        <input type="email" id="email" name="email" ref={self.input(FieldId::Email)} />
                        { self.error_slot(FieldId::Email) }
                    </div>

                    <div>
                        <label for="service">{"Service"}</label>
                        <select id="service" name="service" ref={self.input(FieldId::Service)}>
                            <option value={SERVICE_PLACEHOLDER} selected=true>{SERVICE_PLACEHOLDER}</option>
                            { for SERVICES.iter().map(|service| html! {
                                <option value={*service}>{*service}</option>
                            }) }
                        </select>
                        { self.error_slot(FieldId::Service) }
                    </div>

                    <div>
                        <label for="details">{"Project Details"}</label>
                        <textarea id="details" name="details" rows="4" ref={self.input(FieldId::Details)} />
                    </div>

                    { self.submit_button() }
                </form>

                <div id="formSuccess" class={classes!("form-success", self.succeeded.then(|| "visible"))}>
                    <i class="fas fa-check-circle text-4xl"></i>
                    <h3>{"Thank you!"}</h3>
                    <p>{"Your request has been received. We will get back to you shortly."}</p>
                </div>
            </div>
        }
    }
}

impl RequestForm {
    fn input(&self, id: FieldId) -> NodeRef {
        self.inputs
            .iter()
            .find(|(field, _)| *field == id)
            .map(|(_, node)| node.clone())
            .unwrap_or_default()
    }

    fn read_values(&self) -> FormValues {
        let mut values = FormValues::default();
        for (id, node) in &self.inputs {
            values.set(*id, node_value(node));
        }
        values
    }

    fn apply(&mut self, ctx: &Context<Self>, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::RenderErrors(result) => {
                    for (field, err) in result.errors() {
                        debug!("{}: {}", field.input_id(), err);
                    }
                    self.errors = result;
                }
                Effect::Focus(field) => {
                    match self.input(field).cast::<HtmlElement>() {
                        Some(element) if element.focus().is_ok() => {}
                        _ => warn!("Could not focus #{}", field.input_id()),
                    }
                }
                Effect::SetTrigger(trigger) => self.trigger = trigger,
                Effect::Send(payload) => match self.endpoint {
                    Some(endpoint) => {
                        ctx.link().send_future(async move {
                            RequestFormMsg::Settled(client::post_payload(endpoint, &payload).await)
                        });
                    }
                    None => ctx.link().send_message(RequestFormMsg::Settled(Err(
                        TransportError::Network("no endpoint configured".to_string()),
                    ))),
                },
                Effect::Notify(message) => {
                    let shown = web_sys::window()
                        .map(|window| window.alert_with_message(&message).is_ok())
                        .unwrap_or(false);
                    if !shown {
                        warn!("Could not show notification: {}", message);
                    }
                }
                Effect::RevealSuccess => self.succeeded = true,
            }
        }
    }

    fn error_slot(&self, field: FieldId) -> Html {
        let Some(slot) = field.error_slot() else {
            return html! {};
        };
        let message = self.errors.message(field);
        let style = if message.is_some() { "display: block;" } else { "display: none;" };
        html! {
            <p id={slot} class="error-message" style={style}>{ message.unwrap_or_default() }</p>
        }
    }

    fn submit_button(&self) -> Html {
        let disabled = self.trigger.is_disabled();
        match self.trigger {
            TriggerState::Ready => html! {
                <button type="submit" class="submit-btn">
                    <i class="fas fa-paper-plane mr-2"></i>{SUBMIT_LABEL}
                </button>
            },
            TriggerState::Busy => html! {
                <button type="submit" class="submit-btn" {disabled}>
                    <i class="fas fa-spinner fa-spin mr-2"></i>{" Submitting..."}
                </button>
            },
            TriggerState::Disabled => html! {
                <button
                    type="submit"
                    class="submit-btn"
                    {disabled}
                    title={DISABLED_TITLE}
                    style="opacity: 0.7; cursor: not-allowed;"
                >
                    {SUBMIT_LABEL}
                </button>
            },
        }
    }
}

fn node_value(node: &NodeRef) -> String {
    if let Some(input) = node.cast::<HtmlInputElement>() {
        return input.value();
    }
    if let Some(select) = node.cast::<HtmlSelectElement>() {
        return select.value();
    }
    node.cast::<HtmlTextAreaElement>()
        .map(|area| area.value())
        .unwrap_or_default()
}
