use gloo_timers::callback::Timeout;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use super::models::{FieldKind, FormAction, FormState, StatusKind, Submission, CONTACT_FIELDS};
use crate::config::SiteConfig;
use crate::utils::api::Api;

#[derive(Properties, PartialEq)]
pub struct ContactFormProps {
    pub config: SiteConfig,
}

#[function_component]
pub fn ContactForm(props: &ContactFormProps) -> Html {
    let state = use_reducer(|| FormState::new(CONTACT_FIELDS));

    // Success notices clear themselves; a newer status cancels the old timer
    {
        let state = state.clone();
        let clear_after = props.config.status_clear_ms;
        let is_success = state.status.map(|s| s.kind) == Some(StatusKind::Success);
        let current_generation = state.status_generation;
        use_effect_with_deps(
            move |generation| {
                let generation = *generation;
                let timeout = is_success.then(|| {
                    Timeout::new(clear_after, move || {
                        state.dispatch(FormAction::StatusExpired(generation));
                    })
                });
                move || drop(timeout)
            },
            current_generation,
        );
    }

    let onsubmit = {
        let state = state.clone();
        let endpoint = props.config.form_endpoint.clone();
        let dev_reset_ms = props.config.dev_reset_ms;
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let plan = state.plan_submission(endpoint.as_deref());
            state.dispatch(FormAction::SubmitAttempted);

            match plan {
                Submission::Rejected => {}
                Submission::DevMode(payload) => {
                    log::info!("Form data: {:?}", payload);
                    state.dispatch(FormAction::DevModeAccepted);
                    let state = state.clone();
                    spawn_local(async move {
                        TimeoutFuture::new(dev_reset_ms).await;
                        state.dispatch(FormAction::Reset);
                    });
                }
                Submission::Post { endpoint, payload } => {
                    let state = state.clone();
                    spawn_local(async move {
                        let result = match Api::post(&endpoint).json(&payload) {
                            Ok(request) => request.send().await.map(|_| ()),
                            Err(e) => Err(e),
                        };
                        match result {
                            Ok(()) => state.dispatch(FormAction::Succeeded),
                            Err(e) => {
                                log::error!("Form submission error: {}", e);
                                state.dispatch(FormAction::Failed);
                            }
                        }
                    });
                }
            }
        })
    };

    let groups = state.specs.iter().zip(&state.fields).enumerate().map(|(index, (spec, field))| {
        let onblur = {
            let state = state.clone();
            Callback::from(move |_: FocusEvent| state.dispatch(FormAction::Blur(index)))
        };
        let input = match spec.kind {
            FieldKind::TextArea => {
                let oninput = {
                    let state = state.clone();
                    Callback::from(move |e: InputEvent| {
                        let value = e.target_unchecked_into::<HtmlTextAreaElement>().value();
                        state.dispatch(FormAction::Input { index, value });
                    })
                };
                html! {
                    <textarea
                        id={spec.name}
                        name={spec.name}
                        rows="5"
                        required={spec.required}
                        value={field.value.clone()}
                        {oninput}
                        {onblur}
                    />
                }
            }
            FieldKind::Text | FieldKind::Email => {
                let oninput = {
                    let state = state.clone();
                    Callback::from(move |e: InputEvent| {
                        let value = e.target_unchecked_into::<HtmlInputElement>().value();
                        state.dispatch(FormAction::Input { index, value });
                    })
                };
                let input_type = if spec.kind == FieldKind::Email { "email" } else { "text" };
                html! {
                    <input
                        id={spec.name}
                        name={spec.name}
                        type={input_type}
                        required={spec.required}
                        value={field.value.clone()}
                        {oninput}
                        {onblur}
                    />
                }
            }
        };
        html! {
            <div class={classes!("form-group", field.error.is_some().then_some("error"))}>
                <label for={spec.name}>{spec.label}</label>
                { input }
                <span class="form-error" role="alert">
                    { field.error.map(|e| e.message()).unwrap_or_default() }
                </span>
            </div>
        }
    });

    let status_class = state.status.map(|s| s.kind.class());
    let status_message = state.status.map(|s| s.message).unwrap_or_default();

    html! {
        <form id="contactForm" class="contact-form" novalidate=true {onsubmit}>
            { for groups }
            <button type="submit" class="btn btn-primary">{"Enviar mensagem"}</button>
            <div
                id="formStatus"
                class={classes!("form-status", status_class)}
                role="status"
                aria-live="polite"
            >
                { status_message }
            </div>
        </form>
    }
}
