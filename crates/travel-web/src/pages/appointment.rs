//! Appointment Page

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use travel_core::ContentApi;
use travel_core::views::{AppointmentForm, Field};

use crate::api::content_api;
use crate::state::{use_labels, use_page_title};

#[component]
pub fn AppointmentPage() -> impl IntoView {
    let labels = use_labels();
    use_page_title(|labels| labels.book_appointment.to_string());

    let form = RwSignal::new(AppointmentForm::new());

    let submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let request = match form.try_update(AppointmentForm::begin_submit) {
            Some(Ok(request)) => request,
            Some(Err(blocked)) => {
                tracing::debug!("Submit ignored: {:?}", blocked);
                return;
            }
            None => return,
        };

        spawn_local(async move {
            let result = content_api().submit_appointment(&request).await;
            form.try_update(|form| form.finish(result));
        });
    };

    let inputs = Field::INPUTS
        .into_iter()
        .map(move |field| {
            view! {
                <div class="field">
                    <label for=field.key()>{move || field.label(labels.get())}</label>
                    <input
                        id=field.key()
                        name=field.key()
                        type=field.input_type()
                        required=field.required()
                        prop:value=move || form.with(|f| f.value(field).to_string())
                        on:input=move |ev| form.update(|f| f.set(field, event_target_value(&ev)))
                    />
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="page appointment">
            <h1>{move || labels.get().book_appointment}</h1>
            <form class="appointment-form" on:submit=submit>
                {inputs}
                <div class="field">
                    <label for="message">{move || Field::Message.label(labels.get())}</label>
                    <textarea
                        id="message"
                        name=Field::Message.key()
                        rows="4"
                        prop:value=move || form.with(|f| f.value(Field::Message).to_string())
                        on:input=move |ev| form.update(|f| f.set(Field::Message, event_target_value(&ev)))
                    ></textarea>
                </div>
                <button type="submit" class="btn btn-primary" disabled=move || form.with(AppointmentForm::is_submitting)>
                    {move || labels.get().submit}
                </button>
                {move || form.with(AppointmentForm::status_message).map(|message| view! {
                    <p class="status">{message}</p>
                })}
            </form>
        </div>
    }
}
