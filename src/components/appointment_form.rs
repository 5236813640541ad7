use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::appointment::dom::{DomFormFields, GlooScheduler, StateControl, StateMessages};
use crate::appointment::{AppointmentController, ControlState, FormHandles, FormMessage, Web3FormsRelay};
use crate::config::{FormConfig, SERVICES, SUBMIT_LABEL};
use crate::site::effects::sanitize_phone;

#[function_component(AppointmentForm)]
pub fn appointment_form() -> Html {
    let fields = use_memo(|_| DomFormFields::default(), ());
    let control = use_state(|| ControlState::Idle { label: SUBMIT_LABEL.to_string() });
    let message = use_state(|| None::<FormMessage>);

    let controller = {
        let fields = fields.clone();
        let control = control.clone();
        let message = message.clone();
        use_memo(
            move |_| {
                let config = FormConfig::default();
                let handles = FormHandles {
                    fields: Rc::new((*fields).clone()),
                    control: Rc::new(StateControl(control)),
                    messages: Rc::new(StateMessages(message)),
                    scheduler: Rc::new(GlooScheduler),
                };
                AppointmentController::new(handles, Web3FormsRelay::new(config.clone()), config)
            },
            (),
        )
    };

    let onsubmit = {
        let controller = controller.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let controller = controller.clone();
            spawn_local(async move {
                let attempt = controller.handle_submit().await;
                log::debug!("Appointment submit finished: {:?}", attempt);
            });
        })
    };

    let on_phone_input = Callback::from(|e: InputEvent| {
        if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
            let cleaned = sanitize_phone(&input.value());
            if cleaned != input.value() {
                input.set_value(&cleaned);
            }
        }
    });

    let message_view = match &*message {
        Some(msg) => html! {
            <div id="formMessage" class="form-message" style={msg.style.inline_style()}>
                {msg.display_text()}
            </div>
        },
        None => html! {
            <div id="formMessage" class="form-message" style="display: none;"></div>
        },
    };

    html! {
        <form id="appointmentForm" class="appointment-form" ref={fields.form.clone()} onsubmit={onsubmit} novalidate=true>
            <div class="form-row">
                <div class="form-group">
                    <label for="name">{"Full Name"}</label>
                    <input type="text" id="name" name="name" placeholder="Jane Doe" ref={fields.name.clone()} />
                </div>
                <div class="form-group">
                    <label for="email">{"Email"}</label>
                    <input type="email" id="email" name="email" placeholder="jane@example.com" ref={fields.email.clone()} />
                </div>
            </div>
            <div class="form-row">
                <div class="form-group">
                    <label for="phone">{"Phone"}</label>
                    <input type="tel" id="phone" name="phone" placeholder="+1 555 010 0000"
                        ref={fields.phone.clone()} oninput={on_phone_input} />
                </div>
                <div class="form-group">
                    <label for="service">{"Service"}</label>
                    <select id="service" name="service" ref={fields.service.clone()}>
                        <option value="">{"Select a service"}</option>
                        { for SERVICES.iter().map(|service| html! {
                            <option value={*service}>{*service}</option>
                        }) }
                    </select>
                </div>
            </div>
            <div class="form-group">
                <label for="date">{"Preferred Date (optional)"}</label>
                <input type="date" id="date" name="date" ref={fields.date.clone()} />
            </div>
            <button type="submit" id="submitBtn" class="btn btn-primary" disabled={control.is_busy()}>
                {control.label()}
            </button>
            {message_view}
        </form>
    }
}
