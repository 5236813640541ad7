//! Browser-side handles for the appointment controller.

use gloo_timers::callback::Timeout;
use web_sys::{HtmlFormElement, HtmlInputElement, HtmlSelectElement};
use yew::prelude::{NodeRef, UseStateHandle};

use super::controller::{ControlState, FormFields, MessageSurface, Scheduler, SubmitControl};
use super::form::FormInput;
use super::message::FormMessage;

/// References to the form and its five inputs, read fresh on every submit.
#[derive(Clone, Default)]
pub struct DomFormFields {
    pub form: NodeRef,
    pub name: NodeRef,
    pub email: NodeRef,
    pub phone: NodeRef,
    pub service: NodeRef,
    pub date: NodeRef,
}

fn input_value(node: &NodeRef) -> String {
    node.cast::<HtmlInputElement>()
        .map(|input| input.value())
        .unwrap_or_default()
}

impl FormFields for DomFormFields {
    fn snapshot(&self) -> FormInput {
        let service = self
            .service
            .cast::<HtmlSelectElement>()
            .map(|select| select.value())
            .unwrap_or_default();

        FormInput::from_raw(
            &input_value(&self.name),
            &input_value(&self.email),
            &input_value(&self.phone),
            &service,
            &input_value(&self.date),
        )
    }

    fn reset(&self) {
        if let Some(form) = self.form.cast::<HtmlFormElement>() {
            form.reset();
        }
    }
}

pub struct StateControl(pub UseStateHandle<ControlState>);

impl SubmitControl for StateControl {
    fn label(&self) -> String {
        self.0.label().to_string()
    }

    fn apply(&self, state: &ControlState) {
        self.0.set(state.clone());
    }
}

pub struct StateMessages(pub UseStateHandle<Option<FormMessage>>);

impl MessageSurface for StateMessages {
    fn show(&self, message: &FormMessage) {
        self.0.set(Some(message.clone()));
    }

    fn hide(&self) {
        self.0.set(None);
    }
}

/// One-shot timers on the browser event loop.
pub struct GlooScheduler;

impl Scheduler for GlooScheduler {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        Timeout::new(delay_ms, task).forget();
    }
}
