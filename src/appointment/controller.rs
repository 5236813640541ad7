use std::cell::{Cell, RefCell};
use std::rc::Rc;

use chrono::{Local, NaiveDate};
use log::{error, info, warn};

use super::form::FormInput;
use super::message::{FormMessage, SubmissionOutcome};
use super::relay::FormRelay;
use super::validation::{validate_on, ValidationError};
use crate::config::{FormConfig, BUSY_LABEL};

/// State of the submit button.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ControlState {
    Idle { label: String },
    Busy,
}

impl ControlState {
    pub fn label(&self) -> &str {
        match self {
            ControlState::Idle { label } => label,
            ControlState::Busy => BUSY_LABEL,
        }
    }

    pub fn is_busy(&self) -> bool {
        matches!(self, ControlState::Busy)
    }
}

pub trait FormFields {
    fn snapshot(&self) -> FormInput;
    fn reset(&self);
}

pub trait SubmitControl {
    fn label(&self) -> String;
    fn apply(&self, state: &ControlState);
}

pub trait MessageSurface {
    fn show(&self, message: &FormMessage);
    fn hide(&self);
}

pub trait Scheduler {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>);
}

/// How a single press of the submit button ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitAttempt {
    Invalid(ValidationError),
    Completed(SubmissionOutcome),
    /// A request from this controller was already in flight.
    Ignored,
}

/// Handles to the page the controller drives.
#[derive(Clone)]
pub struct FormHandles {
    pub fields: Rc<dyn FormFields>,
    pub control: Rc<dyn SubmitControl>,
    pub messages: Rc<dyn MessageSurface>,
    pub scheduler: Rc<dyn Scheduler>,
}

pub struct AppointmentController<R: FormRelay> {
    handles: FormHandles,
    relay: R,
    config: FormConfig,
    today: fn() -> NaiveDate,
    state: RefCell<ControlState>,
    in_flight: Cell<bool>,
    message_generation: Rc<Cell<u64>>,
}

fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

impl<R: FormRelay> AppointmentController<R> {
    pub fn new(handles: FormHandles, relay: R, config: FormConfig) -> Self {
        let label = handles.control.label();
        Self {
            handles,
            relay,
            config,
            today: local_today,
            state: RefCell::new(ControlState::Idle { label }),
            in_flight: Cell::new(false),
            message_generation: Rc::new(Cell::new(0)),
        }
    }

    #[cfg(test)]
    pub fn with_today(mut self, today: fn() -> NaiveDate) -> Self {
        self.today = today;
        self
    }

    pub fn state(&self) -> ControlState {
        self.state.borrow().clone()
    }

    pub fn validate(&self, input: &FormInput) -> Result<(), ValidationError> {
        validate_on(input, (self.today)())
    }

    /// Full submit handler: snapshot, validate, send, render.
    pub async fn handle_submit(&self) -> SubmitAttempt {
        if self.in_flight.get() {
            warn!("Appointment request already in flight, ignoring submit");
            return SubmitAttempt::Ignored;
        }

        let input = self.handles.fields.snapshot();
        if let Err(err) = self.validate(&input) {
            info!("Appointment form rejected locally: {}", err);
            self.render(FormMessage::from(&err));
            return SubmitAttempt::Invalid(err);
        }

        match self.submit(&input).await {
            Some(outcome) => SubmitAttempt::Completed(outcome),
            None => SubmitAttempt::Ignored,
        }
    }

    /// Sends an already validated form and renders the outcome. The button
    /// is busy from the first line until this returns. Returns `None` without
    /// touching the relay when another request is still in flight.
    async fn submit(&self, input: &FormInput) -> Option<SubmissionOutcome> {
        let Some(_busy) = BusyGuard::enter(self) else {
            warn!("Appointment request already in flight, refusing second send");
            return None;
        };

        let outcome = match self.relay.send(input).await {
            Ok(response) => response.into_outcome(),
            Err(err) => {
                error!("Appointment request failed: {}", err);
                SubmissionOutcome::network_error()
            }
        };

        match &outcome {
            SubmissionOutcome::Success(_) => {
                info!("Appointment request accepted");
                self.render(FormMessage::from(&outcome));
                self.handles.fields.reset();
                self.schedule_auto_hide();
            }
            SubmissionOutcome::ServerError(text) => {
                warn!("Appointment request rejected by relay: {}", text);
                self.render(FormMessage::from(&outcome));
            }
            SubmissionOutcome::NetworkError(_) => {
                self.render(FormMessage::from(&outcome));
            }
        }

        Some(outcome)
    }

    fn render(&self, message: FormMessage) {
        self.message_generation.set(self.message_generation.get() + 1);
        self.handles.messages.show(&message);
    }

    fn schedule_auto_hide(&self) {
        let armed_at = self.message_generation.get();
        let generation = self.message_generation.clone();
        let messages = self.handles.messages.clone();
        self.handles.scheduler.schedule(
            self.config.auto_hide_ms,
            Box::new(move || {
                // A newer message owns the channel now
                if generation.get() == armed_at {
                    messages.hide();
                }
            }),
        );
    }

    fn set_state(&self, state: ControlState) {
        self.handles.control.apply(&state);
        *self.state.borrow_mut() = state;
    }
}

/// Holds the button busy; dropping it restores the idle label on every exit path.
struct BusyGuard<'a, R: FormRelay> {
    controller: &'a AppointmentController<R>,
    idle: ControlState,
}

impl<'a, R: FormRelay> BusyGuard<'a, R> {
    fn enter(controller: &'a AppointmentController<R>) -> Option<Self> {
        if controller.in_flight.replace(true) {
            return None;
        }
        let idle = controller.state();
        controller.set_state(ControlState::Busy);
        Some(Self { controller, idle })
    }
}

impl<R: FormRelay> Drop for BusyGuard<'_, R> {
    fn drop(&mut self) {
        self.controller.set_state(self.idle.clone());
        self.controller.in_flight.set(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::appointment::message::{MessageStyle, NETWORK_ERROR_TEXT};
    use crate::appointment::relay::{RelayResponse, TransportError};
    use futures::executor::block_on;
    use std::future::Future;
    use std::task::Context;

    #[derive(Default)]
    struct Page {
        input: RefCell<FormInput>,
        resets: Cell<usize>,
        label: RefCell<String>,
        applied: RefCell<Vec<ControlState>>,
        shown: RefCell<Vec<FormMessage>>,
        visible: Cell<bool>,
        timers: RefCell<Vec<(u32, Box<dyn FnOnce()>)>>,
    }

    impl Page {
        fn new(input: FormInput) -> Rc<Self> {
            let page = Rc::new(Page::default());
            *page.input.borrow_mut() = input;
            *page.label.borrow_mut() = "Request Appointment".to_string();
            page
        }

        fn last_message(&self) -> Option<FormMessage> {
            self.shown.borrow().last().cloned()
        }

        fn fire_timers(&self) {
            let timers: Vec<_> = self.timers.borrow_mut().drain(..).collect();
            for (_, task) in timers {
                task();
            }
        }

        fn control_is_busy(&self) -> bool {
            self.applied.borrow().last().map_or(false, ControlState::is_busy)
        }
    }

    impl FormFields for Page {
        fn snapshot(&self) -> FormInput {
            self.input.borrow().clone()
        }

        fn reset(&self) {
            self.resets.set(self.resets.get() + 1);
            *self.input.borrow_mut() = FormInput::default();
        }
    }

    impl SubmitControl for Page {
        fn label(&self) -> String {
            self.label.borrow().clone()
        }

        fn apply(&self, state: &ControlState) {
            *self.label.borrow_mut() = state.label().to_string();
            self.applied.borrow_mut().push(state.clone());
        }
    }

    impl MessageSurface for Page {
        fn show(&self, message: &FormMessage) {
            self.visible.set(true);
            self.shown.borrow_mut().push(message.clone());
        }

        fn hide(&self) {
            self.visible.set(false);
        }
    }

    impl Scheduler for Page {
        fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
            self.timers.borrow_mut().push((delay_ms, task));
        }
    }

    struct FakeRelay {
        page: Rc<Page>,
        calls: Cell<usize>,
        busy_during_send: Cell<bool>,
        reply: Result<RelayResponse, TransportError>,
    }

    impl FakeRelay {
        fn new(page: &Rc<Page>, reply: Result<RelayResponse, TransportError>) -> Self {
            Self {
                page: page.clone(),
                calls: Cell::new(0),
                busy_during_send: Cell::new(false),
                reply,
            }
        }
    }

    impl FormRelay for FakeRelay {
        async fn send(&self, _input: &FormInput) -> Result<RelayResponse, TransportError> {
            self.calls.set(self.calls.get() + 1);
            self.busy_during_send.set(self.page.control_is_busy());
            self.reply.clone()
        }
    }

    impl FormRelay for Rc<FakeRelay> {
        async fn send(&self, input: &FormInput) -> Result<RelayResponse, TransportError> {
            (**self).send(input).await
        }
    }

    #[derive(Default)]
    struct StalledRelay {
        calls: Cell<usize>,
    }

    impl FormRelay for StalledRelay {
        async fn send(&self, _input: &FormInput) -> Result<RelayResponse, TransportError> {
            self.calls.set(self.calls.get() + 1);
            futures::future::pending().await
        }
    }

    fn tomorrow() -> String {
        (Local::now().date_naive() + chrono::Duration::days(1))
            .format("%Y-%m-%d")
            .to_string()
    }

    fn valid_input() -> FormInput {
        FormInput {
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            phone: "9876543210".to_string(),
            service: Some("Consulting".to_string()),
            date: Some(tomorrow()),
        }
    }

    fn handles(page: &Rc<Page>) -> FormHandles {
        FormHandles {
            fields: page.clone(),
            control: page.clone(),
            messages: page.clone(),
            scheduler: page.clone(),
        }
    }

    fn controller(page: &Rc<Page>, relay: Rc<FakeRelay>) -> AppointmentController<Rc<FakeRelay>> {
        AppointmentController::new(handles(page), relay, FormConfig::default())
    }

    fn accepted() -> Result<RelayResponse, TransportError> {
        Ok(RelayResponse { success: true, message: None })
    }

    #[test]
    fn success_clears_fields_and_auto_hides() {
        let page = Page::new(valid_input());
        let relay = Rc::new(FakeRelay::new(&page, accepted()));
        let controller = controller(&page, relay.clone());

        let attempt = block_on(controller.handle_submit());

        assert_eq!(attempt, SubmitAttempt::Completed(SubmissionOutcome::success()));
        assert_eq!(relay.calls.get(), 1);
        assert_eq!(page.last_message().unwrap().style, MessageStyle::Success);
        assert_eq!(page.resets.get(), 1);
        assert_eq!(*page.input.borrow(), FormInput::default());

        assert!(page.visible.get());
        assert_eq!(page.timers.borrow().len(), 1);
        assert_eq!(page.timers.borrow()[0].0, 5000);
        page.fire_timers();
        assert!(!page.visible.get());
    }

    #[test]
    fn server_rejection_shows_detail_and_keeps_fields() {
        let page = Page::new(valid_input());
        let reply = Ok(RelayResponse { success: false, message: Some("Slot full".to_string()) });
        let relay = Rc::new(FakeRelay::new(&page, reply));
        let controller = controller(&page, relay);

        block_on(controller.handle_submit());

        let message = page.last_message().unwrap();
        assert_eq!(message.text, "Error: Slot full");
        assert_eq!(message.style, MessageStyle::Error);
        assert_eq!(page.resets.get(), 0);
        assert_eq!(*page.input.borrow(), valid_input());
        assert!(page.timers.borrow().is_empty());
    }

    #[test]
    fn transport_failure_shows_network_warning() {
        let page = Page::new(valid_input());
        let reply = Err(TransportError::Request("dns lookup failed".to_string()));
        let relay = Rc::new(FakeRelay::new(&page, reply));
        let controller = controller(&page, relay);

        let attempt = block_on(controller.handle_submit());

        assert_eq!(attempt, SubmitAttempt::Completed(SubmissionOutcome::network_error()));
        let message = page.last_message().unwrap();
        assert_eq!(message.text, NETWORK_ERROR_TEXT);
        assert_eq!(message.style, MessageStyle::Warning);
        assert_eq!(page.resets.get(), 0);
    }

    #[test]
    fn malformed_response_counts_as_network_error() {
        let page = Page::new(valid_input());
        let reply = Err(TransportError::MalformedResponse("expected value".to_string()));
        let relay = Rc::new(FakeRelay::new(&page, reply));
        let controller = controller(&page, relay);

        assert_eq!(
            block_on(controller.handle_submit()),
            SubmitAttempt::Completed(SubmissionOutcome::network_error())
        );
    }

    #[test]
    fn invalid_input_never_reaches_the_relay() {
        let page = Page::new(FormInput { name: "J".to_string(), ..valid_input() });
        let relay = Rc::new(FakeRelay::new(&page, accepted()));
        let controller = controller(&page, relay.clone());

        let attempt = block_on(controller.handle_submit());

        assert_eq!(attempt, SubmitAttempt::Invalid(ValidationError::Name));
        assert_eq!(relay.calls.get(), 0);
        assert!(page.applied.borrow().is_empty());
        assert!(!controller.state().is_busy());
        let message = page.last_message().unwrap();
        assert_eq!(message.text, "Please enter your full name.");
        assert_eq!(message.style, MessageStyle::Warning);
    }

    #[test]
    fn control_is_busy_while_sending_and_idle_after_every_outcome() {
        let replies = [
            accepted(),
            Ok(RelayResponse { success: false, message: None }),
            Err(TransportError::Request("offline".to_string())),
        ];
        for reply in replies {
            let page = Page::new(valid_input());
            let relay = Rc::new(FakeRelay::new(&page, reply));
            let controller = controller(&page, relay.clone());

            block_on(controller.handle_submit());

            assert!(relay.busy_during_send.get());
            assert_eq!(
                *page.applied.borrow(),
                vec![
                    ControlState::Busy,
                    ControlState::Idle { label: "Request Appointment".to_string() },
                ]
            );
            assert_eq!(*page.label.borrow(), "Request Appointment");
            assert!(!controller.state().is_busy());
        }
    }

    #[test]
    fn abandoned_request_still_restores_the_control() {
        let page = Page::new(valid_input());
        let controller = AppointmentController::new(handles(&page), StalledRelay::default(), FormConfig::default());

        let mut pending = Box::pin(controller.handle_submit());
        let waker = futures::task::noop_waker();
        let mut cx = Context::from_waker(&waker);
        assert!(pending.as_mut().poll(&mut cx).is_pending());
        assert!(controller.state().is_busy());
        assert_eq!(*page.label.borrow(), "Sending...");

        drop(pending);
        assert!(!controller.state().is_busy());
        assert_eq!(*page.label.borrow(), "Request Appointment");
        assert!(!controller.in_flight.get());
    }

    #[test]
    fn direct_send_while_pending_keeps_the_first_request_busy() {
        let page = Page::new(valid_input());
        let controller = AppointmentController::new(handles(&page), StalledRelay::default(), FormConfig::default());

        let input = valid_input();
        let mut first = Box::pin(controller.submit(&input));
        let waker = futures::task::noop_waker();
        let mut cx = Context::from_waker(&waker);
        assert!(first.as_mut().poll(&mut cx).is_pending());
        assert!(controller.state().is_busy());

        assert_eq!(block_on(controller.submit(&input)), None);
        assert_eq!(controller.relay.calls.get(), 1);
        assert!(controller.state().is_busy());
        assert!(controller.in_flight.get());
        assert_eq!(*page.label.borrow(), "Sending...");
        assert!(page.shown.borrow().is_empty());

        drop(first);
        assert!(!controller.state().is_busy());
        assert!(!controller.in_flight.get());
        assert_eq!(*page.label.borrow(), "Request Appointment");
    }

    #[test]
    fn newer_message_is_not_hidden_by_an_older_timer() {
        let page = Page::new(valid_input());
        let relay = Rc::new(FakeRelay::new(&page, accepted()));
        let controller = controller(&page, relay);

        block_on(controller.handle_submit());
        assert_eq!(page.timers.borrow().len(), 1);

        // Fields were cleared, so the next press fails validation.
        block_on(controller.handle_submit());
        assert_eq!(page.last_message().unwrap().text, "Please enter your full name.");

        page.fire_timers();
        assert!(page.visible.get());
    }

    #[test]
    fn second_success_rearms_its_own_timer() {
        let page = Page::new(valid_input());
        let relay = Rc::new(FakeRelay::new(&page, accepted()));
        let controller = controller(&page, relay.clone());

        block_on(controller.handle_submit());
        *page.input.borrow_mut() = valid_input();
        block_on(controller.handle_submit());

        assert_eq!(relay.calls.get(), 2);
        assert_eq!(page.timers.borrow().len(), 2);
        page.fire_timers();
        assert!(!page.visible.get());
    }

    #[test]
    fn submit_while_in_flight_is_ignored() {
        let page = Page::new(valid_input());
        let relay = Rc::new(FakeRelay::new(&page, accepted()));
        let controller = controller(&page, relay.clone());

        controller.in_flight.set(true);
        assert_eq!(block_on(controller.handle_submit()), SubmitAttempt::Ignored);
        assert_eq!(relay.calls.get(), 0);
        assert!(page.shown.borrow().is_empty());
    }

    #[test]
    fn past_dates_are_judged_against_the_injected_day() {
        let page = Page::new(FormInput { date: Some("2030-01-01".to_string()), ..valid_input() });
        let relay = Rc::new(FakeRelay::new(&page, accepted()));
        let controller = controller(&page, relay.clone())
            .with_today(|| NaiveDate::from_ymd_opt(2030, 1, 2).unwrap());

        assert_eq!(
            block_on(controller.handle_submit()),
            SubmitAttempt::Invalid(ValidationError::Date)
        );
        assert_eq!(relay.calls.get(), 0);
    }
}
