pub mod controller;
pub mod dom;
pub mod form;
pub mod message;
pub mod relay;
pub mod validation;

pub use controller::{AppointmentController, ControlState, FormHandles};
pub use message::FormMessage;
pub use relay::Web3FormsRelay;
