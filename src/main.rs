use log::info;
use yew::prelude::*;

mod appointment;
mod config;
mod site {
    pub mod effects;
    pub mod fade;
    pub mod nav;
    pub mod pulse;
}
mod components {
    pub mod appointment_form;
}
mod pages {
    pub mod landing;
}

use pages::landing::Landing;

#[function_component]
fn App() -> Html {
    html! {
        <Landing />
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
