use gloo_timers::callback::Timeout;
use yew::prelude::*;
use yew_hooks::prelude::*;

use super::effects::{PULSE_DURATION_MS, PULSE_INTERVAL_MS};

pub const PULSE_KEYFRAMES: &str = r#"
    @keyframes pulse {
        0% { transform: scale(1); box-shadow: 0 5px 20px rgba(37, 211, 102, 0.3); }
        50% { transform: scale(1.05); box-shadow: 0 8px 25px rgba(37, 211, 102, 0.5); }
        100% { transform: scale(1); box-shadow: 0 5px 20px rgba(37, 211, 102, 0.3); }
    }
"#;

#[derive(Properties, PartialEq)]
pub struct WhatsAppButtonProps {
    pub href: AttrValue,
}

#[function_component(WhatsAppButton)]
pub fn whatsapp_button(props: &WhatsAppButtonProps) -> Html {
    let pulsing = use_state_eq(|| false);

    {
        let pulsing = pulsing.clone();
        use_interval(
            move || {
                pulsing.set(true);
                let pulsing = pulsing.clone();
                Timeout::new(PULSE_DURATION_MS, move || pulsing.set(false)).forget();
            },
            PULSE_INTERVAL_MS,
        );
    }

    let style = if *pulsing { "animation: pulse 1s;" } else { "" };

    html! {
        <a class="whatsapp-btn" href={props.href.clone()} target="_blank" rel="noopener noreferrer" style={style}>
            <i class="fab fa-whatsapp"></i>
        </a>
    }
}
