use yew::prelude::*;

use crate::components::appointment_form::AppointmentForm;
use crate::config::{SERVICES, SITE_NAME, WHATSAPP_URL};
use crate::site::fade::use_fade_in;
use crate::site::nav::{anchor_click, Navbar};
use crate::site::pulse::{WhatsAppButton, PULSE_KEYFRAMES};

#[derive(Properties, PartialEq)]
pub struct ServiceCardProps {
    pub title: AttrValue,
    pub icon: &'static str,
}

#[function_component(ServiceCard)]
pub fn service_card(props: &ServiceCardProps) -> Html {
    let hovered = use_state_eq(|| false);
    let onmouseenter = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(true))
    };
    let onmouseleave = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(false))
    };
    let style = if *hovered { "transform: translateY(-10px);" } else { "transform: translateY(0);" };

    html! {
        <div class="service-card fade-in" style={style} onmouseenter={onmouseenter} onmouseleave={onmouseleave}>
            <i class={props.icon}></i>
            <h3>{props.title.clone()}</h3>
        </div>
    }
}

fn service_icon(index: usize) -> &'static str {
    match index {
        0 => "fas fa-comments",
        1 => "fas fa-chess",
        _ => "fas fa-calendar-check",
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    use_fade_in();

    use_effect_with_deps(
        |_| {
            gloo_console::log!("Website initialized successfully!");
            || ()
        },
        (),
    );

    html! {
        <>
            <style>{PULSE_KEYFRAMES}</style>
            <style>
                {r#"
                    .navbar {
                        position: fixed;
                        top: 0;
                        width: 100%;
                        z-index: 100;
                        background: transparent;
                        transition: background 0.3s ease, box-shadow 0.3s ease;
                    }
                    .navbar.scrolled {
                        background: #ffffff;
                        box-shadow: 0 2px 10px rgba(0, 0, 0, 0.1);
                    }
                    .nav-links a.active {
                        color: #2e86de;
                    }
                    .mobile-menu-btn {
                        display: none;
                    }
                    @media (max-width: 768px) {
                        .mobile-menu-btn { display: block; }
                        .nav-links { display: none; }
                        .nav-links.active { display: flex; flex-direction: column; }
                    }
                    .fade-in {
                        opacity: 0;
                        transform: translateY(20px);
                        transition: opacity 0.6s ease, transform 0.6s ease;
                    }
                    .service-card {
                        transition: transform 0.3s ease;
                    }
                    .form-message {
                        margin-top: 1rem;
                        padding: 0.75rem 1rem;
                        border-radius: 8px;
                    }
                    .whatsapp-btn {
                        position: fixed;
                        right: 24px;
                        bottom: 24px;
                        width: 56px;
                        height: 56px;
                        border-radius: 50%;
                        background: #25d366;
                        color: #ffffff;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        box-shadow: 0 5px 20px rgba(37, 211, 102, 0.3);
                    }
                "#}
            </style>
            <Navbar />
            <section id="home" class="hero">
                <div class="hero-content fade-in">
                    <h1>{SITE_NAME}</h1>
                    <p>{"Advice that fits your schedule. Book a session in under a minute."}</p>
                    <a href="#appointment" class="btn btn-primary" onclick={anchor_click("#appointment")}>
                        {"Book an Appointment"}
                    </a>
                </div>
            </section>
            <section id="services" class="services">
                <h2 class="fade-in">{"Services"}</h2>
                <div class="services-grid">
                    { for SERVICES.iter().enumerate().map(|(i, service)| html! {
                        <ServiceCard title={*service} icon={service_icon(i)} />
                    }) }
                </div>
            </section>
            <section id="about" class="about">
                <div class="fade-in">
                    <h2>{"About"}</h2>
                    <p>{"We are a small team that keeps things personal: one conversation, one plan, no upsell."}</p>
                </div>
            </section>
            <section id="appointment" class="appointment">
                <div class="fade-in">
                    <h2>{"Request an Appointment"}</h2>
                    <p>{"Leave your details and we will get back to you to confirm a time."}</p>
                </div>
                <AppointmentForm />
            </section>
            <section id="contact" class="contact">
                <div class="fade-in">
                    <h2>{"Contact"}</h2>
                    <p>{"Prefer to chat? Message us on WhatsApp any time."}</p>
                </div>
            </section>
            <footer class="footer">
                <p>{format!("© {}", SITE_NAME)}</p>
            </footer>
            <WhatsAppButton href={WHATSAPP_URL} />
        </>
    }
}
