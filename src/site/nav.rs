use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;
use yew_hooks::prelude::*;

use super::effects::{
    active_section, anchor_target, is_scrolled, menu_icon_class, scroll_destination, SectionSpan,
};
use crate::config::SITE_NAME;

pub const NAV_LINKS: &[(&str, &str)] = &[
    ("#home", "Home"),
    ("#services", "Services"),
    ("#about", "About"),
    ("#appointment", "Book"),
    ("#contact", "Contact"),
];

fn section_spans() -> Vec<SectionSpan> {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return Vec::new();
    };
    let Ok(sections) = document.query_selector_all("section[id]") else {
        return Vec::new();
    };

    (0..sections.length())
        .filter_map(|i| sections.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .map(|section| SectionSpan {
            id: section.id(),
            offset_top: section.offset_top() as f64,
            height: section.offset_height() as f64,
        })
        .collect()
}

fn navbar_height() -> f64 {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.query_selector(".navbar").ok().flatten())
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .map(|navbar| navbar.offset_height() as f64)
        .unwrap_or(0.0)
}

/// Smoothly scrolls to the section an in-page link points at, leaving room
/// for the fixed navbar. Returns false when there is nothing to scroll to.
pub fn scroll_to_anchor(href: &str) -> bool {
    let Some(id) = anchor_target(href) else {
        return false;
    };
    let Some(window) = web_sys::window() else {
        return false;
    };
    let Some(target) = window.document().and_then(|d| d.get_element_by_id(id)) else {
        return false;
    };

    let top = scroll_destination(
        target.get_bounding_client_rect().top(),
        window.scroll_y().unwrap_or(0.0),
        navbar_height(),
    );
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
    true
}

pub fn anchor_click(href: &'static str) -> Callback<MouseEvent> {
    Callback::from(move |e: MouseEvent| {
        if scroll_to_anchor(href) {
            e.prevent_default();
        }
    })
}

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let menu_open = use_state_eq(|| false);
    let scrolled = use_state_eq(|| false);
    let active = use_state_eq(|| None::<String>);

    {
        let scrolled = scrolled.clone();
        let active = active.clone();
        use_event_with_window("scroll", move |_: Event| {
            let scroll_y = web_sys::window()
                .and_then(|w| w.scroll_y().ok())
                .unwrap_or(0.0);
            scrolled.set(is_scrolled(scroll_y));
            active.set(active_section(scroll_y, &section_spans()).map(str::to_string));
        });
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };

    let links = NAV_LINKS
        .iter()
        .map(|(href, label)| {
            let onclick = {
                let menu_open = menu_open.clone();
                Callback::from(move |e: MouseEvent| {
                    menu_open.set(false);
                    if scroll_to_anchor(href) {
                        e.prevent_default();
                    }
                })
            };
            let is_active = anchor_target(href) == (*active).as_deref();
            html! {
                <li>
                    <a href={*href} class={classes!(is_active.then(|| "active"))} onclick={onclick}>{*label}</a>
                </li>
            }
        })
        .collect::<Html>();

    html! {
        <nav class={classes!("navbar", (*scrolled).then(|| "scrolled"))}>
            <div class="nav-container">
                <a href="#home" class="logo" onclick={anchor_click("#home")}>{SITE_NAME}</a>
                <ul id="navLinks" class={classes!("nav-links", (*menu_open).then(|| "active"))}>
                    {links}
                </ul>
                <button id="mobileMenuBtn" class="mobile-menu-btn" onclick={toggle_menu}>
                    <i class={menu_icon_class(*menu_open)}></i>
                </button>
            </div>
        </nav>
    }
}
