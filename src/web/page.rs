//! Page effects wiring
//!
//! Each effect looks up its elements once at startup and attaches its
//! listeners. Missing elements disable that effect only.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::WasmClosure;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, EventTarget, HtmlElement, MouseEvent, NodeList, Window};

use crate::consts::{CURSOR_OUTLINE_LAG_MS, DUST_LIFETIME_MS};
use crate::effects::cursor::CursorTarget;
use crate::effects::{DustTrail, SectionBounds, Tilt, active_section, link_matches, should_reveal};

// Element.animate with a forwards fill; keyframe objects are simpler to build in JS
#[wasm_bindgen(inline_js = "
    export function animate_to(el, left, top, duration) {
        el.animate({ left: left, top: top }, { duration: duration, fill: 'forwards' });
    }
")]
extern "C" {
    fn animate_to(el: &HtmlElement, left: &str, top: &str, duration: f64);
}

/// Attach every page effect
pub fn install(window: &Window, document: &Document, seed: u64) -> Result<(), JsValue> {
    setup_nav_highlight(window, document)?;
    setup_scroll_reveal(window, document)?;
    setup_footer_year(document);
    setup_cursor(window, document)?;
    setup_card_tilt(document)?;
    setup_dust_trail(window, document, seed)?;
    setup_hover_state(document)?;
    Ok(())
}

fn attach<T>(target: &EventTarget, event: &str, closure: Closure<T>) -> Result<(), JsValue>
where
    T: ?Sized + WasmClosure,
{
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

fn elements(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

fn select_all(document: &Document, selector: &str) -> Result<Vec<Element>, JsValue> {
    Ok(elements(&document.query_selector_all(selector)?))
}

fn set_style(el: &HtmlElement, name: &str, value: &str) {
    if let Err(e) = el.style().set_property(name, value) {
        log::warn!("Failed to set {}: {:?}", name, e);
    }
}

fn setup_nav_highlight(window: &Window, document: &Document) -> Result<(), JsValue> {
    let sections: Vec<HtmlElement> = select_all(document, "section")?
        .into_iter()
        .filter_map(|el| el.dyn_into::<HtmlElement>().ok())
        .collect();
    let links = select_all(document, ".nav-links li")?;
    if sections.is_empty() || links.is_empty() {
        log::debug!("No sections or nav links, skipping nav highlight");
        return Ok(());
    }

    let win = window.clone();
    let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
        let scroll_y = win.scroll_y().unwrap_or(0.0);
        let bounds: Vec<SectionBounds> = sections
            .iter()
            .map(|s| SectionBounds {
                id: s.get_attribute("id"),
                top: s.offset_top() as f64,
                height: s.client_height() as f64,
            })
            .collect();
        let current = active_section(scroll_y, &bounds);

        for li in &links {
            let _ = li.class_list().remove_1("active");
            let href = li
                .query_selector("a")
                .ok()
                .flatten()
                .and_then(|a| a.get_attribute("href"))
                .unwrap_or_default();
            if link_matches(&href, current) {
                let _ = li.class_list().add_1("active");
            }
        }
    });
    attach(window, "scroll", closure)
}

fn setup_scroll_reveal(window: &Window, document: &Document) -> Result<(), JsValue> {
    let targets = select_all(document, ".scroll-reveal")?;
    if targets.is_empty() {
        return Ok(());
    }

    let win = window.clone();
    let reveal = move || {
        let window_height = win
            .inner_height()
            .ok()
            .and_then(|h| h.as_f64())
            .unwrap_or(0.0);
        for el in &targets {
            if should_reveal(el.get_bounding_client_rect().top(), window_height) {
                let _ = el.class_list().add_1("visible");
            }
        }
    };

    // Reveal whatever is already on screen
    reveal();

    let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| reveal());
    attach(window, "scroll", closure)
}

fn setup_footer_year(document: &Document) {
    if let Some(el) = document.get_element_by_id("year") {
        let year = js_sys::Date::new_0().get_full_year();
        el.set_text_content(Some(&year.to_string()));
    }
}

fn query_html(document: &Document, selector: &str) -> Option<HtmlElement> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

fn setup_cursor(window: &Window, document: &Document) -> Result<(), JsValue> {
    let (Some(dot), Some(outline)) = (
        query_html(document, ".cursor-dot"),
        query_html(document, ".cursor-outline"),
    ) else {
        log::debug!("No cursor elements, skipping custom cursor");
        return Ok(());
    };

    let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
        let target = CursorTarget::new(event.client_x() as f64, event.client_y() as f64);
        let (left, top) = target.position();

        // Dot jumps, outline eases in behind it
        set_style(&dot, "left", &left);
        set_style(&dot, "top", &top);
        animate_to(&outline, &left, &top, CURSOR_OUTLINE_LAG_MS);
    });
    attach(window, "mousemove", closure)
}

fn setup_card_tilt(document: &Document) -> Result<(), JsValue> {
    let cards: Vec<HtmlElement> = select_all(document, ".glass-card")?
        .into_iter()
        .filter_map(|el| el.dyn_into::<HtmlElement>().ok())
        .collect();

    for card in cards {
        {
            let card_clone = card.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let rect = card_clone.get_bounding_client_rect();
                let x = event.client_x() as f64 - rect.left();
                let y = event.client_y() as f64 - rect.top();
                let tilt = Tilt::from_pointer(x, y, rect.width(), rect.height());
                set_style(&card_clone, "transform", &tilt.transform_css());
            });
            attach(&card, "mousemove", closure)?;
        }

        {
            let card_clone = card.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                set_style(&card_clone, "transform", &Tilt::rest_css());
            });
            attach(&card, "mouseleave", closure)?;
        }
    }
    Ok(())
}

fn setup_dust_trail(window: &Window, document: &Document, seed: u64) -> Result<(), JsValue> {
    let Some(body) = document.body() else {
        return Ok(());
    };
    let trail = Rc::new(RefCell::new(DustTrail::seeded(seed)));
    let win = window.clone();
    let doc = document.clone();

    let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
        let Some(particle) = trail
            .borrow_mut()
            .on_pointer_move(event.client_x() as f64, event.client_y() as f64)
        else {
            return;
        };

        let el = match doc
            .create_element("div")
            .and_then(|el| el.dyn_into::<HtmlElement>().map_err(JsValue::from))
        {
            Ok(el) => el,
            Err(e) => {
                log::warn!("Failed to create dust particle: {:?}", e);
                return;
            }
        };
        let _ = el.class_list().add_1("particle");
        for (name, value) in particle.style() {
            set_style(&el, name, &value);
        }
        if let Err(e) = body.append_child(&el) {
            log::warn!("Failed to attach dust particle: {:?}", e);
            return;
        }

        let particle_el = el.clone();
        let cleanup = Closure::once(move || particle_el.remove());
        if let Err(e) = win.set_timeout_with_callback_and_timeout_and_arguments_0(
            cleanup.as_ref().unchecked_ref(),
            DUST_LIFETIME_MS,
        ) {
            // No timer will fire, so drop the particle now
            log::warn!("Failed to schedule dust cleanup: {:?}", e);
            el.remove();
            return;
        }
        cleanup.forget();
    });
    attach(document, "mousemove", closure)
}

fn setup_hover_state(document: &Document) -> Result<(), JsValue> {
    let Some(body) = document.body() else {
        return Ok(());
    };

    for el in select_all(document, "a, button, .glass-card, .floating-dock")? {
        {
            let body = body.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                let _ = body.class_list().add_1("hovering");
            });
            attach(&el, "mouseenter", closure)?;
        }
        {
            let body = body.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                let _ = body.class_list().remove_1("hovering");
            });
            attach(&el, "mouseleave", closure)?;
        }
    }
    Ok(())
}
