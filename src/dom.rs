use anyhow::anyhow;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::core::Viewport;

/// Builds an element with the given attributes and children, in document
/// order.
pub fn build_element(
    document: &web::Document,
    tag: &str,
    attrs: &[(&str, &str)],
    children: &[&web::Element],
) -> anyhow::Result<web::Element> {
    let element = document
        .create_element(tag)
        .map_err(|e| anyhow!("create <{}>: {:?}", tag, e))?;
    for (name, value) in attrs {
        element
            .set_attribute(name, value)
            .map_err(|e| anyhow!("set {} on <{}>: {:?}", name, tag, e))?;
    }
    for child in children {
        element
            .append_child(child)
            .map_err(|e| anyhow!("append child to <{}>: {:?}", tag, e))?;
    }
    Ok(element)
}

#[inline]
pub fn add_click_listener(target: &web::EventTarget, mut handler: impl FnMut() + 'static) {
    let closure =
        wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    let _ = target.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

#[inline]
pub fn add_input_listener(target: &web::EventTarget, mut handler: impl FnMut() + 'static) {
    let closure =
        wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    let _ = target.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Current window viewport in CSS pixels plus the device pixel ratio.
pub fn viewport_snapshot(window: &web::Window) -> Viewport {
    let width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let dpr = window.device_pixel_ratio();
    let dpr = if dpr > 0.0 { dpr } else { 1.0 };
    Viewport::new(width, height, dpr)
}
