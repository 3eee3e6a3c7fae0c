use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::core::GlowState;
use crate::dom;
use crate::render::GlowLayer;

/// Records pointer positions as the glow's follow target. The frame loop
/// alone consumes the target; nothing is drawn from the handler.
pub fn wire_pointermove(window: &web::Window, state: Rc<RefCell<GlowState>>) {
    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        state
            .borrow_mut()
            .set_target(ev.client_x() as f64, ev.client_y() as f64);
    }) as Box<dyn FnMut(_)>);
    let _ = window.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Keeps the glow state and the canvas backing store in sync with the
/// viewport and device pixel ratio.
pub fn wire_resize(window: &web::Window, state: Rc<RefCell<GlowState>>, layer: Rc<GlowLayer>) {
    let window_for_resize = window.clone();
    let closure = Closure::wrap(Box::new(move || {
        let viewport = dom::viewport_snapshot(&window_for_resize);
        state.borrow_mut().set_viewport(viewport);
        if let Err(e) = layer.sync_backing_size(&viewport) {
            log::error!("glow resize failed: {:?}", e);
        }
    }) as Box<dyn FnMut()>);
    let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    closure.forget();
}
