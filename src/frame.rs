use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

use crate::core::GlowState;
use crate::render::GlowLayer;

/// Everything one animation frame needs.
pub struct FrameContext {
    pub state: Rc<RefCell<GlowState>>,
    pub layer: Rc<GlowLayer>,
}

impl FrameContext {
    /// Advances the glow state and redraws. The state borrow is released
    /// before the canvas is touched.
    pub fn frame(&mut self) -> Result<(), JsValue> {
        let (center, radius, blur, viewport) = {
            let mut state = self.state.borrow_mut();
            state.step();
            (
                state.current,
                state.radius(),
                state.blur_radius,
                state.viewport,
            )
        };
        self.layer.draw(center, radius, blur, &viewport)
    }
}

/// Starts the self-rescheduling requestAnimationFrame loop. A failed frame
/// is logged and skipped; the loop itself keeps running.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if let Err(e) = frame_ctx.borrow_mut().frame() {
            log::error!("glow frame error: {:?}", e);
        }
        if let Some(w) = web::window() {
            _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
