use glam::DVec2;
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

use crate::constants::{GLOW_SHADOW, GLOW_TINT_CORE, GLOW_TINT_EDGE, GLOW_TINT_MID, GLOW_Z_INDEX};
use crate::core::Viewport;

/// Failure to construct the glow layer. Raised synchronously from
/// [`GlowLayer::new`]; the page decides whether to continue without the
/// decorative background.
#[derive(Debug, Error)]
pub enum GlowInitError {
    #[error("2d canvas context unavailable")]
    ContextUnavailable,
    #[error("dom operation failed: {0}")]
    Dom(String),
}

impl From<JsValue> for GlowInitError {
    fn from(value: JsValue) -> Self {
        Self::Dom(format!("{:?}", value))
    }
}

/// Full-viewport canvas that renders the cursor glow behind the page.
pub struct GlowLayer {
    container: web::Element,
    canvas: web::HtmlCanvasElement,
    context: web::CanvasRenderingContext2d,
}

impl GlowLayer {
    /// Creates the container, canvas, and foreground overlay, and acquires
    /// the 2d context. The canvas is fixed, stacked behind all content, and
    /// never receives pointer events.
    pub fn new(document: &web::Document) -> Result<Self, GlowInitError> {
        let container = document.create_element("div")?;
        container.set_class_name("shader-container");

        let canvas = document
            .create_element("canvas")?
            .dyn_into::<web::HtmlCanvasElement>()
            .map_err(|e| GlowInitError::Dom(format!("not a canvas: {:?}", e)))?;
        canvas.set_id("shader-background");

        let style = canvas.style();
        style.set_property("position", "fixed")?;
        style.set_property("top", "0")?;
        style.set_property("left", "0")?;
        style.set_property("width", "100vw")?;
        style.set_property("height", "100vh")?;
        style.set_property("z-index", GLOW_Z_INDEX)?;
        style.set_property("pointer-events", "none")?;

        let context = canvas
            .get_context("2d")
            .map_err(|_| GlowInitError::ContextUnavailable)?
            .ok_or(GlowInitError::ContextUnavailable)?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|_| GlowInitError::ContextUnavailable)?;

        let overlay = document.create_element("div")?;
        overlay.set_id("shader-foreground-overlay");

        container.append_child(&canvas)?;
        container.append_child(&overlay)?;

        Ok(Self {
            container,
            canvas,
            context,
        })
    }

    /// Element to insert into the document; the layer's only exposed surface.
    pub fn container(&self) -> &web::Element {
        &self.container
    }

    /// Matches the backing store to the viewport and rescales the context so
    /// drawing stays in CSS pixels. Safe to call repeatedly with the same
    /// dimensions.
    pub fn sync_backing_size(&self, viewport: &Viewport) -> Result<(), JsValue> {
        let style = self.canvas.style();
        style.set_property("width", &format!("{}px", viewport.width))?;
        style.set_property("height", &format!("{}px", viewport.height))?;
        let (width, height) = viewport.backing_size();
        // Assigning width/height resets the context transform, so the
        // device-pixel scale must be reapplied afterwards.
        self.canvas.set_width(width.max(1));
        self.canvas.set_height(height.max(1));
        self.context.scale(viewport.dpr, viewport.dpr)?;
        Ok(())
    }

    /// Draws one frame: full clear, then a three-stop radial gradient circle
    /// at the smoothed center.
    pub fn draw(
        &self,
        center: DVec2,
        radius: f64,
        blur: f64,
        viewport: &Viewport,
    ) -> Result<(), JsValue> {
        let ctx = &self.context;
        ctx.clear_rect(0.0, 0.0, viewport.width, viewport.height);

        let gradient = ctx.create_radial_gradient(
            center.x,
            center.y,
            0.0,
            center.x,
            center.y,
            radius + blur,
        )?;
        gradient.add_color_stop(0.0, GLOW_TINT_CORE)?;
        gradient.add_color_stop(0.5, GLOW_TINT_MID)?;
        gradient.add_color_stop(1.0, GLOW_TINT_EDGE)?;

        ctx.set_shadow_color(GLOW_SHADOW);
        ctx.set_shadow_blur(blur);
        ctx.begin_path();
        ctx.set_fill_style_canvas_gradient(&gradient);
        ctx.arc(center.x, center.y, radius, 0.0, std::f64::consts::TAU)?;
        ctx.fill();
        // Shadow state must not leak into later draws on this context.
        ctx.set_shadow_blur(0.0);

        Ok(())
    }
}
