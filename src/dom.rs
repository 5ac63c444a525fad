use crate::constants::DEV_HOSTS;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Match the canvas backing buffer to its displayed box (CSS pixels, so
/// pointer coordinates and drawing coordinates share one space).
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) -> (f64, f64) {
    let w_px = canvas.offset_width().max(0) as u32;
    let h_px = canvas.offset_height().max(0) as u32;
    canvas.set_width(w_px);
    canvas.set_height(h_px);
    (w_px as f64, h_px as f64)
}

pub fn is_dev_host() -> bool {
    web::window()
        .and_then(|w| w.location().hostname().ok())
        .map(|h| DEV_HOSTS.contains(&h.as_str()))
        .unwrap_or(false)
}

/// An attached event listener; detached again when dropped.
pub struct EventListener {
    target: web::EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl EventListener {
    pub fn new(
        target: &web::EventTarget,
        event: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> Self {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        Self {
            target: target.clone(),
            event,
            closure,
        }
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}
