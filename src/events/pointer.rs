use crate::dom::EventListener;
use crate::frame::FrameContext;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Surface-local position of a pointer event.
#[inline]
pub fn pointer_canvas_px(
    ev: &web::PointerEvent,
    canvas: &web::HtmlCanvasElement,
) -> (f64, f64) {
    let rect = canvas.get_bounding_client_rect();
    (
        ev.client_x() as f64 - rect.left(),
        ev.client_y() as f64 - rect.top(),
    )
}

/// Feed raw pointer moves over the canvas into the field. No smoothing.
pub fn wire_pointer(
    canvas: &web::HtmlCanvasElement,
    frame_ctx: &Rc<RefCell<FrameContext>>,
) -> EventListener {
    let frame_ctx = frame_ctx.clone();
    EventListener::new(canvas, "pointermove", move |ev: web::Event| {
        let Some(ev) = ev.dyn_ref::<web::PointerEvent>() else {
            return;
        };
        let mut ctx = frame_ctx.borrow_mut();
        let (x, y) = pointer_canvas_px(ev, &ctx.canvas);
        ctx.driver.set_pointer(x, y);
    })
}
