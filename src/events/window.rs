use crate::dom::{self, EventListener};
use crate::frame::FrameContext;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Re-measure the canvas on window resize and respawn the particle set.
pub fn wire_resize(window: &web::Window, frame_ctx: &Rc<RefCell<FrameContext>>) -> EventListener {
    let frame_ctx = frame_ctx.clone();
    EventListener::new(window, "resize", move |_ev: web::Event| {
        let mut ctx = frame_ctx.borrow_mut();
        let (w, h) = dom::sync_canvas_backing_size(&ctx.canvas);
        ctx.driver.resize(w, h);
        log::debug!(
            "[backdrop] resized to {}x{}, particles={}",
            w,
            h,
            ctx.driver.field().particles().len()
        );
    })
}

/// Pause the loop while the page is hidden and resume it on return.
pub fn wire_visibility(
    document: &web::Document,
    frame_ctx: &Rc<RefCell<FrameContext>>,
) -> EventListener {
    let frame_ctx = frame_ctx.clone();
    let doc = document.clone();
    EventListener::new(document, "visibilitychange", move |_ev: web::Event| {
        frame_ctx.borrow_mut().set_hidden(doc.hidden());
    })
}
