use crate::dom;
use crate::timer::Debounce;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Run `handler` on every window resize.
pub fn on_resize(mut handler: impl FnMut() + 'static) {
    if let Some(window) = web::window() {
        dom::listen(&window, "resize", move |_: web::Event| handler());
    }
}

/// Run `handler` once resizing has settled for `delay_ms`.
pub fn on_resize_debounced(delay_ms: i32, handler: impl FnMut() + 'static) {
    let handler = Rc::new(RefCell::new(handler));
    let debounce = RefCell::new(Debounce::new(delay_ms));
    on_resize(move || {
        let handler = handler.clone();
        debounce
            .borrow_mut()
            .schedule(move || (&mut *handler.borrow_mut())());
    });
}
