use crate::constants::POINTER_IDLE_MS;
use crate::dom;
use crate::timer::Debounce;
use linktree_core::ParticleField;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Feed mouse and touch movement into the field's pointer, and mark it idle
/// once movement has stopped for `POINTER_IDLE_MS`.
pub fn wire_pointer_tracking(document: &web::Document, field: Rc<RefCell<ParticleField>>) {
    let idle = Rc::new(RefCell::new(Debounce::new(POINTER_IDLE_MS)));

    let on_move = {
        let field = field.clone();
        let idle = idle.clone();
        move |x: f32, y: f32| {
            field.borrow_mut().pointer_moved(x, y);
            let field_idle = field.clone();
            idle.borrow_mut().schedule(move || {
                field_idle.borrow_mut().pointer_idle();
            });
        }
    };

    let mouse_move = on_move.clone();
    dom::listen(document, "mousemove", move |ev: web::MouseEvent| {
        mouse_move(ev.client_x() as f32, ev.client_y() as f32);
    });

    dom::listen_passive(document, "touchmove", move |ev: web::TouchEvent| {
        if let Some(touch) = ev.touches().get(0) {
            on_move(touch.client_x() as f32, touch.client_y() as f32);
        }
    });
}
