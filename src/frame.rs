use crate::schedule::FrameSlot;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// `requestAnimationFrame` loop around a per-frame callback.
///
/// Each frame schedules the next one. `stop` cancels the pending frame and
/// `start` resumes; starting an already running loop does nothing.
#[derive(Clone)]
pub struct AnimationLoop {
    tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
    pending: Rc<RefCell<FrameSlot>>,
}

impl AnimationLoop {
    pub fn new(mut on_frame: impl FnMut() + 'static) -> Self {
        let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
        let pending = Rc::new(RefCell::new(FrameSlot::default()));

        let tick_clone = tick.clone();
        let pending_tick = pending.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            pending_tick.borrow_mut().frame_began();
            on_frame();
            if let Some(closure) = tick_clone.borrow().as_ref() {
                if let Some(id) = request_frame(closure) {
                    pending_tick.borrow_mut().requested(id);
                }
            }
        }) as Box<dyn FnMut()>));

        Self { tick, pending }
    }

    pub fn is_running(&self) -> bool {
        !self.pending.borrow().needs_request()
    }

    pub fn start(&self) {
        if !self.pending.borrow().needs_request() {
            return;
        }
        if let Some(closure) = self.tick.borrow().as_ref() {
            if let Some(id) = request_frame(closure) {
                self.pending.borrow_mut().requested(id);
            }
        }
    }

    pub fn stop(&self) {
        let id = self.pending.borrow_mut().stop();
        if let (Some(id), Some(w)) = (id, web::window()) {
            _ = w.cancel_animation_frame(id);
        }
    }
}

fn request_frame(closure: &Closure<dyn FnMut()>) -> Option<i32> {
    let w = web::window()?;
    match w.request_animation_frame(closure.as_ref().unchecked_ref()) {
        Ok(id) => Some(id),
        Err(e) => {
            log::error!("requestAnimationFrame failed: {:?}", e);
            None
        }
    }
}
