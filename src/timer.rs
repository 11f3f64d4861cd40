use crate::schedule::PendingSlot;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Single-slot deferred call: scheduling replaces whatever is still pending,
/// so only the most recent request fires.
pub struct Debounce {
    delay_ms: i32,
    // The closure stays alive until it fires or is replaced.
    slot: PendingSlot<Closure<dyn FnMut()>>,
}

impl Debounce {
    pub fn new(delay_ms: i32) -> Self {
        Self {
            delay_ms,
            slot: PendingSlot::default(),
        }
    }

    pub fn schedule(&mut self, f: impl FnOnce() + 'static) {
        self.cancel();
        let Some(window) = web::window() else {
            return;
        };
        let callback = Closure::once(f);
        match window.set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.as_ref().unchecked_ref(),
            self.delay_ms,
        ) {
            Ok(handle) => {
                if let Some((stale, _)) = self.slot.replace(handle, callback) {
                    window.clear_timeout_with_handle(stale);
                }
            }
            Err(e) => log::warn!("setTimeout failed: {:?}", e),
        }
    }

    pub fn cancel(&mut self) {
        if let Some((handle, _)) = self.slot.take() {
            if let Some(window) = web::window() {
                window.clear_timeout_with_handle(handle);
            }
        }
    }
}
