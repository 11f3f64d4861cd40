// Bookkeeping for deferred work handed to the browser (timeouts, animation
// frames). Kept free of web APIs so the host tests can include it.

/// At most one pending deferred call, keyed by the host's handle.
#[derive(Debug)]
pub struct PendingSlot<T> {
    pending: Option<(i32, T)>,
}

impl<T> Default for PendingSlot<T> {
    fn default() -> Self {
        Self { pending: None }
    }
}

impl<T> PendingSlot<T> {
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn handle(&self) -> Option<i32> {
        self.pending.as_ref().map(|(h, _)| *h)
    }

    /// Store a newly scheduled call. Returns the call it displaced, whose
    /// handle the caller must cancel.
    pub fn replace(&mut self, handle: i32, payload: T) -> Option<(i32, T)> {
        self.pending.replace((handle, payload))
    }

    /// Empty the slot, returning the pending call if there was one.
    pub fn take(&mut self) -> Option<(i32, T)> {
        self.pending.take()
    }
}

/// Pending `requestAnimationFrame` id of a pausable loop.
#[derive(Debug, Default)]
pub struct FrameSlot {
    slot: PendingSlot<()>,
}

impl FrameSlot {
    /// `start` only requests a frame when none is outstanding.
    pub fn needs_request(&self) -> bool {
        !self.slot.is_pending()
    }

    pub fn requested(&mut self, id: i32) {
        self.slot.replace(id, ());
    }

    /// The pending frame is running; it no longer needs cancelling.
    pub fn frame_began(&mut self) {
        self.slot.take();
    }

    /// Forget the pending frame and return its id for `cancelAnimationFrame`.
    pub fn stop(&mut self) -> Option<i32> {
        self.slot.take().map(|(id, _)| id)
    }

    pub fn pending(&self) -> Option<i32> {
        self.slot.handle()
    }
}

/// `document.readyState` value while the document is still being parsed.
#[inline]
pub fn is_still_parsing(ready_state: &str) -> bool {
    ready_state == "loading"
}
