use crate::dom;
use crate::frame::AnimationLoop;
use web_sys as web;

/// Stop `animation` while the page is hidden and restart it when shown.
pub fn pause_while_hidden(document: &web::Document, animation: AnimationLoop, tag: &'static str) {
    let doc = document.clone();
    dom::listen(document, "visibilitychange", move |_: web::Event| {
        if doc.hidden() {
            animation.stop();
            log::debug!("[{}] paused (page hidden)", tag);
        } else {
            animation.start();
            log::debug!("[{}] resumed", tag);
        }
    });
}
