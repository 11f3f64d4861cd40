use crate::constants::{PARTICLES_CANVAS_ID, RESIZE_DEBOUNCE_MS};
use crate::dom;
use crate::events;
use crate::frame::AnimationLoop;
use crate::paint::CanvasPainter;
use linktree_core::{ParticleConfig, ParticleField};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Interactive particle layer. Without a `#particles-canvas` this is a no-op.
pub fn wire(document: &web::Document) -> anyhow::Result<()> {
    let Some(canvas) = dom::canvas_by_id(document, PARTICLES_CANVAS_ID)? else {
        log::info!("[particles] no #{}; skipping", PARTICLES_CANVAS_ID);
        return Ok(());
    };
    let mut painter = CanvasPainter::new(dom::context_2d(&canvas)?);
    let viewport = dom::fit_canvas_to_window(&canvas);

    let field = Rc::new(RefCell::new(ParticleField::new(
        ParticleConfig::default(),
        viewport.width,
        viewport.height,
        &mut rand::thread_rng(),
    )));
    log::info!(
        "[particles] count={} size={}x{}",
        field.borrow().len(),
        viewport.width,
        viewport.height
    );

    {
        let field = field.clone();
        events::on_resize_debounced(RESIZE_DEBOUNCE_MS, move || {
            let vp = dom::fit_canvas_to_window(&canvas);
            let mut f = field.borrow_mut();
            f.reseed(vp.width, vp.height, &mut rand::thread_rng());
            log::info!(
                "[particles] reseeded count={} size={}x{}",
                f.len(),
                vp.width,
                vp.height
            );
        });
    }

    events::wire_pointer_tracking(document, field.clone());

    let animation = AnimationLoop::new(move || {
        let mut f = field.borrow_mut();
        f.update(js_sys::Date::now());
        f.draw(&mut painter);
    });
    events::pause_while_hidden(document, animation.clone(), "particles");
    animation.start();
    Ok(())
}
