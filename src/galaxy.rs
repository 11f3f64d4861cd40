use crate::constants::GALAXY_CANVAS_ID;
use crate::dom;
use crate::events;
use crate::frame::AnimationLoop;
use crate::paint::CanvasPainter;
use anyhow::anyhow;
use linktree_core::{Galaxy, GalaxyConfig};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Starfield behind the page. Runs for the lifetime of the page.
pub fn wire(document: &web::Document) -> anyhow::Result<()> {
    let canvas = dom::canvas_by_id(document, GALAXY_CANVAS_ID)?
        .ok_or_else(|| anyhow!("missing #{}", GALAXY_CANVAS_ID))?;
    let mut painter = CanvasPainter::new(dom::context_2d(&canvas)?);
    let viewport = dom::fit_canvas_to_window(&canvas);

    let galaxy = Rc::new(RefCell::new(Galaxy::new(
        &GalaxyConfig::default(),
        viewport.width,
        viewport.height,
        &mut rand::thread_rng(),
    )));
    log::info!(
        "[galaxy] stars={} planets={} size={}x{}",
        galaxy.borrow().stars().len(),
        galaxy.borrow().planets().len(),
        viewport.width,
        viewport.height
    );

    {
        let galaxy = galaxy.clone();
        events::on_resize(move || {
            let vp = dom::fit_canvas_to_window(&canvas);
            galaxy.borrow_mut().resize(vp.width, vp.height);
        });
    }

    let animation = AnimationLoop::new(move || {
        galaxy.borrow_mut().frame(&mut painter);
    });
    animation.start();
    Ok(())
}
