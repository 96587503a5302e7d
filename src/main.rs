//! Blob field entry point
//!
//! On the web this starts the canvas background and page effects. Natively it
//! runs the animator headless on a fixed tick and logs what it drew.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    blob_field::web::run()
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::{SystemTime, UNIX_EPOCH};

    use blob_field::animator;
    use blob_field::{Animator, BlobField, FieldConfig, FixedTickScheduler, RecordingSurface, Viewport};

    env_logger::init();
    log::info!("Blob field (native) starting...");
    log::info!("Native mode renders headless - run with `trunk serve` for the web version");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0);
    let field = BlobField::seeded(seed, Viewport::new(1920, 1080), FieldConfig::default());
    let anim = Rc::new(RefCell::new(Animator::new(field, RecordingSurface::new())));
    let scheduler = Rc::new(FixedTickScheduler::sixty_hz());

    animator::start(anim.clone(), scheduler.clone());

    // Ten seconds, with a window resize halfway through
    scheduler.run(300);
    anim.borrow_mut().resize(Viewport::new(1280, 720));
    scheduler.run(300);

    let anim = anim.borrow();
    let viewport = anim.field().viewport();
    let (w, h) = viewport.size();
    let offscreen = anim
        .field()
        .blobs()
        .iter()
        .filter(|b| b.pos.x < 0.0 || b.pos.x > w || b.pos.y < 0.0 || b.pos.y > h)
        .count();

    log::info!(
        "Rendered {} frames ({:.0}ms simulated), {} circles drawn",
        anim.frames(),
        scheduler.now_ms(),
        anim.surface().circle_count()
    );
    log::info!(
        "{} blobs in {}x{}, {} centered off-screen",
        anim.field().blobs().len(),
        viewport.width,
        viewport.height,
        offscreen
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
