use std::error::Error;

use egor_animator::{AnimatorConfig, FrameAnimator, FrameClock, Grid, SheetChange, SheetTexture};
use serde::Deserialize;

const FPS: u32 = 60;
const SECONDS: u32 = 4;

#[derive(Deserialize)]
struct Sheets {
    walk: WalkSheet,
    idle: IdleSheet,
}

#[derive(Deserialize)]
struct WalkSheet {
    name: String,
    sheet: SheetTexture,
    grid: Grid,
    config: AnimatorConfig,
}

#[derive(Deserialize)]
struct IdleSheet {
    sheet: SheetTexture,
    grid: Grid,
    config: AnimatorConfig,
    #[serde(default)]
    delay: f32,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let Sheets { walk, idle }: Sheets = toml::from_str(include_str!("../sheets.toml"))?;

    let mut anim = FrameAnimator::new(
        walk.name,
        walk.grid.columns(),
        walk.grid.rows(),
        walk.config,
    );
    anim.bind_sheet(walk.sheet);
    anim.start();

    let to_idle = SheetChange::new(
        idle.sheet,
        idle.grid.columns(),
        idle.grid.rows(),
        idle.config.framerate,
    )
    .config(idle.config)
    .delay(idle.delay);

    let mut clock = FrameClock::default();
    let mut swapped = false;
    let mut shown = None;

    for _ in 0..FPS * SECONDS {
        clock.step(1.0 / FPS as f32);
        clock.drive(&mut anim);

        // walk for two seconds, then wait out the delay & switch to idle
        if !swapped && clock.frame >= 2 * FPS as u64 {
            swapped = anim.change_sheet(&to_idle, clock.delta);
            if swapped {
                log::info!("switched to idle sheet at frame {}", clock.frame);
            }
        }

        if clock.frame == 3 * FPS as u64 {
            anim.set_reverse(true);
            log::info!("reversing, {:.2}s left", anim.time_remaining_in_seconds());
        }

        let cell = (anim.sheet().map(|s| s.id), anim.current_frame());
        if shown != Some(cell) {
            shown = Some(cell);
            if let Some(rect) = anim.frame_rect() {
                log::info!(
                    "frame {:>3} | sheet {:?} cell {} (row {}, col {}) at ({}, {}) {}x{}",
                    clock.frame,
                    cell.0,
                    cell.1,
                    anim.current_row(),
                    anim.current_column(),
                    rect.x(),
                    rect.y(),
                    rect.width(),
                    rect.height()
                );
            }
        }
    }

    if let Err(err) = anim.go_to_frame(anim.rows() * anim.columns()) {
        log::info!("rejected jump: {err}");
    }

    anim.stop();
    log::info!(
        "stopped: finished={} playing={} cell {}",
        anim.is_finished(),
        anim.is_playing(),
        anim.current_frame()
    );

    Ok(())
}
