//! Headless rail shooter demo
//!
//! Plays the stage for a fixed number of frames with scripted input and logs a
//! summary. Pass a `.toml` or `.ron` config path as the first argument to
//! override the built-in tuning.

use rail_engine::foundation::logging;
use rail_engine::foundation::time::Timer;
use rail_engine::input::{InputManager, KeyCode};
use rail_engine::render::{DrawLog, TextureRegistry};
use rail_shooter::config::GameConfig;
use rail_shooter::game::{Game, GamePhase};

const DEMO_FRAMES: u64 = 3600;

/// Keys held on `frame` of the demo run
fn scripted_keys(frame: u64) -> Vec<KeyCode> {
    let mut keys = Vec::new();
    match (frame / 240) % 4 {
        0 => keys.push(KeyCode::Right),
        1 => keys.push(KeyCode::Up),
        2 => keys.push(KeyCode::Left),
        _ => keys.push(KeyCode::Down),
    }
    if frame % 20 < 2 {
        keys.push(KeyCode::Space);
    }
    if frame % 600 == 599 {
        keys.push(KeyCode::Enter);
    }
    keys
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();
    log::info!("Starting rail shooter demo");

    let config = match std::env::args().nth(1) {
        Some(path) => {
            log::info!("Loading config from {path}");
            GameConfig::load_resolved(&path).map_err(|e| {
                log::error!("Failed to load config: {e}");
                e
            })?
        }
        None => GameConfig::default(),
    };

    let mut textures = TextureRegistry::new();
    let mut game = Game::new(config, &mut textures).map_err(|e| {
        log::error!("Failed to start game: {e}");
        e
    })?;

    let mut input = InputManager::new();
    let mut renderer = DrawLog::new();
    let mut timer = Timer::new();
    let mut draw_calls = 0;

    for frame in 0..DEMO_FRAMES {
        input.begin_frame();
        input.set_held(scripted_keys(frame));

        game.update(&input);

        renderer.clear();
        game.draw(&mut renderer);
        draw_calls += renderer.calls().len();

        timer.update();
    }

    let scene = game.scene();
    log::info!(
        "Demo finished: {} frames, {} stages, phase {:?}",
        timer.frame_count(),
        game.stages_played(),
        game.phase()
    );
    log::info!(
        "Enemies alive: {}, enemy bullets: {}, player bullets: {}, hits taken: {}",
        scene.enemies().len(),
        scene.enemy_bullets().len(),
        scene.player().bullets().len(),
        scene.player().hits_taken()
    );
    log::info!(
        "{draw_calls} draw calls, {} textures, {:.0} fps average",
        textures.len(),
        timer.average_fps()
    );
    if game.phase() != GamePhase::Playing {
        log::info!("Stage result screen is showing");
    }
    Ok(())
}
