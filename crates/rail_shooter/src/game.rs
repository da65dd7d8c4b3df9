//! Stage flow: play the stage, show the result, restart on Enter

use rail_engine::foundation::math::Vec2;
use rail_engine::input::{InputSource, KeyCode};
use rail_engine::render::{Renderer, TextureHandle, TextureLoader};

use crate::config::GameConfig;
use crate::scene::{Scene, StageAssets, StageOutcome};
use crate::GameError;

/// Screen position of the result banner
const RESULT_SPRITE_POSITION: Vec2 = Vec2::new(0.0, 100.0);
/// Screen position of the "press enter" prompt
const ENTER_SPRITE_POSITION: Vec2 = Vec2::new(400.0, 500.0);

/// What the game is currently showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// The stage is running
    Playing,
    /// The stage ended; waiting for Enter
    Result(StageOutcome),
}

#[derive(Debug, Clone, Copy)]
struct ResultTextures {
    defeated: TextureHandle,
    cleared: TextureHandle,
    enter: TextureHandle,
}

/// Top-level game state
pub struct Game {
    config: GameConfig,
    assets: StageAssets,
    result_textures: ResultTextures,
    scene: Scene,
    phase: GamePhase,
    stages_played: u32,
}

impl Game {
    /// Validate the config, load assets and start the first stage
    pub fn new(config: GameConfig, loader: &mut dyn TextureLoader) -> Result<Self, GameError> {
        let assets = StageAssets::load(&config, loader)?;
        let result_textures = ResultTextures {
            defeated: loader.load("GameOver.png"),
            cleared: loader.load("clear.png"),
            enter: loader.load("enter.png"),
        };
        let scene = Scene::from_assets(&config, &assets);

        Ok(Self {
            config,
            assets,
            result_textures,
            scene,
            phase: GamePhase::Playing,
            stages_played: 1,
        })
    }

    /// Advance one frame
    pub fn update(&mut self, input: &dyn InputSource) {
        match self.phase {
            GamePhase::Playing => {
                self.scene.update(input);
                if let Some(outcome) = self.scene.stage_outcome() {
                    log::info!(
                        "Stage ended: {outcome:?} after {} frames, {} hits taken",
                        self.scene.frame(),
                        self.scene.player().hits_taken()
                    );
                    self.phase = GamePhase::Result(outcome);
                }
            }
            GamePhase::Result(_) => {
                if input.was_pressed(KeyCode::Enter) {
                    self.restart();
                }
            }
        }
    }

    fn restart(&mut self) {
        self.scene = Scene::from_assets(&self.config, &self.assets);
        self.phase = GamePhase::Playing;
        self.stages_played += 1;
        log::info!("Restarting stage (attempt {})", self.stages_played);
    }

    /// Draw the running stage or the result screen
    pub fn draw(&self, renderer: &mut dyn Renderer) {
        match self.phase {
            GamePhase::Playing => self.scene.draw(renderer),
            GamePhase::Result(outcome) => {
                let banner = match outcome {
                    StageOutcome::Defeated => self.result_textures.defeated,
                    StageOutcome::Cleared => self.result_textures.cleared,
                };
                renderer.draw_sprite(banner, RESULT_SPRITE_POSITION);
                renderer.draw_sprite(self.result_textures.enter, ENTER_SPRITE_POSITION);
            }
        }
    }

    /// Current phase
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// The running (or last finished) stage
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Mutable access to the stage
    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    /// Number of stages started, including restarts
    pub fn stages_played(&self) -> u32 {
        self.stages_played
    }
}
