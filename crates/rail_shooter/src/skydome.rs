//! Static backdrop sphere

use rail_engine::render::{Renderer, TextureHandle, ViewProjection};
use rail_engine::scene::WorldTransform;

/// Backdrop drawn behind everything else
#[derive(Debug, Clone)]
pub struct Skydome {
    transform: WorldTransform,
    texture: TextureHandle,
}

impl Skydome {
    /// Create a dome centered on the origin
    pub fn new(scale: f32, texture: TextureHandle) -> Self {
        Self {
            transform: WorldTransform::default().with_uniform_scale(scale),
            texture,
        }
    }

    /// Submit the dome model
    pub fn draw(&self, renderer: &mut dyn Renderer, camera: &ViewProjection) {
        renderer.draw(self.transform.world_matrix(), camera, self.texture);
    }
}
