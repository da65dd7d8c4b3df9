//! # Rendering Seams
//!
//! Scene code talks to the renderer through two narrow traits: [`Renderer`]
//! receives draw submissions and [`TextureLoader`] turns texture names into
//! opaque handles. Nothing here touches a graphics API; [`DrawLog`] and
//! [`TextureRegistry`] are the headless implementations used by the binary
//! and the tests.

pub mod camera;

use std::collections::HashMap;

use crate::foundation::math::{Mat4, Vec2};

pub use camera::ViewProjection;

/// Handle for a loaded texture resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TextureHandle(pub u32);

/// Draw submission target
pub trait Renderer {
    /// Draw a textured model with the given world matrix
    fn draw(&mut self, world: &Mat4, camera: &ViewProjection, texture: TextureHandle);

    /// Draw a screen-space sprite
    fn draw_sprite(&mut self, texture: TextureHandle, position: Vec2);
}

/// Resolves texture names to handles
pub trait TextureLoader {
    /// Load (or look up) the texture called `name`
    fn load(&mut self, name: &str) -> TextureHandle;
}

/// Name-keyed texture table handing out sequential handles
///
/// Loading the same name twice returns the same handle.
#[derive(Debug, Default)]
pub struct TextureRegistry {
    textures: HashMap<String, TextureHandle>,
    next_handle: u32,
}

impl TextureRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle previously assigned to `name`
    pub fn get(&self, name: &str) -> Option<TextureHandle> {
        self.textures.get(name).copied()
    }

    /// Number of distinct textures loaded
    pub fn len(&self) -> usize {
        self.textures.len()
    }

    /// Whether nothing has been loaded yet
    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }
}

impl TextureLoader for TextureRegistry {
    fn load(&mut self, name: &str) -> TextureHandle {
        if let Some(&handle) = self.textures.get(name) {
            return handle;
        }
        let handle = TextureHandle(self.next_handle);
        self.next_handle += 1;
        log::debug!("Registered texture '{name}' as {handle:?}");
        self.textures.insert(name.to_owned(), handle);
        handle
    }
}

/// One recorded submission
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    /// A model draw
    Model {
        /// World matrix the model was drawn with
        world: Mat4,
        /// View-projection in effect for the draw
        camera: ViewProjection,
        /// Texture bound for the draw
        texture: TextureHandle,
    },
    /// A screen-space sprite
    Sprite {
        /// Sprite texture
        texture: TextureHandle,
        /// Screen position
        position: Vec2,
    },
}

/// Renderer that records every submission in order
#[derive(Debug, Default)]
pub struct DrawLog {
    calls: Vec<DrawCall>,
}

impl DrawLog {
    /// Create an empty log
    pub fn new() -> Self {
        Self::default()
    }

    /// Submissions since the last [`clear`](Self::clear)
    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    /// Number of model draws using `texture`
    pub fn model_count(&self, texture: TextureHandle) -> usize {
        self.calls
            .iter()
            .filter(|call| matches!(call, DrawCall::Model { texture: t, .. } if *t == texture))
            .count()
    }

    /// Number of sprite draws
    pub fn sprite_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|call| matches!(call, DrawCall::Sprite { .. }))
            .count()
    }

    /// Forget recorded submissions
    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

impl Renderer for DrawLog {
    fn draw(&mut self, world: &Mat4, camera: &ViewProjection, texture: TextureHandle) {
        self.calls.push(DrawCall::Model {
            world: *world,
            camera: *camera,
            texture,
        });
    }

    fn draw_sprite(&mut self, texture: TextureHandle, position: Vec2) {
        self.calls.push(DrawCall::Sprite { texture, position });
    }
}
