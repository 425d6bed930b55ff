//! Texture handles and the asset loader contract
//!
//! The core only ever passes [`TextureHandle`]s around; what a handle points
//! at is the loader's business.

use std::collections::HashMap;

use slotmap::SlotMap;
use thiserror::Error;

slotmap::new_key_type! {
    /// Opaque reference to a texture owned by the asset loader
    pub struct TextureHandle;
}

/// Asset loading errors
#[derive(Error, Debug)]
pub enum AssetError {
    /// The loader has no texture by that name
    #[error("texture not found: {0}")]
    NotFound(String),

    /// The backend failed to load the texture
    #[error("failed to load texture {name}: {reason}")]
    LoadFailed {
        /// Texture name
        name: String,
        /// Backend-specific reason
        reason: String,
    },
}

/// Supplies texture handles to the entity factories
pub trait TextureLoader {
    /// Load (or look up) a texture by name
    fn load_texture(&mut self, name: &str) -> Result<TextureHandle, AssetError>;
}

/// Metadata kept for each registered texture
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextureInfo {
    /// Name the texture was registered under
    pub name: String,
}

/// In-memory texture registry
///
/// Hands out one stable handle per name. Headless drivers and tests use it as
/// their [`TextureLoader`]; a GPU backend would keep the same name-to-handle
/// map next to its uploaded images.
#[derive(Default)]
pub struct TextureRegistry {
    textures: SlotMap<TextureHandle, TextureInfo>,
    by_name: HashMap<String, TextureHandle>,
}

impl TextureRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `name`, returning the existing handle if it is already known
    pub fn register(&mut self, name: &str) -> TextureHandle {
        if let Some(&handle) = self.by_name.get(name) {
            return handle;
        }
        let handle = self.textures.insert(TextureInfo {
            name: name.to_string(),
        });
        self.by_name.insert(name.to_string(), handle);
        log::debug!("Registered texture '{name}'");
        handle
    }

    /// Look up a texture's metadata
    pub fn info(&self, handle: TextureHandle) -> Option<&TextureInfo> {
        self.textures.get(handle)
    }

    /// Look up a handle by name
    pub fn handle(&self, name: &str) -> Option<TextureHandle> {
        self.by_name.get(name).copied()
    }

    /// Number of registered textures
    pub fn len(&self) -> usize {
        self.textures.len()
    }

    /// Whether nothing is registered
    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }
}

impl TextureLoader for TextureRegistry {
    fn load_texture(&mut self, name: &str) -> Result<TextureHandle, AssetError> {
        if name.trim().is_empty() {
            return Err(AssetError::NotFound(name.to_string()));
        }
        Ok(self.register(name))
    }
}
