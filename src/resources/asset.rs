//! Template assets bundled with the binary.
use include_dir::{Dir, include_dir};

use crate::error::AssetError;

/// Asset name of the CSScomb configuration.
pub const CSSCOMB: &str = "config/.csscomb.json";
/// Asset name of the ESLint configuration.
pub const ESLINTRC: &str = "config/.eslintrc.js";
/// Asset name of the EditorConfig file.
pub const EDITORCONFIG: &str = "config/.editorconfig";
/// Asset name of the default `.gitignore`.
pub const GITIGNORE: &str = "config/.gitignore";
/// Asset name of the pre-commit hook script.
pub const PRE_COMMIT: &str = "hooks/pre-commit";

/// Mode of executable assets (everything under `hooks/`).
pub const EXECUTABLE_MODE: u32 = 0o755;
/// Mode of every other asset.
pub const REGULAR_MODE: u32 = 0o644;

/// Embedded `assets/` directory.
static ASSETS_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/assets");

/// A static template file and the permission bits it is deployed with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Asset {
    /// Lookup name, relative to the asset root.
    pub name: String,
    /// File contents.
    pub content: &'static [u8],
    /// Unix permission bits applied on deployment.
    pub mode: u32,
}

impl Asset {
    /// Create an asset whose mode follows its location.
    #[must_use]
    pub fn new(name: &str, content: &'static [u8]) -> Self {
        Self {
            name: name.to_string(),
            content,
            mode: mode_for(name),
        }
    }
}

/// Permission bits for the asset called `name`.
#[must_use]
pub fn mode_for(name: &str) -> u32 {
    if name.starts_with("hooks/") {
        EXECUTABLE_MODE
    } else {
        REGULAR_MODE
    }
}

/// Read-only lookup of assets by name.
pub trait AssetStore: std::fmt::Debug {
    /// Fetch the asset registered under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`AssetError::Missing`] if no such asset exists.
    fn fetch(&self, name: &str) -> Result<Asset, AssetError>;
}

/// The assets compiled into this binary from `assets/`.
#[derive(Debug, Default, Clone, Copy)]
pub struct EmbeddedAssets;

impl AssetStore for EmbeddedAssets {
    fn fetch(&self, name: &str) -> Result<Asset, AssetError> {
        ASSETS_DIR
            .get_file(name)
            .map(|file| Asset::new(name, file.contents()))
            .ok_or_else(|| AssetError::Missing(name.to_string()))
    }
}
