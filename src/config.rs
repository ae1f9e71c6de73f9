//! Tool configuration loaded from `tools.yaml`.
//!
//! Every binary falls back to built-in defaults when the file is missing,
//! so a fresh checkout runs without any setup.

use std::fs;

use serde::{Deserialize, Serialize};

use crate::palette::{self, PaletteEntry};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolsConfig {
    pub kirimi: KirimiConfig,
    pub knives: KnivesConfig,
    pub panels: PanelsConfig,
    pub spec_doc: SpecDocConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KirimiConfig {
    pub size: u32,
    pub output: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KnivesConfig {
    pub input: String,
    pub output_dir: String,
    pub palette: Vec<PaletteEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelsConfig {
    pub output_dir: String,
    pub fill: [u8; 4],
    pub border: [u8; 4],
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SpecDocConfig {
    pub output: String,
    pub asset_base: String,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            kirimi: KirimiConfig::default(),
            knives: KnivesConfig::default(),
            panels: PanelsConfig::default(),
            spec_doc: SpecDocConfig::default(),
        }
    }
}

impl Default for KirimiConfig {
    fn default() -> Self {
        Self {
            size: crate::kirimi::DEFAULT_SIZE,
            output: "Assets/Resources/Sprites/kirimi.png".to_string(),
        }
    }
}

impl Default for KnivesConfig {
    fn default() -> Self {
        Self {
            input: "Assets/Resources/Sprites/knife.png".to_string(),
            output_dir: "Assets/Resources/Sprites/Knives".to_string(),
            palette: palette::rainbow_palette(),
        }
    }
}

impl Default for PanelsConfig {
    fn default() -> Self {
        Self {
            output_dir: "Assets/Resources/Sprites/UI".to_string(),
            // GameColors panel grey (0.8) with a darker border (0.6).
            fill: [204, 204, 204, 255],
            border: [153, 153, 153, 255],
        }
    }
}

impl Default for SpecDocConfig {
    fn default() -> Self {
        Self {
            output: "docs/specification.xlsx".to_string(),
            asset_base: "ForlocalAsset".to_string(),
        }
    }
}

impl ToolsConfig {
    pub fn load_from_file(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let content = fs::read_to_string(path)?;
        let config: ToolsConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Load `tools.yaml` next to the working directory, or defaults if it
    /// is not there.
    pub fn load_or_default() -> Self {
        Self::load_from_file("tools.yaml").unwrap_or_else(|e| {
            eprintln!("Note: could not load tools.yaml ({}), using defaults", e);
            Self::default()
        })
    }
}
