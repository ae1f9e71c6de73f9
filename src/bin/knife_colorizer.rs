//! Recolors the knife sprite into the rainbow palette variants.
//!
//! Accepts either a single sprite or a directory; directories are crawled
//! recursively and every raster file inside is recolored.
//!
//! Usage: cargo run --bin knife_colorizer [input] [output_dir]

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use sabake_tools::config::ToolsConfig;
use sabake_tools::palette::{self, PaletteEntry};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = ToolsConfig::load_or_default();

    let args: Vec<String> = env::args().collect();
    let input = args.get(1).cloned().unwrap_or(config.knives.input.clone());
    let output_dir = args.get(2).cloned().unwrap_or(config.knives.output_dir.clone());

    let input_path = Path::new(&input);
    if !input_path.exists() {
        eprintln!("Error: {} not found!", input);
        std::process::exit(1);
    }

    let palette = if config.knives.palette.is_empty() {
        palette::rainbow_palette()
    } else {
        config.knives.palette.clone()
    };

    fs::create_dir_all(&output_dir)?;

    let sprites = collect_sprites(input_path);
    if sprites.is_empty() {
        eprintln!("No sprites found under {}", input);
        std::process::exit(1);
    }

    let mut generated = 0;
    for sprite_path in &sprites {
        generated += colorize_sprite(sprite_path, Path::new(&output_dir), &palette)?;
    }

    println!("\nDone! Generated {} colored knife images.", generated);
    Ok(())
}

/// A single file is taken as-is; a directory is crawled for raster files.
fn collect_sprites(input: &Path) -> Vec<PathBuf> {
    if input.is_file() {
        return vec![input.to_path_buf()];
    }

    let mut sprites = Vec::new();
    for entry in WalkDir::new(input).into_iter().filter_map(|e| e.ok()) {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        if let Some(extension) = path.extension().and_then(|e| e.to_str()) {
            match extension.to_lowercase().as_str() {
                "png" | "jpg" | "jpeg" | "bmp" | "tga" => {
                    sprites.push(path.to_path_buf());
                }
                _ => {}
            }
        }
    }
    sprites.sort();
    sprites
}

fn colorize_sprite(
    sprite_path: &Path,
    output_dir: &Path,
    palette: &[PaletteEntry],
) -> Result<u32, Box<dyn std::error::Error>> {
    let original = image::open(sprite_path)?.to_rgba8();
    let stem = sprite_path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("knife");
    println!(
        "Loaded: {} ({}x{})",
        sprite_path.display(),
        original.width(),
        original.height()
    );

    let mut generated = 0;
    for entry in palette {
        let mut colored = original.clone();
        palette::colorize(&mut colored, entry.rgb);
        let output_path = output_dir.join(format!("{}_{}.png", stem, entry.name));
        colored.save(&output_path)?;
        println!("Generated: {}", output_path.display());
        generated += 1;
    }
    Ok(generated)
}
