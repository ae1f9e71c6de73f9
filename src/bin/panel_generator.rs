//! Generates the rounded-corner UI panel sprites and their 9-slice cuts.
//!
//! Usage: cargo run --bin panel_generator [output_dir]

use std::env;
use std::fs;
use std::path::Path;

use image::Rgba;

use sabake_tools::config::ToolsConfig;
use sabake_tools::panel::{self, SliceBorder};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = ToolsConfig::load_or_default();

    let args: Vec<String> = env::args().collect();
    let output_dir = args.get(1).cloned().unwrap_or(config.panels.output_dir.clone());
    let output_dir = Path::new(&output_dir);
    fs::create_dir_all(output_dir)?;

    let fill = Rgba(config.panels.fill);
    let border = Rgba(config.panels.border);

    println!("=== Generating rounded panel sprites ===");
    println!("Output: {}", output_dir.display());
    println!();

    // Main 9-slice panel, button-sized variant, and a borderless version.
    save_panel(output_dir, "rounded_panel.png", 96, 24, fill, border, 3)?;
    save_panel(output_dir, "rounded_button.png", 64, 16, fill, border, 2)?;
    save_panel(output_dir, "rounded_panel_no_border.png", 96, 24, fill, fill, 0)?;

    save_nine_slice(output_dir, 32, 16, fill, border, 2)?;

    println!();
    println!("=== Done ===");
    Ok(())
}

fn save_panel(
    dir: &Path,
    name: &str,
    size: u32,
    radius: u32,
    fill: Rgba<u8>,
    border: Rgba<u8>,
    border_width: u32,
) -> Result<(), Box<dyn std::error::Error>> {
    let img = panel::generate_panel(size, radius, fill, border, border_width);
    let path = dir.join(name);
    img.save(&path)?;
    println!("Generated: {}", path.display());
    write_border_sidecar(dir, name, radius)?;
    Ok(())
}

fn save_nine_slice(
    dir: &Path,
    corner_size: u32,
    radius: u32,
    fill: Rgba<u8>,
    border: Rgba<u8>,
    border_width: u32,
) -> Result<(), Box<dyn std::error::Error>> {
    let slice = panel::generate_nine_slice(corner_size, radius, fill, border, border_width);

    for (name, corner) in &slice.corners {
        let path = dir.join(format!("corner_{}.png", name));
        corner.save(&path)?;
        println!("Generated: {}", path.display());
    }

    let full_name = "rounded_panel_9slice.png";
    let full_path = dir.join(full_name);
    slice.full.save(&full_path)?;
    println!("Generated: {}", full_path.display());

    write_border_sidecar(dir, full_name, corner_size)?;
    Ok(())
}

/// Slice insets for the Unity sprite importer, next to the sprite itself.
fn write_border_sidecar(
    dir: &Path,
    sprite_name: &str,
    inset: u32,
) -> Result<(), Box<dyn std::error::Error>> {
    let border = SliceBorder::uniform(sprite_name, inset);
    let yaml_path = dir.join(format!(
        "{}.yaml",
        sprite_name.trim_end_matches(".png")
    ));
    fs::write(&yaml_path, serde_yaml::to_string(&border)?)?;
    println!("Generated index: {}", yaml_path.display());
    Ok(())
}
