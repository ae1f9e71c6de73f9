//! Generates the salmon kirimi sprite used by the falling-kirimi effect.
//!
//! Usage: cargo run --bin kirimi_generator [output_path]

use std::env;
use std::fs;
use std::path::Path;

use sabake_tools::config::ToolsConfig;
use sabake_tools::kirimi;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = ToolsConfig::load_or_default();

    let args: Vec<String> = env::args().collect();
    let output = if args.len() > 1 {
        args[1].clone()
    } else {
        config.kirimi.output.clone()
    };

    if let Some(dir) = Path::new(&output).parent() {
        if !dir.as_os_str().is_empty() {
            fs::create_dir_all(dir)?;
        }
    }

    let size = config.kirimi.size;
    let img = kirimi::generate(size);
    img.save(&output)?;

    println!("Generated kirimi sprite: {}", output);
    println!("Size: {}x{}", size, size);
    Ok(())
}
