//! Generates the project specification workbook.
//!
//! Usage: cargo run --bin spec_doc [output_path]

use std::env;

use sabake_tools::config::ToolsConfig;
use sabake_tools::spec_doc;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = ToolsConfig::load_or_default();

    let args: Vec<String> = env::args().collect();
    let output = args.get(1).cloned().unwrap_or(config.spec_doc.output.clone());

    println!("Generating Sabake_osakana specification...");
    spec_doc::generate(&output, &config.spec_doc.asset_base)?;

    println!("Saved specification: {}", output);
    println!("\nSheets:");
    println!("  01_全体概要        - プロジェクト基本情報");
    println!("  02_ファイル依存関係 - スクリプト/Prefab/シーンの関係");
    println!("  03_画面遷移        - シーン間の遷移フロー");
    println!("  04_画像アセット     - 画像ファイル一覧（プレビュー付き）");
    println!("  05_サウンドアセット - BGM/SE/ボイス一覧");
    Ok(())
}
