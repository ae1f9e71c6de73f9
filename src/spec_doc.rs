//! Five-sheet specification workbook for the Sabake_osakana project.
//!
//! The sheet layout is deliberately plain data entry: each sheet is a
//! header row plus a table of rows, with section headings and
//! status-colored cells so the document stays readable as it is updated.

use std::fs;
use std::path::Path;

use rust_xlsxwriter::{
    Color, Format, FormatAlign, FormatBorder, Image, Workbook, Worksheet, XlsxError,
};

const HEADER_FILL: u32 = 0x4472C4;
const SECTION_FILL: u32 = 0xD9E2F3;
const STATUS_EXISTING_FILL: u32 = 0xC6EFCE; // 既存
const STATUS_NEEDED_FILL: u32 = 0xFFEB9C; // 要作成
const STATUS_MISSING_FILL: u32 = 0xFFC7CE; // 未作成

struct Styles {
    header: Format,
    section: Format,
    normal: Format,
    centered: Format,
}

impl Styles {
    fn new() -> Self {
        let normal = Format::new()
            .set_font_size(10)
            .set_border(FormatBorder::Thin)
            .set_align(FormatAlign::VerticalCenter)
            .set_text_wrap();
        let centered = normal
            .clone()
            .set_align(FormatAlign::Center)
            .set_align(FormatAlign::VerticalCenter);
        Self {
            header: Format::new()
                .set_background_color(Color::RGB(HEADER_FILL))
                .set_bold()
                .set_font_color(Color::White)
                .set_font_size(11)
                .set_align(FormatAlign::Center)
                .set_align(FormatAlign::VerticalCenter)
                .set_border(FormatBorder::Thin),
            section: Format::new()
                .set_background_color(Color::RGB(SECTION_FILL))
                .set_bold()
                .set_font_size(11)
                .set_border(FormatBorder::Thin),
            normal,
            centered,
        }
    }

    /// Status cells keep the base style and add the status fill.
    fn status(&self, base: &Format, value: &str) -> Option<Format> {
        let fill = match value {
            "既存" => STATUS_EXISTING_FILL,
            "要作成" => STATUS_NEEDED_FILL,
            "未作成" => STATUS_MISSING_FILL,
            _ => return None,
        };
        Some(base.clone().set_background_color(Color::RGB(fill)))
    }
}

fn write_header_row(
    ws: &mut Worksheet,
    styles: &Styles,
    headers: &[&str],
    widths: &[f64],
) -> Result<(), XlsxError> {
    for (col, width) in widths.iter().enumerate() {
        ws.set_column_width(col as u16, *width)?;
    }
    for (col, header) in headers.iter().enumerate() {
        ws.write_string_with_format(0, col as u16, *header, &styles.header)?;
    }
    Ok(())
}

// シート1: 全体概要
fn create_overview_sheet(ws: &mut Worksheet, styles: &Styles) -> Result<(), XlsxError> {
    ws.set_name("01_全体概要")?;
    write_header_row(
        ws,
        styles,
        &["セクション", "項目", "値", "備考"],
        &[15.0, 25.0, 40.0, 40.0],
    )?;

    let rows: &[[&str; 4]] = &[
        ["基本情報", "プロジェクト名", "Sabake_osakana", "魚さばきブロック崩し"],
        ["", "ジャンル", "パズル/アクション", ""],
        ["", "プラットフォーム", "PC/スマホ/タブレット", ""],
        ["", "Unity版", "6000.2.14f1", ""],
        ["", "レンダリング", "Built-in 2D", ""],
        ["", "", "", ""],
        ["コンセプト", "ゲーム概要", "ブロックを崩して魚をさばく", "脱衣ブロック崩しの魚版"],
        ["", "目標", "全ブロックを崩して骨を露出させる", ""],
        ["", "演出", "魚→骨へ変化", "将来的に魚→切り身→骨の3段階"],
        ["", "", "", ""],
        ["レイヤー構造", "Layer1（最背面）", "骨の絵", "sakana_bone.png（要作成）"],
        ["", "Layer2（前面）", "魚の絵", "sakana_normal.png（既存）"],
        ["", "Layer3（最前面）", "グリッドブロック", "プログラム生成（グレー線）"],
        ["", "将来拡張", "切り身レイヤー追加", "sakana_sliced.png"],
        ["", "", "", ""],
        ["ブロック仕様", "表示方式", "魚画像をクリッピング表示", "方眼紙スタイル"],
        ["", "枠線", "グレー", "手描き風の質感"],
        ["", "行数", "5", "調整可能"],
        ["", "列数", "8", "調整可能"],
        ["", "合計", "40", "5×8"],
        ["", "", "", ""],
        ["操作方法", "PC（キーボード）", "←→キーでパドル移動", ""],
        ["", "PC（キーボード）", "スペースキーでボール発射", ""],
        ["", "PC（マウス）", "カーソル追従でパドル移動", ""],
        ["", "PC（マウス）", "クリックでボール発射", ""],
        ["", "モバイル", "タッチ追従でパドル移動", ""],
        ["", "モバイル", "タップでボール発射", ""],
        ["", "", "", ""],
        ["スコア", "ブロック破壊", "10点/個", ""],
        ["", "残機", "3", "初期値"],
    ];

    for (i, row) in rows.iter().enumerate() {
        let r = i as u32 + 1;
        for (c, value) in row.iter().enumerate() {
            let format = if !row[0].is_empty() && c == 0 {
                &styles.section
            } else {
                &styles.normal
            };
            ws.write_string_with_format(r, c as u16, *value, format)?;
        }
    }
    Ok(())
}

// シート2: ファイル依存関係
fn create_dependencies_sheet(ws: &mut Worksheet, styles: &Styles) -> Result<(), XlsxError> {
    ws.set_name("02_ファイル依存関係")?;
    write_header_row(
        ws,
        styles,
        &["ファイル名", "種別", "場所", "依存先", "状態", "備考"],
        &[30.0, 12.0, 15.0, 35.0, 10.0, 40.0],
    )?;

    let rows: &[[&str; 6]] = &[
        ["【スクリプト】", "", "", "", "", ""],
        ["GameManager.cs", "Script", "Assets/Scripts", "", "未作成", "ゲーム全体の管理"],
        ["PaddleController.cs", "Script", "Assets/Scripts", "GameManager.cs", "未作成", "パドル操作"],
        ["BallController.cs", "Script", "Assets/Scripts", "GameManager.cs", "未作成", "ボール物理"],
        ["BrickController.cs", "Script", "Assets/Scripts", "GameManager.cs", "未作成", "ブロック破壊処理"],
        ["FishLayerManager.cs", "Script", "Assets/Scripts", "BrickController.cs", "未作成", "魚レイヤー表示管理"],
        ["UIManager.cs", "Script", "Assets/Scripts", "GameManager.cs", "未作成", "UI制御"],
        ["", "", "", "", "", ""],
        ["【Prefab】", "", "", "", "", ""],
        ["Brick.prefab", "Prefab", "Assets/Prefabs", "BrickController.cs", "未作成", "ブロックPrefab"],
        ["Ball.prefab", "Prefab", "Assets/Prefabs", "BallController.cs", "未作成", "ボールPrefab"],
        ["Paddle.prefab", "Prefab", "Assets/Prefabs", "PaddleController.cs", "未作成", "パドルPrefab"],
        ["", "", "", "", "", ""],
        ["【シーン】", "", "", "", "", ""],
        ["TitleScene.unity", "Scene", "Assets/Scenes", "", "未作成", "タイトル画面"],
        ["GameScene.unity", "Scene", "Assets/Scenes", "全Prefab", "未作成", "メインゲーム"],
        ["ResultScene.unity", "Scene", "Assets/Scenes", "", "未作成", "リザルト画面"],
    ];

    write_status_table(ws, styles, rows, 4, &styles.normal)
}

// シート3: 画面遷移
fn create_screen_flow_sheet(ws: &mut Worksheet, styles: &Styles) -> Result<(), XlsxError> {
    ws.set_name("03_画面遷移")?;
    write_header_row(
        ws,
        styles,
        &["シーン", "状態", "表示要素", "操作", "遷移先", "備考"],
        &[18.0, 15.0, 40.0, 30.0, 18.0, 35.0],
    )?;

    let rows: &[[&str; 6]] = &[
        ["TitleScene", "初期表示", "タイトルロゴ、スタートボタン", "スタートボタン押下", "GameScene", ""],
        ["", "", "", "", "", ""],
        ["GameScene", "Ready", "魚画像、グリッド、パドル、ボール（静止）", "スペース/クリック/タップ", "Playing", "ボール発射"],
        ["", "Playing", "スコア、残機、ゲーム進行中", "←→/マウス/タッチ", "", "パドル移動"],
        ["", "", "", "ブロック全破壊", "GameClear", ""],
        ["", "", "", "ボール落下（残機0）", "GameOver", ""],
        ["", "GameClear", "YOU WIN!表示、骨画像完全露出", "リスタートボタン", "Ready", ""],
        ["", "GameOver", "GAME OVER表示", "リスタートボタン", "Ready", ""],
        ["", "", "", "タイトルボタン", "TitleScene", ""],
        ["", "", "", "", "", ""],
        ["ResultScene", "（将来）", "ハイスコア表示など", "", "", "将来実装"],
    ];

    for (i, row) in rows.iter().enumerate() {
        let r = i as u32 + 1;
        for (c, value) in row.iter().enumerate() {
            let format = if !row[0].is_empty() && c == 0 {
                &styles.section
            } else {
                &styles.normal
            };
            ws.write_string_with_format(r, c as u16, *value, format)?;
        }
    }
    Ok(())
}

// シート4: 画像アセット
fn create_image_assets_sheet(
    ws: &mut Worksheet,
    styles: &Styles,
    asset_base: &str,
) -> Result<(), XlsxError> {
    ws.set_name("04_画像アセット")?;
    write_header_row(
        ws,
        styles,
        &["ファイル名", "プレビュー", "サイズ", "用途", "使用箇所", "状態", "備考"],
        &[25.0, 25.0, 12.0, 25.0, 20.0, 10.0, 30.0],
    )?;

    let rows: &[[&str; 7]] = &[
        ["【魚画像】", "", "", "", "", "", ""],
        ["sakana_normal.png", "", "─", "魚の絵（前面レイヤー）", "GameScene", "既存", "プレイヤーが描く"],
        ["sakana_bone.png", "", "─", "骨の絵（背面レイヤー）", "GameScene", "要作成", "プレイヤーが描く"],
        ["sakana_sliced.png", "", "─", "切り身の絵（中間）", "GameScene", "将来", "3段階演出用"],
        ["", "", "", "", "", "", ""],
        ["【UI画像】", "", "", "", "", "", ""],
        ["title_logo.png", "", "─", "タイトルロゴ", "TitleScene", "未作成", ""],
        ["button_start.png", "", "─", "スタートボタン", "TitleScene", "未作成", ""],
        ["button_restart.png", "", "─", "リスタートボタン", "GameScene", "未作成", ""],
        ["heart_icon.png", "", "─", "残機アイコン", "GameScene", "未作成", ""],
        ["", "", "", "", "", "", ""],
        ["【エフェクト】", "", "", "", "", "", ""],
        ["particle_break.png", "", "─", "ブロック破壊パーティクル", "GameScene", "未作成", ""],
        ["", "", "", "", "", "", ""],
        ["【背景】", "", "", "", "", "", ""],
        ["bg_title.png", "", "─", "タイトル背景", "TitleScene", "未作成", ""],
        ["bg_game.png", "", "─", "ゲーム背景", "GameScene", "未作成", ""],
    ];

    for (i, row) in rows.iter().enumerate() {
        let r = i as u32 + 1;
        let is_section = row[0].starts_with('【');
        // Asset rows get extra height for the preview image column.
        if !is_section && !row[0].is_empty() {
            ws.set_row_height(r, 80)?;
        }

        for (c, value) in row.iter().enumerate() {
            if is_section {
                ws.write_string_with_format(r, c as u16, *value, &styles.section)?;
                continue;
            }
            let format = match styles.status(&styles.centered, value) {
                Some(f) if c == 5 => f,
                _ => styles.centered.clone(),
            };
            ws.write_string_with_format(r, c as u16, *value, &format)?;
        }
    }

    embed_fish_preview(ws, styles, asset_base)?;
    Ok(())
}

/// Best-effort preview of the hand-drawn fish in the first asset row.
fn embed_fish_preview(
    ws: &mut Worksheet,
    styles: &Styles,
    asset_base: &str,
) -> Result<(), XlsxError> {
    let image_path = Path::new(asset_base).join("sakana").join("sakana_normal.png");
    if !image_path.exists() {
        ws.write_string_with_format(2, 1, "（未検出）", &styles.centered)?;
        return Ok(());
    }

    match prepare_preview(&image_path) {
        Ok((img, width, height)) => {
            ws.insert_image(2, 1, &img)?;
            ws.write_string_with_format(2, 2, &format!("{}x{}", width, height), &styles.centered)?;
        }
        Err(e) => {
            ws.write_string_with_format(2, 1, &format!("（エラー: {}）", e), &styles.centered)?;
        }
    }
    Ok(())
}

fn prepare_preview(path: &Path) -> Result<(Image, u32, u32), Box<dyn std::error::Error>> {
    const MAX_WIDTH: f64 = 120.0;
    let (w, h) = image::image_dimensions(path)?;
    let scale = MAX_WIDTH / w as f64;
    let img = Image::new(path)?
        .set_scale_width(scale)
        .set_scale_height(scale);
    Ok((img, MAX_WIDTH as u32, (h as f64 * scale) as u32))
}

// シート5: サウンドアセット
fn create_sound_assets_sheet(ws: &mut Worksheet, styles: &Styles) -> Result<(), XlsxError> {
    ws.set_name("05_サウンドアセット")?;
    write_header_row(
        ws,
        styles,
        &["ファイル名", "種別", "長さ", "用途", "再生タイミング", "状態", "備考"],
        &[25.0, 10.0, 10.0, 25.0, 25.0, 10.0, 30.0],
    )?;

    let rows: &[[&str; 7]] = &[
        ["【BGM】", "", "", "", "", "", ""],
        ["bgm_title.mp3", "BGM", "─", "タイトルBGM", "TitleScene表示中", "未作成", "ループ再生"],
        ["bgm_game.mp3", "BGM", "─", "ゲームBGM", "GameScene Playing中", "未作成", "ループ再生"],
        ["bgm_clear.mp3", "BGM", "─", "クリアBGM", "GameClear時", "未作成", "ファンファーレ"],
        ["bgm_gameover.mp3", "BGM", "─", "ゲームオーバーBGM", "GameOver時", "未作成", ""],
        ["", "", "", "", "", "", ""],
        ["【SE（効果音）】", "", "", "", "", "", ""],
        ["se_ball_hit.wav", "SE", "─", "ボール反射音", "壁/パドル/ブロック衝突時", "未作成", ""],
        ["se_brick_break.wav", "SE", "─", "ブロック破壊音", "ブロック破壊時", "未作成", "魚をさばく音？"],
        ["se_ball_launch.wav", "SE", "─", "ボール発射音", "ボール発射時", "未作成", ""],
        ["se_life_lost.wav", "SE", "─", "残機減少音", "ボール落下時", "未作成", ""],
        ["se_button.wav", "SE", "─", "ボタン押下音", "UI操作時", "未作成", ""],
        ["se_score.wav", "SE", "─", "スコア加算音", "スコア増加時", "未作成", ""],
        ["", "", "", "", "", "", ""],
        ["【ボイス（将来）】", "", "", "", "", "", ""],
        ["voice_clear.wav", "Voice", "─", "クリアボイス", "GameClear時", "将来", ""],
        ["voice_gameover.wav", "Voice", "─", "ゲームオーバーボイス", "GameOver時", "将来", ""],
    ];

    write_status_table(ws, styles, rows, 5, &styles.normal)
}

/// Shared writer for the tables whose rows carry a status column and whose
/// section headings are bracketed with 【】.
fn write_status_table<const N: usize>(
    ws: &mut Worksheet,
    styles: &Styles,
    rows: &[[&str; N]],
    status_col: usize,
    base: &Format,
) -> Result<(), XlsxError> {
    for (i, row) in rows.iter().enumerate() {
        let r = i as u32 + 1;
        let is_section = row[0].starts_with('【');
        for (c, value) in row.iter().enumerate() {
            if is_section {
                ws.write_string_with_format(r, c as u16, *value, &styles.section)?;
                continue;
            }
            let format = match styles.status(base, value) {
                Some(f) if c == status_col => f,
                _ => base.clone(),
            };
            ws.write_string_with_format(r, c as u16, *value, &format)?;
        }
    }
    Ok(())
}

/// Build the whole workbook and save it to `output`.
pub fn generate(output: &str, asset_base: &str) -> Result<(), Box<dyn std::error::Error>> {
    let styles = Styles::new();
    let mut workbook = Workbook::new();

    create_overview_sheet(workbook.add_worksheet(), &styles)?;
    create_dependencies_sheet(workbook.add_worksheet(), &styles)?;
    create_screen_flow_sheet(workbook.add_worksheet(), &styles)?;
    create_image_assets_sheet(workbook.add_worksheet(), &styles, asset_base)?;
    create_sound_assets_sheet(workbook.add_worksheet(), &styles)?;

    if let Some(dir) = Path::new(output).parent() {
        if !dir.as_os_str().is_empty() && !dir.exists() {
            fs::create_dir_all(dir)?;
        }
    }
    workbook.save(output)?;
    Ok(())
}
