//! # Tauri 图标生成工具 — 命令行入口
//!
//! 本文件仅负责日志初始化、参数解析与退出码映射。
//! 生成逻辑详见 `lib.rs` 与 `generator` 模块。

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tauri_icon_gen::config::{DEFAULT_SOURCE, GeneratorConfig};
use tauri_icon_gen::generator::IconGenerator;

#[derive(Debug, Parser)]
#[command(
    name = "tauri-icon-gen",
    version,
    about = "从一张 1024x1024 图片生成 Linux / Windows / macOS 应用图标"
)]
struct Args {
    /// 源图片路径
    #[arg(value_name = "SOURCE", default_value = DEFAULT_SOURCE)]
    source: PathBuf,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let generator = IconGenerator::new(GeneratorConfig::with_source(args.source));

    match generator.run() {
        Ok(report) => {
            println!(
                "✓ 所有图标生成成功！共 {} 个文件 → {}",
                report.artifacts().count(),
                generator.config().output_dir.display()
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("✗ 错误: {}", err);
            ExitCode::FAILURE
        }
    }
}
