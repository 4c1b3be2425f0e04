//! # 核心编排模块
//!
//! ## 设计思路
//!
//! `IconGenerator` 只负责流程编排，不关心具体编码细节。
//! 处理链路固定为：
//! 1. 确认源文件存在
//! 2. 确保输出目录存在
//! 3. 加载并规范化画布
//! 4. 依次运行 Linux / Windows / macOS 生成器
//!
//! ## 实现思路
//!
//! - 配置与尺寸表在构造时注入，运行期间只读。
//! - 三个生成器互不依赖，只共享同一张只读画布。
//! - 记录 `load/linux/windows/macos/total` 阶段耗时，便于性能诊断。
//! - 任意阶段出错立即返回，不做重试，也不汇报部分结果。

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use super::canvas::Canvas;
use super::linux::generate_linux_icons;
use super::macos::generate_macos_icon;
use super::windows::generate_windows_icon;
use crate::config::{GeneratorConfig, SizeTable};
use crate::error::IconError;

/// 一次成功运行写出的全部文件。
#[derive(Debug, Clone)]
pub struct GenerationReport {
    pub linux: Vec<PathBuf>,
    pub windows: PathBuf,
    pub macos: PathBuf,
    /// 源图片是否被自动缩放到规范尺寸。
    pub source_resized: bool,
}

impl GenerationReport {
    /// 按生成顺序列出所有产物。
    pub fn artifacts(&self) -> impl Iterator<Item = &PathBuf> {
        self.linux
            .iter()
            .chain(std::iter::once(&self.windows))
            .chain(std::iter::once(&self.macos))
    }
}

/// 图标生成器。
pub struct IconGenerator {
    config: GeneratorConfig,
    sizes: SizeTable,
}

impl IconGenerator {
    /// 使用标准尺寸表创建生成器。
    ///
    /// # 示例
    /// ```rust,no_run
    /// use tauri_icon_gen::config::GeneratorConfig;
    /// use tauri_icon_gen::generator::IconGenerator;
    ///
    /// let report = IconGenerator::new(GeneratorConfig::with_source("icon.png")).run()?;
    /// println!("{} files", report.artifacts().count());
    /// # Ok::<(), tauri_icon_gen::error::IconError>(())
    /// ```
    pub fn new(config: GeneratorConfig) -> Self {
        Self::with_sizes(config, SizeTable::default())
    }

    pub fn with_sizes(config: GeneratorConfig, sizes: SizeTable) -> Self {
        Self { config, sizes }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// 处理主入口。
    pub fn run(&self) -> Result<GenerationReport, IconError> {
        let config = &self.config;
        let total_start = Instant::now();

        // 先检查源文件，缺失时不在磁盘上留下任何东西
        if !config.source.exists() {
            return Err(IconError::NotFound(config.source.clone()));
        }

        fs::create_dir_all(&config.output_dir)
            .map_err(|e| IconError::at_path("创建输出目录", &config.output_dir, e))?;

        let load_start = Instant::now();
        let canvas = Canvas::load(config)?;
        let load_elapsed = load_start.elapsed();

        let linux_start = Instant::now();
        let linux = generate_linux_icons(&canvas, &config.output_dir, self.sizes.linux)?;
        let linux_elapsed = linux_start.elapsed();

        let windows_start = Instant::now();
        let windows = generate_windows_icon(&canvas, &config.output_dir, self.sizes.windows)?;
        let windows_elapsed = windows_start.elapsed();

        let macos_start = Instant::now();
        let macos = generate_macos_icon(&canvas, &config.output_dir, &self.sizes)?;
        let macos_elapsed = macos_start.elapsed();

        log::info!(
            "✅ 图标生成完成 - load={}ms linux={}ms windows={}ms macos={}ms total={}ms",
            load_elapsed.as_millis(),
            linux_elapsed.as_millis(),
            windows_elapsed.as_millis(),
            macos_elapsed.as_millis(),
            total_start.elapsed().as_millis()
        );

        Ok(GenerationReport {
            linux,
            windows,
            macos,
            source_resized: canvas.was_normalized(),
        })
    }
}
