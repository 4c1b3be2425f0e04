//! # 配置模块
//!
//! ## 设计思路
//!
//! 把默认路径、规范画布尺寸与缩放滤镜集中到 `GeneratorConfig`，
//! 各平台尺寸表集中到 `SizeTable`。两者都是不可变数据，
//! 由编排器注入到每个生成器，而不是模块级全局变量。
//!
//! ## 实现思路
//!
//! - `Default` 提供与 Tauri 工程目录约定一致的默认值。
//! - `SizeTable::STANDARD` 是编译期常量，测试可构造自定义表。

use std::path::PathBuf;

use icns::IconType;
use image::imageops::FilterType;

/// 默认源图片路径。
pub const DEFAULT_SOURCE: &str = "icon.png";
/// 默认输出目录（Tauri 工程约定的图标目录）。
pub const DEFAULT_OUTPUT_DIR: &str = "src-tauri/icons";
/// 规范画布边长。
pub const CANONICAL_SIZE: u32 = 1024;

/// Windows 图标容器文件名。
pub const ICO_FILE_NAME: &str = "icon.ico";
/// macOS 图标容器文件名。
pub const ICNS_FILE_NAME: &str = "icon.icns";
/// macOS iconset 暂存目录名。
pub const ICONSET_DIR_NAME: &str = "icon.iconset";

/// 生成器运行配置。
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// 源图片路径。
    pub source: PathBuf,
    /// 输出目录，不存在时自动创建。
    pub output_dir: PathBuf,
    /// 规范画布边长（宽高相等）。
    pub canonical_size: u32,
    /// 所有缩放使用的滤镜。
    pub resize_filter: FilterType,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            source: PathBuf::from(DEFAULT_SOURCE),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            canonical_size: CANONICAL_SIZE,
            resize_filter: FilterType::Lanczos3,
        }
    }
}

impl GeneratorConfig {
    /// 使用默认配置，仅替换源图片路径。
    pub fn with_source(source: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            ..Self::default()
        }
    }
}

/// Linux PNG 条目：`(宽, 高, 文件名)`。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinuxIconSpec {
    pub width: u32,
    pub height: u32,
    pub file_name: &'static str,
}

/// macOS iconset 条目：文件名、边长以及在 ICNS 中占用的元素类型。
///
/// 同为 32px 的 `icon_16x16@2x.png` 与 `icon_32x32.png` 需要落到不同的
/// ICNS 槽位，所以不能只靠像素尺寸推断类型。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MacosIconSpec {
    pub file_name: &'static str,
    pub size: u32,
    pub icon_type: IconType,
}

/// 各平台尺寸表。
#[derive(Debug, Clone, Copy)]
pub struct SizeTable {
    pub linux: &'static [LinuxIconSpec],
    /// ICO 帧边长，按从小到大顺序写入。
    pub windows: &'static [u32],
    pub macos: &'static [MacosIconSpec],
}

const fn linux(width: u32, height: u32, file_name: &'static str) -> LinuxIconSpec {
    LinuxIconSpec {
        width,
        height,
        file_name,
    }
}

const fn macos(file_name: &'static str, size: u32, icon_type: IconType) -> MacosIconSpec {
    MacosIconSpec {
        file_name,
        size,
        icon_type,
    }
}

impl SizeTable {
    /// Tauri 打包所需的标准尺寸集合。
    pub const STANDARD: SizeTable = SizeTable {
        linux: &[
            linux(32, 32, "32x32.png"),
            linux(128, 128, "128x128.png"),
            linux(256, 256, "128x128@2x.png"),
            linux(256, 256, "256x256.png"),
            linux(512, 512, "512x512.png"),
        ],
        windows: &[16, 32, 48, 64, 256],
        macos: &[
            macos("icon_16x16.png", 16, IconType::RGBA32_16x16),
            macos("icon_16x16@2x.png", 32, IconType::RGBA32_16x16_2x),
            macos("icon_32x32.png", 32, IconType::RGBA32_32x32),
            macos("icon_32x32@2x.png", 64, IconType::RGBA32_32x32_2x),
            macos("icon_128x128.png", 128, IconType::RGBA32_128x128),
            macos("icon_128x128@2x.png", 256, IconType::RGBA32_128x128_2x),
            macos("icon_256x256.png", 256, IconType::RGBA32_256x256),
            macos("icon_256x256@2x.png", 512, IconType::RGBA32_256x256_2x),
            macos("icon_512x512.png", 512, IconType::RGBA32_512x512),
            macos("icon_512x512@2x.png", 1024, IconType::RGBA32_512x512_2x),
        ],
    };

    /// 按 iconset 文件名查找 macOS 条目。
    pub fn macos_entry(&self, file_name: &str) -> Option<&MacosIconSpec> {
        self.macos.iter().find(|spec| spec.file_name == file_name)
    }
}

impl Default for SizeTable {
    fn default() -> Self {
        Self::STANDARD
    }
}
