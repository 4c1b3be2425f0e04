//! # Tauri 图标生成工具 — 库入口
//!
//! 从一张 1024×1024 的源图片生成 Tauri 打包所需的全部平台图标：
//!
//! ```text
//! icon.png ──► Canvas (1024×1024 RGBA)
//!                 ├─► Linux   32x32.png / 128x128.png / 128x128@2x.png / 256x256.png / 512x512.png
//!                 ├─► Windows icon.ico  (16/32/48/64/256)
//!                 └─► macOS   icon.iconset/ ──► icon.icns (10 个图像) ──► 删除 iconset
//! ```
//!
//! ## 模块职责
//!
//! | 模块 | 职责 |
//! |------|------|
//! | [`error`] | 统一错误类型 `IconError`（`NotFound` / `Generation`） |
//! | [`config`] | 默认路径、规范尺寸、缩放滤镜与各平台尺寸表 |
//! | [`generator`] | 加载校验、缩放、各平台编码与流程编排 |

pub mod config;
pub mod error;
pub mod generator;

pub use config::{GeneratorConfig, SizeTable};
pub use error::IconError;
pub use generator::{GenerationReport, IconGenerator};
