//! # 图标生成模块（generator）
//!
//! ## 设计思路
//!
//! 将“加载校验 → 缩放 → 各平台编码 → 写出”按职责拆分为多个子模块：
//!
//! - `handler`：编排整条流水线，汇总产物
//! - `canvas`：源图片加载、尺寸校验与规范化
//! - `resize`：`fast_image_resize` 缩放（失败回退 `image`）
//! - `png`：无损最高压缩 PNG 写出
//! - `linux` / `windows` / `macos`：三个互不依赖的平台生成器
//! - `staging`：macOS iconset 暂存目录的 RAII 守卫
//!
//! ## 调用链
//!
//! ```text
//! main.rs（参数解析 + 日志初始化）
//!    ↓
//! handler.rs（统一编排 + 阶段耗时日志）
//!    ├─ canvas.rs（存在性检查 + 解码 + 规范化）
//!    ├─ linux.rs（5 个 PNG）
//!    ├─ windows.rs（icon.ico，5 帧）
//!    └─ macos.rs（iconset 暂存 → icon.icns → 清理）
//!    ↓
//! 返回 Result<GenerationReport, IconError>
//! ```

mod canvas;
mod handler;
mod linux;
mod macos;
mod png;
mod resize;
mod staging;
mod windows;

pub use canvas::Canvas;
pub use handler::{GenerationReport, IconGenerator};
pub use linux::generate_linux_icons;
pub use macos::generate_macos_icon;
pub use staging::StagingDir;
pub use windows::generate_windows_icon;
