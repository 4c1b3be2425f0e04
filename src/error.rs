//! 统一错误类型模块
//!
//! # 设计思路
//!
//! 图标生成只有两类失败：源文件缺失（`NotFound`）与下游任意环节失败
//! （`Generation`：读写文件、解码、缩放、PNG/ICO/ICNS 编码）。
//! 两者在入口处的处理方式相同（打印错误并以非零状态退出），
//! 但调用侧仍可按分支匹配。
//!
//! # 实现思路
//!
//! - 使用 `thiserror` 派生可读错误消息。
//! - 通过 `IconError::generation` 统一附加上下文（哪个文件、哪个阶段），
//!   替代各处零散的 `format!` 拼接。

use std::fmt::Display;
use std::path::{Path, PathBuf};

/// 图标生成统一错误类型
#[derive(Debug, thiserror::Error)]
pub enum IconError {
    /// 源图片不存在
    #[error("源文件不存在: {}", .0.display())]
    NotFound(PathBuf),

    /// 生成流水线中任意环节失败
    #[error("{context}: {message}")]
    Generation { context: String, message: String },
}

impl IconError {
    /// 将底层错误包装为 `Generation`，并附加上下文描述。
    pub fn generation(context: impl Into<String>, source: impl Display) -> Self {
        Self::Generation {
            context: context.into(),
            message: source.to_string(),
        }
    }

    /// 与某个具体路径相关的失败，例如写文件、建目录。
    pub fn at_path(action: &str, path: &Path, source: impl Display) -> Self {
        Self::generation(format!("{} '{}' 失败", action, path.display()), source)
    }
}
