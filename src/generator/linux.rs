//! Linux PNG 图标集生成。

use std::path::{Path, PathBuf};

use super::canvas::Canvas;
use super::png::write_png;
use crate::config::LinuxIconSpec;
use crate::error::IconError;

/// 按尺寸表逐个缩放并写出 PNG，返回写出的文件路径（与表顺序一致）。
pub fn generate_linux_icons(
    canvas: &Canvas,
    output_dir: &Path,
    specs: &[LinuxIconSpec],
) -> Result<Vec<PathBuf>, IconError> {
    let mut written = Vec::with_capacity(specs.len());

    for spec in specs {
        let resized = canvas.resized(spec.width, spec.height)?;
        let path = output_dir.join(spec.file_name);
        write_png(&resized, &path)?;
        written.push(path);
    }

    Ok(written)
}
