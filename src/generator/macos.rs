//! # macOS ICNS 生成模块
//!
//! ## 设计思路
//!
//! 分三个阶段：
//! 1. **暂存**：在输出目录下创建 `icon.iconset`，写入 10 个尺寸的 PNG
//! 2. **打包**：枚举暂存目录中的全部 PNG，逐个加入 ICNS 容器并写出 `icon.icns`
//! 3. **清理**：删除暂存目录
//!
//! ## 实现思路
//!
//! - 清理由 `StagingDir` 的 `Drop` 完成，任何退出路径都会执行。
//! - 打包时按文件名排序，重复运行得到字节一致的 `icon.icns`。
//! - ICNS 槽位取自尺寸表，未登记的文件按像素尺寸推断槽位。

use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};

use icns::{IconFamily, Image};

use super::canvas::Canvas;
use super::png::write_png;
use super::staging::StagingDir;
use crate::config::{ICNS_FILE_NAME, ICONSET_DIR_NAME, MacosIconSpec, SizeTable};
use crate::error::IconError;

/// 生成 `icon.icns`，返回其路径。
///
/// 暂存或打包任一阶段失败时先记录错误日志，暂存目录清理完成后
/// 再把错误返回给调用方。
pub fn generate_macos_icon(
    canvas: &Canvas,
    output_dir: &Path,
    sizes: &SizeTable,
) -> Result<PathBuf, IconError> {
    let staging = StagingDir::create(output_dir.join(ICONSET_DIR_NAME))?;
    let icns_path = output_dir.join(ICNS_FILE_NAME);

    let built = stage_iconset(canvas, staging.path(), sizes.macos)
        .and_then(|()| pack_iconset(staging.path(), sizes, &icns_path));
    if let Err(err) = built {
        log::error!("❌ 生成 .icns 失败: {}", err);
        return Err(err);
    }

    Ok(icns_path)
}

/// 阶段一：把各尺寸 PNG 写入暂存目录。
fn stage_iconset(
    canvas: &Canvas,
    staging_dir: &Path,
    specs: &[MacosIconSpec],
) -> Result<(), IconError> {
    for spec in specs {
        let resized = canvas.resized(spec.size, spec.size)?;
        write_png(&resized, &staging_dir.join(spec.file_name))?;
    }
    Ok(())
}

/// 阶段二：将暂存目录中的全部 PNG 打包为 ICNS。
fn pack_iconset(staging_dir: &Path, sizes: &SizeTable, icns_path: &Path) -> Result<(), IconError> {
    let mut family = IconFamily::new();

    for png_path in list_pngs(staging_dir)? {
        let file =
            File::open(&png_path).map_err(|e| IconError::at_path("打开文件", &png_path, e))?;
        let image = Image::read_png(BufReader::new(file))
            .map_err(|e| IconError::at_path("读取 PNG", &png_path, e))?;

        let file_name = png_path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or_default();

        let added = match sizes.macos_entry(file_name) {
            Some(spec) => family.add_icon_with_type(&image, spec.icon_type),
            None => family.add_icon(&image),
        };
        added.map_err(|e| IconError::at_path("加入 ICNS 容器", &png_path, e))?;
    }

    let mut bytes = Vec::new();
    family
        .write(&mut bytes)
        .map_err(|e| IconError::generation("编码 ICNS 失败", e))?;
    fs::write(icns_path, bytes).map_err(|e| IconError::at_path("写入文件", icns_path, e))?;

    log::debug!(
        "🍎 已写入 {}（{} 个图像）",
        icns_path.display(),
        family.available_icons().len()
    );
    Ok(())
}

/// 列出目录下的 PNG 文件（扩展名大小写不敏感），按文件名排序。
fn list_pngs(dir: &Path) -> Result<Vec<PathBuf>, IconError> {
    let entries = fs::read_dir(dir).map_err(|e| IconError::at_path("读取暂存目录", dir, e))?;

    let mut pngs = Vec::new();
    for entry in entries {
        let path = entry
            .map_err(|e| IconError::at_path("读取暂存目录", dir, e))?
            .path();
        let is_png = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("png"));
        if is_png && path.is_file() {
            pngs.push(path);
        }
    }

    pngs.sort();
    Ok(pngs)
}
