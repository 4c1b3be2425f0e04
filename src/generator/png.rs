//! 无损 PNG 写出：最高压缩级别 + 自适应行过滤。

use std::fs;
use std::path::Path;

use image::codecs::png::{CompressionType, FilterType as PngFilterType, PngEncoder};
use image::{ExtendedColorType, ImageEncoder, RgbaImage};

use crate::error::IconError;

/// 将 RGBA 图像编码为 PNG 字节。
pub(crate) fn encode_png(image: &RgbaImage) -> Result<Vec<u8>, IconError> {
    let mut bytes = Vec::new();
    let encoder =
        PngEncoder::new_with_quality(&mut bytes, CompressionType::Best, PngFilterType::Adaptive);

    encoder
        .write_image(
            image.as_raw(),
            image.width(),
            image.height(),
            ExtendedColorType::Rgba8,
        )
        .map_err(|e| IconError::generation("PNG 编码失败", e))?;

    Ok(bytes)
}

/// 编码并写入文件，已存在则覆盖。
pub(crate) fn write_png(image: &RgbaImage, path: &Path) -> Result<(), IconError> {
    let bytes = encode_png(image)?;
    fs::write(path, bytes).map_err(|e| IconError::at_path("写入文件", path, e))?;

    log::debug!(
        "🖼️ 已写入 {} ({}x{})",
        path.display(),
        image.width(),
        image.height()
    );
    Ok(())
}
