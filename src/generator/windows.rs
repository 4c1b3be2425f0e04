//! Windows 多分辨率 ICO 生成。

use std::fs;
use std::path::{Path, PathBuf};

use super::canvas::Canvas;
use crate::config::ICO_FILE_NAME;
use crate::error::IconError;

/// ICO 目录项能表示的最大边长。
const MAX_ICO_DIMENSION: u32 = 256;

/// 将各尺寸帧按给定顺序（从小到大）打包为 `icon.ico`。
pub fn generate_windows_icon(
    canvas: &Canvas,
    output_dir: &Path,
    sizes: &[u32],
) -> Result<PathBuf, IconError> {
    let mut icon_dir = ico::IconDir::new(ico::ResourceType::Icon);

    for &size in sizes {
        if size == 0 || size > MAX_ICO_DIMENSION {
            return Err(IconError::generation(
                "生成 .ico 失败",
                format!("ICO 帧尺寸必须在 1~{} 之间：{}", MAX_ICO_DIMENSION, size),
            ));
        }

        let resized = canvas.resized(size, size)?;
        let frame = ico::IconImage::from_rgba_data(size, size, resized.into_raw());
        let entry = ico::IconDirEntry::encode(&frame)
            .map_err(|e| IconError::generation(format!("编码 {}x{} ICO 帧失败", size, size), e))?;
        icon_dir.add_entry(entry);
    }

    let mut bytes = Vec::new();
    icon_dir
        .write(&mut bytes)
        .map_err(|e| IconError::generation("生成 .ico 失败", e))?;

    let path = output_dir.join(ICO_FILE_NAME);
    fs::write(&path, bytes).map_err(|e| IconError::at_path("写入文件", &path, e))?;
    log::debug!("🪟 已写入 {}（{} 帧）", path.display(), sizes.len());

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SizeTable;
    use image::imageops::FilterType;
    use image::{Rgba, RgbaImage};
    use std::fs::File;

    fn canvas() -> Canvas {
        let src = RgbaImage::from_pixel(1024, 1024, Rgba([20, 120, 220, 255]));
        Canvas::from_image(src, 1024, FilterType::Lanczos3).expect("canvas")
    }

    #[test]
    fn ico_holds_five_frames_smallest_first() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = generate_windows_icon(&canvas(), dir.path(), SizeTable::STANDARD.windows)
            .expect("generate");

        let icon_dir = ico::IconDir::read(File::open(&path).expect("open")).expect("parse ico");
        let widths: Vec<u32> = icon_dir.entries().iter().map(|e| e.width()).collect();
        let heights: Vec<u32> = icon_dir.entries().iter().map(|e| e.height()).collect();

        assert_eq!(widths, vec![16, 32, 48, 64, 256]);
        assert_eq!(widths, heights);
    }

    #[test]
    fn ico_frames_decode_to_declared_size() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = generate_windows_icon(&canvas(), dir.path(), &[16, 48]).expect("generate");

        let icon_dir = ico::IconDir::read(File::open(&path).expect("open")).expect("parse ico");
        for entry in icon_dir.entries() {
            let frame = entry.decode().expect("decode frame");
            assert_eq!(frame.width(), entry.width());
            assert_eq!(frame.height(), entry.height());
        }
    }

    #[test]
    fn oversized_frame_is_rejected() {
        let dir = tempfile::tempdir().expect("tempdir");
        let result = generate_windows_icon(&canvas(), dir.path(), &[16, 512]);

        assert!(matches!(result, Err(IconError::Generation { .. })));
        assert!(!dir.path().join(ICO_FILE_NAME).exists());
    }
}
