//! # 加载与校验模块
//!
//! ## 设计思路
//!
//! 所有平台变体都从同一张“规范画布”派生。本模块负责：
//! 1. 打开源文件（不存在时为 `NotFound`）
//! 2. 按内容猜测格式并解码为 RGBA
//! 3. 尺寸不符时自动缩放到规范尺寸并告警（不是错误）
//!
//! ## 实现思路
//!
//! `Canvas` 持有只读的规范 RGBA 图像与缩放滤镜，各生成器只通过
//! `Canvas::resized` 取得目标尺寸，避免各自重复传递滤镜参数。

use std::io::ErrorKind;
use std::path::Path;

use image::imageops::FilterType;
use image::{ImageReader, RgbaImage};

use super::resize::resize_exact;
use crate::config::GeneratorConfig;
use crate::error::IconError;

/// 规范画布：只读、宽高等于 `canonical_size` 的 RGBA 图像。
#[derive(Debug, Clone)]
pub struct Canvas {
    image: RgbaImage,
    filter: FilterType,
    /// 加载时是否做过自动缩放。
    normalized: bool,
}

impl Canvas {
    /// 从磁盘加载源图片并规范化。
    pub fn load(config: &GeneratorConfig) -> Result<Self, IconError> {
        let decoded = decode_rgba(&config.source)?;
        Self::from_image(decoded, config.canonical_size, config.resize_filter)
    }

    /// 将内存中的图像规范化为 `size x size`。
    ///
    /// 已是目标尺寸时原样保留，不做重采样。
    pub fn from_image(image: RgbaImage, size: u32, filter: FilterType) -> Result<Self, IconError> {
        let (width, height) = image.dimensions();
        if (width, height) == (size, size) {
            return Ok(Self {
                image,
                filter,
                normalized: false,
            });
        }

        log::warn!(
            "⚠️ 源图片尺寸为 {}x{}，不是 {}x{}，自动缩放中...",
            width,
            height,
            size,
            size
        );
        if width != height {
            log::warn!("⚠️ 源图片不是正方形，缩放后图标会被拉伸");
        }

        let image = resize_exact(&image, size, size, filter)?;
        Ok(Self {
            image,
            filter,
            normalized: true,
        })
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn was_normalized(&self) -> bool {
        self.normalized
    }

    /// 生成目标尺寸的新图像，画布本身不变。
    pub fn resized(&self, width: u32, height: u32) -> Result<RgbaImage, IconError> {
        resize_exact(&self.image, width, height, self.filter)
    }
}

/// 读取并解码源文件为 RGBA8。
///
/// 存在性由编排器在创建输出目录前检查；这里只把打开时的
/// `NotFound` 映射为同类错误，不再重复探测文件系统。
fn decode_rgba(path: &Path) -> Result<RgbaImage, IconError> {
    let reader = ImageReader::open(path)
        .map_err(|e| match e.kind() {
            ErrorKind::NotFound => IconError::NotFound(path.to_path_buf()),
            _ => IconError::at_path("打开源图片", path, e),
        })?
        .with_guessed_format()
        .map_err(|e| IconError::at_path("识别源图片格式", path, e))?;

    let decoded = reader
        .decode()
        .map_err(|e| IconError::at_path("解码源图片", path, e))?;

    log::info!(
        "✅ 源图片解码成功 - {} 尺寸: {}x{}",
        path.display(),
        decoded.width(),
        decoded.height()
    );

    Ok(decoded.to_rgba8())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;
    use proptest::prelude::*;
    use std::path::PathBuf;

    fn solid(width: u32, height: u32) -> RgbaImage {
        RgbaImage::from_pixel(width, height, Rgba([200, 40, 90, 255]))
    }

    #[test]
    fn canonical_input_is_not_resized() {
        let src = RgbaImage::from_fn(64, 64, |x, y| Rgba([x as u8, y as u8, 0, 255]));
        let canvas = Canvas::from_image(src.clone(), 64, FilterType::Lanczos3)
            .expect("normalize should succeed");

        assert!(!canvas.was_normalized());
        assert_eq!(canvas.image(), &src);
    }

    #[test]
    fn smaller_input_is_upscaled() {
        let canvas =
            Canvas::from_image(solid(100, 100), 1024, FilterType::Lanczos3).expect("normalize");
        assert!(canvas.was_normalized());
        assert_eq!(canvas.image().dimensions(), (1024, 1024));
    }

    #[test]
    fn non_square_input_is_stretched() {
        let canvas =
            Canvas::from_image(solid(300, 120), 256, FilterType::Lanczos3).expect("normalize");
        assert_eq!(canvas.image().dimensions(), (256, 256));
    }

    #[test]
    fn resized_leaves_canvas_untouched() {
        let canvas = Canvas::from_image(solid(128, 128), 128, FilterType::Lanczos3).expect("canvas");
        let small = canvas.resized(16, 16).expect("resize");

        assert_eq!(small.dimensions(), (16, 16));
        assert_eq!(canvas.image().dimensions(), (128, 128));
    }

    #[test]
    fn load_reports_missing_source_as_not_found() {
        let config = GeneratorConfig::with_source(PathBuf::from("definitely/not/here.png"));
        let result = Canvas::load(&config);
        assert!(matches!(result, Err(IconError::NotFound(_))));
    }

    #[test]
    fn load_rejects_non_image_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("icon.png");
        std::fs::write(&path, b"this is not an image").expect("write");

        let result = Canvas::load(&GeneratorConfig::with_source(&path));
        assert!(matches!(result, Err(IconError::Generation { .. })));
    }

    #[test]
    fn load_decodes_by_content_not_extension() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("icon.dat");
        solid(40, 40)
            .save_with_format(&path, image::ImageFormat::Png)
            .expect("save");

        let mut config = GeneratorConfig::with_source(&path);
        config.canonical_size = 64;
        let canvas = Canvas::load(&config).expect("load should succeed");
        assert_eq!(canvas.image().dimensions(), (64, 64));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(16))]

        #[test]
        fn normalization_always_yields_canonical_size(width in 1u32..96, height in 1u32..96) {
            let canvas = Canvas::from_image(solid(width, height), 128, FilterType::Lanczos3)
                .expect("normalize should succeed");
            prop_assert_eq!(canvas.image().dimensions(), (128, 128));
            prop_assert_eq!(canvas.was_normalized(), (width, height) != (128, 128));
        }
    }
}
