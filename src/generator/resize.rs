//! # 缩放模块
//!
//! ## 设计思路
//!
//! 所有尺寸变体都来自同一张规范画布，缩放是唯一的计算热点。
//! 优先走 `fast_image_resize` 的卷积缩放（SIMD），失败时回退到
//! `image::imageops::resize`，保证结果可用。

use fast_image_resize as fr;
use image::imageops::FilterType;
use image::RgbaImage;

use crate::error::IconError;

/// 将 RGBA 图像精确缩放到目标尺寸（不保持宽高比）。
///
/// 目标尺寸与源尺寸相同时直接复制，不做重采样。
pub(crate) fn resize_exact(
    image: &RgbaImage,
    target_width: u32,
    target_height: u32,
    filter: FilterType,
) -> Result<RgbaImage, IconError> {
    if target_width == 0 || target_height == 0 {
        return Err(IconError::generation(
            "缩放失败",
            format!("目标尺寸非法：{}x{}", target_width, target_height),
        ));
    }

    if image.dimensions() == (target_width, target_height) {
        return Ok(image.clone());
    }

    match resize_with_fast_image_resize(image, target_width, target_height, filter) {
        Ok(resized) => Ok(resized),
        Err(err) => {
            log::warn!(
                "⚠️ fast_image_resize 缩放失败，回退 image::imageops::resize：{}",
                err
            );
            Ok(image::imageops::resize(
                image,
                target_width,
                target_height,
                filter,
            ))
        }
    }
}

fn resize_with_fast_image_resize(
    image: &RgbaImage,
    target_width: u32,
    target_height: u32,
    filter: FilterType,
) -> Result<RgbaImage, IconError> {
    let (src_width, src_height) = image.dimensions();

    let src_image = fr::images::Image::from_vec_u8(
        src_width,
        src_height,
        image.as_raw().clone(),
        fr::PixelType::U8x4,
    )
    .map_err(|e| IconError::generation("构建源图像缓冲失败", e))?;

    let mut dst_image = fr::images::Image::new(target_width, target_height, fr::PixelType::U8x4);

    let mut resizer = fr::Resizer::new();
    let options =
        fr::ResizeOptions::new().resize_alg(fr::ResizeAlg::Convolution(to_fast_filter(filter)));

    resizer
        .resize(&src_image, &mut dst_image, Some(&options))
        .map_err(|e| IconError::generation("fast_image_resize 执行失败", e))?;

    RgbaImage::from_raw(target_width, target_height, dst_image.into_vec()).ok_or_else(|| {
        IconError::generation("fast_image_resize 执行失败", "输出缓冲长度异常")
    })
}

fn to_fast_filter(filter: FilterType) -> fr::FilterType {
    match filter {
        FilterType::Nearest => fr::FilterType::Box,
        FilterType::Triangle => fr::FilterType::Bilinear,
        FilterType::CatmullRom => fr::FilterType::CatmullRom,
        FilterType::Gaussian => fr::FilterType::Mitchell,
        FilterType::Lanczos3 => fr::FilterType::Lanczos3,
    }
}
