//! favicon 生成：解码源图标，写出多尺寸 favicon.ico 与 32×32 favicon.png

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use ico::{IconDir, IconDirEntry, IconImage, ResourceType};
use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView, ImageFormat, ImageReader};

use crate::config::FaviconConfig;
use crate::error::GenerationFailure;

/// ICO 各帧与 PNG 统一使用的缩放滤波器
pub const RESAMPLE_FILTER: FilterType = FilterType::Lanczos3;

/// 一次成功生成的产物
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratedArtifacts {
    pub ico_path: PathBuf,
    pub png_path: PathBuf,
    /// 实际写入 ICO 的帧尺寸（升序）
    pub ico_sizes: Vec<(u32, u32)>,
}

/// 解码源图标，依次写出 ICO 与 PNG，每写成一个文件打印一行 `Generated: <path>`。
///
/// 任一步失败即返回；已写出的 ICO 不会回滚。
pub fn generate(config: &FaviconConfig) -> Result<GeneratedArtifacts, GenerationFailure> {
    let source = load_source(&config.input_path)?;

    let ico_sizes = write_ico(&source, &config.sizes, &config.ico_output_path)?;
    println!("Generated: {}", config.ico_output_path.display());

    write_png(&source, config.png_size, &config.png_output_path)?;
    println!("Generated: {}", config.png_output_path.display());

    Ok(GeneratedArtifacts {
        ico_path: config.ico_output_path.clone(),
        png_path: config.png_output_path.clone(),
        ico_sizes,
    })
}

/// 按文件内容（而非扩展名）判断格式并解码
pub fn load_source(path: &Path) -> Result<DynamicImage, GenerationFailure> {
    let reader = ImageReader::open(path)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(|source| GenerationFailure::Open {
            path: path.to_path_buf(),
            source,
        })?;
    let image = reader.decode().map_err(|source| GenerationFailure::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    let (width, height) = image.dimensions();
    log::debug!(
        "source {}: {}x{} {:?}",
        path.display(),
        width,
        height,
        image.color()
    );
    Ok(image)
}

/// 去重、升序，丢弃为 0 或超过源图的尺寸
pub fn usable_sizes(requested: &[(u32, u32)], source: (u32, u32)) -> Vec<(u32, u32)> {
    let mut sizes = requested.to_vec();
    sizes.sort_unstable();
    sizes.dedup();
    sizes.retain(|&(w, h)| {
        let fits = w > 0 && h > 0 && w <= source.0 && h <= source.1;
        if !fits {
            log::warn!(
                "skipping {}x{} icon: source is {}x{}",
                w,
                h,
                source.0,
                source.1
            );
        }
        fits
    });
    sizes
}

/// 每个尺寸按比例缩放到框内后编码为一帧，返回目录与各帧实际尺寸
pub fn build_icon_dir(
    source: &DynamicImage,
    sizes: &[(u32, u32)],
) -> std::io::Result<(IconDir, Vec<(u32, u32)>)> {
    let mut icon_dir = IconDir::new(ResourceType::Icon);
    let mut frame_sizes = Vec::with_capacity(sizes.len());
    for &(w, h) in sizes {
        let frame = source.resize(w, h, RESAMPLE_FILTER).to_rgba8();
        let (fw, fh) = frame.dimensions();
        log::debug!("ico frame {}x{} (requested {}x{})", fw, fh, w, h);
        let image = IconImage::from_rgba_data(fw, fh, frame.into_raw());
        icon_dir.add_entry(IconDirEntry::encode(&image)?);
        frame_sizes.push((fw, fh));
    }
    Ok((icon_dir, frame_sizes))
}

/// 写出多尺寸 ICO，返回实际写入的帧尺寸
pub fn write_ico(
    source: &DynamicImage,
    sizes: &[(u32, u32)],
    path: &Path,
) -> Result<Vec<(u32, u32)>, GenerationFailure> {
    let (width, height) = source.dimensions();
    let sizes = usable_sizes(sizes, (width, height));
    if sizes.is_empty() {
        return Err(GenerationFailure::NoUsableSizes { width, height });
    }

    let (icon_dir, frame_sizes) =
        build_icon_dir(source, &sizes).map_err(|source| GenerationFailure::Encode {
            path: path.to_path_buf(),
            source,
        })?;

    let write_err = |source| GenerationFailure::Write {
        path: path.to_path_buf(),
        source,
    };
    let mut writer = BufWriter::new(File::create(path).map_err(write_err)?);
    icon_dir.write(&mut writer).map_err(write_err)?;
    writer.flush().map_err(write_err)?;

    log::info!("wrote {} ({} frames)", path.display(), frame_sizes.len());
    Ok(frame_sizes)
}

/// 精确缩放到 `size`（不保持比例）后写出 PNG
pub fn write_png(
    source: &DynamicImage,
    size: (u32, u32),
    path: &Path,
) -> Result<(), GenerationFailure> {
    let resized = source.resize_exact(size.0, size.1, RESAMPLE_FILTER);

    let write_err = |source| GenerationFailure::Write {
        path: path.to_path_buf(),
        source,
    };
    let mut writer = BufWriter::new(File::create(path).map_err(write_err)?);
    resized
        .write_to(&mut writer, ImageFormat::Png)
        .map_err(|source| GenerationFailure::EncodePng {
            path: path.to_path_buf(),
            source,
        })?;
    writer.flush().map_err(write_err)?;

    log::info!("wrote {} ({}x{})", path.display(), size.0, size.1);
    Ok(())
}
