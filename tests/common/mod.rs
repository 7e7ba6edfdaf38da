//! 集成测试共用：在临时目录里摆好 assets/icons/ 与源图标

#![allow(dead_code)]

use std::path::Path;

use image::{Rgba, RgbaImage};
use tempfile::TempDir;

pub const RED: [u8; 4] = [255, 0, 0, 255];

/// 建好 assets/icons/ 的空站点目录
pub fn site() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir_all(dir.path().join("assets/icons")).unwrap();
    dir
}

/// 站点目录，且放好一张纯色源图标
pub fn site_with_icon(width: u32, height: u32, color: [u8; 4]) -> TempDir {
    let dir = site();
    write_icon(&dir.path().join("assets/icons/icon-192x192.png"), width, height, color);
    dir
}

pub fn write_icon(path: &Path, width: u32, height: u32, color: [u8; 4]) {
    RgbaImage::from_pixel(width, height, Rgba(color))
        .save(path)
        .unwrap();
}

/// 读出 ICO 各帧 (宽, 高, RGBA)
pub fn read_ico(path: &Path) -> Vec<(u32, u32, Vec<u8>)> {
    let file = std::fs::File::open(path).unwrap();
    let dir = ico::IconDir::read(file).unwrap();
    dir.entries()
        .iter()
        .map(|entry| {
            let image = entry.decode().unwrap();
            (image.width(), image.height(), image.rgba_data().to_vec())
        })
        .collect()
}

/// 每个像素与 `color` 的各通道差都不超过 1
pub fn all_close(rgba: &[u8], color: [u8; 4]) -> bool {
    rgba.chunks_exact(4)
        .all(|px| px.iter().zip(color).all(|(&a, b)| a.abs_diff(b) <= 1))
}
