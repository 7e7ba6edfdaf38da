//! 生成配置：输入/输出路径与图标尺寸（默认即固定约定路径）

use std::path::{Path, PathBuf};

/// 源图标（相对工作目录）
pub const DEFAULT_INPUT_PATH: &str = "assets/icons/icon-192x192.png";
/// 多尺寸 ICO 输出
pub const DEFAULT_ICO_OUTPUT_PATH: &str = "favicon.ico";
/// 32×32 PNG 输出
pub const DEFAULT_PNG_OUTPUT_PATH: &str = "assets/icons/favicon.png";

/// ICO 内嵌的尺寸，按升序
pub const ICON_SIZES: [(u32, u32); 4] = [(16, 16), (32, 32), (48, 48), (64, 64)];
/// 独立 PNG 的尺寸
pub const PNG_SIZE: (u32, u32) = (32, 32);

/// 一次生成所需的全部输入
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FaviconConfig {
    pub input_path: PathBuf,
    pub ico_output_path: PathBuf,
    pub png_output_path: PathBuf,
    pub png_size: (u32, u32),
    pub sizes: Vec<(u32, u32)>,
}

impl Default for FaviconConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            ico_output_path: PathBuf::from(DEFAULT_ICO_OUTPUT_PATH),
            png_output_path: PathBuf::from(DEFAULT_PNG_OUTPUT_PATH),
            png_size: PNG_SIZE,
            sizes: ICON_SIZES.to_vec(),
        }
    }
}

impl FaviconConfig {
    /// 默认的相对路径全部挂到 `root` 下（测试里用临时目录代替工作目录）
    pub fn rooted_at(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        let defaults = Self::default();
        Self {
            input_path: root.join(defaults.input_path),
            ico_output_path: root.join(defaults.ico_output_path),
            png_output_path: root.join(defaults.png_output_path),
            ..defaults
        }
    }
}
