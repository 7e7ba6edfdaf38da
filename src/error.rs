//! 生成失败：解码、缩放、编码、写文件统一归为一类

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenerationFailure {
    #[error("cannot open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot decode {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// 所有请求尺寸都大于源图
    #[error("no icon size fits a {width}x{height} source image")]
    NoUsableSizes { width: u32, height: u32 },

    #[error("cannot encode {}: {source}", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot encode {}: {source}", path.display())]
    EncodePng {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("cannot write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
