//! favicon-gen：由源图标生成 favicon.ico（16/32/48/64）与 32×32 favicon.png

pub mod config;
pub mod error;
pub mod favicon;

pub use config::FaviconConfig;
pub use error::GenerationFailure;
pub use favicon::{GeneratedArtifacts, generate};
