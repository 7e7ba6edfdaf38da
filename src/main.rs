//! favicon-gen 命令行入口：无参数，读取 assets/icons/icon-192x192.png

use favicon_gen::{FaviconConfig, generate};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // 唯一把失败映射为退出码的地方
    if let Err(e) = generate(&FaviconConfig::default()) {
        log::debug!("generation failed: {:?}", e);
        println!("Error generating favicons: {}", e);
        std::process::exit(1);
    }
}
