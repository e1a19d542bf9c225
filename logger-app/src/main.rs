use logger_app::app::{self, AppConfig};

use env_logger::{Builder, Target};
use log::LevelFilter;

fn init_logger() {
    Builder::new()
        .target(Target::Stdout)
        .filter_level(LevelFilter::Warn)
        .filter_module("logger_app", LevelFilter::Debug)
        .init();
}

fn main() -> iced::Result {
    if std::env::var("RUST_LOG").is_err() {
        init_logger();
    } else {
        env_logger::init();
    }

    let config = AppConfig::from_environment();

    app::run(config)
}
