//! Main application entry point (native).

#[cfg(feature = "native")]
fn main() {
    env_logger::init();
    log::info!("Starting DocumentView demo");

    let config = match std::env::args_os().nth(1) {
        Some(path) => match docview_app::AppConfig::from_file(std::path::Path::new(&path)) {
            Ok(config) => config,
            Err(e) => {
                log::error!("Failed to load config {:?}: {}", path, e);
                std::process::exit(1);
            }
        },
        None => docview_app::AppConfig::default(),
    };

    pollster::block_on(docview_app::App::run(config));
}

#[cfg(not(feature = "native"))]
fn main() {
    panic!("Native feature not enabled. Use `cargo run --features native`");
}
