mod app;
mod application;
mod domain;
mod ui;
mod utils;

use iced::window;

fn main() -> iced::Result {
    simple_logger::SimpleLogger::new()
        .with_level(log::LevelFilter::Info)
        .init()
        .expect("failed to build logger instance");

    let icon_data = include_bytes!("../assets/icon.png");

    // A broken icon is cosmetic; start without one.
    let icon = image::load_from_memory(icon_data).ok().and_then(|img| {
        let rgba = img.to_rgba8();
        let (width, height) = rgba.dimensions();
        window::icon::from_rgba(rgba.into_raw(), width, height).ok()
    });

    iced::application(app::DownloadApp::default, app::update, app::view)
        .title("YouTube MP3 Downloader")
        .window(window::Settings {
            icon,
            ..Default::default()
        })
        .run()
}
