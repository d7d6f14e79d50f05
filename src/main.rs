use iced::{Application, Settings};

use folio::app::{Portfolio, WINDOW_SIZE};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    Portfolio::run(Settings {
        window: iced::window::Settings {
            size: WINDOW_SIZE,
            min_size: Some((480, 360)),
            ..iced::window::Settings::default()
        },
        antialiasing: true,
        ..Settings::default()
    })
    .map_err(|e| anyhow::anyhow!("Failed to run application: {}", e))?;

    Ok(())
}
