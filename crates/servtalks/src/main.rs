use relm4::prelude::*;
use servtalks::config;
use servtalks::gui::app::AppModel;
use servtalks::sys::runtime;
use talkdeck::Presentation;

fn main() {
    env_logger::init();

    let config = config::load_or_default();
    let presentation = Presentation::new(config.deck_settings());

    log::info!(
        "{} loaded with {} slides",
        config.deck.title,
        presentation.slides().len()
    );
    log::info!("Navigation: arrow keys move between slides, space advances");
    log::info!("Click an indicator to jump, swipe on touch screens, Escape closes dialogs");

    let (tx, rx) = async_channel::bounded(32);

    // Start Background Services
    runtime::start_background_services(tx);

    let app = RelmApp::new("org.servcrust.servtalks");

    app.run::<AppModel>((config, presentation, rx));
}
