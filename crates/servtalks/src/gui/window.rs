use crate::config::DisplayConfig;
use gtk::gdk;
use gtk::prelude::*;
use gtk4 as gtk;

pub fn get_monitor_by_name(name: &str) -> Option<gdk::Monitor> {
    let display = gdk::Display::default()?;
    let monitors = display.monitors();
    (0..monitors.n_items()).find_map(|i| {
        monitors
            .item(i)
            .and_then(|item| item.downcast::<gdk::Monitor>().ok())
            .filter(|m| m.connector().is_some_and(|n| n.as_str() == name))
    })
}

pub fn apply_display(window: &gtk::ApplicationWindow, display: &DisplayConfig) {
    if !display.fullscreen {
        return;
    }

    match display.monitor.as_deref() {
        Some(name) => match get_monitor_by_name(name) {
            Some(monitor) => window.fullscreen_on_monitor(&monitor),
            None => {
                log::warn!("Monitor '{}' not found, using the default one", name);
                window.fullscreen();
            }
        },
        None => window.fullscreen(),
    }
}
