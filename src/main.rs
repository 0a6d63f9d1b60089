#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

fn main() -> eframe::Result {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    // The OS hands registered inkday://date/{timestamp} links to us as the
    // first argument; a bad link falls back to the default day.
    let start_date = std::env::args().nth(1).and_then(|arg| {
        match inkday::deeplink::parse_date_link(&arg) {
            Ok(date) => Some(date),
            Err(err) => {
                log::warn!("ignoring deep link {arg:?}: {err}");
                None
            }
        }
    });

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([420.0, 600.0])
            .with_min_inner_size([320.0, 460.0]),
        ..Default::default()
    };
    eframe::run_native(
        "inkday",
        native_options,
        Box::new(|cc| Ok(Box::new(inkday::JournalApp::new(cc, start_date)))),
    )
}
