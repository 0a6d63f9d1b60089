#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod canvas;
pub mod codec;
pub mod deeplink;
pub mod drawing;
pub mod entry;
pub mod export;
pub mod geometry;
pub mod history;
pub mod renderer;
pub mod shared_store;
pub mod store;
pub mod stroke;

pub use app::JournalApp;
pub use canvas::StrokeCapture;
pub use drawing::Drawing;
pub use entry::DayEntry;
pub use history::DrawingHistory;
pub use renderer::DrawingRenderer;
pub use shared_store::WidgetExport;
pub use store::JournalStore;
pub use stroke::Stroke;
