mod app;
mod colors;

pub use app::SimoneApp;
