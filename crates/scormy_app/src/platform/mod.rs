mod app;
mod effects;
mod logging;
mod script_file;
mod ui;

pub use app::run_app;
