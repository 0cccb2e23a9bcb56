mod app;
mod config;
mod dialog;
mod format;
mod logging;
mod panel;
mod provider;
mod theme;
mod tui;
mod types;

use anyhow::Result;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let mut app = app::App::new()?;
    app.run()
}
