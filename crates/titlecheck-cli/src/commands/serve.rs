//! Serve command - run the upload web service.

use colored::Colorize;

use crate::server::{ServerConfig, app, state::AppState};

pub fn run(host: String, port: u16, max_upload_mb: usize) -> Result<(), Box<dyn std::error::Error>> {
    let config = ServerConfig {
        host,
        port,
        max_upload_bytes: max_upload_mb.saturating_mul(1024 * 1024),
    };

    let url = format!("http://{}:{}", config.host, config.port);
    println!(
        "{} {}",
        "Starting titlecheck server at".cyan().bold(),
        url.white().bold()
    );
    println!();
    println!("  Upload form: {}/", url);
    println!("  API:         POST {}/api/validate", url);
    println!("  Max upload:  {} MB", max_upload_mb);
    println!();
    println!("Press {} to stop the server", "Ctrl+C".yellow().bold());
    println!();

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(app::run_server(AppState::default(), &config))
}
