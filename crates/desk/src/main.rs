use anyhow::Result;
use tracing::info;

use society_desk::config::Config;
use society_desk::logging::init_logging;
use society_desk::{DeskError, Workspace};

fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    if let Err(err) = run() {
        let notice = err.notice();
        tracing::warn!(code = notice.code, "{}", notice.message);
        println!("{}", serde_json::to_string_pretty(&notice)?);
        return Err(err.into());
    }

    Ok(())
}

fn run() -> Result<(), DeskError> {
    let config = Config::load()?;

    init_logging(&config.logging);

    info!("Starting Society Services Desk v{}", env!("CARGO_PKG_VERSION"));

    let workspace = Workspace::bootstrap(&config);
    println!("{}", workspace.render_snapshot(&config.session)?);

    Ok(())
}
