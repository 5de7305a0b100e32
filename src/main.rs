use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use contact_assistant::io::repl;
use contact_assistant::StdConsole;

fn main() -> Result<()> {
    // Logs go to stderr so REPL output on stdout stays clean; quiet by
    // default, overridable via RUST_LOG.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    info!("Starting contact assistant");

    let mut console = StdConsole::new();
    repl::run(&mut console)?;

    info!("Contact assistant stopped");
    Ok(())
}
