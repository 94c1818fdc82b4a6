use mobile_processor_sim::{Console, Shell};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing; stdout is the interaction surface, so
    // diagnostics go to stderr. Filter via RUST_LOG, default info.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    info!("Mobile processor simulator starting");

    let mut shell = Shell::new(Console::new(), Console::new());

    match shell.run() {
        Ok(()) => {
            info!("Simulator exited");
            Ok(())
        }
        Err(e) => {
            eprintln!("Simulator failed: {}", e);
            Err(Box::new(e) as Box<dyn std::error::Error>)
        }
    }
}
