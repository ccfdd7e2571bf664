use holdsplit_lib::config::{default_log_filter, Config};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_log_filter())),
        )
        .init();

    if let Err(err) = holdsplit_lib::run(&Config::default()) {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}
