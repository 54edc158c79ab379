use flare_core::cli;

fn main() {
    tracing_subscriber::fmt::init();

    if let Err(e) = cli::run_cli() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
