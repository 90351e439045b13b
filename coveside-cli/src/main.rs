//! Entry point for the Coveside command-line interface.
#![forbid(unsafe_code)]

fn main() {
    env_logger::init();
    if let Err(err) = coveside_cli::run() {
        eprintln!("coveside: {err}");
        std::process::exit(1);
    }
}
