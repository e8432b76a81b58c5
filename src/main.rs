use std::{env, io, path::PathBuf, process};

use compile_proxy::{Config, WritePolicy};
use tracing_subscriber::EnvFilter;

/// Opt-in log filter, e.g. `COMPILE_PROXY_LOG=debug`
const LOG_ENV: &str = "COMPILE_PROXY_LOG";

fn main() {
    init_logging();

    // NOTE(skip) the first argument is the name of this program
    match compile_proxy::run(&config(), env::args_os().skip(1)) {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(e.exit_code());
        }
    }
}

fn config() -> Config {
    let artifact_dir = if cfg!(feature = "bin-dir") {
        PathBuf::from(compile_proxy::DEFAULT_ARTIFACT_DIR)
    } else {
        PathBuf::new()
    };

    let write_policy = if cfg!(feature = "nonempty-artifacts-only") {
        WritePolicy::NonEmptyOnly
    } else {
        WritePolicy::Always
    };

    Config {
        artifact_dir,
        write_policy,
        ..Config::default()
    }
}

// stays silent unless asked; stderr belongs to the compiler
fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("off"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
