use clap::Parser;
use glide_bin::{cli::Cli, execute};
use glide_log::LogConfig;

fn main() {
    let cli = Cli::parse();

    let log_guard = glide_log::init(LogConfig {
        log_file_path: cli.log_file.clone(),
    })
    .unwrap_or_else(|e| {
        eprintln!("Error: Failed to initialize logging: {e}");
        std::process::exit(1);
    });

    let code = match execute(&cli) {
        Ok(output) => {
            println!("{output}");
            0
        },
        Err(e) => {
            tracing::error!("{e:#}");
            eprintln!("Command failed: {e:#}");
            1
        },
    };

    // Flush the log file before exiting
    drop(log_guard);
    std::process::exit(code);
}
