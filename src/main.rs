use anyhow::Result;
use cookie_extractor::cli::{self, Command};
use cookie_extractor::cookie::ExportFormat;
use cookie_extractor::{util, App, Config};
use std::fs::{self, OpenOptions};
use std::io;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = cli::parse();
    util::init_data_dir(cli.data_dir.clone());

    match cli.command {
        Some(Command::Extract(args)) => {
            // Headless runs log to stderr so stdout stays pure JSON
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_writer(io::stderr)
                .init();

            let config = Config::load_from(&util::config_path());
            let format = if args.compact {
                ExportFormat::Compact
            } else {
                config.export_format
            };
            cli::run_extract(&args, format, &mut io::stdout().lock())?;
            Ok(())
        }
        None => {
            // Initialize logging to file (~/.cookie-extractor/logs/cookie-extractor.log)
            fs::create_dir_all(util::logs_dir())?;

            let log_file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(util::log_file_path())?;

            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_writer(log_file)
                .with_ansi(false) // Disable ANSI colors in log file
                .init();

            let config = Config::load();
            let mut app = App::new(config).with_config_file(util::config_path());
            if let Some(pattern) = &cli.pattern {
                app.set_pattern(pattern);
            }
            if let Some(file) = &cli.file {
                app.preload_file(file);
            }
            app.run()
        }
    }
}

/// `RUST_LOG` when set, warnings otherwise
fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
}
