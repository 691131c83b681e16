//! mdpress - Converts a tree of Markdown posts into HTML pages.
//!
//! This binary provides the CLI interface to the mdpress library,
//! building a site from a source directory or converting stdin.

mod cli;

use clap::Parser as ClapParser;
use cli::Cli;
use log::{debug, error, info, LevelFilter};
use mdpress::site::SiteBuilder;
use mdpress_config::Config;
use mdpress_core::Result;
use std::io::{self, Read, Write};
use std::path::Path;

fn main() {
    let cli = <Cli as ClapParser>::parse();

    // Handle --paths flag
    if cli.show_paths {
        cli::show_paths();
        return;
    }

    setup_logging(&cli.log_level);
    info!("mdpress v{}", env!("CARGO_PKG_VERSION"));

    if cli.init_config {
        match Config::ensure_config_file() {
            Ok(path) => println!("{}", path.display()),
            Err(e) => {
                error!("Error: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    if let Err(e) = run(&cli) {
        error!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Set up logging based on the log level argument.
fn setup_logging(level: &str) {
    let filter = match level.to_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        _ => LevelFilter::Warn,
    };

    env_logger::Builder::new()
        .filter_level(filter)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] {}: {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}

/// Main application logic.
fn run(cli: &Cli) -> Result<()> {
    let config = load_config(cli)?;
    debug!("Loaded config: {:?}", config);

    let builder = SiteBuilder::new(config)?;

    match (&cli.src_dir, &cli.dst_dir) {
        (Some(src), Some(dst)) => run_build(&builder, src, dst),
        _ => run_stdin(&builder),
    }
}

/// Load configuration and apply CLI overrides.
fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = Config::load_with_override(cli.config.as_deref())?;
    apply_cli(&mut config, cli);
    Ok(config)
}

/// Apply flags that take precedence over any config file.
fn apply_cli(config: &mut Config, cli: &Cli) {
    if cli.serial {
        config.features.parallel = false;
    }
    if let Some(ref container) = cli.container {
        config.output.container = container.clone();
    }
}

/// Build a site from a source directory.
fn run_build(builder: &SiteBuilder, src: &Path, dst: &Path) -> Result<()> {
    info!("Source path: {}", src.display());
    info!("Destination path: {}", dst.display());

    let report = builder.build(src, dst)?;
    info!("Finished: {}", report);
    Ok(())
}

/// Convert stdin to stdout.
fn run_stdin(builder: &SiteBuilder) -> Result<()> {
    info!("Reading from stdin");

    let mut source = String::new();
    io::stdin().read_to_string(&mut source)?;

    let conversion = builder.convert_document(Path::new("<stdin>"), &source);

    let mut stdout = io::stdout().lock();
    stdout.write_all(conversion.html.as_bytes())?;
    writeln!(stdout)?;
    stdout.flush()?;
    Ok(())
}
