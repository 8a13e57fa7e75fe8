use anyhow::Result;
use tabimport::cli::{Cli, Commands};
use tabimport::config::{Config, CONFIG_FILE_NAME};

use clap::Parser;
use std::io::Read;
use std::path::{Path, PathBuf};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Import {
            input,
            format,
            config,
            threshold,
            fail_below_threshold,
        } => {
            let (text, search_dir) = read_input(&input)?;
            let cfg = Config::load(config.as_deref(), &search_dir)?;
            let threshold = threshold.unwrap_or(cfg.auto_insert_threshold);

            let result = tabimport::import(&text, &cfg);

            let output_format = format.unwrap_or(cfg.format);
            tabimport::cli::output::render(&result, threshold, output_format)?;

            if fail_below_threshold && !result.auto_insertable(threshold) {
                std::process::exit(1);
            }
        }
        Commands::Init => {
            let path = std::env::current_dir()?.join(CONFIG_FILE_NAME);
            if path.exists() {
                eprintln!("{CONFIG_FILE_NAME} already exists");
                std::process::exit(1);
            }
            std::fs::write(&path, Config::default_toml())?;
            println!("Created {CONFIG_FILE_NAME}");
        }
        Commands::Explain { warning: None } => {
            println!("{}", tabimport::cli::explain::list_warnings());
        }
        Commands::Explain { warning: Some(warning) } => {
            use tabimport::cli::explain::{explain, list_warnings};
            match explain(&warning) {
                Some(text) => println!("{text}"),
                None => {
                    eprintln!("Unknown warning: {warning}\n");
                    eprintln!("{}", list_warnings());
                    std::process::exit(1);
                }
            }
        }
    }

    Ok(())
}

/// Read the pasted text from a file, or stdin when the path is `-`. The
/// config file is searched next to the input file (the CWD for stdin).
fn read_input(input: &Path) -> Result<(String, PathBuf)> {
    if input == Path::new("-") {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        Ok((text, std::env::current_dir()?))
    } else {
        let dir = input
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .map_or_else(std::env::current_dir, Ok)?;
        Ok((std::fs::read_to_string(input)?, dir))
    }
}
