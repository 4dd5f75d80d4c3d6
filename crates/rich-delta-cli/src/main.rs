mod args;
mod inspect;
mod render;

use anyhow::{Context, Result, anyhow};
use args::{Args, Mode, USAGE};
use rich_delta_config::Config;
use rich_delta_engine::{Registry, io, parse, parse_into_test_data, parse_mention_usernames};
use std::{env, process};

use render::{describe_group, group_title};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = match Args::parse(env::args().skip(1)) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("{USAGE}");
            process::exit(1);
        }
    };

    let registry = load_registry(&args)?;
    let ops = io::read_operations(&args.input)
        .with_context(|| format!("Failed to read delta from '{}'", args.input.display()))?;
    log::info!("read {} operations from {}", ops.len(), args.input.display());

    match args.mode {
        Mode::Print => {
            for (i, group) in parse(&registry, &ops).iter().enumerate() {
                println!("{}", group_title(i, group));
                for line in describe_group(group) {
                    println!("  {line}");
                }
            }
        }
        Mode::Mentions => {
            for name in parse_mention_usernames(&registry, &ops) {
                println!("{name}");
            }
        }
        Mode::TestData => {
            let data = parse_into_test_data(&registry, &ops);
            println!("{}", serde_json::to_string_pretty(&data)?);
        }
        Mode::Inspect => {
            let title = args.input.display().to_string();
            inspect::run(title, parse(&registry, &ops))?;
        }
    }

    Ok(())
}

/// The registry from `--config`, else the default config file, else the built-ins.
fn load_registry(args: &Args) -> Result<Registry> {
    let config = match &args.config {
        Some(path) => {
            let path = Config::expand_path(path).unwrap_or_else(|| path.clone());
            let config = Config::load_from_path(&path)?
                .ok_or_else(|| anyhow!("Config file '{}' not found", path.display()))?;
            log::debug!("using config {}", path.display());
            Some(config)
        }
        None => Config::load()?,
    };

    match config {
        Some(config) => Ok(config.build_registry()?),
        None => {
            log::debug!(
                "no config at {}, using built-in variants",
                Config::config_path().display()
            );
            Ok(Registry::builtin())
        }
    }
}
