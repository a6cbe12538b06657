//! Entry point for shaderfetch.
//! Loads a batch of shader files and prints what got registered.

use std::{sync::Arc, time::Duration};

use anyhow::{Context, Result};
use asset::{FileSource, HttpSource, LoaderConfig, ShaderLoader, ShaderSource, ShaderTable};

struct Args {
    base: Option<String>,
    connect_timeout: Option<u64>,
    timeout: Option<u64>,
    user_agent: Option<String>,
    quiet: bool,
    files: Vec<String>,
}

fn parse_args() -> Args {
    // Accept: --base=PREFIX, --connect-timeout=SECS, --timeout=SECS,
    // --user-agent=UA, --quiet, then file names
    let mut args = Args {
        base: None,
        connect_timeout: None,
        timeout: None,
        user_agent: None,
        quiet: false,
        files: Vec::new(),
    };
    for arg in std::env::args().skip(1) {
        if let Some(val) = arg.strip_prefix("--base=") {
            args.base = Some(val.to_string());
        } else if let Some(val) = arg.strip_prefix("--connect-timeout=") {
            args.connect_timeout = parse_secs("--connect-timeout", val);
        } else if let Some(val) = arg.strip_prefix("--timeout=") {
            args.timeout = parse_secs("--timeout", val);
        } else if let Some(val) = arg.strip_prefix("--user-agent=") {
            args.user_agent = Some(val.to_string());
        } else if arg == "--quiet" || arg == "-q" {
            args.quiet = true;
        } else if arg.starts_with("--") {
            eprintln!("[warn] Unknown option '{}', ignoring.", arg);
        } else {
            args.files.push(arg);
        }
    }
    args
}

fn parse_secs(flag: &str, val: &str) -> Option<u64> {
    match val.parse::<u64>() {
        Ok(secs) => Some(secs),
        Err(_) => {
            eprintln!("[warn] Invalid {} value '{}', using default.", flag, val);
            None
        }
    }
}

fn build_config(args: &Args) -> LoaderConfig {
    let mut config = LoaderConfig::new();
    if let Some(base) = &args.base {
        config = config.with_base(base.clone());
    }
    let connect = args
        .connect_timeout
        .map_or(config.connect_timeout, Duration::from_secs);
    let total = args.timeout.map_or(config.timeout, Duration::from_secs);
    config = config.with_timeouts(connect, total);
    if let Some(user_agent) = &args.user_agent {
        config = config.with_user_agent(user_agent.clone());
    }
    config
}

async fn run<S: ShaderSource>(source: S, config: LoaderConfig, args: &Args) -> Result<()> {
    let table = Arc::new(ShaderTable::new());
    let loader = ShaderLoader::new(source, table, config);

    let shaders = loader
        .load_and_collect(args.files.as_slice())
        .await
        .with_context(|| format!("Failed to load shaders from {}", loader.base()))?;

    let mut names: Vec<&String> = shaders.keys().collect();
    names.sort();
    for name in names {
        match &shaders[name] {
            Some(text) if args.quiet => println!("{}: {} bytes", name, text.len()),
            Some(text) => println!("// {}\n{}", name, text),
            None => println!("{}: <missing>", name),
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = parse_args();
    if args.files.is_empty() {
        anyhow::bail!("Usage: app [--base=PREFIX] [--connect-timeout=SECS] [--timeout=SECS] [--user-agent=UA] [--quiet] FILE...");
    }

    let config = build_config(&args);
    log::info!(
        "Starting shaderfetch. Base: {}, files={}",
        config.base,
        args.files.len()
    );

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to create tokio runtime")?;

    if config.is_remote() {
        let source = HttpSource::new(&config)?;
        rt.block_on(run(source, config, &args))?;
    } else {
        rt.block_on(run(FileSource, config, &args))?;
    }

    log::info!("Done.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> Args {
        Args {
            base: None,
            connect_timeout: None,
            timeout: None,
            user_agent: None,
            quiet: false,
            files: vec!["fog.frag".into()],
        }
    }

    #[test]
    fn config_defaults_without_flags() {
        let config = build_config(&args());
        let defaults = LoaderConfig::default();
        assert_eq!(config.base, defaults.base);
        assert_eq!(config.connect_timeout, defaults.connect_timeout);
        assert_eq!(config.timeout, defaults.timeout);
        assert_eq!(config.user_agent, defaults.user_agent);
    }

    #[test]
    fn config_follows_flags() {
        let config = build_config(&Args {
            base: Some("http://localhost:5000/static/shaders/".into()),
            connect_timeout: Some(2),
            timeout: Some(9),
            user_agent: Some("tester/1".into()),
            ..args()
        });
        assert!(config.is_remote());
        assert_eq!(config.connect_timeout, Duration::from_secs(2));
        assert_eq!(config.timeout, Duration::from_secs(9));
        assert_eq!(config.user_agent, "tester/1");
    }

    #[test]
    fn bad_seconds_fall_back() {
        assert_eq!(parse_secs("--timeout", "ten"), None);
        assert_eq!(parse_secs("--timeout", "10"), Some(10));
    }
}
