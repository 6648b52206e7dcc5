//! pointercast - physics pointer raycasting probe
//!
//! Loads a scene description, casts every configured pointer through every
//! configured raycaster, and writes the hit candidates as JSON lines.

mod config;
mod probe;

use anyhow::{bail, Result};
use config::SceneConfig;
use pointercast_testkit::JsonlSink;
use std::{env, path::PathBuf};
use tracing::info;

const USAGE: &str = "usage: pointercast --scene <scene.toml> [--out <results.jsonl>]";

fn main() -> Result<()> {
    // Initialize tracing with WARN level by default (can be overridden via RUST_LOG env var)
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    info!("Starting pointercast v{}", env!("CARGO_PKG_VERSION"));

    let cli = match CliOptions::parse(env::args().skip(1))? {
        Some(cli) => cli,
        None => {
            println!("{USAGE}");
            return Ok(());
        }
    };

    let scene = SceneConfig::load_from_path(&cli.scene)?.build()?;
    let mut sink = match &cli.out {
        Some(path) => JsonlSink::create(path)?,
        None => JsonlSink::stdout(),
    };
    let hits = probe::run(&scene, &mut sink)?;
    info!(pointers = scene.pointers.len(), hits, "probe finished");
    Ok(())
}

#[derive(Debug, PartialEq)]
struct CliOptions {
    scene: PathBuf,
    out: Option<PathBuf>,
}

impl CliOptions {
    /// Parse arguments. `Ok(None)` means help was requested.
    fn parse<I: Iterator<Item = String>>(mut args: I) -> Result<Option<Self>> {
        let mut scene = None;
        let mut out = None;
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--scene" => scene = args.next().map(PathBuf::from),
                "--out" => out = args.next().map(PathBuf::from),
                "-h" | "--help" => return Ok(None),
                other => tracing::warn!("ignoring unknown argument {other:?}"),
            }
        }
        let Some(scene) = scene else {
            bail!("missing --scene\n{USAGE}");
        };
        Ok(Some(Self { scene, out }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> impl Iterator<Item = String> {
        list.iter().map(|s| s.to_string()).collect::<Vec<_>>().into_iter()
    }

    #[test]
    fn parses_scene_and_out() {
        let cli = CliOptions::parse(args(&["--scene", "a.toml", "--out", "b.jsonl"]))
            .unwrap()
            .unwrap();
        assert_eq!(cli.scene, PathBuf::from("a.toml"));
        assert_eq!(cli.out, Some(PathBuf::from("b.jsonl")));
    }

    #[test]
    fn help_short_circuits() {
        assert_eq!(CliOptions::parse(args(&["--help"])).unwrap(), None);
    }

    #[test]
    fn scene_is_required() {
        assert!(CliOptions::parse(args(&["--out", "b.jsonl"])).is_err());
    }
}
