use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use heron::prelude::*;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod batch;
mod tutor;

#[derive(Parser)]
#[command(name = "heron-cli")]
#[command(about = "Heron's Formula calculator and guided walkthrough")]
struct Cmd {
    /// Optional JSON file overriding canvas, tolerance and scale settings
    #[arg(long)]
    cfg: Option<PathBuf>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Calculate from three typed side lengths and print the session as JSON
    Area {
        #[arg(long, allow_hyphen_values = true)]
        a: String,
        #[arg(long, allow_hyphen_values = true)]
        b: String,
        #[arg(long, allow_hyphen_values = true)]
        c: String,
    },
    /// Calculate from three canvas vertices given as `x,y`
    Drag {
        #[arg(long, value_parser = parse_point)]
        v1: Vertex,
        #[arg(long, value_parser = parse_point)]
        v2: Vertex,
        #[arg(long, value_parser = parse_point)]
        v3: Vertex,
    },
    /// Print a reproducible random valid triangle
    Random {
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
    },
    /// Interactive walkthrough on stdin (numbers, `skip`, `back`, `forward`, `quit`)
    Tutor {
        #[arg(long)]
        a: String,
        #[arg(long)]
        b: String,
        #[arg(long)]
        c: String,
    },
    /// Compute s and area for every `a,b,c` row of a CSV file
    Batch {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
    },
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    let cfg = load_cfg(cmd.cfg.as_deref())?;
    match cmd.action {
        Action::Area { a, b, c } => area(cfg, [a, b, c]),
        Action::Drag { v1, v2, v3 } => drag(cfg, VertexSet::new([v1, v2, v3])),
        Action::Random { seed, index } => random(seed, index),
        Action::Tutor { a, b, c } => {
            let mut w = HeronWidget::new(cfg);
            w.set_side_input(SideLabel::A, a);
            w.set_side_input(SideLabel::B, b);
            w.set_side_input(SideLabel::C, c);
            w.calculate(InputMode::Numeric)?;
            let stdin = std::io::stdin();
            tutor::run(&mut w, stdin.lock(), &mut std::io::stdout())
        }
        Action::Batch { input, out } => {
            let stats = batch::run(&input, &out)?;
            println!("{}", serde_json::to_string_pretty(&stats)?);
            Ok(())
        }
    }
}

fn load_cfg(path: Option<&Path>) -> Result<HeronCfg> {
    let Some(path) = path else {
        return Ok(HeronCfg::default());
    };
    let bytes = std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let cfg: HeronCfg = serde_json::from_slice(&bytes)
        .with_context(|| format!("parsing {}", path.display()))?;
    cfg.check()
        .with_context(|| format!("invalid config {}", path.display()))?;
    tracing::info!(path = %path.display(), ?cfg, "cfg");
    Ok(cfg)
}

fn parse_point(s: &str) -> Result<Vertex, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected `x,y`, got {s:?}"))?;
    let coord = |v: &str| {
        v.trim()
            .parse::<f64>()
            .map_err(|e| format!("bad coordinate {v:?}: {e}"))
    };
    Ok(Vertex::new(coord(x)?, coord(y)?))
}

fn area(cfg: HeronCfg, raw: [String; 3]) -> Result<()> {
    tracing::info!(a = %raw[0], b = %raw[1], c = %raw[2], "area");
    let mut w = HeronWidget::new(cfg);
    let session = w.request_calculation(RawInputs::Numeric(raw))?;
    println!("{}", serde_json::to_string_pretty(session)?);
    Ok(())
}

fn drag(cfg: HeronCfg, v: VertexSet) -> Result<()> {
    let canvas = cfg.canvas;
    for p in v.points() {
        let clamped = heron::geometric::clamp_to_canvas(*p, &canvas);
        if clamped != *p {
            bail!(
                "vertex ({}, {}) lies outside the {}x{} canvas inset by {}",
                p.x,
                p.y,
                canvas.width,
                canvas.height,
                canvas.inset
            );
        }
    }
    tracing::info!(?v, "drag");
    let mut w = HeronWidget::new(cfg);
    let session = w.request_calculation(RawInputs::Geometric(v))?;
    println!("{}", serde_json::to_string_pretty(session)?);
    Ok(())
}

fn random(seed: u64, index: u64) -> Result<()> {
    let tok = ReplayToken { seed, index };
    let sides = random_sides(tok);
    let obj = serde_json::json!({
        "replay": tok,
        "sides": sides,
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn parse_point_accepts_pairs() {
        assert_eq!(parse_point("10, 20.5").unwrap(), Vertex::new(10.0, 20.5));
        assert!(parse_point("10").is_err());
        assert!(parse_point("x,1").is_err());
    }

    #[test]
    fn load_cfg_merges_partial_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cfg.json");
        fs::write(&path, r#"{"tolerance": 0.05}"#).unwrap();
        let cfg = load_cfg(Some(&path)).unwrap();
        assert_eq!(cfg.tolerance, 0.05);
        assert_eq!(cfg.canvas, CanvasBounds::default());
        assert_eq!(cfg.rest_diagonal, None);
    }

    #[test]
    fn load_cfg_defaults_and_errors() {
        assert_eq!(load_cfg(None).unwrap(), HeronCfg::default());
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, "not json").unwrap();
        assert!(load_cfg(Some(&path)).is_err());
    }

    #[test]
    fn load_cfg_rejects_canvas_without_room() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("narrow.json");
        fs::write(&path, r#"{"canvas": {"width": 15.0}}"#).unwrap();
        let err = load_cfg(Some(&path)).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CfgError>(),
            Some(CfgError::Canvas { .. })
        ));
    }
}
