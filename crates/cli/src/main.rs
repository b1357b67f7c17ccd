use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use homcycle::api::{search, PersistencePair, ReduceCfg};
use serde_json::{json, Value};
use std::path::{Path, PathBuf};
use tracing_subscriber::{fmt::SubscriberBuilder, EnvFilter};

mod complex;

use complex::ComplexFile;

#[derive(Parser)]
#[command(name = "homcycle")]
#[command(about = "Integer persistence check and optimal one-cycle search")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Reduce a complex (JSON) and report the first non-unit pivot, if any
    Check {
        #[arg(long)]
        input: PathBuf,
        /// Reduce every column instead of clearing paired ones
        #[arg(long)]
        no_twist: bool,
    },
    /// Write a complex (JSON) as a boundary-map chunk
    Encode {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
    },
    /// Shortest loop through a birth edge of a boundary-map chunk
    Search {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        birth: u64,
    },
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    let out = match cmd.action {
        Action::Check { input, no_twist } => check(
            &input,
            ReduceCfg {
                use_twist: !no_twist,
            },
        )?,
        Action::Encode { input, out } => encode(&input, &out)?,
        Action::Search { input, birth } => search_chunk(&input, birth)?,
    };
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}

fn pair_json(p: &PersistencePair) -> Value {
    json!([p.dimension, p.birth.0, p.death.0])
}

fn check(input: &Path, cfg: ReduceCfg) -> Result<Value> {
    tracing::info!(input = %input.display(), twist = cfg.use_twist, "check");
    let cx = ComplexFile::read(input)?;
    let mut m = cx.to_matrix(cfg)?;
    let (status, cell) = m.check()?;
    if status != 0 {
        tracing::warn!(status, cell = cell.0, "non-unit pivot");
    }
    Ok(json!({
        "status": status,
        "cell": cell.0,
        "pairs": m.pairs().iter().map(pair_json).collect::<Vec<_>>(),
    }))
}

fn encode(input: &Path, out: &Path) -> Result<Value> {
    tracing::info!(input = %input.display(), out = %out.display(), "encode");
    let cx = ComplexFile::read(input)?;
    let bytes = cx.to_chunk();
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(out, &bytes).with_context(|| format!("writing {}", out.display()))?;
    Ok(json!({
        "cells": cx.cells.len(),
        "bytes": bytes.len(),
        "out": out.to_string_lossy(),
    }))
}

fn search_chunk(input: &Path, birth: u64) -> Result<Value> {
    tracing::info!(input = %input.display(), birth, "search");
    let bytes = std::fs::read(input).with_context(|| format!("reading {}", input.display()))?;
    let cycle = search(&bytes, birth).with_context(|| format!("searching {}", input.display()))?;
    Ok(json!({
        "birth": birth,
        "cycle": cycle.map(|ids| ids.into_iter().map(|c| c.0).collect::<Vec<_>>()),
    }))
}
