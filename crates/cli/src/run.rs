// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Deckhand Contributors

//! The `deckhand run` command.

use anyhow::{Context, Result};
use dh_core::{format_elapsed, ActionSpec, Secret};
use dh_engine::{Engine, EngineConfig, ExecCallbacks};
use std::io::Read;
use tokio_util::sync::CancellationToken;

/// Environment variable supplying the elevation secret when credentials
/// are not cached. Read once and handed to the engine as a wiped buffer.
const SUDO_SECRET_VAR: &str = "DECKHAND_SUDO_SECRET";

#[derive(clap::Args)]
pub struct RunArgs {
    /// Command line to execute (passed to the shell)
    pub command: String,

    /// Display label for the action
    #[arg(long)]
    pub label: Option<String>,

    /// Timeout in seconds; 0 means unlimited
    #[arg(long, default_value_t = 0)]
    pub timeout: u64,

    /// Run through the privilege elevation wrapper
    #[arg(long)]
    pub sudo: bool,

    /// Mark the action dangerous (requires --yes to proceed)
    #[arg(long)]
    pub danger: bool,

    /// Confirm a dangerous action
    #[arg(long)]
    pub yes: bool,

    /// Feed this process's stdin to the command
    #[arg(long)]
    pub stdin: bool,

    /// Request a widget refresh after a successful run
    #[arg(long)]
    pub refresh: bool,

    /// Extra environment variables for the command
    #[arg(long = "env", value_name = "KEY=VALUE")]
    pub env: Vec<String>,

    /// Print the final result as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(args: RunArgs) -> Result<i32> {
    // Confirmation is the caller's job, never the engine's.
    if args.danger && !args.yes {
        anyhow::bail!("refusing to run a dangerous action without --yes");
    }

    let mut builder = ActionSpec::builder(&args.command)
        .danger(args.danger)
        .requires_sudo(args.sudo)
        .timeout_secs(args.timeout)
        .refresh_after_success(args.refresh);
    if let Some(label) = &args.label {
        builder = builder.label(label.clone());
    }
    for pair in &args.env {
        let (key, value) = pair
            .split_once('=')
            .with_context(|| format!("--env expects KEY=VALUE, got `{pair}`"))?;
        builder = builder.env(key, value);
    }
    let spec = builder.build();

    let engine = Engine::new(EngineConfig::new());

    let secret = if args.sudo && !engine.is_elevation_cached().await {
        let value = std::env::var(SUDO_SECRET_VAR).with_context(|| {
            format!("elevation not cached and {SUDO_SECRET_VAR} is not set")
        })?;
        Some(Secret::from(value))
    } else {
        None
    };

    let stdin_payload = if args.stdin {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("reading stdin payload")?;
        Some(buf)
    } else {
        None
    };

    // Ctrl-C drives the same cancellation path a dashboard cancel
    // button would.
    let cancel = CancellationToken::new();
    let ctrl_c = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            ctrl_c.cancel();
        }
    });

    let label = spec.display_name().to_string();
    let mut callbacks = ExecCallbacks::new()
        .on_output(|line| println!("{line}"))
        .on_error_line(|line| eprintln!("{line}"))
        .on_progress({
            let label = label.clone();
            move |secs| {
                tracing::debug!(action = %label, elapsed = %format_elapsed(secs), "running");
            }
        })
        .on_graceful_terminate(|| eprintln!("terminating (SIGTERM sent)..."))
        .on_force_kill(|| eprintln!("process did not stop, force killed"));

    let result = engine
        .execute(&spec, cancel, secret, stdin_payload, &mut callbacks)
        .await;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        eprintln!("{label}: {}", result.summary());
        if result.is_success() && spec.refresh_after_success {
            eprintln!("{label}: widget refresh requested");
        }
    }

    Ok(if result.is_success() {
        0
    } else if result.exit_code > 0 {
        result.exit_code
    } else {
        1
    })
}
