//! `postrun list` — show registered triggers and their watched paths.

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;
use tabled::{settings::Style, Table, Tabled};

use postrun_triggers::builtin_registry;

/// Arguments for `postrun list`.
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Emit machine-readable JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Tabled)]
struct TriggerRow {
    #[tabled(rename = "trigger")]
    name: String,
    #[tabled(rename = "description")]
    description: String,
    #[tabled(rename = "watched paths")]
    watched: String,
}

#[derive(Serialize)]
struct TriggerJson {
    name: String,
    description: String,
    watched_paths: Vec<String>,
}

impl ListArgs {
    pub fn run(self) -> Result<()> {
        let registry = builtin_registry().context("invalid built-in trigger registry")?;

        if self.json {
            let payload: Vec<TriggerJson> = registry
                .iter()
                .map(|t| TriggerJson {
                    name: t.name().to_string(),
                    description: t.description().to_string(),
                    watched_paths: t.interest(),
                })
                .collect();
            println!(
                "{}",
                serde_json::to_string_pretty(&payload)
                    .context("failed to serialize trigger list")?
            );
            return Ok(());
        }

        println!("{} registered trigger(s), in execution order:", registry.len());
        let rows: Vec<TriggerRow> = registry
            .iter()
            .map(|t| TriggerRow {
                name: t.name().to_string(),
                description: t.description().to_string(),
                watched: t.interest().join(", "),
            })
            .collect();
        let mut table = Table::new(rows);
        table.with(Style::rounded());
        println!("{table}");
        Ok(())
    }
}
