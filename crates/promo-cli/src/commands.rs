use anyhow::{Context, Result, anyhow};
use serde::Serialize;

use promo_ingest::RecoveryStats;
use promo_model::RecoveredTables;
use promo_resolve::ResolutionEngine;

use crate::cli::{EligibleArgs, OutputArgs, OutputFormatArg, PreviewArgs};
use crate::render::{print_admin_view, print_eligible, print_preview, print_table_counts};

pub fn run_tables(tables: &RecoveredTables, stats: Option<&RecoveryStats>) -> Result<()> {
    print_table_counts(tables, stats);
    Ok(())
}

pub fn run_admin(tables: &RecoveredTables, args: &OutputArgs) -> Result<()> {
    let rows = ResolutionEngine::new(tables).administrative_view();
    match args.output {
        OutputFormatArg::Table => print_admin_view(&rows),
        OutputFormatArg::Json => print_json(&rows)?,
    }
    Ok(())
}

pub fn run_eligible(tables: &RecoveredTables, args: &EligibleArgs) -> Result<()> {
    let engine = ResolutionEngine::new(tables);
    let cards = engine.eligible_cards(&args.segment);
    match args.output.output {
        OutputFormatArg::Table => print_eligible(&engine, &args.segment, &cards),
        OutputFormatArg::Json => print_json(&cards)?,
    }
    Ok(())
}

pub fn run_preview(tables: &RecoveredTables, args: &PreviewArgs) -> Result<()> {
    let engine = ResolutionEngine::new(tables);
    let preview = engine
        .card_preview(&args.config_id)
        .ok_or_else(|| anyhow!("no card configuration with Config_ID '{}'", args.config_id))?;
    match args.output.output {
        OutputFormatArg::Table => print_preview(&preview),
        OutputFormatArg::Json => print_json(&preview)?,
    }
    Ok(())
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("serialize output")?;
    println!("{json}");
    Ok(())
}
