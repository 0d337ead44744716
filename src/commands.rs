//! Command handlers. Each prints one JSON document to stdout.

use std::path::PathBuf;

use anyhow::{bail, Context};
use chrono::Datelike;
use serde::Serialize;
use serde_json::json;

use es_core::ports::ClockPort;
use es_core::Locality;
use es_infra::fs::write_export_csv_file;

use crate::bootstrap::AppRuntime;
use crate::cli::Command;

fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    let rendered = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{rendered}");
    Ok(())
}

pub async fn dispatch(runtime: &AppRuntime, command: Command) -> anyhow::Result<()> {
    let usecases = runtime.usecases();
    let locality_or_default = |locality: Option<Locality>| locality.unwrap_or(runtime.default_locality);

    match command {
        Command::Localities => print_json(&usecases.list_localities().execute()),

        Command::Analyze { barcode, locality } => {
            let analysis = usecases
                .analyze_product()
                .execute(&barcode, locality_or_default(locality))
                .await?;
            print_json(&analysis)
        }

        Command::Scan { barcode, locality } => {
            let analysis = usecases
                .analyze_product()
                .execute(&barcode, locality_or_default(locality))
                .await?;
            let record = usecases.save_scan().execute(&analysis).await?;
            print_json(&json!({ "analysis": analysis, "record": record }))
        }

        Command::History { limit } => {
            print_json(&usecases.list_scan_history().execute(limit as usize).await)
        }

        Command::Analytics => print_json(&usecases.compute_dashboard().execute()),

        Command::Report { year, month } => {
            let today = runtime.deps.clock.now().date_naive();
            let report = usecases
                .build_monthly_report()
                .execute(year.unwrap_or(today.year()), month.unwrap_or(today.month()))?;
            print_json(&report)
        }

        Command::Export { year, month, out } => {
            let today = runtime.deps.clock.now().date_naive();
            let export = usecases
                .export_monthly_scans()
                .execute(year.unwrap_or(today.year()), month.unwrap_or(today.month()))?;

            let path = match out {
                Some(dir) if dir.is_dir() => dir.join(&export.file_name),
                Some(file) => file,
                None => PathBuf::from(&export.file_name),
            };
            write_export_csv_file(&path, &export.rows)?;

            print_json(&json!({ "path": path, "rows": export.rows.len() }))
        }

        Command::Reset { yes } => {
            if !yes {
                bail!("Refusing to delete the scan history without --yes");
            }
            let removed = usecases.reset_scan_history().execute().await?;
            print_json(&json!({ "removed": removed }))
        }
    }
}
