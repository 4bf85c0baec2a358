mod cli;
mod report;

use std::time::Duration;

use clap::Parser;
use eyre::{bail, WrapErr};

use synlabel_core::source::{load_label_list, open_source};
use synlabel_core::ModelLabelList;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let args = cli::Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_file(true)
        .with_line_number(true)
        .with_level(true)
        .init();

    // The label list is loaded once and is read-only for the rest of the run.
    let source = open_source(&args.labels, Duration::from_secs(args.timeout_secs))
        .context("open model label source")?;
    let labels = load_label_list(source.as_ref())
        .await
        .wrap_err_with(|| format!("load model label list from {}", source.describe()))?;
    tracing::info!(
        source = %source.describe(),
        entries = labels.len(),
        "loaded model label list"
    );

    match args.command {
        cli::Command::Match {
            dataset_labels,
            all,
        } => run_match(&labels, &dataset_labels, all),
        cli::Command::MapDir { dir, json } => {
            let mappings = synlabel_core::dataset::map_dataset_dir(&dir, &labels)
                .wrap_err_with(|| format!("map dataset directory {}", dir.display()))?;
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&mappings).context("serialize mapping")?
                );
            } else {
                for mapping in &mappings {
                    println!("{}", report::mapping_line(mapping));
                }
            }
            tracing::info!("{}", report::mapping_summary(&mappings));
            Ok(())
        }
        cli::Command::List { json } => {
            if json {
                let entries: Vec<_> = labels.iter().collect();
                println!(
                    "{}",
                    serde_json::to_string_pretty(&entries).context("serialize label list")?
                );
            } else {
                for label in labels.iter() {
                    println!("{}", report::label_line(label));
                }
            }
            Ok(())
        }
    }
}

fn run_match(labels: &ModelLabelList, dataset_labels: &[String], all: bool) -> eyre::Result<()> {
    let mut failures = 0usize;
    for dataset_label in dataset_labels {
        let result = if all {
            labels.candidates(dataset_label)
        } else {
            labels.find_match(dataset_label).map(|hit| vec![hit])
        };

        match result {
            Ok(hits) if hits.is_empty() => {
                tracing::warn!(dataset_label = %dataset_label, "no model label matches");
                failures += 1;
            }
            Ok(hits) => {
                for hit in &hits {
                    println!("{}", report::match_line(hit));
                }
            }
            Err(e) => {
                tracing::warn!(dataset_label = %dataset_label, error = %e, "could not match");
                failures += 1;
            }
        }
    }

    if failures > 0 {
        bail!("{failures} of {} dataset labels did not match", dataset_labels.len());
    }
    Ok(())
}
