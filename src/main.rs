use anyhow::{anyhow, Context};
use clap::Parser;
use kalpha::{Alpha, AlphaReport, LoaderConfig, TableFormat, TableLoader, ValueMarginal, VariableType};
use rayon::prelude::*;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// Krippendorff's alpha for inter-rater reliability data
#[derive(Parser, Debug)]
#[command(name = "kalpha")]
#[command(about = "Compute Krippendorff's alpha from rating tables", long_about = None)]
struct Args {
    /// Rating files: raters as rows, items as columns
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Variable type
    #[arg(short = 't', long, value_enum, default_value_t = VariableType::Interval)]
    variable_type: VariableType,

    /// Field delimiter for delimited files
    #[arg(short, long, default_value_t = ',')]
    delimiter: char,

    /// Extra cell values to treat as missing (repeatable)
    #[arg(long = "missing")]
    missing: Vec<String>,

    /// Input format; `auto` picks JSON for `.json` files
    #[arg(long, value_enum, default_value_t = TableFormat::Auto)]
    format: TableFormat,

    /// Print reports as JSON
    #[arg(long)]
    json: bool,

    /// Include disagreement terms and value marginals
    #[arg(long)]
    explain: bool,

    /// Log level
    #[arg(long, default_value = "warn")]
    log_level: String,
}

#[derive(Debug, Serialize)]
struct FileReport {
    file: String,
    #[serde(flatten)]
    report: AlphaReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    marginals: Option<Vec<ValueMarginal>>,
}

fn evaluate(
    path: &Path,
    loader: &TableLoader,
    variable_type: VariableType,
    explain: bool,
) -> anyhow::Result<FileReport> {
    let table = loader
        .load(path)
        .with_context(|| format!("failed to load {}", path.display()))?;
    info!(
        "Loaded {}: {} raters, {} items",
        path.display(),
        table.rater_count(),
        table.item_count()
    );

    let calc = Alpha::new(&table, variable_type)
        .with_context(|| format!("failed to prepare {}", path.display()))?;
    let report = calc
        .report()
        .with_context(|| format!("failed to compute alpha for {}", path.display()))?;

    Ok(FileReport {
        file: path.display().to_string(),
        report,
        marginals: explain.then(|| calc.marginals()),
    })
}

fn print_plain(result: &FileReport, explain: bool) {
    let r = &result.report;
    println!(
        "{}: alpha = {:.4} ({}, N = {}, {} raters, {} items)",
        result.file, r.alpha, r.variable_type, r.pairable_total, r.raters, r.items
    );
    if explain {
        println!("  observed disagreement: {:.6}", r.observed_disagreement);
        println!("  expected disagreement: {:.6}", r.expected_disagreement);
        println!("  pairable items: {}", r.pairable_items);
        for m in result.marginals.iter().flatten() {
            println!("  n[{}] = {:.4}", m.value, m.total);
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let variable_type = args.variable_type;
    let config = LoaderConfig::default()
        .with_delimiter(args.delimiter)
        .with_missing_markers(args.missing.iter().cloned())
        .with_format(args.format);
    let loader = TableLoader::new(config);

    info!("Computing {} alpha for {} file(s)", variable_type, args.files.len());

    let results: Vec<anyhow::Result<FileReport>> = args
        .files
        .par_iter()
        .map(|path| evaluate(path, &loader, variable_type, args.explain))
        .collect();

    let mut reports = Vec::with_capacity(results.len());
    let mut failures = 0;
    for result in results {
        match result {
            Ok(report) => reports.push(report),
            Err(e) => {
                failures += 1;
                eprintln!("error: {:#}", e);
            }
        }
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        for report in &reports {
            print_plain(report, args.explain);
        }
    }

    if failures > 0 {
        return Err(anyhow!("{} of {} file(s) failed", failures, args.files.len()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_defaults() {
        let args = Args::try_parse_from(["kalpha", "ratings.csv"]).unwrap();
        assert_eq!(args.variable_type, VariableType::Interval);
        assert_eq!(args.format, TableFormat::Auto);
    }

    #[test]
    fn test_args_accept_known_values() {
        let args =
            Args::try_parse_from(["kalpha", "-t", "nominal", "--format", "csv", "a.txt"]).unwrap();
        assert_eq!(args.variable_type, VariableType::Nominal);
        assert_eq!(args.format, TableFormat::Delimited);
    }

    #[test]
    fn test_args_reject_unknown_values() {
        let err = Args::try_parse_from(["kalpha", "-t", "ordinal", "a.csv"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::InvalidValue);

        let err = Args::try_parse_from(["kalpha", "--format", "xlsx", "a.csv"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::InvalidValue);
    }
}
