use std::path::Path;

use anyhow::{Result, bail};
use chrono::Utc;
use tracing::info;

use crate::catalog::{load_disc_catalog, load_ground_truth};
use crate::cli::RunArgs;
use crate::evaluation::evaluate;
use crate::matching::match_catalog;
use crate::model::{EvaluationResult, RunReportManifest, SourceEntry};
use crate::util::{
    now_utc_string, sha256_file, utc_compact_string, write_json_pretty, write_pair_file,
};

pub fn run(args: RunArgs) -> Result<()> {
    if !(0.0..=1.0).contains(&args.threshold) {
        bail!("threshold must be within [0, 1], got {}", args.threshold);
    }

    let run_id = format!("run-{}", utc_compact_string(Utc::now()));
    info!(
        run_id = %run_id,
        catalog = %args.catalog_path.display(),
        ground_truth = %args.ground_truth_path.display(),
        threshold = args.threshold,
        "starting deduplication run"
    );

    let catalog = load_disc_catalog(&args.catalog_path)?;
    info!(disc_count = catalog.len(), "loaded disc catalog");

    let ground_truth = load_ground_truth(&args.ground_truth_path)?;
    info!(pair_count = ground_truth.len(), "loaded ground truth");

    let predicted = match_catalog(&catalog, args.threshold);
    info!(predicted_pair_count = predicted.len(), "matching completed");

    write_pair_file(&args.output_path, &predicted)?;
    info!(path = %args.output_path.display(), "wrote predicted pairs");

    let metrics = evaluate(&predicted, &ground_truth);

    if let Some(report_path) = &args.report_path {
        let report = RunReportManifest {
            manifest_version: 1,
            run_id,
            generated_at: now_utc_string(),
            threshold: args.threshold,
            catalog_source: source_entry(&args.catalog_path)?,
            ground_truth_source: source_entry(&args.ground_truth_path)?,
            output_path: args.output_path.display().to_string(),
            disc_count: catalog.len(),
            predicted_pair_count: predicted.len(),
            ground_truth_pair_count: ground_truth.len(),
            metrics,
        };
        write_json_pretty(report_path, &report)?;
        info!(path = %report_path.display(), "wrote run report");
    }

    print_report(
        args.threshold,
        &metrics,
        predicted.len(),
        ground_truth.len(),
    );

    Ok(())
}

fn source_entry(path: &Path) -> Result<SourceEntry> {
    Ok(SourceEntry {
        path: path.display().to_string(),
        sha256: sha256_file(path)?,
    })
}

fn print_report(
    threshold: f64,
    metrics: &EvaluationResult,
    predicted_count: usize,
    ground_truth_count: usize,
) {
    println!();
    println!("Evaluation with threshold {threshold}:");
    println!("Precision: {:.3}", metrics.precision);
    println!("Recall: {:.3}", metrics.recall);
    println!("F1 Score: {:.3}", metrics.f1);
    println!("Accuracy: {:.3}", metrics.accuracy);
    println!();
    println!("Predicted matches: {predicted_count}");
    println!("Ground truth pairs: {ground_truth_count}");
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::run;
    use crate::cli::RunArgs;

    const CATALOG_XML: &str = "<discs>
       <disc><id>1</id><artist>Beatles</artist><dtitle>Abbey Road</dtitle>
         <title>Come Together</title><title>Something</title></disc>
       <disc><id>2</id><artist>Beatles</artist><dtitle>Abbey Road</dtitle>
         <title>Come Together</title><title>Something</title></disc>
       <disc><id>3</id><artist>Kraftwerk</artist><dtitle>Autobahn</dtitle>
         <title>Autobahn</title></disc>
     </discs>";

    const GROUND_TRUTH_XML: &str = "<pairs>
       <pair><disc><id>1</id></disc><disc><id>2</id></disc></pair>
     </pairs>";

    #[test]
    fn full_pipeline_writes_pairs_and_report() {
        let dir = tempfile::tempdir().expect("tempdir should be created");
        let catalog_path = dir.path().join("discs.xml");
        let ground_truth_path = dir.path().join("dups.xml");
        let output_path = dir.path().join("matched_pairs.txt");
        let report_path = dir.path().join("report.json");

        std::fs::write(&catalog_path, CATALOG_XML).expect("catalog fixture should be written");
        std::fs::write(&ground_truth_path, GROUND_TRUTH_XML)
            .expect("ground-truth fixture should be written");

        run(RunArgs {
            catalog_path,
            ground_truth_path,
            output_path: output_path.clone(),
            threshold: 0.8,
            report_path: Some(report_path.clone()),
        })
        .expect("pipeline should succeed");

        let pairs = std::fs::read_to_string(&output_path).expect("pair file should exist");
        assert_eq!(pairs, "1,2\n");

        let raw = std::fs::read_to_string(&report_path).expect("report should exist");
        let report: serde_json::Value =
            serde_json::from_str(&raw).expect("report should be valid json");
        assert_eq!(report["disc_count"], 3);
        assert_eq!(report["predicted_pair_count"], 1);
        assert_eq!(report["ground_truth_pair_count"], 1);
        assert_eq!(report["threshold"], 0.8);
        assert_eq!(report["metrics"]["precision"], 1.0);
        assert_eq!(report["metrics"]["recall"], 1.0);
        assert_eq!(report["metrics"]["f1"], 1.0);
        assert_eq!(report["metrics"]["accuracy"], 1.0);
    }

    #[test]
    fn out_of_range_threshold_is_rejected() {
        let args = RunArgs {
            catalog_path: PathBuf::from("discs.xml"),
            ground_truth_path: PathBuf::from("dups.xml"),
            output_path: PathBuf::from("matched_pairs.txt"),
            threshold: 1.5,
            report_path: None,
        };
        assert!(run(args).is_err());
    }

    #[test]
    fn missing_catalog_is_fatal() {
        let dir = tempfile::tempdir().expect("tempdir should be created");
        let args = RunArgs {
            catalog_path: dir.path().join("absent.xml"),
            ground_truth_path: dir.path().join("absent_dups.xml"),
            output_path: dir.path().join("matched_pairs.txt"),
            threshold: 0.8,
            report_path: None,
        };
        assert!(run(args).is_err());
    }
}
