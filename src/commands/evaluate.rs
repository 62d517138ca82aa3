use anyhow::Result;
use tracing::info;

use crate::catalog::load_ground_truth;
use crate::cli::EvaluateArgs;
use crate::evaluation::evaluate;
use crate::util::read_pair_file;

pub fn run(args: EvaluateArgs) -> Result<()> {
    let predicted = read_pair_file(&args.pairs_path)?;
    info!(
        pair_count = predicted.len(),
        path = %args.pairs_path.display(),
        "loaded predicted pairs"
    );

    let ground_truth = load_ground_truth(&args.ground_truth_path)?;
    info!(pair_count = ground_truth.len(), "loaded ground truth");

    let metrics = evaluate(&predicted, &ground_truth);

    println!();
    println!("Evaluation of {}:", args.pairs_path.display());
    println!("Precision: {:.3}", metrics.precision);
    println!("Recall: {:.3}", metrics.recall);
    println!("F1 Score: {:.3}", metrics.f1);
    println!("Accuracy: {:.3}", metrics.accuracy);
    println!();
    println!("Predicted matches: {}", predicted.len());
    println!("Ground truth pairs: {}", ground_truth.len());

    Ok(())
}
