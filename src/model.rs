use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscRecord {
    pub artist: String,
    pub title: String,
    pub tracks: Vec<String>,
}

pub type DiscCatalog = BTreeMap<String, DiscRecord>;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct PairKey {
    pub first: String,
    pub second: String,
}

impl PairKey {
    pub fn new(a: &str, b: &str) -> Self {
        if a <= b {
            Self {
                first: a.to_string(),
                second: b.to_string(),
            }
        } else {
            Self {
                first: b.to_string(),
                second: a.to_string(),
            }
        }
    }
}

pub type PairSet = BTreeSet<PairKey>;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EvaluationResult {
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
    pub accuracy: f64,
    pub true_positives: usize,
    pub false_positives: usize,
    pub false_negatives: usize,
    pub universe_size: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct SourceEntry {
    pub path: String,
    pub sha256: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CatalogInventoryManifest {
    pub manifest_version: u32,
    pub generated_at: String,
    pub source: SourceEntry,
    pub disc_count: usize,
    pub discs_with_artist: usize,
    pub discs_with_title: usize,
    pub discs_with_tracks: usize,
    pub track_count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct RunReportManifest {
    pub manifest_version: u32,
    pub run_id: String,
    pub generated_at: String,
    pub threshold: f64,
    pub catalog_source: SourceEntry,
    pub ground_truth_source: SourceEntry,
    pub output_path: String,
    pub disc_count: usize,
    pub predicted_pair_count: usize,
    pub ground_truth_pair_count: usize,
    pub metrics: EvaluationResult,
}
