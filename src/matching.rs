use crate::model::{DiscCatalog, DiscRecord, PairKey, PairSet};
use crate::similarity::disc_similarity;

pub const DEFAULT_THRESHOLD: f64 = 0.8;

// Full pairwise comparison, O(n^2) over the catalog. Acceptable for the
// offline batch sizes this tool targets; no blocking is attempted.
pub fn match_catalog(catalog: &DiscCatalog, threshold: f64) -> PairSet {
    let entries: Vec<(&String, &DiscRecord)> = catalog.iter().collect();
    let mut matched = PairSet::new();

    for (index, &(left_id, left)) in entries.iter().enumerate() {
        for &(right_id, right) in entries.iter().skip(index + 1) {
            let score = disc_similarity(left, right);
            if score >= threshold {
                matched.insert(PairKey::new(left_id, right_id));
            }
        }
    }

    matched
}
