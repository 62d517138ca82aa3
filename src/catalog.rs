use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use roxmltree::{Document, Node};

use crate::model::{DiscCatalog, DiscRecord, PairKey, PairSet};

pub fn load_disc_catalog(path: &Path) -> Result<DiscCatalog> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    parse_disc_catalog(&text)
        .with_context(|| format!("failed to parse disc catalog: {}", path.display()))
}

pub fn load_ground_truth(path: &Path) -> Result<PairSet> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    parse_ground_truth(&text)
        .with_context(|| format!("failed to parse ground truth: {}", path.display()))
}

pub fn parse_disc_catalog(text: &str) -> Result<DiscCatalog> {
    let document = Document::parse(text).context("malformed xml")?;
    let mut catalog = DiscCatalog::new();

    for disc in document
        .descendants()
        .filter(|node| node.has_tag_name("disc"))
    {
        // A disc without a resolvable identifier is excluded, not an error.
        let Some(disc_id) = resolve_disc_id(disc) else {
            continue;
        };

        catalog.insert(
            disc_id,
            DiscRecord {
                artist: first_trimmed_text(disc, "artist"),
                title: first_trimmed_text(disc, "dtitle"),
                tracks: collect_trimmed_texts(disc, "title"),
            },
        );
    }

    Ok(catalog)
}

pub fn parse_ground_truth(text: &str) -> Result<PairSet> {
    let document = Document::parse(text).context("malformed xml")?;
    let mut pairs = PairSet::new();

    for pair in document
        .descendants()
        .filter(|node| node.has_tag_name("pair"))
    {
        let ids: Vec<String> = pair
            .descendants()
            .filter(|node| node.has_tag_name("disc"))
            .filter_map(|disc| resolve_disc_id(disc))
            .collect();

        // A pair contributes only when exactly two identities resolve.
        if let [left, right] = ids.as_slice() {
            pairs.insert(PairKey::new(left, right));
        }
    }

    Ok(pairs)
}

fn resolve_disc_id(disc: Node) -> Option<String> {
    first_nonempty_text(disc, "id").or_else(|| first_nonempty_text(disc, "cid"))
}

fn first_nonempty_text(scope: Node, name: &str) -> Option<String> {
    let node = scope.descendants().find(|node| node.has_tag_name(name))?;
    let text = node.text()?;
    if text.is_empty() {
        return None;
    }
    Some(text.to_string())
}

fn first_trimmed_text(scope: Node, name: &str) -> String {
    scope
        .descendants()
        .find(|node| node.has_tag_name(name))
        .and_then(|node| node.text())
        .map(|text| text.trim().to_string())
        .unwrap_or_default()
}

fn collect_trimmed_texts(scope: Node, name: &str) -> Vec<String> {
    scope
        .descendants()
        .filter(|node| node.has_tag_name(name))
        .filter_map(|node| node.text())
        .map(|text| text.trim().to_string())
        .collect()
}
