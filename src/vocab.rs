//! Vocabulary loading.
//!
//! This module is intentionally small: it reads the JSON export of the
//! companion vocabulary notebook — an array of days, each carrying a label
//! and its word pairs — flattens it in day order, and serves it read-only
//! to the playback engine. No editing, no persistence of its own.

use anyhow::{Context, Result};
use hafalan_core::{DayEntry, VocabSource};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// One "day" grouping as exported by the notebook. Field names follow the
/// export format (`id_hari`, `isi`, `indonesia`).
#[derive(Debug, Clone, Deserialize)]
pub struct VocabDay {
    #[serde(rename = "id_hari")]
    pub day_id: u32,
    #[serde(default)]
    pub label: String,
    #[serde(rename = "isi", default)]
    pub pairs: Vec<VocabPair>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VocabPair {
    pub id: u32,
    pub english: String,
    #[serde(rename = "indonesia")]
    pub indonesian: String,
}

/// The loaded vocabulary, flattened in day order for the queue builder.
pub struct JsonVocabulary {
    days: Vec<VocabDay>,
    flattened: Vec<DayEntry>,
}

impl JsonVocabulary {
    pub fn from_days(days: Vec<VocabDay>) -> Self {
        let flattened = days
            .iter()
            .flat_map(|day| {
                day.pairs.iter().map(|pair| DayEntry {
                    day_id: day.day_id,
                    id: pair.id,
                    english: pair.english.clone(),
                    indonesian: pair.indonesian.clone(),
                })
            })
            .collect();
        Self { days, flattened }
    }

    pub fn day_count(&self) -> usize {
        self.days.len()
    }

    pub fn entry_count(&self) -> usize {
        self.flattened.len()
    }
}

impl VocabSource for JsonVocabulary {
    fn entries(&self) -> &[DayEntry] {
        &self.flattened
    }
}

/// Read and parse a vocabulary file from disk.
pub fn load_vocabulary(path: &Path) -> Result<JsonVocabulary> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let days: Vec<VocabDay> = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse vocabulary JSON at {}", path.display()))?;
    if days.is_empty() {
        warn!(path = %path.display(), "Vocabulary file contains no days");
    }
    let vocabulary = JsonVocabulary::from_days(days);
    for day in &vocabulary.days {
        tracing::debug!(day = day.day_id, label = %day.label, words = day.pairs.len(), "Loaded day");
    }
    info!(
        days = vocabulary.day_count(),
        words = vocabulary.entry_count(),
        "Parsed vocabulary file"
    );
    Ok(vocabulary)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
    [
        {
            "id_hari": 1,
            "label": "Hari 1",
            "isi": [
                { "id": 1, "english": "water", "indonesia": "air" },
                { "id": 2, "english": "fire", "indonesia": "api" }
            ]
        },
        {
            "id_hari": 2,
            "label": "Hari 2",
            "isi": [
                { "id": 3, "english": "tree", "indonesia": "pohon" }
            ]
        }
    ]
    "#;

    #[test]
    fn parses_the_notebook_export_shape() {
        let days: Vec<VocabDay> = serde_json::from_str(SAMPLE).expect("sample parses");
        let vocabulary = JsonVocabulary::from_days(days);

        assert_eq!(vocabulary.day_count(), 2);
        assert_eq!(vocabulary.entry_count(), 3);
        let entries = vocabulary.entries();
        assert_eq!(entries[0].english, "water");
        assert_eq!(entries[0].indonesian, "air");
        assert_eq!(entries[2].day_id, 2);
    }

    #[test]
    fn flattening_preserves_day_order() {
        let days: Vec<VocabDay> = serde_json::from_str(SAMPLE).expect("sample parses");
        let vocabulary = JsonVocabulary::from_days(days);
        let ids: Vec<u32> = vocabulary.entries().iter().map(|entry| entry.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn days_without_pairs_are_tolerated() {
        let days: Vec<VocabDay> =
            serde_json::from_str(r#"[{ "id_hari": 5, "label": "kosong" }]"#).expect("parses");
        let vocabulary = JsonVocabulary::from_days(days);
        assert_eq!(vocabulary.day_count(), 1);
        assert_eq!(vocabulary.entry_count(), 0);
    }
}
