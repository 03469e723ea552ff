//! Splits a "Voie" source record into one JSON file per tier.
//!
//! The source record holds every tier side by side, keyed `Affichage{row}{tier}`,
//! `ContenuCase{row}{tier}` and `Voie{tier}`. Each tier file keeps the display labels, turns
//! the content text into `rang{row}{tier}` with `<br>` markers before the `Effet :` and
//! `Durée :` labels, and stores the tier name under `Voie`.

use std::{
    collections::HashMap,
    fs, io,
    path::{Path, PathBuf},
};

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::{Value, ser::PrettyFormatter};
use thiserror::Error;

pub const TIER_COUNT: usize = 5;
pub const ROW_COUNT: usize = 5;

/// Directory source and output files live in when none is given.
pub const DEFAULT_DIR: &str = "tabs";

pub const BREAK_MARKER: &str = "<br>";

/// Labels that start a new line in the rendered content, in replacement order.
const BREAK_LABELS: [&str; 2] = ["Effet :", "Durée :"];

pub type TierRecord = HashMap<String, Value>;

#[derive(Debug, Error)]
pub enum VoieError {
    #[error("File error: {0}")]
    Io(#[from] io::Error),
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Source record has no \"{key}\" field")]
    MissingKey { key: String },
    #[error("Field \"{key}\" is not a string")]
    NotAString { key: String },
}

/// Inserts [`BREAK_MARKER`] before every `Effet :`, then before every `Durée :`.
pub fn insert_breaks(text: &str) -> String {
    BREAK_LABELS
        .iter()
        .fold(text.to_string(), |text, label| {
            text.replace(label, &format!("{BREAK_MARKER}{label}"))
        })
}

/// The projection of a [`TierRecord`] onto a single tier, with fields in output order.
#[derive(Debug, Clone, PartialEq)]
pub struct TierOutput {
    tier: usize,
    fields: IndexMap<String, Value>,
}

impl TierOutput {
    fn from_record(record: &TierRecord, tier: usize) -> Result<TierOutput, VoieError> {
        let mut fields = IndexMap::with_capacity(ROW_COUNT * 2 + 1);

        for row in 1..=ROW_COUNT {
            let display = field(record, &format!("Affichage{row}{tier}"))?;
            fields.insert(format!("Affichage{row}{tier}"), display.clone());

            let content_key = format!("ContenuCase{row}{tier}");
            let content = field(record, &content_key)?
                .as_str()
                .ok_or(VoieError::NotAString { key: content_key })?;
            fields.insert(
                format!("rang{row}{tier}"),
                Value::String(insert_breaks(content)),
            );
        }

        fields.insert(
            "Voie".to_string(),
            field(record, &format!("Voie{tier}"))?.clone(),
        );

        Ok(TierOutput { tier, fields })
    }

    /// 1-based tier index.
    pub fn tier(&self) -> usize {
        self.tier
    }

    pub fn fields(&self) -> &IndexMap<String, Value> {
        &self.fields
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Pretty JSON with 4 space indentation. Non-ASCII characters are kept as is.
    pub fn to_json_bytes(&self) -> serde_json::Result<Vec<u8>> {
        let mut bytes = Vec::new();
        let mut serializer =
            serde_json::Serializer::with_formatter(&mut bytes, PrettyFormatter::with_indent(b"    "));
        self.fields.serialize(&mut serializer)?;

        Ok(bytes)
    }
}

fn field<'a>(record: &'a TierRecord, key: &str) -> Result<&'a Value, VoieError> {
    record.get(key).ok_or_else(|| VoieError::MissingKey {
        key: key.to_string(),
    })
}

/// Projects `record` onto every tier. Fails on the first missing field, before any output
/// exists.
pub fn reshape(record: &TierRecord) -> Result<Vec<TierOutput>, VoieError> {
    (1..=TIER_COUNT)
        .map(|tier| TierOutput::from_record(record, tier))
        .collect()
}

#[derive(Debug, PartialEq, Eq)]
pub enum SplitOutcome {
    /// Paths of the tier files, in tier order.
    Written(Vec<PathBuf>),
    /// The source file did not exist. Nothing was written.
    SourceMissing(PathBuf),
}

/// Reads source records from, and writes tier files to, a single directory.
#[derive(Debug, Clone)]
pub struct VoieSplitter {
    dir: PathBuf,
}

impl Default for VoieSplitter {
    fn default() -> Self {
        Self::new(DEFAULT_DIR)
    }
}

impl VoieSplitter {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file written for `tier`, eg. `tabs/Rodeur3.json`.
    pub fn tier_path(&self, prefix: &str, tier: usize) -> PathBuf {
        self.dir.join(format!("{prefix}{tier}.json"))
    }

    /// Splits `dir/source` into `dir/{prefix}1.json` to `dir/{prefix}5.json`, overwriting any
    /// existing files.
    ///
    /// A missing source is reported and returned as [`SplitOutcome::SourceMissing`].
    ///
    /// # Errors
    /// - [`VoieError::Io`] when the source can't be read or a tier file can't be written
    /// - [`VoieError::Json`] when the source is not a JSON object
    /// - [`VoieError::MissingKey`] / [`VoieError::NotAString`] when the record is incomplete
    pub fn split(&self, source: &str, prefix: &str) -> Result<SplitOutcome, VoieError> {
        let source_path = self.dir.join(source);

        if !source_path.exists() {
            tracing::warn!(path = %source_path.display(), "Source record not found");
            println!("Le fichier {} n'existe pas.", source_path.display());

            return Ok(SplitOutcome::SourceMissing(source_path));
        }

        let record: TierRecord = serde_json::from_slice(&fs::read(&source_path)?)?;

        let outputs = reshape(&record)?;

        let mut written = Vec::with_capacity(outputs.len());

        for output in &outputs {
            let path = self.tier_path(prefix, output.tier());
            fs::write(&path, output.to_json_bytes()?)?;

            tracing::debug!(path = %path.display(), "Wrote tier file");
            written.push(path);
        }

        println!(
            "Les fichiers {prefix}1.json à {prefix}{TIER_COUNT}.json ont été modifiés avec succès dans '{}/'.",
            self.dir.display()
        );

        Ok(SplitOutcome::Written(written))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use serde_json::json;

    fn complete_record() -> TierRecord {
        let mut record = TierRecord::new();

        for tier in 1..=TIER_COUNT {
            for row in 1..=ROW_COUNT {
                record.insert(
                    format!("Affichage{row}{tier}"),
                    json!(format!("Rang {row} de la voie {tier}")),
                );
                record.insert(
                    format!("ContenuCase{row}{tier}"),
                    json!(format!("Effet : +{row} Durée : {tier} tours")),
                );
            }
            record.insert(format!("Voie{tier}"), json!(format!("Voie n°{tier}")));
        }

        record
    }

    #[test]
    fn breaks_before_both_labels() {
        assert_eq!(
            insert_breaks("Effet : +5 Durée : 3 tours"),
            "<br>Effet : +5 <br>Durée : 3 tours"
        );
    }

    #[test]
    fn breaks_every_occurrence_independently() {
        assert_eq!(
            insert_breaks("Effet : a Effet : b"),
            "<br>Effet : a <br>Effet : b"
        );
        assert_eq!(insert_breaks("Durée : 1"), "<br>Durée : 1");
        assert_eq!(insert_breaks("Aucun effet"), "Aucun effet");
        // Label without the space before the colon is left alone
        assert_eq!(insert_breaks("Effet: 2"), "Effet: 2");
    }

    #[test]
    fn reshape_makes_five_records_of_eleven_fields() {
        let outputs = reshape(&complete_record()).unwrap();

        assert_eq!(outputs.len(), TIER_COUNT);

        for (i, output) in outputs.iter().enumerate() {
            assert_eq!(output.tier(), i + 1);
            assert_eq!(output.fields().len(), 11);
        }
    }

    #[test]
    fn reshape_field_order_and_values() {
        let outputs = reshape(&complete_record()).unwrap();
        let third = &outputs[2];

        let keys: Vec<&str> = third.fields().keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            vec![
                "Affichage13",
                "rang13",
                "Affichage23",
                "rang23",
                "Affichage33",
                "rang33",
                "Affichage43",
                "rang43",
                "Affichage53",
                "rang53",
                "Voie",
            ]
        );

        assert_eq!(third.get("Affichage23"), Some(&json!("Rang 2 de la voie 3")));
        assert_eq!(
            third.get("rang23"),
            Some(&json!("<br>Effet : +2 <br>Durée : 3 tours"))
        );
        assert_eq!(third.get("Voie"), Some(&json!("Voie n°3")));
    }

    #[test]
    fn reshape_fails_on_missing_key() {
        let mut record = complete_record();
        record.remove("ContenuCase45");

        assert!(matches!(
            reshape(&record),
            Err(VoieError::MissingKey { key }) if key == "ContenuCase45"
        ));
    }

    #[test]
    fn reshape_rejects_non_string_content() {
        let mut record = complete_record();
        record.insert("ContenuCase11".to_string(), json!(42));

        assert!(matches!(
            reshape(&record),
            Err(VoieError::NotAString { key }) if key == "ContenuCase11"
        ));
    }

    #[test]
    fn split_writes_tier_files() {
        let dir = tempfile::tempdir().unwrap();
        let mut record = complete_record();
        record.insert(
            "ContenuCase11".to_string(),
            json!("Effet : +5 Durée : 3 tours"),
        );
        fs::write(
            dir.path().join("Rodeur.json"),
            serde_json::to_vec(&record).unwrap(),
        )
        .unwrap();

        // Overwritten without asking
        fs::write(dir.path().join("Rodeur1.json"), b"stale").unwrap();

        let splitter = VoieSplitter::new(dir.path());
        let outcome = splitter.split("Rodeur.json", "Rodeur").unwrap();

        let expected: Vec<PathBuf> = (1..=TIER_COUNT)
            .map(|tier| dir.path().join(format!("Rodeur{tier}.json")))
            .collect();
        assert_eq!(outcome, SplitOutcome::Written(expected));

        let text = fs::read_to_string(dir.path().join("Rodeur1.json")).unwrap();
        assert!(text.starts_with("{\n    \"Affichage11\": "));
        assert!(text.contains("\"rang11\": \"<br>Effet : +5 <br>Durée : 3 tours\""));
        assert!(text.contains("\"Voie\": \"Voie n°1\""));

        let parsed: IndexMap<String, Value> = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed.len(), 11);
    }

    #[test]
    fn split_reports_missing_source() {
        let dir = tempfile::tempdir().unwrap();
        let splitter = VoieSplitter::new(dir.path());

        let outcome = splitter.split("Absent.json", "Absent").unwrap();

        assert_eq!(
            outcome,
            SplitOutcome::SourceMissing(dir.path().join("Absent.json"))
        );
        assert!(!splitter.tier_path("Absent", 1).exists());
    }

    #[test]
    fn split_writes_nothing_for_incomplete_record() {
        let dir = tempfile::tempdir().unwrap();
        let mut record = complete_record();
        record.remove("Voie5");
        fs::write(
            dir.path().join("Mage.json"),
            serde_json::to_vec(&record).unwrap(),
        )
        .unwrap();

        let splitter = VoieSplitter::new(dir.path());

        assert!(matches!(
            splitter.split("Mage.json", "Mage"),
            Err(VoieError::MissingKey { key }) if key == "Voie5"
        ));
        assert!(!splitter.tier_path("Mage", 1).exists());
    }

    #[test]
    fn split_rejects_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("Broken.json"), b"{ not json").unwrap();

        let splitter = VoieSplitter::new(dir.path());

        assert!(matches!(
            splitter.split("Broken.json", "Broken"),
            Err(VoieError::Json(_))
        ));
    }

    #[test]
    fn default_dir_is_tabs() {
        let splitter = VoieSplitter::default();

        assert_eq!(splitter.dir(), Path::new("tabs"));
        assert_eq!(
            splitter.tier_path("Rodeur", 2),
            Path::new("tabs").join("Rodeur2.json")
        );
    }
}
