use std::{
    collections::{BTreeMap, HashMap},
    fs, io,
    path::{Path, PathBuf},
};

use walkdir::WalkDir;

use super::{
    RenameError,
    rules::{IMAGE_EXTENSION, RuleStage, Translator},
};

/// A pending rename of one asset file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameMapping {
    pub old_path: PathBuf,
    pub new_path: PathBuf,
    pub old_name: String,
    pub new_name: String,
    pub stage: RuleStage,
}

impl RenameMapping {
    /// Name of the directory holding the file, eg. `ferme` for `objet2/ferme/Cat.png`.
    pub fn category(&self) -> String {
        self.old_path
            .parent()
            .and_then(Path::file_name)
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// Whether the target path holds a file other than the one being renamed.
    ///
    /// On a case-insensitive filesystem `Gong.png → gong.png` resolves both paths to the same
    /// file, which is not a conflict.
    fn target_is_other_file(&self) -> bool {
        self.new_path.exists()
            && !same_file::is_same_file(&self.old_path, &self.new_path).unwrap_or(false)
    }

    fn rename(&self) -> io::Result<()> {
        if self.target_is_other_file() {
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("target {} already exists", self.new_path.display()),
            ));
        }

        fs::rename(&self.old_path, &self.new_path)
    }
}

/// Several renames ending on the same path, or a rename onto a file that is already there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collision {
    pub target: PathBuf,
    pub sources: Vec<PathBuf>,
    /// The target exists on disk and is not renamed away before the first rename onto it.
    pub existing: bool,
}

#[derive(Debug)]
pub struct RenameFailure {
    pub old_path: PathBuf,
    pub new_path: PathBuf,
    pub reason: String,
}

#[derive(Debug, Default)]
pub struct RenameSummary {
    pub success: usize,
    pub failures: Vec<RenameFailure>,
}

impl RenameSummary {
    pub fn errors(&self) -> usize {
        self.failures.len()
    }
}

/// Every rename needed under a root directory, in discovery order.
#[derive(Debug, Default)]
pub struct RenamePlan {
    mappings: Vec<RenameMapping>,
}

/// Walks `root` and plans a rename for every image whose translated name differs.
///
/// Entries are visited sorted by file name so the same tree always yields the same plan.
/// Files starting with `.` are ignored, and the extension match is case-sensitive. A root
/// that exists but is not a readable directory yields an empty plan.
///
/// # Errors
/// - [`RenameError::RootNotFound`] when `root` does not exist
pub fn plan_renames(root: &Path, translator: &Translator) -> Result<RenamePlan, RenameError> {
    if !root.exists() {
        return Err(RenameError::RootNotFound(root.to_path_buf()));
    }

    if !root.is_dir() {
        tracing::warn!(root = %root.display(), "Root is not a directory, nothing to rename");
        return Ok(RenamePlan::default());
    }

    let mut mappings = vec![];

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!(error = %e, "Skipping unreadable entry");
                continue;
            }
        };

        if entry.file_type().is_dir() {
            continue;
        }

        let Some(old_name) = entry.file_name().to_str() else {
            tracing::warn!(path = %entry.path().display(), "Skipping non UTF-8 file name");
            continue;
        };

        if old_name.starts_with('.') || !old_name.ends_with(IMAGE_EXTENSION) {
            continue;
        }

        let (new_name, stage) = translator.translate_with_stage(old_name);

        if new_name == old_name {
            tracing::debug!(old_name, "Already translated");
            continue;
        }

        let old_path = entry.path().to_path_buf();
        let new_path = old_path.with_file_name(&new_name);

        mappings.push(RenameMapping {
            old_name: old_name.to_string(),
            old_path,
            new_path,
            new_name,
            stage,
        });
    }

    Ok(RenamePlan { mappings })
}

impl RenamePlan {
    pub fn mappings(&self) -> &[RenameMapping] {
        &self.mappings
    }

    pub fn len(&self) -> usize {
        self.mappings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }

    /// Number of pending renames per parent directory name.
    pub fn category_breakdown(&self) -> BTreeMap<String, usize> {
        let mut categories = BTreeMap::new();

        for mapping in &self.mappings {
            *categories.entry(mapping.category()).or_insert(0) += 1;
        }

        categories
    }

    /// Renames that would fail or clash when applied in discovery order.
    ///
    /// A target that is itself renamed away only counts as free when that rename comes first.
    pub fn collisions(&self) -> Vec<Collision> {
        let mut targets: BTreeMap<&Path, Vec<(usize, &RenameMapping)>> = BTreeMap::new();

        for (i, mapping) in self.mappings.iter().enumerate() {
            targets
                .entry(mapping.new_path.as_path())
                .or_default()
                .push((i, mapping));
        }

        let vacated_at: HashMap<&Path, usize> = self
            .mappings
            .iter()
            .enumerate()
            .map(|(i, mapping)| (mapping.old_path.as_path(), i))
            .collect();

        targets
            .into_iter()
            .filter_map(|(target, sources)| {
                // Sources are in discovery order, so the first one claims the target first.
                let (first_claim, first_source) = sources[0];
                let freed_in_time = vacated_at
                    .get(target)
                    .is_some_and(|&vacated| vacated < first_claim);
                let existing = !freed_in_time && first_source.target_is_other_file();

                (sources.len() > 1 || existing).then(|| Collision {
                    target: target.to_path_buf(),
                    sources: sources.iter().map(|(_, m)| m.old_path.clone()).collect(),
                    existing,
                })
            })
            .collect()
    }

    /// Renames every file in discovery order.
    ///
    /// A failed rename is recorded and the remaining files are still processed. Renames that
    /// already succeeded are kept.
    pub fn apply(&self) -> RenameSummary {
        let total = self.mappings.len();
        let mut summary = RenameSummary::default();

        for (i, mapping) in self.mappings.iter().enumerate() {
            print!(
                "[{}/{}] {} → {}... ",
                i + 1,
                total,
                mapping.old_name,
                mapping.new_name
            );

            match mapping.rename() {
                Ok(()) => {
                    println!("✅");
                    tracing::info!(
                        from = %mapping.old_path.display(),
                        to = %mapping.new_path.display(),
                        "Renamed"
                    );
                    summary.success += 1;
                }
                Err(e) => {
                    println!("❌ {}", e);
                    tracing::error!(
                        from = %mapping.old_path.display(),
                        error = %e,
                        "Rename failed"
                    );
                    summary.failures.push(RenameFailure {
                        old_path: mapping.old_path.clone(),
                        new_path: mapping.new_path.clone(),
                        reason: e.to_string(),
                    });
                }
            }
        }

        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use ntest::timeout;
    use tempfile::TempDir;

    fn touch(root: &Path, relative: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, b"png").unwrap();
    }

    fn asset_tree() -> TempDir {
        let dir = tempfile::tempdir().unwrap();

        touch(dir.path(), "camp/Banner 3.png");
        touch(dir.path(), "camp/Weapon Rack_empty 2.png");
        touch(dir.path(), "ferme/Cat.png");
        touch(dir.path(), "ferme/chat-2.png");
        touch(dir.path(), "ferme/.Hidden Thing.png");
        touch(dir.path(), "ferme/Notes.txt");
        touch(dir.path(), "ferme/Upper.PNG");

        dir
    }

    #[test]
    #[timeout(1000)]
    fn plan_skips_hidden_translated_and_foreign_files() {
        let dir = asset_tree();
        let plan = plan_renames(dir.path(), &Translator::default()).unwrap();

        let names: Vec<(&str, &str)> = plan
            .mappings()
            .iter()
            .map(|m| (m.old_name.as_str(), m.new_name.as_str()))
            .collect();

        assert_eq!(
            names,
            vec![
                ("Banner 3.png", "banniere-3.png"),
                ("Weapon Rack_empty 2.png", "support-armes-vide-2.png"),
                ("Cat.png", "chat.png"),
            ]
        );

        let camp = &plan.mappings()[0];
        assert_eq!(camp.new_path, dir.path().join("camp/banniere-3.png"));
        assert_eq!(camp.stage, RuleStage::Pattern);
    }

    #[test]
    fn category_breakdown_counts_per_directory() {
        let dir = asset_tree();
        let plan = plan_renames(dir.path(), &Translator::default()).unwrap();

        let breakdown = plan.category_breakdown();

        assert_eq!(breakdown.get("camp"), Some(&2));
        assert_eq!(breakdown.get("ferme"), Some(&1));
        assert_eq!(breakdown.len(), 2);
    }

    #[test]
    fn root_that_is_a_file_plans_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("Banner 1.png");
        fs::write(&root, b"png").unwrap();

        let plan = plan_renames(&root, &Translator::default()).unwrap();

        assert!(plan.is_empty());
        assert!(root.is_file());
    }

    #[test]
    fn missing_root_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("objet2");

        assert!(matches!(
            plan_renames(&missing, &Translator::default()),
            Err(RenameError::RootNotFound(path)) if path == missing
        ));
    }

    #[test]
    fn apply_renames_in_place() {
        let dir = asset_tree();
        let plan = plan_renames(dir.path(), &Translator::default()).unwrap();

        let summary = plan.apply();

        assert_eq!(summary.success, 3);
        assert_eq!(summary.errors(), 0);
        assert!(dir.path().join("camp/banniere-3.png").is_file());
        assert!(dir.path().join("camp/support-armes-vide-2.png").is_file());
        assert!(dir.path().join("ferme/chat.png").is_file());
        assert!(!dir.path().join("ferme/Cat.png").exists());
    }

    #[test]
    fn collisions_are_detected_and_not_overwritten() {
        let dir = tempfile::tempdir().unwrap();
        // Both translate to "banniere-1.png"
        touch(dir.path(), "Banner 1.png");
        touch(dir.path(), "BANNER 1.png");
        // Target already on disk
        touch(dir.path(), "Cat.png");
        fs::write(dir.path().join("chat.png"), b"original").unwrap();

        let plan = plan_renames(dir.path(), &Translator::default()).unwrap();
        let collisions = plan.collisions();

        assert_eq!(collisions.len(), 2);

        let shared = collisions
            .iter()
            .find(|c| c.target == dir.path().join("banniere-1.png"))
            .unwrap();
        assert_eq!(shared.sources.len(), 2);
        assert!(!shared.existing);

        let existing = collisions
            .iter()
            .find(|c| c.target == dir.path().join("chat.png"))
            .unwrap();
        assert!(existing.existing);

        let summary = plan.apply();

        // First banner rename succeeds, the second and the cat hit existing targets.
        assert_eq!(summary.success, 1);
        assert_eq!(summary.errors(), 2);
        assert_eq!(
            fs::read(dir.path().join("chat.png")).unwrap(),
            b"original".to_vec()
        );
        assert!(dir.path().join("Cat.png").is_file());
    }

    #[test]
    fn case_only_rename_keeps_distinct_lowercase_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("Gong.png"), b"upper").unwrap();
        fs::write(dir.path().join("gong.png"), b"lower").unwrap();

        let plan = plan_renames(dir.path(), &Translator::default()).unwrap();

        assert_eq!(plan.len(), 1);
        assert_eq!(plan.mappings()[0].new_name, "gong.png");

        let collisions = plan.collisions();
        assert_eq!(collisions.len(), 1);
        assert!(collisions[0].existing);

        let summary = plan.apply();

        assert_eq!(summary.success, 0);
        assert_eq!(summary.errors(), 1);
        assert_eq!(fs::read(dir.path().join("gong.png")).unwrap(), b"lower".to_vec());
        assert_eq!(fs::read(dir.path().join("Gong.png")).unwrap(), b"upper".to_vec());
    }

    #[test]
    fn target_renamed_away_later_is_still_a_collision() {
        let dir = tempfile::tempdir().unwrap();
        // "Scale - Gold Bar.png" → "balance-gold bar.png", which itself moves to
        // "balance-gold-bar.png" but only after, in discovery order.
        touch(dir.path(), "Scale - Gold Bar.png");
        touch(dir.path(), "balance-gold bar.png");

        let plan = plan_renames(dir.path(), &Translator::default()).unwrap();

        assert_eq!(plan.mappings()[0].new_name, "balance-gold bar.png");
        assert_eq!(plan.mappings()[1].new_name, "balance-gold-bar.png");

        let collisions = plan.collisions();
        assert_eq!(collisions.len(), 1);
        assert_eq!(collisions[0].target, dir.path().join("balance-gold bar.png"));
        assert!(collisions[0].existing);

        let summary = plan.apply();
        assert_eq!(summary.success, 1);
        assert_eq!(summary.errors(), 1);
    }

    #[test]
    fn target_renamed_away_first_is_free() {
        let dir = tempfile::tempdir().unwrap();
        // "balance-gold bar.png" sorts first and moves out before "scale - gold bar.png"
        // claims its name.
        touch(dir.path(), "balance-gold bar.png");
        touch(dir.path(), "scale - gold bar.png");

        let plan = plan_renames(dir.path(), &Translator::default()).unwrap();

        assert_eq!(plan.len(), 2);
        assert!(plan.collisions().is_empty());

        let summary = plan.apply();
        assert_eq!(summary.success, 2);
        assert!(dir.path().join("balance-gold bar.png").is_file());
        assert!(dir.path().join("balance-gold-bar.png").is_file());
    }

    #[test]
    fn failure_does_not_stop_remaining_renames() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "Bomb 1.png");
        touch(dir.path(), "Cage 2.png");

        let plan = plan_renames(dir.path(), &Translator::default()).unwrap();
        fs::remove_file(dir.path().join("Bomb 1.png")).unwrap();

        let summary = plan.apply();

        assert_eq!(summary.success, 1);
        assert_eq!(summary.errors(), 1);
        assert_eq!(
            summary.failures[0].old_path,
            dir.path().join("Bomb 1.png")
        );
        assert!(dir.path().join("cage-2.png").is_file());
    }
}
