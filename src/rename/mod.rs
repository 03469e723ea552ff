//! Renames English asset filenames to their French equivalents.

mod plan;
mod rules;
mod tables;

use std::path::PathBuf;

use thiserror::Error;

pub use plan::{
    Collision, RenameFailure, RenameMapping, RenamePlan, RenameSummary, plan_renames,
};
pub use rules::{
    BaseNameLookup, ComplexRules, DirectLookup, IMAGE_EXTENSION, PatternList, RuleStage,
    TranslationRule, Translator, default_translation,
};

/// Directory scanned when no root is given.
pub const DEFAULT_ROOT: &str = "public/objet2";

/// Number of renames listed in a dry run report.
pub const DEFAULT_SAMPLE_SIZE: usize = 20;

#[derive(Debug, Error)]
pub enum RenameError {
    /// The root asset directory does not exist.
    #[error("Directory {} not found!", .0.display())]
    RootNotFound(PathBuf),
}

#[derive(Debug, Clone)]
pub struct RenameOptions {
    pub root: PathBuf,
    pub dry_run: bool,
    pub sample_size: usize,
}

impl Default for RenameOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from(DEFAULT_ROOT),
            dry_run: false,
            sample_size: DEFAULT_SAMPLE_SIZE,
        }
    }
}

#[derive(Debug)]
pub struct RunReport {
    pub plan: RenamePlan,
    /// `None` for a dry run.
    pub summary: Option<RenameSummary>,
}

/// Plans the renames under `options.root`, prints the report, and applies them unless
/// `options.dry_run` is set.
///
/// Individual rename failures are reported in the summary and never returned as errors.
pub fn run(options: &RenameOptions) -> Result<RunReport, RenameError> {
    println!("🏷️  Renommage des Objets en Français");
    println!("{}", "=".repeat(40));
    println!();

    if options.dry_run {
        println!("⚠️  DRY RUN MODE - No files will be renamed\n");
    }

    let plan = plan_renames(&options.root, &Translator::default())?;

    println!("✅ Found {} files to rename\n", plan.len());

    println!("📊 Category breakdown:");
    for (category, count) in plan.category_breakdown() {
        println!("  • {}: {} files", category, count);
    }
    println!();

    let collisions = plan.collisions();
    if !collisions.is_empty() {
        println!("⚠️  {} target name collisions:", collisions.len());
        for collision in &collisions {
            tracing::warn!(
                path = %collision.target.display(),
                sources = collision.sources.len(),
                existing = collision.existing,
                "Rename collision"
            );
            println!(
                "  {} ← {}{}",
                collision.target.display(),
                collision
                    .sources
                    .iter()
                    .map(|source| source.display().to_string())
                    .collect::<Vec<_>>()
                    .join(", "),
                if collision.existing {
                    " (already exists)"
                } else {
                    ""
                }
            );
        }
        println!();
    }

    if options.dry_run {
        println!("📋 Sample renamings:");
        for mapping in plan.mappings().iter().take(options.sample_size) {
            println!(
                "  {} → {} ({})",
                mapping.old_name, mapping.new_name, mapping.stage
            );
        }
        if plan.len() > options.sample_size {
            println!("  ... and {} more", plan.len() - options.sample_size);
        }
        println!("\n✅ Dry run complete!");

        return Ok(RunReport {
            plan,
            summary: None,
        });
    }

    println!("📝 Renaming files...\n");

    let summary = plan.apply();

    println!("\n📊 Rename Summary:");
    println!("  ✅ Success: {}", summary.success);
    println!("  ❌ Errors: {}", summary.errors());
    println!("\n🎉 Renaming complete!");

    Ok(RunReport {
        plan,
        summary: Some(summary),
    })
}
