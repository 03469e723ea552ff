//! Asset pipeline utilities: per-tier "Voie" record splitting and French renaming of
//! image assets.

pub mod logging;
pub mod rename;
pub mod voie;

pub use rename::{RenameError, RenameOptions, Translator};
pub use voie::{VoieError, VoieSplitter};
