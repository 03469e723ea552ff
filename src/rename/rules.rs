use std::{collections::HashMap, sync::LazyLock};

use regex::{Captures, Regex, RegexBuilder};
use strum::Display;

use super::tables::{
    ANIMALS, BASE_NAME_TRANSLATIONS, CROPS, DIRECT_TRANSLATIONS, FOODS, PATTERN_RULES,
    SIEGE_WEAPONS,
};

/// The only extension the asset directories contain.
pub const IMAGE_EXTENSION: &str = ".png";

type Vocabulary = HashMap<&'static str, &'static str>;

static DIRECT: LazyLock<Vocabulary> =
    LazyLock::new(|| DIRECT_TRANSLATIONS.iter().copied().collect());
static BASE_NAMES: LazyLock<Vocabulary> =
    LazyLock::new(|| BASE_NAME_TRANSLATIONS.iter().copied().collect());
static CROP_NAMES: LazyLock<Vocabulary> = LazyLock::new(|| CROPS.iter().copied().collect());
static ANIMAL_NAMES: LazyLock<Vocabulary> = LazyLock::new(|| ANIMALS.iter().copied().collect());
static FOOD_NAMES: LazyLock<Vocabulary> = LazyLock::new(|| FOODS.iter().copied().collect());
static SIEGE_WEAPON_NAMES: LazyLock<Vocabulary> =
    LazyLock::new(|| SIEGE_WEAPONS.iter().copied().collect());

static PATTERNS: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    PATTERN_RULES
        .iter()
        .map(|(pattern, replacement)| (case_insensitive(pattern), *replacement))
        .collect()
});

static COMPLEX: LazyLock<Vec<ComplexRule>> = LazyLock::new(|| {
    vec![
        ComplexRule::new(r"^Standing[_ ](.+)$", |caps| {
            format!("debout-{}", slugify(&caps[1]))
        }),
        ComplexRule::new(r"^Crop[_ ](.+) ([ABC])$", |caps| {
            format!(
                "culture-{}-{}",
                lookup_or_slug(&CROP_NAMES, &caps[1]),
                caps[2].to_lowercase()
            )
        }),
        ComplexRule::new(r"^Livestock[_ ](.+) ([ABC])$", |caps| {
            format!(
                "betail-{}-{}",
                lookup_or_slug(&ANIMAL_NAMES, &caps[1]),
                caps[2].to_lowercase()
            )
        }),
        ComplexRule::new(r"^Food[_ ](.+)$", |caps| {
            format!("nourriture-{}", translate_food(&caps[1]))
        }),
        ComplexRule::new(r"^Siege Weapon - (.+)$", |caps| {
            format!(
                "arme-siege-{}",
                lookup_or_slug(&SIEGE_WEAPON_NAMES, &caps[1])
            )
        }),
        ComplexRule::new(r"^Weapon Rack[_ ](empty|filled) (\d+)$", |caps| {
            let state = if &caps[1] == "empty" { "vide" } else { "plein" };
            format!("support-armes-{}-{}", state, &caps[2])
        }),
        ComplexRule::new(r"^Tent[_ ]rugged (\d+)([ab]?)$", |caps| {
            format!("tente-robuste-{}{}", &caps[1], &caps[2])
        }),
        ComplexRule::new(r"^Scale - (.+)$", |caps| {
            format!("balance-{}", caps[1].to_lowercase())
        }),
    ]
});

fn case_insensitive(pattern: &str) -> Regex {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .unwrap_or_else(|e| panic!("Invalid translation pattern {pattern}: {e}"))
}

/// Lowercases and turns spaces into hyphens.
fn slugify(s: &str) -> String {
    s.to_lowercase().replace(' ', "-")
}

fn lookup_or_slug(vocabulary: &Vocabulary, term: &str) -> String {
    match vocabulary.get(term) {
        Some(translated) => translated.to_string(),
        None => slugify(term),
    }
}

fn translate_food(food: &str) -> String {
    // "fish 1", "Fish 2", ...
    let parts: Vec<&str> = food.split_whitespace().collect();

    if let [first, number] = parts.as_slice()
        && first.eq_ignore_ascii_case("fish")
    {
        return format!("poisson-{number}");
    }

    let lowered = food.to_lowercase();

    match FOOD_NAMES.get(lowered.as_str()) {
        Some(translated) => translated.to_string(),
        None => lowered.replace(' ', "-"),
    }
}

/// Last resort for names no rule knows about.
pub fn default_translation(filename: &str) -> String {
    filename.to_lowercase().replace([' ', '_'], "-")
}

/// Which link of the rule chain produced a translation.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "kebab-case")]
pub enum RuleStage {
    Direct,
    Pattern,
    BaseName,
    Complex,
    Fallback,
}

/// One link of the translation chain. Returns `None` to defer to the next rule.
pub trait TranslationRule: Send + Sync {
    fn stage(&self) -> RuleStage;

    fn attempt(&self, filename: &str) -> Option<String>;
}

/// Exact filename lookup.
pub struct DirectLookup;

impl TranslationRule for DirectLookup {
    fn stage(&self) -> RuleStage {
        RuleStage::Direct
    }

    fn attempt(&self, filename: &str) -> Option<String> {
        DIRECT.get(filename).map(|name| name.to_string())
    }
}

/// Ordered regex substitutions over the full filename. The result is lowercased.
pub struct PatternList;

impl TranslationRule for PatternList {
    fn stage(&self) -> RuleStage {
        RuleStage::Pattern
    }

    fn attempt(&self, filename: &str) -> Option<String> {
        PATTERNS
            .iter()
            .find(|(re, _)| re.is_match(filename))
            .map(|(re, replacement)| re.replace(filename, *replacement).to_lowercase())
    }
}

/// Literal lookup of the name without its extension.
pub struct BaseNameLookup {
    extension: &'static str,
}

impl TranslationRule for BaseNameLookup {
    fn stage(&self) -> RuleStage {
        RuleStage::BaseName
    }

    fn attempt(&self, filename: &str) -> Option<String> {
        let base = filename.strip_suffix(self.extension)?;

        BASE_NAMES
            .get(base)
            .map(|translated| format!("{}{}", translated, self.extension))
    }
}

struct ComplexRule {
    pattern: Regex,
    transform: fn(&Captures) -> String,
}

impl ComplexRule {
    fn new(pattern: &str, transform: fn(&Captures) -> String) -> Self {
        Self {
            pattern: case_insensitive(pattern),
            transform,
        }
    }
}

/// Composite names whose parts are translated through smaller vocabularies.
pub struct ComplexRules {
    extension: &'static str,
}

impl TranslationRule for ComplexRules {
    fn stage(&self) -> RuleStage {
        RuleStage::Complex
    }

    fn attempt(&self, filename: &str) -> Option<String> {
        let base = filename.strip_suffix(self.extension)?;

        COMPLEX.iter().find_map(|rule| {
            rule.pattern
                .captures(base)
                .map(|caps| format!("{}{}", (rule.transform)(&caps), self.extension))
        })
    }
}

/// Translates English asset filenames into French ones.
///
/// Rules are tried in order and the first one to produce a name wins. When none
/// applies, [`default_translation`] is used, so translation never fails.
pub struct Translator {
    rules: Vec<Box<dyn TranslationRule>>,
}

impl Default for Translator {
    fn default() -> Self {
        Self::with_extension(IMAGE_EXTENSION)
    }
}

impl Translator {
    /// Builds the standard rule chain for files ending in `extension`.
    pub fn with_extension(extension: &'static str) -> Self {
        Self {
            rules: vec![
                Box::new(DirectLookup),
                Box::new(PatternList),
                Box::new(BaseNameLookup { extension }),
                Box::new(ComplexRules { extension }),
            ],
        }
    }

    pub fn translate(&self, filename: &str) -> String {
        self.translate_with_stage(filename).0
    }

    pub fn translate_with_stage(&self, filename: &str) -> (String, RuleStage) {
        for rule in &self.rules {
            if let Some(translated) = rule.attempt(filename) {
                tracing::debug!(filename, %translated, stage = %rule.stage(), "translated");
                return (translated, rule.stage());
            }
        }

        (default_translation(filename), RuleStage::Fallback)
    }
}
