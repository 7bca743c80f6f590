use serde::Serialize;

use crate::design::shapes::place_shapes;
use crate::design::spec::{DesignSpec, Gradient};
use crate::design::suggest::suggestions;
use crate::design::tables::{
    CALM_WORDS, CATEGORY_TABLE, Category, CategoryProfile, ENERGETIC_WORDS, Mood,
};
use crate::design::text::Brief;
use crate::foundation::math::{hash_str, pick_index};

const SALT_PALETTE: u8 = 1;
const SALT_TITLE: u8 = 2;
const SALT_TAGLINE: u8 = 3;
const SALT_BADGE: u8 = 4;

/// What the generator read out of a description.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DesignAnalysis {
    pub category: Category,
    pub mood: Mood,
    pub hook: Option<String>,
    /// Shape seed derived from the normalized text.
    pub seed: u64,
}

pub(crate) fn classify_category(brief: &Brief) -> Category {
    let mut best = Category::General;
    let mut best_hits = 0usize;
    for profile in CATEGORY_TABLE {
        let mut hits = brief
            .tokens
            .iter()
            .filter(|t| profile.keywords.contains(&t.lower.as_str()))
            .count();
        if profile.category == Category::Finance {
            hits += brief.tokens.iter().filter(|t| t.is_money()).count();
        }
        if hits > best_hits {
            best = profile.category;
            best_hits = hits;
        }
    }
    best
}

pub(crate) fn classify_mood(brief: &Brief) -> Mood {
    let count = |words: &[&str]| {
        brief
            .tokens
            .iter()
            .filter(|t| words.contains(&t.lower.as_str()))
            .count()
    };
    let energetic = count(ENERGETIC_WORDS);
    let calm = count(CALM_WORDS);
    match energetic.cmp(&calm) {
        std::cmp::Ordering::Greater => Mood::Energetic,
        std::cmp::Ordering::Less => Mood::Calm,
        std::cmp::Ordering::Equal => Mood::Neutral,
    }
}

/// Classify a description without building a full design.
pub fn analyze_description(description: &str) -> DesignAnalysis {
    let brief = Brief::parse(description);
    DesignAnalysis {
        category: classify_category(&brief),
        mood: classify_mood(&brief),
        hook: brief.hook(),
        seed: hash_str(&brief.lower),
    }
}

/// Map a free-text description to a design.
///
/// Never fails: empty or unrecognized text yields the `General` profile with its fallback copy.
/// Shapes are seeded from the text, so the whole result is reproducible.
pub fn generate_design(description: &str) -> DesignSpec {
    let brief = Brief::parse(description);
    let seed = hash_str(&brief.lower);
    build_design(&brief, seed)
}

/// Like [`generate_design`] but with an explicit shape seed.
///
/// Editorial fields (copy, colors, suggestions) are unaffected by `seed`.
pub fn generate_design_seeded(description: &str, seed: u64) -> DesignSpec {
    build_design(&Brief::parse(description), seed)
}

#[tracing::instrument(skip(brief), fields(words = brief.word_count()))]
fn build_design(brief: &Brief, seed: u64) -> DesignSpec {
    let category = classify_category(brief);
    let mood = classify_mood(brief);
    let profile: &CategoryProfile = category.profile();
    let text_hash = hash_str(&brief.lower);

    let palette = profile.palettes[pick_index(text_hash, SALT_PALETTE, profile.palettes.len())];
    let hook = brief.hook();
    let template =
        profile.title_templates[pick_index(text_hash, SALT_TITLE, profile.title_templates.len())];
    let title = template.replace("{hook}", hook.as_deref().unwrap_or(profile.fallback_hook));
    let subtitle = brief.subtitle(hook.as_deref(), profile);
    let tagline = profile.taglines[pick_index(text_hash, SALT_TAGLINE, profile.taglines.len())];
    let badge = profile.badges[pick_index(text_hash, SALT_BADGE, profile.badges.len())];

    tracing::debug!(
        category = category.label(),
        ?mood,
        hook = hook.as_deref(),
        "classified description"
    );

    DesignSpec {
        title,
        subtitle,
        tagline: tagline.to_owned(),
        badge_text: badge.to_owned(),
        accent_color: palette.accent.to_owned(),
        gradient: Gradient {
            from: palette.from.to_owned(),
            to: palette.to.to_owned(),
        },
        shapes: place_shapes(mood, seed),
        suggestions: suggestions(profile, mood, hook.as_deref(), brief.word_count()),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/design/generator.rs"]
mod tests;
