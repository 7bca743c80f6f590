use crate::design::tables::{CategoryProfile, Mood};

const LONG_BRIEF_WORDS: usize = 20;

pub(crate) fn suggestions(
    profile: &CategoryProfile,
    mood: Mood,
    hook: Option<&str>,
    word_count: usize,
) -> Vec<String> {
    let mut notes = Vec::with_capacity(4);
    notes.push(profile.rationale.to_owned());

    notes.push(
        match mood {
            Mood::Energetic => "High-contrast accent improves thumbnail click-through.",
            Mood::Calm => "Generous negative space keeps a minimalist brief legible at small sizes.",
            Mood::Neutral => "A diagonal gradient adds depth without competing with the headline.",
        }
        .to_owned(),
    );

    notes.push(match hook {
        Some(h) => format!("The headline leads with \"{h}\" so the hook reads in under a second."),
        None => "Name a concrete subject in the description for a sharper headline.".to_owned(),
    });

    if word_count > LONG_BRIEF_WORDS {
        notes.push("Trim the brief: the strongest thumbnails carry a single idea.".to_owned());
    }

    notes
}
