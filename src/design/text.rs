//! Brief normalization and copy extraction (hook, subtitle).

use crate::design::tables::{
    CALM_WORDS, CategoryProfile, ENERGETIC_WORDS, FILLER_WORDS, INTRO_VERBS, STOPWORDS,
};

pub(crate) const MAX_BRIEF_CHARS: usize = 600;
pub(crate) const MAX_SUBTITLE_CHARS: usize = 80;
pub(crate) const MAX_HOOK_WORDS: usize = 3;

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Token {
    /// Word as typed, punctuation included.
    pub(crate) raw: String,
    /// Lowercase word with surrounding punctuation stripped.
    pub(crate) lower: String,
    pub(crate) ends_sentence: bool,
}

impl Token {
    fn from_word(word: &str) -> Option<Self> {
        let core = word.trim_matches(|c: char| !(c.is_alphanumeric() || c == '$'));
        if core.is_empty() {
            return None;
        }
        let ends_sentence = word
            .trim_end_matches(['"', '\'', ')', ']'])
            .ends_with(['.', '!', '?']);
        Some(Self {
            raw: word.to_owned(),
            lower: core.to_lowercase(),
            ends_sentence,
        })
    }

    /// Stripped word in the user's casing.
    pub(crate) fn word(&self) -> &str {
        self.raw
            .trim_matches(|c: char| !(c.is_alphanumeric() || c == '$'))
    }

    fn is_stopword(&self) -> bool {
        STOPWORDS.contains(&self.lower.as_str())
    }

    fn is_intro_verb(&self) -> bool {
        INTRO_VERBS.contains(&self.lower.as_str())
    }

    fn is_decoration(&self) -> bool {
        let w = self.lower.as_str();
        FILLER_WORDS.contains(&w) || ENERGETIC_WORDS.contains(&w) || CALM_WORDS.contains(&w)
    }

    fn is_significant(&self) -> bool {
        !self.is_stopword() && !self.is_decoration() && !self.is_intro_verb()
    }

    /// `$` followed by a digit, e.g. `$1000`.
    pub(crate) fn is_money(&self) -> bool {
        let mut chars = self.lower.chars();
        chars.next() == Some('$') && chars.next().is_some_and(|c| c.is_ascii_digit())
    }
}

/// A normalized description.
#[derive(Clone, Debug)]
pub(crate) struct Brief {
    /// Lowercase normalized text; the hashing input for every table pick.
    pub(crate) lower: String,
    pub(crate) tokens: Vec<Token>,
}

impl Brief {
    pub(crate) fn parse(input: &str) -> Self {
        let collapsed = input.split_whitespace().collect::<Vec<_>>().join(" ");
        let text: String = collapsed.chars().take(MAX_BRIEF_CHARS).collect();
        let text = text.trim_end().to_owned();
        let tokens = text.split(' ').filter_map(Token::from_word).collect();
        Self {
            lower: text.to_lowercase(),
            tokens,
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub(crate) fn word_count(&self) -> usize {
        self.tokens.len()
    }

    fn intro_verb_index(&self) -> Option<usize> {
        self.tokens.iter().position(Token::is_intro_verb)
    }

    fn sentence_end_from(&self, start: usize) -> usize {
        self.tokens[start..]
            .iter()
            .position(|t| t.ends_sentence)
            .map(|i| start + i)
            .unwrap_or(self.tokens.len().saturating_sub(1))
    }

    /// The 1..=3 word subject of the brief, if there is one.
    pub(crate) fn hook(&self) -> Option<String> {
        let start = self
            .intro_verb_index()
            .map(|i| i + 1)
            .filter(|&i| self.tokens[i..].iter().any(Token::is_significant))
            .unwrap_or(0);

        let mut words: Vec<String> = Vec::with_capacity(MAX_HOOK_WORDS);
        for t in &self.tokens[start..] {
            if t.is_stopword() {
                if words.len() >= 2 {
                    break;
                }
                continue;
            }
            if !t.is_significant() {
                continue;
            }
            words.push(capitalize_first(t.word()));
            if words.len() == MAX_HOOK_WORDS || (t.ends_sentence && words.len() >= 2) {
                break;
            }
        }

        if words.is_empty() {
            None
        } else {
            Some(words.join(" "))
        }
    }

    pub(crate) fn subtitle(&self, hook: Option<&str>, profile: &CategoryProfile) -> String {
        if self.is_empty() {
            return profile.default_subtitle.to_owned();
        }

        let clause = match self.intro_verb_index() {
            Some(v) => Some(join_raw(&self.tokens[v..=self.sentence_end_from(v)])),
            None => {
                let end = self.sentence_end_from(0);
                let hook_words = hook.map(|h| h.split(' ').count()).unwrap_or(0);
                (end + 1 > hook_words).then(|| join_raw(&self.tokens[..=end]))
            }
        };

        match clause.map(|c| clean_clause(&c)) {
            Some(c) if !c.is_empty() => truncate_words(&c, MAX_SUBTITLE_CHARS),
            _ => profile.default_subtitle.to_owned(),
        }
    }
}

fn join_raw(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(|t| t.raw.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

fn clean_clause(s: &str) -> String {
    let s = s.trim().trim_end_matches(['.', ',', '!', '?', ';', ':']);
    capitalize_first(s)
}

pub(crate) fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Cut `s` to at most `max_chars` characters on a word boundary, appending `…` when cut.
pub(crate) fn truncate_words(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        return s.to_owned();
    }

    let budget = max_chars.saturating_sub(1);
    let mut out = String::new();
    let mut len = 0usize;
    for word in s.split(' ') {
        let wlen = word.chars().count();
        let extra = if out.is_empty() { wlen } else { wlen + 1 };
        if len + extra > budget {
            break;
        }
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
        len += extra;
    }
    if out.is_empty() {
        out = s.chars().take(budget).collect();
    }
    let out = out.trim_end_matches([',', ';', ':', '-']).to_owned();
    out + "…"
}

#[cfg(test)]
#[path = "../../tests/unit/design/text.rs"]
mod tests;
