use super::*;
use crate::design::tables::Category;

#[test]
fn parse_collapses_whitespace_and_strips_punctuation() {
    let b = Brief::parse("  Hidden   gems in\tKyoto,  Japan!  ");
    let words: Vec<&str> = b.tokens.iter().map(|t| t.lower.as_str()).collect();
    assert_eq!(words, ["hidden", "gems", "in", "kyoto", "japan"]);
    assert_eq!(b.lower, "hidden gems in kyoto, japan!");
    assert!(b.tokens.last().unwrap().ends_sentence);
    assert!(!b.tokens[3].ends_sentence);
}

#[test]
fn parse_drops_punctuation_only_words_and_caps_length() {
    let b = Brief::parse("-- !!! ...");
    assert!(b.is_empty());

    let long = "word ".repeat(400);
    let b = Brief::parse(&long);
    assert!(b.lower.chars().count() <= MAX_BRIEF_CHARS);
    assert!(b.word_count() <= MAX_BRIEF_CHARS / 5 + 1);
}

#[test]
fn money_tokens_are_detected() {
    let b = Brief::parse("invest $1000 or $ maybe $x");
    let money: Vec<bool> = b.tokens.iter().map(Token::is_money).collect();
    assert_eq!(money, [false, true, false, false, false, false]);
}

#[test]
fn hook_starts_after_intro_verb() {
    let b = Brief::parse(
        "High-energy gaming thumbnail announcing a Fortnite tournament with prizes.",
    );
    assert_eq!(b.hook().as_deref(), Some("Fortnite Tournament"));

    let b = Brief::parse("Clean minimalist finance thumbnail revealing how to invest $1000 wisely.");
    assert_eq!(b.hook().as_deref(), Some("Invest $1000 Wisely"));

    let b = Brief::parse("Vibrant travel vlog thumbnail exploring hidden gems in Kyoto, Japan.");
    assert_eq!(b.hook().as_deref(), Some("Hidden Gems"));
}

#[test]
fn hook_keeps_user_casing_and_skips_early_stopwords() {
    let b = Brief::parse(
        "Bold AI thumbnail teaching how to grow a YouTube channel fast with automation and storytelling.",
    );
    assert_eq!(b.hook().as_deref(), Some("Grow YouTube Channel"));
}

#[test]
fn hook_without_verb_uses_leading_words() {
    let b = Brief::parse("minecraft castle build");
    assert_eq!(b.hook().as_deref(), Some("Minecraft Castle Build"));
}

#[test]
fn hook_is_none_when_only_decoration() {
    assert_eq!(Brief::parse("").hook(), None);
    assert_eq!(Brief::parse("a bold vibrant thumbnail for the video").hook(), None);
}

#[test]
fn subtitle_is_the_verb_clause() {
    let profile = Category::Gaming.profile();
    let b = Brief::parse(
        "High-energy gaming thumbnail announcing a Fortnite tournament with prizes.",
    );
    let hook = b.hook();
    assert_eq!(
        b.subtitle(hook.as_deref(), profile),
        "Announcing a Fortnite tournament with prizes"
    );
}

#[test]
fn subtitle_stops_at_sentence_end() {
    let profile = Category::Travel.profile();
    let b = Brief::parse("Exploring Kyoto at night. Shot on film!");
    assert_eq!(b.subtitle(None, profile), "Exploring Kyoto at night");
}

#[test]
fn subtitle_falls_back_to_category_default() {
    let profile = Category::Food.profile();
    let b = Brief::parse("");
    assert_eq!(b.subtitle(None, profile), profile.default_subtitle);

    let b = Brief::parse("Ramen");
    let hook = b.hook();
    assert_eq!(hook.as_deref(), Some("Ramen"));
    assert_eq!(b.subtitle(hook.as_deref(), profile), profile.default_subtitle);
}

#[test]
fn subtitle_without_verb_uses_first_sentence() {
    let profile = Category::General.profile();
    let b = Brief::parse("my grandmother's secret garden, in spring. more text");
    let hook = b.hook();
    assert_eq!(
        b.subtitle(hook.as_deref(), profile),
        "My grandmother's secret garden, in spring"
    );
}

#[test]
fn truncate_words_respects_limit() {
    let s = "one two three four five six seven eight nine ten";
    let t = truncate_words(s, 20);
    assert!(t.chars().count() <= 20, "{t}");
    assert!(t.ends_with('…'));
    assert_eq!(t, "one two three four…");
    assert_eq!(truncate_words("short", 20), "short");
    assert_eq!(truncate_words("abcdefghijklmnop", 5), "abcd…");
}

#[test]
fn capitalize_first_handles_unicode_and_empty() {
    assert_eq!(capitalize_first("élan"), "Élan");
    assert_eq!(capitalize_first(""), "");
    assert_eq!(capitalize_first("$1000"), "$1000");
}
