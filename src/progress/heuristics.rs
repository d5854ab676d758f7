// Presentation heuristics: difficulty estimate and example sentences

use once_cell::sync::Lazy;
use rand::seq::SliceRandom;
use rand::Rng;
use regex::Regex;

static VOWEL_GROUPS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[aeiouy]+").unwrap());

const UNCOMMON_LETTERS: &[char] = &['j', 'k', 'q', 'x', 'z', 'v', 'w'];

/// Rough 1-10 difficulty of a word.
///
/// Weighted sum of length (`len/15`, capped, x3), uncommon letters
/// (`count/3`, capped, x3) and vowel groups as a syllable proxy
/// (`groups/5`, capped, x4), plus 1, rounded and clamped to 10.
pub fn difficulty_score(word: &str) -> u8 {
    let length = word.chars().count() as f64;
    let length_score = (length / 15.0).min(1.0) * 3.0;

    let uncommon = word.chars().filter(|c| UNCOMMON_LETTERS.contains(c)).count() as f64;
    let letter_score = (uncommon / 3.0).min(1.0) * 3.0;

    let vowel_groups = VOWEL_GROUPS.find_iter(&word.to_lowercase()).count() as f64;
    let syllable_score = (vowel_groups / 5.0).min(1.0) * 4.0;

    let difficulty = (length_score + letter_score + syllable_score) + 1.0;
    difficulty.round().min(10.0) as u8
}

/// Pick one of the fixed example templates and drop the word in verbatim.
pub fn example_sentence<R: Rng + ?Sized>(word: &str, rng: &mut R) -> String {
    let templates = [
        format!("The {word} was evident in his speech."),
        format!("Her {word} attitude surprised everyone."),
        format!("I noticed his {word} behavior during the meeting."),
        format!("The professor explained the concept of {word} to the class."),
        format!("Being {word} is an important quality in this profession."),
    ];
    templates
        .choose(rng)
        .cloned()
        .unwrap_or_else(|| templates[0].clone())
}
