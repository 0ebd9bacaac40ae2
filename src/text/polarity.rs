//! Sentence-level polarity and subjectivity from a weighted word lexicon.
//!
//! Each known word carries a polarity in `[-1, 1]` and a subjectivity in
//! `[0, 1]`. Intensifiers scale the next scored word, negations flip it at
//! half strength, and the sentence score is the mean over scored words.

use serde::Serialize;

/// `(word, polarity, subjectivity)`
pub(crate) const LEXICON: &[(&str, f64, f64)] = &[
    // Positive
    ("great", 0.8, 0.75),
    ("good", 0.7, 0.6),
    ("amazing", 0.6, 0.9),
    ("awesome", 1.0, 1.0),
    ("wonderful", 1.0, 1.0),
    ("excellent", 1.0, 1.0),
    ("perfect", 1.0, 1.0),
    ("best", 1.0, 0.3),
    ("fantastic", 0.4, 0.9),
    ("brilliant", 0.9, 1.0),
    ("beautiful", 0.85, 1.0),
    ("incredible", 0.9, 0.9),
    ("love", 0.5, 0.6),
    ("loved", 0.7, 0.8),
    ("happy", 0.8, 1.0),
    ("glad", 0.5, 1.0),
    ("nice", 0.6, 1.0),
    ("cool", 0.35, 0.65),
    ("fun", 0.3, 0.2),
    ("funny", 0.25, 1.0),
    ("interesting", 0.5, 0.5),
    ("helpful", 0.4, 0.5),
    ("useful", 0.3, 0.2),
    ("easy", 0.43, 0.83),
    ("clear", 0.1, 0.38),
    ("excited", 0.375, 0.75),
    ("thanks", 0.2, 0.2),
    ("sure", 0.5, 0.89),
    ("right", 0.29, 0.54),
    ("wow", 0.1, 1.0),
    // Negative
    ("bad", -0.7, 0.67),
    ("terrible", -1.0, 1.0),
    ("horrible", -1.0, 1.0),
    ("awful", -1.0, 1.0),
    ("worst", -1.0, 1.0),
    ("hate", -0.8, 0.9),
    ("stupid", -0.8, 1.0),
    ("boring", -1.0, 1.0),
    ("bored", -0.5, 1.0),
    ("sad", -0.5, 1.0),
    ("disappointed", -0.75, 0.75),
    ("disappointing", -0.6, 0.7),
    ("angry", -0.5, 1.0),
    ("wrong", -0.5, 0.9),
    ("useless", -0.5, 0.2),
    ("waste", -0.2, 0.1),
    ("annoying", -0.8, 0.9),
    ("confusing", -0.3, 0.7),
    ("confused", -0.4, 0.7),
    ("poor", -0.4, 0.6),
    ("fake", -0.5, 1.0),
    ("pathetic", -1.0, 1.0),
    ("disgusting", -1.0, 1.0),
    ("scary", -0.5, 1.0),
    ("worried", -0.2, 0.5),
];

/// `(word, multiplier)` applied to the next scored word.
const INTENSIFIERS: &[(&str, f64)] = &[
    ("very", 1.3),
    ("really", 1.3),
    ("so", 1.3),
    ("super", 1.3),
    ("too", 1.3),
    ("totally", 1.3),
    ("quite", 1.1),
    ("absolutely", 1.4),
    ("incredibly", 1.4),
    ("extremely", 1.5),
];

const NEGATIONS: &[&str] = &[
    "not", "never", "no", "dont", "don't", "isnt", "isn't", "wasnt", "wasn't", "cant", "can't",
    "wont", "won't", "aint", "ain't",
];

const NEGATION_FACTOR: f64 = -0.5;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct PolarityScore {
    pub polarity: f64,
    pub subjectivity: f64,
}

pub fn score_polarity(text: &str) -> PolarityScore {
    let mut polarity_sum = 0.0;
    let mut subjectivity_sum = 0.0;
    let mut scored = 0usize;

    let mut intensity = 1.0;
    let mut negated = false;

    for raw in text.split_whitespace() {
        let word = raw
            .trim_matches(|c: char| !c.is_alphanumeric() && c != '\'')
            .to_lowercase();
        if word.is_empty() {
            continue;
        }

        if NEGATIONS.contains(&word.as_str()) {
            negated = !negated;
            continue;
        }
        if let Some(&(_, multiplier)) = INTENSIFIERS.iter().find(|(w, _)| *w == word) {
            intensity *= multiplier;
            continue;
        }

        if let Some(&(_, polarity, subjectivity)) =
            LEXICON.iter().find(|(lex_word, _, _)| *lex_word == word)
        {
            let mut polarity = (polarity * intensity).clamp(-1.0, 1.0);
            if negated {
                polarity *= NEGATION_FACTOR;
            }
            polarity_sum += polarity;
            subjectivity_sum += (subjectivity * intensity).clamp(0.0, 1.0);
            scored += 1;
        }

        intensity = 1.0;
        negated = false;
    }

    if scored == 0 {
        return PolarityScore::default();
    }

    PolarityScore {
        polarity: (polarity_sum / scored as f64).clamp(-1.0, 1.0),
        subjectivity: (subjectivity_sum / scored as f64).clamp(0.0, 1.0),
    }
}
