//! Fixed keyword and pattern tables, compiled once per process.

use regex::Regex;
use serde::Serialize;
use std::collections::HashSet;
use std::sync::LazyLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Joy,
    Anger,
    Sadness,
    Surprise,
    Fear,
    Excitement,
}

impl Emotion {
    pub const ALL: [Emotion; 6] = [
        Emotion::Joy,
        Emotion::Anger,
        Emotion::Sadness,
        Emotion::Surprise,
        Emotion::Fear,
        Emotion::Excitement,
    ];

    /// Lower-case substrings that tag a comment with this emotion.
    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            Emotion::Joy => &[
                "happy", "love", "amazing", "awesome", "great", "wonderful", "fantastic",
                "excellent", "beautiful", "brilliant", "perfect", "thank", "thanks", "helpful",
                "loved",
            ],
            Emotion::Anger => &[
                "hate", "angry", "terrible", "horrible", "worst", "stupid", "idiot", "trash",
                "garbage", "awful", "disgusting", "pathetic", "useless", "waste",
            ],
            Emotion::Sadness => &[
                "sad", "disappointed", "depressing", "sorry", "unfortunately", "miss", "crying",
                "heartbreaking", "tragic", "upset", "unhappy", "miserable",
            ],
            Emotion::Surprise => &[
                "wow", "omg", "shocked", "unbelievable", "incredible", "unexpected", "amazed",
                "astonished", "speechless", "mindblowing", "insane", "crazy",
            ],
            Emotion::Fear => &[
                "scared", "afraid", "worried", "nervous", "terrified", "anxious", "creepy",
                "frightening", "scary", "horror", "panic", "dread",
            ],
            Emotion::Excitement => &[
                "excited", "cant wait", "pumped", "hyped", "thrilled", "eager", "stoked",
                "fired up", "looking forward", "finally", "yes", "yay", "woohoo",
            ],
        }
    }
}

const SPAM_PATTERN_SOURCES: &[&str] = &[
    r"check\s*(out)?\s*my\s*(channel|video|page)",
    r"sub\s*(scribe)?\s*(to)?\s*me",
    r"follow\s*me",
    r"(http|https|www\.)",
    r"free\s*(gift|money|coins|v-?bucks)",
    r"giveaway",
    r"(\d+)\s*(subscribers|subs|followers)",
    r"first(!|\.)*$",
    r"^(first|1st)$",
    r"who.*(watching|here).*(20\d\d|\d{4})",
    r"like\s*if\s*you",
    r"nobody:",
];

/// Self-promotion, links, giveaways, subscriber bragging, "first!" and
/// engagement bait, in evaluation order.
pub static SPAM_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    SPAM_PATTERN_SOURCES
        .iter()
        .map(|source| Regex::new(&format!("(?i){source}")).expect("valid spam regex"))
        .collect()
});

pub const SARCASM_POSITIVE_WORDS: &[&str] =
    &["great", "amazing", "wonderful", "love", "best", "perfect", "awesome"];

pub const CONTRADICTION_MARKERS: &[&str] = &[
    "not", "but", "however", "yet", "though", "...", "sure", "right", "yeah right",
];

pub static SARCASTIC_CLOSER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.\.\.|lol|lmao|sure|right$").expect("valid closer regex"));

pub static STOP_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "your", "yours",
        "yourself", "yourselves", "he", "him", "his", "himself", "she", "her", "hers",
        "herself", "it", "its", "itself", "they", "them", "their", "theirs", "themselves",
        "what", "which", "who", "whom", "this", "that", "these", "those", "am", "is", "are",
        "was", "were", "be", "been", "being", "have", "has", "had", "having", "do", "does",
        "did", "doing", "a", "an", "the", "and", "but", "if", "or", "because", "as", "until",
        "while", "of", "at", "by", "for", "with", "about", "against", "between", "into",
        "through", "during", "before", "after", "above", "below", "to", "from", "up", "down",
        "in", "out", "on", "off", "over", "under", "again", "further", "then", "once", "here",
        "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
        "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so",
        "than", "too", "very", "s", "t", "can", "will", "just", "don", "should", "now",
        "video", "youtube", "like", "comment", "subscribe", "channel", "best", "good",
        "really", "wow",
    ]
    .into_iter()
    .collect()
});
