use serde::Serialize;
use tracing::debug;

use crate::config::ClassifierConfig;
use crate::text::lexicon::{
    Emotion, CONTRADICTION_MARKERS, SARCASM_POSITIVE_WORDS, SARCASTIC_CLOSER, SPAM_PATTERNS,
};
use crate::text::polarity::{score_polarity, PolarityScore};
use crate::text::topics::{topic_tokens, Topic, TopicCounter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentBucket {
    Positive,
    Negative,
    Neutral,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct EmotionCounts {
    pub joy: u64,
    pub anger: u64,
    pub sadness: u64,
    pub surprise: u64,
    pub fear: u64,
    pub excitement: u64,
}

impl EmotionCounts {
    pub fn increment(&mut self, emotion: Emotion) {
        match emotion {
            Emotion::Joy => self.joy += 1,
            Emotion::Anger => self.anger += 1,
            Emotion::Sadness => self.sadness += 1,
            Emotion::Surprise => self.surprise += 1,
            Emotion::Fear => self.fear += 1,
            Emotion::Excitement => self.excitement += 1,
        }
    }

    pub fn get(&self, emotion: Emotion) -> u64 {
        match emotion {
            Emotion::Joy => self.joy,
            Emotion::Anger => self.anger,
            Emotion::Sadness => self.sadness,
            Emotion::Surprise => self.surprise,
            Emotion::Fear => self.fear,
            Emotion::Excitement => self.excitement,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommentClassification {
    pub polarity: f64,
    pub subjectivity: f64,
    pub sentiment: SentimentBucket,
    pub emotions: Vec<Emotion>,
    pub is_spam: bool,
    pub is_sarcastic: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassificationSummary {
    pub positive: u64,
    pub negative: u64,
    pub neutral: u64,
    pub average_polarity: f64,
    pub total: u64,
    pub topics: Vec<Topic>,
    pub emotions: EmotionCounts,
    pub spam_count: u64,
    pub spam_comments: Vec<String>,
    pub sarcasm_detected: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classifications: Option<Vec<CommentClassification>>,
}

impl Default for ClassificationSummary {
    fn default() -> Self {
        Self {
            positive: 0,
            negative: 0,
            neutral: 0,
            average_polarity: 0.0,
            total: 0,
            topics: Vec::new(),
            emotions: EmotionCounts::default(),
            spam_count: 0,
            spam_comments: Vec::new(),
            sarcasm_detected: 0,
            classifications: None,
        }
    }
}

/// Each category counts at most once: the first matching keyword wins.
pub fn detect_emotions(lowercase: &str) -> Vec<Emotion> {
    Emotion::ALL
        .into_iter()
        .filter(|emotion| {
            emotion
                .keywords()
                .iter()
                .any(|keyword| lowercase.contains(keyword))
        })
        .collect()
}

/// Mixed signals: praise undercut by a contradiction in an opinionated
/// comment, or strong praise closed with a sarcastic marker.
pub fn is_sarcastic(lowercase: &str, score: PolarityScore) -> bool {
    let has_positive = SARCASM_POSITIVE_WORDS
        .iter()
        .any(|word| lowercase.contains(word));
    let has_contradiction = CONTRADICTION_MARKERS
        .iter()
        .any(|marker| lowercase.contains(marker));

    if has_positive && has_contradiction && score.subjectivity > 0.5 {
        return true;
    }

    score.polarity > 0.3 && SARCASTIC_CLOSER.is_match(lowercase)
}

fn longest_run(text: &str) -> usize {
    let mut longest = 0usize;
    let mut current = 0usize;
    let mut previous = None;
    for ch in text.chars() {
        if Some(ch) == previous {
            current += 1;
        } else {
            current = 1;
            previous = Some(ch);
        }
        longest = longest.max(current);
    }
    longest
}

#[derive(Debug, Clone)]
pub struct TextClassifier {
    config: ClassifierConfig,
}

impl Default for TextClassifier {
    fn default() -> Self {
        Self::new(ClassifierConfig::default())
    }
}

impl TextClassifier {
    pub fn new(config: ClassifierConfig) -> Self {
        Self { config }
    }

    pub fn bucket(&self, polarity: f64) -> SentimentBucket {
        if polarity > self.config.polarity_threshold {
            SentimentBucket::Positive
        } else if polarity < -self.config.polarity_threshold {
            SentimentBucket::Negative
        } else {
            SentimentBucket::Neutral
        }
    }

    pub fn is_spam(&self, comment: &str) -> bool {
        self.spam_signals(comment, &comment.to_lowercase())
    }

    /// Patterns run on the lower-cased text; the caps ratio and repeat run
    /// need the original casing.
    fn spam_signals(&self, comment: &str, lowercase: &str) -> bool {
        if SPAM_PATTERNS.iter().any(|pattern| pattern.is_match(lowercase)) {
            return true;
        }

        let length = comment.chars().count();
        if length > self.config.caps_min_len {
            let uppercase = comment.chars().filter(|c| c.is_uppercase()).count();
            if uppercase as f64 / length as f64 > self.config.caps_ratio {
                return true;
            }
        }

        longest_run(comment) >= self.config.repeat_run
    }

    pub fn classify(&self, comment: &str) -> CommentClassification {
        let lowercase = comment.to_lowercase();
        let score = score_polarity(comment);

        CommentClassification {
            polarity: score.polarity,
            subjectivity: score.subjectivity,
            sentiment: self.bucket(score.polarity),
            emotions: detect_emotions(&lowercase),
            is_spam: self.spam_signals(comment, &lowercase),
            is_sarcastic: is_sarcastic(&lowercase, score),
        }
    }

    pub fn summarize<S: AsRef<str>>(&self, comments: &[S], include_details: bool) -> ClassificationSummary {
        let mut summary = ClassificationSummary {
            total: comments.len() as u64,
            ..ClassificationSummary::default()
        };
        if comments.is_empty() {
            if include_details {
                summary.classifications = Some(Vec::new());
            }
            return summary;
        }

        let mut details = Vec::new();
        let mut topics = TopicCounter::default();
        let mut polarity_sum = 0.0;

        for comment in comments {
            let comment = comment.as_ref();
            let classification = self.classify(comment);
            polarity_sum += classification.polarity;

            match classification.sentiment {
                SentimentBucket::Positive => summary.positive += 1,
                SentimentBucket::Negative => summary.negative += 1,
                SentimentBucket::Neutral => summary.neutral += 1,
            }
            for emotion in &classification.emotions {
                summary.emotions.increment(*emotion);
            }
            if classification.is_spam {
                summary.spam_count += 1;
                if summary.spam_comments.len() < self.config.spam_examples {
                    summary
                        .spam_comments
                        .push(comment.chars().take(self.config.spam_example_chars).collect());
                }
            }
            if classification.is_sarcastic {
                summary.sarcasm_detected += 1;
            }

            topics.extend(topic_tokens(comment, self.config.topic_min_len));

            if include_details {
                details.push(classification);
            }
        }

        summary.average_polarity = polarity_sum / comments.len() as f64;
        summary.topics = topics.top(self.config.topic_limit);
        if include_details {
            summary.classifications = Some(details);
        }

        debug!(
            total = summary.total,
            positive = summary.positive,
            negative = summary.negative,
            spam = summary.spam_count,
            sarcasm = summary.sarcasm_detected,
            "comments classified"
        );
        summary
    }
}
