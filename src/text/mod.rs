pub mod classifier;
pub mod lexicon;
pub mod polarity;
pub mod topics;

pub use classifier::{
    detect_emotions, is_sarcastic, ClassificationSummary, CommentClassification, EmotionCounts,
    SentimentBucket, TextClassifier,
};
pub use lexicon::Emotion;
pub use polarity::{score_polarity, PolarityScore};
pub use topics::{topic_tokens, Topic, TopicCounter};
