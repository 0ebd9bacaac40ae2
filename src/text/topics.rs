use serde::Serialize;
use std::collections::HashMap;

use crate::text::lexicon::STOP_WORDS;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Topic {
    pub name: String,
    pub count: u64,
}

/// Lower-cased alphabetic tokens of at least `min_len` characters that are
/// not stop words. Non-alphabetic characters are dropped, not split on, so
/// "don't" becomes "dont".
pub fn topic_tokens(text: &str, min_len: usize) -> Vec<String> {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphabetic() || c.is_whitespace())
        .collect();

    cleaned
        .split_whitespace()
        .filter(|token| token.len() >= min_len && !STOP_WORDS.contains(token))
        .map(str::to_string)
        .collect()
}

/// Frequency table that remembers first-seen order for tie breaking.
#[derive(Debug, Clone, Default)]
pub struct TopicCounter {
    counts: Vec<(String, u64)>,
    index: HashMap<String, usize>,
}

impl TopicCounter {
    pub fn add(&mut self, token: String) {
        match self.index.get(&token) {
            Some(&slot) => self.counts[slot].1 += 1,
            None => {
                self.index.insert(token.clone(), self.counts.len());
                self.counts.push((token, 1));
            }
        }
    }

    pub fn extend(&mut self, tokens: impl IntoIterator<Item = String>) {
        for token in tokens {
            self.add(token);
        }
    }

    pub fn top(&self, limit: usize) -> Vec<Topic> {
        let mut ranked = self.counts.clone();
        // stable: equal counts keep first-seen order
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
            .into_iter()
            .take(limit)
            .map(|(name, count)| Topic { name, count })
            .collect()
    }
}
