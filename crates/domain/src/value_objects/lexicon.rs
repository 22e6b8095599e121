//! Keyword lexicons for the wellbeing screening

/// A fixed set of stem words counted by substring containment
///
/// Matching is deliberately not tokenized: "stressed" counts for the stem
/// "stress", and a stem buried inside a longer unrelated word counts too.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lexicon {
    name: &'static str,
    words: &'static [&'static str],
}

impl Lexicon {
    pub const STRESS: Self = Self {
        name: "stress",
        words: &["stress", "overwhelm", "pressure", "tense", "strain"],
    };

    pub const ANXIETY: Self = Self {
        name: "anxiety",
        words: &["anxious", "worry", "nervous", "fear", "panic"],
    };

    pub const DEPRESSION: Self = Self {
        name: "depression",
        words: &["sad", "depressed", "hopeless", "tired", "exhausted"],
    };

    pub const POSITIVE: Self = Self {
        name: "positive",
        words: &["good", "happy", "calm", "relax", "peace", "joy", "content"],
    };

    /// Lexicon name
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Stem words in this lexicon
    #[must_use]
    pub const fn words(&self) -> &'static [&'static str] {
        self.words
    }

    /// Number of distinct stems contained in `text`
    ///
    /// `text` must already be lower-cased. Each stem counts at most once
    /// per call, however often it occurs.
    #[must_use]
    pub fn count_hits(&self, text: &str) -> u32 {
        let hits = self.words.iter().filter(|word| text.contains(*word)).count();
        u32::try_from(hits).unwrap_or(u32::MAX)
    }
}
