//! Mistake log: which characters get mistyped, and as what
//!
//! Only rejected keystrokes with an actual input character are logged.
//! Mid-composition jamo show up here too, the same way they count
//! against accuracy.

use rustc_hash::FxHashMap;

/// Occurrences of the same (expected, got) pair before it is flagged
const REPEAT_THRESHOLD: u32 = 3;

#[derive(Clone, Debug, Default)]
pub struct MistakeLog {
    /// expected char → (typed char → count)
    pairs: FxHashMap<char, FxHashMap<char, u32>>,
    total: u32,
}

impl MistakeLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, expected: char, got: char) {
        if expected == got {
            return;
        }

        *self
            .pairs
            .entry(expected)
            .or_default()
            .entry(got)
            .or_insert(0) += 1;
        self.total += 1;
    }

    #[allow(dead_code)]
    pub fn total(&self) -> u32 {
        self.total
    }

    /// Most frequent pairs first; ties broken by expected char for stable output
    #[allow(dead_code)]
    pub fn top_pairs(&self, count: usize) -> Vec<((char, char), u32)> {
        let mut pairs: Vec<((char, char), u32)> = self
            .pairs
            .iter()
            .flat_map(|(&expected, got_map)| {
                got_map
                    .iter()
                    .map(move |(&got, &n)| ((expected, got), n))
            })
            .collect();

        pairs.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        pairs.truncate(count);
        pairs
    }

    /// Characters mistyped as the same wrong character 3+ times
    pub fn problematic_chars(&self) -> Vec<char> {
        let mut chars: Vec<char> = self
            .pairs
            .iter()
            .filter(|(_, got_map)| got_map.values().any(|&n| n >= REPEAT_THRESHOLD))
            .map(|(&expected, _)| expected)
            .collect();
        chars.sort_unstable();
        chars
    }
}
