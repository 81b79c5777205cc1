//! Built-in practice corpora

use super::{Language, PracticeType};

const KO_WORDS: &[&str] = &[
    "사과", "바나나", "학교", "선생님", "컴퓨터", "키보드", "하늘", "바다", "친구", "가족",
    "음악", "도서관", "기차", "자전거", "겨울", "봄날", "행복", "노래", "시간", "연습",
];

const EN_WORDS: &[&str] = &[
    "apple", "banana", "school", "teacher", "computer", "keyboard", "sky", "ocean", "friend",
    "family", "music", "library", "train", "bicycle", "winter", "spring", "happy", "song",
    "time", "practice",
];

const KO_SENTENCES: &[&str] = &[
    "오늘은 날씨가 맑고 따뜻합니다.",
    "천천히 정확하게 치는 것이 중요합니다.",
    "나는 매일 아침 공원을 산책합니다.",
    "도서관에서 책을 두 권 빌렸어요.",
    "연습을 꾸준히 하면 실력이 늘어요.",
    "우리는 함께 저녁을 먹었습니다.",
];

const EN_SENTENCES: &[&str] = &[
    "The quick brown fox jumps over the lazy dog.",
    "Accuracy matters more than speed at first.",
    "I walk in the park every morning.",
    "She borrowed two books from the library.",
    "Practice a little every day to improve.",
    "We had dinner together last night.",
];

const KO_LONG_TEXTS: &[&str] = &[
    "한글은 조선의 세종대왕이 백성을 위하여 만든 글자입니다. 자음과 모음을 모아 한 글자를 이루며, 배우기 쉽고 쓰기 편리하여 오늘날까지 널리 쓰이고 있습니다.",
    "타자 연습은 손가락의 위치를 익히는 것에서 시작합니다. 처음에는 느리더라도 정확하게 치는 습관을 들이면, 시간이 지나면서 속도는 자연스럽게 빨라집니다.",
];

const EN_LONG_TEXTS: &[&str] = &[
    "Typing is a skill built one keystroke at a time. Keep your fingers on the home row, look at the screen instead of the keyboard, and let accuracy come first. Speed follows naturally once the motions become familiar.",
    "The library was quiet that afternoon. Sunlight fell across the long wooden tables, and the only sound was the soft turning of pages as readers lost themselves in stories from faraway places.",
];

/// Entries for a (type, language) pair. Keyboard drills reuse the word lists.
pub fn builtin(practice: PracticeType, language: Language) -> &'static [&'static str] {
    match (practice, language) {
        (PracticeType::Keyboard | PracticeType::Word, Language::Ko) => KO_WORDS,
        (PracticeType::Keyboard | PracticeType::Word, Language::En) => EN_WORDS,
        (PracticeType::Sentence, Language::Ko) => KO_SENTENCES,
        (PracticeType::Sentence, Language::En) => EN_SENTENCES,
        (PracticeType::LongText, Language::Ko) => KO_LONG_TEXTS,
        (PracticeType::LongText, Language::En) => EN_LONG_TEXTS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_pair_has_entries() {
        for practice in [
            PracticeType::Keyboard,
            PracticeType::Word,
            PracticeType::Sentence,
            PracticeType::LongText,
        ] {
            for language in [Language::Ko, Language::En] {
                let entries = builtin(practice, language);
                assert!(!entries.is_empty(), "{practice}/{language}");
                assert!(entries.iter().all(|e| !e.is_empty()));
            }
        }
    }
}
