//! Hangul syllable decomposition
//!
//! A precomposed syllable is encoded as
//! `0xAC00 + ((leading * 21) + vowel) * 28 + trailing`,
//! so decoding is pure arithmetic over that offset.

use thiserror::Error;

/// First precomposed Hangul syllable (가)
pub const SYLLABLE_BASE: u32 = 0xAC00;
/// Last precomposed Hangul syllable (힣)
pub const SYLLABLE_LAST: u32 = 0xD7A3;

pub const LEADING_COUNT: u32 = 19;
pub const VOWEL_COUNT: u32 = 21;
/// Includes index 0, the "no trailing consonant" slot
pub const TRAILING_COUNT: u32 = 28;

const LEADING: [char; LEADING_COUNT as usize] = [
    'ㄱ', 'ㄲ', 'ㄴ', 'ㄷ', 'ㄸ', 'ㄹ', 'ㅁ', 'ㅂ', 'ㅃ', 'ㅅ', 'ㅆ', 'ㅇ', 'ㅈ', 'ㅉ', 'ㅊ', 'ㅋ',
    'ㅌ', 'ㅍ', 'ㅎ',
];

const VOWELS: [char; VOWEL_COUNT as usize] = [
    'ㅏ', 'ㅐ', 'ㅑ', 'ㅒ', 'ㅓ', 'ㅔ', 'ㅕ', 'ㅖ', 'ㅗ', 'ㅘ', 'ㅙ', 'ㅚ', 'ㅛ', 'ㅜ', 'ㅝ', 'ㅞ',
    'ㅟ', 'ㅠ', 'ㅡ', 'ㅢ', 'ㅣ',
];

const TRAILING: [Option<char>; TRAILING_COUNT as usize] = [
    None,
    Some('ㄱ'),
    Some('ㄲ'),
    Some('ㄳ'),
    Some('ㄴ'),
    Some('ㄵ'),
    Some('ㄶ'),
    Some('ㄷ'),
    Some('ㄹ'),
    Some('ㄺ'),
    Some('ㄻ'),
    Some('ㄼ'),
    Some('ㄽ'),
    Some('ㄾ'),
    Some('ㄿ'),
    Some('ㅀ'),
    Some('ㅁ'),
    Some('ㅂ'),
    Some('ㅄ'),
    Some('ㅅ'),
    Some('ㅆ'),
    Some('ㅇ'),
    Some('ㅈ'),
    Some('ㅊ'),
    Some('ㅋ'),
    Some('ㅌ'),
    Some('ㅍ'),
    Some('ㅎ'),
];

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HangulError {
    /// Character is not a precomposed Hangul syllable
    #[error("not a Hangul syllable: {0:?}")]
    NotSyllable(char),

    /// Jamo index outside its table
    #[error("jamo index out of range: leading={leading}, vowel={vowel}, trailing={trailing}")]
    IndexOutOfRange {
        leading: u32,
        vowel: u32,
        trailing: u32,
    },
}

/// The three jamo slots of a syllable block
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct JamoTriple {
    pub leading: char,
    pub vowel: char,
    /// `None` when the block has no final consonant
    pub trailing: Option<char>,
    leading_index: u32,
    vowel_index: u32,
    trailing_index: u32,
}

#[allow(dead_code)]
impl JamoTriple {
    pub fn leading_index(&self) -> u32 {
        self.leading_index
    }

    pub fn vowel_index(&self) -> u32 {
        self.vowel_index
    }

    pub fn trailing_index(&self) -> u32 {
        self.trailing_index
    }

    /// Re-encode into the scalar value it was decoded from
    pub fn scalar_value(&self) -> u32 {
        SYLLABLE_BASE
            + (self.leading_index * VOWEL_COUNT + self.vowel_index) * TRAILING_COUNT
            + self.trailing_index
    }
}

/// True iff `c` lies in U+AC00..=U+D7A3
pub fn is_hangul_syllable(c: char) -> bool {
    (SYLLABLE_BASE..=SYLLABLE_LAST).contains(&(c as u32))
}

/// Split a precomposed syllable into leading consonant, vowel and trailing consonant.
pub fn decompose(syllable: char) -> Result<JamoTriple, HangulError> {
    if !is_hangul_syllable(syllable) {
        return Err(HangulError::NotSyllable(syllable));
    }

    let code = syllable as u32 - SYLLABLE_BASE;
    let trailing_index = code % TRAILING_COUNT;
    let vowel_index = ((code - trailing_index) / TRAILING_COUNT) % VOWEL_COUNT;
    let leading_index = ((code - trailing_index) / TRAILING_COUNT - vowel_index) / VOWEL_COUNT;

    Ok(JamoTriple {
        leading: LEADING[leading_index as usize],
        vowel: VOWELS[vowel_index as usize],
        trailing: TRAILING[trailing_index as usize],
        leading_index,
        vowel_index,
        trailing_index,
    })
}

/// Build a syllable from table indices. Inverse of [`decompose`].
#[allow(dead_code)]
pub fn compose(leading: u32, vowel: u32, trailing: u32) -> Result<char, HangulError> {
    if leading >= LEADING_COUNT || vowel >= VOWEL_COUNT || trailing >= TRAILING_COUNT {
        return Err(HangulError::IndexOutOfRange {
            leading,
            vowel,
            trailing,
        });
    }

    let code = SYLLABLE_BASE + (leading * VOWEL_COUNT + vowel) * TRAILING_COUNT + trailing;
    char::from_u32(code).ok_or(HangulError::IndexOutOfRange {
        leading,
        vowel,
        trailing,
    })
}
