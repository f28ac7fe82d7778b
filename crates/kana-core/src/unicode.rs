//! Character-level Unicode classification for Japanese name input.

/// Hiragana letters U+3041..U+3096 — exactly the range that has a katakana
/// counterpart at +0x60. Deliberately narrower than the full block: the
/// combining marks U+3099..U+309F must not be shifted.
pub fn is_hiragana_letter(c: char) -> bool {
    ('\u{3041}'..='\u{3096}').contains(&c)
}

/// Katakana letters U+30A1..U+30F6, the image of [`is_hiragana_letter`]
/// under the +0x60 shift.
pub fn is_katakana_letter(c: char) -> bool {
    ('\u{30A1}'..='\u{30F6}').contains(&c)
}

/// CJK ideographs: the unified block, extension A, and extension B
/// (rare but legal in personal names, e.g. 𠮷).
pub fn is_kanji(c: char) -> bool {
    ('\u{4E00}'..='\u{9FFF}').contains(&c)
        || ('\u{3400}'..='\u{4DBF}').contains(&c)
        || ('\u{20000}'..='\u{2A6DF}').contains(&c)
}

pub fn contains_kanji(s: &str) -> bool {
    s.chars().any(is_kanji)
}

/// Characters the deterministic mapping can fully account for: kana letters
/// plus the marks shared by both scripts (prolonged sound mark ー, middle
/// dot ・, iteration marks). A string passing this check has a complete
/// character-level reading.
pub fn is_syllabary(c: char) -> bool {
    is_hiragana_letter(c)
        || is_katakana_letter(c)
        || matches!(c, 'ー' | '・' | 'ゝ' | 'ゞ' | 'ヽ' | 'ヾ')
}

/// True for non-empty strings made only of syllabary characters.
/// This is the "convertible" test for committed composition text.
pub fn is_syllabary_text(s: &str) -> bool {
    !s.is_empty() && s.chars().all(is_syllabary)
}

/// Shift hiragana letters to katakana; everything else passes through.
/// Total and idempotent on katakana (shifting katakana again is out of
/// range, so a second application is a no-op).
pub fn hiragana_to_katakana(s: &str) -> String {
    s.chars()
        .map(|c| {
            if is_hiragana_letter(c) {
                char::from_u32(c as u32 + 0x60).unwrap_or(c)
            } else {
                c
            }
        })
        .collect()
}

/// Inverse shift: katakana letters to hiragana, everything else unchanged.
pub fn katakana_to_hiragana(s: &str) -> String {
    s.chars()
        .map(|c| {
            if is_katakana_letter(c) {
                char::from_u32(c as u32 - 0x60).unwrap_or(c)
            } else {
                c
            }
        })
        .collect()
}
