//! Accent folding shared by anchors and collation.
//!
//! Canonical decomposition handles letters like `é` (`e` + combining acute).
//! Letters such as `ø`, `æ` and `ß` have no decomposition and are spelled
//! out explicitly so they fold to the ASCII letters they sort among.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Latin letters with no canonical decomposition, as lowercase ASCII.
fn spell_out(c: char) -> Option<&'static str> {
    let ascii = match c {
        'ø' | 'Ø' => "o",
        'æ' | 'Æ' => "ae",
        'œ' | 'Œ' => "oe",
        'ß' | 'ẞ' => "ss",
        'ł' | 'Ł' => "l",
        'đ' | 'Đ' | 'ð' | 'Ð' => "d",
        'ħ' | 'Ħ' => "h",
        'þ' | 'Þ' => "th",
        'ı' => "i",
        _ => return None,
    };
    Some(ascii)
}

/// Lowercase `name` with accents removed and special Latin letters spelled
/// out. Characters outside Latin pass through lowercased.
pub(crate) fn fold_name(name: &str) -> String {
    let mut folded = String::with_capacity(name.len());
    for c in name.nfd().filter(|c| !is_combining_mark(*c)) {
        match spell_out(c) {
            Some(ascii) => folded.push_str(ascii),
            None => folded.extend(c.to_lowercase()),
        }
    }
    folded
}
