use crate::rouge::porter;

/// Tokens shorter than this are left unstemmed.
const MIN_STEM_LEN: usize = 4;

/// Lowercases, splits on anything outside `[a-z0-9]`, then stems tokens of
/// four or more characters.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    lowered
        .split(|c: char| !(c.is_ascii_lowercase() || c.is_ascii_digit()))
        .filter(|t| !t.is_empty())
        .map(|t| {
            if t.len() >= MIN_STEM_LEN {
                porter::stem(t)
            } else {
                t.to_string()
            }
        })
        .filter(|t| !t.is_empty())
        .collect()
}

#[cfg(test)]
#[path = "../../tests/src_inline/rouge/tokenize.rs"]
mod tests;
