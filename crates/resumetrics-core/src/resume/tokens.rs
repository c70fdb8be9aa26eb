//! Tokenisation and sentence segmentation for resume text.

use super::rules::patterns::TOKEN;

/// Split text into word tokens, in order of appearance.
pub fn tokenize(text: &str) -> Vec<&str> {
    TOKEN.find_iter(text).map(|m| m.as_str()).collect()
}

/// Split text into sentences.
///
/// A sentence ends after `.`, `!` or `?` when followed by whitespace or the
/// end of the text, and at every line break. Terminators stay with their
/// sentence; surrounding whitespace is trimmed and empty pieces dropped.
pub fn sentences(text: &str) -> Vec<&str> {
    let mut result = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        let boundary = match c {
            '\n' | '\r' => Some((i, i + c.len_utf8())),
            '.' | '!' | '?' => match chars.peek() {
                None => Some((i + c.len_utf8(), i + c.len_utf8())),
                Some((_, next)) if next.is_whitespace() => {
                    Some((i + c.len_utf8(), i + c.len_utf8()))
                }
                Some(_) => None,
            },
            _ => None,
        };

        if let Some((end, next_start)) = boundary {
            push_trimmed(&mut result, &text[start..end]);
            start = next_start;
        }
    }

    push_trimmed(&mut result, &text[start..]);
    result
}

fn push_trimmed<'a>(out: &mut Vec<&'a str>, piece: &'a str) {
    let piece = piece.trim();
    if !piece.is_empty() {
        out.push(piece);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_tokenize_strips_punctuation() {
        assert_eq!(
            tokenize("I know Python, SQL and AWS."),
            vec!["I", "know", "Python", "SQL", "and", "AWS"]
        );
    }

    #[test]
    fn test_tokenize_keeps_plus_and_hash() {
        assert_eq!(tokenize("C++ / C# (git)"), vec!["C++", "C#", "git"]);
    }

    #[test]
    fn test_sentences_split_on_terminators() {
        assert_eq!(
            sentences("First one. Second one! Third? Last"),
            vec!["First one.", "Second one!", "Third?", "Last"]
        );
    }

    #[test]
    fn test_sentences_split_on_newlines() {
        assert_eq!(
            sentences("Jane Doe\n\nStanford University\r\nPython"),
            vec!["Jane Doe", "Stanford University", "Python"]
        );
    }

    #[test]
    fn test_inner_dots_do_not_split() {
        assert_eq!(
            sentences("Uses Node.js daily. Version 3.11 too."),
            vec!["Uses Node.js daily.", "Version 3.11 too."]
        );
    }

    #[test]
    fn test_empty_text() {
        assert!(sentences("   \n ").is_empty());
        assert!(tokenize("").is_empty());
    }
}
