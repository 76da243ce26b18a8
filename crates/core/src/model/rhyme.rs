use crate::model::RhymeId;

/// A nursery rhyme as listed on the rhymes page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rhyme {
    pub id: RhymeId,
    pub title: String,
    pub description: String,
    pub duration_label: String,
    pub difficulty: String,
    pub text: String,
}

impl Rhyme {
    #[must_use]
    pub fn tokens(&self) -> Vec<RhymeToken> {
        tokenize(&self.text)
    }
}

/// One highlighted word of a rhyme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RhymeToken {
    pub text: String,
    /// The token is the last one on its line.
    pub line_end: bool,
}

/// Split text on whitespace runs, keeping punctuation attached to words and
/// marking the last word of every line.
#[must_use]
pub fn tokenize(text: &str) -> Vec<RhymeToken> {
    let mut tokens = Vec::new();
    for line in text.lines() {
        let mut words = line.split_whitespace().peekable();
        while let Some(word) = words.next() {
            tokens.push(RhymeToken {
                text: word.to_string(),
                line_end: words.peek().is_none(),
            });
        }
    }
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenize_marks_line_ends() {
        let tokens = tokenize("Row, row, row your boat,\nGently down the stream.");
        let words: Vec<_> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(
            words,
            ["Row,", "row,", "row", "your", "boat,", "Gently", "down", "the", "stream."]
        );
        assert!(tokens[4].line_end);
        assert!(!tokens[3].line_end);
        assert!(tokens[8].line_end);
    }

    #[test]
    fn tokenize_skips_blank_lines_and_padding() {
        let tokens = tokenize("  One   two \n\n three  ");
        assert_eq!(tokens.len(), 3);
        assert!(tokens[1].line_end);
        assert!(tokens[2].line_end);
    }
}
