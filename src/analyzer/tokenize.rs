/// Minimum length of a token kept by the tokenizer.
/// Shorter alphabetic runs ("of", "mg", single letters from unit strings)
/// carry no trend signal.
pub const MIN_TOKEN_LEN: usize = 3;

/// Lazy token stream over a text.
///
/// A token is a maximal run of ASCII alphabetic characters, lowercased.
/// Everything else (digits, punctuation, whitespace, underscores, non-ASCII
/// bytes) separates tokens and is discarded. Runs shorter than
/// [`MIN_TOKEN_LEN`] are skipped, so "GLP-1 agonist" yields only "agonist".
///
/// # Examples
/// ```
/// use trend_analyzer::analyzer::tokenize::tokens;
///
/// let toks: Vec<String> = tokens("GLP-1 agonist reduces risk").collect();
/// assert_eq!(toks, ["agonist", "reduces", "risk"]);
/// ```
pub struct Tokens<'a> {
    bytes: &'a [u8],
    pos: usize,
}

/// Tokenize a text.
///
/// # Arguments
/// * `text` - input text, any content, possibly empty
///
/// # Returns
/// * `Tokens` - iterator over lowercase alphabetic tokens, length >= 3
pub fn tokens(text: &str) -> Tokens<'_> {
    Tokens {
        bytes: text.as_bytes(),
        pos: 0,
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let n = self.bytes.len();
        loop {
            // skip separators
            while self.pos < n && !self.bytes[self.pos].is_ascii_alphabetic() {
                self.pos += 1;
            }
            if self.pos >= n {
                return None;
            }
            let start = self.pos;
            while self.pos < n && self.bytes[self.pos].is_ascii_alphabetic() {
                self.pos += 1;
            }
            let run = &self.bytes[start..self.pos];
            if run.len() >= MIN_TOKEN_LEN {
                // run is pure ASCII, slicing at these byte offsets is safe
                let mut token = String::with_capacity(run.len());
                for &b in run {
                    token.push(b.to_ascii_lowercase() as char);
                }
                return Some(token);
            }
            // run too short, keep scanning
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(text: &str) -> Vec<String> {
        tokens(text).collect()
    }

    #[test]
    fn splits_on_non_alphabetic() {
        assert_eq!(
            collect("cardio-vascular risk, 2024!"),
            ["cardio", "vascular", "risk"]
        );
    }

    #[test]
    fn lowercases_everything() {
        assert_eq!(collect("GLP Agonist TRIAL"), ["glp", "agonist", "trial"]);
    }

    #[test]
    fn drops_short_runs() {
        // "GLP-1": the digit splits the run, "glp" survives (len 3), "1" is a separator
        assert_eq!(collect("GLP-1 agonist"), ["glp", "agonist"]);
        assert_eq!(collect("a an of to mg"), Vec::<String>::new());
    }

    #[test]
    fn empty_and_separator_only_inputs() {
        assert_eq!(collect(""), Vec::<String>::new());
        assert_eq!(collect("  \t\n 123 _-_ !!"), Vec::<String>::new());
    }

    #[test]
    fn underscores_are_separators() {
        assert_eq!(collect("beta_blocker"), ["beta", "blocker"]);
    }

    #[test]
    fn non_ascii_acts_as_separator() {
        // accented chars are outside the ASCII token alphabet
        assert_eq!(collect("café clinical"), ["caf", "clinical"]);
        // "naïve" splits into "na" / "ve", both too short
        assert_eq!(collect("naïve"), Vec::<String>::new());
    }

    #[test]
    fn every_token_is_lowercase_alphabetic_and_long_enough() {
        let text = "Sample-Text with MIXED case, 42 numbers & sym_bols; αβγ too";
        for tok in tokens(text) {
            assert!(tok.len() >= MIN_TOKEN_LEN);
            assert!(tok.bytes().all(|b| b.is_ascii_lowercase()));
        }
    }
}
