/// Case normalization applied to a merged text value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CaseTransform {
    /// Leave the text as the supplier sent it.
    #[default]
    Preserve,
    Lower,
    /// Upper-case the first letter of every word and lower-case the rest.
    /// Whitespace and hyphens start a word: `"beach VILLAS check-in"` →
    /// `"Beach Villas Check-In"`.
    Title,
}

impl CaseTransform {
    #[must_use]
    pub fn apply(self, s: &str) -> String {
        match self {
            CaseTransform::Preserve => s.to_string(),
            CaseTransform::Lower => s.to_lowercase(),
            CaseTransform::Title => title_case(s),
        }
    }
}

fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;
    for c in s.chars() {
        if c.is_whitespace() || c == '-' {
            out.push(c);
            at_word_start = true;
        } else if at_word_start {
            out.extend(c.to_uppercase());
            at_word_start = false;
        } else {
            out.extend(c.to_lowercase());
        }
    }
    out
}
