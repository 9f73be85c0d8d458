use regex::Regex;
use thiserror::Error;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum RuleError {
    #[error("acceptance rule needs at least one marker")]
    EmptyRule,

    #[error("marker {index} is blank")]
    BlankMarker { index: usize },

    #[error(transparent)]
    Compile(#[from] regex::Error),
}

//
// ─── ACCEPT RULE ───────────────────────────────────────────────────────────────
//

/// Free-text acceptance rule: an ordered list of expected markers.
///
/// A candidate text is accepted when every marker appears in it, in order.
/// Whitespace inside a marker matches any whitespace run, and arbitrary text
/// may sit between consecutive markers. Marker content is treated as literal
/// text, never as a pattern.
#[derive(Debug, Clone)]
pub struct AcceptRule {
    markers: Vec<String>,
    pattern: Regex,
}

impl AcceptRule {
    /// Compiles an acceptance rule from ordered markers.
    ///
    /// # Errors
    ///
    /// Returns `RuleError::EmptyRule` when no markers are given and
    /// `RuleError::BlankMarker` when a marker is empty or whitespace-only.
    pub fn new<I, S>(markers: I) -> Result<Self, RuleError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let markers: Vec<String> = markers.into_iter().map(Into::into).collect();
        if markers.is_empty() {
            return Err(RuleError::EmptyRule);
        }
        for (index, marker) in markers.iter().enumerate() {
            if marker.trim().is_empty() {
                return Err(RuleError::BlankMarker { index });
            }
        }

        let pattern = compile(&markers)?;
        Ok(Self { markers, pattern })
    }

    /// The ordered markers this rule was built from.
    #[must_use]
    pub fn markers(&self) -> &[String] {
        &self.markers
    }

    /// Returns true when the candidate text contains every marker in order.
    #[must_use]
    pub fn matches(&self, candidate: &str) -> bool {
        self.pattern.is_match(candidate)
    }
}

// Two rules are the same rule when their markers agree; the compiled regex is
// derived state.
impl PartialEq for AcceptRule {
    fn eq(&self, other: &Self) -> bool {
        self.markers == other.markers
    }
}

impl Eq for AcceptRule {}

fn compile(markers: &[String]) -> Result<Regex, RuleError> {
    let parts: Vec<String> = markers
        .iter()
        .map(|marker| {
            marker
                .split_whitespace()
                .map(|word| regex::escape(word))
                .collect::<Vec<_>>()
                .join(r"\s+")
        })
        .collect();
    let pattern = format!("(?s){}", parts.join(".*?"));
    Ok(Regex::new(&pattern)?)
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_marker_matches_anywhere() {
        let rule = AcceptRule::new(["Hello Java World!"]).unwrap();
        assert!(rule.matches("System.out.println(\"Hello Java World!\");"));
        assert!(!rule.matches("System.out.println(\"Hello World!\");"));
    }

    #[test]
    fn marker_whitespace_is_flexible() {
        let rule = AcceptRule::new(["Car brand: JavaCar"]).unwrap();
        assert!(rule.matches("print(\"Car   brand:\tJavaCar\")"));
        assert!(!rule.matches("Car brand JavaCar"));
    }

    #[test]
    fn markers_must_appear_in_order() {
        let rule = AcceptRule::new(["10", "20", "30"]).unwrap();
        assert!(rule.matches("10\n20\n30"));
        assert!(rule.matches("x = 10; y = 20; z = 30;"));
        assert!(!rule.matches("30\n20\n10"));
    }

    #[test]
    fn gap_between_markers_spans_lines() {
        let rule = AcceptRule::new(["16", "JAVA PROGRAMMING"]).unwrap();
        assert!(rule.matches("16\nJAVA PROGRAMMING"));
        assert!(rule.matches("length is 16, upper is JAVA PROGRAMMING"));
    }

    #[test]
    fn marker_content_is_literal() {
        let rule = AcceptRule::new(["numbers[0]", "a.b (c)"]).unwrap();
        assert!(rule.matches("numbers[0] then a.b (c)"));
        assert!(!rule.matches("numbersX0] then aXb (c)"));
    }

    #[test]
    fn empty_rule_is_rejected() {
        let err = AcceptRule::new(Vec::<String>::new()).unwrap_err();
        assert!(matches!(err, RuleError::EmptyRule));
    }

    #[test]
    fn blank_marker_is_rejected() {
        let err = AcceptRule::new(["42", "   "]).unwrap_err();
        assert!(matches!(err, RuleError::BlankMarker { index: 1 }));
    }

    #[test]
    fn equality_ignores_compiled_pattern() {
        let a = AcceptRule::new(["1", "2"]).unwrap();
        let b = AcceptRule::new(["1", "2"]).unwrap();
        let c = AcceptRule::new(["2", "1"]).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn markers_accessor_preserves_order() {
        let rule = AcceptRule::new(["first", "second"]).unwrap();
        assert_eq!(rule.markers(), ["first", "second"]);
    }
}
