use regex::Regex;
use once_cell::sync::Lazy;

static CONTACT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new("email|contact|reach|connect").expect("valid contact pattern"));
static RESUME_RE: Lazy<Regex> = Lazy::new(|| Regex::new("resume|cv").expect("valid resume pattern"));
static ROLE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new("role|what do you do|experience|years").expect("valid role pattern"));

/// Canned answers that take precedence over corpus search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    Contact,
    Resume,
    Role,
}

impl Rule {
    /// Evaluation order; the first rule that matches wins.
    pub const PRIORITY: [Rule; 3] = [Rule::Contact, Rule::Resume, Rule::Role];

    /// Patterns are plain substrings, so `lowered` must already be lowercase.
    pub fn matches(self, lowered: &str) -> bool {
        let re = match self {
            Rule::Contact => &CONTACT_RE,
            Rule::Resume => &RESUME_RE,
            Rule::Role => &ROLE_RE,
        };
        re.is_match(lowered)
    }

    pub fn first_match(lowered: &str) -> Option<Rule> {
        Self::PRIORITY.into_iter().find(|rule| rule.matches(lowered))
    }
}
