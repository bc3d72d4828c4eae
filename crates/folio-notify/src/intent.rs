use regex::Regex;
use once_cell::sync::Lazy;

static LEAD_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)connect|hire|work together|freelance|availability|call|phone|whatsapp|email")
        .expect("valid lead pattern")
});

/// True when `text` reads like someone wanting to get in touch or hire.
/// Matches anywhere in the raw message, ignoring case.
pub fn is_lead_intent(text: &str) -> bool {
    LEAD_RE.is_match(text)
}

/// The notification sent for a message that [`is_lead_intent`] accepted.
pub fn lead_message(text: &str) -> String {
    format!("Lead intent from site: \"{text}\"")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contact_and_hiring_phrases_are_leads() {
        assert!(is_lead_intent("Can we connect for a project?"));
        assert!(is_lead_intent("Are you available to HIRE?"));
        assert!(is_lead_intent("We'd love to work together"));
        assert!(is_lead_intent("What's your availability next month"));
        assert!(is_lead_intent("send me your WhatsApp"));
    }

    #[test]
    fn ordinary_questions_are_not() {
        assert!(!is_lead_intent("I like your graphics"));
        assert!(!is_lead_intent("Tell me about the motion study"));
        assert!(!is_lead_intent(""));
    }

    #[test]
    fn lead_message_quotes_the_original_text() {
        assert_eq!(lead_message("hire me"), "Lead intent from site: \"hire me\"");
    }
}
