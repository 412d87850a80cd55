use serde::{Deserialize, Serialize};

/// Free text field for an operator the directory does not list yet.
///
/// Suggestions are acknowledged and logged, nothing is stored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SuggestionForm {
    #[serde(default, alias = "suggestion")]
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Acknowledgement {
    pub title: String,
    pub description: String,
}

impl SuggestionForm {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Blank text is ignored and the field is left as it is. Otherwise the
    /// field is cleared and an acknowledgement is returned.
    pub fn submit(&mut self) -> Option<Acknowledgement> {
        if self.text.trim().is_empty() {
            return None;
        }

        let text = std::mem::take(&mut self.text);
        tracing::info!(suggestion = %text, "new operator suggestion");

        Some(Acknowledgement {
            title: "Suggestion Received!".to_string(),
            description: format!("Thank you for suggesting \"{text}\". We'll review it shortly."),
        })
    }
}

#[test]
fn test_submit_acknowledges_and_clears() {
    let mut form = SuggestionForm::new("Jet It");
    let ack = form.submit().unwrap();

    assert_eq!(ack.title, "Suggestion Received!");
    assert_eq!(
        ack.description,
        "Thank you for suggesting \"Jet It\". We'll review it shortly."
    );
    assert!(form.text.is_empty());
    assert!(form.submit().is_none());
}

#[test]
fn test_submit_ignores_blank_text() {
    let mut form = SuggestionForm::new("   \t");
    assert!(form.submit().is_none());
    assert_eq!(form.text, "   \t");

    let mut form = SuggestionForm::default();
    assert!(form.submit().is_none());
    assert!(form.text.is_empty());
}

#[test]
fn test_form_field_alias() {
    let form: SuggestionForm = serde_json::from_str(r#"{"suggestion": "Aero"}"#).unwrap();
    assert_eq!(form.text, "Aero");

    let form: SuggestionForm = serde_json::from_str("{}").unwrap();
    assert!(form.text.is_empty());
}
