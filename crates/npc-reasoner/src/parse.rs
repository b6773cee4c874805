//! Tolerant parsing of reasoner responses.
//!
//! Reasoners wrap their structured payload in prose more often than not.
//! The parse locates the first `{` and the last `}` and decodes only that
//! span. Fields other than `action` become free-form parameters.

use serde_json::Value;

use crate::client::ActionProposal;
use crate::ReasonerError;

/// Extracts an [`ActionProposal`] from a free-text reasoner response.
pub fn parse_proposal(response: &str) -> Result<ActionProposal, ReasonerError> {
    let start = response.find('{').ok_or(ReasonerError::NoPayload)?;
    let end = response.rfind('}').ok_or(ReasonerError::NoPayload)?;
    if end < start {
        return Err(ReasonerError::NoPayload);
    }

    let payload: Value = serde_json::from_str(&response[start..=end])?;
    let Value::Object(mut fields) = payload else {
        return Err(ReasonerError::MissingAction);
    };

    let action = match fields.remove("action") {
        Some(Value::String(name)) if !name.is_empty() => name,
        _ => return Err(ReasonerError::MissingAction),
    };

    Ok(ActionProposal {
        action,
        parameters: fields,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_bare_json() {
        let proposal = parse_proposal(r#"{"action": "flee", "speed": "fast"}"#).unwrap();
        assert_eq!(proposal.action, "flee");
        assert_eq!(
            proposal.parameters.get("speed").and_then(|v| v.as_str()),
            Some("fast")
        );
    }

    #[test]
    fn parses_json_surrounded_by_prose() {
        let response = "Sure! Given the insult, the NPC should react angrily.\n\
            {\"action\": \"express_emotion\", \"emotion\": \"anger\", \"intensity\": 0.8}\n\
            Let me know if you want alternatives.";
        let proposal = parse_proposal(response).unwrap();
        assert_eq!(proposal.action, "express_emotion");
        assert_eq!(
            proposal
                .parameters
                .get("intensity")
                .and_then(|v| v.as_f64()),
            Some(0.8)
        );
    }

    #[test]
    fn nested_objects_survive_the_span_extraction() {
        let response = r#"{"action": "greet", "detail": {"formality": "warm"}} trailing"#;
        // rfind('}') lands on the outermost close brace
        let proposal = parse_proposal(response).unwrap();
        assert_eq!(proposal.action, "greet");
        assert!(proposal.parameters.get("detail").unwrap().is_object());
    }

    #[test]
    fn missing_payload_is_an_error() {
        assert!(matches!(
            parse_proposal("I would simply run away."),
            Err(ReasonerError::NoPayload)
        ));
    }

    #[test]
    fn malformed_payload_is_an_error() {
        assert!(matches!(
            parse_proposal(r#"{"action": flee}"#),
            Err(ReasonerError::MalformedPayload(_))
        ));
    }

    #[test]
    fn missing_action_field_is_an_error() {
        assert!(matches!(
            parse_proposal(r#"{"emotion": "anger"}"#),
            Err(ReasonerError::MissingAction)
        ));
        assert!(matches!(
            parse_proposal(r#"{"action": ""}"#),
            Err(ReasonerError::MissingAction)
        ));
    }
}
