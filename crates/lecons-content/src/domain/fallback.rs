//! The lesson served when the configured document cannot be used.

use serde_json::{Value, json};

/// Title of the fallback lesson.
pub const FALLBACK_TITLE: &str = "Révisions de Français - Unité 1";

/// Builds the fallback lesson document.
///
/// Key order is part of the response body, so the document is built in the
/// order it is served.
#[must_use]
pub fn fallback_document() -> Value {
    json!({
        "appTitle": FALLBACK_TITLE,
        "sections": [
            {
                "title": "Leçons Orales - Dialogues",
                "description": "Mini-dialogues pour pratiquer le récit d'événements.",
                "cards": [
                    {
                        "type": "dialogue",
                        "theme": "Exemple de dialogue",
                        "exchange": [
                            {"speaker": "A", "line": "Bonjour, comment allez-vous?"},
                            {"speaker": "B", "line": "Je vais très bien, merci!"}
                        ]
                    }
                ]
            },
            {
                "title": "Conjugaison & Temps",
                "description": "Règles de conjugaison française.",
                "cards": [
                    {
                        "type": "language_card",
                        "lesson": "Le Présent de l'Indicatif",
                        "rule": "On l'utilise pour une action maintenant.",
                        "examples": ["Je parle français."]
                    }
                ]
            }
        ]
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::lesson::{Card, Lesson};

    #[test]
    fn test_fallback_decodes_as_lesson() {
        // Act
        let lesson = Lesson::from_document(&fallback_document()).unwrap();

        // Assert
        assert_eq!(lesson.app_title, FALLBACK_TITLE);
        assert_eq!(lesson.sections.len(), 2);
        assert_eq!(lesson.sections[0].title, "Leçons Orales - Dialogues");
        assert!(matches!(lesson.sections[0].cards[0], Card::Dialogue { .. }));
        assert_eq!(lesson.sections[1].title, "Conjugaison & Temps");
        assert!(matches!(lesson.sections[1].cards[0], Card::LanguageCard { .. }));
    }

    #[test]
    fn test_fallback_preserves_key_order() {
        let serialized = serde_json::to_string(&fallback_document()).unwrap();

        assert!(serialized.starts_with(r#"{"appTitle":"Révisions de Français - Unité 1","sections":[{"title""#));
    }
}
