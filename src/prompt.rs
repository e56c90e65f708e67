use crate::form::FormState;

/// Composes the generation prompt from the current form state. Pure: equal
/// form states always produce byte-identical strings, so the preview shown
/// to the user and the snapshot sent at submit time cannot diverge.
///
/// Six lines, one requirement per line.
pub fn compose(form: &FormState) -> String {
    let age = if form.age.is_empty() {
        "unknown"
    } else {
        form.age.as_str()
    };
    let name = if form.child_name.is_empty() {
        "a curious child"
    } else {
        form.child_name.as_str()
    };
    let moral = if form.moral.is_empty() {
        "kindness matters"
    } else {
        form.moral.as_str()
    };

    let themes = form
        .themes
        .iter()
        .map(String::as_str)
        .chain(std::iter::once(form.custom_theme.as_str()))
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(", ");
    let themes = if themes.is_empty() {
        "imagination".to_string()
    } else {
        themes
    };

    [
        format!(
            "Create a {} {} children's story in {}.",
            form.length, form.tone, form.language
        ),
        format!(
            "Audience age: {}; reading level: {}.",
            age, form.reading_level
        ),
        format!("Main character: {}.", name),
        format!("Themes: {}.", themes),
        format!("Include a gentle moral: {}.", moral),
        "Use clear sentences, vivid imagery, and culturally respectful names.".to_string(),
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::{Language, StoryLength, TextField, Tone};

    #[test]
    fn test_compose_is_deterministic() {
        let mut a = FormState::default();
        a.update_field(TextField::ChildName, "Ayan".to_string());
        a.toggle_theme("Space");
        let b = a.clone();
        assert_eq!(compose(&a), compose(&b));
    }

    #[test]
    fn test_compose_empty_form_uses_fallbacks() {
        let lines: Vec<String> = compose(&FormState::default())
            .lines()
            .map(str::to_string)
            .collect();
        assert_eq!(lines.len(), 6);
        assert_eq!(
            lines[0],
            "Create a short whimsical children's story in English."
        );
        assert_eq!(lines[1], "Audience age: unknown; reading level: simple.");
        assert_eq!(lines[2], "Main character: a curious child.");
        assert_eq!(lines[3], "Themes: imagination.");
        assert_eq!(lines[4], "Include a gentle moral: kindness matters.");
        assert_eq!(
            lines[5],
            "Use clear sentences, vivid imagery, and culturally respectful names."
        );
    }

    #[test]
    fn test_compose_interpolates_enum_tags() {
        let form = FormState {
            tone: Tone::Adventurous,
            length: StoryLength::Long,
            language: Language::Somali,
            ..FormState::default()
        };
        let prompt = compose(&form);
        assert!(prompt.starts_with("Create a long adventurous children's story in Somali."));
    }

    #[test]
    fn test_themes_line_keeps_selection_order_and_appends_custom() {
        let mut form = FormState::default();
        form.toggle_theme("Space");
        form.toggle_theme("Animals");
        form.update_field(TextField::CustomTheme, "Robots".to_string());

        let prompt = compose(&form);
        assert!(prompt.contains("Themes: Space, Animals, Robots."));
    }

    #[test]
    fn test_custom_theme_alone() {
        let mut form = FormState::default();
        form.update_field(TextField::CustomTheme, "Somali folklore".to_string());
        assert!(compose(&form).contains("Themes: Somali folklore."));
    }

    #[test]
    fn test_filled_fields_replace_fallbacks() {
        let mut form = FormState::default();
        form.update_field(TextField::ChildName, "Ahmed".to_string());
        form.update_field(TextField::Age, "7".to_string());
        form.update_field(TextField::Moral, "sharing".to_string());

        let prompt = compose(&form);
        assert!(prompt.contains("Audience age: 7; reading level: simple."));
        assert!(prompt.contains("Main character: Ahmed."));
        assert!(prompt.contains("Include a gentle moral: sharing."));
        assert!(!prompt.contains("unknown"));
        assert!(!prompt.contains("a curious child"));
    }
}
