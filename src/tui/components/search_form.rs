//! Search form component: two labelled inputs and the search button.

use unicode_width::UnicodeWidthStr;

use crate::tui::state::{FormField, SearchForm};

/// Marker placed in front of the focused input.
const FOCUS_MARKER: &str = ">";

/// Renders the search form.
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchFormComponent;

impl SearchFormComponent {
    /// Renders both inputs, marking the focused one with a cursor.
    #[must_use]
    pub fn view(form: &SearchForm) -> String {
        let label_width = [FormField::Organization, FormField::Repository]
            .iter()
            .map(|field| field.label().width())
            .max()
            .unwrap_or_default();

        let mut output = String::new();
        for field in [FormField::Organization, FormField::Repository] {
            output.push_str(&Self::render_input(form, field, label_width));
        }
        output.push_str("  [ Search ]\n");
        output
    }

    fn render_input(form: &SearchForm, field: FormField, label_width: usize) -> String {
        let focused = form.focus() == field;
        let marker = if focused { FOCUS_MARKER } else { " " };
        let cursor = if focused { "_" } else { "" };
        let label = field.label();
        let padding = " ".repeat(label_width.saturating_sub(label.width()));
        format!("{marker} {label}:{padding} {}{cursor}\n", form.value(field))
    }
}

#[cfg(test)]
mod tests {
    use super::SearchFormComponent;
    use crate::github::models::SearchCriteria;
    use crate::tui::state::SearchForm;

    #[test]
    fn renders_values_with_focus_marker() {
        let mut form = SearchForm::new(SearchCriteria::new("octocat", "Hello-World"));
        form.focus_next();

        let output = SearchFormComponent::view(&form);
        let lines: Vec<_> = output.lines().collect();

        assert_eq!(
            lines,
            vec![
                "  Organization: octocat",
                "> Repository:   Hello-World_",
                "  [ Search ]",
            ]
        );
    }

    #[test]
    fn empty_form_still_shows_both_inputs() {
        let output = SearchFormComponent::view(&SearchForm::default());

        assert!(output.contains("> Organization: _"));
        assert!(output.contains("  Repository:"));
    }
}
