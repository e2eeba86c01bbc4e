//! Editable search form with two text fields and a focus marker.

use crate::github::models::SearchCriteria;

/// Field of the search form that receives keystrokes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormField {
    /// Organisation (owner) input.
    #[default]
    Organization,
    /// Repository name input.
    Repository,
}

impl FormField {
    /// Returns the field after this one, wrapping around.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Organization => Self::Repository,
            Self::Repository => Self::Organization,
        }
    }

    /// Returns the field before this one, wrapping around.
    ///
    /// With two fields this is the same as [`Self::next`].
    #[must_use]
    pub const fn previous(self) -> Self {
        self.next()
    }

    /// Returns the label shown next to the input.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Organization => "Organization",
            Self::Repository => "Repository",
        }
    }
}

/// Search form values and focus.
///
/// Values are accepted as typed; no validation happens before submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchForm {
    criteria: SearchCriteria,
    focus: FormField,
}

impl SearchForm {
    /// Creates a form pre-filled with `criteria`, focusing the organisation.
    #[must_use]
    pub fn new(criteria: SearchCriteria) -> Self {
        Self {
            criteria,
            focus: FormField::default(),
        }
    }

    /// Returns the current criteria.
    #[must_use]
    pub const fn criteria(&self) -> &SearchCriteria {
        &self.criteria
    }

    /// Returns the focused field.
    #[must_use]
    pub const fn focus(&self) -> FormField {
        self.focus
    }

    /// Returns the current value of `field`.
    #[must_use]
    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Organization => &self.criteria.organization_name,
            FormField::Repository => &self.criteria.repository_name,
        }
    }

    /// Replaces the organisation name.
    pub fn set_organization_name(&mut self, value: impl Into<String>) {
        self.criteria.organization_name = value.into();
    }

    /// Replaces the repository name.
    pub fn set_repository_name(&mut self, value: impl Into<String>) {
        self.criteria.repository_name = value.into();
    }

    /// Moves focus to the next field.
    pub const fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    /// Moves focus to the previous field.
    pub const fn focus_previous(&mut self) {
        self.focus = self.focus.previous();
    }
}
