//! Add-email form model.

use inboxlens_core::{StagedEmail, ValidationError, manual_email};

/// State of the manual entry and import form.
#[derive(Debug, Clone, Default)]
pub struct AddEmailState {
    pub sender: String,
    pub subject: String,
    pub body: String,
    /// Path of a JSON file to import.
    pub import_path: String,
    /// Validation or import error to show under the form.
    pub error: Option<String>,
    /// Whether the import file is being read.
    pub is_importing: bool,
}

impl AddEmailState {
    /// Validates the typed fields into a staged email.
    ///
    /// On failure the error is kept for display and the fields stay as typed.
    pub fn take_email(&mut self) -> Result<StagedEmail, ValidationError> {
        match manual_email(&self.sender, &self.subject, &self.body) {
            Ok(email) => {
                self.sender.clear();
                self.subject.clear();
                self.body.clear();
                self.error = None;
                Ok(email)
            }
            Err(err) => {
                self.error = Some(err.message().to_string());
                Err(err)
            }
        }
    }

    /// Trimmed import path, if one was typed.
    pub fn import_path(&self) -> Option<&str> {
        let path = self.import_path.trim();
        (!path.is_empty()).then_some(path)
    }

    /// Clears everything.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_email_clears_fields() {
        let mut form = AddEmailState {
            sender: "a@x.com".into(),
            subject: "Hi".into(),
            import_path: "emails.json".into(),
            ..AddEmailState::default()
        };
        let email = form.take_email().unwrap();
        assert_eq!(email.sender, "a@x.com");
        assert!(form.sender.is_empty() && form.subject.is_empty());
        assert_eq!(form.import_path, "emails.json");
        assert!(form.error.is_none());
    }

    #[test]
    fn test_take_email_keeps_input_on_error() {
        let mut form = AddEmailState {
            subject: "Hi".into(),
            ..AddEmailState::default()
        };
        assert_eq!(form.take_email(), Err(ValidationError::EmptySender));
        assert_eq!(form.subject, "Hi");
        assert_eq!(form.error.as_deref(), Some("Sender is required"));
    }

    #[test]
    fn test_import_path_is_trimmed() {
        let mut form = AddEmailState::default();
        assert_eq!(form.import_path(), None);
        form.import_path = "  /tmp/inbox.json ".into();
        assert_eq!(form.import_path(), Some("/tmp/inbox.json"));
    }
}
