use serde::{Deserialize, Serialize};

use crate::model::validation::{Field, ValidationErrors, ValidationRules};

/// Notice carried by the acknowledgment of a successful submission
pub const SUCCESS_NOTICE: &str = "Message sent successfully!";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Message {
    FieldChanged { field: Field, value: String },
    Submitted,
}

/// One-shot acknowledgment returned by a successful [`ContactForm::submit`].
///
/// The host decides how to surface it (status bar, toast, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ack {
    message: String,
}

impl Ack {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    name: String,
    email: String,
    message: String,
    rules: ValidationRules,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a form checked against a custom rule set
    pub fn with_rules(rules: ValidationRules) -> Self {
        Self {
            rules,
            ..Default::default()
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn rules(&self) -> &ValidationRules {
        &self.rules
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    /// Assign a field. Nothing is validated until [`ContactForm::submit`].
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Message => self.message = value,
        }
    }

    /// Validate and, on success, clear every field.
    ///
    /// On failure every field keeps its value.
    pub fn submit(&mut self) -> Result<Ack, ValidationErrors> {
        let form = &*self;
        form.rules.validate(|field| form.value(field))?;
        self.clear();
        Ok(Ack::new(SUCCESS_NOTICE))
    }

    fn clear(&mut self) {
        self.name.clear();
        self.email.clear();
        self.message.clear();
    }

    pub fn update(&mut self, message: Message) -> Result<Option<Ack>, ValidationErrors> {
        match message {
            Message::FieldChanged { field, value } => {
                self.set_field(field, value);
                Ok(None)
            }
            Message::Submitted => self.submit().map(Some),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::validation::Rule;

    fn filled(name: &str, email: &str, message: &str) -> ContactForm {
        let mut form = ContactForm::new();
        form.set_field(Field::Name, name);
        form.set_field(Field::Email, email);
        form.set_field(Field::Message, message);
        form
    }

    #[test]
    fn test_new_form_is_empty() {
        let form = ContactForm::new();
        assert_eq!(form.name(), "");
        assert_eq!(form.email(), "");
        assert_eq!(form.message(), "");
        assert_eq!(form.rules(), &ValidationRules::default());
    }

    #[test]
    fn test_set_field_does_not_validate() {
        let mut form = ContactForm::new();
        form.set_field(Field::Email, "definitely not an email");
        assert_eq!(form.email(), "definitely not an email");
    }

    #[test]
    fn test_submit_success_clears_fields() {
        let mut form = filled("Ada", "a@b.com", "hi");

        let ack = form.submit().expect("valid form should submit");

        assert_eq!(ack.message(), SUCCESS_NOTICE);
        assert_eq!(form.name(), "");
        assert_eq!(form.email(), "");
        assert_eq!(form.message(), "");
    }

    #[test]
    fn test_submit_without_name_succeeds() {
        let mut form = filled("", "a@b.com", "hi");
        assert!(form.submit().is_ok());
    }

    #[test]
    fn test_submit_failure_keeps_fields() {
        let mut form = filled("Ada", "", "");
        let before = form.clone();

        let errors = form.submit().expect_err("empty email and message");

        assert_eq!(errors.fields(), vec![Field::Email, Field::Message]);
        assert_eq!(form, before);
    }

    #[test]
    fn test_submit_malformed_email_keeps_fields() {
        let mut form = filled("Ada", "ada.example.com", "hello");
        let before = form.clone();

        let errors = form.submit().expect_err("malformed email");

        assert_eq!(errors.rule_for(Field::Email), Some(Rule::Email));
        assert_eq!(errors.rule_for(Field::Message), None);
        assert_eq!(form, before);
    }

    #[test]
    fn test_form_is_reusable_after_submit() {
        let mut form = filled("", "a@b.com", "first");
        form.submit().expect("first submit");

        form.set_field(Field::Email, "c@d.org");
        form.set_field(Field::Message, "second");
        assert!(form.submit().is_ok());
    }

    #[test]
    fn test_custom_rules() {
        let rules = ValidationRules::new().with(Field::Name, [Rule::Required]);
        let mut form = ContactForm::with_rules(rules);

        let errors = form.submit().expect_err("name is required here");
        assert_eq!(errors.fields(), vec![Field::Name]);
    }

    #[test]
    fn test_update_messages() {
        let mut form = ContactForm::new();

        let result = form.update(Message::FieldChanged {
            field: Field::Email,
            value: "a@b.com".to_string(),
        });
        assert_eq!(result, Ok(None));

        form.update(Message::FieldChanged {
            field: Field::Message,
            value: "hi".to_string(),
        })
        .expect("field edits never fail");

        let ack = form.update(Message::Submitted).expect("valid form");
        assert_eq!(ack, Some(Ack::new(SUCCESS_NOTICE)));
        assert_eq!(form.email(), "");
    }
}
