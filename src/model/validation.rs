use std::collections::BTreeMap;
use std::error::Error;
use std::fmt;

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use strum::Display;

/// Unquoted local-part atom
const LOCAL_ATOM: &str = r"[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+";
/// Domain label: alphanumeric at both ends, hyphens inside
const DOMAIN_LABEL: &str = r"[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?";

lazy_static! {
    /// Dot-atom local part and a dotted hostname, so `user@localhost` passes
    /// but empty labels and stray dots on either side of `@` do not.
    static ref EMAIL_PATTERN: Regex = Regex::new(&format!(
        r"^{LOCAL_ATOM}(?:\.{LOCAL_ATOM})*@{DOMAIN_LABEL}(?:\.{DOMAIN_LABEL})*$"
    ))
    .expect("email pattern should compile");
}

/// Contact form fields
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize, Display,
)]
#[strum(serialize_all = "snake_case")]
pub enum Field {
    #[default]
    Name,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Message];

    /// Label shown next to the input
    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Name (optional)",
            Field::Email => "Email (required)",
            Field::Message => "Message (required)",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Field::Name => Field::Email,
            Field::Email => Field::Message,
            Field::Message => Field::Name,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            Field::Name => Field::Message,
            Field::Email => Field::Name,
            Field::Message => Field::Email,
        }
    }
}

/// Validation rules that can be attached to a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[strum(serialize_all = "snake_case")]
pub enum Rule {
    Required,
    Email,
}

impl Rule {
    /// Returns true if `value` satisfies the rule
    pub fn check(self, value: &str) -> bool {
        match self {
            Rule::Required => !value.trim().is_empty(),
            Rule::Email => EMAIL_PATTERN.is_match(value),
        }
    }
}

/// A single rule violation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    pub field: Field,
    pub rule: Rule,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.rule)
    }
}

impl Error for ValidationError {}

/// Every violation found by one validation pass, in field order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(Vec<ValidationError>);

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        self.0.iter()
    }

    /// The rule that failed for `field`, if any
    pub fn rule_for(&self, field: Field) -> Option<Rule> {
        self.0
            .iter()
            .find(|error| error.field == field)
            .map(|error| error.rule)
    }

    pub fn fields(&self) -> Vec<Field> {
        self.0.iter().map(|error| error.field).collect()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .0
            .iter()
            .map(ValidationError::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "{joined}")
    }
}

impl Error for ValidationErrors {}

/// Rule set expressed as data: field -> rules checked in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationRules(BTreeMap<Field, Vec<Rule>>);

impl ValidationRules {
    /// An empty rule set that accepts everything
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    pub fn with(mut self, field: Field, rules: impl IntoIterator<Item = Rule>) -> Self {
        self.0.entry(field).or_default().extend(rules);
        self
    }

    pub fn rules_for(&self, field: Field) -> &[Rule] {
        self.0.get(&field).map(Vec::as_slice).unwrap_or_default()
    }

    /// Runs every field's rules against the value returned by `value_of`.
    ///
    /// Only the first failing rule of each field is reported.
    pub fn validate<'a, F>(&self, value_of: F) -> Result<(), ValidationErrors>
    where
        F: Fn(Field) -> &'a str,
    {
        let errors: Vec<ValidationError> = self
            .0
            .iter()
            .filter_map(|(field, rules)| {
                let value = value_of(*field);
                rules
                    .iter()
                    .find(|rule| !rule.check(value))
                    .map(|rule| ValidationError {
                        field: *field,
                        rule: *rule,
                    })
            })
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors(errors))
        }
    }
}

impl Default for ValidationRules {
    fn default() -> Self {
        Self::new()
            .with(Field::Email, [Rule::Required, Rule::Email])
            .with(Field::Message, [Rule::Required])
    }
}
