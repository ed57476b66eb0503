use nutype::nutype;
use serde::Serialize;

use crate::email_address::{EmailAddress, EMAIL_ADDRESS_MAX_LEN};

/// A contact form submission whose fields all passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: ContactName,
    pub email: EmailAddress,
    pub message: ContactMessage,
}

/// The untrusted fields of a submission, as received from the client.
///
/// `None` means the field was missing or not a text value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactSubmissionInput {
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
}

#[nutype(
    sanitize(trim),
    validate(len_char_min = 2, len_char_max = 100),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Display)
)]
pub struct ContactName(String);

impl ContactName {
    pub const MIN_LEN: usize = 2;
    pub const MAX_LEN: usize = 100;
}

#[nutype(
    sanitize(trim),
    validate(len_char_min = 10, len_char_max = 1000),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Display)
)]
pub struct ContactMessage(String);

impl ContactMessage {
    pub const MIN_LEN: usize = 10;
    pub const MAX_LEN: usize = 1000;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactFieldError {
    pub field: ContactField,
    pub message: &'static str,
}

/// Constraints of a single submission field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ContactFieldRule {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_len: Option<usize>,
    pub max_len: usize,
    pub required_message: &'static str,
    pub invalid_message: &'static str,
}

/// The validation rule set, shared with the form client so that its
/// pre-check cannot drift from the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ContactRules {
    pub name: ContactFieldRule,
    pub email: ContactFieldRule,
    pub message: ContactFieldRule,
}

pub const CONTACT_RULES: ContactRules = ContactRules {
    name: ContactField::Name.rule(),
    email: ContactField::Email.rule(),
    message: ContactField::Message.rule(),
};

impl ContactField {
    pub const ALL: [Self; 3] = [Self::Name, Self::Email, Self::Message];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        }
    }

    pub const fn rule(self) -> ContactFieldRule {
        match self {
            Self::Name => ContactFieldRule {
                min_len: Some(ContactName::MIN_LEN),
                max_len: ContactName::MAX_LEN,
                required_message: "Name is required",
                invalid_message: "Name must be between 2 and 100 characters",
            },
            Self::Email => ContactFieldRule {
                min_len: None,
                max_len: EMAIL_ADDRESS_MAX_LEN,
                required_message: "Email is required",
                invalid_message: "Please provide a valid email",
            },
            Self::Message => ContactFieldRule {
                min_len: Some(ContactMessage::MIN_LEN),
                max_len: ContactMessage::MAX_LEN,
                required_message: "Message is required",
                invalid_message: "Message must be between 10 and 1000 characters",
            },
        }
    }

    fn required(self) -> ContactFieldError {
        ContactFieldError {
            field: self,
            message: self.rule().required_message,
        }
    }

    fn invalid(self) -> ContactFieldError {
        ContactFieldError {
            field: self,
            message: self.rule().invalid_message,
        }
    }
}

impl ContactSubmission {
    /// Validates all fields of `input`.
    ///
    /// Either every field is valid, or the errors of all invalid fields are
    /// returned (at most one per field, in field order).
    pub fn validate(input: ContactSubmissionInput) -> Result<Self, Vec<ContactFieldError>> {
        let mut errors = Vec::new();

        let name = validate_field(ContactField::Name, input.name, &mut errors, |x| {
            ContactName::try_new(x).ok()
        });
        let email = validate_field(ContactField::Email, input.email, &mut errors, |x| {
            x.parse::<EmailAddress>().ok()
        });
        let message = validate_field(ContactField::Message, input.message, &mut errors, |x| {
            ContactMessage::try_new(x).ok()
        });

        match (name, email, message) {
            (Some(name), Some(email), Some(message)) => Ok(Self {
                name,
                email,
                message,
            }),
            _ => Err(errors),
        }
    }
}

fn validate_field<T>(
    field: ContactField,
    value: Option<String>,
    errors: &mut Vec<ContactFieldError>,
    parse: impl FnOnce(String) -> Option<T>,
) -> Option<T> {
    let Some(value) = value.filter(|x| !x.trim().is_empty()) else {
        errors.push(field.required());
        return None;
    };

    let parsed = parse(value);
    if parsed.is_none() {
        errors.push(field.invalid());
    }
    parsed
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn input(name: &str, email: &str, message: &str) -> ContactSubmissionInput {
        ContactSubmissionInput {
            name: Some(name.into()),
            email: Some(email.into()),
            message: Some(message.into()),
        }
    }

    fn rejected_fields(input: ContactSubmissionInput) -> Vec<ContactField> {
        ContactSubmission::validate(input)
            .unwrap_err()
            .into_iter()
            .map(|err| err.field)
            .collect()
    }

    #[test]
    fn valid_submission() {
        // Act
        let result = ContactSubmission::validate(input(
            "Jane Doe",
            "jane@example.com",
            "Hello, I'd like to collaborate.",
        ));

        // Assert
        let submission = result.unwrap();
        assert_eq!(submission.name.into_inner(), "Jane Doe");
        assert_eq!(submission.email.as_str(), "jane@example.com");
        assert_eq!(submission.message.into_inner(), "Hello, I'd like to collaborate.");
    }

    #[test]
    fn fields_are_trimmed() {
        let submission = ContactSubmission::validate(input(
            "  Jane Doe\t",
            " jane@example.com ",
            "\n Hello, I'd like to collaborate. \n",
        ))
        .unwrap();

        assert_eq!(submission.name.into_inner(), "Jane Doe");
        assert_eq!(submission.email.as_str(), "jane@example.com");
        assert_eq!(submission.message.into_inner(), "Hello, I'd like to collaborate.");
    }

    #[test]
    fn email_is_normalized() {
        let submission = ContactSubmission::validate(input(
            "Jane Doe",
            "User@Example.COM",
            "Hello, I'd like to collaborate.",
        ))
        .unwrap();

        assert_eq!(submission.email.as_str(), "user@example.com");
    }

    #[test]
    fn all_empty_submission() {
        // Act
        let errors = ContactSubmission::validate(input("", "  ", "\n")).unwrap_err();

        // Assert
        assert_eq!(
            errors,
            [
                ContactFieldError {
                    field: ContactField::Name,
                    message: "Name is required",
                },
                ContactFieldError {
                    field: ContactField::Email,
                    message: "Email is required",
                },
                ContactFieldError {
                    field: ContactField::Message,
                    message: "Message is required",
                },
            ]
        );
    }

    #[test]
    fn missing_fields_are_required() {
        let errors = ContactSubmission::validate(ContactSubmissionInput::default()).unwrap_err();

        assert_eq!(errors.len(), 3);
        for (err, field) in errors.iter().zip(ContactField::ALL) {
            assert_eq!(err.field, field);
            assert_eq!(err.message, field.rule().required_message);
        }
    }

    #[test]
    fn single_invalid_field_is_reported_alone() {
        let errors = ContactSubmission::validate(input(
            "Jane Doe",
            "not-an-email",
            "Hello, I'd like to collaborate.",
        ))
        .unwrap_err();

        assert_eq!(
            errors,
            [ContactFieldError {
                field: ContactField::Email,
                message: "Please provide a valid email",
            }]
        );
    }

    #[test]
    fn name_length_bounds() {
        let message = "Hello, I'd like to collaborate.";
        for (len, ok) in [(1, false), (2, true), (100, true), (101, false)] {
            let name = "a".repeat(len);
            let result = ContactSubmission::validate(input(&name, "jane@example.com", message));
            assert_eq!(result.is_ok(), ok, "name length {len}");
        }

        assert_eq!(
            rejected_fields(input("J", "jane@example.com", message)),
            [ContactField::Name]
        );
    }

    #[test]
    fn name_length_counts_characters() {
        let name = "é".repeat(ContactName::MAX_LEN);
        ContactName::try_new(name).unwrap();
    }

    #[test]
    fn message_length_bounds() {
        for (len, ok) in [(9, false), (10, true), (1000, true), (1001, false)] {
            let message = "m".repeat(len);
            let result =
                ContactSubmission::validate(input("Jane Doe", "jane@example.com", &message));
            assert_eq!(result.is_ok(), ok, "message length {len}");
        }

        assert_eq!(
            rejected_fields(input("Jane Doe", "jane@example.com", "too short")),
            [ContactField::Message]
        );
    }

    #[test]
    fn length_is_measured_after_trimming() {
        assert_eq!(
            rejected_fields(input(" J ", "jane@example.com", "   123456789   ")),
            [ContactField::Name, ContactField::Message]
        );
    }

    #[test]
    fn rules_match_validators() {
        for field in [ContactField::Name, ContactField::Message] {
            let rule = field.rule();
            let min = rule.min_len.unwrap();
            let check = |len: usize| {
                let value = "x".repeat(len);
                match field {
                    ContactField::Name => ContactName::try_new(value).is_ok(),
                    _ => ContactMessage::try_new(value).is_ok(),
                }
            };
            assert!(!check(min - 1));
            assert!(check(min));
            assert!(check(rule.max_len));
            assert!(!check(rule.max_len + 1));
        }
    }

    #[test]
    fn serialize_rules() {
        let value = serde_json::to_value(CONTACT_RULES).unwrap();

        assert_eq!(value["name"]["min_len"], 2);
        assert_eq!(value["name"]["max_len"], 100);
        assert_eq!(value["message"]["min_len"], 10);
        assert_eq!(value["message"]["max_len"], 1000);
        assert!(value["email"].get("min_len").is_none());
        assert_eq!(value["email"]["invalid_message"], "Please provide a valid email");
    }
}
