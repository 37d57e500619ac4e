//! Contact-form model: local validation and `mailto:` draft composition.
//!
//! There is no delivery backend; a valid submission is turned into a
//! pre-filled draft for the visitor's own mail client.

use crate::prefs::Language;

/// In-progress form fields, owned by the contact section while editing.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, thiserror::Error)]
pub enum ContactFormError {
    #[error("a required field is empty")]
    MissingRequired,
    #[error("the email address is not valid")]
    InvalidEmail,
}

impl ContactFormError {
    /// User-facing message in the active language.
    pub fn message(self, lang: Language) -> &'static str {
        match (self, lang) {
            (ContactFormError::MissingRequired, Language::En) => {
                "Please fill in all required fields."
            }
            (ContactFormError::MissingRequired, Language::Fr) => {
                "Veuillez remplir tous les champs obligatoires."
            }
            (ContactFormError::InvalidEmail, Language::En) => {
                "Please enter a valid email address."
            }
            (ContactFormError::InvalidEmail, Language::Fr) => {
                "Veuillez entrer une adresse email valide."
            }
        }
    }
}

impl ContactForm {
    /// Checks the required fields (name, email, message) and the email
    /// shape. The subject is optional; a localized default is substituted
    /// at composition time.
    pub fn validate(&self) -> Result<(), ContactFormError> {
        if self.name.trim().is_empty()
            || self.email.trim().is_empty()
            || self.message.trim().is_empty()
        {
            return Err(ContactFormError::MissingRequired);
        }
        if !is_valid_email(self.email.trim()) {
            return Err(ContactFormError::InvalidEmail);
        }
        Ok(())
    }

    /// Composes the pre-filled `mailto:` URL for a valid form.
    ///
    /// Validation runs first so an invalid form can never reach the mail
    /// client.
    pub fn mailto_url(&self, recipient: &str, lang: Language) -> Result<String, ContactFormError> {
        self.validate()?;

        let subject = match self.subject.trim() {
            "" => default_subject(lang),
            s => s,
        };
        let body = format!(
            "{name_label}: {name}\n{email_label}: {email}\n\n{message_label}:\n{message}",
            name_label = label(lang, "Name", "Nom"),
            email_label = "Email",
            message_label = label(lang, "Message", "Message"),
            name = self.name.trim(),
            email = self.email.trim(),
            message = self.message.trim(),
        );

        Ok(format!(
            "mailto:{recipient}?subject={}&body={}",
            urlencoding::encode(subject),
            urlencoding::encode(&body),
        ))
    }
}

fn default_subject(lang: Language) -> &'static str {
    label(lang, "Contact from Portfolio", "Contact depuis le Portfolio")
}

fn label(lang: Language, en: &'static str, fr: &'static str) -> &'static str {
    match lang {
        Language::En => en,
        Language::Fr => fr,
    }
}

/// Minimal address check: one `@` with a dotted domain, no whitespace.
/// Real validation happens when the visitor's mail client sends the draft.
pub fn is_valid_email(address: &str) -> bool {
    if address.contains(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = address.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Ada Lovelace".into(),
            email: "ada@example.com".into(),
            subject: "Hello".into(),
            message: "I have a project for you.".into(),
        }
    }

    #[test]
    fn empty_message_blocks_submission_in_both_languages() {
        let form = ContactForm {
            message: String::new(),
            ..filled()
        };
        let err = form.validate().unwrap_err();
        assert_eq!(err, ContactFormError::MissingRequired);
        assert_eq!(err.message(Language::En), "Please fill in all required fields.");
        assert_eq!(
            err.message(Language::Fr),
            "Veuillez remplir tous les champs obligatoires."
        );
        // No mailto URL is produced for an invalid form.
        assert!(form.mailto_url("me@example.com", Language::En).is_err());
    }

    #[test]
    fn whitespace_only_fields_count_as_empty() {
        let form = ContactForm {
            name: "   ".into(),
            ..filled()
        };
        assert_eq!(form.validate(), Err(ContactFormError::MissingRequired));
    }

    #[test]
    fn malformed_email_is_rejected() {
        for bad in ["plainaddress", "a@b", "a b@c.com", "@no-local.com", "x@y@z.com"] {
            let form = ContactForm {
                email: bad.into(),
                ..filled()
            };
            assert_eq!(form.validate(), Err(ContactFormError::InvalidEmail), "{bad}");
        }
    }

    #[test]
    fn mailto_encodes_subject_and_body() {
        let form = ContactForm {
            subject: "A & B?".into(),
            ..filled()
        };
        let url = form.mailto_url("me@example.com", Language::En).unwrap();
        assert!(url.starts_with("mailto:me@example.com?subject=A%20%26%20B%3F&body="));
        assert!(url.contains("Name%3A%20Ada%20Lovelace"));
        assert!(!url.contains(' '));
    }

    #[test]
    fn blank_subject_gets_a_localized_default() {
        let form = ContactForm {
            subject: "  ".into(),
            ..filled()
        };
        let en = form.mailto_url("me@example.com", Language::En).unwrap();
        assert!(en.contains("subject=Contact%20from%20Portfolio"));
        let fr = form.mailto_url("me@example.com", Language::Fr).unwrap();
        assert!(fr.contains("subject=Contact%20depuis%20le%20Portfolio"));
    }
}
