use thiserror::Error;

// Contact details collected before the reservation call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GuestDetails {
    pub name: String,
    pub email: String,
}

// Validation failures for the guest details form.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum GuestError {
    #[error("guest name is required")]
    MissingName,
    #[error("a valid email address is required")]
    InvalidEmail,
}

impl GuestDetails {
    // Validates raw form input. The name must be non-empty after
    // trimming; the email needs one '@' with a non-empty local part and
    // a dotted domain.
    pub fn parse(name: &str, email: &str) -> Result<Self, GuestError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(GuestError::MissingName);
        }

        let email = email.trim();
        if !is_valid_email(email) {
            return Err(GuestError::InvalidEmail);
        }

        Ok(Self {
            name: name.to_string(),
            email: email.to_string(),
        })
    }
}

fn is_valid_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    if domain.starts_with('.') || domain.ends_with('.') {
        return false;
    }
    domain.contains('.') && !value.contains(char::is_whitespace)
}
