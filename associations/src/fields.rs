//! Validated wrappers for the contact fields an association form submits.

use lazy_static::lazy_static;
use regex::Regex;
use shared_kernel::non_empty_string;

non_empty_string!(AssociationName);
non_empty_string!(EmailInner);

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AssociationEmail(EmailInner);

impl AssociationEmail {
    pub fn inner(&self) -> String {
        self.0.inner()
    }
}

impl AsRef<str> for AssociationEmail {
    fn as_ref(&self) -> &str {
        self.0.as_ref()
    }
}

impl TryFrom<String> for AssociationEmail {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        use validator::validate_email;
        let non_empty = EmailInner::try_from(value)?;
        if validate_email(non_empty.as_ref()) {
            return Ok(AssociationEmail(non_empty));
        }
        Err(format!("{} is an invalid email", non_empty.as_ref()))
    }
}

lazy_static! {
    // French numbers: 0X XX XX XX XX with optional +33 prefix, separators
    // optional.
    static ref PHONE_REGEX: Regex =
        Regex::new(r"^(?:\+33\s?|0)[1-9](?:[\s.-]?\d{2}){4}$").unwrap();
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    pub fn inner(&self) -> String {
        self.0.clone()
    }
}

impl AsRef<str> for PhoneNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for PhoneNumber {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        let trimmed = value.trim();
        if PHONE_REGEX.is_match(trimmed) {
            return Ok(PhoneNumber(trimmed.to_owned()));
        }
        Err(format!("{trimmed} is an invalid phone number"))
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WebsiteUrl(String);

impl WebsiteUrl {
    pub fn inner(&self) -> String {
        self.0.clone()
    }
}

impl AsRef<str> for WebsiteUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for WebsiteUrl {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        use validator::validate_url;
        if validate_url(&value) {
            return Ok(WebsiteUrl(value));
        }
        Err(format!("{value} is an invalid url"))
    }
}
