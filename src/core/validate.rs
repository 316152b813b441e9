// Contact and newsletter form validation.

use crate::constants::MESSAGE_MIN_CHARS;
use regex::Regex;
use std::sync::OnceLock;
use thiserror::Error;

fn email_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern"))
}

fn phone_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[0-9+\-\s()]{7,}$").expect("phone pattern"))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    FullName,
    CompanyName,
    Email,
    PhoneNumber,
    Message,
    NewsletterEmail,
}

impl Field {
    /// Element id of the field's input.
    pub fn element_id(self) -> &'static str {
        match self {
            Field::FullName => "fullName",
            Field::CompanyName => "companyName",
            Field::Email => "email",
            Field::PhoneNumber => "phoneNumber",
            Field::Message => "message",
            Field::NewsletterEmail => "newsletterEmail",
        }
    }
}

#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum FieldError {
    #[error("Full Name is required")]
    FullNameRequired,
    #[error("Company Name is required")]
    CompanyNameRequired,
    #[error("Email is required")]
    EmailRequired,
    #[error("Enter a valid email")]
    EmailInvalid,
    #[error("Enter a valid phone number")]
    PhoneInvalid,
    #[error("Message must be at least 5 characters")]
    MessageTooShort,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactInput {
    pub full_name: String,
    pub company_name: String,
    pub email: String,
    pub phone_number: String,
    pub message: String,
}

fn check_email(value: &str) -> Result<(), FieldError> {
    let value = value.trim();
    if value.is_empty() {
        Err(FieldError::EmailRequired)
    } else if !email_re().is_match(value) {
        Err(FieldError::EmailInvalid)
    } else {
        Ok(())
    }
}

/// Every failing field of the contact form, in form order.
pub fn validate_contact(input: &ContactInput) -> Vec<(Field, FieldError)> {
    let mut errors = Vec::new();
    if input.full_name.trim().is_empty() {
        errors.push((Field::FullName, FieldError::FullNameRequired));
    }
    if input.company_name.trim().is_empty() {
        errors.push((Field::CompanyName, FieldError::CompanyNameRequired));
    }
    if let Err(e) = check_email(&input.email) {
        errors.push((Field::Email, e));
    }
    let phone = input.phone_number.trim();
    if !phone.is_empty() && !phone_re().is_match(phone) {
        errors.push((Field::PhoneNumber, FieldError::PhoneInvalid));
    }
    let message = input.message.trim();
    if !message.is_empty() && message.chars().count() < MESSAGE_MIN_CHARS {
        errors.push((Field::Message, FieldError::MessageTooShort));
    }
    errors
}

pub fn validate_newsletter(email: &str) -> Result<(), FieldError> {
    check_email(email)
}
