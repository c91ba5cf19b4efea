use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use utoipa::ToSchema;
use validator::Validate;

/// The email shape the contact form has always accepted.
pub static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\w.-]+@[\w.-]+\.\w+$").expect("valid email regex"));

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct ContactRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be between 1 and 100 characters"))]
    pub name: String,
    #[validate(
        length(min = 5, max = 50, message = "Email must be between 5 and 50 characters"),
        regex(path = *EMAIL_REGEX, message = "Invalid email format")
    )]
    pub email: String,
    #[validate(length(
        min = 1,
        max = 500,
        message = "Message must be between 1 and 500 characters"
    ))]
    pub message: String,
    pub subject: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ContactResponse {
    pub success: bool,
    pub message: String,
}
