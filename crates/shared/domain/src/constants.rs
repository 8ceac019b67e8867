//! Field paths and user-facing messages of the profile form.

pub mod paths {
    pub const USERNAME: &str = "username";
    pub const EMAIL: &str = "email";
    pub const CHANNEL: &str = "channel";
    pub const TWITTER: &str = "social.twitter";
    pub const FACEBOOK: &str = "social.facebook";
    pub const PRIMARY_PHONE: &str = "phoneNumbers.0";
    pub const SECONDARY_PHONE: &str = "phoneNumbers.1";
    pub const PHONE_LIST: &str = "phNumbers";
    /// Field of a `phNumbers` entry.
    pub const PHONE_LIST_NUMBER: &str = "number";
    pub const AGE: &str = "age";
    pub const DOB: &str = "dob";
}

pub mod messages {
    pub const USERNAME_REQUIRED: &str = "Username is required";
    pub const EMAIL_REQUIRED: &str = "Email is required";
    pub const EMAIL_FORMAT: &str = "Invalid email format";
    pub const EMAIL_RESERVED: &str = "Enter a different email address";
    pub const EMAIL_DOMAIN: &str = "This domain is not supported";
    pub const EMAIL_TAKEN: &str = "Email exists";
    pub const EMAIL_UNVERIFIED: &str = "Unable to verify email address";
    pub const CHANNEL_REQUIRED: &str = "Channel is required";
    pub const TWITTER_REQUIRED: &str = "Enter twitter profile";
    pub const PHONE_REQUIRED: &str = "Phone number is required";
    pub const PHONE_DIGITS: &str = "Number only";
    pub const AGE_REQUIRED: &str = "Age is required";
    pub const DOB_REQUIRED: &str = "Date of birth is required";
}

/// Address that can never be registered.
pub const RESERVED_EMAIL: &str = "admin@example.com";
/// Domain suffix rejected for email addresses.
pub const BLOCKED_EMAIL_SUFFIX: &str = "baddomain.com";
/// Default username shown on mount.
pub const DEFAULT_USERNAME: &str = "Batman";
