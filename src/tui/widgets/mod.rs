pub mod home;
pub mod onboarding;
pub mod path;
pub mod question;
