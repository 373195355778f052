use thiserror::Error;

/// Value shipped in place of a real Apps Script deployment URL.
pub const FORM_ENDPOINT_PLACEHOLDER: &str = "YOUR_GOOGLE_APPS_SCRIPT_WEB_APP_URL";

/// Local storage key holding the `dark` / `light` preference.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Country code selector value that reveals the free-text code input.
pub const CUSTOM_COUNTRY_CODE: &str = "custom";

/// Placeholder option of the service selector.
pub const SERVICE_PLACEHOLDER: &str = "Select a service";

pub const COUNTRY_CODES: &[(&str, &str)] = &[
    ("+1", "US/CA (+1)"),
    ("+44", "UK (+44)"),
    ("+61", "AU (+61)"),
    ("+91", "IN (+91)"),
    ("+971", "UAE (+971)"),
    ("+358", "FI (+358)"),
];

pub const SERVICES: &[&str] = &[
    "Web Development",
    "Mobile App Development",
    "Cloud Hosting",
    "IT Consulting",
    "Maintenance & Support",
];

/// (code, label, href)
pub const LANGUAGES: &[(&str, &str, &str)] = &[
    ("en", "English", "/"),
    ("es", "Español", "/es/"),
    ("fr", "Français", "/fr/"),
    ("ar", "العربية", "/ar/"),
];

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Google Apps Script URL is not set or is still the placeholder. Form submission will not work.")]
    EndpointNotConfigured,
}

/// Build-time endpoint, set with `SERVICE_FORM_ENDPOINT=https://script.google.com/... trunk build`.
pub fn get_form_endpoint() -> &'static str {
    option_env!("SERVICE_FORM_ENDPOINT").unwrap_or(FORM_ENDPOINT_PLACEHOLDER)
}

pub fn form_endpoint() -> Result<&'static str, ConfigError> {
    check_endpoint(get_form_endpoint())
}

pub fn check_endpoint(url: &str) -> Result<&str, ConfigError> {
    let trimmed = url.trim();
    if trimmed.is_empty() || trimmed == FORM_ENDPOINT_PLACEHOLDER {
        return Err(ConfigError::EndpointNotConfigured);
    }
    Ok(trimmed)
}

#[cfg(debug_assertions)]
pub fn log_level() -> log::Level {
    log::Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> log::Level {
    log::Level::Info
}
