use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::config::{CUSTOM_COUNTRY_CODE, SERVICE_PLACEHOLDER};
use crate::request::fields::{FieldId, FormValues, FIELDS};

static CUSTOM_CODE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\+[0-9]{1,4}$").unwrap());
static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9\s]+$").unwrap());
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9._%+\-]+@[a-zA-Z0-9.\-]+\.[a-zA-Z]{2,}$").unwrap());

/// Inline error shown under a single field. The display string is the exact
/// text rendered into the field's error slot.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("Full Name is required.")]
    FullNameRequired,
    #[error("Please select a country code.")]
    CountryCodeMissing,
    #[error("Please enter a country code.")]
    CustomCodeMissing,
    #[error("Country code must start with + followed by 1-4 digits.")]
    CustomCodeMalformed,
    #[error("Phone Number is required.")]
    PhoneNumberRequired,
    #[error("Please enter only numbers.")]
    PhoneNumberNotNumeric,
    #[error("Email Address is required.")]
    EmailRequired,
    #[error("Please enter a valid email address.")]
    EmailMalformed,
    #[error("Please select a service.")]
    ServiceMissing,
}

pub fn check_full_name(values: &FormValues) -> Result<(), FieldError> {
    if values.full_name.trim().is_empty() {
        return Err(FieldError::FullNameRequired);
    }
    Ok(())
}

pub fn check_country_code(values: &FormValues) -> Result<(), FieldError> {
    dialing_code(values).map(|_| ())
}

pub fn check_phone_number(values: &FormValues) -> Result<(), FieldError> {
    let phone = values.phone_number.trim();
    if phone.is_empty() {
        Err(FieldError::PhoneNumberRequired)
    } else if !PHONE_RE.is_match(phone) {
        Err(FieldError::PhoneNumberNotNumeric)
    } else {
        Ok(())
    }
}

pub fn check_email(values: &FormValues) -> Result<(), FieldError> {
    let email = values.email.trim();
    if email.is_empty() {
        Err(FieldError::EmailRequired)
    } else if !EMAIL_RE.is_match(email) {
        Err(FieldError::EmailMalformed)
    } else {
        Ok(())
    }
}

pub fn check_service(values: &FormValues) -> Result<(), FieldError> {
    if values.service.is_empty() || values.service == SERVICE_PLACEHOLDER {
        return Err(FieldError::ServiceMissing);
    }
    Ok(())
}

/// Resolves the code that prefixes the phone number: the selected preset, or
/// the trimmed custom code when the `custom` option is chosen.
pub fn dialing_code(values: &FormValues) -> Result<String, FieldError> {
    match values.country_code.as_str() {
        "" => Err(FieldError::CountryCodeMissing),
        CUSTOM_COUNTRY_CODE => {
            let custom = values.custom_country_code.trim();
            if custom.is_empty() {
                Err(FieldError::CustomCodeMissing)
            } else if !CUSTOM_CODE_RE.is_match(custom) {
                Err(FieldError::CustomCodeMalformed)
            } else {
                Ok(custom.to_string())
            }
        }
        preset => Ok(preset.to_string()),
    }
}

/// Outcome of checking every validated field. A field without an entry in
/// `errors` passed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationResult {
    errors: BTreeMap<FieldId, FieldError>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn error(&self, field: FieldId) -> Option<&FieldError> {
        self.errors.get(&field)
    }

    /// Message for an error slot, `None` when the slot should be hidden.
    pub fn message(&self, field: FieldId) -> Option<String> {
        self.error(field).map(ToString::to_string)
    }

    pub fn errors(&self) -> impl Iterator<Item = (FieldId, &FieldError)> {
        self.errors.iter().map(|(id, err)| (*id, err))
    }

    /// First field in page order that carries an error.
    pub fn first_invalid(&self) -> Option<FieldId> {
        self.errors.keys().next().copied()
    }
}

/// Runs every rule in the field table. Never stops at the first failure.
pub fn validate(values: &FormValues) -> ValidationResult {
    let errors = FIELDS
        .iter()
        .filter_map(|field| {
            let check = field.validator?;
            check(values).err().map(|err| (field.id, err))
        })
        .collect();
    ValidationResult { errors }
}

/// Form values that passed validation in full. The only way to build one is
/// `ValidatedForm::try_from`, which runs [`validate`] itself.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedForm {
    values: FormValues,
    dialing_code: String,
}

impl TryFrom<FormValues> for ValidatedForm {
    type Error = ValidationResult;

    fn try_from(values: FormValues) -> Result<Self, Self::Error> {
        let mut result = validate(&values);
        if !result.is_valid() {
            return Err(result);
        }
        match dialing_code(&values) {
            Ok(dialing_code) => Ok(ValidatedForm {
                values,
                dialing_code,
            }),
            Err(err) => {
                result.errors.insert(FieldId::CountryCode, err);
                Err(result)
            }
        }
    }
}

impl ValidatedForm {
    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn dialing_code(&self) -> &str {
        &self.dialing_code
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn valid_values() -> FormValues {
        FormValues {
            full_name: "Ada Lovelace".to_string(),
            country_code: "+44".to_string(),
            custom_country_code: String::new(),
            phone_number: "20 7946 0958".to_string(),
            email: "ada@example.co".to_string(),
            service: "IT Consulting".to_string(),
            details: "Need a quote".to_string(),
        }
    }

    fn with(id: FieldId, value: &str) -> FormValues {
        let mut values = valid_values();
        values.set(id, value);
        values
    }

    fn custom(code: &str) -> FormValues {
        let mut values = with(FieldId::CountryCode, CUSTOM_COUNTRY_CODE);
        values.custom_country_code = code.to_string();
        values
    }

    #[test]
    fn test_valid_form_has_no_errors() {
        let result = validate(&valid_values());
        assert!(result.is_valid());
        assert_eq!(result.first_invalid(), None);
    }

    #[test]
    fn test_empty_form_reports_every_required_message() {
        let result = validate(&FormValues::default());
        assert!(!result.is_valid());
        assert_eq!(result.message(FieldId::FullName).as_deref(), Some("Full Name is required."));
        assert_eq!(
            result.message(FieldId::CountryCode).as_deref(),
            Some("Please select a country code.")
        );
        assert_eq!(
            result.message(FieldId::PhoneNumber).as_deref(),
            Some("Phone Number is required.")
        );
        assert_eq!(result.message(FieldId::Email).as_deref(), Some("Email Address is required."));
        assert_eq!(result.message(FieldId::Service).as_deref(), Some("Please select a service."));
        assert_eq!(result.errors().count(), 5);
    }

    #[test]
    fn test_required_message_is_independent_of_other_fields() {
        for (id, expected) in [
            (FieldId::FullName, FieldError::FullNameRequired),
            (FieldId::PhoneNumber, FieldError::PhoneNumberRequired),
            (FieldId::Email, FieldError::EmailRequired),
            (FieldId::Service, FieldError::ServiceMissing),
            (FieldId::CountryCode, FieldError::CountryCodeMissing),
        ] {
            let result = validate(&with(id, ""));
            assert_eq!(result.error(id), Some(&expected));
            assert_eq!(result.errors().count(), 1, "only {id:?} should fail");
        }
    }

    #[test]
    fn test_whitespace_only_counts_as_empty() {
        let result = validate(&with(FieldId::FullName, "   "));
        assert_eq!(result.error(FieldId::FullName), Some(&FieldError::FullNameRequired));
        let result = validate(&with(FieldId::Email, " \t "));
        assert_eq!(result.error(FieldId::Email), Some(&FieldError::EmailRequired));
    }

    #[test]
    fn test_custom_country_code_pattern() {
        assert!(validate(&custom("+123")).is_valid());
        assert!(validate(&custom(" +1 ")).is_valid());
        for bad in ["123", "+", "+12345", "+1a"] {
            assert_eq!(
                validate(&custom(bad)).error(FieldId::CountryCode),
                Some(&FieldError::CustomCodeMalformed),
                "{bad} should be rejected"
            );
        }
        assert_eq!(
            validate(&custom("  ")).error(FieldId::CountryCode),
            Some(&FieldError::CustomCodeMissing)
        );
    }

    #[test]
    fn test_custom_code_ignored_for_presets() {
        let mut values = valid_values();
        values.custom_country_code = "garbage".to_string();
        assert!(validate(&values).is_valid());
    }

    #[test]
    fn test_phone_number_digits_and_whitespace() {
        assert!(validate(&with(FieldId::PhoneNumber, "123 456")).is_valid());
        assert_eq!(
            validate(&with(FieldId::PhoneNumber, "12a")).error(FieldId::PhoneNumber),
            Some(&FieldError::PhoneNumberNotNumeric)
        );
        assert_eq!(
            validate(&with(FieldId::PhoneNumber, "+358 40")).error(FieldId::PhoneNumber),
            Some(&FieldError::PhoneNumberNotNumeric)
        );
    }

    #[test]
    fn test_email_format() {
        assert!(validate(&with(FieldId::Email, "a@b.co")).is_valid());
        for bad in ["a@b", "a@b.", "a@b.c", "@b.co", "a b@c.de"] {
            assert_eq!(
                validate(&with(FieldId::Email, bad)).error(FieldId::Email),
                Some(&FieldError::EmailMalformed),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn test_service_placeholder_rejected() {
        let result = validate(&with(FieldId::Service, SERVICE_PLACEHOLDER));
        assert_eq!(result.message(FieldId::Service).as_deref(), Some("Please select a service."));
        assert_eq!(result.first_invalid(), Some(FieldId::Service));
    }

    #[test]
    fn test_first_invalid_follows_page_order() {
        let mut values = valid_values();
        values.email.clear();
        values.phone_number = "abc".to_string();
        assert_eq!(validate(&values).first_invalid(), Some(FieldId::PhoneNumber));
    }

    #[test]
    fn test_validated_form_resolves_dialing_code() {
        let form = ValidatedForm::try_from(custom(" +1234 ")).unwrap();
        assert_eq!(form.dialing_code(), "+1234");

        let form = ValidatedForm::try_from(valid_values()).unwrap();
        assert_eq!(form.dialing_code(), "+44");
    }

    #[test]
    fn test_validated_form_refuses_invalid_values() {
        let values = with(FieldId::FullName, "");
        let err = ValidatedForm::try_from(values.clone()).unwrap_err();
        assert_eq!(err, validate(&values));
    }

    #[test]
    fn test_empty_result_cannot_promote_invalid_values() {
        let mut values = valid_values();
        values.full_name.clear();
        values.email = "not-an-email".to_string();
        values.service = SERVICE_PLACEHOLDER.to_string();
        assert!(ValidationResult::default().is_valid());

        let err = ValidatedForm::try_from(values).unwrap_err();
        assert_eq!(err.first_invalid(), Some(FieldId::FullName));
        assert_eq!(err.error(FieldId::Email), Some(&FieldError::EmailMalformed));
        assert_eq!(err.error(FieldId::Service), Some(&FieldError::ServiceMissing));
    }
}
