use crate::request::validation::{self, FieldError};

/// Inputs of the service request form, in the order they appear on the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldId {
    FullName,
    CountryCode,
    CustomCountryCode,
    PhoneNumber,
    Email,
    Service,
    Details,
}

pub type Validator = fn(&FormValues) -> Result<(), FieldError>;

/// One row of the field table: the input's element id (also its form name),
/// the slot its error is written into and the rule that checks it.
pub struct FieldSpec {
    pub id: FieldId,
    pub input_id: &'static str,
    pub error_slot: Option<&'static str>,
    pub validator: Option<Validator>,
}

pub const FIELDS: &[FieldSpec] = &[
    FieldSpec {
        id: FieldId::FullName,
        input_id: "fullName",
        error_slot: Some("fullNameError"),
        validator: Some(validation::check_full_name),
    },
    // Custom code problems are reported against the selector.
    FieldSpec {
        id: FieldId::CountryCode,
        input_id: "countryCode",
        error_slot: Some("countryCodeError"),
        validator: Some(validation::check_country_code),
    },
    FieldSpec {
        id: FieldId::CustomCountryCode,
        input_id: "customCountryCode",
        error_slot: None,
        validator: None,
    },
    FieldSpec {
        id: FieldId::PhoneNumber,
        input_id: "phoneNumber",
        error_slot: Some("phoneNumberError"),
        validator: Some(validation::check_phone_number),
    },
    FieldSpec {
        id: FieldId::Email,
        input_id: "email",
        error_slot: Some("emailError"),
        validator: Some(validation::check_email),
    },
    FieldSpec {
        id: FieldId::Service,
        input_id: "service",
        error_slot: Some("serviceError"),
        validator: Some(validation::check_service),
    },
    FieldSpec {
        id: FieldId::Details,
        input_id: "details",
        error_slot: None,
        validator: None,
    },
];

impl FieldId {
    pub fn spec(self) -> &'static FieldSpec {
        // FIELDS holds exactly one row per variant, in declaration order.
        &FIELDS[self as usize]
    }

    pub fn input_id(self) -> &'static str {
        self.spec().input_id
    }

    pub fn error_slot(self) -> Option<&'static str> {
        self.spec().error_slot
    }
}

/// Raw values as read from the page at submit time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormValues {
    pub full_name: String,
    pub country_code: String,
    pub custom_country_code: String,
    pub phone_number: String,
    pub email: String,
    pub service: String,
    pub details: String,
}

impl FormValues {
    pub fn get(&self, id: FieldId) -> &str {
        match id {
            FieldId::FullName => &self.full_name,
            FieldId::CountryCode => &self.country_code,
            FieldId::CustomCountryCode => &self.custom_country_code,
            FieldId::PhoneNumber => &self.phone_number,
            FieldId::Email => &self.email,
            FieldId::Service => &self.service,
            FieldId::Details => &self.details,
        }
    }

    pub fn set(&mut self, id: FieldId, value: impl Into<String>) {
        let slot = match id {
            FieldId::FullName => &mut self.full_name,
            FieldId::CountryCode => &mut self.country_code,
            FieldId::CustomCountryCode => &mut self.custom_country_code,
            FieldId::PhoneNumber => &mut self.phone_number,
            FieldId::Email => &mut self.email,
            FieldId::Service => &mut self.service,
            FieldId::Details => &mut self.details,
        };
        *slot = value.into();
    }

    /// Name/value pairs in form order, as the browser would serialize them.
    pub fn entries(&self) -> Vec<(&'static str, &str)> {
        FIELDS
            .iter()
            .map(|field| (field.input_id, self.get(field.id)))
            .collect()
    }
}
