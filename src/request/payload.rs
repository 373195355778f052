use web_sys::FormData;

use crate::request::fields::FieldId;
use crate::request::validation::ValidatedForm;

/// Fields replaced by the single composed `phoneNumber` entry.
const PHONE_SOURCE_FIELDS: [FieldId; 3] = [
    FieldId::CountryCode,
    FieldId::CustomCountryCode,
    FieldId::PhoneNumber,
];

/// Name/value pairs posted to the spreadsheet backend.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionPayload {
    entries: Vec<(String, String)>,
}

impl SubmissionPayload {
    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }

    pub fn to_form_data(&self) -> Result<FormData, wasm_bindgen::JsValue> {
        let form_data = FormData::new()?;
        for (name, value) in &self.entries {
            form_data.append_with_str(name, value)?;
        }
        Ok(form_data)
    }
}

pub fn compose_phone_number(dialing_code: &str, local_number: &str) -> String {
    format!("{} {}", dialing_code, local_number.trim())
}

impl From<ValidatedForm> for SubmissionPayload {
    fn from(form: ValidatedForm) -> Self {
        let values = form.values();
        let phone_input = FieldId::PhoneNumber.input_id();
        let mut entries: Vec<(String, String)> = values
            .entries()
            .into_iter()
            .filter(|(name, _)| !PHONE_SOURCE_FIELDS.iter().any(|id| id.input_id() == *name))
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect();
        entries.push((
            phone_input.to_string(),
            compose_phone_number(form.dialing_code(), &values.phone_number),
        ));
        Self { entries }
    }
}
