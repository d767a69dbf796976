use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::domain::customer::CustomerDetails;
use crate::domain::types::{PhoneNumber, TypeConstraintError, normalize_phone_to_e164};

fn validate_phone(value: &str) -> Result<(), ValidationError> {
    normalize_phone_to_e164(value).map_err(|_| ValidationError::new("phone"))?;
    Ok(())
}

#[derive(Deserialize, Validate)]
/// Contact and delivery fields of the Details step.
pub struct CustomerDetailsForm {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(custom(function = "validate_phone"))]
    pub phone: String,
    #[validate(email)]
    pub email: Option<String>,
    #[validate(length(min = 1))]
    pub delivery_address: String,
    pub gst_number: Option<String>,
}

impl CustomerDetailsForm {
    /// Converts the validated form into details with a normalized phone.
    pub fn into_details(self) -> Result<CustomerDetails, TypeConstraintError> {
        let phone = PhoneNumber::new(self.phone)?;
        Ok(CustomerDetails {
            name: self.name.trim().to_string(),
            phone: phone.into_inner(),
            email: self
                .email
                .map(|s| s.trim().to_lowercase())
                .filter(|s| !s.is_empty()),
            delivery_address: self.delivery_address.trim().to_string(),
            gst_number: self
                .gst_number
                .map(|s| s.trim().to_uppercase())
                .filter(|s| !s.is_empty()),
        })
    }
}

#[derive(Deserialize, Validate, Default)]
/// Manual delivery-location entry for the transport estimator.
pub struct TransportLocationForm {
    #[validate(length(min = 1))]
    pub address: String,
    pub landmark: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> CustomerDetailsForm {
        CustomerDetailsForm {
            name: " Asha Traders ".into(),
            phone: "+91 98765 43210".into(),
            email: Some("Accounts@Asha.example".into()),
            delivery_address: "Plot 14, MIDC".into(),
            gst_number: Some("27aapfu0939f1zv".into()),
        }
    }

    #[test]
    fn valid_form_normalizes_fields() {
        let details = form().into_details().expect("valid form");
        assert_eq!(details.name, "Asha Traders");
        assert_eq!(details.phone, "+919876543210");
        assert_eq!(details.email.as_deref(), Some("accounts@asha.example"));
        assert_eq!(details.gst_number.as_deref(), Some("27AAPFU0939F1ZV"));
    }

    #[test]
    fn bad_phone_fails_validation() {
        let mut bad = form();
        bad.phone = "not-a-number".into();
        assert!(bad.validate().is_err());
    }

    #[test]
    fn empty_name_fails_validation() {
        let mut bad = form();
        bad.name = String::new();
        assert!(bad.validate().is_err());
    }
}
