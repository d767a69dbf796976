use serde::{Deserialize, Serialize};

/// Contact and delivery details collected on the order form.
///
/// Kept as raw strings while the user types; `is_submittable` is the guard
/// the checkout uses before any order is sent. Normalization to typed values
/// happens in the form layer.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct CustomerDetails {
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub delivery_address: String,
    pub gst_number: Option<String>,
}

impl CustomerDetails {
    /// Required subset for order submission: name, phone, delivery address.
    pub fn is_submittable(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.phone.trim().is_empty()
            && !self.delivery_address.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> CustomerDetails {
        CustomerDetails {
            name: "Asha Traders".into(),
            phone: "+919876543210".into(),
            email: None,
            delivery_address: "Plot 14, MIDC".into(),
            gst_number: None,
        }
    }

    #[test]
    fn requires_name_phone_and_address() {
        assert!(filled().is_submittable());
        for strip in ["name", "phone", "address"] {
            let mut details = filled();
            match strip {
                "name" => details.name = "  ".into(),
                "phone" => details.phone = String::new(),
                _ => details.delivery_address = String::new(),
            }
            assert!(!details.is_submittable(), "missing {strip} must block");
        }
    }
}
