use serde::{Deserialize, Serialize};

/// Address resolved from a postal code (CEP).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostalAddress {
    pub street: String,
    pub district: String,
    pub city: String,
    pub state: String,
}

/// Address part of the add-school form.
///
/// Street, district, city and state are filled from the postal code when it
/// is complete; while they are auto-filled the form locks them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchoolAddressForm {
    pub postal_code: String,
    pub street: String,
    pub number: String,
    pub district: String,
    pub city: String,
    pub state: String,
    pub locked: bool,
}

/// Digits in a complete CEP once the `-` mask is removed.
const POSTAL_CODE_LEN: usize = 8;

impl SchoolAddressForm {
    /// The postal code without its mask, when it is complete.
    pub fn complete_postal_code(&self) -> Option<String> {
        let raw = self.postal_code.replace('-', "");
        (raw.chars().count() == POSTAL_CODE_LEN).then_some(raw)
    }

    /// Applies a lookup result: `Some` fills and locks the fields, `None`
    /// clears and unlocks them.
    pub fn apply_lookup(&mut self, address: Option<PostalAddress>) {
        match address {
            Some(address) => {
                self.street = address.street;
                self.district = address.district;
                self.city = address.city;
                self.state = address.state;
                self.locked = true;
            }
            None => {
                self.street.clear();
                self.district.clear();
                self.city.clear();
                self.state.clear();
                self.locked = false;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complete_postal_code_strips_mask() {
        let form = SchoolAddressForm {
            postal_code: "01310-100".into(),
            ..Default::default()
        };
        assert_eq!(form.complete_postal_code().as_deref(), Some("01310100"));

        let partial = SchoolAddressForm {
            postal_code: "01310-1".into(),
            ..Default::default()
        };
        assert_eq!(partial.complete_postal_code(), None);
    }

    #[test]
    fn clearing_lookup_unlocks_and_empties_fields() {
        let mut form = SchoolAddressForm::default();
        form.apply_lookup(Some(PostalAddress {
            street: "Av. Paulista".into(),
            district: "Bela Vista".into(),
            city: "São Paulo".into(),
            state: "SP".into(),
        }));
        form.number = "1000".into();
        assert!(form.locked);

        form.apply_lookup(None);

        assert!(!form.locked);
        assert!(form.street.is_empty() && form.city.is_empty());
        assert_eq!(form.number, "1000");
    }
}
