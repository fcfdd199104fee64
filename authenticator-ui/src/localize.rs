use std::collections::HashMap;

/// Generic noun used in validation messages when a field has no label.
pub const FIELD_NOUN: &str = "authenticator.validator.field";
pub const OPTIONAL_MARKER: &str = "authenticator.field.optional";

const ENGLISH: &[(&str, &str)] = &[
    (FIELD_NOUN, "field"),
    (OPTIONAL_MARKER, "(optional)"),
    ("authenticator.field.username.label", "Username"),
    ("authenticator.field.email.label", "Email"),
    ("authenticator.field.phoneNumber.label", "Phone Number"),
    ("authenticator.field.password.label", "Password"),
    ("authenticator.field.confirmPassword.label", "Confirm Password"),
    ("authenticator.field.birthDate.label", "Birthdate"),
    ("authenticator.field.familyName.label", "Family Name"),
    ("authenticator.field.givenName.label", "Given Name"),
    ("authenticator.field.middleName.label", "Middle Name"),
    ("authenticator.field.name.label", "Name"),
    ("authenticator.field.nickname.label", "Nickname"),
    ("authenticator.field.preferredUsername.label", "Preferred Username"),
    ("authenticator.field.profile.label", "Profile"),
    ("authenticator.field.website.label", "Website"),
    ("authenticator.field.address.label", "Address"),
    ("authenticator.field.gender.label", "Gender"),
    ("authenticator.validator.required", "%@ is required"),
    ("authenticator.validator.email", "Please enter a valid email"),
    ("authenticator.validator.phoneNumber", "Please enter a valid phone number"),
    ("authenticator.validator.date", "Please enter a date as YYYY-MM-DD"),
    ("authenticator.validator.minLength", "%@ is too short"),
];

/// Looks up user-facing strings by key.
///
/// Unknown keys resolve to the key itself, so a missing translation shows up on screen instead
/// of an empty label.
#[derive(Debug, Clone, PartialEq)]
pub struct Localizer {
    entries: HashMap<String, String>,
}

impl Localizer {
    pub fn english() -> Self {
        Self {
            entries: ENGLISH
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    pub fn t(&self, key: &str) -> String {
        self.entries
            .get(key)
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }

    pub fn has_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn with_overrides<K, V>(mut self, overrides: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        for (k, v) in overrides {
            self.insert(k, v);
        }
        self
    }
}

impl std::default::Default for Localizer {
    fn default() -> Self {
        Self::english()
    }
}

/// Replaces the first `%@` of a message template with `label`.
pub fn format_message(template: &str, label: &str) -> String {
    template.replacen("%@", label, 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_key_falls_back_to_key() {
        let localizer = Localizer::english();
        assert_eq!(localizer.t(FIELD_NOUN), "field");
        assert_eq!(localizer.t("authenticator.unknown"), "authenticator.unknown");
        assert!(!localizer.has_key("authenticator.unknown"));
    }

    #[test]
    fn overrides_replace_entries() {
        let localizer =
            Localizer::english().with_overrides([(FIELD_NOUN, "champ"), ("extra", "value")]);
        assert_eq!(localizer.t(FIELD_NOUN), "champ");
        assert_eq!(localizer.t("extra"), "value");
    }

    #[test]
    fn test_format_message() {
        assert_eq!(
            format_message("You must fill %@", "Nickname"),
            "You must fill Nickname"
        );
        assert_eq!(format_message("%@ and %@", "a"), "a and %@");
        assert_eq!(format_message("No placeholder", "a"), "No placeholder");
    }
}
