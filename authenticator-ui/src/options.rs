use crate::localize::Localizer;

pub const DEFAULT_DIAL_CODE: &str = "+1";

/// Non-visual settings read by the authenticator views.
#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    pub localizer: Localizer,
    /// Prefix shown in front of phone number inputs and prepended to the stored value.
    pub default_dial_code: String,
}

impl Options {
    pub fn dial_code(mut self, dial_code: impl Into<String>) -> Self {
        self.default_dial_code = dial_code.into();
        self
    }

    pub fn localizer(mut self, localizer: Localizer) -> Self {
        self.localizer = localizer;
        self
    }
}

impl std::default::Default for Options {
    fn default() -> Self {
        Self {
            localizer: Localizer::default(),
            default_dial_code: DEFAULT_DIAL_CODE.to_string(),
        }
    }
}
