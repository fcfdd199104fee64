use chrono::NaiveDate;
use email_address::EmailAddress;

pub const REQUIRED: &str = "authenticator.validator.required";
pub const INVALID_EMAIL: &str = "authenticator.validator.email";
pub const INVALID_PHONE_NUMBER: &str = "authenticator.validator.phoneNumber";
pub const INVALID_DATE: &str = "authenticator.validator.date";
pub const TOO_SHORT: &str = "authenticator.validator.minLength";

pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ValidationState {
    #[default]
    Normal,
    /// The message is a localization key or a literal template; a `%@` in it stands for the
    /// field label.
    Error(Option<String>),
}

pub enum Rule {
    Required,
    Email,
    PhoneNumber,
    Date,
    MinLength(usize),
    /// Returns the error message for an invalid value.
    Custom(Box<dyn Fn(&str) -> Option<String>>),
}

impl Rule {
    pub fn custom<F>(f: F) -> Self
    where
        F: Fn(&str) -> Option<String> + 'static,
    {
        Rule::Custom(Box::new(f))
    }

    /// Returns the error message if `value` breaks the rule.
    ///
    /// Only `Required` and `Custom` look at empty values, the format rules leave them to
    /// `Required`.
    pub fn check(&self, value: &str) -> Option<String> {
        match self {
            Rule::Required => value.trim().is_empty().then(|| REQUIRED.to_string()),
            Rule::Custom(f) => f(value),
            _ if value.is_empty() => None,
            Rule::Email => {
                (!EmailAddress::is_valid(value.trim())).then(|| INVALID_EMAIL.to_string())
            }
            Rule::PhoneNumber => {
                (!is_phone_number(value)).then(|| INVALID_PHONE_NUMBER.to_string())
            }
            Rule::Date => (!is_date(value)).then(|| INVALID_DATE.to_string()),
            Rule::MinLength(min) => {
                (value.chars().count() < *min).then(|| TOO_SHORT.to_string())
            }
        }
    }
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Required => write!(f, "Required"),
            Self::Email => write!(f, "Email"),
            Self::PhoneNumber => write!(f, "PhoneNumber"),
            Self::Date => write!(f, "Date"),
            Self::MinLength(min) => write!(f, "MinLength({})", min),
            Self::Custom(_) => write!(f, "Custom"),
        }
    }
}

/// A `+` followed by 7 to 15 digits.
pub fn is_phone_number(value: &str) -> bool {
    match value.strip_prefix('+') {
        Some(digits) => {
            (7..=15).contains(&digits.len()) && digits.chars().all(|c| c.is_ascii_digit())
        }
        None => false,
    }
}

pub fn is_date(value: &str) -> bool {
    value.len() == 10 && NaiveDate::parse_from_str(value, DATE_FORMAT).is_ok()
}

/// Validation outcome of one field.
///
/// A validator does nothing until it is bound to its field value: the first bind happens when
/// the field is created and never validates by itself. From then on every call to
/// [`Validator::validate`] re-evaluates the rules in order and keeps the first failure.
#[derive(Debug, Default)]
pub struct Validator {
    rules: Vec<Rule>,
    state: ValidationState,
    bound: bool,
}

impl Validator {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self {
            rules,
            state: ValidationState::Normal,
            bound: false,
        }
    }

    pub fn with_rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn bind(&mut self) {
        self.bound = true;
    }

    pub fn is_bound(&self) -> bool {
        self.bound
    }

    pub fn state(&self) -> &ValidationState {
        &self.state
    }

    pub fn is_valid(&self) -> bool {
        self.state == ValidationState::Normal
    }

    /// Re-evaluates the rules against `value` and returns whether it is valid.
    pub fn validate(&mut self, value: &str) -> bool {
        if !self.bound {
            tracing::debug!("Skipping validation of an unbound field");
            return self.is_valid();
        }

        let state = self
            .rules
            .iter()
            .find_map(|rule| rule.check(value))
            .map(|message| ValidationState::Error(Some(message)))
            .unwrap_or_default();

        if state != self.state {
            tracing::debug!("Validation state changed: {:?} -> {:?}", self.state, state);
            self.state = state;
        }
        self.is_valid()
    }

    /// Puts the validator in error, for failures reported outside of the rules (a server-side
    /// rejection for instance).
    pub fn set_error(&mut self, message: Option<String>) {
        self.state = ValidationState::Error(message);
    }

    pub fn reset(&mut self) {
        self.state = ValidationState::Normal;
    }
}
