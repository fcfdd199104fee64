use std::convert::Infallible;

use crate::{
    localize::{self, Localizer},
    theme::Theme,
    widget::Element,
};

use super::validator::{Rule, ValidationState, Validator};

pub const PASSWORD_MIN_LENGTH: usize = 8;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum InputType {
    Text,
    Password,
    Date,
    PhoneNumber,
}

/// Semantic attribute of a sign-up field, it drives default labels, rules and content hints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeType {
    Username,
    Email,
    PhoneNumber,
    Password,
    PasswordConfirmation,
    Birthdate,
    FamilyName,
    GivenName,
    MiddleName,
    Name,
    Nickname,
    PreferredUsername,
    Profile,
    Website,
    Address,
    Gender,
    Custom(String),
}

impl AttributeType {
    /// Key under which the value is submitted.
    pub fn key(&self) -> &str {
        match self {
            Self::Username => "username",
            Self::Email => "email",
            Self::PhoneNumber => "phone_number",
            Self::Password => "password",
            Self::PasswordConfirmation => "password_confirmation",
            Self::Birthdate => "birthdate",
            Self::FamilyName => "family_name",
            Self::GivenName => "given_name",
            Self::MiddleName => "middle_name",
            Self::Name => "name",
            Self::Nickname => "nickname",
            Self::PreferredUsername => "preferred_username",
            Self::Profile => "profile",
            Self::Website => "website",
            Self::Address => "address",
            Self::Gender => "gender",
            Self::Custom(key) => key.as_str(),
        }
    }

    fn label_key(&self) -> Option<&'static str> {
        match self {
            Self::Username => Some("authenticator.field.username.label"),
            Self::Email => Some("authenticator.field.email.label"),
            Self::PhoneNumber => Some("authenticator.field.phoneNumber.label"),
            Self::Password => Some("authenticator.field.password.label"),
            Self::PasswordConfirmation => Some("authenticator.field.confirmPassword.label"),
            Self::Birthdate => Some("authenticator.field.birthDate.label"),
            Self::FamilyName => Some("authenticator.field.familyName.label"),
            Self::GivenName => Some("authenticator.field.givenName.label"),
            Self::MiddleName => Some("authenticator.field.middleName.label"),
            Self::Name => Some("authenticator.field.name.label"),
            Self::Nickname => Some("authenticator.field.nickname.label"),
            Self::PreferredUsername => Some("authenticator.field.preferredUsername.label"),
            Self::Profile => Some("authenticator.field.profile.label"),
            Self::Website => Some("authenticator.field.website.label"),
            Self::Address => Some("authenticator.field.address.label"),
            Self::Gender => Some("authenticator.field.gender.label"),
            Self::Custom(_) => None,
        }
    }

    pub fn default_label(&self, localizer: &Localizer) -> String {
        match self.label_key() {
            Some(key) => localizer.t(key),
            None => self.key().to_string(),
        }
    }

    pub fn content_type(&self) -> Option<ContentType> {
        match self {
            Self::Username | Self::PreferredUsername => Some(ContentType::Username),
            Self::Email => Some(ContentType::EmailAddress),
            Self::PhoneNumber => Some(ContentType::TelephoneNumber),
            Self::Password | Self::PasswordConfirmation => Some(ContentType::Password),
            Self::FamilyName => Some(ContentType::FamilyName),
            Self::GivenName => Some(ContentType::GivenName),
            Self::MiddleName => Some(ContentType::MiddleName),
            Self::Name => Some(ContentType::Name),
            Self::Nickname => Some(ContentType::Nickname),
            Self::Profile | Self::Website => Some(ContentType::Url),
            Self::Address => Some(ContentType::FullStreetAddress),
            Self::Birthdate | Self::Gender | Self::Custom(_) => None,
        }
    }

    pub fn keyboard_type(&self) -> KeyboardType {
        match self {
            Self::Email => KeyboardType::EmailAddress,
            Self::PhoneNumber => KeyboardType::PhonePad,
            Self::Profile | Self::Website => KeyboardType::Url,
            _ => KeyboardType::Default,
        }
    }
}

/// Kind of content a platform can expect in an input, used for autofill.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ContentType {
    Username,
    EmailAddress,
    TelephoneNumber,
    Password,
    NewPassword,
    FamilyName,
    GivenName,
    MiddleName,
    Name,
    Nickname,
    Url,
    FullStreetAddress,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum KeyboardType {
    #[default]
    Default,
    EmailAddress,
    PhonePad,
    Url,
    NumberPad,
    NumbersAndPunctuation,
}

impl KeyboardType {
    /// Adjusts raw input to what the keyboard could have produced.
    pub fn filter(&self, input: &str) -> String {
        match self {
            Self::Default => input.to_string(),
            Self::EmailAddress | Self::Url => input.trim().to_string(),
            // a `+` only counts before the first digit
            Self::PhonePad => input.chars().fold(String::new(), |mut number, c| {
                if c.is_ascii_digit() || (c == '+' && number.is_empty()) {
                    number.push(c);
                }
                number
            }),
            Self::NumberPad => input.chars().filter(|c| c.is_ascii_digit()).collect(),
            Self::NumbersAndPunctuation => input
                .chars()
                .filter(|c| c.is_ascii_digit() || *c == '-')
                .collect(),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct ContentHint {
    pub content_type: Option<ContentType>,
    pub keyboard: KeyboardType,
}

/// The way a field is put on screen, with the descriptor the presentation is built from.
#[derive(Debug, Copy, Clone)]
pub enum Presentation<'a> {
    Text(&'a BaseField),
    Password(&'a BaseField),
    Date(&'a BaseField),
    PhoneNumber(&'a BaseField),
    Custom(&'a CustomField),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseField {
    pub input_type: InputType,
    pub attribute: AttributeType,
    pub label: Option<String>,
    pub placeholder: Option<String>,
    pub is_required: bool,
}

impl BaseField {
    pub fn new(input_type: InputType, attribute: AttributeType) -> Self {
        Self {
            input_type,
            attribute,
            label: None,
            placeholder: None,
            is_required: false,
        }
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn required(mut self, is_required: bool) -> Self {
        self.is_required = is_required;
        self
    }

    pub fn content_hint(&self) -> ContentHint {
        let content_type = match self.input_type {
            InputType::Password => Some(ContentType::NewPassword),
            _ => self.attribute.content_type(),
        };
        let keyboard = match self.input_type {
            InputType::PhoneNumber => KeyboardType::PhonePad,
            InputType::Date => KeyboardType::NumbersAndPunctuation,
            InputType::Text | InputType::Password => self.attribute.keyboard_type(),
        };
        ContentHint {
            content_type,
            keyboard,
        }
    }

    /// Rules every field of this shape starts with.
    pub fn default_rules(&self) -> Vec<Rule> {
        let mut rules = Vec::new();
        if self.is_required {
            rules.push(Rule::Required);
        }
        if self.attribute == AttributeType::Email {
            rules.push(Rule::Email);
        }
        match self.input_type {
            InputType::PhoneNumber => rules.push(Rule::PhoneNumber),
            InputType::Date => rules.push(Rule::Date),
            InputType::Password => rules.push(Rule::MinLength(PASSWORD_MIN_LENGTH)),
            InputType::Text => {}
        }
        rules
    }
}

type ContentFn = dyn for<'a> Fn(&'a str) -> Element<'a, String>;
type ErrorContentFn = dyn Fn(&Theme, String) -> Element<'static, Infallible>;

/// A field whose input and error widgets are supplied by the caller.
///
/// The content receives the current value and emits the new value on edit.
pub struct CustomField {
    /// Key under which the value is submitted.
    pub key: String,
    pub label: Option<String>,
    pub is_required: bool,
    content: Box<ContentFn>,
    error_content: Box<ErrorContentFn>,
}

impl CustomField {
    pub fn new<F>(key: impl Into<String>, content: F) -> Self
    where
        F: for<'a> Fn(&'a str) -> Element<'a, String> + 'static,
    {
        Self {
            key: key.into(),
            label: None,
            is_required: false,
            content: Box::new(content),
            error_content: Box::new(
                |theme: &Theme, message: String| -> Element<'static, Infallible> {
                    super::text::subheadline(theme, message).into()
                },
            ),
        }
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn required(mut self, is_required: bool) -> Self {
        self.is_required = is_required;
        self
    }

    /// Sets the widget showing a validation error. It only displays the message, so it cannot
    /// produce messages. It receives the theme the field is rendered with.
    pub fn error_content<F>(mut self, error_content: F) -> Self
    where
        F: Fn(&Theme, String) -> Element<'static, Infallible> + 'static,
    {
        self.error_content = Box::new(error_content);
        self
    }

    pub fn content<'a>(&self, value: &'a str) -> Element<'a, String> {
        (self.content)(value)
    }

    pub fn error<'a>(&self, theme: &Theme, message: String) -> Element<'a, Infallible> {
        (self.error_content)(theme, message)
    }
}

impl std::fmt::Debug for CustomField {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("CustomField")
            .field("key", &self.key)
            .field("label", &self.label)
            .field("is_required", &self.is_required)
            .finish()
    }
}

#[derive(Debug)]
pub enum Field {
    Base(BaseField),
    Custom(CustomField),
}

impl Field {
    pub fn username() -> Self {
        Self::Base(BaseField::new(InputType::Text, AttributeType::Username).required(true))
    }

    pub fn email(is_required: bool) -> Self {
        Self::Base(BaseField::new(InputType::Text, AttributeType::Email).required(is_required))
    }

    pub fn phone_number(is_required: bool) -> Self {
        Self::Base(
            BaseField::new(InputType::PhoneNumber, AttributeType::PhoneNumber)
                .required(is_required),
        )
    }

    pub fn password() -> Self {
        Self::Base(BaseField::new(InputType::Password, AttributeType::Password).required(true))
    }

    pub fn confirm_password() -> Self {
        Self::Base(
            BaseField::new(InputType::Password, AttributeType::PasswordConfirmation)
                .required(true),
        )
    }

    pub fn birthdate(is_required: bool) -> Self {
        Self::Base(
            BaseField::new(InputType::Date, AttributeType::Birthdate)
                .placeholder("YYYY-MM-DD")
                .required(is_required),
        )
    }

    pub fn text(attribute: AttributeType, is_required: bool) -> Self {
        Self::Base(BaseField::new(InputType::Text, attribute).required(is_required))
    }

    pub fn custom(field: CustomField) -> Self {
        Self::Custom(field)
    }

    pub fn presentation(&self) -> Presentation<'_> {
        match self {
            Self::Custom(custom) => Presentation::Custom(custom),
            Self::Base(base) => match base.input_type {
                InputType::Text => Presentation::Text(base),
                InputType::Password => Presentation::Password(base),
                InputType::Date => Presentation::Date(base),
                InputType::PhoneNumber => Presentation::PhoneNumber(base),
            },
        }
    }

    pub fn is_required(&self) -> bool {
        match self {
            Self::Base(base) => base.is_required,
            Self::Custom(custom) => custom.is_required,
        }
    }

    /// Label the field was configured with, without the optional marker.
    pub fn label(&self) -> Option<&str> {
        match self {
            Self::Base(base) => base.label.as_deref(),
            Self::Custom(custom) => custom.label.as_deref(),
        }
    }

    /// Label shown above the input. Base fields fall back to the attribute name, custom fields
    /// without a label show none.
    pub fn displayed_label(&self, localizer: &Localizer) -> Option<String> {
        let label = match self {
            Self::Base(base) => Some(
                base.label
                    .clone()
                    .unwrap_or_else(|| base.attribute.default_label(localizer)),
            ),
            Self::Custom(custom) => custom.label.clone(),
        }?;
        if self.is_required() {
            Some(label)
        } else {
            Some(format!("{} {}", label, localizer.t(localize::OPTIONAL_MARKER)))
        }
    }

    pub fn content_hint(&self) -> ContentHint {
        match self {
            Self::Base(base) => base.content_hint(),
            Self::Custom(_) => ContentHint::default(),
        }
    }

    pub fn key(&self) -> &str {
        match self {
            Self::Base(base) => base.attribute.key(),
            Self::Custom(custom) => &custom.key,
        }
    }
}

/// A field of the sign-up form together with its current value and validator.
#[derive(Debug)]
pub struct SignUpField {
    pub field: Field,
    value: String,
    validator: Validator,
}

impl SignUpField {
    pub fn new(field: Field) -> Self {
        let rules = match &field {
            Field::Base(base) => base.default_rules(),
            Field::Custom(custom) if custom.is_required => vec![Rule::Required],
            Field::Custom(_) => Vec::new(),
        };
        Self::with_validator(field, Validator::new(rules))
    }

    pub fn with_validator(field: Field, mut validator: Validator) -> Self {
        validator.bind();
        Self {
            field,
            value: String::new(),
            validator,
        }
    }

    /// Adds a rule checked after the default ones.
    pub fn rule(mut self, rule: Rule) -> Self {
        self.validator = std::mem::take(&mut self.validator).with_rule(rule);
        self
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn validator(&self) -> &Validator {
        &self.validator
    }

    pub fn validator_mut(&mut self) -> &mut Validator {
        &mut self.validator
    }

    /// Commits a new value and validates it afterwards.
    ///
    /// Returns false and leaves the validator untouched if the value did not change.
    pub fn set_value(&mut self, value: String) -> bool {
        if value == self.value {
            return false;
        }
        tracing::debug!("Field '{}' value changed", self.field.key());
        self.value = value;
        self.validator.validate(&self.value);
        true
    }

    pub fn validate(&mut self) -> bool {
        self.validator.validate(&self.value)
    }

    /// Error to show under the input, with the label substituted into the message.
    pub fn error_message(&self, localizer: &Localizer) -> Option<String> {
        match self.validator.state() {
            ValidationState::Error(Some(message)) => {
                let label = self
                    .field
                    .label()
                    .map(str::to_string)
                    .or_else(|| match &self.field {
                        Field::Base(base) => Some(base.attribute.default_label(localizer)),
                        Field::Custom(_) => None,
                    })
                    .unwrap_or_else(|| localizer.t(localize::FIELD_NOUN));
                Some(localize::format_message(&localizer.t(message), &label))
            }
            ValidationState::Error(None) | ValidationState::Normal => None,
        }
    }

    pub fn foreground_color(&self, theme: &Theme) -> iced::Color {
        match self.validator.state() {
            ValidationState::Normal => theme.colors.foreground.secondary,
            ValidationState::Error(_) => theme.colors.foreground.error,
        }
    }
}

/// The fields of a sign-up form, in display order.
#[derive(Debug, Default)]
pub struct SignUpForm {
    pub fields: Vec<SignUpField>,
}

impl SignUpForm {
    pub fn new(fields: impl IntoIterator<Item = Field>) -> Self {
        Self {
            fields: fields.into_iter().map(SignUpField::new).collect(),
        }
    }

    pub fn set_value(&mut self, index: usize, value: String) -> bool {
        match self.fields.get_mut(index) {
            Some(field) => field.set_value(value),
            None => {
                tracing::warn!("No sign-up field at index {}", index);
                false
            }
        }
    }

    /// Validates every field, even after a first failure, so that all errors show at once.
    pub fn validate_all(&mut self) -> bool {
        self.fields
            .iter_mut()
            .map(|field| field.validate())
            .fold(true, |valid, field_valid| valid && field_valid)
    }

    pub fn values(&self) -> Vec<(String, String)> {
        self.fields
            .iter()
            .map(|field| (field.field.key().to_string(), field.value().to_string()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::validator::{INVALID_EMAIL, REQUIRED};
    use std::cell::Cell;
    use std::rc::Rc;

    fn plain(key: &str) -> CustomField {
        CustomField::new(key, |value| iced::widget::text(value).into())
    }

    fn nickname_field(label: Option<&str>) -> SignUpField {
        let mut custom = plain("nickname");
        if let Some(label) = label {
            custom = custom.label(label);
        }
        let mut field = SignUpField::new(Field::custom(custom));
        field.validator_mut().set_error(Some("You must fill %@".to_string()));
        field
    }

    #[test]
    fn dispatch_is_exhaustive() {
        let username = Field::username();
        assert!(matches!(
            username.presentation(),
            Presentation::Text(base) if base.attribute == AttributeType::Username
        ));
        assert!(matches!(
            Field::password().presentation(),
            Presentation::Password(_)
        ));
        assert!(matches!(
            Field::birthdate(false).presentation(),
            Presentation::Date(_)
        ));
        assert!(matches!(
            Field::phone_number(true).presentation(),
            Presentation::PhoneNumber(_)
        ));
        let custom = Field::custom(plain("nickname"));
        assert!(matches!(
            custom.presentation(),
            Presentation::Custom(custom) if custom.key == "nickname"
        ));
    }

    #[test]
    fn password_content_type_ignores_attribute() {
        for attribute in [
            AttributeType::Password,
            AttributeType::PasswordConfirmation,
            AttributeType::Email,
            AttributeType::Custom("pin".to_string()),
        ] {
            let field = BaseField::new(InputType::Password, attribute);
            assert_eq!(
                field.content_hint().content_type,
                Some(ContentType::NewPassword)
            );
        }
    }

    #[test]
    fn content_hint_follows_attribute() {
        let email = Field::email(true).content_hint();
        assert_eq!(email.content_type, Some(ContentType::EmailAddress));
        assert_eq!(email.keyboard, KeyboardType::EmailAddress);

        let phone = Field::phone_number(true).content_hint();
        assert_eq!(phone.content_type, Some(ContentType::TelephoneNumber));
        assert_eq!(phone.keyboard, KeyboardType::PhonePad);

        let website = Field::text(AttributeType::Website, false).content_hint();
        assert_eq!(website.content_type, Some(ContentType::Url));
        assert_eq!(website.keyboard, KeyboardType::Url);

        let gender = Field::text(AttributeType::Gender, false).content_hint();
        assert_eq!(gender.content_type, None);
        assert_eq!(gender.keyboard, KeyboardType::Default);
    }

    #[test]
    fn test_keyboard_filter() {
        assert_eq!(KeyboardType::PhonePad.filter("+1 (555) 12-34"), "+15551234");
        assert_eq!(KeyboardType::PhonePad.filter("55+5"), "555");
        assert_eq!(KeyboardType::PhonePad.filter(" +33612345678"), "+33612345678");
        assert_eq!(KeyboardType::PhonePad.filter("(+1) 555"), "+1555");
        assert_eq!(KeyboardType::EmailAddress.filter(" a@b.c "), "a@b.c");
        assert_eq!(KeyboardType::NumberPad.filter("19a9"), "199");
        assert_eq!(
            KeyboardType::NumbersAndPunctuation.filter("1990-0a2"),
            "1990-02"
        );
        assert_eq!(
            KeyboardType::NumbersAndPunctuation.filter("28/02.1990"),
            "28021990"
        );
        assert_eq!(KeyboardType::Default.filter(" x "), " x ");
    }

    #[test]
    fn value_change_validates_exactly_once() {
        let calls = Rc::new(Cell::new(0));
        let counter = calls.clone();
        let mut field = SignUpField::new(Field::custom(
            plain("nickname").label("Nickname"),
        ))
        .rule(Rule::custom(move |_| {
            counter.set(counter.get() + 1);
            None
        }));

        // initial bind
        assert!(field.validator().is_bound());
        assert_eq!(calls.get(), 0);

        assert!(field.set_value("neo".to_string()));
        assert_eq!(calls.get(), 1);
        assert_eq!(field.value(), "neo");

        assert!(!field.set_value("neo".to_string()));
        assert_eq!(calls.get(), 1);

        assert!(field.set_value("trinity".to_string()));
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn validation_sees_committed_value() {
        let mut field = SignUpField::new(Field::custom(
            plain("nickname").required(true),
        ));
        field.set_value("x".to_string());
        assert!(field.validator().is_valid());
        field.set_value(String::new());
        assert_eq!(
            field.validator().state(),
            &ValidationState::Error(Some(REQUIRED.to_string()))
        );
    }

    #[test]
    fn error_message_uses_label() {
        let field = nickname_field(Some("Nickname"));
        assert_eq!(
            field.error_message(&Localizer::english()).as_deref(),
            Some("You must fill Nickname")
        );
    }

    #[test]
    fn error_message_without_label_uses_generic_noun() {
        let field = nickname_field(None);
        assert_eq!(
            field.error_message(&Localizer::english()).as_deref(),
            Some("You must fill field")
        );
        let localizer = Localizer::english().with_overrides([(localize::FIELD_NOUN, "champ")]);
        assert_eq!(
            field.error_message(&localizer).as_deref(),
            Some("You must fill champ")
        );
    }

    #[test]
    fn no_error_message_without_message() {
        let mut field = nickname_field(Some("Nickname"));
        field.validator_mut().set_error(None);
        assert_eq!(field.error_message(&Localizer::english()), None);
        field.validator_mut().reset();
        assert_eq!(field.error_message(&Localizer::english()), None);
    }

    #[test]
    fn base_field_error_message_is_localized() {
        let mut field = SignUpField::new(Field::email(true));
        field.set_value("not an email".to_string());
        assert_eq!(
            field.validator().state(),
            &ValidationState::Error(Some(INVALID_EMAIL.to_string()))
        );
        assert_eq!(
            field.error_message(&Localizer::english()).as_deref(),
            Some("Please enter a valid email")
        );
        field.set_value(String::new());
        assert_eq!(
            field.error_message(&Localizer::english()).as_deref(),
            Some("Email is required")
        );
    }

    #[test]
    fn label_color_follows_validator() {
        let theme = Theme::light();
        let mut field = nickname_field(Some("Nickname"));
        assert_eq!(field.foreground_color(&theme), theme.colors.foreground.error);
        field.validator_mut().reset();
        assert_eq!(
            field.foreground_color(&theme),
            theme.colors.foreground.secondary
        );
    }

    #[test]
    fn test_displayed_label() {
        let localizer = Localizer::english();
        assert_eq!(
            Field::email(true).displayed_label(&localizer).as_deref(),
            Some("Email")
        );
        assert_eq!(
            Field::phone_number(false)
                .displayed_label(&localizer)
                .as_deref(),
            Some("Phone Number (optional)")
        );
        assert_eq!(
            Field::Base(
                BaseField::new(InputType::Text, AttributeType::Name)
                    .label("Full name")
                    .required(true)
            )
            .displayed_label(&localizer)
            .as_deref(),
            Some("Full name")
        );
        let custom = Field::custom(plain("nickname"));
        assert_eq!(custom.displayed_label(&localizer), None);
    }

    #[test]
    fn test_default_rules() {
        let rules = |field: Field| match field {
            Field::Base(base) => format!("{:?}", base.default_rules()),
            Field::Custom(_) => unreachable!(),
        };
        assert_eq!(rules(Field::email(true)), "[Required, Email]");
        assert_eq!(rules(Field::email(false)), "[Email]");
        assert_eq!(rules(Field::phone_number(true)), "[Required, PhoneNumber]");
        assert_eq!(rules(Field::birthdate(false)), "[Date]");
        assert_eq!(rules(Field::password()), "[Required, MinLength(8)]");
    }

    #[test]
    fn unlabeled_custom_fields_keep_their_keys() {
        let mut form = SignUpForm::new([
            Field::custom(plain("pet_name")),
            Field::custom(plain("favorite_color")),
        ]);
        form.fields[0].set_value("rex".to_string());
        form.fields[1].set_value("blue".to_string());
        assert_eq!(
            form.values(),
            vec![
                ("pet_name".to_string(), "rex".to_string()),
                ("favorite_color".to_string(), "blue".to_string()),
            ]
        );
    }

    #[test]
    fn form_validates_every_field() {
        let mut form = SignUpForm::new([
            Field::username(),
            Field::email(true),
            Field::birthdate(false),
        ]);
        assert!(!form.validate_all());
        assert!(!form.fields[0].validator().is_valid());
        assert!(!form.fields[1].validator().is_valid());
        assert!(form.fields[2].validator().is_valid());

        assert!(form.set_value(0, "neo".to_string()));
        assert!(form.set_value(1, "neo@matrix.io".to_string()));
        assert!(!form.set_value(7, "out of range".to_string()));
        assert!(form.validate_all());
        assert_eq!(
            form.values(),
            vec![
                ("username".to_string(), "neo".to_string()),
                ("email".to_string(), "neo@matrix.io".to_string()),
                ("birthdate".to_string(), String::new()),
            ]
        );
    }
}
