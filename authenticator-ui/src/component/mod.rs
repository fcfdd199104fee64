pub mod button;
pub mod field;
pub mod form;
pub mod sign_up;
pub mod text;
pub mod validator;

pub use field::{Field, SignUpField, SignUpForm};
pub use sign_up::sign_up_input_field;
pub use validator::{Rule, ValidationState, Validator};
