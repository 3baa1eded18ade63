//! Concrete submit actions.

mod reset_password;

pub use reset_password::{
    ResetPasswordFlow, ResetPasswordForm, ResetPasswordRequest, CONFIRMATION_FIELD,
    PASSWORD_FIELD, TOKEN_PARAM,
};
