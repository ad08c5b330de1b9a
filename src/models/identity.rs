//! Synthetic user identity used as load-test input

/// A generated user record, used first to sign up and then to log in
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Identity {
    pub username: String,
    pub password: String,
    pub email: String,
    pub phone: String,
    pub first_name: String,
    pub last_name: String,
}

impl Identity {
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            email: email.into(),
            phone: phone.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }
}
