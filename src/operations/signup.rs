//! Signup mutation

use serde_json::{json, Map, Value};

use super::{user_input, Operation};
use crate::models::{Identity, OperationKind};

const SIGNUP_MUTATION: &str = r#"
    mutation SignUp($userInput: UserSignUp!) {
        signUp(userInput: $userInput) {
            token
            user {
                id
                username
            }
        }
    }
"#;

/// Registers the full identity
#[derive(Clone, Copy, Debug, Default)]
pub struct SignupOperation;

impl Operation for SignupOperation {
    fn kind(&self) -> OperationKind {
        OperationKind::Signup
    }

    fn query(&self) -> &'static str {
        SIGNUP_MUTATION
    }

    // The target API receives PascalCase keys for signup and lowercase keys
    // for login; both are kept as observed.
    fn variables(&self, identity: &Identity) -> Map<String, Value> {
        user_input(json!({
            "Username": identity.username,
            "Password": identity.password,
            "Email": identity.email,
            "Phone": identity.phone,
            "FirstName": identity.first_name,
            "LastName": identity.last_name,
        }))
    }
}
