//! Login mutation

use serde_json::{json, Map, Value};

use super::{user_input, Operation};
use crate::models::{Identity, OperationKind};

const LOGIN_MUTATION: &str = r#"
    mutation Login($userInput: UserLogIn!) {
        logIn(userInput: $userInput) {
            token
            user {
                id
                username
            }
        }
    }
"#;

/// Logs in with the credentials registered during signup
#[derive(Clone, Copy, Debug, Default)]
pub struct LoginOperation;

impl Operation for LoginOperation {
    fn kind(&self) -> OperationKind {
        OperationKind::Login
    }

    fn query(&self) -> &'static str {
        LOGIN_MUTATION
    }

    fn variables(&self, identity: &Identity) -> Map<String, Value> {
        user_input(json!({
            "username": identity.username,
            "password": identity.password,
        }))
    }
}
