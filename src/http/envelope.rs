//! GraphQL request and response envelopes

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Request body: `{"query": ..., "variables": {...}}`
#[derive(Clone, Debug, Serialize)]
pub struct GraphQLRequest {
    pub query: String,
    pub variables: Map<String, Value>,
}

impl GraphQLRequest {
    pub fn new(query: impl Into<String>, variables: Map<String, Value>) -> Self {
        Self {
            query: query.into(),
            variables,
        }
    }
}

/// Response body: `{"data": {...}, "errors": [{"message": ...}]}`
#[derive(Clone, Debug, Default, Deserialize)]
pub struct GraphQLResponse {
    #[serde(default)]
    pub data: Option<Map<String, Value>>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub errors: Vec<GraphQLError>,
}

impl GraphQLResponse {
    /// Message of the first reported error, if any
    pub fn first_error(&self) -> Option<&str> {
        self.errors.first().map(|e| e.message.as_str())
    }
}

#[cfg(test)]
impl GraphQLResponse {
    /// Response carrying only the given error messages
    pub fn with_errors<I, S>(messages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            data: None,
            errors: messages
                .into_iter()
                .map(|m| GraphQLError { message: m.into() })
                .collect(),
        }
    }
}

/// A single entry of the response `errors` list
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct GraphQLError {
    #[serde(default)]
    pub message: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<GraphQLError>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<GraphQLError>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_serialization() {
        let mut variables = Map::new();
        variables.insert("userInput".to_string(), json!({"username": "u"}));
        let request = GraphQLRequest::new("mutation { x }", variables);

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["query"], "mutation { x }");
        assert_eq!(value["variables"]["userInput"]["username"], "u");
    }

    #[test]
    fn test_response_with_errors() {
        let body = r#"{"data":null,"errors":[{"message":"dup"},{"message":"other"}]}"#;
        let response: GraphQLResponse = serde_json::from_str(body).unwrap();

        assert!(response.data.is_none());
        assert_eq!(response.errors.len(), 2);
        assert_eq!(response.first_error(), Some("dup"));
    }

    #[test]
    fn test_response_without_errors() {
        let body = r#"{"data":{"logIn":{"token":"t","user":{"id":"1","username":"u"}}}}"#;
        let response: GraphQLResponse = serde_json::from_str(body).unwrap();

        assert!(response.errors.is_empty());
        let data = response.data.unwrap();
        assert_eq!(data["logIn"]["token"], "t");
    }

    #[test]
    fn test_response_null_errors() {
        let response: GraphQLResponse = serde_json::from_str(r#"{"errors":null}"#).unwrap();
        assert!(response.errors.is_empty());
        assert!(response.first_error().is_none());
    }

    #[test]
    fn test_response_wrong_shape() {
        assert!(serde_json::from_str::<GraphQLResponse>(r#"{"errors":"nope"}"#).is_err());
        assert!(serde_json::from_str::<GraphQLResponse>("<html>").is_err());
    }
}
