use anyhow::{Context, Result};
use async_graphql::{Request, Response, Variables};

use crate::graphql::BookGraphSchema;

/// Parse `--variables` JSON, defaulting to no variables
pub fn parse_variables(variables: Option<String>) -> Result<Variables> {
    match variables {
        Some(v) => serde_json::from_str(&v).context("Invalid --variables JSON"),
        None => Ok(Variables::default()),
    }
}

pub async fn execute(schema: &BookGraphSchema, query: &str, variables: Variables) -> Response {
    let request = Request::new(query).variables(variables);
    let response = schema.execute(request).await;
    if response.is_err() {
        tracing::debug!(errors = response.errors.len(), "GraphQL response has errors");
    }
    response
}

pub fn print_response(response: &Response) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(response)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphql::build_schema;
    use crate::storage::MemoryStore;
    use std::sync::Arc;

    #[test]
    fn test_parse_variables() {
        let vars = parse_variables(Some(r#"{"id": "abc"}"#.to_string())).unwrap();
        assert_eq!(vars.get("id"), Some(&async_graphql::Value::from("abc")));
        assert!(parse_variables(None).unwrap().is_empty());
        assert!(parse_variables(Some("not json".to_string())).is_err());
    }

    #[tokio::test]
    async fn test_execute_with_variables() {
        let schema = build_schema(Arc::new(MemoryStore::new()));
        let vars = parse_variables(Some(r#"{"id": "missing"}"#.to_string())).unwrap();
        let response = execute(&schema, "query($id: ID!) { book(id: $id) { id } }", vars).await;
        assert!(response.errors.is_empty());
        assert_eq!(
            response.data.into_json().unwrap(),
            serde_json::json!({ "book": null })
        );
    }
}
