use anyhow::Result;

use crate::graphql::build_schema;

use super::CommandContext;
use super::utils::{execute, parse_variables, print_response};

pub async fn handle_query(
    ctx: CommandContext,
    query: String,
    variables: Option<String>,
) -> Result<()> {
    let schema = build_schema(ctx.store);
    let vars = parse_variables(variables)?;
    let response = execute(&schema, &query, vars).await;
    print_response(&response)
}
