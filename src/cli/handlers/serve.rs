use anyhow::Result;
use colored::Colorize;

use crate::graphql::{GRAPHQL_PATH, build_schema, run_server};

use super::CommandContext;

pub async fn handle_serve(ctx: CommandContext) -> Result<()> {
    let schema = build_schema(ctx.store);
    let addr = ctx.config.socket_addr();

    println!(
        "{} GraphQL server on http://{}{}",
        "Starting".green(),
        addr,
        GRAPHQL_PATH
    );
    if ctx.config.graphiql {
        println!("GraphiQL: http://{}{}", addr, GRAPHQL_PATH);
    }

    run_server(schema, addr, ctx.config.graphiql).await?;
    Ok(())
}
