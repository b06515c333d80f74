use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "byline",
    about = "byline — users and their posts over GraphQL, backed by one JSON file",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Create an empty state document
    Init(InitArgs),
    /// Serve the GraphQL API and browser client
    Serve(ServeArgs),
}

#[derive(Args)]
pub struct InitArgs {
    /// Where to write the document (default: data.json)
    pub path: Option<String>,
    /// Overwrite an existing document
    #[arg(long)]
    pub force: bool,
}

#[derive(Args)]
pub struct ServeArgs {
    /// Address to bind (default: 127.0.0.1:4000)
    #[arg(long)]
    pub bind: Option<String>,
    /// Path of the JSON state document (default: data.json)
    #[arg(long)]
    pub data: Option<String>,
    /// Read settings from a TOML config file; flags override it
    #[arg(short, long)]
    pub config: Option<String>,
    /// Do not serve the GraphiQL IDE on GET /graphql
    #[arg(long)]
    pub no_graphiql: bool,
}
