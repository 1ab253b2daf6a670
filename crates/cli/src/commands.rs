use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Compile an AST document into a SQL fragment
    Compile {
        #[arg(long, help = "Path to the JSON AST document (a node or an array of nodes)")]
        input: String,

        #[arg(long, help = "Compiler config file path")]
        config: Option<String>,

        #[arg(long, help = "Dialect name; overrides the config file")]
        dialect: Option<String>,

        #[arg(
            long,
            help = "JSON field map (logical -> column); merged over the config file's map"
        )]
        fields: Option<String>,

        #[arg(long, help = "Maximum page size; overrides the config file")]
        max_records: Option<u64>,

        #[arg(
            long,
            help = "If specified, writes the SQL fragment to this file instead of stdout"
        )]
        output: Option<String>,
    },
    /// List the registered dialects
    Dialects {
        #[arg(long, help = "Print the list as a JSON array")]
        json: bool,
    },
}
