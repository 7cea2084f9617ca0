use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Serialize a query document into request parameter blocks
    Render {
        #[arg(long, help = "Query document path (JSON)")]
        query: String,

        #[arg(
            long,
            help = "If specified, writes the blocks to this file instead of stdout"
        )]
        output: Option<String>,

        #[arg(long, help = "Print key=value lines instead of JSON")]
        pairs: bool,

        #[arg(long, help = "Flatten and deduplicate the tree before serializing")]
        simplify: bool,
    },
    /// List catalog fields
    Fields {
        #[arg(long, help = "Only list fields of this category, e.g. AR or FRM")]
        category: Option<String>,
    },
    /// List known event type codes
    Events,
}
