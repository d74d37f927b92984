// args.rs - Command line arguments definition

use argh::FromArgs;

/// Default input directory when no argument or config overrides it
pub const DEFAULT_INPUT: &str = "books_data";

/// Default output file when no argument or config overrides it
pub const DEFAULT_OUTPUT: &str = "books.json";

#[derive(FromArgs)]
/// bookmerge - merge per-book JSON files into one sorted catalog
pub struct Args {
    /// input directory containing per-book .json files (default: books_data)
    #[argh(option, default = "String::from(\"books_data\")")]
    pub input: String,

    /// output catalog file (default: books.json)
    #[argh(option, default = "String::from(\"books.json\")")]
    pub output: String,

    /// scan and validate without writing the catalog (dry run)
    #[argh(switch)]
    pub dry_run: bool,

    /// path to TOML configuration file
    #[argh(option)]
    pub config: Option<String>,

    /// generate sample configuration file and exit
    #[argh(switch)]
    pub generate_config: bool,
}
