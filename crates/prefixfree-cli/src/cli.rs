use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// PrefixFree: rewrite unprefixed CSS for a host's vendor prefix.
#[derive(Parser, Debug)]
#[command(name = "prefixfree", version, about)]
pub struct Args {
    /// Host profile: a built-in name (legacy-webkit, legacy-gecko,
    /// legacy-ms, modern) or a path to a profile TOML file.
    #[arg(long, global = true, default_value = "legacy-webkit")]
    pub host: String,

    /// Config file path override.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level override (trace, debug, info, warn, error) or a full
    /// filter directive.
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Rewrite stylesheets (stdin when no files are given).
    Css {
        files: Vec<PathBuf>,

        /// Leave selectors and at-rules alone.
        #[arg(long)]
        no_selectors: bool,

        /// Write to this file instead of stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Prefix a property name if the host needs it.
    Property {
        name: String,

        /// Print the style-object key form (`WebkitTransform`).
        #[arg(long)]
        camel: bool,

        /// Prefix even if the host supports the property unprefixed.
        #[arg(long)]
        force: bool,
    },

    /// Rewrite a single value.
    Value {
        value: String,

        /// Property the value is assigned to.
        #[arg(long)]
        property: String,
    },

    /// Resolve a selector to its prefixed spelling.
    Selector { selector: String },

    /// Print the probed capabilities as JSON.
    Probe,
}

pub fn parse() -> Args {
    Args::parse()
}

/// The tracing filter directive for a `--log-level` value. Bare level names
/// are scoped to the prefixfree crates.
pub fn log_directive(level: &str) -> String {
    if level.contains('=') {
        level.to_string()
    } else {
        format!("prefixfree={level}")
    }
}
