//! Clap command definition.

use clap::{Arg, ArgAction, Command};

/// Build the CLI command.
pub fn build_cli() -> Command {
    Command::new("lse")
        .about("Top-5 two-keyword OR search over a document corpus")
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Config file (default: lse.toml if present)"),
        )
        .arg(
            Arg::new("docs")
                .long("docs")
                .short('d')
                .help("File listing the documents to index"),
        )
        .arg(
            Arg::new("noise")
                .long("noise")
                .short('n')
                .help("File listing the noise words"),
        )
        .arg(
            Arg::new("limit")
                .long("limit")
                .help("Maximum number of documents returned")
                .value_parser(clap::value_parser!(usize)),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("JSON output mode")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log index construction to stderr")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("init-config")
                .long("init-config")
                .help("Write a default config file (at --config or lse.toml) and exit")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("kw1")
                .help("First keyword (wins frequency ties)")
                .required_unless_present("init-config"),
        )
        .arg(
            Arg::new("kw2")
                .help("Second keyword")
                .required_unless_present("init-config"),
        )
}
