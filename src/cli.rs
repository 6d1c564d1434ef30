use crate::constants::VERSION;
use clap::{Arg, ArgMatches, Command};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputMode {
    Clipboard,
    Stdout,
}

#[derive(Debug)]
pub struct Config {
    pub files: Vec<String>,
    pub description: String,
    pub public: bool,
    pub output_mode: OutputMode,
    pub verbosity: u8,
    pub clipboard_daemon: bool,
}

pub fn build_command() -> Command {
    Command::new("gistclip")
        .version(VERSION)
        .about("Upload files as a single gist and copy its URL to the clipboard")
        .arg(
            Arg::new("files")
                .help("Files to include in the gist")
                .value_name("FILE")
                .num_args(0..)
                .required(false),
        )
        .arg(
            Arg::new("desc")
                .short('d')
                .long("desc")
                .help("Gist description")
                .value_name("TEXT")
                .default_value("")
                .action(clap::ArgAction::Set),
        )
        .arg(
            Arg::new("public")
                .short('p')
                .long("public")
                .help("Whether the gist should be public (listed) instead of secret")
                .value_name("BOOL")
                .num_args(0..=1)
                .require_equals(true)
                .default_value("false")
                .default_missing_value("true")
                .value_parser(clap::value_parser!(bool))
                .action(clap::ArgAction::Set),
        )
        .arg(
            Arg::new("no-clipboard")
                .short('n')
                .long("no-clipboard")
                .help("Print the gist URL to stdout instead of copying it")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Log progress to stderr (-v info, -vv debug); RUST_LOG overrides")
                .action(clap::ArgAction::Count),
        )
        .arg(
            Arg::new("clipboard-daemon")
                .long("clipboard-daemon")
                .hide(true)
                .action(clap::ArgAction::SetTrue),
        )
}

impl Config {
    pub fn from_args() -> Self {
        Self::from_matches(&build_command().get_matches())
    }

    pub fn from_matches(matches: &ArgMatches) -> Self {
        let files: Vec<String> = matches
            .get_many::<String>("files")
            .unwrap_or_default()
            .cloned()
            .collect();

        let output_mode = if matches.get_flag("no-clipboard") {
            OutputMode::Stdout
        } else {
            OutputMode::Clipboard
        };

        Self {
            files,
            description: matches.get_one::<String>("desc").cloned().unwrap_or_default(),
            public: matches.get_one::<bool>("public").copied().unwrap_or(false),
            output_mode,
            verbosity: matches.get_count("verbose"),
            clipboard_daemon: matches.get_flag("clipboard-daemon"),
        }
    }
}
