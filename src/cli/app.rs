use clap::{Arg, ArgAction, ArgMatches, Command};

pub fn build_cli() -> Command {
    Command::new("winwalk")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Search and switch to open windows by title or process name")
        .long_about("Winwalk enumerates the visible top-level windows, matches them against a partial title or process name, and brings the chosen window to the foreground. Each invocation takes a fresh snapshot; nothing is cached between calls.")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("dry-run")
                .long("dry-run")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Run against a canned window set instead of the OS")
        )
        .subcommand(
            Command::new("list")
                .about("List the open windows in the current snapshot")
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Print the snapshot as JSON")
                )
        )
        .subcommand(
            Command::new("search")
                .about("Search open windows and print scored matches")
                .arg(
                    Arg::new("query")
                        .help("Partial window title or process name (empty matches all)")
                        .index(1)
                )
                .arg(
                    Arg::new("tag")
                        .long("tag")
                        .short('t')
                        .help("Search tag; window results only appear under the reserved tag")
                )
                .arg(
                    Arg::new("limit")
                        .long("limit")
                        .short('n')
                        .value_parser(clap::value_parser!(usize))
                        .help("Show at most this many results")
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Print results as JSON")
                )
        )
        .subcommand(
            Command::new("activate")
                .about("Activate the best-matching window")
                .arg(
                    Arg::new("query")
                        .help("Partial window title or process name")
                        .required(true)
                        .index(1)
                )
        )
}

pub fn get_matches() -> ArgMatches {
    build_cli().get_matches()
}
