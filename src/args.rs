use clap::{value_parser, Arg, ArgAction, Command};

/// Build the command-line interface for the `strassen` binary
pub fn build_command() -> Command {
    Command::new("strassen")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Multiply random square matrices with recursive and Strassen algorithms")
        .arg(
            Arg::new("size")
                .short('s')
                .long("size")
                .help("Matrix size (must be a power of 2)")
                .value_name("N")
                .value_parser(value_parser!(usize))
                .default_value("8"),
        )
        .arg(
            Arg::new("algorithm")
                .short('a')
                .long("algorithm")
                .help("Which multiplication to run")
                .value_parser(["recursive", "strassen", "both"])
                .default_value("both"),
        )
        .arg(
            Arg::new("print")
                .short('p')
                .long("print")
                .help("Print input and result matrices")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .help("Seed for the random number generator")
                .value_name("SEED")
                .value_parser(value_parser!(u64)),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .help("Quiet mode - no output")
                .action(ArgAction::SetTrue),
        )
}

pub fn parse_args() -> clap::ArgMatches {
    build_command().get_matches()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let matches = build_command().get_matches_from(["strassen"]);
        assert_eq!(matches.get_one::<usize>("size"), Some(&8));
        assert_eq!(
            matches.get_one::<String>("algorithm").map(String::as_str),
            Some("both")
        );
        assert!(!matches.get_flag("print"));
        assert!(matches.get_one::<u64>("seed").is_none());
    }

    #[test]
    fn test_rejects_unknown_algorithm() {
        let result = build_command().try_get_matches_from(["strassen", "-a", "winograd"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_rejects_non_numeric_size() {
        let result = build_command().try_get_matches_from(["strassen", "--size", "big"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_command_is_consistent() {
        build_command().debug_assert();
    }
}
