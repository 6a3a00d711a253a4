//! Command-line argument parsing.

/// Parsed CLI command to execute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Run the API test harness and exit
    ApiTest,
    /// Run the TUI application (default)
    RunTui,
}

/// Parsed command-line arguments.
#[derive(Debug, Clone, PartialEq)]
pub struct CliArgs {
    pub command: CliCommand,
    /// Backend base URL override (`--base-url <url>`)
    pub base_url: Option<String>,
    /// Verbose logging (`--debug`)
    pub debug: bool,
}

impl Default for CliArgs {
    fn default() -> Self {
        Self {
            command: CliCommand::RunTui,
            base_url: None,
            debug: false,
        }
    }
}

/// Parse command-line arguments.
///
/// Unknown flags are ignored rather than rejected; the first recognized
/// command flag wins.
pub fn parse_args<I>(args: I) -> CliArgs
where
    I: Iterator<Item = String>,
{
    let mut parsed = CliArgs::default();
    let mut args = args.skip(1); // program name

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => {
                parsed.command = CliCommand::Version;
                return parsed;
            }
            "--api-test" => parsed.command = CliCommand::ApiTest,
            "--base-url" => {
                if let Some(url) = args.next() {
                    parsed.base_url = Some(url);
                }
            }
            "--debug" => parsed.debug = true,
            _ => {}
        }
    }

    parsed
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliArgs {
        let owned: Vec<String> = std::iter::once("nusarasa")
            .chain(args.iter().copied())
            .map(String::from)
            .collect();
        parse_args(owned.into_iter())
    }

    #[test]
    fn test_parse_version_flag() {
        assert_eq!(parse(&["--version"]).command, CliCommand::Version);
        assert_eq!(parse(&["-V"]).command, CliCommand::Version);
    }

    #[test]
    fn test_parse_api_test_flag() {
        assert_eq!(parse(&["--api-test"]).command, CliCommand::ApiTest);
    }

    #[test]
    fn test_parse_base_url() {
        let args = parse(&["--api-test", "--base-url", "http://10.0.0.5:8000"]);
        assert_eq!(args.command, CliCommand::ApiTest);
        assert_eq!(args.base_url.as_deref(), Some("http://10.0.0.5:8000"));
    }

    #[test]
    fn test_parse_debug_flag() {
        assert!(parse(&["--debug"]).debug);
    }

    #[test]
    fn test_parse_no_args_runs_tui() {
        assert_eq!(parse(&[]).command, CliCommand::RunTui);
    }

    #[test]
    fn test_unknown_flag_is_ignored() {
        assert_eq!(parse(&["--unknown"]).command, CliCommand::RunTui);
    }
}
