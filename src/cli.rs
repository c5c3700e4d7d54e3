use clap::{command, Command};

/// Builds the CLI. The check takes no flags or subcommands; running the
/// binary performs the full diagnostic.
pub fn build_cli() -> Command {
    command!().about("Verify OpenAI API connectivity and credential validity")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_bare_invocation() {
        let result = build_cli().try_get_matches_from(["llmcheck"]);
        assert!(result.is_ok());
    }

    #[test]
    fn rejects_unknown_flags() {
        let result = build_cli().try_get_matches_from(["llmcheck", "--verbose"]);
        assert!(result.is_err());
    }
}
