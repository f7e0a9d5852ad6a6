use crate::catalog::DEFAULT_PREVIEW_ROWS;

/// A parsed workbench command. Lines starting with `\` are commands;
/// everything else is handed to the executor as SQL.
#[derive(Debug, Clone, PartialEq)]
pub enum ReplCommand {
    Tables,
    Preview { table: String, limit: usize },
    Template(usize),
    Help,
    Quit,
}

impl ReplCommand {
    /// Parse a backslash command line. `Err` carries a user-facing message
    /// for unknown commands or malformed arguments.
    pub fn parse(line: &str) -> Result<ReplCommand, String> {
        let mut parts = line.split_whitespace();
        let head = parts.next().unwrap_or("");

        let command = match head {
            "\\tables" | "\\t" => ReplCommand::Tables,
            "\\preview" | "\\p" => {
                let table = parts
                    .next()
                    .ok_or_else(|| "usage: \\preview <table> [limit]".to_string())?
                    .to_string();
                let limit = match parts.next() {
                    Some(raw) => raw
                        .parse()
                        .map_err(|_| format!("invalid limit: {raw}"))?,
                    None => DEFAULT_PREVIEW_ROWS,
                };
                ReplCommand::Preview { table, limit }
            }
            "\\template" => {
                let raw = parts
                    .next()
                    .ok_or_else(|| "usage: \\template <number>".to_string())?;
                let number = raw
                    .parse()
                    .map_err(|_| format!("invalid template number: {raw}"))?;
                ReplCommand::Template(number)
            }
            "\\help" | "\\?" => ReplCommand::Help,
            "\\quit" | "\\q" => ReplCommand::Quit,
            other => return Err(format!("unknown command {other}; try \\help")),
        };

        if let Some(extra) = parts.next() {
            return Err(format!("unexpected argument: {extra}"));
        }
        Ok(command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_commands_and_aliases() {
        assert_eq!(ReplCommand::parse("\\tables").unwrap(), ReplCommand::Tables);
        assert_eq!(ReplCommand::parse("\\t").unwrap(), ReplCommand::Tables);
        assert_eq!(ReplCommand::parse("\\help").unwrap(), ReplCommand::Help);
        assert_eq!(ReplCommand::parse("\\?").unwrap(), ReplCommand::Help);
        assert_eq!(ReplCommand::parse("\\q").unwrap(), ReplCommand::Quit);
    }

    #[test]
    fn test_parse_preview_with_default_and_explicit_limit() {
        assert_eq!(
            ReplCommand::parse("\\preview Orders").unwrap(),
            ReplCommand::Preview {
                table: "Orders".to_string(),
                limit: DEFAULT_PREVIEW_ROWS,
            }
        );
        assert_eq!(
            ReplCommand::parse("\\p Orders 10").unwrap(),
            ReplCommand::Preview {
                table: "Orders".to_string(),
                limit: 10,
            }
        );
    }

    #[test]
    fn test_parse_template_number() {
        assert_eq!(
            ReplCommand::parse("\\template 2").unwrap(),
            ReplCommand::Template(2)
        );
        assert!(ReplCommand::parse("\\template").is_err());
        assert!(ReplCommand::parse("\\template two").is_err());
    }

    #[test]
    fn test_parse_rejects_unknown_and_trailing_input() {
        assert!(ReplCommand::parse("\\nope").is_err());
        assert!(ReplCommand::parse("\\tables extra").is_err());
        assert!(ReplCommand::parse("\\preview Orders 5 more").is_err());
    }
}
