/// Every command the bot answers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Hello,
    Predict,
    NetPredict,
    EasterEgg,
    Info,
    Help,
}

/// Command name to command. Names are matched case-sensitively.
const COMMAND_TABLE: &[(&str, Command)] = &[
    ("hello", Command::Hello),
    ("predict", Command::Predict),
    ("net_predict", Command::NetPredict),
    ("easter_egg", Command::EasterEgg),
    ("info", Command::Info),
    ("help", Command::Help),
];

impl Command {
    /// Commands in the order `help` lists them.
    pub const ALL: [Command; 6] = [
        Command::Hello,
        Command::Predict,
        Command::NetPredict,
        Command::EasterEgg,
        Command::Info,
        Command::Help,
    ];

    pub fn from_name(name: &str) -> Option<Command> {
        COMMAND_TABLE
            .iter()
            .find(|(n, _)| *n == name)
            .map(|&(_, command)| command)
    }

    pub fn name(self) -> &'static str {
        COMMAND_TABLE
            .iter()
            .find(|(_, c)| *c == self)
            .map(|&(n, _)| n)
            .unwrap_or_default()
    }

    /// Name plus argument placeholder, without the prefix.
    pub fn syntax(self) -> &'static str {
        match self {
            Command::NetPredict => "net_predict <resim_url>",
            Command::Info => "info <parça ismi>",
            other => other.name(),
        }
    }

    /// One-line description for the help text. `help` itself is not listed.
    pub fn summary(self) -> Option<&'static str> {
        match self {
            Command::Hello => Some("Bot kendini tanıtır."),
            Command::Predict => Some(
                "Yüklediğiniz bir fotoğrafın içindeki PC parçasını tahmin eder. (Fotoğrafı komutla birlikte ekleyin)",
            ),
            Command::NetPredict => {
                Some("Belirttiğiniz URL adresindeki fotoğrafın içindeki PC parçasını tahmin eder.")
            }
            Command::EasterEgg => Some("Küçük bir sürpriz mesaj gönderir."),
            Command::Info => Some("Bir PC Parçası ile ilgili bilgi verir."),
            Command::Help => None,
        }
    }
}

/// A parsed command message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommand<'a> {
    pub command: Command,
    /// Everything after the command name, trimmed
    pub args: &'a str,
}

/// Splits `content` into a command and its arguments.
///
/// Returns `None` when the message does not start with `prefix` or names an
/// unknown command.
pub fn parse<'a>(content: &'a str, prefix: &str) -> Option<ParsedCommand<'a>> {
    let rest = content.trim_start().strip_prefix(prefix)?;
    let (name, args) = match rest.split_once(char::is_whitespace) {
        Some((name, args)) => (name, args.trim()),
        None => (rest.trim_end(), ""),
    };
    let command = Command::from_name(name)?;
    Some(ParsedCommand { command, args })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_command_with_args() {
        let parsed = parse("$info  hava soğutma ", "$").unwrap();
        assert_eq!(parsed.command, Command::Info);
        assert_eq!(parsed.args, "hava soğutma");
    }

    #[test]
    fn test_parse_bare_command() {
        assert_eq!(parse("$hello", "$").unwrap().command, Command::Hello);
        assert_eq!(parse("$predict\n", "$").unwrap().args, "");
    }

    #[test]
    fn test_parse_rejects_other_messages() {
        assert!(parse("hello", "$").is_none());
        assert!(parse("$unknown", "$").is_none());
        assert!(parse("$HELLO", "$").is_none());
        assert!(parse("$ hello", "$").is_none());
    }

    #[test]
    fn test_only_help_has_no_summary() {
        for command in Command::ALL {
            assert_eq!(command.summary().is_none(), command == Command::Help);
        }
    }

    #[test]
    fn test_names_round_trip() {
        for command in Command::ALL {
            assert_eq!(Command::from_name(command.name()), Some(command));
        }
    }
}
