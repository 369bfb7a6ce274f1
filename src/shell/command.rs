//! MS-DOS style command parsing.

/// A parsed shell command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    /// `cls` / `clear`
    Clear,
    /// `cd <path>`, `cd..`, `cd ..`
    ChangeDirectory(String),
    /// `dir` / `ls`
    List,
    /// `type <name>` / `cat <name>`
    ReadFile(String),
    /// `about`
    About,
    /// `help`
    Help,
    /// Anything else (lower-cased input)
    Unrecognized(String),
}

/// Parse a line of input.
///
/// Dispatch is case-insensitive; arguments keep their original case.
/// Returns `None` for empty or whitespace-only input.
///
/// # Example
/// ```ignore
/// assert_eq!(
///     parse_command("TYPE My Notes.txt"),
///     Some(ShellCommand::ReadFile("My Notes.txt".into()))
/// );
/// ```
pub fn parse_command(text: &str) -> Option<ShellCommand> {
    let input = text.trim();
    if input.is_empty() {
        return None;
    }
    let cmd = input.to_lowercase();

    let command = match cmd.as_str() {
        "cls" | "clear" => ShellCommand::Clear,
        "cd.." | "cd .." => ShellCommand::ChangeDirectory("..".to_string()),
        "dir" | "ls" => ShellCommand::List,
        "about" => ShellCommand::About,
        "help" => ShellCommand::Help,
        _ if cmd.starts_with("cd ") => {
            ShellCommand::ChangeDirectory(argument(input).trim().to_string())
        }
        _ if cmd.starts_with("type ") || cmd.starts_with("cat ") => {
            ShellCommand::ReadFile(argument(input).to_string())
        }
        _ => ShellCommand::Unrecognized(cmd),
    };

    Some(command)
}

/// Everything after the first space, verbatim.
fn argument(input: &str) -> &str {
    input.split_once(' ').map(|(_, rest)| rest).unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_input() {
        assert_eq!(parse_command(""), None);
        assert_eq!(parse_command("   \t "), None);
    }

    #[test]
    fn test_parse_clear_aliases() {
        assert_eq!(parse_command("cls"), Some(ShellCommand::Clear));
        assert_eq!(parse_command("CLEAR"), Some(ShellCommand::Clear));
    }

    #[test]
    fn test_parse_cd_variants() {
        assert_eq!(
            parse_command("cd.."),
            Some(ShellCommand::ChangeDirectory("..".into()))
        );
        assert_eq!(
            parse_command("cd .."),
            Some(ShellCommand::ChangeDirectory("..".into()))
        );
        assert_eq!(
            parse_command("CD Projects"),
            Some(ShellCommand::ChangeDirectory("Projects".into()))
        );
        assert_eq!(
            parse_command("  cd   /projects/web  "),
            Some(ShellCommand::ChangeDirectory("/projects/web".into()))
        );
    }

    #[test]
    fn test_parse_cd_without_argument_is_unrecognized() {
        assert_eq!(
            parse_command("cd"),
            Some(ShellCommand::Unrecognized("cd".into()))
        );
    }

    #[test]
    fn test_parse_read_file_preserves_spaces_and_case() {
        assert_eq!(
            parse_command("type My Notes.txt"),
            Some(ShellCommand::ReadFile("My Notes.txt".into()))
        );
        assert_eq!(
            parse_command("CAT README.md"),
            Some(ShellCommand::ReadFile("README.md".into()))
        );
    }

    #[test]
    fn test_parse_unrecognized_is_lowercased() {
        assert_eq!(
            parse_command("FooBar baz"),
            Some(ShellCommand::Unrecognized("foobar baz".into()))
        );
    }
}
