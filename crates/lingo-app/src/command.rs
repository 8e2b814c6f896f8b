use std::path::PathBuf;

/// One line of user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Lookup(String),
    Scan(PathBuf),
    Story,
    Chat(String),
    /// Speak the given text, or the current term when empty
    Speak(Option<String>),
    Save,
    Saved,
    Remove(String),
    Native(String),
    Target(String),
    Reset,
    Help,
    Quit,
}

pub const HELP: &str = "\
Type any word, phrase or intent to look it up.
  /scan <image>     detect and translate text in an image
  /story            funny story from your saved words
  /chat <message>   ask the coach about the current entry
  /speak [text]     read text (or the current term) aloud
  /save             save the current entry
  /saved            list saved entries
  /remove <id>      remove a saved entry
  /native <lang>    set your native language
  /target <lang>    set the language you are learning
  /reset            show onboarding again
  /help             this text
  /quit             exit";

/// `None` for blank lines
pub fn parse_line(line: &str) -> Result<Option<Command>, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let Some(rest) = line.strip_prefix('/') else {
        return Ok(Some(Command::Lookup(line.to_string())));
    };

    let (name, arg) = match rest.split_once(char::is_whitespace) {
        Some((name, arg)) => (name, arg.trim()),
        None => (rest, ""),
    };

    let require = |what: &str| {
        if arg.is_empty() {
            Err(format!("/{name} needs {what}"))
        } else {
            Ok(arg.to_string())
        }
    };

    let command = match name {
        "scan" => Command::Scan(PathBuf::from(require("an image path")?)),
        "story" => Command::Story,
        "chat" => Command::Chat(require("a message")?),
        "speak" => Command::Speak((!arg.is_empty()).then(|| arg.to_string())),
        "save" => Command::Save,
        "saved" | "notebook" => Command::Saved,
        "remove" => Command::Remove(require("an entry id")?),
        "native" => Command::Native(require("a language")?),
        "target" => Command::Target(require("a language")?),
        "reset" => Command::Reset,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        other => return Err(format!("Unknown command /{other}, try /help")),
    };

    Ok(Some(command))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_is_a_lookup() {
        assert_eq!(
            parse_line("  how to politely decline  ").unwrap(),
            Some(Command::Lookup("how to politely decline".to_string()))
        );
        assert_eq!(parse_line("   ").unwrap(), None);
    }

    #[test]
    fn test_commands_with_arguments() {
        assert_eq!(
            parse_line("/chat is this rude?").unwrap(),
            Some(Command::Chat("is this rude?".to_string()))
        );
        assert_eq!(
            parse_line("/scan menu.jpg").unwrap(),
            Some(Command::Scan(PathBuf::from("menu.jpg")))
        );
        assert_eq!(parse_line("/speak").unwrap(), Some(Command::Speak(None)));
        assert_eq!(
            parse_line("/target Japanese").unwrap(),
            Some(Command::Target("Japanese".to_string()))
        );
    }

    #[test]
    fn test_missing_argument_and_unknown_command() {
        assert!(parse_line("/chat").unwrap_err().contains("needs a message"));
        assert!(parse_line("/dance").unwrap_err().contains("Unknown command"));
    }
}
