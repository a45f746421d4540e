//! User input and the navigation messages that leave this screen.

/// What the user asked the browser screen to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowserAction {
    /// Zero-based grid position.
    Select(usize),
    Dismiss,
    OpenSearch,
    OpenProfile,
}

/// Requests for screens this one does not own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationRequest {
    Search,
    Profile,
}

impl NavigationRequest {
    pub fn label(self) -> &'static str {
        match self {
            NavigationRequest::Search => "Search",
            NavigationRequest::Profile => "Profile",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputCommand {
    Action(BrowserAction),
    Redraw,
    Help,
    Quit,
}

pub const HELP: &str =
    "Commands: open <n> | close | search | profile | help | quit (empty line redraws)";

/// Parses one line typed by the user. Grid positions are 1-based on screen.
pub fn parse_command(line: &str) -> Result<InputCommand, String> {
    let mut words = line.split_whitespace();
    let Some(verb) = words.next() else {
        return Ok(InputCommand::Redraw);
    };

    let command = match verb.to_ascii_lowercase().as_str() {
        "open" | "o" => {
            let raw = words
                .next()
                .ok_or_else(|| "usage: open <n>".to_string())?;
            InputCommand::Action(BrowserAction::Select(parse_position(raw)?))
        }
        "close" | "c" => InputCommand::Action(BrowserAction::Dismiss),
        "search" | "/" => InputCommand::Action(BrowserAction::OpenSearch),
        "profile" | "p" => InputCommand::Action(BrowserAction::OpenProfile),
        "help" | "?" => InputCommand::Help,
        "quit" | "q" | "exit" => InputCommand::Quit,
        other => return Err(format!("unknown command '{other}'; type 'help'")),
    };

    if words.next().is_some() {
        return Err(format!("too many arguments for '{verb}'"));
    }
    Ok(command)
}

/// Converts a 1-based on-screen position to a grid index.
pub fn parse_position(raw: &str) -> Result<usize, String> {
    match raw.parse::<usize>() {
        Ok(0) => Err("positions start at 1".to_string()),
        Ok(position) => Ok(position - 1),
        Err(_) => Err(format!("'{raw}' is not a movie number")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_open_with_one_based_position() {
        assert_eq!(
            parse_command("open 3"),
            Ok(InputCommand::Action(BrowserAction::Select(2)))
        );
        assert_eq!(
            parse_command("  O 1 "),
            Ok(InputCommand::Action(BrowserAction::Select(0)))
        );
    }

    #[test]
    fn rejects_bad_positions() {
        assert!(parse_command("open").is_err());
        assert!(parse_command("open 0").is_err());
        assert!(parse_command("open two").is_err());
        assert!(parse_command("open 1 2").is_err());
    }

    #[test]
    fn parses_navigation_and_control_commands() {
        assert_eq!(
            parse_command("search"),
            Ok(InputCommand::Action(BrowserAction::OpenSearch))
        );
        assert_eq!(
            parse_command("p"),
            Ok(InputCommand::Action(BrowserAction::OpenProfile))
        );
        assert_eq!(
            parse_command("close"),
            Ok(InputCommand::Action(BrowserAction::Dismiss))
        );
        assert_eq!(parse_command(""), Ok(InputCommand::Redraw));
        assert_eq!(parse_command("q"), Ok(InputCommand::Quit));
        assert!(parse_command("dance").is_err());
    }
}
