//! Parsing of the commands typed at the notebook prompt.
//!
//! Every line is one command:
//!
//! ```text
//! menu <0-4>                change the menu selection
//! set <control> <value>     set a text box or slider
//! <control> = <value>       shorthand for `set`
//! submit <control> [value]  submit a text box, optionally setting it first
//! click <control>           click a button
//! controls                  list the displayed controls and their values
//! help                      show the available commands
//! quit                      leave the notebook
//! ```
//!
//! Blank lines and lines starting with `#` do nothing.

use ariadne::Fmt;
use crate::event::{Event, Spanned};
use levenshtein::levenshtein;
use precalc_attrs::ErrorKind;
use precalc_error::{Error, EXPR};

/// The command keywords.
const KEYWORDS: [&str; 8] = ["menu", "set", "submit", "click", "controls", "help", "quit", "exit"];

/// The text shown by the `help` command.
pub const HELP: &str = "\
commands:
  menu <0-4>                change the menu selection
  set <control> <value>     set a text box or slider
  <control> = <value>       same as `set`
  submit <control> [value]  submit a text box, setting it first if a value is given
  click <control>           click a button
  controls                  list the displayed controls and their values
  help                      show this help
  quit                      leave the notebook

menu options:
  0  Select one
  1  Graph and table: submit y <expression in x>, then set zoom <5-30>
  2  Solve system: set eq1 and eq2, then click solve
  3  Graph system and intersection: set m1, b1, m2, b2 and zoom
  4  Quadratic solver: set a, b, c and zoom";

/// A parsed command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// An interaction with a control.
    Event(Event),

    /// List the displayed controls.
    Controls,

    /// Show the help text.
    Help,

    /// Leave the notebook.
    Quit,

    /// A blank line or a comment.
    Nothing,
}

/// The command does not exist.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("unknown command `{}`", self.name),
    labels = ["this command"],
    help = match self.suggestion {
        Some(suggestion) => format!("did you mean `{}`?", suggestion.fg(EXPR)),
        None => format!("type `{}` to see the available commands", "help".fg(EXPR)),
    },
)]
pub struct UnknownCommand {
    /// The command that was given.
    pub name: String,

    /// The closest command keyword, if one is close enough.
    pub suggestion: Option<&'static str>,
}

/// The command is missing an argument.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "missing argument",
    labels = ["this command needs more arguments"],
    help = format!("usage: `{}`", self.usage.fg(EXPR)),
)]
pub struct MissingArgument {
    /// How the command is used.
    pub usage: &'static str,
}

/// The command was given more arguments than it takes.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unexpected argument",
    labels = ["remove this"],
    help = format!("usage: `{}`", self.usage.fg(EXPR)),
)]
pub struct UnexpectedArgument {
    /// How the command is used.
    pub usage: &'static str,
}

/// Walks over the words of a line, keeping track of where each one is.
struct Cursor<'a> {
    line: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(line: &'a str) -> Self {
        Self { line, pos: 0 }
    }

    /// Skips whitespace and returns the position of the next character.
    fn skip_whitespace(&mut self) -> usize {
        let rest = &self.line[self.pos..];
        self.pos += rest.len() - rest.trim_start().len();
        self.pos
    }

    /// Returns the next word, ending at whitespace or at any of the `stop` characters.
    fn word(&mut self, stop: &[char]) -> Option<Spanned<&'a str>> {
        let start = self.skip_whitespace();
        let len = self.line[start..]
            .find(|c: char| c.is_whitespace() || stop.contains(&c))
            .unwrap_or(self.line.len() - start);
        if len == 0 {
            return None;
        }
        self.pos = start + len;
        Some(Spanned::new(&self.line[start..self.pos], start..self.pos))
    }

    /// Returns the rest of the line without surrounding whitespace, if it is not empty.
    fn rest(&mut self) -> Option<Spanned<&'a str>> {
        let start = self.skip_whitespace();
        let end = start + self.line[start..].trim_end().len();
        self.pos = self.line.len();
        (start < end).then(|| Spanned::new(&self.line[start..end], start..end))
    }

    /// Fails if anything but whitespace is left.
    fn finish(&mut self, usage: &'static str) -> Result<(), Error> {
        match self.rest() {
            Some(extra) => Err(Error::new(vec![extra.span], UnexpectedArgument { usage })),
            None => Ok(()),
        }
    }
}

/// Returns the argument, or an error pointing at the command if it is missing.
fn required<'a>(
    arg: Option<Spanned<&'a str>>,
    command: &Spanned<&str>,
    usage: &'static str,
) -> Result<Spanned<&'a str>, Error> {
    arg.ok_or_else(|| Error::new(vec![command.span.clone()], MissingArgument { usage }))
}

/// Parses one line of input.
pub fn parse(line: &str) -> Result<Command, Error> {
    let mut cursor = Cursor::new(line);
    let Some(first) = cursor.word(&['=']) else {
        // only `=` stops a word before the end of the line
        return match cursor.rest() {
            Some(rest) => Err(Error::new(
                vec![rest.span.start..rest.span.start + 1],
                MissingArgument { usage: "<control> = <value>" },
            )),
            None => Ok(Command::Nothing),
        };
    };
    if first.value.starts_with('#') {
        return Ok(Command::Nothing);
    }

    match first.value {
        "menu" => {
            let usage = "menu <0-4>";
            let value = required(cursor.rest(), &first, usage)?;
            Ok(Command::Event(Event::Set { control: first.owned(), value: value.owned() }))
        },
        "set" => {
            let usage = "set <control> <value>";
            let control = required(cursor.word(&[]), &first, usage)?;
            let value = required(cursor.rest(), &first, usage)?;
            Ok(Command::Event(Event::Set { control: control.owned(), value: value.owned() }))
        },
        "submit" => {
            let control = required(cursor.word(&[]), &first, "submit <control> [value]")?;
            let value = cursor.rest().map(|value| value.owned());
            Ok(Command::Event(Event::Submit { control: control.owned(), value }))
        },
        "click" => {
            let usage = "click <control>";
            let control = required(cursor.word(&[]), &first, usage)?;
            cursor.finish(usage)?;
            Ok(Command::Event(Event::Click { control: control.owned() }))
        },
        "controls" => cursor.finish("controls").map(|_| Command::Controls),
        "help" => cursor.finish("help").map(|_| Command::Help),
        "quit" | "exit" => cursor.finish("quit").map(|_| Command::Quit),
        _ => {
            cursor.skip_whitespace();
            if line[cursor.pos..].starts_with('=') {
                cursor.pos += 1;
                let value = required(cursor.rest(), &first, "<control> = <value>")?;
                return Ok(Command::Event(Event::Set { control: first.owned(), value: value.owned() }));
            }

            let suggestion = KEYWORDS.iter()
                .copied()
                .min_by_key(|keyword| levenshtein(keyword, first.value))
                .filter(|keyword| levenshtein(keyword, first.value) <= 2);
            Err(Error::new(vec![first.span], UnknownCommand {
                name: first.value.to_string(),
                suggestion,
            }))
        },
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    fn event(line: &str) -> Event {
        match parse(line).unwrap() {
            Command::Event(event) => event,
            other => panic!("expected an event, got {:?}", other),
        }
    }

    #[test]
    fn blank_and_comments() {
        assert_eq!(parse("").unwrap(), Command::Nothing);
        assert_eq!(parse("   ").unwrap(), Command::Nothing);
        assert_eq!(parse("# mode 1").unwrap(), Command::Nothing);
    }

    #[test]
    fn menu() {
        assert_eq!(event("menu 3"), Event::Set {
            control: Spanned::new("menu".to_string(), 0..4),
            value: Spanned::new("3".to_string(), 5..6),
        });
    }

    #[test]
    fn set_keeps_the_whole_value() {
        assert_eq!(event("set eq1 x + y = 3"), Event::Set {
            control: Spanned::new("eq1".to_string(), 4..7),
            value: Spanned::new("x + y = 3".to_string(), 8..17),
        });
    }

    #[test]
    fn assignment_shorthand() {
        assert_eq!(event("m1 = -2.5"), Event::Set {
            control: Spanned::new("m1".to_string(), 0..2),
            value: Spanned::new("-2.5".to_string(), 5..9),
        });
        assert_eq!(event("zoom=20"), Event::Set {
            control: Spanned::new("zoom".to_string(), 0..4),
            value: Spanned::new("20".to_string(), 5..7),
        });
    }

    #[test]
    fn submit_with_and_without_value() {
        assert_eq!(event("submit y"), Event::Submit {
            control: Spanned::new("y".to_string(), 7..8),
            value: None,
        });
        assert_eq!(event("submit y x^2 - 4"), Event::Submit {
            control: Spanned::new("y".to_string(), 7..8),
            value: Some(Spanned::new("x^2 - 4".to_string(), 9..16)),
        });
    }

    #[test]
    fn click() {
        assert_eq!(event("click solve"), Event::Click {
            control: Spanned::new("solve".to_string(), 6..11),
        });
    }

    #[test]
    fn other_commands() {
        assert_eq!(parse("controls").unwrap(), Command::Controls);
        assert_eq!(parse(" help ").unwrap(), Command::Help);
        assert_eq!(parse("quit").unwrap(), Command::Quit);
        assert_eq!(parse("exit").unwrap(), Command::Quit);
    }

    #[test]
    fn missing_argument() {
        let err = parse("set m1").unwrap_err();
        assert_eq!(err.downcast_ref::<MissingArgument>().unwrap().usage, "set <control> <value>");
        assert_eq!(err.spans, vec![0..3]);

        assert!(parse("m1 =").unwrap_err().is::<MissingArgument>());
    }

    #[test]
    fn assignment_without_control() {
        let err = parse("= 5").unwrap_err();
        assert_eq!(err.downcast_ref::<MissingArgument>().unwrap().usage, "<control> = <value>");
        assert_eq!(err.spans, vec![0..1]);

        assert_eq!(parse("  =").unwrap_err().spans, vec![2..3]);
    }

    #[test]
    fn unexpected_argument() {
        let err = parse("click solve now").unwrap_err();
        assert!(err.is::<UnexpectedArgument>());
        assert_eq!(err.spans, vec![12..15]);
    }

    #[test]
    fn unknown_command_suggestion() {
        let err = parse("clik solve").unwrap_err();
        let kind = err.downcast_ref::<UnknownCommand>().unwrap();
        assert_eq!(kind.suggestion, Some("click"));
        assert_eq!(err.spans, vec![0..4]);

        let err = parse("graph x^2").unwrap_err();
        assert_eq!(err.downcast_ref::<UnknownCommand>().unwrap().suggestion, None);
    }
}
