use serde::Deserialize;

/// Direction of the transform.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Escape,
    Unescape,
}

/// Which action should be executed?
///
/// This implements [`FromIterator`] and can be `collect`ed from
/// the [`std::env::args()`]`.skip(1)` iterator. A `None` mode means no
/// direction flag was given and the config default applies.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Action {
    /// Print the help message (without quitting explaination).
    Help,
    /// Print the current version.
    Version,
    /// Show the default config file
    DefaultConfig,
    /// Enter the REPL.
    Repl(Option<Mode>),
    /// Transform the arguments.
    Text(Option<Mode>, String),
}

impl FromIterator<String> for Action {
    fn from_iter<T: IntoIterator<Item = String>>(iter: T) -> Self {
        iter.into_iter().fold(Action::Repl(None), |action, arg| {
            use Action::{DefaultConfig, Help, Repl, Text, Version};
            match (action, arg.as_str()) {
                // If any argument is shouting for help, print help!
                (_, "help" | "--help" | "-h") | (Help, _) => Help,
                // If no help is requested, but the version, print the version.
                // Once we're set on printing the version, only a request for
                // help can overwrite that.
                (Repl(_) | Text(..) | DefaultConfig, "--version" | "-v" | "-V") | (Version, _) => {
                    Version
                }

                (Repl(_) | Text(..), "--default-config") | (DefaultConfig, _) => DefaultConfig,
                // A direction flag applies wherever it appears; the last one
                // wins.
                (Repl(_), "--unescape" | "-u") => Repl(Some(Mode::Unescape)),
                (Repl(_), "--escape" | "-e") => Repl(Some(Mode::Escape)),
                (Text(_, text), "--unescape" | "-u") => Text(Some(Mode::Unescape), text),
                (Text(_, text), "--escape" | "-e") => Text(Some(Mode::Escape), text),
                // Everything else is text to transform. Whitespace-only
                // arguments are kept (they are meaningful input here), only
                // truly empty ones are skipped, so `$ jsonesc "" ""` still
                // enters the repl.
                (Repl(mode), arg) if !arg.is_empty() => Text(mode, String::from(arg)),
                (Repl(mode), _) => Repl(mode),
                (Text(mode, text), arg) => Text(mode, text + " " + arg),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{Action, Mode};

    macro_rules! action {
        ($( $arg:literal ),*) => {
            vec![ $( $arg.to_string() ),* ]
                .into_iter()
                .collect::<Action>()
        }
    }

    #[test]
    fn help_argument_works() {
        // The --help argument wins!
        assert_eq!(Action::Help, action!["-h"]);
        assert_eq!(Action::Help, action!["--help"]);
        assert_eq!(Action::Help, action!["help"]);
        assert_eq!(Action::Help, action!["some text", "help"]);
        assert_eq!(Action::Help, action!["--version", "text", "--help"]);
        assert_eq!(Action::Help, action!["-h", "some", "arguments"]);
    }

    #[test]
    fn version_argument_works() {
        // --version wins over normal arguments
        assert_eq!(Action::Version, action!["-v"]);
        assert_eq!(Action::Version, action!["-V"]);
        assert_eq!(Action::Version, action!["--version"]);
        assert_eq!(Action::Version, action!["before", "-v", "and", "after"]);
        assert_eq!(Action::Version, action!["-V", "here"]);
        // a bare `version` is just text
        assert_eq!(
            Action::Text(None, String::from("version")),
            action!["version"]
        );
    }

    #[test]
    fn direction_flags_work() {
        assert_eq!(Action::Repl(Some(Mode::Unescape)), action!["-u"]);
        assert_eq!(Action::Repl(Some(Mode::Escape)), action!["--escape"]);
        assert_eq!(
            Action::Text(Some(Mode::Unescape), String::from("a\\nb")),
            action!["-u", "a\\nb"]
        );
        // flags may follow the text, and the last one wins
        assert_eq!(
            Action::Text(Some(Mode::Unescape), String::from("a\\nb")),
            action!["a\\nb", "--unescape"]
        );
        assert_eq!(
            Action::Text(Some(Mode::Escape), String::from("x")),
            action!["-u", "x", "-e"]
        );
    }

    #[test]
    fn normal_arguments_are_collected_correctly() {
        use Action::Text;
        assert_eq!(Text(None, String::from("a b")), action!["a", "b"]);
        assert_eq!(Text(None, String::from("a b")), action!["a b"]);
        assert_eq!(Text(None, String::from("1 '+' 1 ")), action!["1 '+' 1 "]);
    }

    #[test]
    fn empty_arguments() {
        assert_eq!(Action::Repl(None), action![]);
        assert_eq!(Action::Repl(None), action![""]);
        assert_eq!(Action::Repl(None), action!["", ""]);
        // whitespace is meaningful input for an escaper
        assert_eq!(Action::Text(None, String::from("\t")), action!["\t"]);
    }
}
