use std::fmt;
use std::io;
use std::path::PathBuf;

/// The option that tripped [`ParseError::UnknownOption`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnknownOption {
    /// A character inside a short-option cluster, e.g. `z` in `-Hz`.
    Short(char),
    /// A whole token, e.g. `--bogus` or `-z`.
    Token(String),
}

impl fmt::Display for UnknownOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnknownOption::Short(c) => write!(f, "-{}", c),
            UnknownOption::Token(t) => write!(f, "{}", t),
        }
    }
}

/// Why a launch command line was rejected. Every variant aborts the parse.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("Option \"{option}\" requires specifying a value as its parameter")]
    MissingValue { option: String },

    #[error("Invalid argument \"{value}\" for option \"{option}\": {reason}")]
    InvalidValue {
        option: String,
        value: String,
        reason: String,
    },

    #[error("Option \"{option}\" requires specifying the command to run on the rest of the command line")]
    MalformedCommand { option: String },

    #[error("Failed to parse command \"{value}\": {source}")]
    ShellTokenize {
        value: String,
        #[source]
        source: launchopt::Error,
    },

    #[error("Unknown option \"{0}\"")]
    UnknownOption(UnknownOption),
}

#[derive(Debug, thiserror::Error)]
pub enum LaunchError {
    #[error("{0}")]
    Parse(#[from] ParseError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{}:{line}: {message}", .path.display())]
    Preferences {
        path: PathBuf,
        line: usize,
        message: String,
    },
}

pub type Result<T> = std::result::Result<T, LaunchError>;

/// Fatal user-facing error: message on stderr, exit status 1.
pub fn yourfault(msg: &str) -> ! {
    eprintln!("{}", msg);
    std::process::exit(1);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_short_names_the_character() {
        let e = ParseError::UnknownOption(UnknownOption::Short('z'));
        assert_eq!(e.to_string(), "Unknown option \"-z\"");
    }

    #[test]
    fn missing_value_names_the_option() {
        let e = ParseError::MissingValue {
            option: "--geometry".into(),
        };
        assert!(e.to_string().contains("\"--geometry\""));
    }

    #[test]
    fn shell_error_keeps_source() {
        use std::error::Error as _;
        let e = ParseError::ShellTokenize {
            value: "'x".into(),
            source: launchopt::Error::BadQuote("unterminated".into()),
        };
        assert!(e.source().is_some());
    }

    #[test]
    fn preferences_error_has_location() {
        let e = LaunchError::Preferences {
            path: PathBuf::from("/tmp/terminalrc"),
            line: 3,
            message: "expected key=value".into(),
        };
        assert_eq!(e.to_string(), "/tmp/terminalrc:3: expected key=value");
    }
}
