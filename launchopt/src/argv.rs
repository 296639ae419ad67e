use std::borrow::Cow;

use crate::{Error, Result};

/// Split a shell-style command string into an argument vector.
///
/// POSIX word splitting and quote removal, no expansion of any kind. `''`
/// and `""` yield an empty word; a string with no words is an error.
pub fn split_command(s: &str) -> Result<Vec<String>> {
    let args = shell_words::split(s).map_err(|e| Error::BadQuote(e.to_string()))?;
    if args.is_empty() {
        return Err(Error::EmptyCommand);
    }
    Ok(args)
}

/// Quote one argument so [`split_command`] reads it back verbatim.
pub fn quote_arg(arg: &str) -> Cow<'_, str> {
    shell_words::quote(arg)
}

/// Inverse of [`split_command`].
pub fn join_command<S: AsRef<str>>(args: &[S]) -> String {
    shell_words::join(args)
}
