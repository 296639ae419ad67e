use std::fmt;

// ============================================================================
// ParserState: cursor into the argument vector
// ============================================================================

/// Position of the scan: which token, and how far into a short-option
/// cluster (`-xyz`) the next match starts.
///
/// `short_offset` counts characters after the leading `-`; it is only ever
/// non-zero while `index` points at a single-dash token.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParserState {
    pub index: usize,
    pub short_offset: usize,
}

impl ParserState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move past the current token (and any cluster position inside it).
    pub fn skip_token(&mut self) {
        self.skip_tokens(1);
    }

    fn skip_tokens(&mut self, n: usize) {
        self.index += n;
        self.short_offset = 0;
    }

    /// True while the cursor sits inside a short-option cluster.
    pub fn in_cluster(&self) -> bool {
        self.short_offset > 0
    }

    /// Tokens from the cursor to the end of `args`.
    pub fn rest<'a>(&self, args: &'a [String]) -> &'a [String] {
        args.get(self.index..).unwrap_or(&[])
    }
}

// ============================================================================
// OptionMatch
// ============================================================================

/// Outcome of matching one [`Opt`] against the current token.
///
/// A value-taking option that matched but found no value reports
/// `MatchedFlag`; the caller turns that into its missing-value error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionMatch {
    NoMatch,
    MatchedFlag,
    MatchedValue(String),
}

impl OptionMatch {
    pub fn into_value(self) -> Option<String> {
        match self {
            OptionMatch::MatchedValue(v) => Some(v),
            _ => None,
        }
    }
}

// ============================================================================
// Opt: option description
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgKind {
    None,
    Value,
}

/// One recognizable option. Built with const builders so option tables can
/// live in statics:
///
/// ```
/// use launchopt::Opt;
/// const TITLE: Opt = Opt::new("title").short('T').value();
/// assert!(TITLE.takes_value());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Opt {
    long_name: Option<&'static str>,
    short_name: Option<char>,
    arg_kind: ArgKind,
}

impl Opt {
    pub const fn new(name: &'static str) -> Self {
        Opt {
            long_name: Some(name),
            short_name: None,
            arg_kind: ArgKind::None,
        }
    }

    pub const fn short_only(c: char) -> Self {
        Opt {
            long_name: None,
            short_name: Some(c),
            arg_kind: ArgKind::None,
        }
    }

    /// The bare `--` option terminator.
    pub const fn terminator() -> Self {
        Opt::new("")
    }

    pub const fn short(self, c: char) -> Self {
        Opt {
            short_name: Some(c),
            ..self
        }
    }

    pub const fn value(self) -> Self {
        Opt {
            arg_kind: ArgKind::Value,
            ..self
        }
    }

    pub fn long_name(&self) -> Option<&'static str> {
        self.long_name
    }

    pub fn short_name(&self) -> Option<char> {
        self.short_name
    }

    pub fn takes_value(&self) -> bool {
        self.arg_kind == ArgKind::Value
    }
}

impl fmt::Display for Opt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.long_name, self.short_name) {
            (Some(""), _) => write!(f, "--"),
            (Some(long), Some(c)) => write!(f, "--{}/-{}", long, c),
            (Some(long), None) => write!(f, "--{}", long),
            (None, Some(c)) => write!(f, "-{}", c),
            (None, None) => Ok(()),
        }
    }
}

// ============================================================================
// scan
// ============================================================================

/// Match `opt` against the token at `state.index`.
///
/// On a match the cursor is advanced past everything consumed: the token,
/// a following value token, or just one character of a short cluster.
/// On `NoMatch` the cursor is left untouched.
pub fn scan(args: &[String], state: &mut ParserState, opt: &Opt) -> OptionMatch {
    let Some(token) = args.get(state.index) else {
        return OptionMatch::NoMatch;
    };

    if let Some(rest) = token.strip_prefix("--") {
        scan_long(args, state, opt, rest)
    } else if let Some(cluster) = token.strip_prefix('-') {
        scan_short(args, state, opt, cluster)
    } else {
        OptionMatch::NoMatch
    }
}

fn scan_long(args: &[String], state: &mut ParserState, opt: &Opt, rest: &str) -> OptionMatch {
    let Some(name) = opt.long_name else {
        return OptionMatch::NoMatch;
    };

    if name.is_empty() {
        if rest.is_empty() {
            state.skip_token();
            return OptionMatch::MatchedFlag;
        }
        return OptionMatch::NoMatch;
    }

    let Some(after) = rest.strip_prefix(name) else {
        return OptionMatch::NoMatch;
    };

    match opt.arg_kind {
        ArgKind::None => {
            if !after.is_empty() {
                return OptionMatch::NoMatch;
            }
            state.skip_token();
            OptionMatch::MatchedFlag
        }
        ArgKind::Value => {
            if let Some(joined) = after.strip_prefix('=') {
                state.skip_token();
                if joined.is_empty() {
                    OptionMatch::MatchedFlag
                } else {
                    OptionMatch::MatchedValue(joined.to_string())
                }
            } else if after.is_empty() {
                take_next_value(args, state)
            } else {
                // "--titlebar" is not "--title"
                OptionMatch::NoMatch
            }
        }
    }
}

fn scan_short(args: &[String], state: &mut ParserState, opt: &Opt, cluster: &str) -> OptionMatch {
    let Some(c) = opt.short_name else {
        return OptionMatch::NoMatch;
    };
    let Some((pos, found)) = cluster.char_indices().nth(state.short_offset) else {
        return OptionMatch::NoMatch;
    };
    if found != c {
        return OptionMatch::NoMatch;
    }
    let tail = &cluster[pos + found.len_utf8()..];

    match opt.arg_kind {
        ArgKind::None => {
            if tail.is_empty() {
                state.skip_token();
            } else {
                state.short_offset += 1;
            }
            OptionMatch::MatchedFlag
        }
        ArgKind::Value => {
            if tail.is_empty() {
                take_next_value(args, state)
            } else {
                state.skip_token();
                OptionMatch::MatchedValue(tail.to_string())
            }
        }
    }
}

/// The value lives in the following token, whatever it looks like.
fn take_next_value(args: &[String], state: &mut ParserState) -> OptionMatch {
    match args.get(state.index + 1) {
        Some(value) => {
            let value = value.clone();
            state.skip_tokens(2);
            OptionMatch::MatchedValue(value)
        }
        None => {
            state.skip_token();
            OptionMatch::MatchedFlag
        }
    }
}
