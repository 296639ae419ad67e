//! The launch option table, and the lenient first pass that only picks out
//! program-wide options.

use launchopt::{scan, Opt, OptionMatch, ParserState};

use crate::error::ParseError;

/// What a recognized option does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Terminator,
    Execute,

    // Tab options
    Command,
    WorkingDirectory,
    Title,
    DynamicTitleMode,
    InitialTitle,
    Hold,
    ActiveTab,
    ColorText,
    ColorBg,

    // Window options
    Display,
    Geometry,
    Role,
    Workspace,
    SmClientId,
    StartupId,
    Icon,
    DropDown,
    ShowMenubar,
    HideMenubar,
    ShowBorders,
    HideBorders,
    ShowToolbar,
    HideToolbar,
    ShowScrollbar,
    HideScrollbar,
    Fullscreen,
    Maximize,
    Minimize,
    Font,
    Zoom,

    // Separators
    Tab,
    Window,

    // Program-wide; no effect on the attribute list
    Help,
    Version,
    DisableServer,
    DefaultDisplay,
    DefaultWorkingDirectory,
    Sync,
    GFatalWarnings,
}

impl Action {
    /// Options the attribute builder recognizes but leaves alone.
    pub fn is_global(self) -> bool {
        matches!(
            self,
            Action::Help
                | Action::Version
                | Action::DisableServer
                | Action::DefaultDisplay
                | Action::DefaultWorkingDirectory
                | Action::Sync
                | Action::GFatalWarnings
        )
    }
}

#[derive(Debug, Clone, Copy)]
pub struct OptionEntry {
    pub opt: Opt,
    pub action: Action,
}

const fn entry(opt: Opt, action: Action) -> OptionEntry {
    OptionEntry { opt, action }
}

/// Tried in order against every option token.
pub static OPTIONS: &[OptionEntry] = &[
    entry(Opt::terminator(), Action::Terminator),
    entry(Opt::new("execute").short('x'), Action::Execute),
    // Tab options
    entry(Opt::new("command").short('e').value(), Action::Command),
    entry(Opt::new("working-directory").value(), Action::WorkingDirectory),
    entry(Opt::new("title").short('T').value(), Action::Title),
    entry(Opt::new("dynamic-title-mode").value(), Action::DynamicTitleMode),
    entry(Opt::new("initial-title").value(), Action::InitialTitle),
    entry(Opt::new("hold").short('H'), Action::Hold),
    entry(Opt::new("active-tab"), Action::ActiveTab),
    entry(Opt::new("color-text").value(), Action::ColorText),
    entry(Opt::new("color-bg").value(), Action::ColorBg),
    // Window options
    entry(Opt::new("display").value(), Action::Display),
    entry(Opt::new("geometry").value(), Action::Geometry),
    entry(Opt::new("role").value(), Action::Role),
    entry(Opt::new("workspace").value(), Action::Workspace),
    entry(Opt::new("sm-client-id").value(), Action::SmClientId),
    entry(Opt::new("startup-id").value(), Action::StartupId),
    entry(Opt::new("icon").short('I').value(), Action::Icon),
    entry(Opt::new("drop-down"), Action::DropDown),
    entry(Opt::new("show-menubar"), Action::ShowMenubar),
    entry(Opt::new("hide-menubar"), Action::HideMenubar),
    entry(Opt::new("show-borders"), Action::ShowBorders),
    entry(Opt::new("hide-borders"), Action::HideBorders),
    entry(Opt::new("show-toolbar"), Action::ShowToolbar),
    entry(Opt::new("hide-toolbar"), Action::HideToolbar),
    entry(Opt::new("show-scrollbar"), Action::ShowScrollbar),
    entry(Opt::new("hide-scrollbar"), Action::HideScrollbar),
    entry(Opt::new("fullscreen"), Action::Fullscreen),
    entry(Opt::new("maximize"), Action::Maximize),
    entry(Opt::new("minimize"), Action::Minimize),
    entry(Opt::new("font").value(), Action::Font),
    entry(Opt::new("zoom").value(), Action::Zoom),
    // Separators
    entry(Opt::new("tab"), Action::Tab),
    entry(Opt::new("window"), Action::Window),
    // Program-wide
    entry(Opt::new("help").short('h'), Action::Help),
    entry(Opt::new("version").short('V'), Action::Version),
    entry(Opt::new("disable-server"), Action::DisableServer),
    entry(Opt::new("default-display").value(), Action::DefaultDisplay),
    entry(
        Opt::new("default-working-directory").value(),
        Action::DefaultWorkingDirectory,
    ),
    entry(Opt::new("sync"), Action::Sync),
    entry(Opt::new("g-fatal-warnings"), Action::GFatalWarnings),
];

/// Try every table entry against the token under `state`.
pub fn match_option(
    args: &[String],
    state: &mut ParserState,
) -> Option<(&'static OptionEntry, OptionMatch)> {
    OPTIONS.iter().find_map(|entry| match scan(args, state, &entry.opt) {
        OptionMatch::NoMatch => None,
        m => Some((entry, m)),
    })
}

/// The value of a value-taking option, or the missing-value error naming it.
pub fn required_value(entry: &OptionEntry, m: OptionMatch) -> Result<String, ParseError> {
    m.into_value().ok_or_else(|| ParseError::MissingValue {
        option: entry.opt.to_string(),
    })
}

// ============================================================================
// GlobalOptions: first pass
// ============================================================================

/// Program-wide options, read before any window is built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GlobalOptions {
    pub help: bool,
    pub version: bool,
    pub disable_server: bool,
    pub default_display: Option<String>,
    pub default_working_directory: Option<String>,
}

impl GlobalOptions {
    /// Lenient pass over `args`: per-window options are stepped over with
    /// their values, unknown tokens are skipped, and the scan stops at `--`
    /// or at the start of an `--execute` command.
    pub fn parse(args: &[String]) -> Result<GlobalOptions, ParseError> {
        let mut globals = GlobalOptions::default();
        let mut state = ParserState::new();

        while state.index < args.len() {
            if !args[state.index].starts_with('-') {
                state.skip_token();
                continue;
            }
            let Some((entry, m)) = match_option(args, &mut state) else {
                state.skip_token();
                continue;
            };
            match entry.action {
                Action::Terminator | Action::Execute => break,
                Action::Help => globals.help = true,
                Action::Version => globals.version = true,
                Action::DisableServer => globals.disable_server = true,
                Action::DefaultDisplay => {
                    globals.default_display = Some(required_value(entry, m)?);
                }
                Action::DefaultWorkingDirectory => {
                    globals.default_working_directory = Some(required_value(entry, m)?);
                }
                _ => {}
            }
        }

        Ok(globals)
    }
}
