//! Turns a launch command line into an [`AttributeList`].
//!
//! Options apply to the current window and its current tab, i.e. the last
//! window and its last tab. `--tab` and `--window` start new ones, with two
//! twists:
//!
//! - When the caller already has a window open (`can_reuse_window`), the
//!   first `--tab` asks for it to be reused instead of opening a new window.
//! - A `--window` that is the very first option is swallowed, so
//!   `--window --tab ...` opens one window rather than two.
//!
//! A window's implicit first tab is taken over by the first `--tab` unless
//! a tab option already applied to it; `--tab --tab` therefore opens two
//! tabs, not three.

use launchopt::{split_command, OptionMatch, ParserState};
use tracing::{debug, trace};

use crate::attrs::{
    AttributeList, DynamicTitleMode, TabAttr, Visibility, WindowAttr, ZOOM_MAX, ZOOM_MIN,
};
use crate::color::validate_color;
use crate::error::{ParseError, UnknownOption};
use crate::options::{match_option, required_value, Action, OptionEntry};

/// Fallbacks applied to the finished list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LaunchDefaults {
    pub display: Option<String>,
    pub working_directory: Option<String>,
}

/// Parse `args` (without the program name) into windows and tabs.
///
/// `can_reuse_window` is true when the caller already has a window the
/// first `--tab` may go into. On error nothing built so far survives.
pub fn parse_attributes(
    args: &[String],
    can_reuse_window: bool,
    defaults: &LaunchDefaults,
) -> Result<AttributeList, ParseError> {
    let mut builder = Builder::new(can_reuse_window);
    builder.run(args)?;
    let mut list = builder.list;
    apply_defaults(&mut list, defaults);
    Ok(list)
}

struct Builder {
    list: AttributeList,
    can_reuse_window: bool,
    /// No option has been seen yet, so a `--window` here is redundant.
    ignore_window_option: bool,
    /// The current tab has been claimed by an option or a `--tab`.
    tab_claimed: bool,
}

impl Builder {
    fn new(can_reuse_window: bool) -> Self {
        Builder {
            list: AttributeList::new(),
            can_reuse_window,
            ignore_window_option: true,
            tab_claimed: false,
        }
    }

    fn window(&mut self) -> &mut WindowAttr {
        self.list.current_window_mut()
    }

    fn tab(&mut self) -> &mut TabAttr {
        self.tab_claimed = true;
        self.list.current_window_mut().current_tab_mut()
    }

    fn run(&mut self, args: &[String]) -> Result<(), ParseError> {
        let mut state = ParserState::new();

        while state.index < args.len() {
            let token = &args[state.index];
            if !token.starts_with('-') {
                state.skip_token();
                continue;
            }

            let start = state;
            let Some((entry, m)) = match_option(args, &mut state) else {
                return Err(ParseError::UnknownOption(unknown_at(token, start)));
            };
            trace!(option = %entry.opt, "recognized option");

            if entry.action.is_global() {
                continue;
            }
            let first_option = std::mem::replace(&mut self.ignore_window_option, false);

            match entry.action {
                Action::Terminator => {
                    debug!("option terminator, stopping");
                    break;
                }
                Action::Execute => {
                    // -x must stand alone and own the rest of the line
                    if start.in_cluster() || state.in_cluster() {
                        return Err(malformed(entry));
                    }
                    let command = state.rest(args);
                    if command.is_empty() {
                        return Err(malformed(entry));
                    }
                    self.tab().command = Some(command.to_vec());
                    break;
                }
                Action::Tab => self.new_tab(),
                Action::Window => self.new_window(first_option),
                _ => self.apply(entry, m)?,
            }
        }

        Ok(())
    }

    fn new_tab(&mut self) {
        if self.can_reuse_window {
            debug!("first --tab, reusing the existing window");
            self.window().reuse_last_window = true;
            self.can_reuse_window = false;
            self.tab_claimed = true;
        } else if !self.tab_claimed {
            self.tab_claimed = true;
        } else {
            debug!("new tab");
            self.window().push_tab(TabAttr::default());
        }
    }

    fn new_window(&mut self, first_option: bool) {
        self.can_reuse_window = false;
        if first_option {
            debug!("leading --window ignored");
            self.tab_claimed = true;
            return;
        }
        debug!("new window");
        self.list.push_window(WindowAttr::new());
        self.tab_claimed = false;
    }

    fn apply(&mut self, entry: &OptionEntry, m: OptionMatch) -> Result<(), ParseError> {
        match entry.action {
            Action::Command => {
                let value = required_value(entry, m)?;
                let argv = split_command(&value)
                    .map_err(|source| ParseError::ShellTokenize { value, source })?;
                self.tab().command = Some(argv);
            }
            Action::WorkingDirectory => {
                self.tab().directory = Some(required_value(entry, m)?);
            }
            Action::Title => self.tab().title = Some(required_value(entry, m)?),
            Action::InitialTitle => {
                self.tab().initial_title = Some(required_value(entry, m)?);
            }
            Action::DynamicTitleMode => {
                let value = required_value(entry, m)?;
                let mode = value
                    .parse::<DynamicTitleMode>()
                    .map_err(|reason| invalid(entry, &value, reason))?;
                self.tab().dynamic_title_mode = mode;
            }
            Action::Hold => self.tab().hold = true,
            Action::ActiveTab => self.tab().active = true,
            Action::ColorText => {
                let value = required_value(entry, m)?;
                validate_color(&value).map_err(|reason| invalid(entry, &value, reason))?;
                self.tab().color_text = Some(value);
            }
            Action::ColorBg => {
                let value = required_value(entry, m)?;
                validate_color(&value).map_err(|reason| invalid(entry, &value, reason))?;
                self.tab().color_bg = Some(value);
            }

            Action::Display => self.window().display = Some(required_value(entry, m)?),
            Action::Geometry => self.window().geometry = Some(required_value(entry, m)?),
            Action::Role => self.window().role = Some(required_value(entry, m)?),
            Action::Workspace => {
                let value = required_value(entry, m)?;
                let n = value
                    .parse::<i32>()
                    .map_err(|e| invalid(entry, &value, e.to_string()))?;
                self.window().workspace = n;
            }
            Action::SmClientId => {
                self.window().sm_client_id = Some(required_value(entry, m)?);
            }
            Action::StartupId => self.window().startup_id = Some(required_value(entry, m)?),
            Action::Icon => self.window().icon = Some(required_value(entry, m)?),
            Action::DropDown => self.window().drop_down = true,
            Action::ShowMenubar => self.window().menubar = Visibility::Show,
            Action::HideMenubar => self.window().menubar = Visibility::Hide,
            Action::ShowBorders => self.window().borders = Visibility::Show,
            Action::HideBorders => self.window().borders = Visibility::Hide,
            Action::ShowToolbar => self.window().toolbar = Visibility::Show,
            Action::HideToolbar => self.window().toolbar = Visibility::Hide,
            Action::ShowScrollbar => self.window().scrollbar = Visibility::Show,
            Action::HideScrollbar => self.window().scrollbar = Visibility::Hide,
            Action::Fullscreen => self.window().fullscreen = true,
            Action::Maximize => self.window().maximize = true,
            Action::Minimize => self.window().minimize = true,
            Action::Font => self.window().font = Some(required_value(entry, m)?),
            Action::Zoom => {
                let value = required_value(entry, m)?;
                let n = value
                    .parse::<i32>()
                    .map_err(|e| invalid(entry, &value, e.to_string()))?;
                if !(ZOOM_MIN..=ZOOM_MAX).contains(&n) {
                    return Err(invalid(
                        entry,
                        &value,
                        format!("zoom level must be between {} and {}", ZOOM_MIN, ZOOM_MAX),
                    ));
                }
                self.window().zoom = n;
            }

            Action::Terminator | Action::Execute | Action::Tab | Action::Window => {
                unreachable!("handled by the scan loop")
            }
            _ => {}
        }
        Ok(())
    }
}

fn unknown_at(token: &str, at: ParserState) -> UnknownOption {
    if at.in_cluster() {
        if let Some(c) = token.chars().nth(1 + at.short_offset) {
            return UnknownOption::Short(c);
        }
    }
    UnknownOption::Token(token.to_string())
}

fn malformed(entry: &OptionEntry) -> ParseError {
    ParseError::MalformedCommand {
        option: entry.opt.to_string(),
    }
}

fn invalid(entry: &OptionEntry, value: &str, reason: String) -> ParseError {
    ParseError::InvalidValue {
        option: entry.opt.to_string(),
        value: value.to_string(),
        reason,
    }
}

/// Fill unset displays and working directories across the whole list.
fn apply_defaults(list: &mut AttributeList, defaults: &LaunchDefaults) {
    for window in list.windows_mut() {
        if window.display.is_none() {
            window.display.clone_from(&defaults.display);
        }
        if let Some(dir) = &defaults.working_directory {
            for tab in window.tabs_mut() {
                if tab.directory.is_none() {
                    tab.directory = Some(dir.clone());
                }
            }
        }
    }
}
