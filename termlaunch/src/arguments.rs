use termlaunch::{parse_attributes, AttributeList, GlobalOptions, LaunchDefaults, Preferences};

pub const USAGE: &str = r#"Usage:
  termlaunch [OPTION...]

General Options:
  -h, --help                          Print this help message and exit
  -V, --version                       Print version information and exit
  --disable-server                    Do not register with a running instance
  --default-display=DISPLAY           Default X display to use
  --default-working-directory=DIR     Default working directory for tabs

Separators:
  --tab                               Open a new tab in the last-specified
                                      window; more than one may be given
  --window                            Open a new window containing one tab;
                                      more than one may be given

Tab Options:
  -x, --execute                       Execute the remainder of the command
                                      line inside the terminal
  -e, --command=COMMAND               Execute the argument to this option
                                      inside the terminal
  --working-directory=DIR             Set the working directory
  -T, --title=TITLE                   Set the title
  --dynamic-title-mode=MODE           Set the dynamic title mode:
                                      replace, before, after or none
  --initial-title=TITLE               Set the initial title
  -H, --hold                          Do not close the tab after the
                                      command exited
  --active-tab                        Make this tab the active one
  --color-text=COLOR                  Set the text color
  --color-bg=COLOR                    Set the background color

Window Options:
  --display=DISPLAY                   X display to use
  --geometry=GEOMETRY                 X geometry specification, WxH+X+Y
  --role=ROLE                         Set the window role
  --startup-id=STRING                 Specify the startup id
  -I, --icon=ICON                     Set the window icon by name or file
  --drop-down                         Drop-down window
  --fullscreen                        Set fullscreen mode
  --maximize                          Maximize the window
  --minimize                          Minimize the window
  --show-menubar, --hide-menubar      Turn the menubar on or off
  --show-borders, --hide-borders      Turn the window decorations on or off
  --show-toolbar, --hide-toolbar      Turn the toolbar on or off
  --show-scrollbar, --hide-scrollbar  Turn the scrollbar on or off
  --workspace=N                       Open on workspace N
  --sm-client-id=ID                   Session management client id
  --font=FONT                         Set the terminal font
  --zoom=ZOOM                         Set the zoom level: -7 to 7

Environment variables: TERMLAUNCH_RC, TERMLAUNCH_SCREEN, RUST_LOG.
"#;

#[derive(Debug)]
pub struct Cmdline {
    pub disable_server: bool,
    pub windows: AttributeList,
}

/// First pass for program-wide options. Exits on `--help`/`--version`
/// before anything else (preferences included) is looked at.
pub fn parse_globals(args: &[String]) -> termlaunch::Result<GlobalOptions> {
    let globals = GlobalOptions::parse(args)?;

    if globals.help {
        print!("{}", USAGE);
        std::process::exit(0);
    }
    if globals.version {
        println!("termlaunch {}", env!("CARGO_PKG_VERSION"));
        std::process::exit(0);
    }

    Ok(globals)
}

/// The full attribute parse, with command-line defaults over preferences.
pub fn parse_args(
    args: &[String],
    globals: &GlobalOptions,
    prefs: &Preferences,
) -> termlaunch::Result<Cmdline> {
    let defaults = launch_defaults(globals, prefs);
    let windows = parse_attributes(args, false, &defaults)?;

    Ok(Cmdline {
        disable_server: globals.disable_server,
        windows,
    })
}

/// Command-line defaults win over the preferences file.
fn launch_defaults(globals: &GlobalOptions, prefs: &Preferences) -> LaunchDefaults {
    LaunchDefaults {
        display: globals.default_display.clone(),
        working_directory: globals
            .default_working_directory
            .clone()
            .or_else(|| prefs.default_working_directory.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn command_line_directory_beats_preferences() {
        let prefs = Preferences {
            default_working_directory: Some("/from/prefs".into()),
            ..Preferences::default()
        };
        let globals = GlobalOptions::parse(&args(&["--default-working-directory=/cli"])).unwrap();
        let d = launch_defaults(&globals, &prefs);
        assert_eq!(d.working_directory.as_deref(), Some("/cli"));

        let globals = GlobalOptions::parse(&[]).unwrap();
        let d = launch_defaults(&globals, &prefs);
        assert_eq!(d.working_directory.as_deref(), Some("/from/prefs"));
        assert_eq!(d.display, None);
    }

    #[test]
    fn parse_args_applies_defaults() {
        let argv = args(&["--default-display", ":3", "--disable-server", "--tab", "--tab"]);
        let globals = parse_globals(&argv).unwrap();
        let cmd = parse_args(&argv, &globals, &Preferences::default()).unwrap();
        assert!(cmd.disable_server);
        let w = &cmd.windows.windows()[0];
        assert_eq!(w.tabs().len(), 2);
        assert_eq!(w.display.as_deref(), Some(":3"));
    }

    #[test]
    fn parse_args_reports_parse_errors() {
        let argv = args(&["--zoom"]);
        let globals = parse_globals(&argv).unwrap();
        let err = parse_args(&argv, &globals, &Preferences::default()).unwrap_err();
        assert!(matches!(
            err,
            termlaunch::LaunchError::Parse(termlaunch::ParseError::MissingValue { .. })
        ));
    }

    #[test]
    fn usage_mentions_every_long_option() {
        for entry in termlaunch::options::OPTIONS {
            if let Some(name) = entry.opt.long_name() {
                // accepted for compatibility, intentionally undocumented
                if name.is_empty() || matches!(name, "sync" | "g-fatal-warnings") {
                    continue;
                }
                assert!(USAGE.contains(&format!("--{}", name)), "--{} undocumented", name);
            }
        }
    }
}
