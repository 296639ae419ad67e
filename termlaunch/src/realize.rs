//! Hand a finished [`AttributeList`] to whatever actually opens windows.

use std::io::Write;

use launchopt::{Geometry, Placement};
use tracing::{debug, warn};

use crate::attrs::{AttributeList, TabAttr, Visibility, WindowAttr};
use crate::error::Result;
use crate::prefs::Preferences;

/// The screen windows are placed against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Screen {
    pub width: u32,
    pub height: u32,
}

impl Default for Screen {
    fn default() -> Self {
        Screen {
            width: 1920,
            height: 1080,
        }
    }
}

impl Screen {
    /// `WxH`, the same size grammar as geometry strings.
    pub fn parse(s: &str) -> Option<Screen> {
        let g = Geometry::parse(s);
        (g.mask == launchopt::GeometryMask::WIDTH | launchopt::GeometryMask::HEIGHT).then_some(
            Screen {
                width: g.width,
                height: g.height,
            },
        )
    }
}

/// Receives windows and tabs in the order they should appear.
pub trait WindowOpener {
    /// `placement` is `None` when the geometry could not be parsed; the
    /// window manager decides.
    fn open_window(
        &mut self,
        index: usize,
        window: &WindowAttr,
        placement: Option<Placement>,
    ) -> Result<()>;

    fn open_tab(&mut self, window_index: usize, tab_index: usize, tab: &TabAttr) -> Result<()>;
}

/// Walk `list` in order, resolving each window's geometry (or the preferred
/// default) against `screen`.
pub fn realize<O: WindowOpener>(
    list: &AttributeList,
    prefs: &Preferences,
    screen: Screen,
    opener: &mut O,
) -> Result<()> {
    let fallback = Geometry::parse(&prefs.default_geometry);
    if fallback.is_empty() {
        warn!(geometry = %prefs.default_geometry, "unusable default geometry");
    }
    let default_size = if fallback.has_size() {
        (fallback.width, fallback.height)
    } else {
        (80, 24)
    };

    for (i, window) in list.windows().iter().enumerate() {
        let spec = window.geometry.as_deref().unwrap_or(&prefs.default_geometry);
        let geometry = Geometry::parse(spec);
        let placement = if geometry.is_empty() {
            warn!(geometry = %spec, "ignoring unparsable geometry");
            None
        } else {
            Some(geometry.place((screen.width, screen.height), default_size))
        };

        debug!(window = i, tabs = window.tabs().len(), "opening window");
        opener.open_window(i, window, placement)?;
        for (j, tab) in window.tabs().iter().enumerate() {
            opener.open_tab(i, j, tab)?;
        }
    }

    Ok(())
}

// ============================================================================
// PlanPrinter
// ============================================================================

/// Writes one line per window and per tab instead of opening anything.
pub struct PlanPrinter<W: Write> {
    out: W,
}

impl<W: Write> PlanPrinter<W> {
    pub fn new(out: W) -> Self {
        PlanPrinter { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

fn field(line: &mut String, key: &str, value: &Option<String>) {
    if let Some(v) = value {
        line.push_str(&format!(" {}={:?}", key, v));
    }
}

fn flag(line: &mut String, key: &str, set: bool) {
    if set {
        line.push(' ');
        line.push_str(key);
    }
}

fn visibility(line: &mut String, key: &str, v: Visibility) {
    match v {
        Visibility::Default => {}
        Visibility::Show => line.push_str(&format!(" {}=show", key)),
        Visibility::Hide => line.push_str(&format!(" {}=hide", key)),
    }
}

impl<W: Write> WindowOpener for PlanPrinter<W> {
    fn open_window(
        &mut self,
        index: usize,
        window: &WindowAttr,
        placement: Option<Placement>,
    ) -> Result<()> {
        let mut line = format!("window {}", index + 1);
        if let Some(p) = placement {
            line.push_str(&format!(" size={}x{}", p.width, p.height));
            if let (Some(x), Some(y)) = (p.x, p.y) {
                line.push_str(&format!(" position={},{}", x, y));
            } else if let Some(x) = p.x {
                line.push_str(&format!(" position={},-", x));
            }
        }
        field(&mut line, "display", &window.display);
        field(&mut line, "role", &window.role);
        field(&mut line, "icon", &window.icon);
        field(&mut line, "font", &window.font);
        field(&mut line, "startup-id", &window.startup_id);
        field(&mut line, "sm-client-id", &window.sm_client_id);
        if window.zoom != crate::attrs::ZOOM_DEFAULT {
            line.push_str(&format!(" zoom={}", window.zoom));
        }
        if window.workspace != -1 {
            line.push_str(&format!(" workspace={}", window.workspace));
        }
        flag(&mut line, "fullscreen", window.fullscreen);
        flag(&mut line, "maximize", window.maximize);
        flag(&mut line, "minimize", window.minimize);
        flag(&mut line, "drop-down", window.drop_down);
        flag(&mut line, "reuse", window.reuse_last_window);
        visibility(&mut line, "menubar", window.menubar);
        visibility(&mut line, "borders", window.borders);
        visibility(&mut line, "toolbar", window.toolbar);
        visibility(&mut line, "scrollbar", window.scrollbar);
        writeln!(self.out, "{}", line)?;
        Ok(())
    }

    fn open_tab(&mut self, window_index: usize, tab_index: usize, tab: &TabAttr) -> Result<()> {
        let mut line = format!("  tab {}.{}", window_index + 1, tab_index + 1);
        if let Some(command) = &tab.command {
            line.push_str(&format!(" command={:?}", command));
        }
        field(&mut line, "directory", &tab.directory);
        field(&mut line, "title", &tab.title);
        field(&mut line, "initial-title", &tab.initial_title);
        if let Some(mode) = tab.dynamic_title_mode.as_arg() {
            line.push_str(&format!(" dynamic-title-mode={}", mode));
        }
        field(&mut line, "color-text", &tab.color_text);
        field(&mut line, "color-bg", &tab.color_bg);
        flag(&mut line, "hold", tab.hold);
        flag(&mut line, "active", tab.active);
        writeln!(self.out, "{}", line)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{parse_attributes, LaunchDefaults};

    fn list(v: &[&str]) -> AttributeList {
        let args: Vec<String> = v.iter().map(|s| s.to_string()).collect();
        parse_attributes(&args, false, &LaunchDefaults::default()).unwrap()
    }

    #[derive(Default)]
    struct Recorder {
        events: Vec<String>,
        placements: Vec<Option<Placement>>,
    }

    impl WindowOpener for Recorder {
        fn open_window(
            &mut self,
            index: usize,
            _window: &WindowAttr,
            placement: Option<Placement>,
        ) -> Result<()> {
            self.events.push(format!("w{}", index));
            self.placements.push(placement);
            Ok(())
        }

        fn open_tab(&mut self, window_index: usize, tab_index: usize, _tab: &TabAttr) -> Result<()> {
            self.events.push(format!("t{}.{}", window_index, tab_index));
            Ok(())
        }
    }

    #[test]
    fn visits_windows_then_their_tabs_in_order() {
        let mut rec = Recorder::default();
        let l = list(&["--tab", "--tab", "--window", "--tab"]);
        realize(&l, &Preferences::default(), Screen::default(), &mut rec).unwrap();
        assert_eq!(rec.events, vec!["w0", "t0.0", "t0.1", "w1", "t1.0"]);
    }

    #[test]
    fn window_geometry_beats_default() {
        let mut rec = Recorder::default();
        let l = list(&["--geometry=100x50-10-20", "--window"]);
        let prefs = Preferences {
            default_geometry: "90x30+5+5".into(),
            ..Preferences::default()
        };
        let screen = Screen {
            width: 1000,
            height: 800,
        };
        realize(&l, &prefs, screen, &mut rec).unwrap();
        assert_eq!(
            rec.placements[0],
            Some(Placement {
                width: 100,
                height: 50,
                x: Some(1000 - 100 - 10),
                y: Some(800 - 50 - 20),
            })
        );
        assert_eq!(
            rec.placements[1],
            Some(Placement {
                width: 90,
                height: 30,
                x: Some(5),
                y: Some(5),
            })
        );
    }

    #[test]
    fn partial_geometry_uses_default_size() {
        let mut rec = Recorder::default();
        let l = list(&["--geometry=+1+2"]);
        realize(&l, &Preferences::default(), Screen::default(), &mut rec).unwrap();
        assert_eq!(
            rec.placements[0],
            Some(Placement {
                width: 80,
                height: 24,
                x: Some(1),
                y: Some(2),
            })
        );
    }

    #[test]
    fn position_only_default_geometry_keeps_its_offsets() {
        let mut rec = Recorder::default();
        let l = list(&[]);
        let prefs = Preferences {
            default_geometry: "+5+5".into(),
            ..Preferences::default()
        };
        realize(&l, &prefs, Screen::default(), &mut rec).unwrap();
        assert_eq!(
            rec.placements,
            vec![Some(Placement {
                width: 80,
                height: 24,
                x: Some(5),
                y: Some(5),
            })]
        );
    }

    #[test]
    fn bad_geometry_leaves_placement_to_the_window_manager() {
        let mut rec = Recorder::default();
        let l = list(&["--geometry=huge"]);
        realize(&l, &Preferences::default(), Screen::default(), &mut rec).unwrap();
        assert_eq!(rec.placements, vec![None]);
    }

    #[test]
    fn plan_printer_output() {
        let l = list(&[
            "--geometry=100x30+0+0",
            "--hide-menubar",
            "-T",
            "main",
            "--tab",
            "-H",
            "-x",
            "ls",
            "-la",
        ]);
        let mut printer = PlanPrinter::new(Vec::new());
        realize(&l, &Preferences::default(), Screen::default(), &mut printer).unwrap();
        let out = String::from_utf8(printer.into_inner()).unwrap();
        assert_eq!(
            out,
            "window 1 size=100x30 position=0,0 menubar=hide\n\
             \x20 tab 1.1 title=\"main\"\n\
             \x20 tab 1.2 command=[\"ls\", \"-la\"] hold\n"
        );
    }

    #[test]
    fn screen_parse() {
        assert_eq!(
            Screen::parse("800x600"),
            Some(Screen {
                width: 800,
                height: 600
            })
        );
        assert_eq!(Screen::parse("800"), None);
        assert_eq!(Screen::parse("800x600+1+1"), None);
    }
}
