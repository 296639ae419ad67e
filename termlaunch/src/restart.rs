//! Rebuild a command line from an [`AttributeList`], e.g. to restart a
//! session. Parsing the result with `can_reuse_window = false` gives back an
//! equal list, except for `startup_id` (only meaningful once) and
//! `reuse_last_window` (depends on the receiving process).

use launchopt::join_command;

use crate::attrs::{AttributeList, TabAttr, Visibility, WindowAttr, ZOOM_DEFAULT};

impl AttributeList {
    pub fn to_args(&self) -> Vec<String> {
        let mut args = Vec::new();
        for (i, window) in self.windows().iter().enumerate() {
            if i > 0 {
                args.push("--window".to_string());
            }
            push_window(&mut args, window);
            // Every tab gets its own --tab: the first one takes over the
            // window's implicit tab, so an untouched first tab survives.
            for tab in window.tabs() {
                args.push("--tab".to_string());
                push_tab(&mut args, tab);
            }
        }
        args
    }
}

fn push_value(args: &mut Vec<String>, option: &str, value: &Option<String>) {
    if let Some(value) = value {
        args.push(option.to_string());
        args.push(value.clone());
    }
}

fn push_flag(args: &mut Vec<String>, option: &str, set: bool) {
    if set {
        args.push(option.to_string());
    }
}

fn push_visibility(args: &mut Vec<String>, name: &str, visibility: Visibility) {
    match visibility {
        Visibility::Default => {}
        Visibility::Show => args.push(format!("--show-{}", name)),
        Visibility::Hide => args.push(format!("--hide-{}", name)),
    }
}

fn push_window(args: &mut Vec<String>, window: &WindowAttr) {
    push_value(args, "--display", &window.display);
    push_value(args, "--geometry", &window.geometry);
    push_value(args, "--role", &window.role);
    push_value(args, "--icon", &window.icon);
    push_value(args, "--font", &window.font);
    push_value(args, "--sm-client-id", &window.sm_client_id);
    if window.zoom != ZOOM_DEFAULT {
        args.push(format!("--zoom={}", window.zoom));
    }
    if window.workspace != -1 {
        args.push(format!("--workspace={}", window.workspace));
    }
    push_flag(args, "--fullscreen", window.fullscreen);
    push_flag(args, "--maximize", window.maximize);
    push_flag(args, "--minimize", window.minimize);
    push_flag(args, "--drop-down", window.drop_down);
    push_visibility(args, "menubar", window.menubar);
    push_visibility(args, "borders", window.borders);
    push_visibility(args, "toolbar", window.toolbar);
    push_visibility(args, "scrollbar", window.scrollbar);
}

fn push_tab(args: &mut Vec<String>, tab: &TabAttr) {
    push_value(args, "--working-directory", &tab.directory);
    push_value(args, "--title", &tab.title);
    push_value(args, "--initial-title", &tab.initial_title);
    if let Some(mode) = tab.dynamic_title_mode.as_arg() {
        args.push(format!("--dynamic-title-mode={}", mode));
    }
    push_flag(args, "--hold", tab.hold);
    push_flag(args, "--active-tab", tab.active);
    push_value(args, "--color-text", &tab.color_text);
    push_value(args, "--color-bg", &tab.color_bg);
    if let Some(command) = &tab.command {
        args.push("--command".to_string());
        args.push(join_command(command));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attrs::DynamicTitleMode;
    use crate::builder::{parse_attributes, LaunchDefaults};
    use pretty_assertions::assert_eq;

    fn reparse(list: &AttributeList) -> AttributeList {
        parse_attributes(&list.to_args(), false, &LaunchDefaults::default()).unwrap()
    }

    #[test]
    fn default_list_round_trips() {
        let list = AttributeList::new();
        assert_eq!(list.to_args(), vec!["--tab"]);
        assert_eq!(reparse(&list), list);
    }

    #[test]
    fn untouched_tabs_keep_their_count() {
        let mut list = AttributeList::new();
        list.current_window_mut().push_tab(TabAttr::default());
        list.current_window_mut().push_tab(TabAttr::default());
        assert_eq!(reparse(&list), list);
    }

    #[test]
    fn rich_list_round_trips() {
        let mut list = AttributeList::new();
        {
            let w = list.current_window_mut();
            w.display = Some(":0".into());
            w.geometry = Some("120x40-0+10".into());
            w.role = Some("main".into());
            w.zoom = 3;
            w.workspace = 2;
            w.menubar = Visibility::Hide;
            w.scrollbar = Visibility::Show;
            w.maximize = true;
            w.sm_client_id = Some("abc".into());
            let t = w.current_tab_mut();
            t.directory = Some("/home/user/my dir".into());
            t.title = Some("".into());
            t.command = Some(vec!["sh".into(), "-c".into(), "echo 'hi' \"$X\"".into()]);
            t.hold = true;
            let t = w.push_tab(TabAttr::default());
            t.dynamic_title_mode = DynamicTitleMode::Prepend;
            t.color_bg = Some("#000000".into());
            t.active = true;
        }
        {
            let w = list.push_window(WindowAttr::new());
            w.fullscreen = true;
            w.borders = Visibility::Hide;
            w.font = Some("Mono 9".into());
            w.current_tab_mut().initial_title = Some("--tab".into());
        }
        assert_eq!(reparse(&list), list);
    }

    #[test]
    fn startup_id_is_not_emitted() {
        let mut list = AttributeList::new();
        list.current_window_mut().startup_id = Some("id".into());
        assert!(!list.to_args().iter().any(|a| a.contains("startup")));
    }

    #[test]
    fn parsed_command_line_round_trips() {
        let args: Vec<String> = [
            "--geometry=80x24",
            "--working-directory=/a",
            "--tab",
            "--working-directory=/b",
            "--window",
            "--display=:1",
            "--role",
            "r",
            "-x",
            "ls",
            "-la",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();
        let list = parse_attributes(&args, false, &LaunchDefaults::default()).unwrap();
        assert_eq!(reparse(&list), list);
    }
}
