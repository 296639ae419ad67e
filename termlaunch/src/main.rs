mod arguments;

use termlaunch::error::yourfault;
use termlaunch::{realize, PlanPrinter, Preferences, Screen};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn init_logging() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "termlaunch=warn".to_string()),
        ))
        .init();
}

fn screen() -> Screen {
    match std::env::var("TERMLAUNCH_SCREEN") {
        Ok(s) => Screen::parse(&s).unwrap_or_else(|| {
            tracing::warn!(screen = %s, "TERMLAUNCH_SCREEN is not WxH, using default");
            Screen::default()
        }),
        Err(_) => Screen::default(),
    }
}

/// Program arguments without the program name; `None` if any of them is
/// not UTF-8.
fn collect_args() -> Option<Vec<String>> {
    std::env::args_os()
        .skip(1)
        .map(|a| a.into_string().ok())
        .collect()
}

fn main() {
    init_logging();

    let args = match collect_args() {
        Some(a) => a,
        None => yourfault("termlaunch: argument is not valid UTF-8"),
    };

    let globals = match arguments::parse_globals(&args) {
        Ok(g) => g,
        Err(e) => yourfault(&format!("termlaunch: {}", e)),
    };

    let prefs = match Preferences::load() {
        Ok(p) => p,
        Err(e) => yourfault(&format!("termlaunch: {}", e)),
    };

    let cmdline = match arguments::parse_args(&args, &globals, &prefs) {
        Ok(c) => c,
        Err(e) => yourfault(&format!("termlaunch: {}", e)),
    };
    tracing::debug!(
        windows = cmdline.windows.windows().len(),
        tabs = cmdline.windows.tab_count(),
        disable_server = cmdline.disable_server,
        "parsed launch command line"
    );

    let stdout = std::io::stdout();
    let mut printer = PlanPrinter::new(stdout.lock());
    if let Err(e) = realize(&cmdline.windows, &prefs, screen(), &mut printer) {
        yourfault(&format!("termlaunch: {}", e));
    }
}
