//! Panic and error report hooks

use std::{panic, process};

use color_eyre::{
    config::{HookBuilder, PanicHook},
    eyre::Result,
};

use crate::infrastructure::tui::{real::RealTui, TuiLike};

fn bug_notice() -> String {
    format!(
        "This is a bug. Please report it along with {} version {}.",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    )
}

/// Leave raw mode and the alternate screen so the report is readable
fn restore_terminal() {
    match RealTui::new() {
        Ok(mut tui) => {
            if let Err(e) = tui.exit() {
                tracing::error!("Unable to restore terminal after panic: {e:?}");
            }
        }
        Err(e) => tracing::error!("Unable to open terminal after panic: {e:?}"),
    }
}

#[cfg(not(debug_assertions))]
fn show_report(panic_hook: &PanicHook, panic_info: &panic::PanicHookInfo<'_>) {
    use human_panic::{handle_dump, print_msg, Metadata};

    let meta = Metadata::new(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
    let dump = handle_dump(&meta, panic_info);
    if let Err(e) = print_msg(dump, &meta) {
        eprintln!("Failed to print crash report: {e}");
    }
    eprintln!("{}", panic_hook.panic_report(panic_info));
}

#[cfg(debug_assertions)]
fn show_report(_panic_hook: &PanicHook, panic_info: &panic::PanicHookInfo<'_>) {
    better_panic::Settings::auto()
        .most_recent_first(false)
        .lineno_suffix(true)
        .verbosity(better_panic::Verbosity::Full)
        .create_panic_handler()(panic_info);
}

/// Install color-eyre hooks and a panic hook that restores the terminal first
pub fn initialize_panic_handler() -> Result<()> {
    let (panic_hook, eyre_hook) = HookBuilder::default()
        .panic_section(bug_notice())
        .capture_span_trace_by_default(false)
        .display_location_section(false)
        .display_env_section(false)
        .into_hooks();
    eyre_hook.install()?;

    panic::set_hook(Box::new(move |panic_info| {
        restore_terminal();

        let report = panic_hook.panic_report(panic_info).to_string();
        log::error!("Panic: {}", strip_ansi_escapes::strip_str(report));

        show_report(&panic_hook, panic_info);
        process::exit(libc::EXIT_FAILURE);
    }));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bug_notice_names_package() {
        let notice = bug_notice();
        assert!(notice.contains("widgetui"));
        assert!(notice.contains(env!("CARGO_PKG_VERSION")));
    }
}
