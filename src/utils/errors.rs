//! User-Friendly Error Formatting
//!
//! Provides user-friendly error messages with troubleshooting hints
//! for common error scenarios.

use std::fmt::Write;

use crate::runtime::RuntimeError;
use crate::scenario::ScenarioError;

/// Format error for user consumption
///
/// Takes technical error and produces user-friendly message with
/// troubleshooting steps and context.
pub fn format_user_error(error: &anyhow::Error) -> String {
    let mut output = String::new();

    writeln!(output).ok();
    writeln!(
        output,
        "╔════════════════════════════════════════════════════════════╗"
    )
    .ok();
    writeln!(
        output,
        "║                     ERROR                                  ║"
    )
    .ok();
    writeln!(
        output,
        "╚════════════════════════════════════════════════════════════╝"
    )
    .ok();
    writeln!(output).ok();

    if let Some(scenario) = find_cause::<ScenarioError>(error) {
        format_scenario_error(&mut output, scenario);
    } else if let Some(runtime) = find_cause::<RuntimeError>(error) {
        format_runtime_error(&mut output, runtime);
    } else if error.to_string().contains("config") {
        format_config_error(&mut output);
    } else {
        format_generic_error(&mut output, &error.to_string());
    }

    writeln!(output).ok();
    writeln!(
        output,
        "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━"
    )
    .ok();
    writeln!(output, "Technical Details:").ok();
    writeln!(output).ok();
    writeln!(output, "{:#}", error).ok();
    writeln!(output).ok();
    writeln!(
        output,
        "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━"
    )
    .ok();
    writeln!(output, "Need Help?").ok();
    writeln!(
        output,
        "  - Run with --verbose for detailed logs: portfolio-nav -vv"
    )
    .ok();

    output
}

fn find_cause<E>(error: &anyhow::Error) -> Option<&E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    error.chain().find_map(|cause| cause.downcast_ref::<E>())
}

fn format_scenario_error(output: &mut String, error: &ScenarioError) {
    writeln!(output, "Scenario Error").ok();
    writeln!(output).ok();
    match error {
        ScenarioError::Io { path, .. } => {
            writeln!(output, "Could not read scenario file {}.", path.display()).ok();
            writeln!(output).ok();
            writeln!(output, "  → Check the path and file permissions").ok();
        }
        ScenarioError::Parse(_) => {
            writeln!(output, "The scenario file is not valid.").ok();
            writeln!(output).ok();
            writeln!(output, "  → Each event is an [[event]] table:").ok();
            writeln!(output, "      [[event]]").ok();
            writeln!(output, "      at_ms = 0").ok();
            writeln!(
                output,
                "      event = {{ kind = \"item_enter\", section = \"web_design\", item = \"Utility UI\" }}"
            )
            .ok();
            writeln!(
                output,
                "  → Known kinds: pointer_move, item_enter, item_leave, submenu_enter,"
            )
            .ok();
            writeln!(output, "    submenu_leave, section_leave, click").ok();
        }
        ScenarioError::UnknownSection { section, .. } => {
            writeln!(output, "Section '{}' is not in the nav layout.", section).ok();
            writeln!(output).ok();
            writeln!(output, "  → List sections with: portfolio-nav sidebar").ok();
        }
        ScenarioError::OutOfOrder { .. } => {
            writeln!(output, "Event timestamps must not decrease.").ok();
            writeln!(output).ok();
            writeln!(output, "  → Sort events by at_ms").ok();
        }
    }
}

fn format_runtime_error(output: &mut String, error: &RuntimeError) {
    writeln!(output, "Sidebar Runtime Error").ok();
    writeln!(output).ok();
    match error {
        RuntimeError::Closed => {
            writeln!(output, "The sidebar event loop stopped unexpectedly.").ok();
        }
        RuntimeError::QueueFull => {
            writeln!(output, "Events arrived faster than they could be handled.").ok();
            writeln!(output).ok();
            writeln!(
                output,
                "  → Raise [runtime] event_queue_capacity in config.toml"
            )
            .ok();
        }
    }
}

fn format_config_error(output: &mut String) {
    writeln!(output, "Configuration Error").ok();
    writeln!(output).ok();
    writeln!(output, "Problem with configuration file.").ok();
    writeln!(output).ok();
    writeln!(output, "Common Causes:").ok();
    writeln!(output).ok();
    writeln!(output, "  1. Configuration file not found").ok();
    if let Some(path) = crate::config::Config::default_path() {
        writeln!(output, "     → Default location: {}", path.display()).ok();
    }
    writeln!(
        output,
        "     → Or specify: portfolio-nav -c /path/to/config.toml"
    )
    .ok();
    writeln!(output).ok();
    writeln!(output, "  2. Invalid TOML syntax").ok();
    writeln!(output, "     → Check for typos, missing quotes, etc.").ok();
    writeln!(output).ok();
    writeln!(output, "  3. Value out of range").ok();
    writeln!(output, "     → Delays must be > 0 ms").ok();
    writeln!(output, "     → history_size must be at least 2").ok();
    writeln!(output, "     → max_sideways_px must be positive").ok();
}

fn format_generic_error(output: &mut String, error: &str) {
    writeln!(output, "Error").ok();
    writeln!(output).ok();
    writeln!(output, "Error: {}", error).ok();
}
