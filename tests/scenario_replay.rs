//! Scenario files replayed with a configuration loaded from disk

use std::io::Write;

use portfolio_nav::config::Config;
use portfolio_nav::nav::Sidebar;
use portfolio_nav::scenario::{replay, Scenario, TimelineCause};
use tempfile::NamedTempFile;

fn write_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

const MENU_TOUR: &str = r#"
name = "menu tour"

[[event]]
at_ms = 0
event = { kind = "item_enter", section = "human_interface", item = "Cognitive Design" }

[[event]]
at_ms = 40
event = { kind = "item_enter", section = "human_interface", item = "Spatial Interfaces" }

[[event]]
at_ms = 60
event = { kind = "pointer_move", x = 80.0, y = 140.0 }

[[event]]
at_ms = 70
event = { kind = "pointer_move", x = 84.0, y = 160.0 }

[[event]]
at_ms = 75
event = { kind = "item_leave", section = "human_interface", item = "Spatial Interfaces" }

[[event]]
at_ms = 200
event = { kind = "submenu_enter", section = "human_interface" }

[[event]]
at_ms = 600
event = { kind = "section_leave", section = "human_interface" }

[[event]]
at_ms = 700
event = { kind = "item_enter", section = "contact", item = "GitHub" }
"#;

#[test]
fn test_replay_menu_tour() {
    let config = Config::default();
    let scenario = Scenario::parse(MENU_TOUR).unwrap();
    scenario.validate(&config.nav).unwrap();

    let mut sidebar = Sidebar::new(config.nav.clone(), config.menu.clone());
    let timeline = replay(&mut sidebar, &scenario);

    let changes: Vec<(u64, Option<String>)> = timeline
        .iter()
        .map(|entry| {
            (
                entry.at_ms,
                entry
                    .snapshot
                    .active_item(&"human_interface".into())
                    .map(|item| item.as_str().to_string()),
            )
        })
        .collect();

    assert_eq!(
        changes,
        vec![
            (0, Some("Cognitive Design".to_string())),
            (40, Some("Spatial Interfaces".to_string())),
            (600, None),
        ]
    );
    assert!(timeline
        .iter()
        .all(|entry| matches!(entry.cause, TimelineCause::Event { .. })));

    let stats = sidebar.controller().stats();
    assert_eq!(stats.long_delays, 1);
    assert_eq!(stats.dismissals_cancelled, 1);
    assert_eq!(stats.immediate_dismissals, 1);
}

#[test]
fn test_replay_uses_configured_delays() {
    let config_file = write_file(
        r#"
[menu]
away_delay_ms = 50
"#,
    );
    let config = Config::load(config_file.path()).unwrap();

    let scenario_file = write_file(
        r#"
[[event]]
at_ms = 0
event = { kind = "item_enter", section = "web_design", item = "Utility UI" }

[[event]]
at_ms = 10
event = { kind = "item_leave", section = "web_design", item = "Utility UI" }

[[event]]
at_ms = 100
event = { kind = "submenu_enter", section = "web_design" }
"#,
    );
    let scenario = Scenario::load(scenario_file.path()).unwrap();

    let mut sidebar = Sidebar::new(config.nav.clone(), config.menu.clone());
    let timeline = replay(&mut sidebar, &scenario);

    assert_eq!(timeline.len(), 2);
    assert_eq!(timeline[1].at_ms, 60);
    assert!(matches!(timeline[1].cause, TimelineCause::Dismissal { .. }));
}

#[test]
fn test_timeline_serializes_to_json() {
    let scenario = Scenario::parse(MENU_TOUR).unwrap();
    let mut sidebar = Sidebar::new(Config::default().nav, Default::default());
    let timeline = replay(&mut sidebar, &scenario);

    let json = serde_json::to_value(&timeline).unwrap();
    assert_eq!(json[0]["at_ms"], 0);
    assert_eq!(json[0]["cause"]["type"], "event");
    assert_eq!(json[0]["cause"]["event"]["kind"], "item_enter");
    assert_eq!(
        json[0]["snapshot"]["sections"][0]["active_item"],
        "Cognitive Design"
    );
}
