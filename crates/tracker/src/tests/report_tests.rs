use super::*;

fn render_banner(variant: Variant) -> String {
    let mut out = Vec::new();
    write_start_banner(&mut out, variant, Position::ORIGIN).expect("banner");
    String::from_utf8(out).expect("utf8")
}

fn render_summary(summary: &SessionSummary) -> String {
    let mut out = Vec::new();
    write_summary(&mut out, summary).expect("summary");
    String::from_utf8(out).expect("utf8")
}

fn summary(variant: Variant, final_position: Position, trail: Vec<Direction>) -> SessionSummary {
    SessionSummary {
        variant,
        final_position,
        accepted_moves: trail.len(),
        rejected_commands: 0,
        returned_to_origin: final_position.is_origin(),
        trail,
    }
}

#[test]
fn simple_banner_lists_axis_hints() {
    let banner = render_banner(Variant::Simple);
    let lines: Vec<_> = banner.lines().collect();
    assert_eq!(lines[0], "=== GPS Tracker Simulator ===");
    assert_eq!(lines[1], "Starting position: (0, 0)");
    assert_eq!(lines[2], "");
    assert_eq!(lines[3], "Commands:");
    assert_eq!(lines[4], "  N or n or North or north = Move North (y+1)");
    assert_eq!(lines[7], "  W or w or West or west = Move West (x-1)");
    assert_eq!(lines[8], "  STOP = End session");
    assert_eq!(lines[9], "-".repeat(40));
}

#[test]
fn detailed_banner_has_own_title_and_wider_rule() {
    let banner = render_banner(Variant::Detailed);
    let lines: Vec<_> = banner.lines().collect();
    assert_eq!(lines[0], "=== GPS Tracker Simulator (Detailed version) ===");
    assert_eq!(lines[5], "  S or s or South or south = Move South");
    assert_eq!(lines.last().copied(), Some("-".repeat(45).as_str()));
}

#[test]
fn move_feedback_names_direction_and_position() {
    assert_eq!(
        move_feedback(Direction::East, Position::new(2, 1)),
        "Moved East. Current position: (2, 1)"
    );
}

#[test]
fn simple_summary_omits_count_and_trail() {
    let text = render_summary(&summary(
        Variant::Simple,
        Position::new(2, 1),
        vec![Direction::North, Direction::East, Direction::East],
    ));
    assert!(text.starts_with('\n'));
    assert!(text.contains("SESSION ENDED\nFinal position: (2, 1)\n"));
    assert!(text.contains("You did not return to the origin (0, 0)."));
    assert!(!text.contains("Total moves made"));
    assert!(!text.contains("Move history"));
}

#[test]
fn detailed_summary_reports_count_and_trail() {
    let text = render_summary(&summary(
        Variant::Detailed,
        Position::ORIGIN,
        vec![Direction::North, Direction::South],
    ));
    assert!(text.contains("Total moves made: 2"));
    assert!(text.contains("Congratulations! You returned to the origin (0, 0)!"));
    assert!(text.contains("Move history: North -> South"));
    assert!(text.ends_with(&format!("{}\n", "=".repeat(45))));
}

#[test]
fn detailed_summary_skips_empty_trail() {
    let text = render_summary(&summary(Variant::Detailed, Position::ORIGIN, Vec::new()));
    assert!(text.contains("Total moves made: 0"));
    assert!(!text.contains("Move history"));
}

#[test]
fn summary_serializes_for_machine_output() {
    let value = serde_json::to_value(summary(
        Variant::Detailed,
        Position::new(-1, 0),
        vec![Direction::West],
    ))
    .expect("json");
    assert_eq!(value["variant"], "detailed");
    assert_eq!(value["final_position"]["x"], -1);
    assert_eq!(value["returned_to_origin"], false);
    assert_eq!(value["trail"][0], "west");
}
