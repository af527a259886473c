use super::*;

#[test]
fn normalize_trims_and_uppercases() {
    assert_eq!(normalize("  north\t\n"), "NORTH");
    assert_eq!(normalize("StOp"), "STOP");
    assert_eq!(normalize("   "), "");
}

#[test]
fn short_and_full_forms_map_to_same_direction() {
    for (short, full, direction) in [
        ("n", "North", Direction::North),
        ("S", "south", Direction::South),
        ("e", "EAST", Direction::East),
        ("w", "wEsT", Direction::West),
    ] {
        assert_eq!(Command::parse(short), Ok(Command::Move(direction)));
        assert_eq!(Command::parse(full), Ok(Command::Move(direction)));
    }
}

#[test]
fn stop_is_case_and_whitespace_insensitive() {
    assert_eq!(Command::parse("stop"), Ok(Command::Stop));
    assert_eq!(Command::parse("  Stop  "), Ok(Command::Stop));
    assert_eq!(Command::parse("\tSTOP\r\n"), Ok(Command::Stop));
}

#[test]
fn unknown_tokens_are_rejected_with_normalized_text() {
    let err = Command::parse(" jump ").expect_err("should reject");
    assert_eq!(err.token, "JUMP");
    assert_eq!(err.to_string(), "unrecognized command 'JUMP'");
}

#[test]
fn empty_and_partial_words_are_rejected() {
    for raw in ["", "   ", "no", "nor", "northh", "n n", "st op", "1"] {
        assert!(Command::parse(raw).is_err(), "expected rejection for {raw:?}");
    }
}

#[test]
fn from_str_delegates_to_parse() {
    let command: Command = "west".parse().expect("command");
    assert_eq!(command, Command::Move(Direction::West));
}

#[test]
fn read_line_lossy_replaces_invalid_utf8() {
    let mut input = std::io::Cursor::new(b"n\n\xff\xfe\nlast".to_vec());

    assert_eq!(read_line_lossy(&mut input).expect("read"), Some("n\n".to_string()));
    let garbage = read_line_lossy(&mut input).expect("read").expect("line");
    assert_eq!(garbage, "\u{fffd}\u{fffd}\n");
    assert!(Command::parse(&garbage).is_err());
    assert_eq!(read_line_lossy(&mut input).expect("read"), Some("last".to_string()));
    assert_eq!(read_line_lossy(&mut input).expect("read"), None);
}
