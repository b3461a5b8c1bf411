//! Worked-example regression tests
//!
//! The ten-move example must give 3 landings and 6 crossings however it is
//! laid out on the page.

use safe_dial::*;

#[test]
fn test_example_part1() {
    assert_eq!(part1(EXAMPLE_INPUT).unwrap(), 3);
}

#[test]
fn test_example_part2() {
    assert_eq!(part2(EXAMPLE_INPUT).unwrap(), 6);
}

#[test]
fn test_example_indented_with_surrounding_blank_lines() {
    let input = "
        L68
        L30
        R48
        L5
        R60
        L55
        L1
        L99
        R14
        L82
    ";
    let report = solve(input, &DialConfig::default()).expect("indented example parses");
    assert_eq!(report.landings, 3);
    assert_eq!(report.crossings, 6);
}

#[test]
fn test_example_with_crlf_and_no_trailing_newline() {
    let input = EXAMPLE_INPUT.trim_end().replace('\n', "\r\n");
    assert_eq!(part1(&input).unwrap(), 3);
    assert_eq!(part2(&input).unwrap(), 6);
}

#[test]
fn test_count_functions_agree_with_report() {
    let moves = parse_moves(EXAMPLE_INPUT).unwrap();
    let config = DialConfig::default();
    let report = simulate(&moves, &config).unwrap();

    assert_eq!(count_landings(&moves).unwrap(), report.landings);
    assert_eq!(count_crossings(&moves).unwrap(), report.crossings);
    for rule in CountingRule::ALL {
        assert_eq!(count(rule, &moves, &config).unwrap(), report.get(rule));
    }
}

#[test]
fn test_move_order_matters() {
    // Same moves, different order: landings depend on the threaded state.
    let forward = parse_moves("R50\nR100").unwrap();
    let reversed = parse_moves("R100\nR50").unwrap();
    assert_eq!(count_landings(&forward).unwrap(), 2);
    assert_eq!(count_landings(&reversed).unwrap(), 1);
}

#[test]
fn test_malformed_line_aborts_whole_run() {
    let input = "L68\nL30\nR4x8\nL5";
    match solve(input, &DialConfig::default()) {
        Err(DialError::Parse(MoveParseError::InvalidMagnitude { line, text })) => {
            assert_eq!(line, 3);
            assert_eq!(text, "4x8");
        }
        other => panic!("expected invalid magnitude error, got {other:?}"),
    }
}

#[test]
fn test_read_from_reader_then_solve() {
    let text = read_from(std::io::Cursor::new(EXAMPLE_INPUT), "example").unwrap();
    let report = solve(&text, &DialConfig::default()).unwrap();
    assert_eq!(report.get(CountingRule::Landing), EXAMPLE_LANDINGS);
    assert_eq!(report.get(CountingRule::Crossing), EXAMPLE_CROSSINGS);
}
