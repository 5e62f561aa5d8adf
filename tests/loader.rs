//! Integration tests for loading divisions from text, CSV and JSON.

use std::path::PathBuf;

use division_elimination::{
    load_division, parse_division, parse_division_as, parse_division_csv, parse_division_json,
    DivisionFormat, EliminationError, Standings,
};

fn fixture(name: &str) -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");
    path.push(name);
    path
}

fn assert_teams4(d: &Standings) {
    assert_eq!(d.number_of_teams(), 4);
    assert_eq!(
        d.teams().collect::<Vec<_>>(),
        vec!["Atlanta", "Philadelphia", "New_York", "Montreal"]
    );
    assert_eq!(d.wins("Philadelphia").unwrap(), 80);
    assert_eq!(d.losses("Philadelphia").unwrap(), 79);
    assert_eq!(d.remaining("New_York").unwrap(), 6);
    assert_eq!(d.against("Atlanta", "New_York").unwrap(), 6);
    assert_eq!(d.against("New_York", "Atlanta").unwrap(), 6);
    assert_eq!(d.against("Montreal", "Montreal").unwrap(), 0);
    assert_eq!(d.leader(), Some(0));
    assert_eq!(d.max_wins(), 83);
}

#[test]
fn text_csv_and_json_agree() {
    assert_teams4(&load_division(fixture("teams4.txt")).unwrap());
    assert_teams4(&load_division(fixture("teams4.csv")).unwrap());
    assert_teams4(&load_division(fixture("teams4.json")).unwrap());
}

#[test]
fn format_follows_extension() {
    assert_eq!(DivisionFormat::from_path(&fixture("a.CSV")), DivisionFormat::Csv);
    assert_eq!(DivisionFormat::from_path(&fixture("a.json")), DivisionFormat::Json);
    assert_eq!(DivisionFormat::from_path(&fixture("teams4.txt")), DivisionFormat::Text);
    assert_eq!(DivisionFormat::from_path(&fixture("teams4")), DivisionFormat::Text);
}

#[test]
fn text_line_breaks_are_not_significant() {
    let d = parse_division("2 A 3 1 2 0 2\nB 2 2 2\n2 0").unwrap();
    assert_eq!(d.against("A", "B").unwrap(), 2);
}

#[test]
fn text_reports_line_of_bad_token() {
    let err = parse_division("2\nA 3 1 2 0 2\nB 2 x 2 2 0\n").unwrap_err();
    assert!(matches!(err, EliminationError::Parse { line: 3, .. }), "{:?}", err);

    // truncated input is caught against the team count up front
    let err = parse_division("2\nA 3 1 2 0 2\n").unwrap_err();
    assert!(matches!(err, EliminationError::Parse { line: 1, .. }), "{:?}", err);

    let err = parse_division("1\nA 3 1 0 0\nB\n").unwrap_err();
    assert!(matches!(err, EliminationError::Parse { line: 3, .. }), "{:?}", err);

    assert!(matches!(parse_division(""), Err(EliminationError::Parse { .. })));
    assert!(matches!(parse_division("1\nA -3 1 0 0"), Err(EliminationError::Parse { .. })));
}

#[test]
fn invalid_tables_are_rejected() {
    // asymmetric
    assert!(matches!(
        parse_division("2\nA 1 1 2 0 2\nB 1 1 1 1 0"),
        Err(EliminationError::InvalidStandings(_))
    ));
    // games against itself
    assert!(matches!(
        parse_division("1\nA 1 1 1 1"),
        Err(EliminationError::InvalidStandings(_))
    ));
    // duplicate names
    assert!(matches!(
        parse_division("2\nA 1 1 0 0 0\nA 1 1 0 0 0"),
        Err(EliminationError::InvalidStandings(_))
    ));
    // short CSV row
    assert!(matches!(
        parse_division_csv("A,1,1,0,0,0\nB,1,1,0,0"),
        Err(EliminationError::InvalidStandings(_))
    ));
}

#[test]
fn csv_without_header_and_with_spaces() {
    let d = parse_division_csv("A, 5, 1, 1, 0, 1\nB, 4, 2, 1, 1, 0\n").unwrap();
    assert_eq!(d.wins("A").unwrap(), 5);
    assert_eq!(d.against("B", "A").unwrap(), 1);
    assert!(matches!(
        parse_division_csv("A,5,1\n"),
        Err(EliminationError::Parse { line: 1, .. })
    ));
    assert!(matches!(
        parse_division_csv("team,w,l,r,a\nA,five,1,0,0\n"),
        Err(EliminationError::Parse { line: 2, .. })
    ));
}

#[test]
fn json_round_trips_through_standings() {
    let d = load_division(fixture("teams4.json")).unwrap();
    let json = serde_json::to_string(&d).unwrap();
    let back: Standings = serde_json::from_str(&json).unwrap();
    assert_teams4(&back);
    assert!(serde_json::from_str::<Standings>(r#"[{"name":"A","wins":1,"losses":0,"remaining":0,"against":[1]}]"#).is_err());
    assert!(matches!(parse_division_json("[{"), Err(EliminationError::Parse { .. })));
}

#[test]
fn parse_as_dispatches_on_format() {
    let d = parse_division_as("A,1,0,0,0", DivisionFormat::Csv).unwrap();
    assert_eq!(d.number_of_teams(), 1);
    let d = parse_division_as("1 A 1 0 0 0", DivisionFormat::Text).unwrap();
    assert_eq!(d.number_of_teams(), 1);
}

#[test]
fn missing_file_is_io_error() {
    assert!(matches!(
        load_division(fixture("no_such_division.txt")),
        Err(EliminationError::Io(_))
    ));
}

#[test]
fn huge_team_count_is_a_parse_error() {
    for input in ["4000000000\n", "4000000000 A 1 1 1 0", "18446744073709551615"] {
        assert!(
            matches!(parse_division(input), Err(EliminationError::Parse { line: 1, .. })),
            "{:?}",
            input
        );
    }
    assert!(matches!(
        parse_division_as("3\nA 1 1 0 0 0 0", DivisionFormat::Text),
        Err(EliminationError::Parse { line: 1, .. })
    ));
}

#[test]
fn records_at_the_u32_limit_do_not_overflow() {
    let d = parse_division_json(
        r#"[{"name":"A","wins":4294967295,"losses":0,"remaining":1,"against":[0,0]},
            {"name":"B","wins":4294967295,"losses":0,"remaining":4294967295,"against":[0,0]}]"#,
    )
    .unwrap();
    assert_eq!(d.records()[0].max_wins(), u64::from(u32::MAX) + 1);
    assert_eq!(d.records()[1].max_wins(), 2 * u64::from(u32::MAX));
    assert!(!division_elimination::is_eliminated(&d, "A").unwrap());
    assert!(!division_elimination::is_eliminated(&d, "B").unwrap());

    let status = division_elimination::team_status(&d, 0).unwrap();
    assert_eq!(status.max_wins, 4_294_967_296);
}
