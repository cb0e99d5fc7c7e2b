use std::fs;

use graph_gen::{
    error::{ExpressionError, ScriptError},
    interpreter::value::Coordinate,
    parse_script,
    render::{ListingRenderer, Renderer},
    report::{ErrorReporter, LogFileReporter},
    run,
};
use walkdir::WalkDir;

fn scripts(dir: &str) -> Vec<(String, String)> {
    let mut scripts = Vec::new();

    for entry in
        WalkDir::new(dir).into_iter()
                         .filter_map(Result::ok)
                         .filter(|e| e.path().extension().is_some_and(|ext| ext == "graph"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        scripts.push((path.display().to_string(), content));
    }

    scripts.sort();
    scripts
}

#[test]
fn passing_scripts_parse() {
    let scripts = scripts("tests/scripts/pass");
    assert!(!scripts.is_empty(), "No scripts found in tests/scripts/pass");

    for (path, source) in scripts {
        if let Err(e) = parse_script(&source) {
            panic!("{path} failed:\n{e}");
        }
    }
}

#[test]
fn failing_scripts_fail() {
    let scripts = scripts("tests/scripts/fail");
    assert!(!scripts.is_empty(), "No scripts found in tests/scripts/fail");

    for (path, source) in scripts {
        assert!(parse_script(&source).is_err(), "{path} parsed but was expected to fail");
    }
}

fn assert_success(src: &str) {
    if let Err(e) = parse_script(src) {
        panic!("Script failed: {e}");
    }
}

fn assert_failure(src: &str) -> ScriptError {
    match parse_script(src) {
        Ok(_) => panic!("Script succeeded but was expected to fail"),
        Err(e) => e.error,
    }
}

#[test]
fn axis_commands() {
    assert_success("xrange -10, 10\nyrange 0, 5\nxinterval 1\nyinterval .5");
    assert_success("xrange 1e-3, 2.5E2");
}

#[test]
fn coordinates_in_every_form() {
    assert_success("point [1, 2]");
    assert_success("point 1 + 2i");
    assert_success("point -i");
    assert_success("point 2**3 - 4j");
    assert_success("point [sqrt(2)/2, sqrt(2)/2]");
    assert_success("point pi * i");
    assert_success("variable v, 3\npoint @v");
}

#[test]
fn colors() {
    assert_success("point 0!Red");
    assert_success("point 0!#A0B1C2");
    assert_success("point 0!lightgoldenrodyellow");
    assert!(matches!(assert_failure("point 0!#abc"), ScriptError::InvalidColor { .. }));
    assert!(matches!(assert_failure("point 0!chartreuse2"), ScriptError::InvalidColor { .. }));
}

#[test]
fn every_error_kind_is_reachable() {
    assert!(matches!(assert_failure("variable a, 1\nvariable a, 2"),
                     ScriptError::OverridingSymbol { .. }));
    assert!(matches!(assert_failure("point @nowhere"),
                     ScriptError::FetchingNonexistentSymbol { .. }));
    assert!(matches!(assert_failure("point [1, 2"), ScriptError::ImproperCoordinate { .. }));
    assert!(matches!(assert_failure("point [1 2]"), ScriptError::WrongNumberOfCommas { .. }));
    assert!(matches!(assert_failure("line [0,0]"),
                     ScriptError::WrongNumberOfArguments { .. }));
    assert!(matches!(assert_failure("foo 1,2"), ScriptError::UnknownCommand { .. }));
    assert!(matches!(assert_failure("circle 1!nope"), ScriptError::InvalidColor { .. }));
    assert!(matches!(assert_failure("circle 1/0"), ScriptError::InvalidExpression { .. }));
}

#[test]
fn deeply_nested_expressions_are_invalid() {
    let source = format!("point {}1{}", "(".repeat(20_000), ")".repeat(20_000));
    assert!(matches!(assert_failure(&source),
                     ScriptError::InvalidExpression { cause: ExpressionError::TooDeeplyNested { .. },
                                                      .. }));

    let source = format!("point {}1", "-".repeat(200_000));
    assert!(matches!(assert_failure(&source),
                     ScriptError::InvalidExpression { cause: ExpressionError::TooDeeplyNested { .. },
                                                      .. }));
}

#[test]
fn only_the_first_error_is_reported() {
    let err = parse_script("point 0\nfoo\nbar").unwrap_err();
    assert_eq!(err.line, 2);
    assert_eq!(err.source_line, "foo");
}

#[test]
fn symbols_are_visible_after_parsing() {
    let script = parse_script("variable origin, [0,0]\nvariable top, i").unwrap();
    assert_eq!(script.symbols().len(), 2);
    assert_eq!(script.symbols().fetch("top").unwrap(), Coordinate::cartesian(0.0, 1.0));
}

struct PanickingReporter;

impl ErrorReporter for PanickingReporter {
    fn report(&self, message: &str) -> ! {
        panic!("reported: {message}");
    }
}

#[test]
fn run_renders_a_finished_script() {
    let mut renderer = ListingRenderer::new(Vec::new());
    run("point [0,0]!blue", &PanickingReporter, &mut renderer).unwrap();

    let listing = String::from_utf8(renderer.into_inner()).unwrap();
    assert!(listing.ends_with("point (0, 0) blue\n"));
}

#[test]
#[should_panic(expected = "reported: Error at line 1: \"foo 1,2\"\nUnknown command found: foo")]
fn run_hands_errors_to_the_reporter() {
    let mut renderer = ListingRenderer::new(Vec::new());
    let _ = run("foo 1,2", &PanickingReporter, &mut renderer);
}

#[test]
fn reporter_log_entry_holds_the_line_error() {
    let dir = tempfile::tempdir().unwrap();
    let reporter = LogFileReporter::new(dir.path().join("log.txt"));
    let err = parse_script("xrange 0").unwrap_err();

    reporter.write_entry(&err.to_string()).unwrap();

    let log = fs::read_to_string(reporter.path()).unwrap();
    assert!(log.contains("Message:\nError at line 1: \"xrange 0\"\nThe \"xrange\" command requires 2 value(s)."));
    assert!(log.contains("graph_gen version: "));
}

#[test]
fn renderer_sees_the_whole_diagram() {
    let script = parse_script(&fs::read_to_string("tests/scripts/pass/argand.graph").unwrap())
        .unwrap();
    let mut renderer = ListingRenderer::new(Vec::new());
    renderer.render(&script).unwrap();

    let listing = String::from_utf8(renderer.into_inner()).unwrap();
    assert_eq!(listing.lines().count(),
               2 + script.points().len()
               + script.lines().len()
               + script.circles().len()
               + script.text().len());
}
