use std::fs;

use lumen::run_program;
use walkdir::WalkDir;

const EXPECT: &str = "// expect: ";
const ERROR: &str = "// error: ";

#[test]
fn scripts_produce_their_annotated_results() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/scripts").into_iter()
                                     .filter_map(Result::ok)
                                     .filter(|e| e.path().extension().is_some_and(|ext| ext == "lox"))
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let expected_output = annotations(&source, EXPECT);
        let expected_errors = annotations(&source, ERROR);
        count += 1;

        match run_program(&source) {
            Ok(output) => {
                assert!(expected_errors.is_empty(),
                        "Script {path:?} succeeded but expected errors:\n{}",
                        expected_errors.join("\n"));
                assert_eq!(output.join("\n"), expected_output.join("\n"), "running {path:?}");
            },
            Err(failure) => {
                let errors: Vec<String> =
                    failure.diagnostics.iter().map(ToString::to_string).collect();
                assert_eq!(errors, expected_errors, "running {path:?}");
                assert_eq!(failure.output.join("\n"),
                           expected_output.join("\n"),
                           "output of {path:?} before it failed");
            },
        }
    }

    assert!(count > 0, "No scripts found in tests/scripts");
}

/// Collects the text following `marker` on every line that contains it.
fn annotations(source: &str, marker: &str) -> Vec<String> {
    source.lines()
          .filter_map(|line| line.split_once(marker))
          .map(|(_, rest)| rest.trim_end().to_string())
          .collect()
}
