//! Harness for the html5lib-tests tree-construction suite (`.dat` files).
//!
//! Checkout `https://github.com/html5lib/html5lib-tests` into `tests/html5lib-tests` to run
//! these; without the fixtures the harness generates zero cases and exits successfully.

mod common;

use std::fs;
use std::path::Path;

use glob::glob;
use libtest_mimic::{Arguments, Failed, Trial};

use common::{dump_document, dump_fragment};
use html5tree::{parse_document, parse_fragment, FragmentContext, Namespace, ParseOpts};

#[derive(Clone, Default)]
struct DatCase {
    data: String,
    context: Option<String>,
    expected: String,
    script_off: bool,
}

/// Split a `.dat` file into test cases. Sections we don't consume (`#errors`,
/// `#new-errors`) are skipped; `#script-on` is fine since scripting is assumed enabled.
fn parse_dat(content: &str) -> Vec<DatCase> {
    let mut cases = Vec::new();
    let mut current: Option<DatCase> = None;
    let mut section = "";

    for line in content.lines() {
        match line {
            "#data" => {
                if let Some(case) = current.take() {
                    cases.push(case);
                }
                current = Some(DatCase::default());
                section = "data";
                continue;
            }
            "#errors" | "#new-errors" => {
                section = "errors";
                continue;
            }
            "#document-fragment" => {
                section = "fragment";
                continue;
            }
            "#script-on" => {
                section = "";
                continue;
            }
            "#script-off" => {
                if let Some(case) = current.as_mut() {
                    case.script_off = true;
                }
                section = "";
                continue;
            }
            "#document" => {
                section = "document";
                continue;
            }
            _ => (),
        }

        let Some(case) = current.as_mut() else {
            continue;
        };
        match section {
            "data" => {
                if !case.data.is_empty() {
                    case.data.push('\n');
                }
                case.data.push_str(line);
            }
            "fragment" => case.context = Some(line.to_owned()),
            "document" => {
                case.expected.push_str(line);
                case.expected.push('\n');
            }
            _ => (),
        }
    }
    if let Some(case) = current.take() {
        cases.push(case);
    }
    cases
}

fn context_for(spec: &str) -> FragmentContext {
    if let Some(local) = spec.strip_prefix("svg ") {
        FragmentContext::new(Namespace::Svg, local)
    } else if let Some(local) = spec.strip_prefix("math ") {
        FragmentContext::new(Namespace::MathMl, local)
    } else {
        FragmentContext::html(spec)
    }
}

fn run_case(case: &DatCase) -> Result<(), Failed> {
    let actual = match &case.context {
        Some(context) => {
            let nodes = parse_fragment(&case.data, &context_for(context), ParseOpts::default());
            dump_fragment(&nodes)
        }
        None => dump_document(&parse_document(&case.data, ParseOpts::default())),
    };

    if actual != case.expected {
        return Err(format!(
            "tree mismatch for {:?}\nexpected:\n{}\nactual:\n{}",
            case.data, case.expected, actual
        )
        .into());
    }
    Ok(())
}

fn collect_trials(trials: &mut Vec<Trial>, path: &Path) {
    let fname = path.file_name().unwrap().to_str().unwrap().to_owned();
    let content = fs::read_to_string(path).unwrap_or_default();

    for (i, case) in parse_dat(&content).into_iter().enumerate() {
        // scripting is treated as enabled, the script-off variants do not apply
        if case.script_off {
            continue;
        }
        let name = format!("{}:{}", fname, i);
        trials.push(Trial::test(name, move || run_case(&case)));
    }
}

fn main() {
    let args = Arguments::from_args();

    let mut trials = Vec::new();
    for entry in glob("tests/html5lib-tests/tree-construction/*.dat").unwrap() {
        collect_trials(&mut trials, &entry.unwrap());
    }

    libtest_mimic::run(&args, trials).exit();
}
