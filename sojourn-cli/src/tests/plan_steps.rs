//! Behaviour-driven step definitions driving the plan CLI scenarios.

use super::helpers::{Workspace, output_text, write_utf8};
use super::*;
use camino::Utf8PathBuf;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use serde_json::Value;
use sojourn_core::test_support::scenario_catalog;
use sojourn_core::{CatalogError, PlanningRequestError};
use std::cell::RefCell;

#[derive(Debug)]
struct PlanWorld {
    workspace: Workspace,
    catalog_path: RefCell<Option<Utf8PathBuf>>,
    cli_args: RefCell<Vec<String>>,
    stdout: RefCell<Vec<u8>>,
    result: RefCell<Option<Result<(), CliError>>>,
}

impl PlanWorld {
    fn new() -> Self {
        Self {
            workspace: Workspace::new(),
            catalog_path: RefCell::new(None),
            cli_args: RefCell::new(Vec::new()),
            stdout: RefCell::new(Vec::new()),
            result: RefCell::new(None),
        }
    }

    fn build_command_line(&self) -> Vec<String> {
        let mut argv = vec!["sojourn".to_owned(), "plan".to_owned()];
        if let Some(path) = self.catalog_path.borrow().as_ref() {
            argv.extend([format!("--{ARG_CATALOG}"), path.as_str().to_owned()]);
        }
        argv.extend(self.cli_args.borrow().iter().cloned());
        argv
    }

    fn error(&self) -> std::cell::Ref<'_, CliError> {
        std::cell::Ref::map(self.result.borrow(), |result| {
            result
                .as_ref()
                .expect("result recorded")
                .as_ref()
                .expect_err("expected error")
        })
    }
}

#[fixture]
fn world() -> PlanWorld {
    PlanWorld::new()
}

#[given("a catalog file with the reference scenario")]
fn catalog_with_scenario(#[from(world)] world: &PlanWorld) {
    let path = world
        .workspace
        .write_catalog("catalog.json", &scenario_catalog());
    world.catalog_path.replace(Some(path));
}

#[given("a catalog file containing {contents}")]
fn catalog_containing(#[from(world)] world: &PlanWorld, contents: String) {
    let path = world.workspace.path("catalog.json");
    write_utf8(&path, contents.trim_matches('"').as_bytes());
    world.catalog_path.replace(Some(path));
}

#[given("I pass {args}")]
fn pass_arguments(#[from(world)] world: &PlanWorld, args: String) {
    world.cli_args.borrow_mut().extend(
        args.trim_matches('"')
            .split_whitespace()
            .map(str::to_owned),
    );
}

#[when("I run the plan command")]
fn run_plan_command(#[from(world)] world: &PlanWorld) {
    let invocation = world.build_command_line();
    let parsed = Cli::try_parse_from(invocation).map_err(CliError::from);
    let outcome = parsed.and_then(|cli| {
        let mut buffer = world.stdout.borrow_mut();
        dispatch(cli.command, &mut *buffer)
    });
    world.result.replace(Some(outcome));
}

#[then("the command succeeds")]
fn command_succeeds(#[from(world)] world: &PlanWorld) {
    let borrowed = world.result.borrow();
    let result = borrowed.as_ref().expect("result recorded");
    if let Err(err) = result {
        panic!("expected success, found {err:?}");
    }
}

#[then("the output mentions {text}")]
fn output_mentions(#[from(world)] world: &PlanWorld, text: String) {
    let stdout = output_text(&world.stdout.borrow());
    assert!(
        stdout.contains(text.trim_matches('"')),
        "output did not mention {text}: {stdout}"
    );
}

#[then("the output is a JSON report with {count} greedy visits")]
fn output_is_json(#[from(world)] world: &PlanWorld, count: usize) {
    let stdout = output_text(&world.stdout.borrow());
    let report: Value = serde_json::from_str(&stdout).expect("output should be JSON");
    let greedy = report["greedy"].as_array().expect("greedy visits array");
    assert_eq!(greedy.len(), count);
}

#[then("the command fails because the request is invalid")]
fn command_fails_invalid_request(#[from(world)] world: &PlanWorld) {
    match &*world.error() {
        CliError::InvalidRequest(PlanningRequestError::InvalidBudget(budget)) => {
            assert_eq!(*budget, -5.0);
        }
        other => panic!("expected InvalidRequest, found {other:?}"),
    }
}

#[then("the command fails because the catalog is malformed")]
fn command_fails_malformed_catalog(#[from(world)] world: &PlanWorld) {
    match &*world.error() {
        CliError::LoadCatalog {
            source: CatalogError::Parse(_),
            ..
        } => {}
        other => panic!("expected LoadCatalog, found {other:?}"),
    }
}

#[then("the command fails while parsing arguments")]
fn command_fails_parsing(#[from(world)] world: &PlanWorld) {
    match &*world.error() {
        CliError::ArgumentParsing(_) => {}
        other => panic!("expected ArgumentParsing, found {other:?}"),
    }
}

macro_rules! register_plan_scenario {
    ($fn_name:ident, $scenario_title:literal) => {
        #[scenario(path = "tests/features/plan_command.feature", name = $scenario_title)]
        fn $fn_name(#[from(world)] world: PlanWorld) {
            let _ = world;
        }
    };
}

register_plan_scenario!(plan_from_catalog_file, "planning against a catalog file");
register_plan_scenario!(plan_with_json_output, "planning with JSON output");
register_plan_scenario!(plan_rejects_negative_budget, "rejecting a negative budget");
register_plan_scenario!(plan_rejects_malformed_catalog, "rejecting a malformed catalog");
register_plan_scenario!(plan_rejects_non_numeric_hours, "rejecting non-numeric hours");
