use std::collections::BTreeSet;
use std::fs;

use anyhow::{Context, Result, anyhow, bail};
use inv_cli::pipeline::{DocumentReport, Input, OutputTarget, RunResult, process};
use tracing::{error, info, info_span};

use crate::cli::{InputArgs, NormalizeArgs};

pub fn run_normalize(args: &NormalizeArgs) -> Result<RunResult> {
    let inputs = &args.input.inputs;
    if inputs.len() > 1 && args.output_dir.is_none() && !args.in_place {
        bail!(
            "{} inputs given; use --output-dir or --in-place to write more than one document",
            inputs.len()
        );
    }
    if let Some(dir) = &args.output_dir {
        fs::create_dir_all(dir)
            .with_context(|| format!("create output directory {}", dir.display()))?;
    }

    let mut result = RunResult::default();
    let mut claimed = BTreeSet::new();
    for arg in inputs {
        let input = Input::from_arg(arg);
        let span = info_span!("document", input = %input);
        let _guard = span.enter();
        let target = OutputTarget::resolve(&input, args.output_dir.as_deref(), args.in_place)?;
        if let Some(path) = target.path()
            && !claimed.insert(path.to_path_buf())
        {
            record(
                &mut result,
                Err(anyhow!(
                    "{input}: output {} is already written by another input",
                    path.display()
                )),
            );
            continue;
        }
        result.wrote_stdout |= target == OutputTarget::Stdout;
        record(&mut result, process(&input, &target, args.compact));
    }
    info!(
        documents = result.documents.len(),
        findings = result.finding_count(),
        errors = result.errors.len(),
        "normalize complete"
    );
    Ok(result)
}

pub fn run_check(args: &InputArgs) -> Result<RunResult> {
    let mut result = RunResult::default();
    for arg in &args.inputs {
        let input = Input::from_arg(arg);
        let span = info_span!("document", input = %input);
        let _guard = span.enter();
        record(&mut result, process(&input, &OutputTarget::Discard, false));
    }
    info!(
        documents = result.documents.len(),
        findings = result.finding_count(),
        errors = result.errors.len(),
        "check complete"
    );
    Ok(result)
}

fn record(result: &mut RunResult, outcome: Result<DocumentReport>) {
    match outcome {
        Ok(report) => result.documents.push(report),
        Err(err) => {
            let message = format!("{err:#}");
            error!(error = %message, "document skipped");
            result.errors.push(message);
        }
    }
}

/// Exit status for a finished run.
pub fn exit_code(result: &RunResult, deny_findings: bool) -> i32 {
    if result.has_errors() || (deny_findings && result.finding_count() > 0) {
        1
    } else {
        0
    }
}
