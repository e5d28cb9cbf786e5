//! Read, normalize and write one invoice document.
//!
//! Every step that touches the outside world returns `anyhow::Result` with the
//! input named in the error context; normalization itself never fails.

use std::fmt;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use inv_model::Invoice;
use inv_normalization::{Diagnostic, Normalize};
use tracing::{debug, info, warn};

use crate::logging::redact_value;

/// Where a document is read from. `-` on the command line means stdin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Stdin,
    File(PathBuf),
}

impl Input {
    pub fn from_arg(arg: &Path) -> Self {
        if arg.as_os_str() == "-" {
            Self::Stdin
        } else {
            Self::File(arg.to_path_buf())
        }
    }

    pub fn read_to_string(&self) -> Result<String> {
        match self {
            Self::Stdin => {
                let mut source = String::new();
                io::stdin()
                    .read_to_string(&mut source)
                    .context("read stdin")?;
                Ok(source)
            }
            Self::File(path) => {
                fs::read_to_string(path).with_context(|| format!("read {}", path.display()))
            }
        }
    }

    /// File name used when the document is written into an output directory.
    fn file_name(&self) -> PathBuf {
        match self {
            Self::Stdin => PathBuf::from("stdin.json"),
            Self::File(path) => path
                .file_name()
                .map_or_else(|| PathBuf::from("invoice.json"), PathBuf::from),
        }
    }
}

impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdin => f.write_str("<stdin>"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Where a normalized document goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    Stdout,
    File(PathBuf),
    /// Findings only.
    Discard,
}

impl OutputTarget {
    /// `--in-place` rewrites the input file, `--output-dir` writes a file of
    /// the same name there, and stdout is used otherwise.
    pub fn resolve(input: &Input, output_dir: Option<&Path>, in_place: bool) -> Result<Self> {
        if in_place {
            return match input {
                Input::Stdin => bail!("stdin cannot be rewritten in place"),
                Input::File(path) => Ok(Self::File(path.clone())),
            };
        }
        Ok(match output_dir {
            Some(dir) => Self::File(dir.join(input.file_name())),
            None => Self::Stdout,
        })
    }

    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::File(path) => Some(path),
            Self::Stdout | Self::Discard => None,
        }
    }
}

/// Outcome of one document.
#[derive(Debug)]
pub struct DocumentReport {
    pub input: String,
    pub items: usize,
    pub accounting_entries: usize,
    pub diagnostic: Diagnostic,
    pub output: Option<PathBuf>,
}

/// Outcome of one command over all its inputs.
#[derive(Debug, Default)]
pub struct RunResult {
    pub documents: Vec<DocumentReport>,
    /// Inputs that could not be read, parsed or written.
    pub errors: Vec<String>,
    /// A document was written to stdout, so reports must go elsewhere.
    pub wrote_stdout: bool,
}

impl RunResult {
    pub fn finding_count(&self) -> usize {
        self.documents
            .iter()
            .map(|document| document.diagnostic.len())
            .sum()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

pub fn parse_invoice(source: &str) -> Result<Invoice> {
    serde_json::from_str(source).context("parse invoice JSON")
}

pub fn render_invoice(invoice: &Invoice, compact: bool) -> Result<String> {
    let mut rendered = if compact {
        serde_json::to_string(invoice)
    } else {
        serde_json::to_string_pretty(invoice)
    }
    .context("serialize invoice")?;
    rendered.push('\n');
    Ok(rendered)
}

/// Normalize a parsed document and log what was corrected.
pub fn normalize_document(invoice: &mut Invoice) -> Diagnostic {
    let diagnostic = invoice.normalize().err().unwrap_or_default();
    for finding in diagnostic.findings() {
        debug!(
            context = %finding.context,
            category = finding.category().label(),
            message = redact_value(&finding.message()),
            "finding"
        );
    }
    diagnostic
}

/// Run one input through the whole pipeline.
pub fn process(input: &Input, target: &OutputTarget, compact: bool) -> Result<DocumentReport> {
    let source = input.read_to_string()?;
    let mut invoice = parse_invoice(&source).with_context(|| format!("read {input}"))?;
    let diagnostic = normalize_document(&mut invoice);

    match target {
        OutputTarget::Stdout => print!("{}", render_invoice(&invoice, compact)?),
        OutputTarget::File(path) => {
            fs::write(path, render_invoice(&invoice, compact)?)
                .with_context(|| format!("write {}", path.display()))?;
        }
        OutputTarget::Discard => {}
    }

    if diagnostic.is_empty() {
        info!(
            items = invoice.items.len(),
            accounting_entries = invoice.accounting_entries.len(),
            "document clean"
        );
    } else {
        warn!(
            items = invoice.items.len(),
            accounting_entries = invoice.accounting_entries.len(),
            findings = diagnostic.len(),
            "document corrected"
        );
    }

    Ok(DocumentReport {
        input: input.to_string(),
        items: invoice.items.len(),
        accounting_entries: invoice.accounting_entries.len(),
        diagnostic,
        output: target.path().map(Path::to_path_buf),
    })
}
