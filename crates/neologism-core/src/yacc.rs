//! Yacc import through bison's XML report.
//!
//! bison already knows how to read yacc grammars, so it is run with `--xml`
//! and only the `<rule>` elements of the report are turned into [`Rule`]s.
//! The report keeps bison's augmented start rule `$accept => start $end`.

use std::collections::HashSet;
use std::path::Path;
use std::process::{Command, Stdio};

use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::config::BisonConfig;
use crate::error::{YaccError, YaccResult};
use crate::rule::Rule;

/// Read the rules of a yacc file using the bison configured in the
/// environment.
pub fn parse(path: impl AsRef<Path>) -> YaccResult<Vec<Rule>> {
    parse_with(path, &BisonConfig::from_env())
}

/// Read the rules of a yacc file.
///
/// Rules come back in report order without duplicates.
pub fn parse_with(path: impl AsRef<Path>, config: &BisonConfig) -> YaccResult<Vec<Rule>> {
    let path = path.as_ref();
    info!(path = %path.display(), bison = %config.executable.display(), "running bison");

    let report = run_bison(path, config)?;
    let xml = std::fs::read_to_string(report.path())?;
    let rules = rules_from_xml(&xml)?;

    debug!(rules = rules.len(), "bison report decoded");
    Ok(rules)
}

/// Whether the configured bison can be executed.
pub fn is_bison_available(config: &BisonConfig) -> bool {
    let mut command = Command::new(&config.executable);
    command
        .arg("--version")
        .stdout(Stdio::null())
        .stderr(Stdio::null());
    if let Some(search_path) = &config.search_path {
        command.env("PATH", search_path);
    }

    command.status().map(|s| s.success()).unwrap_or(false)
}

/// Convert a bison XML report into rules.
pub fn rules_from_xml(xml: &str) -> YaccResult<Vec<Rule>> {
    let document = roxmltree::Document::parse(xml)?;

    let mut seen = HashSet::new();
    let mut rules = Vec::new();

    for node in document.descendants().filter(|n| n.has_tag_name("rule")) {
        let number = node.attribute("number").unwrap_or("?");

        let lhs = node
            .children()
            .find(|n| n.has_tag_name("lhs"))
            .and_then(|n| n.text())
            .ok_or_else(|| YaccError::MalformedReport(format!("rule {number} has no lhs")))?;

        let rhs_node = node
            .children()
            .find(|n| n.has_tag_name("rhs"))
            .ok_or_else(|| YaccError::MalformedReport(format!("rule {number} has no rhs")))?;

        let rhs = rhs_node
            .children()
            .filter(|n| n.is_element() && !n.has_tag_name("empty"))
            .map(|n| {
                n.text().filter(|t| !t.is_empty()).ok_or_else(|| {
                    YaccError::MalformedReport(format!("rule {number} has an unnamed symbol"))
                })
            })
            .collect::<YaccResult<Vec<&str>>>()?;

        let rule = Rule::new(lhs, rhs);
        if seen.insert(rule.clone()) {
            rules.push(rule);
        }
    }

    Ok(rules)
}

/// Run bison on `path`, returning the temporary XML report.
fn run_bison(path: &Path, config: &BisonConfig) -> YaccResult<NamedTempFile> {
    let report = NamedTempFile::new()?;
    let parser_output = NamedTempFile::new()?;

    let mut xml_arg = std::ffi::OsString::from("--xml=");
    xml_arg.push(report.path());
    let mut output_arg = std::ffi::OsString::from("--output=");
    output_arg.push(parser_output.path());

    let mut command = Command::new(&config.executable);
    command
        .arg(xml_arg)
        .arg(output_arg)
        .arg(path)
        .stdout(Stdio::null())
        .stderr(Stdio::null());
    if let Some(search_path) = &config.search_path {
        command.env("PATH", search_path);
    }

    let status = match command.status() {
        Ok(status) => status,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(YaccError::BisonNotFound {
                executable: config.executable.clone(),
                path_var: config.effective_path(),
            });
        }
        Err(e) => return Err(e.into()),
    };

    if !status.success() {
        return Err(YaccError::Decode {
            path: path.to_path_buf(),
        });
    }

    Ok(report)
}
