use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use classguard_core::kernel::constants::{APP_NAME, POLICY_ENV, WHITELIST_ENV};
use classguard_core::{CollisionPolicy, CollisionReport, Whitelist};

/// classguard: detect dependency version collisions across stage libraries
#[derive(Parser, Debug)]
#[command(name = APP_NAME, author, version, about, long_about = None)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate the dependencies bundled by a set of stage libraries
    Check(CheckArgs),
    /// List the selectable collision policies
    Policies,
    /// Print the effective whitelist
    Whitelist(WhitelistArgs),
}

#[derive(Args, Debug)]
#[command(group(clap::ArgGroup::new("input").required(true).args(["libs_dir", "manifest"])))]
pub struct CheckArgs {
    /// Stage-library root, one sub-directory per library
    #[arg(long)]
    pub libs_dir: Option<PathBuf>,

    /// Library manifest file (JSON, TOML or YAML)
    #[arg(long)]
    pub manifest: Option<PathBuf>,

    #[command(flatten)]
    pub whitelist: WhitelistArgs,

    /// What to do with collisions that are not whitelisted
    #[arg(long, env = POLICY_ENV, default_value_t = CollisionPolicy::Fail)]
    pub policy: CollisionPolicy,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct WhitelistArgs {
    /// Whitelist file (JSON, TOML or YAML)
    #[arg(long = "whitelist", env = WHITELIST_ENV)]
    pub path: Option<PathBuf>,

    /// Do not start from the built-in whitelist
    #[arg(long)]
    pub no_builtin: bool,
}

/// Plain-text rendering of a validation report
pub fn render_report(report: &CollisionReport) -> String {
    let mut out = format!(
        "Checked {} stage libraries, {} artifacts: {} collisions, {} not whitelisted\n",
        report.libraries,
        report.artifacts,
        report.findings.len(),
        report.violations().len()
    );
    for finding in &report.findings {
        let marker = if finding.is_whitelisted() { "ok  " } else { "FAIL" };
        out.push_str(&format!("  [{}] {}\n", marker, finding));
    }
    out
}

/// Plain-text rendering of a whitelist
pub fn render_whitelist(whitelist: &Whitelist) -> String {
    if whitelist.is_empty() {
        return "Whitelist is empty: no collision is tolerated\n".to_string();
    }
    let mut out = String::from("Whitelisted major versions:\n");
    for (artifact, majors) in whitelist.entries() {
        let majors: Vec<String> = majors.iter().map(ToString::to_string).collect();
        out.push_str(&format!("  {}: {}\n", artifact, majors.join(", ")));
    }
    out
}

/// Plain-text listing of the collision policies
pub fn render_policies() -> String {
    CollisionPolicy::ALL
        .iter()
        .map(|policy| format!("  {:<6} {}\n", policy.value(), policy.label()))
        .collect()
}
