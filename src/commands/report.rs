// src/commands/report.rs

use anyhow::{Context, Result};
use colored::*;
use std::path::PathBuf;

use crate::{
    core::{
        config::{RunnerFormat, VerdictConfig},
        model::SpecDocument,
        results::load_composite,
    },
    infra::fs::read_file,
    reporting::{console, json},
    t,
};

/// Runs the `report` command: loads the specification and every configured
/// result file, prints the annotated tree, and fails when any scenario-level
/// verdict is a failure.
///
/// 运行 `report` 命令：加载规格和每个已配置的结果文件，
/// 打印带注释的树，当任何场景级判定为失败时返回失败。
pub async fn execute(
    config: PathBuf,
    spec: PathBuf,
    format_override: Option<RunnerFormat>,
    results_override: Option<Vec<PathBuf>>,
    json_override: Option<PathBuf>,
) -> Result<()> {
    let verdict_config = parse_config(&config)?;
    let locale = verdict_config.language.clone();
    rust_i18n::set_locale(&locale);

    let format = format_override.unwrap_or(verdict_config.results.format);
    let files = results_override.unwrap_or(verdict_config.results.files);
    let json_path = json_override.or(verdict_config.report.json);

    println!(
        "{}",
        t!("report.loading_spec", locale = locale, path = spec.display())
    );
    let spec_document = parse_spec(&spec)?;

    if files.is_empty() {
        println!(
            "{}",
            t!("report.no_result_files", locale = locale).yellow()
        );
    } else {
        println!(
            "{}",
            t!(
                "report.loading_results",
                locale = locale,
                count = files.len(),
                format = format
            )
        );
    }

    let results = load_composite(format, &files).await?;
    println!(
        "{}",
        t!("report.loaded_results", locale = locale, count = results.run_count()).cyan()
    );

    let counts = console::print_report(&spec_document, &results, &locale);

    if let Some(path) = &json_path {
        let report = json::build_report(&spec_document, &results);
        json::write_report(&report, path)?;
        println!(
            "{}",
            t!("report.json_written", locale = locale, path = path.display()).green()
        );
    }

    if counts.has_failures() {
        anyhow::bail!(t!(
            "report.failures_detected",
            locale = locale,
            failed = counts.failed
        ));
    }
    Ok(())
}

fn parse_config(config_path: &PathBuf) -> Result<VerdictConfig> {
    // For config parsing, we don't have the locale yet. Use English as a default.
    let locale = "en";
    let content = read_file(config_path)
        .with_context(|| t!("config_read_failed", locale = locale, path = config_path.display()))?;
    let verdict_config: VerdictConfig =
        toml::from_str(&content).with_context(|| t!("config_parse_failed", locale = locale))?;
    Ok(verdict_config)
}

fn parse_spec(spec_path: &PathBuf) -> Result<SpecDocument> {
    let locale = rust_i18n::locale().to_string();
    let content = read_file(spec_path)
        .with_context(|| t!("spec_read_failed", locale = locale, path = spec_path.display()))?;
    let document: SpecDocument =
        serde_json::from_str(&content).with_context(|| t!("spec_parse_failed", locale = locale))?;
    Ok(document)
}
