//! # Console Reporting Module / 控制台报告模块
//!
//! This module prints the annotated specification tree to the console,
//! one line per feature, scenario, outline and example row, with color
//! coding for the three verdict states.
//!
//! 此模块将带注释的规格树打印到控制台，
//! 每个功能、场景、大纲和示例行一行，三种判定状态以颜色区分。

use colored::*;

use crate::core::model::{FeatureElement, SpecDocument};
use crate::core::results::TestResults;
use crate::core::verdict::Verdict;
use crate::infra::t;

/// Tallies of scenario-level verdicts (plain scenarios and individual
/// example rows) across the whole report.
/// 整个报告中场景级判定（普通场景和单个示例行）的计数。
#[derive(Debug, Default, Clone, Copy)]
pub struct VerdictCounts {
    pub passed: usize,
    pub failed: usize,
    pub inconclusive: usize,
}

impl VerdictCounts {
    fn record(&mut self, verdict: Verdict) {
        match verdict {
            Verdict::Passed => self.passed += 1,
            Verdict::Failed => self.failed += 1,
            Verdict::Inconclusive => self.inconclusive += 1,
        }
    }

    /// Checks whether any recorded verdict was a failure.
    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }
}

fn colored_status(verdict: Verdict, locale: &str) -> ColoredString {
    let status = verdict.status_str(locale);
    match verdict {
        Verdict::Passed => status.green(),
        Verdict::Failed => status.red(),
        Verdict::Inconclusive => status.yellow(),
    }
}

/// Prints the full verdict report and returns the scenario-level tallies.
/// Each specification node is queried exactly once.
///
/// 打印完整的判定报告并返回场景级计数。
/// 每个规格节点恰好被查询一次。
///
/// # Arguments / 参数
/// * `spec` - The parsed specification graph / 已解析的规格图
/// * `results` - The loaded composite results / 已加载的组合结果
/// * `locale` - The language locale to use for messages
///              用于消息的语言区域设置
pub fn print_report(
    spec: &SpecDocument,
    results: &impl TestResults,
    locale: &str,
) -> VerdictCounts {
    let mut counts = VerdictCounts::default();

    println!("\n{}", t!("report.summary_banner", locale = locale).bold());

    for feature in &spec.features {
        let feature_verdict = results.feature_verdict(feature);
        println!(
            "\n{} {} [{}]",
            t!("report.feature_prefix", locale = locale).bold(),
            feature.name.cyan(),
            colored_status(feature_verdict, locale)
        );

        for element in &feature.elements {
            match element {
                FeatureElement::Scenario(scenario) => {
                    let verdict = results.scenario_verdict(feature, scenario);
                    counts.record(verdict);
                    println!(
                        "  - {:<14} | {} {}",
                        colored_status(verdict, locale),
                        t!("report.scenario_prefix", locale = locale),
                        scenario.name
                    );
                }
                FeatureElement::ScenarioOutline(outline) => {
                    let verdict = results.scenario_outline_verdict(feature, outline);
                    println!(
                        "  - {:<14} | {} {}",
                        colored_status(verdict, locale),
                        t!("report.outline_prefix", locale = locale),
                        outline.name
                    );
                    // One line per example row, in canonical document order.
                    for row in outline.example_rows() {
                        let row_verdict = results.example_verdict(feature, outline, row);
                        counts.record(row_verdict);
                        println!(
                            "      - {:<14} | [{}]",
                            colored_status(row_verdict, locale),
                            row.join(", ")
                        );
                    }
                }
                FeatureElement::Background(background) => {
                    // Backgrounds carry no verdict of their own.
                    println!(
                        "  - {:<14} | {} {}",
                        "".normal(),
                        t!("report.background_prefix", locale = locale),
                        background.name
                    );
                }
            }
        }
    }

    println!(
        "\n{}",
        t!(
            "report.summary_line",
            locale = locale,
            passed = counts.passed,
            failed = counts.failed,
            inconclusive = counts.inconclusive
        )
        .bold()
    );

    counts
}
