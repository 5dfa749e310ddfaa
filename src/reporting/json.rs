//! # JSON Reporting Module / JSON 报告模块
//!
//! This module serializes the annotated specification tree into a JSON
//! document, one record per feature, scenario, outline and example row.
//! Downstream tooling consumes this instead of scraping console output.
//!
//! 此模块将带注释的规格树序列化为 JSON 文档，
//! 每个功能、场景、大纲和示例行一条记录。
//! 下游工具消费此文档而不是抓取控制台输出。

use anyhow::Result;
use serde::Serialize;
use std::path::Path;

use crate::core::model::{FeatureElement, SpecDocument};
use crate::core::results::TestResults;
use crate::core::verdict::Verdict;
use crate::infra::fs::write_file;

/// The root of the JSON verdict report. / JSON 判定报告的根。
#[derive(Debug, Serialize)]
pub struct JsonReport {
    pub features: Vec<JsonFeature>,
}

#[derive(Debug, Serialize)]
pub struct JsonFeature {
    pub name: String,
    pub verdict: Verdict,
    pub scenarios: Vec<JsonScenario>,
}

/// One scenario or scenario outline record. / 一条场景或场景大纲记录。
#[derive(Debug, Serialize)]
pub struct JsonScenario {
    pub name: String,
    pub kind: JsonScenarioKind,
    pub verdict: Verdict,
    /// Per-row verdicts; empty for plain scenarios.
    /// 每行的判定；普通场景为空。
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub examples: Vec<JsonExample>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum JsonScenarioKind {
    Scenario,
    ScenarioOutline,
}

#[derive(Debug, Serialize)]
pub struct JsonExample {
    pub values: Vec<String>,
    pub verdict: Verdict,
}

/// Builds the report tree by querying the result contract once per node.
/// 通过对每个节点查询一次结果契约来构建报告树。
pub fn build_report(spec: &SpecDocument, results: &impl TestResults) -> JsonReport {
    let features = spec
        .features
        .iter()
        .map(|feature| {
            let scenarios = feature
                .elements
                .iter()
                .filter_map(|element| match element {
                    FeatureElement::Scenario(scenario) => Some(JsonScenario {
                        name: scenario.name.clone(),
                        kind: JsonScenarioKind::Scenario,
                        verdict: results.scenario_verdict(feature, scenario),
                        examples: Vec::new(),
                    }),
                    FeatureElement::ScenarioOutline(outline) => Some(JsonScenario {
                        name: outline.name.clone(),
                        kind: JsonScenarioKind::ScenarioOutline,
                        verdict: results.scenario_outline_verdict(feature, outline),
                        examples: outline
                            .example_rows()
                            .map(|row| JsonExample {
                                values: row.to_vec(),
                                verdict: results.example_verdict(feature, outline, row),
                            })
                            .collect(),
                    }),
                    FeatureElement::Background(_) => None,
                })
                .collect();

            JsonFeature {
                name: feature.name.clone(),
                verdict: results.feature_verdict(feature),
                scenarios,
            }
        })
        .collect();

    JsonReport { features }
}

/// Writes the report as pretty-printed JSON.
/// 将报告写为格式化的 JSON。
pub fn write_report(report: &JsonReport, path: &Path) -> Result<()> {
    let content = serde_json::to_string_pretty(report)?;
    write_file(path, &content)
}
