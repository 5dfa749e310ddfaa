//! # Structured Test-Run Report Loader / 结构化测试运行报告加载器
//!
//! Family C: a flat list of unit-test-result records, each keyed by a
//! qualified test name such as `Specs.AdditionFeature.AddTwoNumbers`. There
//! are no traits and no summary counts, so every query correlates by name:
//! the feature through its generated class segment (`<slug>feature`), the
//! scenario through its slugged method segment, and individual example rows
//! through the underscore-suffixed signature.
//!
//! 家族 C：扁平的单元测试结果记录列表，每条记录以限定测试名称为键，
//! 例如 `Specs.AdditionFeature.AddTwoNumbers`。没有特征也没有摘要计数，
//! 因此每个查询都按名称关联：功能通过其生成的类段（`<slug>feature`），
//! 场景通过其改写的方法段，单个示例行通过下划线后缀签名。

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::core::{
    model::{Feature, Scenario, ScenarioOutline},
    signature::{ArgumentStyle, ExampleSignature, slug_identifier},
    verdict::Verdict,
};

#[derive(Debug, Deserialize)]
struct TrxTestRun {
    #[serde(rename = "Results", default)]
    results: TrxResultList,
}

#[derive(Debug, Default, Deserialize)]
struct TrxResultList {
    #[serde(rename = "UnitTestResult", default)]
    records: Vec<TrxRecord>,
}

/// One unit-test-result record. / 一条单元测试结果记录。
#[derive(Debug, Deserialize)]
struct TrxRecord {
    #[serde(rename = "@testName")]
    test_name: String,
    #[serde(rename = "@outcome")]
    outcome: String,
}

impl TrxRecord {
    fn verdict(&self) -> Verdict {
        match self.outcome.to_lowercase().as_str() {
            "passed" => Verdict::Passed,
            "failed" | "error" => Verdict::Failed,
            // NotExecuted, Inconclusive, Timeout, ...
            _ => Verdict::Inconclusive,
        }
    }

    /// The method segment of the qualified test name, lower-cased.
    fn method_segment(&self) -> String {
        self.test_name
            .rsplit('.')
            .next()
            .unwrap_or(self.test_name.as_str())
            .to_lowercase()
    }
}

/// Parses a structured test-run report into an immutable run document.
/// 将结构化测试运行报告解析为不可变的运行文档。
pub fn parse(content: &str) -> Result<TrxResults> {
    let document: TrxTestRun =
        quick_xml::de::from_str(content).context("invalid test-run report document")?;
    Ok(TrxResults {
        records: document.results.records,
    })
}

/// One loaded test-run report with its four verdict queries.
/// 一个已加载的测试运行报告及其四个判定查询。
#[derive(Debug)]
pub struct TrxResults {
    records: Vec<TrxRecord>,
}

impl TrxResults {
    /// All records belonging to the feature's generated class, in document
    /// order. The runner names the class after the feature title with a
    /// `Feature` suffix, e.g. `AdditionFeature` for a feature "Addition".
    fn feature_records<'a>(&'a self, feature: &Feature) -> impl Iterator<Item = &'a TrxRecord> {
        let class_segment = format!("{}feature.", slug_identifier(&feature.name));
        self.records
            .iter()
            .filter(move |record| record.test_name.to_lowercase().contains(&class_segment))
    }

    pub fn feature_verdict(&self, feature: &Feature) -> Verdict {
        let mut passed = 0u32;
        let mut failed = 0u32;
        let mut skipped = 0u32;
        let mut any = false;

        for record in self.feature_records(feature) {
            any = true;
            match record.verdict() {
                Verdict::Passed => passed += 1,
                Verdict::Failed => failed += 1,
                Verdict::Inconclusive => skipped += 1,
            }
        }

        if !any {
            return Verdict::Inconclusive;
        }
        Verdict::from_counts(passed, failed, skipped)
    }

    pub fn scenario_verdict(&self, feature: &Feature, scenario: &Scenario) -> Verdict {
        let method = slug_identifier(&scenario.name);
        self.feature_records(feature)
            .find(|record| record.method_segment() == method)
            .map_or(Verdict::Inconclusive, TrxRecord::verdict)
    }

    pub fn scenario_outline_verdict(&self, feature: &Feature, outline: &ScenarioOutline) -> Verdict {
        // Example-row runs are named `<outline slug>_<mangled values>`.
        let prefix = format!("{}_", slug_identifier(&outline.name));
        Verdict::merge(
            self.feature_records(feature)
                .filter(|record| record.method_segment().starts_with(&prefix))
                .map(TrxRecord::verdict),
        )
    }

    pub fn example_verdict(
        &self,
        feature: &Feature,
        outline: &ScenarioOutline,
        row: &[String],
    ) -> Verdict {
        let signature =
            ExampleSignature::build(ArgumentStyle::UnderscoreSuffixed, &outline.name, row);
        let prefix = format!("{}_", slug_identifier(&outline.name));
        self.feature_records(feature)
            .filter(|record| record.method_segment().starts_with(&prefix))
            .find(|record| signature.is_match(&record.test_name))
            .map_or(Verdict::Inconclusive, TrxRecord::verdict)
    }
}
