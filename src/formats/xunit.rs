//! # xUnit Results Loader / xUnit 结果加载器
//!
//! Family A: a hierarchical document whose class-level summary nodes carry
//! `passed`/`failed`/`skipped` integer attributes, and whose child test nodes
//! carry a `result` token plus free-form trait pairs. Features and scenarios
//! correlate through the `FeatureTitle` and `Description` traits; individual
//! example rows correlate through the named-arguments signature against the
//! generated test name.
//!
//! 家族 A：层级文档，其类级摘要节点携带 `passed`/`failed`/`skipped` 整数属性，
//! 其子测试节点携带 `result` 标记和自由形式的特征对。
//! 功能和场景通过 `FeatureTitle` 与 `Description` 特征关联；
//! 单个示例行通过针对生成的测试名的命名参数签名关联。

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::core::{
    model::{Feature, Scenario, ScenarioOutline},
    signature::{ArgumentStyle, ExampleSignature},
    verdict::Verdict,
};

/// Trait name whose value is the owning feature's title.
const FEATURE_TITLE_TRAIT: &str = "FeatureTitle";
/// Trait name whose value is the scenario or outline title.
const DESCRIPTION_TRAIT: &str = "Description";

/// The assembly root of an xUnit results document.
/// xUnit 结果文档的程序集根。
#[derive(Debug, Deserialize)]
pub struct XUnitAssembly {
    #[serde(rename = "class", default)]
    pub classes: Vec<XUnitClass>,
}

/// A class-level summary node. One generated class corresponds to one
/// feature; the counts aggregate every test in the class.
/// 类级摘要节点。每个生成的类对应一个功能；计数聚合类中的每个测试。
#[derive(Debug, Deserialize)]
pub struct XUnitClass {
    #[serde(rename = "@name")]
    pub name: String,
    #[serde(rename = "@passed")]
    pub passed: u32,
    #[serde(rename = "@failed")]
    pub failed: u32,
    #[serde(rename = "@skipped")]
    pub skipped: u32,
    #[serde(rename = "test", default)]
    pub tests: Vec<XUnitTest>,
}

/// A single test node, in document order within its class.
/// 单个测试节点，在其类中按文档顺序排列。
#[derive(Debug, Deserialize)]
pub struct XUnitTest {
    /// The generated test identifier, matched by example signatures.
    /// 生成的测试标识符，由示例签名匹配。
    #[serde(rename = "@name")]
    pub name: String,
    /// The raw result token: `Pass`, `Fail` or `Skip`.
    /// 原始结果标记：`Pass`、`Fail` 或 `Skip`。
    #[serde(rename = "@result")]
    pub result: String,
    #[serde(default)]
    pub traits: XUnitTraits,
}

impl XUnitTest {
    fn has_trait(&self, name: &str, value: &str) -> bool {
        self.traits
            .traits
            .iter()
            .any(|t| t.name == name && t.value == value)
    }

    /// Maps the raw result token to a verdict. Anything that is neither a
    /// pass nor a fail (skips, unknown tokens) is inconclusive.
    fn verdict(&self) -> Verdict {
        match self.result.to_lowercase().as_str() {
            "pass" => Verdict::Passed,
            "fail" => Verdict::Failed,
            _ => Verdict::Inconclusive,
        }
    }
}

/// The trait list of a test node. / 测试节点的特征列表。
#[derive(Debug, Default, Deserialize)]
pub struct XUnitTraits {
    #[serde(rename = "trait", default)]
    pub traits: Vec<XUnitTrait>,
}

/// A free-form name/value metadata pair used purely for correlation.
/// 仅用于关联的自由形式名称/值元数据对。
#[derive(Debug, Deserialize)]
pub struct XUnitTrait {
    #[serde(rename = "@name")]
    pub name: String,
    #[serde(rename = "@value")]
    pub value: String,
}

/// Parses an xUnit results file into an immutable, queryable run document.
/// Malformed documents fail fast here; queries never see raw XML.
///
/// 将 xUnit 结果文件解析为不可变、可查询的运行文档。
/// 格式错误的文档在此立即失败；查询从不接触原始 XML。
pub fn parse(content: &str) -> Result<XUnitResults> {
    let assembly: XUnitAssembly =
        quick_xml::de::from_str(content).context("invalid xUnit results document")?;
    Ok(XUnitResults { assembly })
}

/// One loaded xUnit run document with its four verdict queries.
/// 一个已加载的 xUnit 运行文档及其四个判定查询。
#[derive(Debug)]
pub struct XUnitResults {
    assembly: XUnitAssembly,
}

impl XUnitResults {
    /// The class-level summary node correlated to the feature, if any.
    fn feature_class(&self, feature: &Feature) -> Option<&XUnitClass> {
        self.assembly.classes.iter().find(|class| {
            class
                .tests
                .iter()
                .any(|test| test.has_trait(FEATURE_TITLE_TRAIT, &feature.name))
        })
    }

    /// All tests of the feature's class whose description trait equals the
    /// given title, in document order.
    fn described_tests<'a>(
        &'a self,
        feature: &Feature,
        title: &'a str,
    ) -> impl Iterator<Item = &'a XUnitTest> {
        self.feature_class(feature)
            .into_iter()
            .flat_map(move |class| {
                class
                    .tests
                    .iter()
                    .filter(move |test| test.has_trait(DESCRIPTION_TRAIT, title))
            })
    }

    pub fn feature_verdict(&self, feature: &Feature) -> Verdict {
        match self.feature_class(feature) {
            Some(class) => Verdict::from_counts(class.passed, class.failed, class.skipped),
            None => Verdict::Inconclusive,
        }
    }

    pub fn scenario_verdict(&self, feature: &Feature, scenario: &Scenario) -> Verdict {
        // A plain scenario has exactly one expected run; no aggregation.
        self.described_tests(feature, &scenario.name)
            .next()
            .map_or(Verdict::Inconclusive, XUnitTest::verdict)
    }

    pub fn scenario_outline_verdict(&self, feature: &Feature, outline: &ScenarioOutline) -> Verdict {
        Verdict::merge(
            self.described_tests(feature, &outline.name)
                .map(XUnitTest::verdict),
        )
    }

    pub fn example_verdict(
        &self,
        feature: &Feature,
        outline: &ScenarioOutline,
        row: &[String],
    ) -> Verdict {
        let signature = ExampleSignature::build(ArgumentStyle::NamedArguments, &outline.name, row);
        self.described_tests(feature, &outline.name)
            .find(|test| signature.is_match(&test.name))
            .map_or(Verdict::Inconclusive, XUnitTest::verdict)
    }
}
