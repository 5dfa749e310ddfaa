//! # NUnit Results Loader / NUnit 结果加载器
//!
//! Family B, covering both schema generations. The first generation nests
//! `test-suite`/`results`/`test-case` elements and keeps correlation keys in
//! `description` attributes; the second generation nests `test-suite`/
//! `test-case` under a `test-run` root and keeps correlation keys in
//! `<property name="Description">` elements. Both lower into one typed run
//! document that preserves document order, so first-match example queries
//! behave identically across generations. Example rows correlate via the
//! quoted-positional signature against the generated test-case name.
//!
//! 家族 B，覆盖两代模式。第一代嵌套 `test-suite`/`results`/`test-case` 元素，
//! 并将关联键保存在 `description` 属性中；第二代在 `test-run` 根下嵌套
//! `test-suite`/`test-case`，并将关联键保存在 `<property name="Description">`
//! 元素中。两代都降低为一个保留文档顺序的类型化运行文档，
//! 因此首个匹配的示例查询在两代之间行为一致。
//! 示例行通过针对生成的 test-case 名的引号位置签名关联。

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::core::{
    model::{Feature, Scenario, ScenarioOutline},
    signature::{ArgumentStyle, ExampleSignature},
    verdict::Verdict,
};

/// Property name carrying the human-readable scenario title in the second
/// schema generation.
const DESCRIPTION_PROPERTY: &str = "Description";

// ---------------------------------------------------------------------------
// First schema generation (`<test-results>` root)
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct NUnit2TestResults {
    #[serde(rename = "test-suite")]
    suite: NUnit2Suite,
}

#[derive(Debug, Deserialize)]
struct NUnit2Suite {
    #[serde(rename = "@description")]
    description: Option<String>,
    #[serde(default)]
    results: NUnit2Children,
}

/// The mixed `test-suite`/`test-case` children of a `results` element, kept
/// in document order.
#[derive(Debug, Default, Deserialize)]
struct NUnit2Children {
    #[serde(rename = "$value", default)]
    items: Vec<NUnit2Item>,
}

#[derive(Debug, Deserialize)]
enum NUnit2Item {
    #[serde(rename = "test-suite")]
    Suite(NUnit2Suite),
    #[serde(rename = "test-case")]
    Case(NUnit2Case),
}

#[derive(Debug, Deserialize)]
struct NUnit2Case {
    #[serde(rename = "@name")]
    name: String,
    #[serde(rename = "@description")]
    description: Option<String>,
    #[serde(rename = "@result")]
    result: String,
}

// ---------------------------------------------------------------------------
// Second schema generation (`<test-run>` root)
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct NUnit3TestRun {
    #[serde(rename = "test-suite", default)]
    suites: Vec<NUnit3Suite>,
}

#[derive(Debug, Deserialize)]
struct NUnit3Suite {
    #[serde(rename = "$value", default)]
    children: Vec<NUnit3Item>,
}

#[derive(Debug, Deserialize)]
enum NUnit3Item {
    #[serde(rename = "properties")]
    Properties(NUnit3Properties),
    #[serde(rename = "test-suite")]
    Suite(NUnit3Suite),
    #[serde(rename = "test-case")]
    Case(NUnit3Case),
    /// Decoration elements the runner records next to suites and cases:
    /// `<environment>`, `<settings>` and `<filter>` on suites, `<failure>`,
    /// `<reason>`, `<output>`, `<assertions>` and `<attachments>` on cases.
    /// Consumed and discarded so they never shift document order.
    ///
    /// 运行器记录在套件和用例旁的装饰元素。消费后丢弃，绝不影响文档顺序。
    #[serde(
        rename = "environment",
        alias = "settings",
        alias = "filter",
        alias = "failure",
        alias = "reason",
        alias = "output",
        alias = "assertions",
        alias = "attachments"
    )]
    Decoration(serde::de::IgnoredAny),
}

#[derive(Debug, Deserialize)]
struct NUnit3Case {
    #[serde(rename = "@name")]
    name: String,
    #[serde(rename = "@result")]
    result: String,
    #[serde(rename = "$value", default)]
    children: Vec<NUnit3Item>,
}

#[derive(Debug, Default, Deserialize)]
struct NUnit3Properties {
    #[serde(rename = "property", default)]
    properties: Vec<NUnit3Property>,
}

#[derive(Debug, Deserialize)]
struct NUnit3Property {
    #[serde(rename = "@name")]
    name: String,
    #[serde(rename = "@value")]
    value: String,
}

// ---------------------------------------------------------------------------
// Typed run document shared by both generations
// ---------------------------------------------------------------------------

/// A suite node of the lowered run document. The correlation key is the
/// suite's description (feature or outline title), when the runner recorded
/// one.
#[derive(Debug, Default)]
struct SuiteNode {
    key: Option<String>,
    children: Vec<ResultNode>,
}

#[derive(Debug)]
enum ResultNode {
    Suite(SuiteNode),
    Case(CaseNode),
}

/// A test-case node of the lowered run document.
#[derive(Debug)]
struct CaseNode {
    /// The generated test identifier, matched by example signatures.
    identifier: String,
    /// The correlation key: the scenario or outline title.
    key: Option<String>,
    /// The verdict mapped from the raw result token at load time.
    outcome: Verdict,
}

fn lower_nunit2(suite: NUnit2Suite) -> SuiteNode {
    let children = suite
        .results
        .items
        .into_iter()
        .map(|item| match item {
            NUnit2Item::Suite(inner) => ResultNode::Suite(lower_nunit2(inner)),
            NUnit2Item::Case(case) => ResultNode::Case(CaseNode {
                outcome: nunit2_verdict(&case.result),
                identifier: case.name,
                key: case.description,
            }),
        })
        .collect();

    SuiteNode {
        key: suite.description,
        children,
    }
}

fn nunit2_verdict(token: &str) -> Verdict {
    match token.to_lowercase().as_str() {
        "success" => Verdict::Passed,
        "failure" | "error" => Verdict::Failed,
        // Ignored, Inconclusive, NotRunnable, ...
        _ => Verdict::Inconclusive,
    }
}

fn lower_nunit3(suite: NUnit3Suite) -> SuiteNode {
    let mut node = SuiteNode::default();

    for item in suite.children {
        match item {
            NUnit3Item::Properties(properties) => {
                if node.key.is_none() {
                    node.key = description_property(&properties);
                }
            }
            NUnit3Item::Suite(inner) => node.children.push(ResultNode::Suite(lower_nunit3(inner))),
            NUnit3Item::Case(case) => {
                let key = case.children.iter().find_map(|child| match child {
                    NUnit3Item::Properties(properties) => description_property(properties),
                    _ => None,
                });
                node.children.push(ResultNode::Case(CaseNode {
                    outcome: nunit3_verdict(&case.result),
                    identifier: case.name,
                    key,
                }));
            }
            NUnit3Item::Decoration(_) => {}
        }
    }

    node
}

fn description_property(properties: &NUnit3Properties) -> Option<String> {
    properties
        .properties
        .iter()
        .find(|property| property.name == DESCRIPTION_PROPERTY)
        .map(|property| property.value.clone())
}

fn nunit3_verdict(token: &str) -> Verdict {
    match token.to_lowercase().as_str() {
        "passed" => Verdict::Passed,
        "failed" => Verdict::Failed,
        // Skipped, Inconclusive, Warning, ...
        _ => Verdict::Inconclusive,
    }
}

/// Parses a first-generation NUnit results file.
/// 解析第一代 NUnit 结果文件。
pub fn parse_nunit2(content: &str) -> Result<NUnitResults> {
    let document: NUnit2TestResults =
        quick_xml::de::from_str(content).context("invalid NUnit results document")?;
    Ok(NUnitResults {
        root: SuiteNode {
            key: None,
            children: vec![ResultNode::Suite(lower_nunit2(document.suite))],
        },
    })
}

/// Parses a second-generation NUnit results file.
/// 解析第二代 NUnit 结果文件。
pub fn parse_nunit3(content: &str) -> Result<NUnitResults> {
    let document: NUnit3TestRun =
        quick_xml::de::from_str(content).context("invalid NUnit results document")?;
    Ok(NUnitResults {
        root: SuiteNode {
            key: None,
            children: document
                .suites
                .into_iter()
                .map(|suite| ResultNode::Suite(lower_nunit3(suite)))
                .collect(),
        },
    })
}

/// One loaded NUnit run document with its four verdict queries.
/// 一个已加载的 NUnit 运行文档及其四个判定查询。
#[derive(Debug)]
pub struct NUnitResults {
    root: SuiteNode,
}

impl NUnitResults {
    /// The first suite correlated to the feature title in pre-order, if any.
    fn feature_suite(&self, feature: &Feature) -> Option<&SuiteNode> {
        find_suite(&self.root, &feature.name)
    }

    /// All test cases below the feature suite, in document order.
    fn feature_cases(&self, feature: &Feature) -> Vec<&CaseNode> {
        let mut cases = Vec::new();
        if let Some(suite) = self.feature_suite(feature) {
            collect_cases(suite, &mut cases);
        }
        cases
    }

    pub fn feature_verdict(&self, feature: &Feature) -> Verdict {
        let Some(suite) = self.feature_suite(feature) else {
            return Verdict::Inconclusive;
        };

        // This schema carries no summary counts; tally the recorded children
        // and reduce with the same count rule as the other families.
        let mut cases = Vec::new();
        collect_cases(suite, &mut cases);
        let passed = cases.iter().filter(|c| c.outcome == Verdict::Passed).count() as u32;
        let failed = cases.iter().filter(|c| c.outcome == Verdict::Failed).count() as u32;
        let skipped = cases
            .iter()
            .filter(|c| c.outcome == Verdict::Inconclusive)
            .count() as u32;
        Verdict::from_counts(passed, failed, skipped)
    }

    pub fn scenario_verdict(&self, feature: &Feature, scenario: &Scenario) -> Verdict {
        self.feature_cases(feature)
            .into_iter()
            .find(|case| case.key.as_deref() == Some(scenario.name.as_str()))
            .map_or(Verdict::Inconclusive, |case| case.outcome)
    }

    pub fn scenario_outline_verdict(&self, feature: &Feature, outline: &ScenarioOutline) -> Verdict {
        Verdict::merge(
            self.feature_cases(feature)
                .into_iter()
                .filter(|case| case.key.as_deref() == Some(outline.name.as_str()))
                .map(|case| case.outcome),
        )
    }

    pub fn example_verdict(
        &self,
        feature: &Feature,
        outline: &ScenarioOutline,
        row: &[String],
    ) -> Verdict {
        let signature = ExampleSignature::build(ArgumentStyle::QuotedPositional, &outline.name, row);
        self.feature_cases(feature)
            .into_iter()
            .filter(|case| case.key.as_deref() == Some(outline.name.as_str()))
            .find(|case| signature.is_match(&case.identifier))
            .map_or(Verdict::Inconclusive, |case| case.outcome)
    }
}

fn find_suite<'a>(node: &'a SuiteNode, title: &str) -> Option<&'a SuiteNode> {
    if node.key.as_deref() == Some(title) {
        return Some(node);
    }
    node.children.iter().find_map(|child| match child {
        ResultNode::Suite(suite) => find_suite(suite, title),
        ResultNode::Case(_) => None,
    })
}

fn collect_cases<'a>(node: &'a SuiteNode, cases: &mut Vec<&'a CaseNode>) {
    for child in &node.children {
        match child {
            ResultNode::Suite(suite) => collect_cases(suite, cases),
            ResultNode::Case(case) => cases.push(case),
        }
    }
}
