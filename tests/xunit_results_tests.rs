//! # xUnit Loader Tests / xUnit 加载器测试
//!
//! This module tests the four verdict queries against loaded xUnit results
//! documents: count-based feature verdicts, trait-based scenario lookup, and
//! the first-match / merge asymmetry for example rows.
//!
//! 此模块测试针对已加载 xUnit 结果文档的四个判定查询：
//! 基于计数的功能判定、基于特征的场景查找，
//! 以及示例行的首个匹配 / 合并不对称性。

mod common;

use common::{addition_feature, feature, outline, row, scenario, xunit_addition_failing};
use gherkin_verdict::formats::xunit;
use gherkin_verdict::model::FeatureElement;
use gherkin_verdict::verdict::Verdict;

fn outline_of(feature: &gherkin_verdict::model::Feature) -> &gherkin_verdict::model::ScenarioOutline {
    feature
        .elements
        .iter()
        .find_map(|element| match element {
            FeatureElement::ScenarioOutline(outline) => Some(outline),
            _ => None,
        })
        .expect("feature has no outline")
}

#[test]
fn test_feature_verdict_comes_from_class_counts() {
    let results = xunit::parse(&xunit_addition_failing()).unwrap();
    let feature = addition_feature();

    assert_eq!(results.feature_verdict(&feature), Verdict::Failed);
}

#[test]
fn test_unknown_feature_is_inconclusive() {
    let results = xunit::parse(&xunit_addition_failing()).unwrap();
    let unknown = feature("Subtraction", vec![]);

    assert_eq!(results.feature_verdict(&unknown), Verdict::Inconclusive);
}

#[test]
fn test_skipped_only_counts_are_inconclusive() {
    let content = r#"<assembly>
  <class name="Specs.AdditionFeature" passed="0" failed="0" skipped="2">
    <test name="Specs.AdditionFeature.AddTwoNumbers" result="Skip">
      <traits>
        <trait name="FeatureTitle" value="Addition" />
        <trait name="Description" value="Add two numbers" />
      </traits>
    </test>
  </class>
</assembly>"#;
    let results = xunit::parse(content).unwrap();
    let feature = addition_feature();

    assert_eq!(results.feature_verdict(&feature), Verdict::Inconclusive);
}

#[test]
fn test_scenario_verdict_uses_description_trait() {
    let results = xunit::parse(&xunit_addition_failing()).unwrap();
    let feature = addition_feature();

    assert_eq!(
        results.scenario_verdict(&feature, &scenario("Add two numbers")),
        Verdict::Passed
    );
    assert_eq!(
        results.scenario_verdict(&feature, &scenario("Add three numbers")),
        Verdict::Inconclusive
    );
}

#[test]
fn test_scenario_verdict_takes_first_match_without_aggregation() {
    // Two runs share the description; the first one in document order wins
    // even though a later run failed.
    let content = r#"<assembly>
  <class name="Specs.AdditionFeature" passed="1" failed="1" skipped="0">
    <test name="Specs.AdditionFeature.AddTwoNumbers" result="Pass">
      <traits>
        <trait name="FeatureTitle" value="Addition" />
        <trait name="Description" value="Add two numbers" />
      </traits>
    </test>
    <test name="Specs.AdditionFeature.AddTwoNumbersAgain" result="Fail">
      <traits>
        <trait name="FeatureTitle" value="Addition" />
        <trait name="Description" value="Add two numbers" />
      </traits>
    </test>
  </class>
</assembly>"#;
    let results = xunit::parse(content).unwrap();
    let feature = addition_feature();

    assert_eq!(
        results.scenario_verdict(&feature, &scenario("Add two numbers")),
        Verdict::Passed
    );
}

#[test]
fn test_outline_verdict_merges_all_rows() {
    let results = xunit::parse(&xunit_addition_failing()).unwrap();
    let feature = addition_feature();

    assert_eq!(
        results.scenario_outline_verdict(&feature, outline_of(&feature)),
        Verdict::Failed
    );
}

#[test]
fn test_example_verdict_matches_named_arguments() {
    let results = xunit::parse(&xunit_addition_failing()).unwrap();
    let feature = addition_feature();
    let outline = outline_of(&feature);

    assert_eq!(
        results.example_verdict(&feature, outline, &row(&["40", "50", "90"])),
        Verdict::Passed
    );
    assert_eq!(
        results.example_verdict(&feature, outline, &row(&["60", "70", "130"])),
        Verdict::Failed
    );
}

#[test]
fn test_unmatched_example_row_is_inconclusive() {
    let results = xunit::parse(&xunit_addition_failing()).unwrap();
    let feature = addition_feature();
    let outline = outline_of(&feature);

    assert_eq!(
        results.example_verdict(&feature, outline, &row(&["1", "2", "3"])),
        Verdict::Inconclusive
    );
}

#[test]
fn test_unknown_outline_is_inconclusive() {
    let results = xunit::parse(&xunit_addition_failing()).unwrap();
    let feature = addition_feature();
    let missing = outline("Multiplying numbers", &["a"], &[&["1"]]);

    assert_eq!(
        results.scenario_outline_verdict(&feature, &missing),
        Verdict::Inconclusive
    );
}

#[test]
fn test_malformed_document_fails_fast() {
    let result = xunit::parse("<assembly><class name=");
    assert!(result.is_err());
}
