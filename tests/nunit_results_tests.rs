//! # NUnit Loader Tests / NUnit 加载器测试
//!
//! This module tests the four verdict queries against both NUnit schema
//! generations, verifying that they lower into the same typed run document
//! and answer identically.
//!
//! 此模块测试针对两代 NUnit 模式的四个判定查询，
//! 验证它们降低为同一类型化运行文档并给出相同答案。

mod common;

use common::{addition_feature, feature, outline, row, scenario};
use gherkin_verdict::formats::nunit::{self, NUnitResults};
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

/// First-generation document for the "Addition" feature: the scenario
/// passed, the first outline row passed and the second failed.
fn nunit2_addition() -> NUnitResults {
    let content = r#"<test-results>
  <test-suite name="Specs.dll">
    <results>
      <test-suite description="Addition">
        <results>
          <test-case name="Specs.AdditionFeature.AddTwoNumbers" description="Add two numbers" result="Success" />
          <test-suite description="Adding several numbers">
            <results>
              <test-case name="Specs.AdditionFeature.AddingSeveralNumbers(&quot;40&quot;,&quot;50&quot;,&quot;90&quot;,null)" description="Adding several numbers" result="Success" />
              <test-case name="Specs.AdditionFeature.AddingSeveralNumbers(&quot;60&quot;,&quot;70&quot;,&quot;130&quot;,null)" description="Adding several numbers" result="Failure" />
            </results>
          </test-suite>
        </results>
      </test-suite>
    </results>
  </test-suite>
</test-results>"#;
    nunit::parse_nunit2(content).unwrap()
}

/// Second-generation document with the same runs as [`nunit2_addition`],
/// keyed through description properties instead of attributes.
fn nunit3_addition() -> NUnitResults {
    let content = r#"<test-run>
  <test-suite>
    <properties>
      <property name="Description" value="Addition" />
    </properties>
    <test-case name="Specs.AdditionFeature.AddTwoNumbers" result="Passed">
      <properties>
        <property name="Description" value="Add two numbers" />
      </properties>
    </test-case>
    <test-suite>
      <properties>
        <property name="Description" value="Adding several numbers" />
      </properties>
      <test-case name="Specs.AdditionFeature.AddingSeveralNumbers(&quot;40&quot;,&quot;50&quot;,&quot;90&quot;,null)" result="Passed">
        <properties>
          <property name="Description" value="Adding several numbers" />
        </properties>
      </test-case>
      <test-case name="Specs.AdditionFeature.AddingSeveralNumbers(&quot;60&quot;,&quot;70&quot;,&quot;130&quot;,null)" result="Failed">
        <properties>
          <property name="Description" value="Adding several numbers" />
        </properties>
      </test-case>
    </test-suite>
  </test-suite>
</test-run>"#;
    nunit::parse_nunit3(content).unwrap()
}

fn assert_addition_queries(results: &NUnitResults) {
    let feature = addition_feature();
    let outline = outline_of(&feature);

    // Feature: tallied over every descendant case.
    assert_eq!(results.feature_verdict(&feature), Verdict::Failed);

    // Scenario: keyed by its description.
    assert_eq!(
        results.scenario_verdict(&feature, &scenario("Add two numbers")),
        Verdict::Passed
    );
    assert_eq!(
        results.scenario_verdict(&feature, &scenario("Add three numbers")),
        Verdict::Inconclusive
    );

    // Outline: merged over every row run.
    assert_eq!(
        results.scenario_outline_verdict(&feature, outline),
        Verdict::Failed
    );

    // Example rows: matched by the quoted-positional signature.
    assert_eq!(
        results.example_verdict(&feature, outline, &row(&["40", "50", "90"])),
        Verdict::Passed
    );
    assert_eq!(
        results.example_verdict(&feature, outline, &row(&["60", "70", "130"])),
        Verdict::Failed
    );
    assert_eq!(
        results.example_verdict(&feature, outline, &row(&["1", "2", "3"])),
        Verdict::Inconclusive
    );
}

#[test]
fn test_first_generation_queries() {
    assert_addition_queries(&nunit2_addition());
}

#[test]
fn test_second_generation_queries() {
    assert_addition_queries(&nunit3_addition());
}

#[test]
fn test_unknown_feature_is_inconclusive() {
    let unknown = feature("Subtraction", vec![]);
    assert_eq!(
        nunit2_addition().feature_verdict(&unknown),
        Verdict::Inconclusive
    );
    assert_eq!(
        nunit3_addition().feature_verdict(&unknown),
        Verdict::Inconclusive
    );
}

#[test]
fn test_ignored_result_token_is_inconclusive() {
    let content = r#"<test-results>
  <test-suite description="Addition">
    <results>
      <test-case name="Specs.AdditionFeature.AddTwoNumbers" description="Add two numbers" result="Ignored" />
    </results>
  </test-suite>
</test-results>"#;
    let results = nunit::parse_nunit2(content).unwrap();
    let feature = addition_feature();

    assert_eq!(
        results.scenario_verdict(&feature, &scenario("Add two numbers")),
        Verdict::Inconclusive
    );
    assert_eq!(results.feature_verdict(&feature), Verdict::Inconclusive);
}

#[test]
fn test_error_result_token_is_a_failure() {
    let content = r#"<test-results>
  <test-suite description="Addition">
    <results>
      <test-case name="Specs.AdditionFeature.AddTwoNumbers" description="Add two numbers" result="Error" />
    </results>
  </test-suite>
</test-results>"#;
    let results = nunit::parse_nunit2(content).unwrap();
    let feature = addition_feature();

    assert_eq!(
        results.scenario_verdict(&feature, &scenario("Add two numbers")),
        Verdict::Failed
    );
}

#[test]
fn test_second_generation_decoration_elements_are_skipped() {
    // A realistic document: the runner records environment, settings and
    // filter elements on suites, and failure, output and assertion details
    // on cases. None of it may break loading or shift document order.
    let content = r#"<test-run testcasecount="2" result="Failed">
  <filter><and /></filter>
  <test-suite type="Assembly" result="Failed">
    <environment framework-version="3.13.2" os-version="Linux" />
    <settings>
      <setting name="WorkDirectory" value="/tmp/specs" />
    </settings>
    <properties>
      <property name="Description" value="Addition" />
    </properties>
    <test-case name="Specs.AdditionFeature.AddTwoNumbers" result="Failed" asserts="1">
      <properties>
        <property name="Description" value="Add two numbers" />
      </properties>
      <failure>
        <message>expected 3 but was 4</message>
        <stack-trace>at Specs.AdditionFeature.AddTwoNumbers()</stack-trace>
      </failure>
      <assertions>
        <assertion result="Failed" />
      </assertions>
      <output>calculator console output</output>
    </test-case>
    <test-case name="Specs.AdditionFeature.AddZero" result="Skipped">
      <properties>
        <property name="Description" value="Add zero" />
      </properties>
      <reason>
        <message>not implemented yet</message>
      </reason>
    </test-case>
  </test-suite>
</test-run>"#;
    let results = nunit::parse_nunit3(content).unwrap();
    let feature = addition_feature();

    assert_eq!(results.feature_verdict(&feature), Verdict::Failed);
    assert_eq!(
        results.scenario_verdict(&feature, &scenario("Add two numbers")),
        Verdict::Failed
    );
    assert_eq!(
        results.scenario_verdict(&feature, &scenario("Add zero")),
        Verdict::Inconclusive
    );
}

#[test]
fn test_first_generation_failure_details_are_skipped() {
    // First-generation runners attach failure messages and stack traces to
    // the failed case and environment blocks to the document root.
    let content = r#"<test-results total="1" failures="1">
  <environment nunit-version="2.6.4" os-version="Linux" />
  <culture-info current-culture="en-US" current-uiculture="en-US" />
  <test-suite description="Addition" result="Failure">
    <results>
      <test-case name="Specs.AdditionFeature.AddTwoNumbers" description="Add two numbers" result="Failure">
        <failure>
          <message><![CDATA[expected 3 but was 4]]></message>
          <stack-trace><![CDATA[at Specs.AdditionFeature.AddTwoNumbers()]]></stack-trace>
        </failure>
      </test-case>
    </results>
  </test-suite>
</test-results>"#;
    let results = nunit::parse_nunit2(content).unwrap();
    let feature = addition_feature();

    assert_eq!(results.feature_verdict(&feature), Verdict::Failed);
    assert_eq!(
        results.scenario_verdict(&feature, &scenario("Add two numbers")),
        Verdict::Failed
    );
}

#[test]
fn test_duplicate_rows_first_match_versus_merge() {
    // Two runs of the same example row: the row query answers with the first
    // run in document order, while the outline query merges both.
    let content = r#"<test-results>
  <test-suite description="Addition">
    <results>
      <test-suite description="Adding several numbers">
        <results>
          <test-case name="Specs.AdditionFeature.AddingSeveralNumbers(&quot;40&quot;,&quot;50&quot;,&quot;90&quot;,null)" description="Adding several numbers" result="Success" />
          <test-case name="Specs.AdditionFeature.AddingSeveralNumbers(&quot;40&quot;,&quot;50&quot;,&quot;90&quot;,null)" description="Adding several numbers" result="Failure" />
        </results>
      </test-suite>
    </results>
  </test-suite>
</test-results>"#;
    let results = nunit::parse_nunit2(content).unwrap();
    let feature = feature(
        "Addition",
        vec![FeatureElement::ScenarioOutline(outline(
            "Adding several numbers",
            &["first", "second", "result"],
            &[&["40", "50", "90"]],
        ))],
    );
    let outline = outline_of(&feature);

    assert_eq!(
        results.example_verdict(&feature, outline, &row(&["40", "50", "90"])),
        Verdict::Passed
    );
    assert_eq!(
        results.scenario_outline_verdict(&feature, outline),
        Verdict::Failed
    );
}

#[test]
fn test_malformed_document_fails_fast() {
    assert!(nunit::parse_nunit2("<test-results><test-suite>").is_err());
    assert!(nunit::parse_nunit3("not xml at all").is_err());
}
