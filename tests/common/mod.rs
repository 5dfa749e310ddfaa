// Shared test helpers for integration tests
#![allow(dead_code)] // not every test binary uses every helper

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

use gherkin_verdict::model::{
    Example, ExampleTable, Feature, FeatureElement, Scenario, ScenarioOutline, Step,
};

/// Helper function to write a fixture file into a temporary directory
/// 将夹具文件写入临时目录的辅助函数
pub fn write_fixture(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("Failed to write fixture file");
    path
}

/// Helper function to create a feature with the given elements
pub fn feature(name: &str, elements: Vec<FeatureElement>) -> Feature {
    Feature {
        name: name.to_string(),
        tags: vec![],
        elements,
    }
}

/// Helper function to create a plain scenario
pub fn scenario(name: &str) -> Scenario {
    Scenario {
        name: name.to_string(),
        tags: vec![],
        steps: vec![Step {
            keyword: "When".to_string(),
            text: "something happens".to_string(),
        }],
    }
}

/// Helper function to create a scenario outline with one example block
pub fn outline(name: &str, header: &[&str], rows: &[&[&str]]) -> ScenarioOutline {
    ScenarioOutline {
        name: name.to_string(),
        tags: vec![],
        steps: vec![],
        examples: vec![Example {
            name: None,
            table: ExampleTable {
                header: header.iter().map(|cell| cell.to_string()).collect(),
                rows: rows
                    .iter()
                    .map(|row| row.iter().map(|cell| cell.to_string()).collect())
                    .collect(),
            },
        }],
    }
}

/// Helper function to create one example row
pub fn row(cells: &[&str]) -> Vec<String> {
    cells.iter().map(|cell| cell.to_string()).collect()
}

/// The "Addition" feature used across the loader tests: one plain scenario
/// and one outline with two example rows.
/// 加载器测试中使用的 "Addition" 功能：一个普通场景和一个带两行示例的大纲。
pub fn addition_feature() -> Feature {
    feature(
        "Addition",
        vec![
            FeatureElement::Scenario(scenario("Add two numbers")),
            FeatureElement::ScenarioOutline(outline(
                "Adding several numbers",
                &["first", "second", "result"],
                &[&["40", "50", "90"], &["60", "70", "130"]],
            )),
        ],
    )
}

/// An xUnit results file where every run of the "Addition" feature passed.
pub fn xunit_addition_passing() -> String {
    r#"<assembly>
  <class name="Specs.AdditionFeature" passed="3" failed="0" skipped="0">
    <test name="Specs.AdditionFeature.AddTwoNumbers" result="Pass">
      <traits>
        <trait name="FeatureTitle" value="Addition" />
        <trait name="Description" value="Add two numbers" />
      </traits>
    </test>
    <test name="Specs.AdditionFeature.AddingSeveralNumbers(firstNumber: &quot;40&quot;, secondNumber: &quot;50&quot;, result: &quot;90&quot;, exampleTags: System.String[])" result="Pass">
      <traits>
        <trait name="FeatureTitle" value="Addition" />
        <trait name="Description" value="Adding several numbers" />
      </traits>
    </test>
    <test name="Specs.AdditionFeature.AddingSeveralNumbers(firstNumber: &quot;60&quot;, secondNumber: &quot;70&quot;, result: &quot;130&quot;, exampleTags: System.String[])" result="Pass">
      <traits>
        <trait name="FeatureTitle" value="Addition" />
        <trait name="Description" value="Adding several numbers" />
      </traits>
    </test>
  </class>
</assembly>
"#
    .to_string()
}

/// An xUnit results file where the second outline row of the "Addition"
/// feature failed.
pub fn xunit_addition_failing() -> String {
    xunit_addition_passing()
        .replace(r#"passed="3" failed="0""#, r#"passed="2" failed="1""#)
        .replace(
            r#"secondNumber: &quot;70&quot;, result: &quot;130&quot;, exampleTags: System.String[])" result="Pass""#,
            r#"secondNumber: &quot;70&quot;, result: &quot;130&quot;, exampleTags: System.String[])" result="Fail""#,
        )
}

/// The "Addition" feature as the JSON document handed over by the external
/// feature parser.
pub fn addition_spec_json() -> String {
    serde_json::to_string_pretty(&gherkin_verdict::model::SpecDocument {
        features: vec![addition_feature()],
    })
    .expect("Failed to serialize spec document")
}
