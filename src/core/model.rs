//! # Specification Object Model Module / 规格对象模型模块
//!
//! This module defines the already-parsed specification graph consumed at the
//! engine boundary: features, scenarios, scenario outlines and their example
//! tables. The engine never parses feature text itself; an external parser
//! produces this graph and hands it over as JSON.
//!
//! 此模块定义了引擎边界处消费的已解析规格图：
//! 功能、场景、场景大纲及其示例表。
//! 引擎本身从不解析功能文本；外部解析器生成此图并以 JSON 形式移交。

use serde::{Deserialize, Serialize};

/// The root of a parsed specification graph, as produced by the external
/// feature parser.
/// 已解析规格图的根，由外部功能解析器生成。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SpecDocument {
    /// All features, in discovery order. / 所有功能，按发现顺序排列。
    #[serde(default)]
    pub features: Vec<Feature>,
}

/// A single Gherkin feature with its ordered child elements.
/// 单个 Gherkin 功能及其有序子元素。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Feature {
    /// The feature title; the correlation key for feature-level queries.
    /// 功能标题；功能级查询的关联键。
    pub name: String,
    /// Ordered tags attached to the feature. / 附加到功能的有序标签。
    #[serde(default)]
    pub tags: Vec<String>,
    /// Ordered feature elements: scenarios, scenario outlines, and at most
    /// one background (the parser guarantees the cardinality).
    /// 有序的功能元素：场景、场景大纲，以及至多一个背景（由解析器保证基数）。
    #[serde(default)]
    pub elements: Vec<FeatureElement>,
}

/// A child element of a feature.
/// 功能的子元素。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FeatureElement {
    /// A plain scenario. / 普通场景。
    Scenario(Scenario),
    /// A templated scenario instantiated once per example row.
    /// 按示例行逐一实例化的模板场景。
    ScenarioOutline(ScenarioOutline),
    /// A background shared by the feature's scenarios. / 功能场景共享的背景。
    Background(Background),
}

/// A plain scenario; its identity for correlation is its name, scoped within
/// its owning feature.
/// 普通场景；其关联身份是其名称，作用域限定在所属功能内。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    pub name: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub steps: Vec<Step>,
}

/// A background block. Backgrounds carry no verdict of their own.
/// 背景块。背景本身不携带判定。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Background {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub steps: Vec<Step>,
}

/// A single Gherkin step. / 单个 Gherkin 步骤。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Step {
    /// The step keyword (Given/When/Then/And/But). / 步骤关键字。
    pub keyword: String,
    /// The step text. / 步骤文本。
    pub text: String,
}

/// A scenario outline with its ordered example blocks.
/// 带有有序示例块的场景大纲。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioOutline {
    pub name: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub steps: Vec<Step>,
    /// Ordered example blocks. / 有序的示例块。
    #[serde(default)]
    pub examples: Vec<Example>,
}

impl ScenarioOutline {
    /// Iterates over all example data rows across all example blocks, in
    /// document order. This flattened sequence is the canonical enumeration
    /// of the outline's individual runs.
    ///
    /// 按文档顺序迭代所有示例块中的全部示例数据行。
    /// 此扁平化序列是大纲各独立运行的规范枚举。
    pub fn example_rows(&self) -> impl Iterator<Item = &[String]> {
        self.examples
            .iter()
            .flat_map(|example| example.table.rows.iter().map(Vec::as_slice))
    }
}

/// One example block of a scenario outline. / 场景大纲的一个示例块。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Example {
    /// The optional block name. / 可选的块名称。
    #[serde(default)]
    pub name: Option<String>,
    /// The example table. / 示例表。
    pub table: ExampleTable,
}

/// An example table: ordered header cells and ordered data rows, each row an
/// ordered list of string cell values.
/// 示例表：有序的表头单元格和有序的数据行，每行是有序的字符串单元格值列表。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExampleTable {
    #[serde(default)]
    pub header: Vec<String>,
    #[serde(default)]
    pub rows: Vec<Vec<String>>,
}
