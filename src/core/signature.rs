//! # Example Signature Module / 示例签名模块
//!
//! This module rebuilds, per runner family, the flat identifier a runner
//! generates for one example row of a scenario outline, so that a raw test
//! identifier from a result file can be matched back to the exact row that
//! produced it. The title mangling and the argument serialization are
//! captured empirically from each runner's observed output; a runner version
//! that changes its naming scheme needs its table entry re-captured.
//!
//! 此模块按运行器家族重建运行器为场景大纲的一个示例行生成的扁平标识符，
//! 以便将结果文件中的原始测试标识符匹配回产生它的确切行。
//! 标题改写和参数序列化是根据每个运行器的实际输出经验性捕获的；
//! 更改命名方案的运行器版本需要重新捕获其表项。

use regex::Regex;

/// How a runner family serializes the example-row values into the generated
/// test identifier. Table-driven: each loader names its style explicitly.
///
/// 运行器家族如何将示例行值序列化到生成的测试标识符中。
/// 表驱动：每个加载器显式指明其风格。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgumentStyle {
    /// Every value quoted and joined positionally, with a trailing
    /// placeholder for the implicit extra-tags array parameter:
    /// `title("v1","v2",System.String[])` or a `null` tail.
    ///
    /// 每个值加引号并按位置连接，尾部带有隐式附加标签数组参数的占位符。
    QuotedPositional,
    /// Every value prefixed by its declared parameter name:
    /// `title(param1: "v1", param2: "v2", exampleTags: System.String[])`.
    ///
    /// 每个值都以其声明的参数名为前缀。
    NamedArguments,
    /// Values mangled into identifier fragments and appended with
    /// underscores: `title_v1_v2`. End-anchored, since nothing terminates
    /// the list.
    ///
    /// 值被改写为标识符片段并以下划线附加。末尾锚定，因为没有终止符。
    UnderscoreSuffixed,
}

/// An opaque matcher built from an outline title and one example row.
/// Matching is case-insensitive and literal: regex-significant characters in
/// example values match themselves, and values of any length are supported.
///
/// 由大纲标题和一个示例行构建的不透明匹配器。
/// 匹配不区分大小写且按字面进行：示例值中的正则特殊字符匹配其自身，
/// 并支持任意长度的值。
#[derive(Debug, Clone)]
pub struct ExampleSignature {
    // None only if the assembled pattern failed to compile, in which case the
    // signature matches nothing and the query resolves to a correlation miss.
    pattern: Option<Regex>,
}

impl ExampleSignature {
    /// Builds the signature for one example row of a scenario outline.
    ///
    /// # Arguments / 参数
    /// * `style` - The argument serialization style of the runner family
    ///             运行器家族的参数序列化风格
    /// * `outline_name` - The scenario outline title / 场景大纲标题
    /// * `row` - The example-row cell values, in declaration order
    ///           示例行单元格值，按声明顺序
    pub fn build(style: ArgumentStyle, outline_name: &str, row: &[String]) -> Self {
        let mut source = slug_identifier(outline_name);

        match style {
            ArgumentStyle::QuotedPositional => {
                source.push_str("\\(");
                for value in row {
                    source.push('"');
                    source.push_str(&regex::escape(&value.to_lowercase()));
                    source.push_str("\",");
                }
                source.push_str("(null|system\\.string\\[\\])\\)");
            }
            ArgumentStyle::NamedArguments => {
                source.push_str("\\(");
                for value in row {
                    source.push_str("[^\"]*: \"");
                    source.push_str(&regex::escape(&value.to_lowercase()));
                    source.push_str("\", ");
                }
                source.push_str("exampletags: (system\\.string\\[\\]|null)\\)");
            }
            ArgumentStyle::UnderscoreSuffixed => {
                for value in row {
                    source.push('_');
                    source.push_str(&regex::escape(&slug_identifier(value)));
                }
                source.push('$');
            }
        }

        ExampleSignature {
            pattern: Regex::new(&source).ok(),
        }
    }

    /// Tests whether a runner-produced raw identifier denotes a run of this
    /// exact example row. The candidate is lower-cased before matching.
    ///
    /// 测试运行器产生的原始标识符是否表示此确切示例行的一次运行。
    /// 候选项在匹配前会被转换为小写。
    pub fn is_match(&self, candidate: &str) -> bool {
        let candidate = candidate.to_lowercase();
        self.pattern
            .as_ref()
            .is_some_and(|pattern| pattern.is_match(&candidate))
    }
}

/// Mangles a title the way the supported runners slug test names into
/// identifiers: lowercase, hyphens become underscores, and every other
/// character outside `[a-z0-9_]` (spaces, punctuation, parentheses) is
/// dropped. Leading digits are retained.
///
/// 按支持的运行器将测试名改写为标识符的方式改写标题：
/// 小写，连字符变为下划线，`[a-z0-9_]` 之外的所有其他字符
/// （空格、标点、括号）被丢弃。保留前导数字。
pub fn slug_identifier(title: &str) -> String {
    title
        .to_lowercase()
        .chars()
        .filter_map(|c| match c {
            '-' => Some('_'),
            c if c.is_ascii_alphanumeric() || c == '_' => Some(c),
            _ => None,
        })
        .collect()
}
