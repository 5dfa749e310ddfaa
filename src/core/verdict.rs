//! # Verdict Algebra Module / 判定代数模块
//!
//! This module defines the tri-state verdict assigned to every specification
//! node and the merge law used to combine conflicting evidence. The same law
//! is applied when reducing raw result counts, when reducing per-example
//! verdicts into an outline verdict, and when reducing per-file verdicts into
//! a composite verdict.
//!
//! 此模块定义了分配给每个规格节点的三态判定，
//! 以及用于合并相互冲突证据的合并法则。
//! 同一法则应用于归约原始结果计数、将各示例判定归约为大纲判定、
//! 以及将各文件判定归约为组合判定。

use crate::infra::t;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The tri-state verdict for a specification node.
/// Under the merge law, `Failed` dominates `Inconclusive`, which dominates
/// `Passed`; an empty evidence set is `Inconclusive`.
///
/// 规格节点的三态判定。
/// 在合并法则下，`Failed` 支配 `Inconclusive`，`Inconclusive` 支配 `Passed`；
/// 空证据集为 `Inconclusive`。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    /// Every correlated run passed. / 所有关联的运行均通过。
    Passed,
    /// At least one correlated run failed. / 至少一个关联的运行失败。
    Failed,
    /// No evidence, or only skipped/ignored runs. / 无证据，或仅有跳过/忽略的运行。
    Inconclusive,
}

impl Verdict {
    /// Merges a sequence of verdicts into a single verdict.
    ///
    /// An empty sequence yields `Inconclusive`. Otherwise `Failed` wins over
    /// `Inconclusive`, which wins over `Passed`. The operation is commutative
    /// and associative, so callers may combine evidence in any order.
    ///
    /// 将一个判定序列合并为单一判定。
    /// 空序列产生 `Inconclusive`。否则 `Failed` 胜过 `Inconclusive`，
    /// `Inconclusive` 胜过 `Passed`。该操作满足交换律和结合律。
    pub fn merge<I>(verdicts: I) -> Verdict
    where
        I: IntoIterator<Item = Verdict>,
    {
        verdicts
            .into_iter()
            .reduce(Verdict::combine)
            .unwrap_or(Verdict::Inconclusive)
    }

    /// Combines two verdicts under the dominance order.
    fn combine(self, other: Verdict) -> Verdict {
        match (self, other) {
            (Verdict::Failed, _) | (_, Verdict::Failed) => Verdict::Failed,
            (Verdict::Inconclusive, _) | (_, Verdict::Inconclusive) => Verdict::Inconclusive,
            (Verdict::Passed, Verdict::Passed) => Verdict::Passed,
        }
    }

    /// Reduces raw pass/fail/skip counts from a summary node into a verdict,
    /// with the same precedence as [`Verdict::merge`]. A summary node with
    /// zero recorded children is `Inconclusive`.
    ///
    /// 将摘要节点的原始通过/失败/跳过计数归约为判定，
    /// 优先级与 [`Verdict::merge`] 相同。没有记录任何子节点的摘要节点为 `Inconclusive`。
    pub fn from_counts(passed: u32, failed: u32, skipped: u32) -> Verdict {
        if failed > 0 {
            Verdict::Failed
        } else if skipped > 0 {
            Verdict::Inconclusive
        } else if passed > 0 {
            Verdict::Passed
        } else {
            Verdict::Inconclusive
        }
    }

    /// Checks if the verdict is a failure.
    pub fn is_failed(&self) -> bool {
        matches!(self, Verdict::Failed)
    }

    /// Gets the localized status string for display.
    /// 以字符串形式获取判定状态以供显示。
    pub fn status_str(&self, locale: &str) -> String {
        match self {
            Verdict::Passed => t!("report.status_passed", locale = locale).to_string(),
            Verdict::Failed => t!("report.status_failed", locale = locale).to_string(),
            Verdict::Inconclusive => {
                t!("report.status_inconclusive", locale = locale).to_string()
            }
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Verdict::Passed => "Passed",
            Verdict::Failed => "Failed",
            Verdict::Inconclusive => "Inconclusive",
        };
        write!(f, "{}", label)
    }
}
