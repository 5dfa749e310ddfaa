//! # Result Correlation Module / 结果关联模块
//!
//! This module exposes the four-operation read-only contract renderers call
//! once per specification node, implemented by a closed set of per-family
//! single-run results and by the composite over all configured result files.
//! Files load in parallel; after load everything is immutable and queries
//! are pure.
//!
//! 此模块暴露渲染器针对每个规格节点调用一次的四操作只读契约，
//! 由按家族划分的单次运行结果封闭集合以及覆盖所有已配置结果文件的
//! 组合结果实现。文件并行加载；加载后一切不可变，查询是纯函数。

use anyhow::{Context, Result};
use futures::future::try_join_all;
use std::path::{Path, PathBuf};

use crate::core::{
    config::RunnerFormat,
    model::{Feature, Scenario, ScenarioOutline},
    verdict::Verdict,
};
use crate::formats::{nunit, trx, xunit};
use crate::infra::fs::read_file;

/// The read-only verdict contract exposed to document renderers. Every query
/// is a pure function of the node and the loaded documents; absence of
/// evidence is `Inconclusive`, never an error.
///
/// 暴露给文档渲染器的只读判定契约。每个查询都是节点与已加载文档的纯函数；
/// 缺乏证据即为 `Inconclusive`，绝不是错误。
pub trait TestResults {
    /// The verdict of a whole feature. / 整个功能的判定。
    fn feature_verdict(&self, feature: &Feature) -> Verdict;

    /// The verdict of a plain scenario within its owning feature.
    /// 所属功能内普通场景的判定。
    fn scenario_verdict(&self, feature: &Feature, scenario: &Scenario) -> Verdict;

    /// The merged verdict over every example-row run of an outline.
    /// 大纲所有示例行运行的合并判定。
    fn scenario_outline_verdict(&self, feature: &Feature, outline: &ScenarioOutline) -> Verdict;

    /// The verdict of the first run matching one exact example row. For
    /// duplicate rows this deliberately differs from the outline merge.
    /// 与一个确切示例行匹配的第一次运行的判定。
    /// 对于重复行，这有意区别于大纲合并。
    fn example_verdict(
        &self,
        feature: &Feature,
        outline: &ScenarioOutline,
        row: &[String],
    ) -> Verdict;
}

/// One loaded result file, as a closed set of runner families selected at
/// load time by the configured format tag.
/// 一个已加载的结果文件，作为在加载时由配置的格式标签选定的运行器家族封闭集合。
#[derive(Debug)]
pub enum SingleRunResults {
    XUnit(xunit::XUnitResults),
    NUnit(nunit::NUnitResults),
    Trx(trx::TrxResults),
}

impl TestResults for SingleRunResults {
    fn feature_verdict(&self, feature: &Feature) -> Verdict {
        match self {
            SingleRunResults::XUnit(results) => results.feature_verdict(feature),
            SingleRunResults::NUnit(results) => results.feature_verdict(feature),
            SingleRunResults::Trx(results) => results.feature_verdict(feature),
        }
    }

    fn scenario_verdict(&self, feature: &Feature, scenario: &Scenario) -> Verdict {
        match self {
            SingleRunResults::XUnit(results) => results.scenario_verdict(feature, scenario),
            SingleRunResults::NUnit(results) => results.scenario_verdict(feature, scenario),
            SingleRunResults::Trx(results) => results.scenario_verdict(feature, scenario),
        }
    }

    fn scenario_outline_verdict(&self, feature: &Feature, outline: &ScenarioOutline) -> Verdict {
        match self {
            SingleRunResults::XUnit(results) => results.scenario_outline_verdict(feature, outline),
            SingleRunResults::NUnit(results) => results.scenario_outline_verdict(feature, outline),
            SingleRunResults::Trx(results) => results.scenario_outline_verdict(feature, outline),
        }
    }

    fn example_verdict(
        &self,
        feature: &Feature,
        outline: &ScenarioOutline,
        row: &[String],
    ) -> Verdict {
        match self {
            SingleRunResults::XUnit(results) => results.example_verdict(feature, outline, row),
            SingleRunResults::NUnit(results) => results.example_verdict(feature, outline, row),
            SingleRunResults::Trx(results) => results.example_verdict(feature, outline, row),
        }
    }
}

/// Wraps the single-run results of every configured result file, in
/// configured order, and merges their answers. Because the merge law is
/// commutative and associative, the composite answer does not depend on
/// load order.
///
/// 按配置顺序包装每个已配置结果文件的单次运行结果，并合并它们的答案。
/// 由于合并法则满足交换律和结合律，组合答案不依赖加载顺序。
#[derive(Debug)]
pub struct CompositeResults {
    runs: Vec<SingleRunResults>,
}

impl CompositeResults {
    pub fn new(runs: Vec<SingleRunResults>) -> Self {
        CompositeResults { runs }
    }

    /// The number of loaded result files. / 已加载结果文件的数量。
    pub fn run_count(&self) -> usize {
        self.runs.len()
    }
}

impl TestResults for CompositeResults {
    fn feature_verdict(&self, feature: &Feature) -> Verdict {
        Verdict::merge(self.runs.iter().map(|run| run.feature_verdict(feature)))
    }

    fn scenario_verdict(&self, feature: &Feature, scenario: &Scenario) -> Verdict {
        Verdict::merge(
            self.runs
                .iter()
                .map(|run| run.scenario_verdict(feature, scenario)),
        )
    }

    fn scenario_outline_verdict(&self, feature: &Feature, outline: &ScenarioOutline) -> Verdict {
        Verdict::merge(
            self.runs
                .iter()
                .map(|run| run.scenario_outline_verdict(feature, outline)),
        )
    }

    fn example_verdict(
        &self,
        feature: &Feature,
        outline: &ScenarioOutline,
        row: &[String],
    ) -> Verdict {
        Verdict::merge(
            self.runs
                .iter()
                .map(|run| run.example_verdict(feature, outline, row)),
        )
    }
}

/// Loads one result file under the given format tag. Malformed files fail
/// fast with the offending path in the error chain.
///
/// 在给定格式标签下加载一个结果文件。
/// 格式错误的文件立即失败，错误链中带有出错的路径。
pub fn load_single(format: RunnerFormat, path: &Path) -> Result<SingleRunResults> {
    let content = read_file(path)?;
    let results = match format {
        RunnerFormat::XUnit => SingleRunResults::XUnit(xunit::parse(&content)?),
        RunnerFormat::NUnit2 => SingleRunResults::NUnit(nunit::parse_nunit2(&content)?),
        RunnerFormat::NUnit3 => SingleRunResults::NUnit(nunit::parse_nunit3(&content)?),
        RunnerFormat::Trx => SingleRunResults::Trx(trx::parse(&content)?),
    };
    Ok(results)
}

/// Loads every configured result file in parallel and wraps them into a
/// composite, preserving configured order. Any load failure aborts the
/// composite: a corrupt file is never masked behind the merge rule.
///
/// 并行加载每个已配置的结果文件并将它们包装为组合结果，保留配置顺序。
/// 任何加载失败都会中止组合：损坏的文件绝不会被合并法则掩盖。
pub async fn load_composite(format: RunnerFormat, files: &[PathBuf]) -> Result<CompositeResults> {
    let handles = files.iter().cloned().map(|path| {
        tokio::task::spawn_blocking(move || {
            load_single(format, &path).with_context(|| {
                format!(
                    "failed to load {} results file {}",
                    format,
                    path.display()
                )
            })
        })
    });

    let outcomes = try_join_all(handles)
        .await
        .context("a result loading task panicked")?;
    let runs = outcomes.into_iter().collect::<Result<Vec<_>>>()?;
    Ok(CompositeResults::new(runs))
}
