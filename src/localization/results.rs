/// 预测结果数据结构
///
/// 包含单次预测的标签、得票情况和元数据，以及用于时间序列平滑的
/// 预测结果序列。

use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;

/// 单次位置预测结果
#[derive(Clone, Debug, Serialize)]
pub struct PredictionResult {
    /// 预测的位置标签
    pub label: String,
    /// 近邻中该标签的得票数
    pub votes: usize,
    /// 本次预测使用的邻域大小 k
    pub k: usize,
    /// 预测置信度 (0.0 ~ 1.0)，即得票数占 k 的比例
    pub confidence: f64,
    /// 获胜标签最近候选样本的欧氏距离
    pub nearest_distance: f64,
    /// 时间戳
    pub timestamp: DateTime<Utc>,
}

impl PredictionResult {
    /// 创建新的预测结果
    pub fn new(label: impl Into<String>, votes: usize, k: usize, nearest_distance: f64) -> Self {
        let confidence = if k == 0 {
            0.0
        } else {
            (votes as f64 / k as f64).clamp(0.0, 1.0)
        };
        PredictionResult {
            label: label.into(),
            votes,
            k,
            confidence,
            nearest_distance,
            timestamp: Utc::now(),
        }
    }

    /// 是否是高置信度结果（得票过半）
    pub fn is_confident(&self) -> bool {
        self.confidence > 0.5
    }

    /// 获取详细描述
    pub fn detailed_description(&self) -> String {
        format!(
            "位置: {}, 置信度: {:.1}% ({}/{}), 最近距离: {:.2}",
            self.label,
            self.confidence * 100.0,
            self.votes,
            self.k,
            self.nearest_distance
        )
    }
}

impl fmt::Display for PredictionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{:.1}%]", self.label, self.confidence * 100.0)
    }
}

/// 预测结果序列（用于时间序列平滑）
#[derive(Clone, Debug, Default)]
pub struct PredictionSequence {
    /// 结果列表
    results: Vec<PredictionResult>,
}

impl PredictionSequence {
    /// 创建空序列
    pub fn new() -> Self {
        PredictionSequence {
            results: Vec::new(),
        }
    }

    /// 添加结果
    pub fn push(&mut self, result: PredictionResult) {
        self.results.push(result);
    }

    /// 获取最后一个结果
    pub fn last(&self) -> Option<&PredictionResult> {
        self.results.last()
    }

    /// 获取所有结果
    pub fn all(&self) -> &[PredictionResult] {
        &self.results
    }

    /// 结果数量
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// 是否为空
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// 序列中出现次数最多的标签（次数相同时取最近出现者）
    pub fn majority_label(&self) -> Option<&str> {
        self.majority_over(&self.results)
    }

    /// 最近 N 个结果中出现次数最多的标签
    pub fn majority_last_n(&self, n: usize) -> Option<&str> {
        let start = self.results.len().saturating_sub(n);
        self.majority_over(&self.results[start..])
    }

    fn majority_over<'a>(&self, results: &'a [PredictionResult]) -> Option<&'a str> {
        // (标签, 出现次数, 最近出现序号)
        let mut counts: Vec<(&str, usize, usize)> = Vec::new();
        for (index, result) in results.iter().enumerate() {
            match counts.iter_mut().find(|(label, _, _)| *label == result.label) {
                Some(entry) => {
                    entry.1 += 1;
                    entry.2 = index;
                }
                None => counts.push((result.label.as_str(), 1, index)),
            }
        }
        counts
            .iter()
            .max_by_key(|(_, count, last_seen)| (*count, *last_seen))
            .map(|(label, _, _)| *label)
    }

    /// 清空序列
    pub fn clear(&mut self) {
        self.results.clear();
    }
}
