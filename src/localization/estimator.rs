/// k 近邻位置估计器
///
/// 对查询指纹与库内每个样本计算平方欧氏距离，取最近的 k 个样本做
/// 多数投票。所有平局规则都是确定性的：
/// - 距离相同的样本，数据库插入顺序靠前者优先；
/// - 票数相同的标签，其候选样本中距离最小者获胜；
/// - 最小距离也相同时，插入顺序靠前者获胜。

use crate::error::LocalizationError;
use crate::localization::database::FingerprintDatabase;
use crate::localization::results::PredictionResult;
use crate::simulation::generator::Fingerprint;

/// 单个标签的得票统计
struct LabelTally<'a> {
    /// 位置标签
    label: &'a str,
    /// 近邻中该标签的票数
    votes: usize,
    /// 该标签候选样本中的最小平方距离
    best_sq: f64,
}

/// k 近邻位置估计器
#[derive(Clone, Copy, Debug)]
pub struct LocationEstimator {
    /// 邻域大小 k
    k: usize,
}

impl LocationEstimator {
    /// 创建邻域大小为 k 的估计器
    pub fn new(k: usize) -> Self {
        LocationEstimator { k }
    }

    /// 获取邻域大小
    pub fn k(&self) -> usize {
        self.k
    }

    /// 预测查询指纹对应的位置
    ///
    /// # 错误
    /// - `DimensionMismatch`: 查询维度与数据库维度不一致
    /// - `InvalidNeighborhoodSize`: k < 1 或 k > 样本总数
    ///
    /// 预测阶段不消耗随机源，固定数据库、查询和 k 时结果完全确定。
    pub fn predict(
        &self,
        database: &FingerprintDatabase,
        query: &Fingerprint,
    ) -> Result<PredictionResult, LocalizationError> {
        if query.len() != database.dimension() {
            return Err(LocalizationError::DimensionMismatch {
                query: query.len(),
                expected: database.dimension(),
            });
        }

        let samples = database.len();
        if self.k == 0 || self.k > samples {
            return Err(LocalizationError::InvalidNeighborhoodSize {
                k: self.k,
                samples,
            });
        }

        // (平方距离, 插入序号) 全排序，距离相同时序号小者在前
        let mut pairs: Vec<(f64, usize)> = database
            .iter()
            .enumerate()
            .map(|(index, sample)| (query.squared_distance_to(&sample.fingerprint), index))
            .collect();
        pairs.sort_unstable_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)));
        let neighbors = &pairs[..self.k];

        // 按距离升序统计得票，每个标签首次出现即其最近候选
        let stored = database.samples();
        let mut tallies: Vec<LabelTally<'_>> = Vec::new();
        for &(d2, index) in neighbors {
            let label = stored[index].label.as_str();
            match tallies.iter_mut().find(|t| t.label == label) {
                Some(tally) => tally.votes += 1,
                None => tallies.push(LabelTally {
                    label,
                    votes: 1,
                    best_sq: d2,
                }),
            }
        }

        // tallies 按各标签最近候选的 (距离, 序号) 升序排列：
        // 仅在票数严格更多时更换获胜者，票数平局自然落到最近者
        let mut winner = &tallies[0];
        for tally in &tallies[1..] {
            if tally.votes > winner.votes {
                winner = tally;
            }
        }

        tracing::trace!(
            label = winner.label,
            votes = winner.votes,
            k = self.k,
            "完成一次位置预测"
        );

        Ok(PredictionResult::new(
            winner.label,
            winner.votes,
            self.k,
            winner.best_sq.sqrt(),
        ))
    }
}
