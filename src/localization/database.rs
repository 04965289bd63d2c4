/// 指纹数据库 - 带位置标签的指纹样本集合
///
/// 构建阶段按位置迭代顺序依次生成样本（固定种子下完全可复现），
/// 构建完成后只读，不支持追加写入。

use std::collections::HashMap;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::LocalizationError;
use crate::localization::location::LocationSet;
use crate::simulation::generator::{Fingerprint, FingerprintGenerator};

/// 指纹样本 - (指纹, 位置标签) 对
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FingerprintSample {
    /// 指纹向量
    pub fingerprint: Fingerprint,
    /// 位置标签
    pub label: String,
}

impl FingerprintSample {
    /// 创建新的样本
    pub fn new(fingerprint: Fingerprint, label: impl Into<String>) -> Self {
        FingerprintSample {
            fingerprint,
            label: label.into(),
        }
    }
}

/// 指纹数据库
#[derive(Clone, Debug)]
pub struct FingerprintDatabase {
    /// 按插入顺序排列的样本
    samples: Vec<FingerprintSample>,
    /// 指纹维度
    dimension: usize,
    /// 每个位置标签的样本数
    label_counts: HashMap<String, usize>,
}

impl FingerprintDatabase {
    /// 构建指纹数据库
    ///
    /// 对集合中的每个位置调用生成器 `samples_per_location` 次，
    /// 样本总数为 |locations| * samples_per_location。
    ///
    /// # 错误
    /// - `EmptyLocations`: 位置集合为空
    /// - `InvalidSampleCount`: 采样数为 0
    pub fn build(
        locations: &LocationSet,
        generator: &FingerprintGenerator,
        samples_per_location: usize,
        rng: &mut impl Rng,
    ) -> Result<Self, LocalizationError> {
        if locations.is_empty() {
            return Err(LocalizationError::EmptyLocations);
        }
        if samples_per_location == 0 {
            return Err(LocalizationError::InvalidSampleCount {
                count: samples_per_location,
            });
        }

        let mut samples = Vec::with_capacity(locations.len() * samples_per_location);
        let mut label_counts = HashMap::new();

        for location in locations.iter() {
            for _ in 0..samples_per_location {
                samples.push(FingerprintSample::new(
                    generator.generate(rng),
                    location.name.clone(),
                ));
            }
            label_counts.insert(location.name.clone(), samples_per_location);
        }

        tracing::debug!(
            locations = locations.len(),
            samples_per_location,
            total = samples.len(),
            "指纹数据库构建完成"
        );

        Ok(FingerprintDatabase {
            samples,
            dimension: generator.dimension(),
            label_counts,
        })
    }

    /// 从现成的样本向量直接创建数据库
    ///
    /// 用于手工构造的场景（测试、外部生成的样本集）。样本为空或
    /// 维度不一致时返回错误。
    pub fn from_samples(samples: Vec<FingerprintSample>) -> Result<Self, LocalizationError> {
        let Some(first) = samples.first() else {
            return Err(LocalizationError::EmptyLocations);
        };
        let dimension = first.fingerprint.len();

        let mut label_counts = HashMap::new();
        for sample in &samples {
            if sample.fingerprint.len() != dimension {
                return Err(LocalizationError::InconsistentSampleDimension {
                    got: sample.fingerprint.len(),
                    expected: dimension,
                });
            }
            *label_counts.entry(sample.label.clone()).or_insert(0) += 1;
        }

        Ok(FingerprintDatabase {
            samples,
            dimension,
            label_counts,
        })
    }

    /// 样本总数
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// 是否为空
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// 指纹维度
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// 按插入顺序获取所有样本
    pub fn samples(&self) -> &[FingerprintSample] {
        &self.samples
    }

    /// 按插入顺序索引获取样本
    pub fn get(&self, index: usize) -> Option<&FingerprintSample> {
        self.samples.get(index)
    }

    /// 按插入顺序迭代样本
    pub fn iter(&self) -> impl Iterator<Item = &FingerprintSample> {
        self.samples.iter()
    }

    /// 某位置标签的样本数
    pub fn count_for(&self, label: &str) -> usize {
        self.label_counts.get(label).copied().unwrap_or(0)
    }

    /// 按首次出现顺序获取所有不同的位置标签
    pub fn labels(&self) -> Vec<&str> {
        let mut labels: Vec<&str> = Vec::new();
        for sample in &self.samples {
            if !labels.contains(&sample.label.as_str()) {
                labels.push(sample.label.as_str());
            }
        }
        labels
    }
}
