/// 指纹生成器 - 为每个发射器模拟一次带噪声的信号读数
///
/// 对规范顺序中的每个发射器，从其类别的合理距离范围内均匀抽取一个
/// 距离，再交给信号模型模拟读数。距离抽样与位置的真实坐标无关，
/// 同一位置的多个样本是同分布的独立抽样。

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::simulation::emitter::EmitterSet;
use crate::simulation::signal_model::SignalModel;

/// 指纹 - 按规范顺序排列的信号强度读数向量
///
/// 每个发射器恰好对应一个分量，生成后不可变。
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Fingerprint {
    /// 按规范顺序排列的读数
    readings: Vec<f64>,
}

impl Fingerprint {
    /// 从读数向量创建指纹
    pub fn from_readings(readings: Vec<f64>) -> Self {
        Fingerprint { readings }
    }

    /// 按规范顺序获取所有读数
    pub fn readings(&self) -> &[f64] {
        &self.readings
    }

    /// 指纹维度（分量数）
    pub fn len(&self) -> usize {
        self.readings.len()
    }

    /// 是否为空
    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    /// 与另一指纹的平方欧氏距离（逐分量差值平方求和，不加权）
    ///
    /// 两指纹维度必须一致，由调用方保证。
    pub fn squared_distance_to(&self, other: &Fingerprint) -> f64 {
        self.readings
            .iter()
            .zip(other.readings.iter())
            .map(|(a, b)| (a - b) * (a - b))
            .sum()
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let formatted: Vec<String> = self.readings.iter().map(|r| format!("{r:.1}")).collect();
        write!(f, "[{}]", formatted.join(", "))
    }
}

/// 指纹生成器
pub struct FingerprintGenerator {
    /// 发射器集合（决定指纹维度和规范顺序）
    emitters: EmitterSet,
    /// 信号传播模型
    model: SignalModel,
}

impl FingerprintGenerator {
    /// 创建新的指纹生成器
    pub fn new(emitters: EmitterSet, model: SignalModel) -> Self {
        FingerprintGenerator { emitters, model }
    }

    /// 生成一个指纹
    ///
    /// 每个发射器按其类别范围均匀抽取距离后模拟读数，
    /// 总是返回满长度向量，无失败路径。
    pub fn generate(&self, rng: &mut impl Rng) -> Fingerprint {
        let mut readings = Vec::with_capacity(self.emitters.len());
        for emitter in self.emitters.iter() {
            let (lo, hi) = emitter.distance_range();
            let distance = rng.gen_range(lo..=hi);
            readings.push(self.model.simulate(distance, rng));
        }
        Fingerprint::from_readings(readings)
    }

    /// 在固定距离处生成一个指纹
    ///
    /// 所有发射器都按同一距离模拟，用于构造已知距离的测试场景。
    pub fn generate_at(&self, distance: f64, rng: &mut impl Rng) -> Fingerprint {
        let mut readings = Vec::with_capacity(self.emitters.len());
        for _ in self.emitters.iter() {
            readings.push(self.model.simulate(distance, rng));
        }
        Fingerprint::from_readings(readings)
    }

    /// 指纹维度（发射器数量）
    pub fn dimension(&self) -> usize {
        self.emitters.len()
    }

    /// 获取发射器集合
    pub fn emitters(&self) -> &EmitterSet {
        &self.emitters
    }

    /// 获取信号模型
    pub fn model(&self) -> &SignalModel {
        &self.model
    }
}
