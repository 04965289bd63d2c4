/// 信号传播模型 - 距离到信号强度的转换
///
/// 基于对数距离路径损耗公式计算期望强度，并叠加高斯测量噪声。
/// 模型本身无状态，随机源由调用方注入。

use std::fmt;

use rand::Rng;
use rand_distr::StandardNormal;

use crate::error::LocalizationError;

/// 默认参考强度 A（单位距离处，dBm）
pub const DEFAULT_REFERENCE_STRENGTH: f64 = -30.0;
/// 默认路径损耗指数 n
pub const DEFAULT_PATH_LOSS_EXPONENT: f64 = 2.0;
/// 默认噪声标准差（强度单位）
pub const DEFAULT_NOISE_SIGMA: f64 = 2.0;
/// 默认距离下限 - 零距离在 log10 下无定义，计算前夹到该下限
pub const DEFAULT_MIN_DISTANCE: f64 = 0.1;

/// 信号传播模型
///
/// 公式: strength(d) = A - 10 * n * log10(max(d, min_distance))
#[derive(Clone, Debug)]
pub struct SignalModel {
    /// 参考强度 A（单位距离处，dBm）
    pub a: f64,
    /// 路径损耗指数 n
    pub n: f64,
    /// 高斯噪声标准差（0 表示关闭噪声）
    pub noise_sigma: f64,
    /// 距离下限（零距离保护）
    pub min_distance: f64,
}

impl SignalModel {
    /// 创建对数距离路径损耗模型
    ///
    /// # 参数
    /// - `a`: 参考强度 (dBm)
    /// - `n`: 路径损耗指数
    pub fn log_distance(a: f64, n: f64) -> Self {
        SignalModel {
            a,
            n,
            noise_sigma: DEFAULT_NOISE_SIGMA,
            min_distance: DEFAULT_MIN_DISTANCE,
        }
    }

    /// 创建自由空间模型（n = 2）
    pub fn free_space(a: f64) -> Self {
        Self::log_distance(a, 2.0)
    }

    /// 设置噪声标准差
    pub fn with_noise_sigma(mut self, sigma: f64) -> Self {
        self.noise_sigma = sigma;
        self
    }

    /// 设置距离下限
    pub fn with_min_distance(mut self, floor: f64) -> Self {
        self.min_distance = floor;
        self
    }

    /// 根据距离计算期望信号强度（确定性，不含噪声）
    ///
    /// 距离小于下限时先夹到下限，因此任何输入都不会出错。
    pub fn expected_strength(&self, distance: f64) -> f64 {
        let clamped = distance.max(self.min_distance);
        self.a - 10.0 * self.n * clamped.log10()
    }

    /// 模拟一次带噪声的信号读数
    ///
    /// 返回 expected_strength(distance) + sigma * z，z 为标准正态抽样。
    /// 每次调用恰好消耗随机源的一次抽样，sigma = 0 时结果确定，
    /// 但随机流位置与带噪声配置保持一致。
    pub fn simulate(&self, distance: f64, rng: &mut impl Rng) -> f64 {
        let z: f64 = rng.sample(StandardNormal);
        self.expected_strength(distance) + self.noise_sigma * z
    }

    /// 验证模型参数的合理性
    pub fn validate(&self) -> Result<(), LocalizationError> {
        if !self.noise_sigma.is_finite() || self.noise_sigma < 0.0 {
            return Err(LocalizationError::InvalidNoiseSigma {
                sigma: self.noise_sigma,
            });
        }
        if !self.min_distance.is_finite() || self.min_distance <= 0.0 {
            return Err(LocalizationError::InvalidClampFloor {
                floor: self.min_distance,
            });
        }
        Ok(())
    }

    /// 获取模型描述
    pub fn description(&self) -> String {
        format!(
            "信号模型 - A={:.2} dBm, n={:.2}, sigma={:.2}, 距离下限={:.2}",
            self.a, self.n, self.noise_sigma, self.min_distance
        )
    }
}

impl Default for SignalModel {
    fn default() -> Self {
        SignalModel {
            a: DEFAULT_REFERENCE_STRENGTH,
            n: DEFAULT_PATH_LOSS_EXPONENT,
            noise_sigma: DEFAULT_NOISE_SIGMA,
            min_distance: DEFAULT_MIN_DISTANCE,
        }
    }
}

impl fmt::Display for SignalModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}
