/// 无线指纹室内定位模拟库
///
/// 该库提供完整的合成指纹定位流水线，支持：
/// - 对数距离路径损耗 + 高斯噪声的信号模拟
/// - 按位置构建的指纹样本数据库（固定种子可复现）
/// - k 近邻匹配 + 多数投票的位置估计（平局规则确定）
/// - 可注入的随机源（无全局可变状态）

pub mod config;
pub mod error;
pub mod localization;
pub mod simulation;

pub use error::LocalizationError;
