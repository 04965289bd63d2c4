/// 信号模拟模块
///
/// 该模块提供指纹定位所需的合成数据源，支持：
/// - 对数距离路径损耗模型（可配置参数）
/// - 高斯测量噪声（可注入的随机源）
/// - 按发射器类别的距离抽样和指纹生成

pub mod emitter;
pub mod generator;
pub mod signal_model;

pub use emitter::*;
pub use generator::*;
pub use signal_model::*;
