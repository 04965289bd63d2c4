/// 模拟信号发射器定义和相关数据结构
///
/// 发射器集合在部署期间固定不变，其插入顺序即指纹向量的规范顺序，
/// 同时决定指纹向量的维度。

use serde::{Deserialize, Serialize};

/// 发射器类别 - 决定采样时的合理距离范围
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmitterKind {
    /// Wi-Fi 接入点（长距离）
    WiFi,
    /// BLE 信标（短距离）
    Ble,
}

impl EmitterKind {
    /// 该类别发射器的合理距离范围（单位：距离单位）
    ///
    /// 范围是固定配置，与位置坐标无关：
    /// - Wi-Fi: [1.0, 10.0]
    /// - BLE:   [0.5, 6.0]
    pub fn distance_range(&self) -> (f64, f64) {
        match self {
            EmitterKind::WiFi => (1.0, 10.0),
            EmitterKind::Ble => (0.5, 6.0),
        }
    }
}

/// 单个模拟信号发射器
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Emitter {
    /// 发射器唯一标识符
    pub id: String,
    /// 发射器类别
    pub kind: EmitterKind,
}

impl Emitter {
    /// 创建新的发射器
    pub fn new(id: impl Into<String>, kind: EmitterKind) -> Self {
        Emitter {
            id: id.into(),
            kind,
        }
    }

    /// 创建 Wi-Fi 接入点
    pub fn wifi(id: impl Into<String>) -> Self {
        Self::new(id, EmitterKind::WiFi)
    }

    /// 创建 BLE 信标
    pub fn ble(id: impl Into<String>) -> Self {
        Self::new(id, EmitterKind::Ble)
    }

    /// 该发射器的合理距离范围
    pub fn distance_range(&self) -> (f64, f64) {
        self.kind.distance_range()
    }
}

/// 发射器集合 - 保持插入顺序（即指纹的规范顺序）
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EmitterSet {
    /// 按规范顺序排列的发射器
    emitters: Vec<Emitter>,
}

impl EmitterSet {
    /// 创建空的发射器集合
    pub fn new() -> Self {
        EmitterSet {
            emitters: Vec::new(),
        }
    }

    /// 从发射器向量创建集合
    pub fn from_vec(emitters: Vec<Emitter>) -> Self {
        EmitterSet { emitters }
    }

    /// 添加发射器（追加到规范顺序末尾）
    pub fn add_emitter(&mut self, emitter: Emitter) {
        self.emitters.push(emitter);
    }

    /// 按规范顺序索引获取发射器
    pub fn get(&self, index: usize) -> Option<&Emitter> {
        self.emitters.get(index)
    }

    /// 发射器数量（即指纹向量维度）
    pub fn len(&self) -> usize {
        self.emitters.len()
    }

    /// 是否为空
    pub fn is_empty(&self) -> bool {
        self.emitters.is_empty()
    }

    /// 按规范顺序迭代发射器
    pub fn iter(&self) -> impl Iterator<Item = &Emitter> {
        self.emitters.iter()
    }

    /// 按规范顺序获取所有发射器 ID
    pub fn ids(&self) -> Vec<&str> {
        self.emitters.iter().map(|e| e.id.as_str()).collect()
    }
}
