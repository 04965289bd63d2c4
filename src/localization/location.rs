/// 位置定义和相关数据结构
///
/// 位置名称唯一，参考坐标定义后不可变。坐标只用于参数化模拟场景，
/// 匹配阶段不参与计算。

use serde::{Deserialize, Serialize};

use crate::error::LocalizationError;

/// 单个命名位置
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// 位置名称（唯一）
    pub name: String,
    /// X 参考坐标
    pub x: f64,
    /// Y 参考坐标
    pub y: f64,
}

impl Location {
    /// 创建新的位置
    pub fn new(name: impl Into<String>, x: f64, y: f64) -> Self {
        Location {
            name: name.into(),
            x,
            y,
        }
    }

    /// 获取位置的 2D 参考坐标
    pub fn coordinates(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    /// 计算与另一位置的欧几里得距离
    pub fn distance_to(&self, other: &Location) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// 位置集合 - 保持插入顺序，位置名称唯一
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LocationSet {
    /// 按插入顺序排列的位置
    locations: Vec<Location>,
}

impl LocationSet {
    /// 创建空的位置集合
    pub fn new() -> Self {
        LocationSet {
            locations: Vec::new(),
        }
    }

    /// 从位置向量创建集合，名称重复时返回错误
    pub fn from_vec(locations: Vec<Location>) -> Result<Self, LocalizationError> {
        let mut set = LocationSet::new();
        for location in locations {
            set.add_location(location)?;
        }
        Ok(set)
    }

    /// 添加位置，名称重复时返回错误
    pub fn add_location(&mut self, location: Location) -> Result<(), LocalizationError> {
        if self.get(&location.name).is_some() {
            return Err(LocalizationError::DuplicateLocation {
                name: location.name,
            });
        }
        self.locations.push(location);
        Ok(())
    }

    /// 按名称获取位置
    pub fn get(&self, name: &str) -> Option<&Location> {
        self.locations.iter().find(|l| l.name == name)
    }

    /// 位置数量
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    /// 是否为空
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// 按插入顺序迭代位置
    pub fn iter(&self) -> impl Iterator<Item = &Location> {
        self.locations.iter()
    }

    /// 按插入顺序获取所有位置名称
    pub fn names(&self) -> Vec<&str> {
        self.locations.iter().map(|l| l.name.as_str()).collect()
    }
}
