/// 部署配置
///
/// 一次部署的全部可配置项：发射器名单（按类别）、位置坐标表、噪声
/// 标准差、每位置采样数和邻域大小 k。位置坐标仅为将来可能的距离感知
/// 模拟保留，匹配算法本身不使用。

use serde::{Deserialize, Serialize};

use crate::error::LocalizationError;
use crate::localization::estimator::LocationEstimator;
use crate::localization::location::{Location, LocationSet};
use crate::simulation::emitter::{Emitter, EmitterSet};
use crate::simulation::generator::FingerprintGenerator;
use crate::simulation::signal_model::SignalModel;

/// 单个位置的配置项
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LocationConfig {
    /// 位置名称
    pub name: String,
    /// X 参考坐标
    pub x: f64,
    /// Y 参考坐标
    pub y: f64,
}

impl LocationConfig {
    /// 创建新的位置配置
    pub fn new(name: impl Into<String>, x: f64, y: f64) -> Self {
        LocationConfig {
            name: name.into(),
            x,
            y,
        }
    }
}

/// 部署配置
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DeploymentConfig {
    /// Wi-Fi 接入点名单（长距离类别，排在规范顺序前段）
    pub wifi_emitters: Vec<String>,
    /// BLE 信标名单（短距离类别，排在规范顺序后段）
    pub ble_emitters: Vec<String>,
    /// 位置坐标表
    pub locations: Vec<LocationConfig>,
    /// 测量噪声标准差（强度单位）
    pub noise_sigma: f64,
    /// 每个位置的采样数
    pub samples_per_location: usize,
    /// 邻域大小 k
    pub neighborhood_size: usize,
}

impl DeploymentConfig {
    /// 验证配置的完整性
    ///
    /// 检查项：发射器和位置集合非空、位置名称唯一、噪声参数合法、
    /// 采样数 >= 1、k 在 1..=样本总数 范围内。
    pub fn validate(&self) -> Result<(), LocalizationError> {
        if self.wifi_emitters.is_empty() && self.ble_emitters.is_empty() {
            return Err(LocalizationError::EmptyEmitters);
        }
        if self.locations.is_empty() {
            return Err(LocalizationError::EmptyLocations);
        }
        // 名称唯一性检查
        self.location_set()?;
        self.signal_model().validate()?;

        if self.samples_per_location == 0 {
            return Err(LocalizationError::InvalidSampleCount {
                count: self.samples_per_location,
            });
        }

        let total_samples = self.locations.len() * self.samples_per_location;
        if self.neighborhood_size == 0 || self.neighborhood_size > total_samples {
            return Err(LocalizationError::InvalidNeighborhoodSize {
                k: self.neighborhood_size,
                samples: total_samples,
            });
        }

        Ok(())
    }

    /// 构建发射器集合（规范顺序：Wi-Fi 名单在前，BLE 名单在后）
    pub fn emitter_set(&self) -> EmitterSet {
        let mut set = EmitterSet::new();
        for id in &self.wifi_emitters {
            set.add_emitter(Emitter::wifi(id.clone()));
        }
        for id in &self.ble_emitters {
            set.add_emitter(Emitter::ble(id.clone()));
        }
        set
    }

    /// 构建位置集合，名称重复时返回错误
    pub fn location_set(&self) -> Result<LocationSet, LocalizationError> {
        LocationSet::from_vec(
            self.locations
                .iter()
                .map(|l| Location::new(l.name.clone(), l.x, l.y))
                .collect(),
        )
    }

    /// 构建信号模型（默认路径损耗参数 + 配置的噪声标准差）
    pub fn signal_model(&self) -> SignalModel {
        SignalModel::default().with_noise_sigma(self.noise_sigma)
    }

    /// 构建指纹生成器
    pub fn generator(&self) -> FingerprintGenerator {
        FingerprintGenerator::new(self.emitter_set(), self.signal_model())
    }

    /// 构建位置估计器
    pub fn estimator(&self) -> LocationEstimator {
        LocationEstimator::new(self.neighborhood_size)
    }
}

impl Default for DeploymentConfig {
    /// 参考部署：3 个 Wi-Fi 接入点、2 个 BLE 信标、4 个房间
    fn default() -> Self {
        DeploymentConfig {
            wifi_emitters: vec![
                "wifi_1".to_string(),
                "wifi_2".to_string(),
                "wifi_3".to_string(),
            ],
            ble_emitters: vec!["ble_1".to_string(), "ble_2".to_string()],
            locations: vec![
                LocationConfig::new("Room_A", 0.0, 0.0),
                LocationConfig::new("Room_B", 5.0, 0.0),
                LocationConfig::new("Room_C", 0.0, 5.0),
                LocationConfig::new("Room_D", 5.0, 5.0),
            ],
            noise_sigma: 2.0,
            samples_per_location: 30,
            neighborhood_size: 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_valid() {
        let config = DeploymentConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.emitter_set().len(), 5);
        assert_eq!(config.location_set().unwrap().len(), 4);
        assert_eq!(config.estimator().k(), 3);
    }

    #[test]
    fn test_emitter_set_canonical_order() {
        let config = DeploymentConfig::default();
        assert_eq!(
            config.emitter_set().ids(),
            vec!["wifi_1", "wifi_2", "wifi_3", "ble_1", "ble_2"]
        );
    }

    #[test]
    fn test_validate_rejects_empty_emitters() {
        let config = DeploymentConfig {
            wifi_emitters: vec![],
            ble_emitters: vec![],
            ..DeploymentConfig::default()
        };
        assert_eq!(config.validate(), Err(LocalizationError::EmptyEmitters));
    }

    #[test]
    fn test_validate_rejects_duplicate_location() {
        let mut config = DeploymentConfig::default();
        config.locations.push(LocationConfig::new("Room_A", 9.0, 9.0));
        assert_eq!(
            config.validate(),
            Err(LocalizationError::DuplicateLocation {
                name: "Room_A".to_string()
            })
        );
    }

    #[test]
    fn test_validate_rejects_bad_k() {
        let config = DeploymentConfig {
            neighborhood_size: 0,
            ..DeploymentConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(LocalizationError::InvalidNeighborhoodSize { k: 0, .. })
        ));

        let config = DeploymentConfig {
            samples_per_location: 1,
            neighborhood_size: 5,
            ..DeploymentConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(LocalizationError::InvalidNeighborhoodSize { k: 5, samples: 4 })
        ));
    }

    #[test]
    fn test_config_serde_round_trip() {
        let config = DeploymentConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: DeploymentConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }
}
