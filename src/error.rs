/// 定位系统错误类型
///
/// 所有错误都在检测到的调用处同步抛出，属于配置/编程错误，不做重试。

/// 定位系统统一错误类型
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LocalizationError {
    /// 发射器集合为空（指纹维度为 0，无法生成指纹）
    #[error("emitter set is empty")]
    EmptyEmitters,

    /// 位置集合为空（无法构建指纹数据库）
    #[error("location set is empty")]
    EmptyLocations,

    /// 位置名称重复（位置名必须唯一）
    #[error("duplicate location name: {name}")]
    DuplicateLocation {
        /// 重复的位置名称
        name: String,
    },

    /// 每个位置的采样数无效（必须 >= 1）
    #[error("samples per location must be >= 1, got {count}")]
    InvalidSampleCount {
        /// 无效的采样数
        count: usize,
    },

    /// 噪声标准差无效（必须有限且非负）
    #[error("noise sigma must be finite and non-negative, got {sigma}")]
    InvalidNoiseSigma {
        /// 无效的标准差
        sigma: f64,
    },

    /// 距离下限无效（必须有限且为正，用于 log10 的零距离保护）
    #[error("distance clamp floor must be finite and positive, got {floor}")]
    InvalidClampFloor {
        /// 无效的距离下限
        floor: f64,
    },

    /// 邻域大小 k 无效（必须满足 1 <= k <= 样本总数）
    #[error("neighborhood size must be in 1..={samples}, got {k}")]
    InvalidNeighborhoodSize {
        /// 无效的 k 值
        k: usize,
        /// 数据库样本总数
        samples: usize,
    },

    /// 查询指纹维度与数据库指纹维度不一致
    #[error("query dimension {query} does not match database dimension {expected}")]
    DimensionMismatch {
        /// 查询指纹的维度
        query: usize,
        /// 数据库指纹的维度
        expected: usize,
    },

    /// 手工样本集中出现维度不一致的指纹
    #[error("sample dimension {got} does not match database dimension {expected}")]
    InconsistentSampleDimension {
        /// 不一致样本的维度
        got: usize,
        /// 数据库指纹的维度
        expected: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_messages() {
        assert_eq!(
            LocalizationError::EmptyLocations.to_string(),
            "location set is empty"
        );
        assert_eq!(
            LocalizationError::InvalidSampleCount { count: 0 }.to_string(),
            "samples per location must be >= 1, got 0"
        );
        assert_eq!(
            LocalizationError::InvalidNeighborhoodSize { k: 0, samples: 120 }.to_string(),
            "neighborhood size must be in 1..=120, got 0"
        );
        assert_eq!(
            LocalizationError::DimensionMismatch {
                query: 3,
                expected: 5
            }
            .to_string(),
            "query dimension 3 does not match database dimension 5"
        );
    }

    #[test]
    fn test_error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<LocalizationError>();
    }

    #[test]
    fn test_error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<LocalizationError>();
    }
}
