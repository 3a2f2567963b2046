//! 配置文件的定义
//!
//! 配置文件采用 YAML 格式，所有字段都可以省略，省略时使用默认值：
//!
//!```yaml
//!grid:
//!  rows: 1
//!  columns: 50
//!climbing:
//!  generations: 5000
//!  perturbation_rate: 0.05
//!  report_interval: 1000
//!trials: 5
//!seed: 42
//!```

use crate::optimizers::hill_climbing::HillClimbing;
use crate::Error;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

pub const DEFAULT_TRIALS: usize = 5;

/// 解的尺寸
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridConfig {
    pub rows: usize,
    pub columns: usize,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            rows: 1,
            columns: 50,
        }
    }
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub grid: GridConfig,
    #[serde(default)]
    pub climbing: HillClimbing,
    /// 独立试验的次数，默认为 5
    pub trials: Option<usize>,
    /// 随机数种子，不提供时从操作系统获取熵
    pub seed: Option<u64>,
}

impl Config {
    pub fn from_yaml(content: &str) -> Result<Self, Error> {
        let config: Config = serde_yaml::from_str(content)?;
        Ok(config)
    }

    pub fn to_yaml(&self) -> Result<String, Error> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn trials(&self) -> usize {
        self.trials.unwrap_or(DEFAULT_TRIALS)
    }

    /// 第 index 次试验使用的随机数生成器
    ///
    /// 各次试验的生成器互不相关；提供了种子时，第 index 次试验使用种子加上 index 的结果。
    pub fn rng(&self, index: usize) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(index as u64)),
            None => StdRng::from_os_rng(),
        }
    }
}
