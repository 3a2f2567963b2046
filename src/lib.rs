//! libclimb 是使用 Rust 实现的爬山算法演示库：反复随机扰动一个候选解，只有当扰动后的解适应度严格更高时才接受它。
//!
//! climb 是使用 libclimb 实现的命令行程序，用户提供网格尺寸和算法参数，本程序输出每一代最优解的适应度轨迹或基因矩阵，供外部工具绘图。
//!
//! 所有随机操作都显式接收一个随机数生成器，因此在给定种子时整个运行过程是可复现的。

pub mod config;
pub mod interfaces;
pub mod objectives;
pub mod operators;
pub mod optimizers;
pub mod solution;

use std::convert::Infallible;
use std::fmt::{self, Display};

pub use objectives::{Fitness, Mean};
pub use operators::{create, perturb};
pub use optimizers::hill_climbing::{climb, Climb, HillClimbing};
pub use solution::{Solution, TraceEntry};

/// 错误类型
///
/// 只用于报告前置条件不满足、配置或输出失败等情况；适应度函数自身的错误原样返回给调用者，不经过这个类型。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    pub message: String,
}

impl From<String> for Error {
    fn from(value: String) -> Self {
        Self { message: value }
    }
}

impl From<&str> for Error {
    fn from(value: &str) -> Self {
        Self {
            message: value.to_string(),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(value: std::io::Error) -> Self {
        Self {
            message: value.to_string(),
        }
    }
}

impl From<csv::Error> for Error {
    fn from(value: csv::Error) -> Self {
        Self {
            message: value.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(value: serde_yaml::Error) -> Self {
        Self {
            message: format!("配置文件格式错误：{value}"),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(value: serde_json::Error) -> Self {
        Self {
            message: value.to_string(),
        }
    }
}

impl From<Infallible> for Error {
    fn from(value: Infallible) -> Self {
        match value {}
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {}

/// 检查扰动概率是否位于 [0, 1] 之间，NaN 也视为不合法
pub(crate) fn check_probability(probability: f64) -> Result<(), Error> {
    if (0.0..=1.0).contains(&probability) {
        Ok(())
    } else {
        Err(format!("扰动概率必须位于 [0, 1] 之间，但得到了 {probability}").into())
    }
}
