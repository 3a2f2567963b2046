//! 目标函数接口，以及内置的平均值目标函数
//!
//! 适应度越高越好，除此之外不对其数值赋予任何含义。

use crate::solution::Solution;
use std::convert::Infallible;

pub trait Fitness {
    type Error;

    /// 计算一个解的适应度；对同一个解应当给出相同的结果，否则爬山过程的单调性无从保证
    fn evaluate(&mut self, solution: &Solution) -> Result<f64, Self::Error>;
}

/// 任何 `FnMut(&Solution) -> f64` 闭包都可以直接作为目标函数使用
impl<F> Fitness for F
where
    F: FnMut(&Solution) -> f64,
{
    type Error = Infallible;

    fn evaluate(&mut self, solution: &Solution) -> Result<f64, Infallible> {
        Ok(self(solution))
    }
}

/// 以所有元素的算术平均值作为适应度
#[derive(Debug, Clone, Copy, Default)]
pub struct Mean;

impl Fitness for Mean {
    type Error = Infallible;

    fn evaluate(&mut self, solution: &Solution) -> Result<f64, Infallible> {
        Ok(solution.mean())
    }
}
