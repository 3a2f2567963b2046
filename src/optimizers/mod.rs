//! 优化方法，目前只有爬山算法
//!

use crate::solution::TraceEntry;

pub mod hill_climbing;

/// 一次完整运行的结果，按代数顺序保存每一代结束后的最优解
#[derive(Debug, Clone, PartialEq)]
pub struct ClimbResult {
    pub trace: Vec<TraceEntry>,
}

impl ClimbResult {
    /// 最后一代的最优解，也就是整个运行中适应度最高的解
    pub fn best(&self) -> Option<&TraceEntry> {
        self.trace.last()
    }

    pub fn fitness_history(&self) -> Vec<f64> {
        self.trace.iter().map(|entry| entry.fitness).collect()
    }

    /// 基因矩阵：每一行对应解中按行优先展平后的一个位置，每一列对应一代
    pub fn genes(&self) -> Vec<Vec<f64>> {
        let width = self.trace.first().map_or(0, |entry| entry.solution.len());
        (0..width)
            .map(|position| {
                self.trace
                    .iter()
                    .map(|entry| entry.solution.as_slice()[position])
                    .collect()
            })
            .collect()
    }
}
