//! 爬山算法
//!
//! 就像在现实中爬山一样，目标是走到山顶：每一步随机扰动当前的解，只有当新解的适应度严格高于当前解时才向前走。
//! 适应度相同的新解不会取代当前解。
//!
//! **注意：爬山算法只会向上走，所以有时会困在局部最优解上。**
//!
//! 运行过程以惰性迭代器的形式给出，调用者可以在任何时候停止消费，剩下的代数不会被计算。
//!
//!# Examples
//!
//!```ignore
//!let mut rng = StdRng::seed_from_u64(42);
//!let initial = climb::create(1, 50, &mut rng)?;
//!let best = climb::climb(initial, climb::Mean, 5000, 0.05, &mut rng)?
//!    .entries()
//!    .last();
//!```

use super::ClimbResult;
use crate::interfaces::{Interface, Message};
use crate::objectives::Fitness;
use crate::operators::resample;
use crate::solution::{Solution, TraceEntry};
use crate::{check_probability, Error};
use rand::Rng;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use std::convert::Infallible;
use std::iter::FusedIterator;
use web_time::Instant;

pub const DEFAULT_GENERATIONS: usize = 5000;
pub const DEFAULT_PERTURBATION_RATE: f64 = 0.05;
pub const DEFAULT_REPORT_INTERVAL: usize = 1000;

fn default_generations() -> usize {
    DEFAULT_GENERATIONS
}

fn default_perturbation_rate() -> f64 {
    DEFAULT_PERTURBATION_RATE
}

/// 爬山算法的参数，包括代数、扰动概率和报告间隔
#[skip_serializing_none]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HillClimbing {
    #[serde(default = "default_generations")]
    pub generations: usize,
    #[serde(default = "default_perturbation_rate")]
    pub perturbation_rate: f64,
    pub report_interval: Option<usize>,
}

impl Default for HillClimbing {
    fn default() -> Self {
        Self {
            generations: DEFAULT_GENERATIONS,
            perturbation_rate: DEFAULT_PERTURBATION_RATE,
            report_interval: None,
        }
    }
}

impl HillClimbing {
    /// 从初始解出发创建一次爬山过程
    ///
    /// 参数不合法时直接返回错误，此时不会计算适应度，也不会消耗任何随机数。
    pub fn climb<F: Fitness, R: Rng>(
        &self,
        initial: Solution,
        fitness: F,
        rng: R,
    ) -> Result<Climb<F, R>, Error> {
        check_probability(self.perturbation_rate)?;
        let report_interval = self.report_interval.unwrap_or(DEFAULT_REPORT_INTERVAL);
        if report_interval == 0 {
            return Err("报告间隔必须至少为 1".into());
        }
        Ok(Climb {
            fitness,
            rng,
            perturbation_rate: self.perturbation_rate,
            generations: self.generations,
            report_interval,
            shape: initial.shape(),
            completed: 0,
            state: State::Unevaluated(initial),
        })
    }
}

/// 以给定的代数和扰动概率从初始解出发爬山，等价于用相应参数调用 [`HillClimbing::climb`]
pub fn climb<F: Fitness, R: Rng>(
    initial: Solution,
    fitness: F,
    generations: usize,
    perturbation_rate: f64,
    rng: R,
) -> Result<Climb<F, R>, Error> {
    let parameters = HillClimbing {
        generations,
        perturbation_rate,
        report_interval: None,
    };
    parameters.climb(initial, fitness, rng)
}

enum State {
    Unevaluated(Solution),
    Climbing { parent: Solution, fitness: f64 },
    Failed,
}

/// 预分配轨迹时最多预留的项数，更长的轨迹在运行中逐步增长
const MAX_PREALLOCATED_ENTRIES: usize = 1 << 16;

/// 一次爬山过程，逐代产生当前的最优解及其适应度
///
/// 第 0 项是初始解本身，之后每一代产生一项，总共 `generations + 1` 项。适应度计算失败时产生这个错误，然后结束。
pub struct Climb<F, R> {
    fitness: F,
    rng: R,
    perturbation_rate: f64,
    generations: usize,
    report_interval: usize,
    shape: (usize, usize),
    completed: usize,
    state: State,
}

impl<F: Fitness, R: Rng> Climb<F, R> {
    /// 剩余的项数；代数为 usize::MAX 时初始解加上全部代数无法用 usize 表示，返回 None
    fn remaining(&self) -> Option<usize> {
        let 剩余代数 = self.generations - self.completed;
        match self.state {
            State::Unevaluated(_) => 剩余代数.checked_add(1),
            State::Climbing { .. } => Some(剩余代数),
            State::Failed => Some(0),
        }
    }

    /// 将剩下的代数全部执行完，并通过界面报告进度
    pub fn run(self, 界面: &dyn Interface) -> Result<ClimbResult, F::Error> {
        let (rows, columns) = self.shape;
        let 总代数 = self.generations;
        let 报告间隔 = self.report_interval;
        界面.发送(Message::Started {
            generations: 总代数,
            rows,
            columns,
        });
        let 开始时间 = Instant::now();
        let 预留项数 = self
            .remaining()
            .map_or(MAX_PREALLOCATED_ENTRIES, |x| x.min(MAX_PREALLOCATED_ENTRIES));
        let mut 轨迹: Vec<TraceEntry> = Vec::with_capacity(预留项数);
        for 轨迹项 in self {
            let 轨迹项 = 轨迹项?;
            if let Some(上一项) = 轨迹.last() {
                if 轨迹项.fitness > 上一项.fitness {
                    界面.发送(Message::BetterSolution {
                        generation: 轨迹项.generation,
                        fitness: 轨迹项.fitness,
                    });
                }
            }
            if 轨迹项.generation % 报告间隔 == 0 || 轨迹项.generation == 总代数 {
                界面.发送(Message::Progress {
                    generation: 轨迹项.generation,
                    fitness: 轨迹项.fitness,
                });
            }
            轨迹.push(轨迹项);
        }
        if let Some(最优项) = 轨迹.last() {
            let 已执行代数 = 轨迹.len() as u64 - 1;
            let elapsed = if 已执行代数 > 0 {
                Some(开始时间.elapsed().as_micros() as u64 / 已执行代数)
            } else {
                None
            };
            界面.发送(Message::Finished {
                generations: 最优项.generation,
                fitness: 最优项.fitness,
                elapsed,
            });
        }
        Ok(ClimbResult { trace: 轨迹 })
    }
}

impl<F: Fitness<Error = Infallible>, R: Rng> Climb<F, R> {
    /// 适应度计算不会失败时，直接产生轨迹项而不是 `Result`
    pub fn entries(self) -> impl Iterator<Item = TraceEntry> {
        self.map(|entry| match entry {
            Ok(entry) => entry,
            Err(never) => match never {},
        })
    }
}

impl<F: Fitness, R: Rng> Iterator for Climb<F, R> {
    type Item = Result<TraceEntry, F::Error>;

    fn next(&mut self) -> Option<Self::Item> {
        match std::mem::replace(&mut self.state, State::Failed) {
            State::Failed => None,
            State::Unevaluated(初始解) => match self.fitness.evaluate(&初始解) {
                Ok(适应度) => {
                    let 轨迹项 = TraceEntry {
                        generation: 0,
                        solution: 初始解.clone(),
                        fitness: 适应度,
                    };
                    self.state = State::Climbing {
                        parent: 初始解,
                        fitness: 适应度,
                    };
                    Some(Ok(轨迹项))
                }
                Err(错误) => Some(Err(错误)),
            },
            State::Climbing {
                parent: mut 父代,
                fitness: mut 父代适应度,
            } => {
                if self.completed == self.generations {
                    self.state = State::Climbing {
                        parent: 父代,
                        fitness: 父代适应度,
                    };
                    return None;
                }
                let 子代 = resample(&父代, self.perturbation_rate, &mut self.rng);
                let 子代适应度 = match self.fitness.evaluate(&子代) {
                    Ok(子代适应度) => 子代适应度,
                    Err(错误) => return Some(Err(错误)),
                };
                // 严格改进才接受，平局保留原来的解
                if 子代适应度 > 父代适应度 {
                    父代 = 子代;
                    父代适应度 = 子代适应度;
                }
                self.completed += 1;
                let 轨迹项 = TraceEntry {
                    generation: self.completed,
                    solution: 父代.clone(),
                    fitness: 父代适应度,
                };
                self.state = State::Climbing {
                    parent: 父代,
                    fitness: 父代适应度,
                };
                Some(Ok(轨迹项))
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining() {
            Some(剩余项数) => (剩余项数.min(1), Some(剩余项数)),
            None => (1, None),
        }
    }
}

impl<F: Fitness, R: Rng> FusedIterator for Climb<F, R> {}
