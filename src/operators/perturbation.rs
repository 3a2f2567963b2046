use crate::solution::Solution;
use crate::{check_probability, Error};
use rand::Rng;

/// 返回一个扰动后的新解，原来的解保持不变
///
/// 对每个位置独立地抽取 u ∈ [0, 1)，若 `probability > u`，该位置替换为一个新的均匀随机数，否则保留原值。
/// 因此概率为 0 时得到与原解相等的副本，概率为 1 时每个元素都被重新采样。
pub fn perturb<R: Rng>(
    solution: &Solution,
    probability: f64,
    rng: &mut R,
) -> Result<Solution, Error> {
    check_probability(probability)?;
    Ok(resample(solution, probability, rng))
}

/// 不检查概率的扰动，供已经验证过参数的调用者使用
pub(crate) fn resample<R: Rng>(solution: &Solution, probability: f64, rng: &mut R) -> Solution {
    let mut values = solution.as_slice().to_vec();
    for value in values.iter_mut() {
        if probability > rng.random::<f64>() {
            *value = rng.random();
        }
    }
    Solution::from_raw(solution.rows(), solution.columns(), values)
}
