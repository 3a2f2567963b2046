use crate::solution::Solution;
use crate::Error;
use rand::Rng;

/// 生成一个 rows × columns 的随机解，每个元素独立地服从 [0, 1) 上的均匀分布
///
/// 行数或列数为 0 时直接返回错误，此时不会消耗任何随机数。
pub fn create<R: Rng>(rows: usize, columns: usize, rng: &mut R) -> Result<Solution, Error> {
    if rows == 0 || columns == 0 {
        return Err(format!("解的行数和列数都必须至少为 1，但得到了 {rows} × {columns}").into());
    }
    let values = (0..rows * columns).map(|_| rng.random::<f64>()).collect();
    Ok(Solution::from_raw(rows, columns, values))
}
