//! 解与轨迹的数据结构
//!
//! 解是一个 rows × columns 的实数网格，所有元素都位于 [0, 1) 之间。解一旦生成就不再修改，扰动总是产生新的解。

use crate::Error;
use serde::{Deserialize, Serialize};
use std::ops::Index;

/// 候选解：按行优先存储的固定尺寸网格
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")]
pub struct Solution {
    rows: usize,
    columns: usize,
    values: Vec<f64>,
}

impl Solution {
    /// 从逐行给出的元素构造解，要求网格非空、每行长度相同、所有元素都是 [0, 1) 中的有限数
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, Error> {
        let columns = rows.first().map_or(0, Vec::len);
        if rows.is_empty() || columns == 0 {
            return Err("解的行数和列数都必须至少为 1".into());
        }
        if let Some(index) = rows.iter().position(|row| row.len() != columns) {
            return Err(format!(
                "第 {index} 行有 {} 个元素，与第 0 行的 {columns} 个不一致",
                rows[index].len()
            )
            .into());
        }
        let row_count = rows.len();
        let values: Vec<f64> = rows.into_iter().flatten().collect();
        Self::from_values(row_count, columns, values)
    }

    /// 从按行优先排列的元素构造解
    pub fn from_values(rows: usize, columns: usize, values: Vec<f64>) -> Result<Self, Error> {
        if rows == 0 || columns == 0 {
            return Err("解的行数和列数都必须至少为 1".into());
        }
        if values.len() != rows * columns {
            return Err(format!(
                "{rows} × {columns} 的解需要 {} 个元素，但得到了 {} 个",
                rows * columns,
                values.len()
            )
            .into());
        }
        if let Some(value) = values.iter().find(|x| !(0.0..1.0).contains(*x)) {
            return Err(format!("解的元素必须位于 [0, 1) 之间，但得到了 {value}").into());
        }
        Ok(Self {
            rows,
            columns,
            values,
        })
    }

    /// 生成算子和扰动算子已经保证了形状和取值范围，不再重复检查
    pub(crate) fn from_raw(rows: usize, columns: usize, values: Vec<f64>) -> Self {
        debug_assert_eq!(values.len(), rows * columns);
        Self {
            rows,
            columns,
            values,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.columns)
    }

    /// 元素总数，即 rows × columns
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// 解至少有一个元素，因此总是返回 false
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, row: usize, column: usize) -> Option<f64> {
        if row < self.rows && column < self.columns {
            Some(self.values[row * self.columns + column])
        } else {
            None
        }
    }

    /// 按行优先展平后的全部元素
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.values.iter().copied()
    }

    pub fn row_iter(&self) -> impl Iterator<Item = &[f64]> + '_ {
        self.values.chunks(self.columns)
    }

    /// 所有元素的算术平均值
    pub fn mean(&self) -> f64 {
        self.values.iter().sum::<f64>() / self.values.len() as f64
    }
}

impl Index<(usize, usize)> for Solution {
    type Output = f64;

    fn index(&self, (row, column): (usize, usize)) -> &f64 {
        assert!(
            row < self.rows && column < self.columns,
            "下标 ({row}, {column}) 超出了 {} × {} 的解",
            self.rows,
            self.columns
        );
        &self.values[row * self.columns + column]
    }
}

impl std::convert::TryFrom<Vec<Vec<f64>>> for Solution {
    type Error = Error;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self, Error> {
        Self::from_rows(rows)
    }
}

impl From<Solution> for Vec<Vec<f64>> {
    fn from(solution: Solution) -> Self {
        solution.row_iter().map(<[f64]>::to_vec).collect()
    }
}

/// 轨迹中的一项：某一代结束后已知的最优解及其适应度
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceEntry {
    /// 代数，初始解为第 0 代
    pub generation: usize,
    pub solution: Solution,
    pub fitness: f64,
}
