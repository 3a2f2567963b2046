//! 算子：随机生成初始解，以及通过逐元素重新采样扰动一个解
//!

mod generation;
mod perturbation;

pub use generation::create;
pub(crate) use perturbation::resample;
pub use perturbation::perturb;
