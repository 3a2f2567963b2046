use serde::Serialize;
use serde_with::skip_serializing_none;

pub mod command_line;

/// 向用户反馈的消息类型
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Message {
    Started {
        generations: usize,
        rows: usize,
        columns: usize,
    },
    Progress {
        generation: usize,
        fitness: f64,
    },
    BetterSolution {
        generation: usize,
        fitness: f64,
    },
    Finished {
        generations: usize,
        fitness: f64,
        /// 每一代的平均用时，以微秒计；没有执行任何一代时为空
        elapsed: Option<u64>,
    },
}

/// 定义了向用户报告消息的接口，用于统一命令行和其他前端的输出方式
///
/// 各个前端只需要各自实现 发送 方法，就可向用户报告爬山过程中的各种数据
pub trait Interface {
    fn 发送(&self, 消息: Message);
}

/// 不报告任何消息的界面
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl Interface for Silent {
    fn 发送(&self, _消息: Message) {}
}
