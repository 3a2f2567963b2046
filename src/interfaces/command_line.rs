use crate::config::Config;
use crate::interfaces::{Interface, Message};
use crate::optimizers::ClimbResult;
use crate::Error;
use clap::{Parser, Subcommand};
use csv::WriterBuilder;
use std::fs::read_to_string;
use std::io::Write;
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// 命令行参数的定义
#[derive(Parser, Clone, Debug)]
#[command(name = "climb")]
#[command(author, version, about, long_about)]
#[command(propagate_version = true)]
pub struct CommandLineArgs {
    #[command(subcommand)]
    pub command: Command,
    /// 配置文件，不提供时使用默认配置
    #[arg(long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,
    /// 解的行数，默认为 1
    #[arg(short, long, global = true)]
    pub rows: Option<usize>,
    /// 解的列数，默认为 50
    #[arg(short, long, global = true)]
    pub columns: Option<usize>,
    /// 代数，默认为 5000
    #[arg(short, long, global = true)]
    pub generations: Option<usize>,
    /// 每个元素被扰动的概率，默认为 0.05
    #[arg(short, long, global = true)]
    pub perturbation_rate: Option<f64>,
    /// 随机数种子
    #[arg(short, long, global = true)]
    pub seed: Option<u64>,
    /// 独立试验的次数，仅用于 trials 子命令，默认为 5
    #[arg(short, long, global = true)]
    pub trials: Option<usize>,
    /// 以 JSON 格式输出进度消息
    #[arg(long, global = true)]
    pub json: bool,
    /// 输出每一次改进
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// 命令行中所有可用的子命令
#[derive(Subcommand, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// 运行一次爬山，输出每一代的最优适应度
    Climb,
    /// 运行多次独立的爬山，每次一个线程，输出每次试验每一代的最优适应度
    Trials,
    /// 运行一次爬山，输出每一代最优解组成的基因矩阵
    Genes,
}

impl CommandLineArgs {
    /// 读取配置文件，再用命令行中给出的参数覆盖
    pub fn prepare_config(&self) -> Result<Config, Error> {
        let mut config = match &self.config {
            Some(path) => {
                let content = read_to_string(path)
                    .map_err(|error| format!("无法读取配置文件 {}：{error}", path.display()))?;
                Config::from_yaml(&content)?
            }
            None => Config::default(),
        };
        if let Some(rows) = self.rows {
            config.grid.rows = rows;
        }
        if let Some(columns) = self.columns {
            config.grid.columns = columns;
        }
        if let Some(generations) = self.generations {
            config.climbing.generations = generations;
        }
        if let Some(perturbation_rate) = self.perturbation_rate {
            config.climbing.perturbation_rate = perturbation_rate;
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(trials) = self.trials {
            config.trials = Some(trials);
        }
        if config.trials == Some(0) {
            return Err("试验次数必须至少为 1".into());
        }
        Ok(config)
    }
}

/// 通过命令行来使用 libclimb 的入口，实现了界面特征
///
/// 进度消息写到标准错误，表格数据写到标准输出。
#[derive(Clone, Debug)]
pub struct CommandLine {
    pub json: bool,
    pub trial: usize,
}

impl CommandLine {
    pub fn new(args: &CommandLineArgs) -> Self {
        Self {
            json: args.json,
            trial: 0,
        }
    }

    /// 为第 index 次试验生成一个界面，报告的消息会带上试验编号
    pub fn child(&self, index: usize) -> CommandLine {
        CommandLine {
            json: self.json,
            trial: index,
        }
    }
}

impl Interface for CommandLine {
    fn 发送(&self, 消息: Message) {
        let trial = self.trial;
        if self.json {
            match serde_json::to_string(&消息) {
                Ok(line) => eprintln!("{line}"),
                Err(error) => warn!(trial, "无法序列化消息：{error}"),
            }
            return;
        }
        match 消息 {
            Message::Started {
                generations,
                rows,
                columns,
            } => info!(trial, "开始爬山，解的尺寸为 {rows} × {columns}，共 {generations} 代"),
            Message::Progress {
                generation,
                fitness,
            } => info!(trial, "已执行 {generation} 代，当前最优适应度为 {fitness:.6}"),
            Message::BetterSolution {
                generation,
                fitness,
            } => debug!(trial, "第 {generation} 代找到了更好的解，适应度为 {fitness:.6}"),
            Message::Finished {
                generations,
                fitness,
                elapsed,
            } => match elapsed {
                Some(time) => info!(
                    trial,
                    "爬山结束，共 {generations} 代，最优适应度为 {fitness:.6}，每代平均用时 {time} μs"
                ),
                None => info!(trial, "爬山结束，最优适应度为 {fitness:.6}"),
            },
        }
    }
}

/// 输出适应度轨迹：每行依次为代数和各次试验在这一代的最优适应度，以制表符分隔
pub fn write_fitness_traces<W: Write>(writer: W, results: &[ClimbResult]) -> Result<(), Error> {
    let mut writer = WriterBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .from_writer(writer);
    let length = results
        .iter()
        .map(|result| result.trace.len())
        .max()
        .unwrap_or(0);
    for generation in 0..length {
        let mut record = vec![generation.to_string()];
        record.extend(results.iter().map(|result| {
            result
                .trace
                .get(generation)
                .map_or_else(String::new, |entry| entry.fitness.to_string())
        }));
        writer.write_record(&record)?;
    }
    writer.flush()?;
    Ok(())
}

/// 输出基因矩阵：每行对应解中的一个位置，每列对应一代，以制表符分隔
pub fn write_genes<W: Write>(writer: W, result: &ClimbResult) -> Result<(), Error> {
    let mut writer = WriterBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .from_writer(writer);
    for row in result.genes() {
        writer.write_record(row.iter().map(f64::to_string))?;
    }
    writer.flush()?;
    Ok(())
}
