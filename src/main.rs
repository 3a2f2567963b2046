//! climb: 爬山算法演示［命令行版］
//!
//! `climb` 是一个使用 Rust 编写的命令行程序。它从随机生成的解出发，以所有元素的平均值为适应度运行爬山算法，
//! 并把每一代的结果以制表符分隔的表格输出到标准输出，供外部工具绘图。

use std::io::stdout;
use std::thread;

use climb::config::Config;
use climb::interfaces::command_line::{
    write_fitness_traces, write_genes, Command, CommandLine, CommandLineArgs,
};
use climb::interfaces::Interface;
use climb::optimizers::ClimbResult;
use climb::{create, Error, Mean};
use clap::Parser;
use tracing::{info, Level};

fn run_trial(config: &Config, index: usize, interface: &dyn Interface) -> Result<ClimbResult, Error> {
    let mut rng = config.rng(index);
    let initial = create(config.grid.rows, config.grid.columns, &mut rng)?;
    let result = config.climbing.climb(initial, Mean, &mut rng)?.run(interface)?;
    Ok(result)
}

fn main() -> Result<(), Error> {
    let args = CommandLineArgs::parse();
    let level = if args.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    let config = args.prepare_config()?;
    let command_line = CommandLine::new(&args);
    match args.command {
        Command::Climb => {
            let result = run_trial(&config, 0, &command_line)?;
            write_fitness_traces(stdout(), &[result])?;
        }
        Command::Trials => {
            let trials = config.trials();
            info!("开始 {trials} 次独立试验");
            let mut handles = vec![];
            for index in 0..trials {
                let config = config.clone();
                let interface = command_line.child(index);
                let handle = thread::spawn(move || run_trial(&config, index, &interface));
                handles.push(handle);
            }
            let mut results = vec![];
            for handle in handles {
                let result = handle
                    .join()
                    .map_err(|_| Error::from("试验线程崩溃"))??;
                results.push(result);
            }
            write_fitness_traces(stdout(), &results)?;
        }
        Command::Genes => {
            let result = run_trial(&config, 0, &command_line)?;
            write_genes(stdout(), &result)?;
        }
    }
    Ok(())
}
