use clap::Parser;
use climb::config::{Config, GridConfig, DEFAULT_TRIALS};
use climb::interfaces::command_line::{write_fitness_traces, write_genes, Command, CommandLineArgs};
use climb::interfaces::Message;
use climb::optimizers::ClimbResult;
use climb::{Solution, TraceEntry};
use rand::Rng;

fn entry(generation: usize, values: Vec<f64>, fitness: f64) -> TraceEntry {
    TraceEntry {
        generation,
        solution: Solution::from_values(1, values.len(), values).unwrap(),
        fitness,
    }
}

#[test]
fn config_defaults_fill_missing_fields() {
    let config = Config::from_yaml("seed: 42\n").unwrap();
    assert_eq!(config.grid, GridConfig { rows: 1, columns: 50 });
    assert_eq!(config.climbing.generations, 5000);
    assert_eq!(config.climbing.perturbation_rate, 0.05);
    assert_eq!(config.climbing.report_interval, None);
    assert_eq!(config.trials(), DEFAULT_TRIALS);
    assert_eq!(config.seed, Some(42));
}

#[test]
fn config_reads_every_field() {
    let content = "
grid:
  rows: 2
  columns: 8
climbing:
  generations: 100
  perturbation_rate: 0.5
  report_interval: 10
trials: 3
";
    let config = Config::from_yaml(content).unwrap();
    assert_eq!(config.grid, GridConfig { rows: 2, columns: 8 });
    assert_eq!(config.climbing.generations, 100);
    assert_eq!(config.climbing.perturbation_rate, 0.5);
    assert_eq!(config.climbing.report_interval, Some(10));
    assert_eq!(config.trials(), 3);
    assert_eq!(config.seed, None);
    assert!(!config.to_yaml().unwrap().contains("seed"));
    assert!(Config::from_yaml("grid: [1, 2").is_err());
}

#[test]
fn seeded_trials_use_distinct_streams() {
    let config = Config {
        seed: Some(7),
        ..Config::default()
    };
    assert_eq!(config.rng(0).random::<u64>(), config.rng(0).random::<u64>());
    assert_ne!(config.rng(0).random::<u64>(), config.rng(1).random::<u64>());
}

#[test]
fn command_line_overrides_config() {
    let args = CommandLineArgs::parse_from([
        "climb", "trials", "-g", "10", "--columns", "4", "-p", "0.5", "--seed", "3", "-t", "2",
    ]);
    assert_eq!(args.command, Command::Trials);
    let config = args.prepare_config().unwrap();
    assert_eq!(config.grid, GridConfig { rows: 1, columns: 4 });
    assert_eq!(config.climbing.generations, 10);
    assert_eq!(config.climbing.perturbation_rate, 0.5);
    assert_eq!(config.seed, Some(3));
    assert_eq!(config.trials(), 2);

    let args = CommandLineArgs::parse_from(["climb", "climb", "-t", "0"]);
    assert!(args.prepare_config().is_err());
    let args = CommandLineArgs::parse_from(["climb", "genes", "--config", "missing.yaml"]);
    assert!(args.prepare_config().is_err());
}

#[test]
fn fitness_traces_are_tab_separated() {
    let first = ClimbResult {
        trace: vec![entry(0, vec![0.25], 0.25), entry(1, vec![0.5], 0.5)],
    };
    let second = ClimbResult {
        trace: vec![entry(0, vec![0.75], 0.75), entry(1, vec![0.75], 0.75)],
    };
    let mut buffer = vec![];
    write_fitness_traces(&mut buffer, &[first, second]).unwrap();
    assert_eq!(String::from_utf8(buffer).unwrap(), "0\t0.25\t0.75\n1\t0.5\t0.75\n");
}

#[test]
fn genes_have_one_row_per_position() {
    let result = ClimbResult {
        trace: vec![
            entry(0, vec![0.25, 0.5], 0.375),
            entry(1, vec![0.75, 0.5], 0.625),
        ],
    };
    let mut buffer = vec![];
    write_genes(&mut buffer, &result).unwrap();
    assert_eq!(String::from_utf8(buffer).unwrap(), "0.25\t0.75\n0.5\t0.5\n");
}

#[test]
fn messages_serialize_with_a_type_tag() {
    let message = Message::Finished {
        generations: 0,
        fitness: 0.5,
        elapsed: None,
    };
    assert_eq!(
        serde_json::to_string(&message).unwrap(),
        r#"{"type":"finished","generations":0,"fitness":0.5}"#
    );
    let message = Message::Progress {
        generation: 3,
        fitness: 0.25,
    };
    assert_eq!(
        serde_json::to_string(&message).unwrap(),
        r#"{"type":"progress","generation":3,"fitness":0.25}"#
    );
}
