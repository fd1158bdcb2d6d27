use crate::domain::model::SatOutcome;
use crate::infrastructure::event_ndjson::spawn_ndjson_printer;
use crate::infrastructure::instance_reader::{read_graph_file, read_two_sat_file};
use crate::infrastructure::scc_kosaraju::KosarajuSccDecomposer;
use crate::infrastructure::serde_json_adapter::{
    write_report_file, ComponentsReportDto, InstanceReportDto, SolveReportDto,
};
use crate::usecase::components::largest_components;
use crate::usecase::event::AppEvent;
use crate::usecase::two_sat::{solve_batch, solve_two_sat, SolveOptions, Strategy};
use crate::usecase::validate::{validate_graph_instance, validate_two_sat_instance};
use anyhow::{anyhow, Context, Result};
use std::env;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

const DEFAULT_TOP_K: usize = 5;

pub async fn run() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    run_with_args(&args).await
}

pub async fn run_with_args(args: &[String]) -> Result<()> {
    let cmd = Cli::parse(args)?;

    match cmd {
        Cli::SccTop {
            input,
            k,
            emit_events,
            output,
        } => {
            let (sink, printer) = event_channel(emit_events);

            let instance = read_graph_file(&input)
                .await
                .with_context(|| format!("reading graph: {input}"))?;

            let outcome =
                largest_components(&input, &instance, &KosarajuSccDecomposer, k, sink).await?;

            if let Some(handle) = printer {
                handle.await.ok();
            }

            if let Some(path) = output.as_deref() {
                let report = ComponentsReportDto {
                    source: input.clone(),
                    vertices: outcome.vertices,
                    edges: outcome.edges,
                    components: outcome.components,
                    largest: outcome.largest.clone(),
                };
                write_report_file(path, &report)
                    .await
                    .with_context(|| format!("writing report: {path}"))?;
            }

            eprintln!("result: {}", join_sizes(&outcome.largest));
            eprintln!(
                "summary: vertices={} edges={} components={} cyclic_components={}",
                outcome.vertices, outcome.edges, outcome.components, outcome.cyclic_components
            );
            Ok(())
        }

        Cli::SccValidate { input } => {
            let instance = read_graph_file(&input)
                .await
                .with_context(|| format!("reading graph: {input}"))?;
            validate_graph_instance(&instance)
                .with_context(|| format!("validating graph: {input}"))?;
            eprintln!("ok: graph validated");
            Ok(())
        }

        Cli::TwoSatSolve {
            inputs,
            options,
            emit_events,
            output,
        } => {
            let mut instances = Vec::with_capacity(inputs.len());
            for input in &inputs {
                let instance = read_two_sat_file(input)
                    .await
                    .with_context(|| format!("reading 2-SAT instance: {input}"))?;
                instances.push((input.clone(), instance));
            }

            let (sink, printer) = event_channel(emit_events);

            let (results, stats) = if instances.len() == 1 {
                let (source, instance) = &instances[0];
                let (outcome, stats) =
                    solve_two_sat(source, instance, &KosarajuSccDecomposer, &options, sink)
                        .await?;
                (vec![(source.clone(), outcome)], stats)
            } else {
                solve_batch(instances, Arc::new(KosarajuSccDecomposer), options, sink).await?
            };

            if let Some(handle) = printer {
                handle.await.ok();
            }

            let bits = result_bits(&results);

            if let Some(path) = output.as_deref() {
                let report = SolveReportDto {
                    strategy: options.strategy.as_str().to_string(),
                    result: bits.clone(),
                    instances: results
                        .iter()
                        .map(|(source, outcome)| InstanceReportDto {
                            source: source.clone(),
                            satisfiable: outcome.satisfiable,
                            assignment: outcome.assignment.clone(),
                        })
                        .collect(),
                    stats: stats.clone(),
                };
                write_report_file(path, &report)
                    .await
                    .with_context(|| format!("writing report: {path}"))?;
            }

            for (source, outcome) in &results {
                if let Some(assignment) = outcome.assignment.as_ref() {
                    eprintln!("assignment {source}: {}", assignment_bits(assignment));
                }
            }
            eprintln!("result: {bits}");
            eprintln!(
                "summary: strategy={} instances={} satisfiable={} unsatisfiable={}",
                options.strategy.as_str(),
                stats.instances,
                stats.satisfiable,
                stats.unsatisfiable
            );
            Ok(())
        }

        Cli::TwoSatValidate { input } => {
            let instance = read_two_sat_file(&input)
                .await
                .with_context(|| format!("reading 2-SAT instance: {input}"))?;
            validate_two_sat_instance(&instance)
                .with_context(|| format!("validating 2-SAT instance: {input}"))?;
            eprintln!("ok: instance validated");
            Ok(())
        }
    }
}

fn event_channel(
    emit_events: bool,
) -> (Option<mpsc::Sender<AppEvent>>, Option<JoinHandle<()>>) {
    let (tx, rx) = mpsc::channel::<AppEvent>(1024);
    if emit_events {
        (Some(tx), Some(spawn_ndjson_printer(rx)))
    } else {
        (None, None)
    }
}

fn join_sizes(sizes: &[usize]) -> String {
    sizes
        .iter()
        .map(|s| s.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

fn result_bits(results: &[(String, SatOutcome)]) -> String {
    results
        .iter()
        .map(|(_, o)| if o.satisfiable { '1' } else { '0' })
        .collect()
}

fn assignment_bits(assignment: &[bool]) -> String {
    assignment.iter().map(|&b| if b { '1' } else { '0' }).collect()
}

#[derive(Debug)]
enum Cli {
    SccTop {
        input: String,
        k: usize,
        emit_events: bool,
        output: Option<String>,
    },
    SccValidate {
        input: String,
    },
    TwoSatSolve {
        inputs: Vec<String>,
        options: SolveOptions,
        emit_events: bool,
        output: Option<String>,
    },
    TwoSatValidate {
        input: String,
    },
}

impl Cli {
    fn parse(args: &[String]) -> Result<Self> {
        // Expected:
        // <bin> scc top --in <edges> [--k <n>] [--emit-events] [--out <report.json>]
        // <bin> scc validate --in <edges>
        // <bin> two-sat solve --in <file> [--in <file> ...] [--assignment] [--strategy <s>] ...
        // <bin> two-sat validate --in <file>
        if args.len() < 3 {
            return Err(anyhow!(usage()));
        }

        match (args[1].as_str(), args[2].as_str()) {
            ("scc", "top") => Self::parse_scc_top(args),
            ("scc", "validate") => Self::parse_validate(args).map(|input| Cli::SccValidate { input }),
            ("two-sat", "solve") => Self::parse_two_sat_solve(args),
            ("two-sat", "validate") => {
                Self::parse_validate(args).map(|input| Cli::TwoSatValidate { input })
            }
            _ => Err(anyhow!(usage())),
        }
    }

    fn parse_scc_top(args: &[String]) -> Result<Self> {
        let mut input: Option<String> = None;
        let mut k = DEFAULT_TOP_K;
        let mut emit_events = false;
        let mut output: Option<String> = None;

        let mut i = 3;
        while i < args.len() {
            match args[i].as_str() {
                "--in" | "--input" => {
                    i += 1;
                    input = args.get(i).cloned();
                }
                "--k" | "--top" => {
                    i += 1;
                    k = parse_value(args.get(i), "--k")?;
                }
                "--out" | "--output" => {
                    i += 1;
                    output = args.get(i).cloned();
                }
                "--emit-events" => {
                    emit_events = true;
                }
                "-h" | "--help" => return Err(anyhow!(usage())),
                other => return Err(anyhow!(format!("unknown arg: {other}\n\n{}", usage()))),
            }
            i += 1;
        }

        let input = input.ok_or_else(|| anyhow!(format!("missing --in/--input\n\n{}", usage())))?;

        Ok(Cli::SccTop {
            input,
            k,
            emit_events,
            output,
        })
    }

    fn parse_two_sat_solve(args: &[String]) -> Result<Self> {
        let mut inputs: Vec<String> = Vec::new();
        let mut options = SolveOptions::default();
        let mut emit_events = false;
        let mut output: Option<String> = None;

        let mut i = 3;
        while i < args.len() {
            match args[i].as_str() {
                "--in" | "--input" => {
                    i += 1;
                    if let Some(v) = args.get(i) {
                        inputs.push(v.clone());
                    }
                }
                "--assignment" => {
                    options.want_assignment = true;
                }
                "--strategy" => {
                    i += 1;
                    options.strategy = parse_value(args.get(i), "--strategy")?;
                }
                "--seed" => {
                    i += 1;
                    options.seed = parse_value(args.get(i), "--seed")?;
                }
                "--trials" => {
                    i += 1;
                    options.trials = Some(parse_value(args.get(i), "--trials")?);
                }
                "--out" | "--output" => {
                    i += 1;
                    output = args.get(i).cloned();
                }
                "--emit-events" => {
                    emit_events = true;
                }
                "-h" | "--help" => return Err(anyhow!(usage())),
                other => return Err(anyhow!(format!("unknown arg: {other}\n\n{}", usage()))),
            }
            i += 1;
        }

        if inputs.is_empty() {
            return Err(anyhow!(format!("missing --in/--input\n\n{}", usage())));
        }

        Ok(Cli::TwoSatSolve {
            inputs,
            options,
            emit_events,
            output,
        })
    }

    fn parse_validate(args: &[String]) -> Result<String> {
        let mut input: Option<String> = None;

        let mut i = 3;
        while i < args.len() {
            match args[i].as_str() {
                "--in" | "--input" => {
                    i += 1;
                    input = args.get(i).cloned();
                }
                "-h" | "--help" => return Err(anyhow!(usage())),
                other => return Err(anyhow!(format!("unknown arg: {other}\n\n{}", usage()))),
            }
            i += 1;
        }

        input.ok_or_else(|| anyhow!(format!("missing --in/--input\n\n{}", usage())))
    }
}

fn parse_value<T>(raw: Option<&String>, flag: &str) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let raw = raw.ok_or_else(|| anyhow!(format!("missing value for {flag}\n\n{}", usage())))?;
    raw.parse::<T>()
        .map_err(|e| anyhow!("invalid value for {flag}: {raw}: {e}"))
}

fn usage() -> &'static str {
    "Usage:\n  scc top --in/--input <edges.txt|graph.json> [--k <n>] [--emit-events] [--out <report.json>]\n  scc validate --in/--input <edges.txt|graph.json>\n  two-sat solve --in/--input <file> [--in <file> ...] [--assignment] [--strategy kosaraju|local-search] [--seed <u64>] [--trials <n>] [--emit-events] [--out <report.json>]\n  two-sat validate --in/--input <file>\n\nInputs:\n  Edge lists hold one 1-based \"u v\" pair per line. 2-SAT text files hold the variable count on the first line and one \"a b\" clause per line. Files ending in .json are read as JSON documents.\n\nEvents:\n  If --emit-events is set, NDJSON events are written to stdout; results and summary go to stderr."
}
