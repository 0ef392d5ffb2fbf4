use anyhow::Result;
use log::{LevelFilter, error, info};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use heat1d::writer::{MESH_FILE, RESULTS_FILE, TIME_LOG_FILE};
use heat1d::{Heat1dError, Input, ResultsWriter, Simulation, write_mesh, write_time_log};

const USAGE: &str = "usage: heat1d [-v | -q] <case.json>";

fn main() -> ExitCode {
    let mut verbosity = LevelFilter::Info;
    let mut case: Option<PathBuf> = None;

    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--version" | "-V" => {
                println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
                return ExitCode::SUCCESS;
            }
            "--help" | "-h" => {
                println!("{USAGE}");
                return ExitCode::SUCCESS;
            }
            "-v" | "--verbose" => verbosity = LevelFilter::Debug,
            "-q" | "--quiet" => verbosity = LevelFilter::Warn,
            path if case.is_none() && !path.starts_with('-') => {
                case = Some(PathBuf::from(path));
            }
            other => {
                eprintln!("unexpected argument '{other}'\n{USAGE}");
                return ExitCode::from(1);
            }
        }
    }

    let Some(case) = case else {
        eprintln!("{USAGE}");
        return ExitCode::from(1);
    };

    let _ = TermLogger::init(
        verbosity,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    );

    match run(&case) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err:#}");
            ExitCode::from(exit_code(&err))
        }
    }
}

/// Run one case: decode, simulate, and drop `mesh.json`, `results.json` and
/// `time_log.json` next to the case file.
fn run(case: &Path) -> Result<()> {
    let input = Input::load(case)?;
    info!(
        "case {}: {} cells over {} m, dt = {} s, {} steps",
        case.display(),
        input.ndiv,
        input.length,
        input.dt,
        input.nstep
    );

    let mut sim = Simulation::from_input(&input)?;
    let out_dir = case.parent().unwrap_or(Path::new("."));

    write_mesh(&out_dir.join(MESH_FILE), sim.mesh())?;

    let mut results = ResultsWriter::create(out_dir.join(RESULTS_FILE));
    sim.run(&mut results)?;
    let n_records = results.len();
    results.finish()?;

    write_time_log(&out_dir.join(TIME_LOG_FILE), sim.times())?;
    sim.times().log_summary();
    info!(
        "wrote {n_records} snapshots to {}",
        out_dir.join(RESULTS_FILE).display()
    );
    Ok(())
}

/// Stable per-family exit codes; output failures surface as plain IO errors
/// and get their own code.
fn exit_code(err: &anyhow::Error) -> u8 {
    if let Some(typed) = err.downcast_ref::<Heat1dError>() {
        return typed.exit_code();
    }
    if err.root_cause().downcast_ref::<std::io::Error>().is_some() {
        return 7;
    }
    1
}
