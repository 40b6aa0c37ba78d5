//! xtask - Development automation for young
//!
//! Usage: cargo xtask <command>
//!
//! Each command is a fixed sequence of external tool invocations; the first
//! failing step aborts the rest.

mod plan;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use xshell::Shell;

use plan::{Layout, Step, Task, plan};

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "young development automation")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Print the steps without running them
    #[arg(long, global = true)]
    dry_run: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Install the `young` binary, then remove the build directory
    Install,
    /// Run the young-core test suite
    Test,
    /// Measure test coverage of young-core (needs cargo-llvm-cov)
    Coverage,
    /// Build HTML docs, plus the PDF manual when docs/Makefile exists
    Docs,
    /// Remove generated documentation
    DocsClean,
    /// Format, sort imports and lint young-core
    Lint,
}

impl From<&Command> for Task {
    fn from(command: &Command) -> Self {
        match command {
            Command::Install => Task::Install,
            Command::Test => Task::Test,
            Command::Coverage => Task::Coverage,
            Command::Docs => Task::Docs,
            Command::DocsClean => Task::DocsClean,
            Command::Lint => Task::Lint,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let root = project_root()?;
    let sh = Shell::new()?;
    sh.change_dir(&root);

    let steps = plan(Task::from(&cli.command), &Layout::detect(&root));
    for (i, step) in steps.iter().enumerate() {
        println!("[{}/{}] {step}", i + 1, steps.len());
        if cli.dry_run {
            continue;
        }
        execute(&sh, step).with_context(|| format!("step failed: {step}"))?;
    }
    Ok(())
}

fn project_root() -> Result<PathBuf> {
    let manifest_dir =
        std::env::var("CARGO_MANIFEST_DIR").context("CARGO_MANIFEST_DIR not set")?;
    // xtask lives in crates/xtask
    PathBuf::from(manifest_dir)
        .ancestors()
        .nth(2)
        .map(PathBuf::from)
        .context("xtask is not inside a workspace checkout")
}

fn execute(sh: &Shell, step: &Step) -> Result<()> {
    match step {
        Step::Run {
            program,
            args,
            env,
            dir,
        } => {
            let _dir = dir.as_ref().map(|d| sh.push_dir(d));
            let mut cmd = sh.cmd(program).args(args);
            for (key, value) in env {
                cmd = cmd.env(key, value);
            }
            cmd.run()?;
        }
        Step::RemoveDir(path) => {
            if sh.path_exists(path) {
                sh.remove_path(path)?;
            }
        }
    }
    Ok(())
}
