//! Task plans: each task is a fixed list of steps, built before anything runs.

use std::fmt;
use std::path::{Path, PathBuf};

/// Package every task operates on.
pub const PACKAGE: &str = "young-core";

/// Line length shared by both formatting passes.
pub const MAX_WIDTH: usize = 88;

/// The one clippy lint switched off: many single-letter names (`h`, `w`, `n`)
/// are the notation of the domain.
pub const SUPPRESSED_LINT: &str = "clippy::many_single_char_names";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Task {
    Install,
    Test,
    Coverage,
    Docs,
    DocsClean,
    Lint,
}

/// One unit of work.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Run {
        program: String,
        args: Vec<String>,
        env: Vec<(String, String)>,
        dir: Option<PathBuf>,
    },
    RemoveDir(PathBuf),
}

impl Step {
    fn run(program: &str, args: &[&str]) -> Self {
        Step::Run {
            program: program.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
            env: Vec::new(),
            dir: None,
        }
    }

    fn cargo(args: &[&str]) -> Self {
        Self::run("cargo", args)
    }

    fn with_env(mut self, key: &str, value: &str) -> Self {
        if let Step::Run { env, .. } = &mut self {
            env.push((key.to_string(), value.to_string()));
        }
        self
    }

    fn in_dir(mut self, path: PathBuf) -> Self {
        if let Step::Run { dir, .. } = &mut self {
            *dir = Some(path);
        }
        self
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Run {
                program,
                args,
                env,
                dir,
            } => {
                if let Some(dir) = dir {
                    write!(f, "(in {}) ", dir.display())?;
                }
                for (key, value) in env {
                    write!(f, "{key}={value} ")?;
                }
                write!(f, "{program}")?;
                for arg in args {
                    write!(f, " {arg}")?;
                }
                Ok(())
            }
            Step::RemoveDir(path) => write!(f, "rm -rf {}", path.display()),
        }
    }
}

/// What a plan may depend on in the checkout.
#[derive(Debug, Clone)]
pub struct Layout {
    pub root: PathBuf,
    /// `docs/Makefile` drives the PDF manual when present.
    pub docs_makefile: bool,
}

impl Layout {
    pub fn detect(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
            docs_makefile: root.join("docs").join("Makefile").is_file(),
        }
    }

    fn docs_dir(&self) -> PathBuf {
        self.root.join("docs")
    }
}

pub fn plan(task: Task, layout: &Layout) -> Vec<Step> {
    match task {
        Task::Install => vec![
            Step::cargo(&[
                "install",
                "--path",
                "crates/cli",
                "--locked",
                "--target-dir",
                "build",
            ]),
            Step::RemoveDir(layout.root.join("build")),
        ],
        Task::Test => vec![Step::cargo(&["test", "-p", PACKAGE])],
        Task::Coverage => vec![Step::cargo(&["llvm-cov", "-p", PACKAGE])],
        Task::Docs => {
            let mut steps = vec![Step::cargo(&["doc", "-p", PACKAGE, "--no-deps"])];
            if layout.docs_makefile {
                steps.push(Step::run("make", &["html"]).in_dir(layout.docs_dir()));
                steps.push(Step::run("make", &["latexpdf"]).in_dir(layout.docs_dir()));
            }
            steps
        }
        Task::DocsClean => {
            let mut steps = vec![Step::cargo(&["clean", "--doc"])];
            if layout.docs_makefile {
                steps.push(Step::run("make", &["clean"]).in_dir(layout.docs_dir()));
            }
            steps
        }
        Task::Lint => {
            let width = format!("max_width={MAX_WIDTH}");
            let sorted = format!(
                "reorder_imports=true,group_imports=StdExternalCrate,{width}"
            );
            vec![
                Step::cargo(&["fmt", "-p", PACKAGE, "--", "--config", &width]),
                Step::cargo(&[
                    "+nightly", "fmt", "-p", PACKAGE, "--", "--config", &sorted,
                ]),
                Step::cargo(&[
                    "clippy",
                    "-p",
                    PACKAGE,
                    "--all-targets",
                    "--",
                    "-D",
                    "warnings",
                    "-A",
                    SUPPRESSED_LINT,
                ]),
                Step::cargo(&["doc", "-p", PACKAGE, "--no-deps"])
                    .with_env("RUSTDOCFLAGS", "-D warnings"),
            ]
        }
    }
}
