//! The `mlc` driver: turns an ML source file into a running program.
//!
//! The pipeline is lex -> analyze -> emit C -> invoke the host `cc` -> run
//! the compiled binary, forwarding its stdio and any extra arguments
//! verbatim to the child process.

use std::path::PathBuf;
use std::process::{Command, Stdio};

use anyhow::{bail, Context, Result};
use ml_sem::Analyzer;

/// Parsed command line: a source path plus whatever the compiled program
/// itself should see as its own `argv[1..]`.
///
/// Deliberately not built from a flags-parsing crate: the CLI has exactly
/// one positional argument followed by a verbatim-forwarded tail, which a
/// flags parser would have to be told to stay out of rather than help with
/// (see DESIGN.md).
pub struct Config {
    pub source: PathBuf,
    pub program_args: Vec<String>,
}

impl Config {
    /// Build a `Config` from a full `argv`, including `argv[0]`.
    pub fn from_args(mut args: impl Iterator<Item = String>) -> Result<Self> {
        args.next(); // argv[0]
        let source = args
            .next()
            .context("usage: mlc <source-path> [args...]")?;
        Ok(Config {
            source: PathBuf::from(source),
            program_args: args.collect(),
        })
    }
}

/// Run the full pipeline for `config`, forwarding the child program's stdio
/// to this process's own.
pub fn run(config: Config) -> Result<()> {
    let reader = ml_lex::open_source(&config.source)
        .with_context(|| format!("could not read {}", config.source.display()))?;
    let mut lexer = ml_lex::Lexer::new(reader);

    let analyzed = Analyzer::new()
        .analyze(&mut lexer)
        .map_err(|e| anyhow::anyhow!(e))
        .with_context(|| format!("{}", config.source.display()))?;

    let c_source = ml_gen::emit_c(&analyzed);

    let workdir = tempfile::tempdir().context("could not create a temporary build directory")?;
    let c_path = workdir.path().join("ml_out.c");
    let bin_path = workdir.path().join("ml_out");
    std::fs::write(&c_path, c_source).context("could not write the generated C source")?;

    let status = Command::new("cc")
        .arg(&c_path)
        .arg("-o")
        .arg(&bin_path)
        .arg("-lm")
        .stderr(Stdio::null())
        .status()
        .context("could not invoke `cc`; is a C compiler installed and on PATH?")?;
    if !status.success() {
        bail!("the generated program failed to compile");
    }

    let status = Command::new(&bin_path)
        .args(&config.program_args)
        .status()
        .context("could not run the compiled program")?;

    if !status.success() {
        std::process::exit(status.code().unwrap_or(1));
    }
    Ok(())
}
