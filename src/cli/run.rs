//! Run programs

use super::{CliError, parse_source};
use crate::{
    Environment, Interpreter, Version,
    io::{InputProvider, OutputProvider},
};

/// Options for the run command
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Program text
    pub source: String,
    /// Language version to run under, e.g. `1.0.0`
    pub lang_version: Option<String>,
}

/// Execute a program, returning the environment it finished with
pub fn execute_run(
    options: &RunOptions,
    output: &mut dyn OutputProvider,
    input: &mut dyn InputProvider,
) -> Result<Environment, CliError> {
    let version = match &options.lang_version {
        Some(text) => text.parse::<Version>()?,
        None => Version::default(),
    };
    let program = parse_source(&options.source)?;

    let mut interpreter = Interpreter::new(version, output, input);
    tracing::info!(
        version = %interpreter.version(),
        statements = program.statements.len(),
        "running program"
    );
    let env = interpreter.run(&Environment::new(), &program)?;
    for (name, info) in env.iter() {
        tracing::debug!(
            %name,
            var_type = %info.var_type,
            value = info.value.as_deref().unwrap_or("<uninitialized>"),
            mutable = info.is_mutable,
            "final binding"
        );
    }
    Ok(env)
}
