#![allow(dead_code)]
use rap::lang::Error;
use rap::mach::{compile, Runtime, Val};

/// Compile and run one line, discarding routine output.
pub fn run(line: &str) -> Result<Val, Error> {
    exec(line).1
}

/// Compile and run one line, returning routine output and the result.
pub fn exec(line: &str) -> (String, Result<Val, Error>) {
    let program = match compile(line) {
        Ok(program) => program,
        Err(e) => return (String::new(), Err(e)),
    };
    let mut runtime = Runtime::new(Vec::<u8>::new());
    let result = runtime.run(&program);
    let out = String::from_utf8_lossy(&runtime.into_output()).to_string();
    (out, result)
}

/// Compile and run with tracing on; the output holds the trace.
pub fn trace(line: &str) -> String {
    let program = match compile(line) {
        Ok(program) => program,
        Err(e) => return format!("{}\n", e),
    };
    let mut runtime = Runtime::new(Vec::<u8>::new());
    runtime.set_trace(true);
    if let Err(e) = runtime.run(&program) {
        let mut out = String::from_utf8_lossy(runtime.output()).to_string();
        out.push_str(&format!("{}\n", e));
        return out;
    }
    String::from_utf8_lossy(&runtime.into_output()).to_string()
}

/// The display form of the error a line fails with.
pub fn error(line: &str) -> String {
    match run(line) {
        Ok(val) => panic!("{:?} succeeded with {}", line, val),
        Err(e) => e.to_string(),
    }
}

pub fn int(n: i32) -> Result<Val, Error> {
    Ok(Val::Integer(n))
}
