use crate::lang::Error;
use crate::mach::{compile, Program, Runtime, Val};

mod bytecode_test;
mod frame_test;

fn words(source: &str) -> Vec<i32> {
    match compile(source) {
        Ok(program) => program.words().to_vec(),
        Err(e) => panic!("{} in {:?}", e, source),
    }
}

fn run(source: &str) -> Result<Val, Error> {
    let program = compile(source)?;
    Runtime::new(Vec::<u8>::new()).run(&program)
}

fn run_words(words: Vec<i32>) -> Result<Val, Error> {
    let program = Program::from_words(words);
    Runtime::new(Vec::<u8>::new()).run(&program)
}

fn fault(words: Vec<i32>) -> String {
    match run_words(words) {
        Ok(val) => panic!("expected a fault, got {}", val),
        Err(e) => {
            assert!(e.is_fault());
            e.to_string()
        }
    }
}
