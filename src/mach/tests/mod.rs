use crate::lang::{lex, Dialect, Error};
use crate::mach::{compile, Event, Program, Runtime, Word};


fn build(source: &str) -> Result<Program, Error> {
    compile(lex(source), Dialect::English)
}

fn run(source: &str) -> Result<Vec<Word>, Error> {
    run_program(build(source)?)
}

fn run_program(program: Program) -> Result<Vec<Word>, Error> {
    run_cycles(&mut Runtime::new(program), 5000)
}

fn run_cycles(runtime: &mut Runtime, cycles: usize) -> Result<Vec<Word>, Error> {
    let mut output = vec![];
    let mut bursts = 0;
    loop {
        match runtime.execute(cycles) {
            Event::Stopped => return Ok(output),
            Event::Error(error) => return Err(error),
            Event::Print(val) => output.push(val),
            Event::Running => {
                bursts += 1;
                assert!(bursts < 1000, "{} execution cycles exceeded", cycles * bursts);
            }
        }
    }
}
