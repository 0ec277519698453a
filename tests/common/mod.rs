#![allow(dead_code)]

use doggo::lang::{lex, Dialect};
use doggo::mach::{compile, Event, Runtime};

pub fn exec(source: &str) -> String {
    exec_dialect(source, Dialect::English)
}

pub fn exec_doggo(source: &str) -> String {
    exec_dialect(source, Dialect::Doggo)
}

pub fn exec_dialect(source: &str, dialect: Dialect) -> String {
    let program = match compile(lex(source), dialect) {
        Ok(program) => program,
        Err(error) => return format!("?{}\n", error),
    };
    exec_n(&mut Runtime::new(program), 100_000)
}

pub fn exec_n(runtime: &mut Runtime, cycles: usize) -> String {
    let mut s = String::new();
    let mut prev_running = false;
    loop {
        let event = runtime.execute(cycles);
        match &event {
            Event::Stopped => {
                break;
            }
            Event::Error(error) => {
                s.push_str(&format!("?{}\n", error));
                break;
            }
            Event::Running => {
                if prev_running {
                    s.push_str(&format!("\n{} Execution cycles exceeded.\n", cycles));
                    break;
                }
            }
            Event::Print(val) => {
                s.push_str(&format!("{}\n", val));
            }
        }
        prev_running = matches!(event, Event::Running);
    }
    s
}
