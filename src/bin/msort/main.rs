use std::env;

pub mod args;
mod sort_main;

fn main() {
    let argv: Vec<String> = env::args().collect();
    match sort_main::main(&argv) {
        Err(e) => {
            if e.suppress() {
                std::process::exit(0);
            }
            if e.silent() {
                std::process::exit(1);
            }
            if e.is_usage() {
                eprint!("{}", e);
                std::process::exit(2);
            }
            eprintln!("Error\t{}", e);
            eprint!("Command\t");
            for x in &argv {
                eprint!("{} ", x);
            }
            eprintln!();
            std::process::exit(1);
        }
        Ok(()) => {
            std::process::exit(0);
        }
    }
}
