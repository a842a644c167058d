use std::{env, process, time::Instant};

use rpn::{errors::errors::Error, format_tokens, lexer::lexer::tokenize, parser::parser::to_rpn, render_error};

const SAMPLES: [&str; 3] = ["(432.3 + 5) * x - 32.572", "5 + (3 - 7) * 10", "2 ^ 3 ^ 2"];

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();

    let inputs: Vec<String> = if args.is_empty() {
        SAMPLES.iter().map(|sample| sample.to_string()).collect()
    } else {
        vec![args.join(" ")]
    };

    let mut failed = false;
    for input in inputs {
        if !run(&input) {
            failed = true;
        }
    }

    if failed {
        process::exit(1);
    }
}

fn run(input: &str) -> bool {
    println!("Input: {}", input);

    let start = Instant::now();
    let tokens = match tokenize(input) {
        Ok(tokens) => tokens,
        Err(error) => {
            println!("{}", render_error(&Error::from(error), input));
            return false;
        }
    };

    println!("Tokenized in {:?}", start.elapsed());
    for token in &tokens {
        println!("  {}", token);
    }

    let convert_start = Instant::now();
    let rpn = match to_rpn(tokens) {
        Ok(rpn) => rpn,
        Err(error) => {
            println!("{}", render_error(&Error::from(error), input));
            return false;
        }
    };

    println!("Converted in {:?}", convert_start.elapsed());
    println!("RPN: {}", format_tokens(&rpn));
    println!("Total time: {:?}", start.elapsed());
    println!();

    true
}
