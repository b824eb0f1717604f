use std::{env, fs::read_to_string, process::exit, rc::Rc, time::Instant};

use frontend::{
    display_error, ensure_newline_at_end,
    lexer::lexer::tokenize,
    parser::parser::parse,
};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 || args.len() > 3 {
        eprintln!("usage: frontend <file> [--tokens]");
        exit(1);
    }

    let file_path = &args[1];
    let dump_tokens = args.len() == 3 && args[2] == "--tokens";

    let file_name = if file_path.contains('/') {
        file_path.split('/').last().unwrap()
    } else {
        file_path
    };

    let source = match read_to_string(file_path) {
        Ok(source) => source,
        Err(error) => {
            eprintln!("Failed to read {}: {}", file_path, error);
            exit(1);
        }
    };

    let start = Instant::now();

    let tokens = match tokenize(
        ensure_newline_at_end(source.clone()),
        Some(String::from(file_name)),
    ) {
        Ok(tokens) => tokens,
        Err(error) => {
            display_error(&error, &source);
            exit(1);
        }
    };

    println!("Tokenized in {:?}", start.elapsed());

    if dump_tokens {
        for token in &tokens {
            token.debug();
        }
    }

    let parse_start = Instant::now();

    let program = match parse(tokens, Rc::new(String::from(file_name))) {
        Ok(program) => program,
        Err(error) => {
            display_error(&error, &source);
            exit(1);
        }
    };

    println!("Parsed in {:?}", parse_start.elapsed());
    println!(
        "{} top-level statement(s):\n{:#?}",
        program.len(),
        program
    );
}
