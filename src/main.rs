use std::{
    env, fs,
    io::{self, BufRead, Write},
    path::PathBuf,
    process::ExitCode,
};

use c_analyzer::{analyze, config::LanguageConfig, display_error, driver::LineBuffer};

struct Options {
    config: LanguageConfig,
    file: Option<PathBuf>,
    show_tokens: bool,
    show_tree: bool,
    words: Vec<String>,
}

fn usage(program: &str) -> String {
    format!(
        "Usage: {} [--tokens] [--tree] [--no-exponents] [--no-unary-minus] [-f <file> | <source>...]",
        program
    )
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Options, String> {
    let program = args.next().unwrap_or_else(|| String::from("c_analyzer"));

    let mut options = Options {
        config: LanguageConfig::default(),
        file: None,
        show_tokens: false,
        show_tree: false,
        words: vec![],
    };

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--tokens" => options.show_tokens = true,
            "--tree" => options.show_tree = true,
            "--no-exponents" => options.config = options.config.with_exponent_literals(false),
            "--no-unary-minus" => options.config = options.config.with_unary_minus(false),
            "-f" | "--file" => match args.next() {
                Some(path) => options.file = Some(PathBuf::from(path)),
                None => return Err(usage(&program)),
            },
            "-h" | "--help" => return Err(usage(&program)),
            _ => options.words.push(arg),
        }
    }

    Ok(options)
}

/// Analyzes one unit and prints tokens, diagnostics and the tree.
/// Returns whether the unit parsed.
fn process_unit(source: &str, file: Option<String>, options: &Options) -> bool {
    let analysis = analyze(source, file, &options.config);

    if options.show_tokens {
        println!("Tokens:");
        for token in &analysis.tokens {
            token.debug();
        }
    }

    for error in &analysis.diagnostics {
        display_error(error, source);
    }

    match &analysis.program {
        Some(program) => {
            println!("Valid input. Syntax tree:");
            if options.show_tree {
                println!("{:#?}", program);
            } else {
                println!("{}", program);
            }
            true
        }
        None => false,
    }
}

fn run_prompt(options: &Options) -> io::Result<()> {
    println!("Analyzer ready. Type 'exit' to quit.");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut buffer = LineBuffer::new();
    let mut lines = stdin.lock().lines();

    loop {
        if buffer.is_pending() {
            print!("... ");
        } else {
            print!("> ");
        }
        stdout.flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            None => break,
        };

        if !buffer.is_pending() && line.trim().eq_ignore_ascii_case("exit") {
            break;
        }

        if let Some(unit) = buffer.push_line(&line) {
            if !unit.trim().is_empty() {
                process_unit(&unit, None, options);
            }
            println!();
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    let options = match parse_args(env::args()) {
        Ok(options) => options,
        Err(usage) => {
            eprintln!("{}", usage);
            return ExitCode::from(2);
        }
    };

    if let Some(path) = &options.file {
        let source = match fs::read_to_string(path) {
            Ok(source) => source,
            Err(error) => {
                eprintln!("Failed to read file {}: {}", path.display(), error);
                return ExitCode::FAILURE;
            }
        };

        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned());

        return if process_unit(&source, file_name, &options) {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        };
    }

    if !options.words.is_empty() {
        let source = options.words.join(" ");
        return if process_unit(&source, None, &options) {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        };
    }

    match run_prompt(&options) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("Failed to read input: {}", error);
            ExitCode::FAILURE
        }
    }
}
