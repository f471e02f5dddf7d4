use std::{
    fs,
    io::{self, Read},
    path::PathBuf,
    process::ExitCode,
    rc::Rc,
    sync::Once,
    time::Instant,
};

use clap::Parser;
use icss::{
    compile, display_error,
    errors::errors::Error,
    generator::generator::GeneratorOptions,
    lexer::lexer::tokenize,
    parser::parser::parse,
    type_checker::type_checker::type_check,
};
use tracing::debug;

#[derive(Parser, Debug)]
#[command(name = "icssc", version, about = "Compiles ICSS stylesheets to CSS")]
struct Cli {
    /// Path to the .icss file; reads stdin if omitted
    file: Option<PathBuf>,

    /// Where to write the generated CSS; stdout if omitted
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Only type check, do not evaluate or generate
    #[arg(long, default_value_t = false)]
    check: bool,

    /// Spaces before each declaration in the output
    #[arg(long, default_value_t = 2)]
    indent: usize,
}

static TRACING_INIT: Once = Once::new();

/// Enable with `RUST_LOG=icss=debug` or `RUST_LOG=icss=trace`.
fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true).with_writer(io::stderr))
                .with(EnvFilter::from_default_env())
                .init();
        }
    });
}

fn report(errors: &[Error], source: &str) -> ExitCode {
    for error in errors {
        eprint!("{}", display_error(error, source));
    }
    eprintln!("{} error(s) found", errors.len());

    ExitCode::FAILURE
}

fn check_only(source: String, file_name: String) -> Result<(), Vec<Error>> {
    let tokens = tokenize(source, Some(file_name.clone())).map_err(|error| vec![error])?;
    let mut ast = parse(tokens, Rc::new(file_name)).map_err(|error| vec![error])?;

    type_check(&mut ast);

    if ast.has_errors() {
        return Err(ast.collect_errors().into_iter().cloned().collect());
    }

    Ok(())
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    let (source, file_name) = match &cli.file {
        Some(path) => match fs::read_to_string(path) {
            Ok(source) => (source, path.to_string_lossy().to_string()),
            Err(error) => {
                eprintln!("Failed to read {}: {}", path.display(), error);
                return ExitCode::FAILURE;
            }
        },
        None => {
            let mut buf = String::new();
            if let Err(error) = io::stdin().read_to_string(&mut buf) {
                eprintln!("Failed to read stdin: {}", error);
                return ExitCode::FAILURE;
            }
            (buf, String::from("stdin"))
        }
    };

    let start = Instant::now();

    if cli.check {
        if let Err(errors) = check_only(source.clone(), file_name) {
            return report(&errors, &source);
        }
        debug!(elapsed = ?start.elapsed(), "checked");
        return ExitCode::SUCCESS;
    }

    let options = GeneratorOptions { indent: cli.indent };
    let css = match compile(source.clone(), Some(file_name), &options) {
        Ok(css) => css,
        Err(errors) => return report(&errors, &source),
    };

    debug!(elapsed = ?start.elapsed(), "compiled");

    match &cli.output {
        Some(path) => {
            if let Err(error) = fs::write(path, css) {
                eprintln!("Failed to write {}: {}", path.display(), error);
                return ExitCode::FAILURE;
            }
        }
        None => print!("{}", css),
    }

    ExitCode::SUCCESS
}
