use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use codespan_reporting::files::SimpleFiles;
use codespan_reporting::term::termcolor::{ColorChoice, StandardStream};
use colored::Colorize;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

mod aggregate;
mod bindings;
mod error;
mod generator;
mod postprocess;
mod scan;
mod subst;
mod validate;

use crate::bindings::{parse_typeset_args, TypeSet};
use crate::error::{DiagnosticError, MonogoError};
use crate::generator::{GenerateOptions, Generator};
use crate::postprocess::GoimportsNormalizer;
use crate::scan::Scanner;
use crate::validate::Validator;

#[derive(Parser)]
#[command(name = "monogo")]
#[command(author, version, about = "A generics code generator for Go templates", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate specialized source from a template
    Gen {
        /// The template file to specialize
        #[arg(short = 'i', long = "in")]
        input: PathBuf,

        /// Output file (stdout if omitted)
        #[arg(short = 'o', long = "out")]
        output: Option<PathBuf>,

        /// Override the package name of the generated file
        #[arg(long)]
        pkg: Option<String>,

        /// Extra import path to inject (repeatable)
        #[arg(long = "imp")]
        import_paths: Vec<String>,

        /// Strip build-tag lines carrying this tag
        #[arg(long)]
        tag: Option<String>,

        /// Normalize with an external goimports binary instead of the
        /// built-in formatter
        #[arg(long)]
        goimports: bool,

        /// Typeset arguments, e.g. "NumberType=int" or
        /// "FirstType=Person:person.Person SecondType=Dog:pet.Dog"
        #[arg(required = true)]
        typesets: Vec<String>,
    },

    /// Check a template against typeset arguments without generating
    Check {
        /// The template file to check
        #[arg(short = 'i', long = "in")]
        input: PathBuf,

        /// Dump the structural token stream to stdout
        #[arg(long)]
        dump_tokens: bool,

        /// Typeset arguments
        #[arg(required = true)]
        typesets: Vec<String>,
    },
}

fn main() -> Result<()> {
    // Initialize logger before parsing CLI args
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    if cli.verbose {
        log::set_max_level(log::LevelFilter::Debug);
    }

    let result = match cli.command {
        Commands::Gen {
            input,
            output,
            pkg,
            import_paths,
            tag,
            goimports,
            typesets,
        } => gen(input, output, pkg, import_paths, tag, goimports, typesets, cli.verbose),
        Commands::Check {
            input,
            dump_tokens,
            typesets,
        } => check(input, dump_tokens, typesets),
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}

/// Parse every typeset argument and concatenate the expanded sets in
/// argument order.
fn collect_typesets(args: &[String]) -> Result<Vec<TypeSet>, MonogoError> {
    let mut typesets = Vec::new();
    for arg in args {
        typesets.extend(parse_typeset_args(arg)?);
    }
    Ok(typesets)
}

/// Render a generator error against the template source, with source
/// spans where the error carries them.
fn report_error(input: &PathBuf, source: &str, error: MonogoError) -> Result<()> {
    let mut files = SimpleFiles::new();
    let file_id = files.add(input.display().to_string(), source.to_string());
    let diagnostic = DiagnosticError::new(error, file_id).to_diagnostic();

    let writer = StandardStream::stderr(ColorChoice::Always);
    let config = codespan_reporting::term::Config::default();
    codespan_reporting::term::emit(&mut writer.lock(), &config, &files, &diagnostic)?;
    anyhow::bail!("generation failed")
}

fn gen(
    input: PathBuf,
    output: Option<PathBuf>,
    pkg: Option<String>,
    import_paths: Vec<String>,
    tag: Option<String>,
    goimports: bool,
    typeset_args: Vec<String>,
    verbose: bool,
) -> Result<()> {
    if verbose {
        println!(
            "{}: Specializing {:?}",
            "info".blue().bold(),
            input
        );
    }

    let template = fs::read_to_string(&input)
        .with_context(|| format!("Failed to read template file: {:?}", input))?;

    let typesets = match collect_typesets(&typeset_args) {
        Ok(typesets) => typesets,
        Err(e) => return report_error(&input, &template, e),
    };

    let options = GenerateOptions {
        pkg_name: pkg,
        import_paths,
        strip_tag: tag,
    };
    let generator = if goimports {
        Generator::with_normalizer(options, Box::new(GoimportsNormalizer::new()))
    } else {
        Generator::new(options)
    };

    let filename = input.display().to_string();
    let generated = match generator.generate(&filename, &template, &typesets) {
        Ok(generated) => generated,
        Err(e) => return report_error(&input, &template, e),
    };

    match output {
        Some(path) => {
            fs::write(&path, &generated)
                .with_context(|| format!("Failed to write output file: {:?}", path))?;
            if verbose {
                println!("{}: Wrote {:?}", "info".blue().bold(), path);
            }
        }
        None => {
            io::stdout().write_all(&generated)?;
        }
    }

    Ok(())
}

fn check(input: PathBuf, dump_tokens: bool, typeset_args: Vec<String>) -> Result<()> {
    let template = fs::read_to_string(&input)
        .with_context(|| format!("Failed to read template file: {:?}", input))?;

    if dump_tokens {
        println!("{}", "=== Tokens ===".blue().bold());
        for t in Scanner::new(&template) {
            println!("{:?} @ {}..{}", t.token, t.span.start, t.span.end);
        }
    }

    let typesets = match collect_typesets(&typeset_args) {
        Ok(typesets) => typesets,
        Err(e) => return report_error(&input, &template, e),
    };

    let mut validator = match Validator::new(&template) {
        Ok(validator) => validator,
        Err(e) => return report_error(&input, &template, e.into()),
    };
    for typeset in &typesets {
        if let Err(e) = validator.validate(typeset) {
            return report_error(&input, &template, e);
        }
    }

    println!("{}: {:?} is a valid template", "ok".green().bold(), input);
    Ok(())
}
