//! Command-line interface implementation

use clap::{Parser, Subcommand, ValueEnum};
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use crate::advisor::{explain_trait, list_traits, suggest_traits, TraitExplanation};
use crate::detect::Format;
use crate::diagnostics::Diagnostic;
use crate::parser::{parse_with_options, ParseOptions};
use crate::validator::{validate, ValidateOptions};

/// Exit codes
const EXIT_SUCCESS: u8 = 0;
const EXIT_ERROR: u8 = 1;
const EXIT_INVALID_ARGS: u8 = 2;

/// HoloScript - parse, validate, and explore HoloScript scene code
#[derive(Parser)]
#[command(name = "holo")]
#[command(about = "HoloScript - parse, validate, and explore HoloScript scene code")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Dialect override for `parse`.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum FormatArg {
    Composition,
    ObjectLiteral,
    ObjectLiteralTraits,
}

impl From<FormatArg> for Format {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Composition => Format::Composition,
            FormatArg::ObjectLiteral => Format::ObjectLiteral,
            FormatArg::ObjectLiteralTraits => Format::ObjectLiteralTraits,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse a HoloScript file into an AST and report diagnostics
    Parse {
        /// Input file containing HoloScript source
        input: PathBuf,

        /// Dialect override; auto-detected when omitted
        #[arg(long, value_enum)]
        format: Option<FormatArg>,

        /// Stop at the first structural error instead of extracting a
        /// best-effort AST
        #[arg(long)]
        strict: bool,

        /// Emit the full parse result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Validate a HoloScript file against the trait/geometry vocabulary
    Validate {
        /// Input file containing HoloScript source
        input: PathBuf,

        /// Suppress warnings in the output
        #[arg(long)]
        no_warnings: bool,

        /// Suppress "did you mean" suggestions and fixes
        #[arg(long)]
        no_suggestions: bool,

        /// Emit the validation result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show documentation for a trait
    Explain {
        /// Trait name, with or without the @ sigil
        trait_name: String,

        /// Emit the documentation as JSON
        #[arg(long)]
        json: bool,
    },

    /// List known traits, optionally restricted to one category
    Traits {
        /// Category name (e.g. "interaction"); all categories when omitted
        category: Option<String>,

        /// Emit the listing as JSON
        #[arg(long)]
        json: bool,
    },

    /// Suggest traits for a free-text object description
    Suggest {
        /// Object description
        description: String,

        /// Additional context
        #[arg(short, long)]
        context: Option<String>,

        /// Emit the suggestion as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Run the CLI application
pub fn run() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Commands::Parse { input, format, strict, json } => {
            run_parse(&input, format.map(Format::from), strict, json)
        }
        Commands::Validate { input, no_warnings, no_suggestions, json } => {
            run_validate(&input, no_warnings, no_suggestions, json)
        }
        Commands::Explain { trait_name, json } => run_explain(&trait_name, json),
        Commands::Traits { category, json } => run_traits(category.as_deref(), json),
        Commands::Suggest { description, context, json } => {
            run_suggest(&description, context.as_deref(), json)
        }
    }
}

fn read_source(input: &PathBuf) -> Result<String, ExitCode> {
    fs::read_to_string(input).map_err(|e| {
        eprintln!("Error: Cannot read input file '{}': {}", input.display(), e);
        ExitCode::from(EXIT_INVALID_ARGS)
    })
}

fn print_diagnostic(diag: &Diagnostic) {
    if diag.column > 0 {
        eprintln!("{}:{} {} {}: {}", diag.line, diag.column, diag.severity, diag.code, diag.message);
    } else {
        eprintln!("{} {} {}: {}", diag.line, diag.severity, diag.code, diag.message);
    }
    if let Some(context) = &diag.context {
        eprintln!("    | {}", context);
    }
    if let Some(suggestion) = &diag.suggestion {
        eprintln!("    = {}", suggestion);
    }
}

fn run_parse(input: &PathBuf, hint: Option<Format>, strict: bool, json: bool) -> ExitCode {
    let source = match read_source(input) {
        Ok(source) => source,
        Err(code) => return code,
    };

    let result = parse_with_options(&source, hint, ParseOptions { best_effort: !strict });

    if json {
        println!("{}", serde_json::to_string_pretty(&result).expect("result serializes"));
    } else {
        for diag in result.errors.iter().chain(result.warnings.iter()) {
            print_diagnostic(diag);
        }
        println!("format: {}", result.detected_format);
        println!("objects: {}", result.object_names.join(", "));
        println!("traits: {}", result.trait_names.join(", "));
    }

    if result.success {
        ExitCode::from(EXIT_SUCCESS)
    } else {
        ExitCode::from(EXIT_ERROR)
    }
}

fn run_validate(input: &PathBuf, no_warnings: bool, no_suggestions: bool, json: bool) -> ExitCode {
    let source = match read_source(input) {
        Ok(source) => source,
        Err(code) => return code,
    };

    let options = ValidateOptions {
        include_warnings: !no_warnings,
        include_suggestions: !no_suggestions,
    };
    let result = validate(&source, &options);

    if json {
        println!("{}", serde_json::to_string_pretty(&result).expect("result serializes"));
    } else {
        for diag in result.errors.iter().chain(result.warnings.iter()) {
            print_diagnostic(diag);
        }
        println!("{}", result.summary);
    }

    if result.valid {
        ExitCode::from(EXIT_SUCCESS)
    } else {
        ExitCode::from(EXIT_ERROR)
    }
}

fn run_explain(trait_name: &str, json: bool) -> ExitCode {
    let explanation = explain_trait(trait_name);

    if json {
        println!("{}", serde_json::to_string_pretty(&explanation).expect("doc serializes"));
        return match explanation {
            TraitExplanation::Doc(_) => ExitCode::from(EXIT_SUCCESS),
            TraitExplanation::Unknown { .. } => ExitCode::from(EXIT_ERROR),
        };
    }

    match explanation {
        TraitExplanation::Doc(doc) => {
            println!("{} ({})", doc.name, doc.category);
            println!("  {}", doc.description);
            if !doc.parameters.is_empty() {
                println!("  parameters:");
                for param in doc.parameters {
                    println!(
                        "    {}: {} (default: {})",
                        param.name, param.type_name, param.default_value
                    );
                }
            }
            if !doc.events.is_empty() {
                println!("  events: {}", doc.events.join(", "));
            }
            if !doc.related.is_empty() {
                println!("  related: {}", doc.related.join(", "));
            }
            println!("\nexample:\n{}", doc.example);
            ExitCode::from(EXIT_SUCCESS)
        }
        TraitExplanation::Unknown { trait_name, suggestions, .. } => {
            eprintln!("Unknown trait: {}", trait_name);
            if !suggestions.is_empty() {
                eprintln!("Did you mean: {}?", suggestions.join(", "));
            }
            ExitCode::from(EXIT_ERROR)
        }
    }
}

fn run_traits(category: Option<&str>, json: bool) -> ExitCode {
    match list_traits(category) {
        Ok(categories) => {
            if json {
                let map: serde_json::Map<String, serde_json::Value> = categories
                    .iter()
                    .map(|(name, traits)| {
                        (name.to_string(), serde_json::json!(traits))
                    })
                    .collect();
                println!(
                    "{}",
                    serde_json::to_string_pretty(&serde_json::Value::Object(map))
                        .expect("listing serializes")
                );
            } else {
                for (name, traits) in categories {
                    println!("{}:", name);
                    for trait_name in traits {
                        println!("  {}", trait_name);
                    }
                }
            }
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(err) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&err).expect("error serializes"));
            } else {
                eprintln!("{}", err);
                eprintln!("Valid categories: {}", err.valid_categories.join(", "));
            }
            ExitCode::from(EXIT_ERROR)
        }
    }
}

fn run_suggest(description: &str, context: Option<&str>, json: bool) -> ExitCode {
    let suggestion = suggest_traits(description, context);

    if json {
        println!("{}", serde_json::to_string_pretty(&suggestion).expect("suggestion serializes"));
    } else {
        for reason in &suggestion.reasoning {
            println!("{}: {}", reason.trait_name, reason.reason);
        }
        println!("confidence: {:.2}", suggestion.confidence);
    }
    ExitCode::from(EXIT_SUCCESS)
}
