// Command-line interface for quizdoc
//
// This binary provides commands for converting and inspecting assessment question content.
//
// The main role of the quizdoc program is to interface with question content files: converting
// between the storage markup, transcription dumps and preview formats, inspecting document
// trees, and generating fill-in-the-blank answer templates. The core capabilities live in the
// quizdoc-babel crate; this binary is a shell over that library.
//
// Converting:
//
// The conversion needs a to and from pair. The from can be auto-detected from the file
// extension, while being overwritable by an explicit --from flag.
// Usage:
//  quizdoc <input> --to <format> [--from <format>] [--output <file>]  - Convert between formats (default)
//  quizdoc convert <input> --to <format> [--from <format>] [--output <file>]  - Same as above (explicit)
//  quizdoc inspect <input> [--from <format>]     - Dump the document tree
//  quizdoc blanks <input> [--from <format>]      - Emit the answer-template payload
//
// Extra Parameters:
//
// Format-specific parameters can be passed using --extra-<parameter-name> <value>.
// The CLI layer strips the "extra-" prefix and passes the parameters to the format.
// Example:
//  quizdoc q.html --to html --extra-display --extra-blank-width 8

use clap::{Arg, Command, ValueHint};
use quizdoc_babel::blanks::AnswerSlots;
use quizdoc_babel::formats::html::{HtmlFormat, HtmlOptions};
use quizdoc_babel::formats::markdown::MarkdownFormat;
use quizdoc_babel::formats::runs::RunsFormat;
use quizdoc_babel::formats::treeviz::TreevizFormat;
use quizdoc_babel::{Format, FormatRegistry};
use quizdoc_config::{Loader, QuizdocConfig};
use std::collections::HashMap;
use std::fs;

/// Parse extra-* arguments from command line args
/// Returns (cleaned_args_without_extras, extra_params_map)
///
/// Supports both:
/// - `--extra-<key> <value>` (explicit value)
/// - `--extra-<key>` (boolean flag, defaults to "true")
/// - `--extras-<key>` (alias for `--extra-<key>`)
fn parse_extra_args(args: &[String]) -> (Vec<String>, HashMap<String, String>) {
    let mut cleaned_args = Vec::new();
    let mut extra_params = HashMap::new();
    let mut i = 0;

    while i < args.len() {
        let arg = &args[i];

        let key_opt = if let Some(key) = arg.strip_prefix("--extra-") {
            Some(key)
        } else {
            arg.strip_prefix("--extras-")
        };

        if let Some(key) = key_opt {
            // Found an extra-* argument
            // Check if the next arg is a value or another flag/end
            let has_value = if i + 1 < args.len() {
                let next = &args[i + 1];
                !next.starts_with('-') && !next.starts_with("--")
            } else {
                false
            };

            if has_value {
                // Explicit value provided
                extra_params.insert(key.to_string(), args[i + 1].clone());
                i += 2; // Skip both the key and value
            } else {
                // No value, treat as boolean flag (default to "true")
                extra_params.insert(key.to_string(), "true".to_string());
                i += 1;
            }
            continue;
        }

        cleaned_args.push(arg.clone());
        i += 1;
    }

    (cleaned_args, extra_params)
}

fn build_cli() -> Command {
    Command::new("quizdoc")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for converting and inspecting assessment question content")
        .long_about(
            "quizdoc is a command-line tool for working with question content files.\n\n\
            Commands:\n  \
            - convert: Transform between content formats (html, runs, markdown, treeviz)\n  \
            - inspect: View the document tree of a content file\n  \
            - blanks:  Emit the fill-in-the-blank answer template for a question\n\n\
            Extra Parameters:\n  \
            Use --extra-<name> [value] to pass format-specific options.\n  \
            Boolean flags can omit the value (defaults to 'true').\n\n\
            Examples:\n  \
            quizdoc transcript.json --to html        # Transcription dump to storage markup\n  \
            quizdoc q.html --to markdown             # Preview a question as markdown\n  \
            quizdoc q.html --to html --extra-display # Render blanks as underscore glyphs\n  \
            quizdoc inspect q.html                   # View the document tree\n  \
            quizdoc blanks q.html                    # Answer-template JSON for the blanks",
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a quizdoc.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert between content formats (default command)")
                .long_about(
                    "Convert question content between different formats.\n\n\
                    Supported formats:\n  \
                    - html:     Storage markup with tagged math and blank spans (.html)\n  \
                    - runs:     Flat paragraph/run transcription JSON (.json)\n  \
                    - markdown: Markdown preview with TeX delimiters (.md)\n  \
                    - treeviz:  Document tree visualization\n\n\
                    The source format is auto-detected from the file extension.\n\
                    Output goes to stdout by default, or use -o to specify a file.\n\n\
                    Examples:\n  \
                    quizdoc convert transcript.json --to html       # Transcription to markup (stdout)\n  \
                    quizdoc convert q.html --to markdown -o q.md    # Markup to markdown file\n  \
                    quizdoc transcript.json --to html               # 'convert' is optional",
                )
                .arg(
                    Arg::new("input")
                        .help("Input file path")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("from")
                        .long("from")
                        .help("Source format (auto-detected from file extension if not specified)")
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("to")
                        .long("to")
                        .help("Target format (required)")
                        .required(true)
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file path (defaults to stdout)")
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("inspect")
                .about("Dump the document tree of a content file")
                .arg(
                    Arg::new("input")
                        .help("Input file path")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("from")
                        .long("from")
                        .help("Source format (auto-detected from file extension if not specified)")
                        .value_hint(ValueHint::Other),
                ),
        )
        .subcommand(
            Command::new("blanks")
                .about("Emit the fill-in-the-blank answer template for a question")
                .long_about(
                    "Parse a question and emit the ordered answer payload its blanks expect,\n\
                    as JSON. Ids are 1-based blank ordinals assigned by document position.\n\n\
                    A question with no blanks emits nothing: zero blanks means the question\n\
                    is unanswered, not answered with an empty list.",
                )
                .arg(
                    Arg::new("input")
                        .help("Input file path")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("from")
                        .long("from")
                        .help("Source format (auto-detected from file extension if not specified)")
                        .value_hint(ValueHint::Other),
                ),
        )
}

fn main() {
    // Try to parse args. If no subcommand is provided, inject "convert"
    let args: Vec<String> = std::env::args().collect();

    // Parse extra-* arguments before clap processing
    let (cleaned_args, extra_params) = parse_extra_args(&args);

    // First, try normal parsing with cleaned args
    let cli = build_cli();
    let matches = match cli.clone().try_get_matches_from(&cleaned_args) {
        Ok(m) => m,
        Err(e) => {
            // Check if this is a "missing subcommand" error by seeing if the first arg looks like a file
            if cleaned_args.len() > 1
                && !cleaned_args[1].starts_with('-')
                && cleaned_args[1] != "inspect"
                && cleaned_args[1] != "convert"
                && cleaned_args[1] != "blanks"
                && cleaned_args[1] != "help"
            {
                // Inject "convert" as the subcommand
                let mut new_args = vec![cleaned_args[0].clone(), "convert".to_string()];
                new_args.extend_from_slice(&cleaned_args[1..]);

                // Try parsing again with "convert" injected
                match cli.try_get_matches_from(&new_args) {
                    Ok(m) => m,
                    Err(e2) => e2.exit(),
                }
            } else {
                // Not a case where we should inject convert, show original error
                e.exit();
            }
        }
    };

    let config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));

    match matches.subcommand() {
        Some(("convert", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            let to = sub_matches.get_one::<String>("to").expect("to is required");
            let from = resolve_from_format(input, sub_matches.get_one::<String>("from"), &config);
            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            handle_convert_command(input, &from, to, output, &extra_params, &config);
        }
        Some(("inspect", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            let from = resolve_from_format(input, sub_matches.get_one::<String>("from"), &config);
            handle_inspect_command(input, &from, &config);
        }
        Some(("blanks", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            let from = resolve_from_format(input, sub_matches.get_one::<String>("from"), &config);
            handle_blanks_command(input, &from, &config);
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

/// Load the layered configuration, exiting with a message on failure.
fn load_cli_config(path: Option<&str>) -> QuizdocConfig {
    let loader = match path {
        Some(path) => Loader::new().with_file(path),
        None => Loader::new().with_optional_file("quizdoc.toml"),
    };
    loader.build().unwrap_or_else(|e| {
        eprintln!("Error loading configuration: {e}");
        std::process::exit(1);
    })
}

/// Build a registry whose formats carry the configured options.
fn build_registry(config: &QuizdocConfig) -> FormatRegistry {
    let mut registry = FormatRegistry::new();
    registry.register(HtmlFormat::new((&config.convert.html).into()));
    registry.register(RunsFormat);
    registry.register(MarkdownFormat::new((&config.convert.markdown).into()));
    registry.register(TreevizFormat);
    registry
}

/// Resolve the source format: explicit flag first, then file extension.
fn resolve_from_format(
    input: &str,
    from_arg: Option<&String>,
    config: &QuizdocConfig,
) -> String {
    if let Some(from) = from_arg {
        return from.to_string();
    }
    let registry = build_registry(config);
    match registry.detect_format_from_filename(input) {
        Some(detected) => detected,
        None => {
            eprintln!("Error: Could not detect format from filename '{input}'");
            eprintln!("Please specify --from explicitly");
            std::process::exit(1);
        }
    }
}

fn read_input(input: &str) -> String {
    fs::read_to_string(input).unwrap_or_else(|e| {
        eprintln!("Error reading file '{input}': {e}");
        std::process::exit(1);
    })
}

/// Handle the convert command
fn handle_convert_command(
    input: &str,
    from: &str,
    to: &str,
    output: Option<&str>,
    extra_params: &HashMap<String, String>,
    config: &QuizdocConfig,
) {
    let registry = build_registry(config);

    // Validate formats exist
    if let Err(e) = registry.get(from) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
    if let Err(e) = registry.get(to) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    let source = read_input(input);

    let doc = registry.parse(&source, from).unwrap_or_else(|e| {
        eprintln!("Error parsing '{input}' as {from}: {e}");
        std::process::exit(1);
    });

    let result = registry
        .serialize_with_options(&doc, to, extra_params)
        .unwrap_or_else(|e| {
            eprintln!("Error serializing to {to}: {e}");
            std::process::exit(1);
        });

    match output {
        Some(path) => {
            fs::write(path, &result).unwrap_or_else(|e| {
                eprintln!("Error writing file '{path}': {e}");
                std::process::exit(1);
            });
        }
        None => println!("{result}"),
    }
}

/// Handle the inspect command
fn handle_inspect_command(input: &str, from: &str, config: &QuizdocConfig) {
    let registry = build_registry(config);
    let source = read_input(input);

    let doc = registry.parse(&source, from).unwrap_or_else(|e| {
        eprintln!("Error parsing '{input}' as {from}: {e}");
        std::process::exit(1);
    });

    let viz = registry.serialize(&doc, "treeviz").unwrap_or_else(|e| {
        eprintln!("Error building tree view: {e}");
        std::process::exit(1);
    });
    print!("{viz}");

    if config.inspect.show_counts {
        println!("{} blocks, {} blanks", doc.children.len(), doc.count_blanks());
    }
}

/// Handle the blanks command
fn handle_blanks_command(input: &str, from: &str, config: &QuizdocConfig) {
    let source = read_input(input);

    // The answer template needs to see the blanks, so markup is parsed with
    // blank recognition on regardless of the configured default.
    let doc = if from == "html" {
        let mut options: HtmlOptions = (&config.convert.html).into();
        options.parse_blanks = true;
        HtmlFormat::new(options).parse(&source)
    } else {
        build_registry(config).parse(&source, from)
    }
    .unwrap_or_else(|e| {
        eprintln!("Error parsing '{input}' as {from}: {e}");
        std::process::exit(1);
    });

    let mut slots = AnswerSlots::new();
    slots.sync(Some(&doc));

    match slots.export() {
        Some(payload) => {
            let json = serde_json::to_string_pretty(&payload).unwrap_or_else(|e| {
                eprintln!("Error encoding answer template: {e}");
                std::process::exit(1);
            });
            println!("{json}");
        }
        None => {
            eprintln!("'{input}' has no blanks: the question exports no answer object");
        }
    }
}
