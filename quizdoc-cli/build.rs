use clap::{Arg, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of the format names registered in quizdoc-babel's default registry.
// We need to duplicate this here since build scripts can't access src/ modules.
const AVAILABLE_FORMATS: &[&str] = &["html", "runs", "markdown", "treeviz"];

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = Command::new("quizdoc")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for converting and inspecting assessment question content")
        .arg_required_else_help(true)
        .arg(
            Arg::new("input")
                .help("Path to the content file")
                .required(true)
                .index(1)
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("to")
                .long("to")
                .help("Target format")
                .value_parser(clap::builder::PossibleValuesParser::new(AVAILABLE_FORMATS))
                .value_hint(ValueHint::Other),
        )
        .arg(
            Arg::new("from")
                .long("from")
                .help("Source format (auto-detected from file extension if not specified)")
                .value_parser(clap::builder::PossibleValuesParser::new(AVAILABLE_FORMATS))
                .value_hint(ValueHint::Other),
        );

    // Generate completions for bash
    generate_to(Bash, &mut cmd, "quizdoc", &outdir)?;

    // Generate completions for zsh
    generate_to(Zsh, &mut cmd, "quizdoc", &outdir)?;

    // Generate completions for fish
    generate_to(Fish, &mut cmd, "quizdoc", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
