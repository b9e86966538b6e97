use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of the environments in texa-render.
// Build scripts can't depend on the library being built alongside them.
const ENVIRONMENTS: &[&str] = &["server", "client"];

fn input_arg() -> Arg {
    Arg::new("input")
        .help("Input document, or '-' for stdin")
        .required(true)
        .index(1)
        .value_hint(ValueHint::FilePath)
}

fn env_arg() -> Arg {
    Arg::new("env")
        .long("env")
        .help("Rendering environment")
        .value_parser(clap::builder::PossibleValuesParser::new(ENVIRONMENTS))
}

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = Command::new("texa")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Render Texa documents to HTML")
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("render")
                .arg(input_arg())
                .arg(env_arg())
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .value_hint(ValueHint::FilePath),
                )
                .arg(Arg::new("standalone").long("standalone").action(ArgAction::SetTrue))
                .arg(Arg::new("title").long("title"))
                .arg(Arg::new("toc").long("toc").action(ArgAction::SetTrue))
                .arg(
                    Arg::new("no-copy-buttons")
                        .long("no-copy-buttons")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(Command::new("outline").arg(input_arg()).arg(env_arg()))
        .subcommand(Command::new("fonts"))
        .subcommand(Command::new("generate-css"));

    generate_to(Bash, &mut cmd, "texa", &outdir)?;
    generate_to(Zsh, &mut cmd, "texa", &outdir)?;
    generate_to(Fish, &mut cmd, "texa", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
