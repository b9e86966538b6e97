// Command-line interface for texa
//
// Renders Texa documents (Markdown with custom tags) to HTML using the texa-render crate.
// Configuration comes from the embedded defaults, an optional texa.toml in the working
// directory and an explicit --config file, in that order; command-line flags win over all.
//
// Usage:
//  texa <input> [--env server|client] [-o <file>] [--standalone]   - Render (default)
//  texa render <input> ...                                         - Same as above (explicit)
//  texa outline <input>                                            - Headings as JSON
//  texa fonts                                                      - Registered <font> keys
//  texa generate-css                                               - Stylesheet for export
//
// Extra Parameters:
//
// Configuration keys can be overridden with --extra-<name> <value>, e.g.
//  texa doc.md --extra-anchor-offset 4rem --extra-copy-buttons false

use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use std::collections::HashMap;
use std::fs;
use std::io::{self, Read};
use texa_config::{Loader, TexaConfig, LOCAL_CONFIG_FILE};
use texa_render::{
    stylesheet, Environment, ExportOptions, FontRegistry, RenderOptions, Renderer,
};

const SUBCOMMANDS: &[&str] = &["render", "outline", "fonts", "generate-css", "help"];

/// Parse extra-* arguments from command line args
/// Returns (cleaned_args_without_extras, extra_params_map)
///
/// Supports both:
/// - `--extra-<key> <value>` (explicit value)
/// - `--extra-<key>` (boolean flag, defaults to "true")
fn parse_extra_args(args: &[String]) -> (Vec<String>, HashMap<String, String>) {
    let mut cleaned_args = Vec::new();
    let mut extra_params = HashMap::new();
    let mut i = 0;

    while i < args.len() {
        let arg = &args[i];

        if let Some(key) = arg.strip_prefix("--extra-") {
            let has_value = args
                .get(i + 1)
                .is_some_and(|next| !next.starts_with("--"));

            if has_value {
                extra_params.insert(key.to_string(), args[i + 1].clone());
                i += 2;
            } else {
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
        .help("Rendering environment (overrides render.environment)")
        .long_help(
            "Where the HTML will be displayed.\n\n\
            server: math and mermaid blocks stay as code for client-side hydration\n\
            client: math is rendered to MathML and diagrams are wrapped for mermaid.js",
        )
        .value_parser(clap::value_parser!(Environment))
}

fn build_cli() -> Command {
    Command::new("texa")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Render Texa documents to HTML")
        .long_about(
            "texa renders Markdown extended with Texa's custom tags (<tex>, <math>,\n\
            <mermaid>, <center>, <font>, <tbl>, <newpage/>, <bi-*>) to HTML.\n\n\
            Examples:\n  \
            texa notes.md                          # Render a fragment to stdout\n  \
            texa notes.md --env client             # Render math in place\n  \
            texa notes.md --standalone -o out.html # Full HTML document\n  \
            cat notes.md | texa -                  # Read from stdin\n  \
            texa outline notes.md                  # Table of contents as JSON",
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a texa.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log pipeline activity to stderr")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("render")
                .about("Render a document to HTML (default command)")
                .arg(input_arg())
                .arg(env_arg())
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file path (defaults to stdout)")
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("standalone")
                        .long("standalone")
                        .help("Wrap the output in a complete HTML document")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("title")
                        .long("title")
                        .help("Document title for --standalone (overrides export.title)"),
                )
                .arg(
                    Arg::new("toc")
                        .long("toc")
                        .help("Prepend a table of contents for --standalone")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("no-copy-buttons")
                        .long("no-copy-buttons")
                        .help("Do not emit copy buttons before code blocks")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("outline")
                .about("Print the document's headings and anchor slugs as JSON")
                .arg(input_arg())
                .arg(env_arg()),
        )
        .subcommand(Command::new("fonts").about("List the fonts available to <font KEY> tags"))
        .subcommand(
            Command::new("generate-css")
                .about("Output the stylesheet embedded by --standalone")
                .long_about(
                    "Outputs the stylesheet used for standalone export, including one rule\n\
                    per registered font. Save it and pass the customised copy through\n\
                    export.custom_css to extend the defaults.",
                ),
        )
}

/// Inject "render" when the first argument is an input rather than a subcommand.
fn with_default_subcommand(args: &[String]) -> Option<Vec<String>> {
    let first = args.get(1)?;
    let is_input = first == "-" || !first.starts_with('-');
    if !is_input || SUBCOMMANDS.contains(&first.as_str()) {
        return None;
    }
    let mut injected = vec![args[0].clone(), "render".to_string()];
    injected.extend_from_slice(&args[1..]);
    Some(injected)
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let (cleaned_args, mut extra_params) = parse_extra_args(&args);

    let cli = build_cli();
    let matches = match cli.clone().try_get_matches_from(&cleaned_args) {
        Ok(m) => m,
        Err(e) => match with_default_subcommand(&cleaned_args) {
            Some(injected) => match cli.try_get_matches_from(&injected) {
                Ok(m) => m,
                Err(e2) => e2.exit(),
            },
            None => e.exit(),
        },
    };

    init_logging(matches.get_flag("verbose"));

    let mut config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));
    apply_config_overrides(&mut config, &mut extra_params);
    for key in extra_params.keys() {
        log::warn!("ignoring unknown parameter --extra-{key}");
    }

    match matches.subcommand() {
        Some(("render", sub_matches)) => {
            apply_render_flags(&mut config, sub_matches);
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            let standalone = sub_matches.get_flag("standalone");
            handle_render_command(input, output, standalone, &config);
        }
        Some(("outline", sub_matches)) => {
            if let Some(environment) = sub_matches.get_one::<Environment>("env") {
                config.render.environment = *environment;
            }
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            handle_outline_command(input, &config);
        }
        Some(("fonts", _)) => handle_fonts_command(),
        Some(("generate-css", _)) => handle_generate_css_command(),
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

fn apply_render_flags(config: &mut TexaConfig, matches: &ArgMatches) {
    if let Some(environment) = matches.get_one::<Environment>("env") {
        config.render.environment = *environment;
    }
    if matches.get_flag("no-copy-buttons") {
        config.render.copy_buttons = false;
    }
    if let Some(title) = matches.get_one::<String>("title") {
        config.export.title = title.clone();
    }
    if matches.get_flag("toc") {
        config.export.include_toc = true;
    }
}

fn read_source(input: &str) -> String {
    if input == "-" {
        let mut source = String::new();
        io::stdin().read_to_string(&mut source).unwrap_or_else(|e| {
            eprintln!("Error reading stdin: {e}");
            std::process::exit(1);
        });
        return source;
    }

    fs::read_to_string(input).unwrap_or_else(|e| {
        eprintln!("Error reading file '{input}': {e}");
        std::process::exit(1);
    })
}

/// Handle the render command
fn handle_render_command(input: &str, output: Option<&str>, standalone: bool, config: &TexaConfig) {
    let source = read_source(input);
    let renderer = Renderer::new(RenderOptions::from(config));
    log::debug!("rendering '{input}' for the {} environment", renderer.environment());

    let result = if standalone {
        renderer.render_document(&source, &ExportOptions::from(&config.export))
    } else {
        renderer.try_render(&source)
    };
    let html = result.unwrap_or_else(|e| {
        eprintln!("Render error: {e}");
        std::process::exit(1);
    });

    match output {
        Some(path) => {
            fs::write(path, html).unwrap_or_else(|e| {
                eprintln!("Error writing file '{path}': {e}");
                std::process::exit(1);
            });
        }
        None => print!("{html}"),
    }
}

/// Handle the outline command
fn handle_outline_command(input: &str, config: &TexaConfig) {
    let source = read_source(input);
    let renderer = Renderer::new(RenderOptions::from(config));

    let entries = renderer.outline(&source).unwrap_or_else(|e| {
        eprintln!("Render error: {e}");
        std::process::exit(1);
    });
    let json = serde_json::to_string_pretty(&entries).unwrap_or_else(|e| {
        eprintln!("Serialization error: {e}");
        std::process::exit(1);
    });
    println!("{json}");
}

/// Handle the fonts command
fn handle_fonts_command() {
    println!("Available fonts:\n");
    for font in FontRegistry::global().fonts() {
        println!(
            "  {:<12} {:<18} {}",
            font.key, font.css_class, font.display_name
        );
    }
    println!("\nUsage: <font KEY>text</font>");
}

/// Handle the generate-css command
fn handle_generate_css_command() {
    print!("{}", stylesheet());
}

fn load_cli_config(explicit_path: Option<&str>) -> TexaConfig {
    let loader = Loader::new().with_optional_file(LOCAL_CONFIG_FILE);
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };

    loader.build().unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {err}");
        std::process::exit(1);
    })
}

fn apply_config_overrides(config: &mut TexaConfig, extra_params: &mut HashMap<String, String>) {
    if let Some(raw) = take_override(extra_params, &["env", "environment"]) {
        config.render.environment = raw.parse().unwrap_or_else(|e| {
            eprintln!("Invalid value for --extra-env: {e}");
            std::process::exit(1);
        });
    }
    if let Some(raw) = take_override(extra_params, &["copy-buttons"]) {
        config.render.copy_buttons = parse_bool_arg("copy-buttons", &raw);
    }
    if let Some(raw) = take_override(extra_params, &["anchor-offset"]) {
        config.render.anchor_offset = raw;
    }
    if let Some(raw) = take_override(extra_params, &["fallback-message"]) {
        config.render.fallback_message = raw;
    }
    if let Some(raw) = take_override(extra_params, &["title"]) {
        config.export.title = raw;
    }
    if let Some(raw) = take_override(extra_params, &["toc"]) {
        config.export.include_toc = parse_bool_arg("toc", &raw);
    }
    if let Some(raw) = take_override(extra_params, &["stylesheet"]) {
        config.export.include_stylesheet = parse_bool_arg("stylesheet", &raw);
    }
    if let Some(path) = take_override(extra_params, &["css", "css-path"]) {
        let css = fs::read_to_string(&path).unwrap_or_else(|e| {
            eprintln!("Error reading stylesheet '{path}': {e}");
            std::process::exit(1);
        });
        config.export.custom_css = Some(css);
    }
}

fn take_override(map: &mut HashMap<String, String>, keys: &[&str]) -> Option<String> {
    for key in keys {
        if let Some(value) = map.remove(*key) {
            return Some(value);
        }
    }
    None
}

fn parse_bool_arg(flag: &str, raw: &str) -> bool {
    match raw.to_lowercase().as_str() {
        "true" | "1" | "yes" | "y" => true,
        "false" | "0" | "no" | "n" => false,
        other => {
            eprintln!("Invalid boolean value '{other}' for --extra-{flag}");
            std::process::exit(1);
        }
    }
}
