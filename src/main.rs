use std::path::PathBuf;
use tessera::{DirHost, Options, Processor, Value, ValueMap};

fn main() {
    let config = match parse_args() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let processor = Processor::with_host(DirHost::new(config.roots)).with_options(Options {
        template_extension: config.extension,
        max_depth: config.max_depth,
    });

    match processor.render_page(&config.page, &config.values) {
        Ok(output) => println!("{output}"),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    }
}

struct CliConfig {
    page: String,
    roots: Vec<PathBuf>,
    values: ValueMap,
    extension: String,
    max_depth: usize,
}

fn parse_args() -> Result<CliConfig, String> {
    let defaults = Options::default();
    let mut page: Option<String> = None;
    let mut roots: Vec<PathBuf> = Vec::new();
    let mut values = ValueMap::new();
    let mut extension = defaults.template_extension;
    let mut max_depth = defaults.max_depth;
    let mut args = std::env::args().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("tessera {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--root" => {
                let value = args.next().ok_or_else(|| "error: --root expects a directory".to_string())?;
                roots.push(PathBuf::from(value));
            }
            "--set" => {
                let value = args.next().ok_or_else(|| "error: --set expects key=value".to_string())?;
                let (key, val) = value
                    .split_once('=')
                    .ok_or_else(|| format!("error: invalid --set '{value}' (expected key=value)"))?;
                values.insert(key.to_string(), Value::from(val));
            }
            "--ext" => {
                extension = args.next().ok_or_else(|| "error: --ext expects a suffix".to_string())?;
            }
            "--max-depth" => {
                let value = args.next().ok_or_else(|| "error: --max-depth expects a number".to_string())?;
                max_depth = value.parse().map_err(|_| format!("error: invalid --max-depth '{value}'"))?;
            }
            _ if arg.starts_with('-') => {
                return Err(format!("error: unknown option '{arg}'"));
            }
            _ => {
                if page.is_some() {
                    return Err("error: page provided multiple times".to_string());
                }
                page = Some(arg);
            }
        }
    }

    let page = page.ok_or_else(|| format!("error: no page provided\n\n{}", help_text()))?;
    if roots.is_empty() {
        roots.push(PathBuf::from("templates"));
    }

    Ok(CliConfig { page, roots, values, extension, max_depth })
}

fn print_help() {
    println!("{}", help_text());
}

fn help_text() -> String {
    format!(
        "tessera {version}

Component-expansion engine CLI: renders a page template, expanding
capitalized component tags from the configured template roots.

Usage:
  tessera [OPTIONS] <page>

Options:
  --root <dir>         Template root directory, repeatable; roots are
                       searched in order. Default: ./templates
  --set <key=value>    Context value passed to the render, repeatable.
  --ext <suffix>       Component file extension. Default: .jinja
  --max-depth <n>      Maximum component nesting depth. Default: {max_depth}
  -h, --help           Show this help message.
  -V, --version        Print version information.

Exit codes:
  0  Success.
  1  Render error.
  2  Invalid arguments.
",
        version = env!("CARGO_PKG_VERSION"),
        max_depth = Options::default().max_depth
    )
}
