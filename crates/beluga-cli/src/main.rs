use beluga::{BubbleSpec, LayoutEngine, SimConfig};
use beluga_render::SvgRenderOptions;
use std::io::Read;

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Io(std::io::Error),
    Json(serde_json::Error),
    Seed(beluga::Error),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Json(err) => write!(f, "JSON error: {err}"),
            CliError::Seed(err) => write!(f, "{err}"),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

impl From<beluga::Error> for CliError {
    fn from(value: beluga::Error) -> Self {
        Self::Seed(value)
    }
}

#[derive(Debug, Clone, Copy, Default)]
enum OutputFormat {
    #[default]
    Svg,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "svg" => Ok(Self::Svg),
            "json" => Ok(Self::Json),
            _ => Err(CliError::Usage("--format must be `svg` or `json`")),
        }
    }
}

#[derive(Debug)]
struct Args {
    input: Option<String>,
    out: Option<String>,
    width: f64,
    height: f64,
    ticks: u32,
    dt: f64,
    seed: u64,
    gravity: f64,
    format: OutputFormat,
    pretty: bool,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            input: None,
            out: None,
            width: 800.0,
            height: 600.0,
            ticks: 600,
            dt: 1.0 / 60.0,
            seed: 0,
            gravity: 60.0,
            format: OutputFormat::default(),
            pretty: false,
        }
    }
}

const USAGE: &str = "Usage: beluga [options] [entries.json]

Seeds a bubble arena from a JSON array of entries
({\"id\", \"magnitude\", \"color\", \"displayName\"}), runs the simulation
for a fixed number of ticks, and writes the final snapshot.

Reads from stdin when no input file is given.

Options:
  --width <px>      container width (default 800)
  --height <px>     container height (default 600)
  --ticks <n>       simulation ticks to run (default 600)
  --dt <seconds>    fixed time step (default 1/60)
  --seed <n>        RNG seed for placement (default 0)
  --gravity <a>     vertical acceleration; negative floats bubbles up (default 60)
  --format <fmt>    output format: svg | json (default svg)
  --pretty          pretty-print JSON output
  --out <path>      output file (default stdout)
  --help            print this message";

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut args = Args::default();
    let mut it = argv.iter().skip(1);
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--help" | "-h" => return Err(CliError::Usage(USAGE)),
            "--width" => args.width = parse_value(it.next(), "--width expects a number")?,
            "--height" => args.height = parse_value(it.next(), "--height expects a number")?,
            "--ticks" => args.ticks = parse_value(it.next(), "--ticks expects an integer")?,
            "--dt" => args.dt = parse_value(it.next(), "--dt expects a number")?,
            "--seed" => args.seed = parse_value(it.next(), "--seed expects an integer")?,
            "--gravity" => args.gravity = parse_value(it.next(), "--gravity expects a number")?,
            "--format" => {
                let raw = it.next().ok_or(CliError::Usage("--format expects a value"))?;
                args.format = raw.parse()?;
            }
            "--pretty" => args.pretty = true,
            "--out" => {
                args.out = Some(
                    it.next()
                        .ok_or(CliError::Usage("--out expects a path"))?
                        .clone(),
                );
            }
            other => {
                if other.starts_with('-') {
                    return Err(CliError::Usage("unknown option; try --help"));
                }
                if args.input.is_some() {
                    return Err(CliError::Usage("at most one input file; try --help"));
                }
                args.input = Some(other.to_string());
            }
        }
    }
    Ok(args)
}

fn parse_value<T: std::str::FromStr>(
    raw: Option<&String>,
    usage: &'static str,
) -> Result<T, CliError> {
    raw.ok_or(CliError::Usage(usage))?
        .parse()
        .map_err(|_| CliError::Usage(usage))
}

fn read_input(input: Option<&str>) -> Result<String, CliError> {
    match input {
        Some(path) => Ok(std::fs::read_to_string(path)?),
        None => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

fn write_output(text: &str, out: Option<&str>) -> Result<(), CliError> {
    match out {
        Some(path) if path != "-" => std::fs::write(path, text)?,
        _ => println!("{text}"),
    }
    Ok(())
}

fn run(args: Args) -> Result<(), CliError> {
    let text = read_input(args.input.as_deref())?;
    let entries: Vec<BubbleSpec> = serde_json::from_str(&text)?;

    let config = SimConfig {
        random_seed: args.seed,
        gravity: beluga::geom::vector(0.0, args.gravity),
        ..SimConfig::default()
    };
    let mut engine = LayoutEngine::new(config);
    engine.seed(&entries, args.width, args.height)?;
    for _ in 0..args.ticks {
        engine.step(args.dt);
    }

    let snapshot = engine.snapshot();
    let rendered = match args.format {
        OutputFormat::Svg => beluga_render::render_snapshot_svg(
            &snapshot,
            args.width,
            args.height,
            &SvgRenderOptions::default(),
        ),
        OutputFormat::Json => {
            if args.pretty {
                serde_json::to_string_pretty(&snapshot)?
            } else {
                serde_json::to_string(&snapshot)?
            }
        }
    };
    write_output(&rendered, args.out.as_deref())
}

fn main() {
    let args = match parse_args(&std::env::args().collect::<Vec<_>>()) {
        Ok(v) => v,
        Err(CliError::Usage(msg)) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    match run(args) {
        Ok(()) => {}
        Err(CliError::Usage(msg)) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}
