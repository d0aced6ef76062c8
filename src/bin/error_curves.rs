use expapprox::{
    comparison::{Comparison, ComparisonSummary, ViewRequest, BATCH_ORDERS},
    error_curve::SampleGrid,
    method::Method,
    plotting::{self, MathStyle, PlotOptions, RenderConfig},
    target::TargetFunction,
};

const USAGE: &str = "\
Usage: error_curves [mode=batch|view] [function=exp|exp_neg] [order=1..10]
                    [methods=taylor,chebyshev-nodes,least-squares,equidistant]
                    [log_scale=true|false] [format=text|json] [plot=true|false]
                    [font=<family>] [math=plain|unicode] [unicode_minus=true|false]

  batch   Every function at orders 3, 4, 5 and 6 with every method (default)
  view    A single comparison from function, order, methods and log_scale

Plots are written to $TARGET_DIR/plot_output (TARGET_DIR defaults to `target`).
Set RUST_LOG to change the log level (default `info`).";

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Approximation(#[from] expapprox::Error),

    #[error("{0}\n\n{usage}", usage = USAGE)]
    Usage(String),

    #[error("Failed to render plot: {0}")]
    Plot(String),

    #[error("Failed to create the plot directory: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize summary: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Batch,
    View,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Text,
    Json,
}

#[derive(Debug)]
struct Args {
    mode: Mode,
    format: Format,
    plot: bool,
    request: ViewRequest,
    config: RenderConfig,
}
impl Args {
    fn parse(args: impl IntoIterator<Item = String>) -> Result<Option<Self>, CliError> {
        let mut parsed = Self {
            mode: Mode::Batch,
            format: Format::Text,
            plot: true,
            request: ViewRequest::default(),
            config: RenderConfig::default(),
        };

        for arg in args {
            if arg == "help" || arg == "--help" || arg == "-h" {
                return Ok(None);
            }

            let Some((key, value)) = arg.split_once('=') else {
                return Err(CliError::Usage(format!("Expected key=value, got `{arg}`")));
            };

            match key {
                "mode" => {
                    parsed.mode = match value {
                        "batch" => Mode::Batch,
                        "view" => Mode::View,
                        _ => return Err(CliError::Usage(format!("Invalid mode `{value}`"))),
                    }
                }

                "function" => parsed.request.target = value.parse()?,

                "order" => {
                    parsed.request.order = value
                        .parse()
                        .map_err(|_| CliError::Usage(format!("Invalid order `{value}`")))?;
                }

                "methods" => {
                    parsed.request.methods = value
                        .split(',')
                        .filter(|s| !s.trim().is_empty())
                        .map(str::parse::<Method>)
                        .collect::<Result<_, _>>()?;
                }

                "log_scale" => parsed.request.log_scale = parse_flag(key, value)?,
                "plot" => parsed.plot = parse_flag(key, value)?,

                "format" => {
                    parsed.format = match value {
                        "text" => Format::Text,
                        "json" => Format::Json,
                        _ => return Err(CliError::Usage(format!("Invalid format `{value}`"))),
                    }
                }

                "font" => parsed.config.font_family = value.to_string(),
                "unicode_minus" => parsed.config.unicode_minus = parse_flag(key, value)?,
                "math" => {
                    parsed.config.math_style = match value {
                        "plain" => MathStyle::Plain,
                        "unicode" => MathStyle::Unicode,
                        _ => return Err(CliError::Usage(format!("Invalid math style `{value}`"))),
                    }
                }

                _ => return Err(CliError::Usage(format!("Unknown option `{key}`"))),
            }
        }

        Ok(Some(parsed))
    }
}

fn parse_flag(key: &str, value: &str) -> Result<bool, CliError> {
    match value {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(CliError::Usage(format!("Invalid value `{value}` for {key}"))),
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = match Args::parse(std::env::args().skip(1)) {
        Ok(Some(args)) => args,
        Ok(None) => {
            println!("{USAGE}");
            return;
        }
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = run(&args) {
        log::error!("{e}");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), CliError> {
    let summaries = match args.mode {
        Mode::Batch => batch(args)?,
        Mode::View => vec![view(args)?],
    };

    match args.format {
        Format::Json if args.mode == Mode::View => {
            println!("{}", serde_json::to_string_pretty(&summaries[0])?);
        }
        Format::Json => println!("{}", serde_json::to_string_pretty(&summaries)?),
        Format::Text => {
            for summary in &summaries {
                print_summary(summary);
            }
        }
    }

    Ok(())
}

/// Every target at every batch order, with every method
fn batch(args: &Args) -> Result<Vec<ComparisonSummary>, CliError> {
    let grid = SampleGrid::default();
    let mut summaries = Vec::new();

    for target in TargetFunction::ALL {
        for order in BATCH_ORDERS {
            let comparison = Comparison::<f64>::new(target, order, &Method::ALL, &grid);
            if args.plot {
                render(&comparison, false, &args.config, None)?;
            }
            summaries.push(comparison.summary()?);
        }
    }

    log::info!("Compared {} function/order pairs", summaries.len());
    Ok(summaries)
}

/// A single comparison from the request parameters
fn view(args: &Args) -> Result<ComparisonSummary, CliError> {
    let comparison = args.request.comparison::<f64>()?;
    if args.plot {
        render(&comparison, args.request.log_scale, &args.config, Some("view"))?;
    }
    Ok(comparison.summary()?)
}

fn render(
    comparison: &Comparison,
    log_scale: bool,
    config: &RenderConfig,
    prefix: Option<&str>,
) -> Result<(), CliError> {
    let filename = plotting::comparison_filename(comparison.target(), comparison.order(), prefix);
    let path = plotting::plots_dir()?.join(filename);

    let options = PlotOptions::for_comparison(comparison, log_scale, config);
    plotting::plot_comparison(&path, comparison, &options, config)
        .map_err(|e| CliError::Plot(e.to_string()))
}

fn print_summary(summary: &ComparisonSummary) {
    println!("{}, n = {}", summary.target.label(false), summary.order);
    println!(
        "  {:<28} {:>12} {:>12} {:>10}",
        "method", "max |error|", "rms error", "worst at"
    );
    for method in &summary.methods {
        let argmax = method
            .argmax
            .map_or_else(|| "-".to_string(), |x| format!("{x:.4}"));
        println!(
            "  {:<28} {:>12.4e} {:>12.4e} {:>10}",
            method.name, method.max_abs_error, method.rms_error, argmax
        );
        println!("    {}", method.equation);
    }
    for failure in &summary.failures {
        println!("  {:<28} failed: {}", failure.method.id(), failure.error);
    }
    println!();
}
