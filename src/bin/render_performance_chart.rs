#[cfg(feature = "cairo-backend")]
use perf_chart::core::Viewport;
#[cfg(feature = "cairo-backend")]
use std::path::PathBuf;

#[cfg(feature = "cairo-backend")]
const DEFAULT_OUTPUT_PATH: &str = "performance_chart.png";

#[cfg(feature = "cairo-backend")]
#[derive(Debug)]
struct Args {
    output_path: PathBuf,
    viewport: Viewport,
    theme_path: Option<PathBuf>,
}

#[cfg(feature = "cairo-backend")]
fn main() {
    let _ = perf_chart::telemetry::init_default_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

#[cfg(not(feature = "cairo-backend"))]
fn main() {
    eprintln!("this tool requires feature `cairo-backend`");
    std::process::exit(1);
}

#[cfg(feature = "cairo-backend")]
fn run() -> Result<(), String> {
    use perf_chart::api::{ChartInitializer, ChartTheme};
    use perf_chart::host::{CanvasChartFactory, StaticDocument};
    use perf_chart::performance::{PERFORMANCE_CHART_ID, performance_chart_config_with_theme};
    use perf_chart::render::{CairoRenderer, Color};

    let args = parse_args()?;
    let theme = match &args.theme_path {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .map_err(|err| format!("failed to read theme `{}`: {err}", path.display()))?;
            ChartTheme::from_json_str(&raw).map_err(|err| format!("invalid theme: {err}"))?
        }
        None => ChartTheme::dark().map_err(|err| err.to_string())?,
    };

    let document = StaticDocument::new()
        .with_canvas(PERFORMANCE_CHART_ID, args.viewport)
        .map_err(|err| err.to_string())?;
    let config = performance_chart_config_with_theme(&theme).map_err(|err| err.to_string())?;
    let mut initializer =
        ChartInitializer::new(PERFORMANCE_CHART_ID, config).map_err(|err| err.to_string())?;

    let mut renderer = CairoRenderer::new(args.viewport).map_err(|err| err.to_string())?;
    // Dark page background so the light axis colours stay readable.
    renderer
        .set_background(Color::rgb(0.13, 0.13, 0.15))
        .map_err(|err| err.to_string())?;
    let mut factory = CanvasChartFactory::new(renderer);

    initializer
        .on_document_ready(&document, &mut factory)
        .map_err(|err| format!("chart construction failed: {err}"))?;
    factory
        .renderer()
        .write_png(&args.output_path)
        .map_err(|err| err.to_string())?;

    println!("wrote {}", args.output_path.display());
    Ok(())
}

#[cfg(feature = "cairo-backend")]
fn parse_args() -> Result<Args, String> {
    let mut args = Args {
        output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
        viewport: Viewport::new(800, 400),
        theme_path: None,
    };

    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--output" => {
                let value = iter.next().ok_or("missing value for --output")?;
                args.output_path = PathBuf::from(value);
            }
            "--width" => args.viewport.width = parse_dimension(iter.next(), "--width")?,
            "--height" => args.viewport.height = parse_dimension(iter.next(), "--height")?,
            "--theme" => {
                let value = iter.next().ok_or("missing value for --theme")?;
                args.theme_path = Some(PathBuf::from(value));
            }
            "--help" | "-h" => {
                println!(
                    "usage: render_performance_chart [--output <png>] [--width <px>] [--height <px>] [--theme <json>]"
                );
                std::process::exit(0);
            }
            other => return Err(format!("unknown argument `{other}`")),
        }
    }

    Ok(args)
}

#[cfg(feature = "cairo-backend")]
fn parse_dimension(value: Option<String>, flag: &str) -> Result<u32, String> {
    let value = value.ok_or_else(|| format!("missing value for {flag}"))?;
    value
        .parse::<u32>()
        .map_err(|err| format!("invalid value `{value}` for {flag}: {err}"))
}
