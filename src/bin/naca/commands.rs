use crate::config::Config;
use anyhow::{bail, Context};
use clap::Subcommand;
use log::{debug, info, warn};
use naca_rs::airfoil::AirfoilGeometry;
use naca_rs::closed_polyline::Outline;
use naca_rs::code::{parse, AirfoilCode, AirfoilFamily};
use naca_rs::export::{export, read, ExportFormat};
use naca_rs::stations::{SampleCount, Spacing};
use naca_rs::{analyze_contour, generate_batch, generate_with, properties, GenerateOptions};
use serde::Serialize;
use std::path::{Path, PathBuf};

#[derive(Subcommand)]
pub enum Command {
    /// Generate the coordinates of a section
    Generate {
        /// Designation such as 2412, 23012, 65-415, 747A315
        code: String,

        /// Family of the designation, detected from the layout when omitted
        #[arg(short, long)]
        family: Option<AirfoilFamily>,

        #[arg(short, long)]
        chord: Option<f64>,

        /// Stations per surface, clamped to 50..=2000
        #[arg(short, long)]
        samples: Option<usize>,

        #[arg(long)]
        spacing: Option<Spacing>,

        /// dat or csv, taken from the output extension when omitted
        #[arg(long)]
        format: Option<ExportFormat>,

        /// Output file, standard output when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the geometric properties of a section
    Properties {
        code: String,

        #[arg(short, long)]
        family: Option<AirfoilFamily>,

        #[arg(short, long)]
        chord: Option<f64>,

        #[arg(short, long)]
        samples: Option<usize>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Measure an existing .dat or .csv coordinate file
    Inspect {
        file: PathBuf,

        /// Also report how far the file deviates from this section at the measured chord
        #[arg(long)]
        compare: Option<String>,
    },

    /// Generate many sections in parallel, one file each
    Batch {
        #[arg(required = true)]
        codes: Vec<String>,

        #[arg(short, long)]
        family: Option<AirfoilFamily>,

        #[arg(long)]
        out_dir: Option<PathBuf>,

        #[arg(long)]
        format: Option<ExportFormat>,
    },
}

pub fn run(command: Command, config: &Config) -> anyhow::Result<()> {
    match command {
        Command::Generate {
            code,
            family,
            chord,
            samples,
            spacing,
            format,
            output,
        } => {
            let code = resolve_code(&code, family)?;
            let options = options(config, chord, samples, spacing);
            let format = format
                .or_else(|| output.as_deref().and_then(ExportFormat::from_path))
                .unwrap_or(config.format);
            run_generate(&code, &options, format, output.as_deref())
        }
        Command::Properties {
            code,
            family,
            chord,
            samples,
            json,
        } => {
            let code = resolve_code(&code, family)?;
            run_properties(&code, &options(config, chord, samples, None), json)
        }
        Command::Inspect { file, compare } => run_inspect(&file, compare.as_deref(), config),
        Command::Batch {
            codes,
            family,
            out_dir,
            format,
        } => {
            let out_dir = out_dir.unwrap_or_else(|| config.out_dir.clone());
            let format = format.unwrap_or(config.format);
            run_batch(&codes, family, &options(config, None, None, None), &out_dir, format)
        }
    }
}

fn resolve_code(text: &str, family: Option<AirfoilFamily>) -> anyhow::Result<AirfoilCode> {
    let code = match family {
        Some(f) => parse(f, text)?,
        None => text.parse::<AirfoilCode>()?,
    };
    debug!("{} parsed as {:?}", text, code);
    Ok(code)
}

fn options(
    config: &Config,
    chord: Option<f64>,
    samples: Option<usize>,
    spacing: Option<Spacing>,
) -> GenerateOptions {
    let requested = samples.unwrap_or(config.samples);
    if SampleCount::is_clamped(requested) {
        warn!(
            "{} samples is outside the supported range, using {}",
            requested,
            SampleCount::new(requested).get()
        );
    }

    GenerateOptions::new(
        chord.unwrap_or(config.chord),
        SampleCount::new(requested),
        spacing.unwrap_or(config.spacing),
    )
}

fn write_geometry(
    geometry: &AirfoilGeometry,
    format: ExportFormat,
    path: &Path,
) -> anyhow::Result<()> {
    let text = export(geometry, format)?;
    std::fs::write(path, text).with_context(|| format!("writing {}", path.display()))?;
    info!("{} written to {}", geometry.name, path.display());
    Ok(())
}

fn run_generate(
    code: &AirfoilCode,
    options: &GenerateOptions,
    format: ExportFormat,
    output: Option<&Path>,
) -> anyhow::Result<()> {
    let geometry = generate_with(code, options)?;
    match output {
        Some(path) => write_geometry(&geometry, format, path),
        None => {
            print!("{}", export(&geometry, format)?);
            Ok(())
        }
    }
}

#[derive(Serialize)]
struct PropertiesReport<'a> {
    name: String,
    family: AirfoilFamily,
    samples: usize,
    #[serde(flatten)]
    properties: &'a naca_rs::GeometryProperties,
}

fn run_properties(code: &AirfoilCode, options: &GenerateOptions, json: bool) -> anyhow::Result<()> {
    let geometry = generate_with(code, options)?;
    let p = properties(&geometry, code);

    if json {
        let report = PropertiesReport {
            name: geometry.name.clone(),
            family: code.family(),
            samples: geometry.len(),
            properties: &p,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{} ({})", geometry.name, code.family());
    println!("  chord                  {:.4}", p.chord);
    println!("  thickness ratio        {:.4}", p.thickness_ratio);
    println!("  max camber             {:.6} at x/c {:.4}", p.max_camber, p.camber_position);
    println!(
        "  max thickness          {:.6} at x/c {:.4}",
        p.max_thickness, p.max_thickness_location
    );
    println!("  area                   {:.6}", p.approx_area);
    println!("  perimeter              {:.6}", p.perimeter);
    println!("  leading edge radius    {:.6}", p.leading_edge_radius);
    Ok(())
}

fn run_inspect(file: &Path, compare: Option<&str>, config: &Config) -> anyhow::Result<()> {
    let text =
        std::fs::read_to_string(file).with_context(|| format!("reading {}", file.display()))?;
    let format = ExportFormat::from_path(file).unwrap_or(ExportFormat::Dat);
    let coordinates = read(&text, format).with_context(|| format!("parsing {}", file.display()))?;
    info!("{} points read from {}", coordinates.points.len(), file.display());

    let summary = analyze_contour(&coordinates.points)?;
    if let Some(name) = &coordinates.name {
        println!("{}", name);
    }
    println!("{}", serde_json::to_string_pretty(&summary)?);

    if let Some(code) = compare {
        let code = resolve_code(code, None)?;
        let options = GenerateOptions::new(
            summary.chord,
            SampleCount::new(config.samples),
            config.spacing,
        );
        let reference = generate_with(&code, &options)?;
        let outline = Outline::new(&reference.selig_loop(), None)?;
        println!(
            "max deviation from {}: {:.6}",
            reference.name,
            outline.max_deviation(&coordinates.points)
        );
    }

    Ok(())
}

fn run_batch(
    codes: &[String],
    family: Option<AirfoilFamily>,
    options: &GenerateOptions,
    out_dir: &Path,
    format: ExportFormat,
) -> anyhow::Result<()> {
    let parsed = codes
        .iter()
        .map(|c| resolve_code(c, family).with_context(|| format!("code '{}'", c)))
        .collect::<anyhow::Result<Vec<AirfoilCode>>>()?;

    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("creating {}", out_dir.display()))?;

    let results = generate_batch(&parsed, options);
    let mut failed = 0;
    for (code, result) in parsed.iter().zip(results) {
        let path = out_dir.join(format!("naca{}.{}", code.designation(), format.extension()));
        match result {
            Ok(geometry) => {
                if let Err(e) = write_geometry(&geometry, format, &path) {
                    warn!("{}: {:#}", code, e);
                    failed += 1;
                }
            }
            Err(e) => {
                warn!("{}: {}", code, e);
                failed += 1;
            }
        }
    }

    if failed > 0 {
        bail!("{} of {} sections failed", failed, parsed.len());
    }
    info!("{} sections written to {}", parsed.len(), out_dir.display());
    Ok(())
}
