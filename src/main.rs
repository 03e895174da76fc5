use clap::Parser;
use leaky_integrator::config::DEFAULT_CONFIG_FILE_NAME;
use leaky_integrator::{
    format_engineering, ConfigError, IntegratorConfig, LeakyIntegrator, Sample, SuffixStyle,
};
use log::{debug, info, warn};
use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;

const RESET_COMMAND: &str = "reset";

/// Smooth a stream of meter readings with a leaky integrator.
#[derive(Parser, Debug)]
#[command(name = "leaky-integrator", version)]
struct Args {
    /// JSON config file
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE_NAME)]
    config: PathBuf,

    /// Weight given to each new sample, overrides the config
    #[arg(short, long, allow_negative_numbers = true)]
    gain: Option<f64>,

    /// Use long SI prefixes (kilo, milli, ...)
    #[arg(short, long)]
    long: bool,

    /// Print plain numbers instead of engineering units
    #[arg(short, long)]
    raw: bool,

    /// Read samples from this file instead of stdin
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Write the effective config back to the config file
    #[arg(long)]
    save_config: bool,
}

enum Output {
    Raw,
    Engineering(SuffixStyle),
}

impl Output {
    fn render(&self, value: f64) -> String {
        match self {
            Output::Raw => value.to_string(),
            Output::Engineering(style) => format_engineering(value, *style),
        }
    }
}

fn run(
    integrator: &mut LeakyIntegrator,
    output: &Output,
    reader: impl BufRead,
    mut writer: impl Write,
) -> io::Result<usize> {
    let mut last_range = None;
    let mut written = 0;

    for bytes in reader.split(b'\n') {
        let bytes = bytes?;
        let line = match std::str::from_utf8(&bytes) {
            Ok(line) => line,
            Err(e) => {
                warn!("Skipping line that is not UTF-8: {}", e);
                continue;
            }
        };
        if line.trim() == RESET_COMMAND {
            debug!("Reset requested");
            integrator.reset();
            continue;
        }

        let sample = match Sample::parse(line) {
            Ok(sample) => sample,
            Err(e) => {
                warn!("Skipping line '{}': {}", line.trim(), e);
                continue;
            }
        };

        if let Some(range) = sample.range {
            if last_range.is_some_and(|last| last != range) {
                debug!("Range changed to {}, resetting", range);
                integrator.reset();
            }
            last_range = Some(range);
        }

        integrator.write(sample.value);
        writeln!(writer, "{}", output.render(integrator.read()))?;
        written += 1;
    }

    Ok(written)
}

/// Applies command line overrides on top of the loaded config.
fn effective_config(args: &Args, mut config: IntegratorConfig) -> IntegratorConfig {
    if let Some(gain) = args.gain {
        config.gain = gain;
    }
    if args.long {
        config.suffix_style = SuffixStyle::Long;
    }
    config
}

fn prepare_config(args: &Args) -> Result<IntegratorConfig, ConfigError> {
    let config = effective_config(args, IntegratorConfig::load_or_default(&args.config));
    if !(0.0..=1.0).contains(&config.gain) {
        warn!("Gain {} is outside [0, 1], the filter may amplify", config.gain);
    }
    if args.save_config {
        config.save_to_file(&args.config)?;
    }
    Ok(config)
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let args = Args::parse();
    let config = prepare_config(&args)?;

    let output = if args.raw {
        Output::Raw
    } else {
        Output::Engineering(config.suffix_style)
    };
    let mut integrator = config.build();
    info!("Integrating with gain {}", integrator.gain());

    let stdout = io::stdout();
    let written = match &args.input {
        Some(path) => run(
            &mut integrator,
            &output,
            BufReader::new(File::open(path)?),
            stdout.lock(),
        )?,
        None => run(&mut integrator, &output, io::stdin().lock(), stdout.lock())?,
    };
    info!("Processed {} samples", written);

    Ok(())
}
