use std::{
    collections::HashSet,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "gifsplit",
    version,
    about = "Split animated GIFs into fully composited PNG frames"
)]
struct Cli {
    /// Input GIF files. Several inputs are converted one after another.
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Which frames to extract. Defaults to `custom` when `--range` is given,
    /// `all` otherwise.
    #[arg(long, value_enum)]
    frames: Option<FramesMode>,

    /// 1-based frames to extract, e.g. "1-5" or "1,3,5".
    /// Blank or unparseable expressions extract every frame.
    #[arg(long)]
    range: Option<String>,

    /// How to apply "restore to previous" disposal.
    #[arg(long, value_enum, default_value_t = RestoreChoice::Clear)]
    restore_previous: RestoreChoice,

    /// Output directory (defaults to each input's directory).
    #[arg(long)]
    out: Option<PathBuf>,

    /// Also write a `<name>_frames.json` manifest next to the frames.
    #[arg(long)]
    manifest: bool,

    /// Increase log verbosity (-v: debug, -vv: trace). `RUST_LOG` overrides.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FramesMode {
    All,
    First,
    Last,
    Custom,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum RestoreChoice {
    /// Clear the frame's rectangle (compatible default).
    Clear,
    /// Restore the pixels under the frame.
    Snapshot,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let opts = gifsplit::ConvertOpts {
        selection: selection_spec(cli.frames, cli.range.as_deref())?,
        restore_previous: match cli.restore_previous {
            RestoreChoice::Clear => gifsplit::RestorePrevious::ClearRect,
            RestoreChoice::Snapshot => gifsplit::RestorePrevious::Snapshot,
        },
    };

    let mut items = Vec::with_capacity(cli.inputs.len());
    let mut unreadable = 0usize;
    for path in &cli.inputs {
        match std::fs::read(path) {
            Ok(bytes) => items.push(gifsplit::BatchItem {
                name: path.to_string_lossy().into_owned(),
                bytes,
            }),
            Err(e) => {
                unreadable += 1;
                eprintln!("failed to read '{}': {e}", path.display());
            }
        }
    }
    if items.is_empty() {
        anyhow::bail!("none of the {} input file(s) could be read", cli.inputs.len());
    }

    let report = gifsplit::convert_batch(&items, &opts, &mut gifsplit::PngEncoder, &mut |p| {
        tracing::debug!(progress = p, "converting");
    })?;

    for failure in &report.failures {
        eprintln!("failed to convert '{}': {}", failure.name, failure.error);
    }

    let mut written = 0usize;
    let mut used_bases = HashSet::new();
    for job in &report.jobs {
        written += write_job(job, cli.out.as_deref(), cli.manifest, &mut used_bases)?;
    }

    tracing::debug!(progress = gifsplit::PROGRESS_COMPLETE, "converting");
    eprintln!(
        "wrote {written} frame(s) from {} input(s); {} failed",
        report.jobs.len(),
        report.failures.len() + unreadable
    );
    Ok(())
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn selection_spec(
    mode: Option<FramesMode>,
    range: Option<&str>,
) -> anyhow::Result<gifsplit::SelectionSpec> {
    Ok(match (mode, range) {
        (None | Some(FramesMode::Custom), Some(range)) => gifsplit::SelectionSpec::custom(range),
        (Some(FramesMode::Custom), None) => gifsplit::SelectionSpec::custom(""),
        (None | Some(FramesMode::All), None) => gifsplit::SelectionSpec::All,
        (Some(FramesMode::First), None) => gifsplit::SelectionSpec::First,
        (Some(FramesMode::Last), None) => gifsplit::SelectionSpec::Last,
        (Some(mode), Some(_)) => {
            anyhow::bail!("--range only applies to --frames custom, not {mode:?}")
        }
    })
}

/// Pick a frame-name base that no earlier input in this run wrote to `dir`.
fn unique_base(dir: &Path, stem: &str, used: &mut HashSet<PathBuf>) -> String {
    let mut base = stem.to_owned();
    let mut n = 2;
    while !used.insert(dir.join(&base)) {
        base = format!("{stem}_{n}");
        n += 1;
    }
    base
}

fn write_job(
    job: &gifsplit::BatchJob<Vec<u8>>,
    out_dir: Option<&Path>,
    manifest: bool,
    used_bases: &mut HashSet<PathBuf>,
) -> anyhow::Result<usize> {
    let input = Path::new(&job.name);
    let dir = match out_dir {
        Some(dir) => dir.to_path_buf(),
        None => input
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(".")),
    };
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("create output dir '{}'", dir.display()))?;

    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "frames".to_owned());
    let base = unique_base(&dir, &stem, used_bases);
    if base != stem {
        eprintln!(
            "'{}' shares its name with an earlier input; writing it as '{base}'",
            input.display()
        );
    }

    let mut entries = Vec::with_capacity(job.conversion.frames.len());
    for frame in &job.conversion.frames {
        let file = gifsplit::frame_file_name(&base, frame.original_index);
        let path = dir.join(&file);
        std::fs::write(&path, &frame.data)
            .with_context(|| format!("write png '{}'", path.display()))?;
        entries.push(gifsplit::ManifestEntry {
            file,
            frame_index: frame.original_index,
            delay_cs: frame.delay,
        });
    }

    if manifest {
        let m = gifsplit::FrameManifest {
            source: job.name.clone(),
            screen: job.conversion.screen,
            frames: entries,
        };
        let path = dir.join(gifsplit::manifest_file_name(&base));
        std::fs::write(&path, m.to_json()?)
            .with_context(|| format!("write manifest '{}'", path.display()))?;
    }

    eprintln!(
        "wrote {} frame(s) for {}",
        job.conversion.frames.len(),
        input.display()
    );
    Ok(job.conversion.frames.len())
}
