use std::{io::Write as _, path::PathBuf};

use anyhow::Context as _;
use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "cellcurve", version)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Rasterize a shape document and print a text preview.
    Render(RenderArgs),
    /// List the built-in palettes.
    Palettes,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Input shape document JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Write the cell diff as JSON to this path.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Character used for cells the diff leaves untouched in the preview.
    #[arg(long, default_value_t = '.')]
    blank: char,

    /// Skip the text preview on stdout.
    #[arg(long, default_value_t = false)]
    quiet: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Palettes => cmd_palettes(),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let doc = cellcurve::ShapeDocument::from_path(&args.in_path)?;
    let diff = doc
        .rasterize()
        .with_context(|| format!("rasterize '{}'", args.in_path.display()))?;

    if let Some(out) = &args.out {
        if let Some(parent) = out.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create output dir '{}'", parent.display()))?;
        }
        let json = serde_json::to_string_pretty(&diff).context("serialize cell diff")?;
        std::fs::write(out, json).with_context(|| format!("write '{}'", out.display()))?;
        eprintln!("wrote {} ({} cells)", out.display(), diff.len());
    }

    if !args.quiet {
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{}", diff.to_text(doc.canvas, args.blank)).context("write preview")?;
    }
    Ok(())
}

fn cmd_palettes() -> anyhow::Result<()> {
    let catalog = cellcurve::PaletteCatalog::builtin();
    let mut stdout = std::io::stdout().lock();
    for p in catalog.iter() {
        writeln!(
            stdout,
            "{:<8} {:<8} {:>3} patterns  ramp {:?}  {}",
            p.id,
            p.name,
            p.patterns.len(),
            p.ramp_chars().into_iter().collect::<String>(),
            p.description
        )?;
    }
    Ok(())
}
