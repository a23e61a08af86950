use clap::{Parser, Subcommand};
use shadow_pad::imaging::{Extent, Parallelism};
use shadow_pad::{config, output, process, scan};
use std::path::PathBuf;

/// Shared flags for commands that resolve a full pipeline config.
#[derive(clap::Args, Clone)]
struct PipelineArgs {
    /// Image or folder of images to process
    input: PathBuf,

    /// Config file (default: shadow-pad.toml next to the input, if present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output folder name
    #[arg(long)]
    output_folder: Option<String>,

    /// Take --output-folder as a path as given instead of nesting it
    /// under the input's directory
    #[arg(long)]
    no_subfolder: bool,

    /// Aspect ratio of the output image, "WxH"
    #[arg(long)]
    aspect_ratio: Option<String>,

    /// Shadow offset: integer pixels, or a float ratio of the image side
    #[arg(long)]
    shadow_offset: Option<Extent>,

    /// Padding around the image: integer pixels, or a float ratio of the
    /// padded side
    #[arg(long)]
    pad: Option<Extent>,

    /// Shadow blur radius (0 keeps the shadow edges sharp)
    #[arg(long)]
    radius: Option<u32>,

    /// Background color: name, or hex with optional leading '#'
    #[arg(long)]
    bg_color: Option<String>,

    /// Shadow color: name, or hex with optional leading '#'
    #[arg(long)]
    shadow_color: Option<String>,

    /// Parallel workers: a count, or "all" for every core
    #[arg(long)]
    jobs: Option<Parallelism>,
}

impl PipelineArgs {
    /// Resolve the layered options: defaults ← config file ← CLI flags.
    fn resolve_options(&self) -> Result<config::Options, config::ConfigError> {
        let mut options = match &self.config {
            Some(path) => config::Options::load(path)?,
            None => config::Options::load_for_input(&self.input)?,
        };
        options.apply(&config::Overrides {
            output_folder: self.output_folder.clone(),
            use_subfolder: self.no_subfolder.then_some(false),
            aspect_ratio: self.aspect_ratio.clone(),
            shadow_offset: self.shadow_offset,
            pad: self.pad,
            radius: self.radius,
            bg_color: self.bg_color.clone(),
            shadow_color: self.shadow_color.clone(),
            jobs: self.jobs.clone(),
        });
        Ok(options)
    }
}

#[derive(Parser)]
#[command(name = "shadow-pad")]
#[command(about = "Drop-shadow and pad images onto a fixed-aspect canvas")]
#[command(long_about = "\
Drop-shadow and pad images onto a fixed-aspect canvas

Each input image gets a soft drop shadow and is centered on a canvas
matching the target aspect ratio, ready for social-media upload. A folder
input is processed in parallel; one bad file never blocks the rest.

Output layout (defaults):

  photos/
  ├── 001-dawn.jpg
  ├── 002-dusk.png
  └── padded/                      # created next to the input
      ├── 001-dawn-padded.jpg     # original codec preserved
      └── 002-dusk-padded.png

Sizes like --shadow-offset and --pad take integer pixels (33) or a float
ratio of the image side (0.05). Colors take a name (white, black, gray),
a hex string (\"#fff\", \"484848\"), or — in the config file — an
[r, g, b] triple.

Run 'shadow-pad gen-config' to generate a documented shadow-pad.toml.")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Shadow and pad images into the output folder
    Run(PipelineArgs),
    /// Validate options and list what would be processed, without writing
    Check(PipelineArgs),
    /// Print a stock shadow-pad.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Run(args) => {
            let options = args.resolve_options()?;
            let params = options.validate()?;
            init_thread_pool(&options.jobs);

            let output_folder = scan::resolve_output_folder(
                &args.input,
                &options.output_folder,
                options.use_subfolder,
            );

            let files = scan::discover_files(&args.input)?;
            println!("{}", output::format_batch_header(files.len(), &output_folder));

            let (tx, rx) = std::sync::mpsc::channel();
            let printer = std::thread::spawn(move || {
                for event in rx {
                    output::print_batch_event(&event);
                }
            });
            let report = process::run_batch(&files, &params, &output_folder, Some(tx))?;
            printer.join().unwrap();

            output::print_batch_summary(&report);
            if !report.is_clean() {
                std::process::exit(1);
            }
        }
        Command::Check(args) => {
            let options = args.resolve_options()?;
            options.validate()?;

            let output_folder = scan::resolve_output_folder(
                &args.input,
                &options.output_folder,
                options.use_subfolder,
            );
            let files = scan::discover_files(&args.input)?;
            for line in output::format_check_output(&files, &output_folder) {
                println!("{}", line);
            }
            println!("==> Options are valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Initialize the rayon thread pool from the jobs setting.
///
/// Caps at the number of available CPU cores — a user can constrain down,
/// not up.
fn init_thread_pool(jobs: &Parallelism) {
    rayon::ThreadPoolBuilder::new()
        .num_threads(jobs.effective_jobs())
        .build_global()
        .ok();
}
