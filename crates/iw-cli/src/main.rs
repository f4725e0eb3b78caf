//! Console player and story tools for Inner Wilds.

mod commands;
mod console;
mod splash;
mod wrap;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use iw_engine::RedirectPolicy;
use iw_engine::config::{DEFAULT_SAVE_PATH, DEFAULT_STORY_PATH};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "iw",
    about = "Inner Wilds: a branching narrative played from a story canvas",
    version,
    propagate_version = true
)]
struct Cli {
    /// Log engine events to stderr at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play the story, resuming from the ship log if one exists
    Play {
        /// Story canvas file
        #[arg(short, long, default_value = DEFAULT_STORY_PATH)]
        story: PathBuf,

        /// Ship log (save file)
        #[arg(long, default_value = DEFAULT_SAVE_PATH)]
        save: PathBuf,

        /// Column at which scene text wraps
        #[arg(short, long, default_value = "80")]
        width: usize,

        /// Redirect state-variant scenes when the gating trick is `found` or `missing`
        #[arg(long, default_value = "found")]
        redirect_when: RedirectPolicy,

        /// Skip the title screen and intro on a new game
        #[arg(long)]
        skip_intro: bool,
    },

    /// Validate a story canvas without playing it
    Check {
        /// Story canvas file
        #[arg(short, long, default_value = DEFAULT_STORY_PATH)]
        story: PathBuf,
    },

    /// List every scene in the story
    Scenes {
        /// Story canvas file
        #[arg(short, long, default_value = DEFAULT_STORY_PATH)]
        story: PathBuf,
    },

    /// Show the world enclosing a scene
    World {
        /// Scene id
        scene: String,

        /// Story canvas file
        #[arg(short, long, default_value = DEFAULT_STORY_PATH)]
        story: PathBuf,
    },

    /// Inspect or clear the ship log
    Save {
        #[command(subcommand)]
        action: SaveAction,
    },
}

#[derive(Subcommand)]
enum SaveAction {
    /// Print the saved scene and discovered tricks
    Show {
        /// Ship log (save file)
        #[arg(long, default_value = DEFAULT_SAVE_PATH)]
        save: PathBuf,
    },

    /// Empty the ship log so the next game starts fresh
    Wipe {
        /// Ship log (save file)
        #[arg(long, default_value = DEFAULT_SAVE_PATH)]
        save: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Play {
            story,
            save,
            width,
            redirect_when,
            skip_intro,
        } => {
            let config = iw_engine::GameConfig::default()
                .with_story(story)
                .with_save(save)
                .with_line_width(width)
                .with_redirect_policy(redirect_when)
                .with_intro(!skip_intro);
            commands::play::run(&config)
        }
        Commands::Check { story } => commands::check::run(&story),
        Commands::Scenes { story } => commands::scenes::run(&story),
        Commands::World { scene, story } => commands::world::run(&story, &scene),
        Commands::Save { action } => match action {
            SaveAction::Show { save } => commands::save::show(&save),
            SaveAction::Wipe { save } => commands::save::wipe(&save),
        },
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}
