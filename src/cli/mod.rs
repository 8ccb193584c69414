pub mod build;
pub mod completions;
pub mod init;
pub mod list;
pub mod palette;
pub mod watch;

use clap::{Parser, Subcommand};

/// gfxgen - C graphics header generator for binary game assets
#[derive(Parser, Debug)]
#[command(name = "gfxgen")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate C headers and linkage sources from binary assets
    Build(build::BuildArgs),

    /// Initialize a gfxgen project (generates gfxgen.yaml)
    Init(init::InitArgs),

    /// List discovered assets and their contents
    List(list::ListArgs),

    /// Sample a PNG into a .pal palette group
    Palette(palette::PaletteArgs),

    /// Rebuild automatically when assets change
    Watch(watch::WatchArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}
