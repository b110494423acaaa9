use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "stencil",
    about = "Generate components, containers and reducers inside an existing project",
    version
)]
pub struct Cli {
    /// Print debug logs to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate new files from a schematic
    #[command(alias = "g")]
    Generate {
        /// Schematic type or alias (see `stencil schematics`)
        schematic: String,

        /// Name of the unit, optionally nested in directories (e.g. foo/bar)
        name: String,

        /// Skip style creation for components
        #[arg(long)]
        no_style: bool,

        /// Preserve name formatting
        #[arg(long)]
        no_format: bool,

        /// Also generate a test file
        #[arg(long)]
        test: bool,

        /// Don't write anything to the file system
        #[arg(short, long)]
        dry_run: bool,

        /// Link a presentational component to a container
        #[arg(short, long, value_name = "NAME")]
        component: Option<String>,

        /// Pass extra values to templates (can be repeated: --set key=value)
        #[arg(long = "set", value_name = "KEY=VALUE")]
        set: Vec<String>,
    },

    /// List schematic types and their aliases
    #[command(alias = "ls")]
    Schematics,
}
