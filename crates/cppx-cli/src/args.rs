use std::path::PathBuf;

use clap::{crate_version, ArgEnum, Parser};

#[derive(Clone, Parser)]
#[clap(name = "cppx")]
#[clap(bin_name = "cppx")]
#[clap(version = crate_version!())]
pub struct CppxArgs {
    /// Base directory searched for unified `.cppx` sources.
    #[clap(default_value = "./")]
    pub dir: PathBuf,
    #[clap(long, arg_enum, global = true, default_value = "auto")]
    pub colors: Colors,
    /// Enable a verbose logging format.
    #[clap(long, global = true)]
    pub verbose: bool,
}

#[derive(Clone, Copy, ArgEnum)]
pub enum Colors {
    /// Determine whether to colorize output automatically.
    Auto,
    /// Always colorize output.
    Always,
    /// Never colorize output.
    Never,
}
