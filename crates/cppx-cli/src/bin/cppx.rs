use clap::Parser;
use cppx_cli::{
    args::{Colors, CppxArgs},
    Cppx,
};
use std::process::exit;

fn main() {
    let cli = CppxArgs::parse();
    cppx_cli::log::setup_stderr_logging(
        cli.verbose,
        match cli.colors {
            Colors::Auto => None,
            Colors::Always => Some(true),
            Colors::Never => Some(false),
        },
    );

    match Cppx::new().execute(cli) {
        Ok(()) => {
            exit(0);
        }
        Err(error) => {
            tracing::error!(error = %format!("{error:#}"), "operation failed");
            exit(1);
        }
    }
}
