//! ioc - Entry Point
//!
//! Binary entry point for the `ioc` command-line tool.
//!
//! | Command | Description |
//! |---------|-------------|
//! | `ioc aliases` | List the aliases of the loaded element map |
//! | `ioc explain <KEY>` | Show which definition a key resolves through |
//! | `ioc resolve <KEY>` | Create the element and print it |
//! | `ioc classes` | List linked classes |

use clap::Parser;
use ioc::cli::{Cli, run};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut stdout = std::io::stdout().lock();
    run(&cli, &mut stdout)?;
    Ok(())
}
