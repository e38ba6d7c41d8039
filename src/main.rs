use anyhow::Result;
use clap::Parser;

mod error;
mod ui;
mod version;

use version::VersionInfo;

#[derive(clap::Parser)]
#[command(
    name = "semver-tool",
    about = "Verify semantic version strings and print versions"
)]
struct Args {
    #[arg(help = "Version string to parse")]
    version: String,

    #[arg(short, long, help = "Do not show any output")]
    quiet: bool,

    #[arg(long, help = "Print the major version number")]
    major: bool,

    #[arg(long, help = "Print the minor version number")]
    minor: bool,

    #[arg(long, help = "Print the patch version number")]
    patch: bool,

    #[arg(long, help = "Print the build metadata")]
    buildmetadata: bool,

    #[arg(short = 'r', long, help = "Print prerelease info")]
    prerelease: bool,

    #[arg(long, help = "Print prerelease HEAD - the first part only")]
    prerelease_head: bool,

    #[arg(
        short,
        long,
        help = "Print all major / minor / patch permutations as described in README"
    )]
    show_permutations: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let info = match VersionInfo::parse(&args.version) {
        Ok(info) => info,
        Err(e) => {
            if !args.quiet {
                ui::display_error(&e.to_string());
            }
            std::process::exit(1);
        }
    };

    // all further options are display only
    if args.quiet {
        return Ok(());
    }

    if args.major {
        ui::display_value(&info.major);
    }

    if args.minor {
        ui::display_value(&info.minor);
    }

    if args.patch {
        ui::display_value(&info.patch);
    }

    if args.buildmetadata {
        ui::display_value(&info.build_metadata);
    }

    if args.prerelease {
        ui::display_value(&info.pre_release);
    }

    if args.prerelease_head {
        ui::display_value(info.pre_release_head());
    }

    if args.show_permutations {
        ui::display_permutations(&info.permutations());
    }

    Ok(())
}
