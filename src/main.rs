use clap::{Parser, Subcommand};
use media_manifest::config::ManifestPaths;
use media_manifest::kind::MediaKind;
use media_manifest::{manifest, output};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "media-manifest")]
#[command(version)]
#[command(about = "Write JSON manifests for gallery photos and videos")]
#[command(long_about = "\
Write JSON manifests for gallery photos and videos

Run from the project root. Each command lists one media directory and its
thumbnails, then overwrites that directory's manifest.json:

  assets/
  ├── photos/
  │   ├── manifest.json      # [{src, thumb, alt}]
  │   ├── thumbs/            # photo.png matches photo.jpg
  │   └── photo.jpg
  └── videos/
      ├── manifest.json      # [{src, thumb|null, alt, type}]
      ├── thumbs/            # jpg, jpeg, png, webp only
      └── clip.mp4           # mp4, webm, mov, m4v, ogv only

A missing assets/photos fails the photos command. A missing assets/videos
is reported but the videos command still succeeds.")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Write assets/photos/manifest.json
    Photos,
    /// Write assets/videos/manifest.json
    Videos,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let kind = match cli.command {
        Command::Photos => MediaKind::Photo,
        Command::Videos => MediaKind::Video,
    };

    let project_root = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let paths = ManifestPaths::resolve(&project_root, kind);
    match manifest::run(&paths) {
        Ok(outcome) => {
            output::print_outcome(&outcome);
            ExitCode::SUCCESS
        }
        Err(e) => {
            output::print_error(&e);
            ExitCode::FAILURE
        }
    }
}
