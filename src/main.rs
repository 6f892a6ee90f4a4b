mod client;
mod download;
mod error;
mod fetcher;
mod html;
mod models;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use error::GalleryError;
use fetcher::{Fetcher, UreqFetcher};

#[derive(Parser, Debug)]
#[command(author, version, about = "Fetch random users and build a thumbnail index page")]
pub struct Args {
    /// Output directory for thumbnails and index.html; must not exist yet
    pub path: PathBuf,

    /// Number of users to fetch
    #[arg(short = 'n', default_value_t = 25)]
    pub count: u32,

    /// Verbose progress output
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(err) = run(&args, &UreqFetcher::new()) {
        eprintln!("Failure: {err}");
        process::exit(err.exit_code());
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// The whole pipeline: create the output directory, fetch the user list,
/// save every thumbnail in fetched order, then write index.html in one shot.
/// The directory is created before any network I/O so a doomed run fails
/// without wasting a round trip.
fn run<F: Fetcher>(args: &Args, fetcher: &F) -> Result<(), GalleryError> {
    create_output_dir(&args.path)?;
    info!(path = %args.path.display(), "output directory created");

    info!(count = args.count, "fetching users");
    let users = client::fetch_users(fetcher, client::DEFAULT_API_URL, args.count)?;
    info!("data fetched");

    for user in &users {
        info!(first = %user.name.first, "copying user data");
        download::save_thumbnail(fetcher, user, &args.path)?;
    }

    info!("generating html");
    let page = html::render_index(&users);

    let index_path = args.path.join("index.html");
    fs::write(&index_path, page).map_err(|source| GalleryError::Filesystem {
        path: index_path.clone(),
        source,
    })?;

    info!(users = users.len(), "done");
    Ok(())
}

/// The program refuses to merge into or overwrite an existing directory.
fn create_output_dir(path: &Path) -> Result<(), GalleryError> {
    fs::create_dir(path).map_err(|source| {
        if source.kind() == io::ErrorKind::AlreadyExists {
            GalleryError::DirectoryExists(path.to_path_buf())
        } else {
            GalleryError::Filesystem {
                path: path.to_path_buf(),
                source,
            }
        }
    })
}
