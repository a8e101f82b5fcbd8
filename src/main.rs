use clap::{Parser, Subcommand};
use filmroll::gallery::Gallery;
use filmroll::host::{
    FileCamera, FileStore, FileUriResolver, Host, PassthroughCropper, PresetPicker, SourceChoice,
    StdFiles, TermNotifier,
};
use filmroll::{config, output};
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "filmroll")]
#[command(about = "Local-first photo gallery, driven from the terminal")]
#[command(long_about = "\
Local-first photo gallery, driven from the terminal

The gallery root holds everything the gallery owns:

  <root>/
  ├── config.toml        # Behavior config (optional — see gen-config)
  ├── data/              # Saved photos, named <epoch-millis>.jpg
  ├── captures/          # Staging area playing the camera's cache directory
  └── store/             # Key-value store holding the photo list

'add' runs the full acquisition flow: the image is staged the way a camera
capture lands in its cache (the original file is untouched), passed through
the crop step (a no-op on desktop), moved into data/ under a generated name,
and recorded at the front of the list.

'delete' removes by the 1-based position shown by 'list', removing both the
list entry and the stored file.

Run 'filmroll gen-config' to generate a documented config.toml.")]
#[command(version)]
struct Cli {
    /// Gallery root directory (default: the platform data dir + "filmroll")
    #[arg(long, global = true)]
    root: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List saved photos, newest first
    List,
    /// Add an image to the gallery
    Add {
        /// Image file to add
        image: PathBuf,
    },
    /// Delete the photo at a position from 'list'
    Delete {
        /// 1-based position
        position: usize,
    },
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let root = match cli.root {
        Some(root) => root,
        None => default_root()?,
    };

    match cli.command {
        Command::List => {
            let mut gallery = build_gallery(&root, None)?;
            gallery.load_saved()?;
            output::print_gallery(gallery.photos());
        }
        Command::Add { image } => {
            let mut gallery = build_gallery(&root, Some(&image))?;
            gallery.load_saved()?;
            let outcome = gallery.select_image()?;
            output::print_add_outcome(&outcome);
        }
        Command::Delete { position } => {
            if position == 0 {
                return Err("positions are 1-based; the newest photo is position 1".into());
            }
            let mut gallery = build_gallery(&root, None)?;
            gallery.load_saved()?;
            let removed = gallery.delete_image(position - 1)?;
            output::print_delete_outcome(&removed);
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Wire a gallery to the desktop host adapters under `root`.
///
/// `image` is the file the camera seam will stage on capture; commands that
/// never capture leave it unset.
fn build_gallery(root: &Path, image: Option<&Path>) -> Result<Gallery, config::ConfigError> {
    let config = config::load_config(root)?;
    let camera_source = image.unwrap_or(Path::new("")).to_path_buf();
    let host = Host {
        store: Arc::new(FileStore::new(root.join("store"))),
        files: Arc::new(StdFiles),
        camera: Arc::new(FileCamera::new(camera_source, root.join("captures"))),
        cropper: Arc::new(PassthroughCropper),
        picker: Arc::new(PresetPicker(SourceChoice::Library)),
        resolver: Arc::new(FileUriResolver),
        notifier: Arc::new(TermNotifier),
    };
    let data_dir = root.join("data").to_string_lossy().into_owned();
    Ok(Gallery::new(data_dir, config, host))
}

/// The default gallery root on this platform.
fn default_root() -> Result<PathBuf, Box<dyn std::error::Error>> {
    let base = dirs::data_dir().ok_or("no platform data directory found; pass --root")?;
    Ok(base.join("filmroll"))
}
