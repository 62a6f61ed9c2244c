use std::env;
use std::path::PathBuf;
use std::process::ExitCode;
use log::{info, error};

use slice_config::init::init_logging_and_env;
use slice_config::settings::read_settings;
use slice_config::ConfigLoader;

fn main() -> ExitCode {
    let settings = match read_settings() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Erreur lors de la lecture des paramètres: {}", e);
            return ExitCode::FAILURE;
        }
    };
    init_logging_and_env(&settings.log_level);

    let path = env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or(settings.slices_path);

    let mut loader = ConfigLoader::new();
    if let Err(e) = loader.load(&path) {
        error!("Failed to load slices from {}: {}", path.display(), e);
        return ExitCode::FAILURE;
    }
    info!("{} slice(s) available", loader.len());

    let mut slices: Vec<_> = loader.get_slices().iter().collect();
    slices.sort_by(|a, b| a.0.cmp(b.0));
    for (name, slice) in slices {
        println!("{}: {}", name, slice);
    }
    ExitCode::SUCCESS
}
