use std::env;
use std::io;
use std::path::PathBuf;

use postgen::config::{read_config, Config};

use crate::config_data::write_sample_cfg;
use crate::CFG_FILE_NAME;

fn get_config_path() -> Option<PathBuf> {
    let exe_dir = env::current_exe().ok()
        .and_then(|exe| exe.parent().map(|dir| dir.to_path_buf()));
    let cur_dir = env::current_dir().ok();
    let cfg_dir = dirs::config_dir();

    [exe_dir, cur_dir, cfg_dir].into_iter()
        .flatten()
        .map(|dir| dir.join(CFG_FILE_NAME))
        .find(|path| path.exists())
}

pub(crate) fn open_config(cfg_path: Option<PathBuf>) -> Result<Config, String> {
    let config_path = match cfg_path.or_else(get_config_path) {
        None => return Err(format!("Could not find {}", CFG_FILE_NAME)),
        Some(x) => x,
    };

    println!("Reading config from {}", config_path.display());
    read_config(&config_path).map_err(|e| e.to_string())
}

pub(crate) fn generate_cfg(config_path: &Option<PathBuf>) -> io::Result<PathBuf> {
    let path: PathBuf = match config_path {
        Some(path) => path.clone(),
        None => {
            let cfg_dir = dirs::config_dir()
                .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "Could not find user config dir"))?;
            cfg_dir.join(CFG_FILE_NAME)
        }
    };

    println!("Writing sample config to {}", path.display());
    write_sample_cfg(&path)?;

    Ok(path)
}
