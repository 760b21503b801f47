use std::path::PathBuf;

/// Config names looked up in the home directory, in order.
const DEFAULT_CONFIG_FILES: [&str; 4] = [".jrpc.toml", ".jrpc.yaml", ".jrpc.yml", ".jrpc.json"];

pub(crate) fn default_config_paths() -> Vec<PathBuf> {
    let Some(home) = user_home_dir() else {
        return Vec::new();
    };
    DEFAULT_CONFIG_FILES
        .iter()
        .map(|name| home.join(name))
        .collect()
}

fn user_home_dir() -> Option<PathBuf> {
    #[cfg(windows)]
    {
        if let Some(value) = std::env::var_os("USERPROFILE") {
            return Some(PathBuf::from(value));
        }
    }

    std::env::var_os("HOME").map(PathBuf::from)
}
