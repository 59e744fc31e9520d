pub mod read_settings;
pub mod write_settings;
pub mod config_dirs;

// Re-export commonly used types/functions for convenience
pub use read_settings::{load_settings, load_settings_from};
pub use write_settings::{save_settings, save_settings_to, settings_path, Settings, SettingsError};
pub use config_dirs::{app_dir, project_config_dir};
