//! Working-directory state and textual path resolution.
//!
//! Paths are kept internally with `/` separators and converted to the
//! platform's native separator only when handed to the filesystem. Nothing in
//! this module touches the disk: navigating to a directory that does not
//! exist succeeds, and the error only shows up when a file operation runs.

use std::fmt;

/// Internal separator used for `base_dir` and conformed fragments.
pub const SEP: char = '/';

/// Target platform whose path rules apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    Posix,
}

impl Platform {
    /// Platform of the current build target.
    pub const fn current() -> Self {
        if cfg!(windows) {
            Platform::Windows
        } else {
            Platform::Posix
        }
    }

    pub fn native_separator(self) -> char {
        match self {
            Platform::Windows => '\\',
            Platform::Posix => '/',
        }
    }

    /// Root used when no origin or application directory is usable.
    pub fn root(self) -> &'static str {
        match self {
            Platform::Windows => "C:/",
            Platform::Posix => "/",
        }
    }

    /// Absolute-path detection.
    ///
    /// - Windows: starts with an uppercase drive letter and contains `:`, or
    ///   contains a drive separator (`:/` or `:\`).
    /// - Posix: starts with `/`, or matches the drive-letter rule
    ///   (compatibility with scripts written on Windows).
    ///
    /// Saved scripts depend on these rules; keep them as they are.
    pub fn is_absolute(self, fragment: &str) -> bool {
        let drive = fragment.starts_with(|c: char| c.is_ascii_uppercase()) && fragment.contains(':');
        match self {
            Platform::Windows => drive || fragment.contains(":/") || fragment.contains(":\\"),
            Platform::Posix => fragment.starts_with('/') || drive,
        }
    }

    /// `dir` must be conformed and end with `/`.
    fn is_root(self, dir: &str) -> bool {
        let trimmed = &dir[..dir.len() - 1];
        match trimmed.rfind(SEP) {
            None => trimmed.is_empty() || trimmed.ends_with(':'),
            Some(_) => trimmed.ends_with(':'),
        }
    }
}

/// Rendering styles for the current directory (see `postdir`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathStyle {
    /// Forward slashes, the internal form.
    Slash,
    /// The platform's own separator.
    Native,
    /// Backslashes regardless of platform.
    NativeWin,
}

impl PathStyle {
    pub const ALL: [PathStyle; 3] = [PathStyle::Slash, PathStyle::Native, PathStyle::NativeWin];

    pub fn label(self) -> &'static str {
        match self {
            PathStyle::Slash => "slash",
            PathStyle::Native => "native",
            PathStyle::NativeWin => "native_win",
        }
    }
}

/// Where the working directory starts, and where `cd ~` returns to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Origin {
    /// Path of a reference file; its directory becomes the base directory.
    pub reference: Option<String>,
    /// Application directory used when `reference` is missing or unusable.
    pub app_dir: Option<String>,
}

impl Origin {
    pub fn new(reference: Option<String>, app_dir: Option<String>) -> Self {
        Self { reference, app_dir }
    }
}

/// Outcome of a navigation command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    /// Reset to the origin directory.
    Origin,
    /// Moved up one level.
    Parent,
    /// `..` at a filesystem root; nothing changed.
    AtRoot,
    /// Switched to an absolute directory.
    Changed,
    /// Relative or empty target; nothing changed.
    Ignored(String),
}

impl fmt::Display for Navigation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Navigation::Origin => write!(f, "reset to origin"),
            Navigation::Parent => write!(f, "moved to parent"),
            Navigation::AtRoot => write!(f, "already at root"),
            Navigation::Changed => write!(f, "changed directory"),
            Navigation::Ignored(p) => write!(f, "ignored non-absolute target `{}`", p),
        }
    }
}

/// Convert a fragment to the internal `/` convention.
pub fn conform(fragment: &str) -> String {
    fragment.replace('\\', "/")
}

fn with_trailing_sep(mut dir: String) -> String {
    if !dir.ends_with(SEP) {
        dir.push(SEP);
    }
    dir
}

/// Owns the current working directory and resolves fragments against it.
#[derive(Debug, Clone)]
pub struct PathResolver {
    platform: Platform,
    origin: Origin,
    base_dir: String,
}

impl PathResolver {
    /// Create a resolver for the current platform seeded from `origin`.
    pub fn new(origin: Origin) -> Self {
        Self::with_platform(Platform::current(), origin)
    }

    pub fn with_platform(platform: Platform, origin: Origin) -> Self {
        let mut resolver = Self {
            platform,
            origin,
            base_dir: platform.root().to_string(),
        };
        resolver.reset();
        resolver
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    pub fn origin(&self) -> &Origin {
        &self.origin
    }

    /// Current base directory, `/`-separated with a trailing `/`.
    pub fn base_dir(&self) -> &str {
        &self.base_dir
    }

    pub fn is_absolute(&self, fragment: &str) -> bool {
        self.platform.is_absolute(fragment)
    }

    /// Remember `origin_path` as the new reference and reset to its directory.
    pub fn reset_to_origin(&mut self, origin_path: Option<&str>) {
        self.origin.reference = origin_path.map(str::to_string);
        self.reset();
    }

    /// Reset to the remembered origin.
    pub fn reset(&mut self) {
        self.base_dir = self.origin_dir();
    }

    fn origin_dir(&self) -> String {
        let reference = self
            .origin
            .reference
            .as_deref()
            .map(conform)
            .filter(|r| self.platform.is_absolute(r));
        if let Some(reference) = reference {
            if let Some(idx) = reference.rfind(SEP) {
                return reference[..=idx].to_string();
            }
        }

        match self
            .origin
            .app_dir
            .as_deref()
            .map(conform)
            .filter(|d| self.platform.is_absolute(d))
        {
            Some(dir) => with_trailing_sep(dir),
            None => self.platform.root().to_string(),
        }
    }

    /// Apply a `cd` argument: `~`, `..`, or an absolute directory.
    pub fn navigate(&mut self, command: &str) -> Navigation {
        let outcome = match command {
            "~" => {
                self.reset();
                Navigation::Origin
            }
            ".." => self.parent(),
            other => {
                let target = conform(other);
                if self.platform.is_absolute(&target) {
                    self.base_dir = with_trailing_sep(target);
                    Navigation::Changed
                } else {
                    Navigation::Ignored(other.to_string())
                }
            }
        };
        tracing::debug!(command, base_dir = %self.base_dir, "navigate: {}", outcome);
        outcome
    }

    fn parent(&mut self) -> Navigation {
        if self.platform.is_root(&self.base_dir) {
            return Navigation::AtRoot;
        }
        let trimmed = &self.base_dir[..self.base_dir.len() - 1];
        match trimmed.rfind(SEP) {
            Some(idx) => {
                self.base_dir.truncate(idx + 1);
                Navigation::Parent
            }
            None => Navigation::AtRoot,
        }
    }

    /// Resolve `fragment` to an absolute path with native separators.
    ///
    /// Relative fragments are appended to the base directory as text; `.`
    /// and `..` segments are left for the OS to interpret.
    pub fn resolve(&self, fragment: &str) -> String {
        let conformed = conform(fragment);
        let joined = if self.platform.is_absolute(&conformed) {
            conformed
        } else {
            format!("{}{}", self.base_dir, conformed)
        };
        self.to_native(&joined)
    }

    pub fn native_base_dir(&self) -> String {
        self.to_native(&self.base_dir)
    }

    pub fn render(&self, style: PathStyle) -> String {
        match style {
            PathStyle::Slash => self.base_dir.clone(),
            PathStyle::Native => self.native_base_dir(),
            PathStyle::NativeWin => self.base_dir.replace(SEP, "\\"),
        }
    }

    fn to_native(&self, path: &str) -> String {
        match self.platform {
            Platform::Windows => path.replace(SEP, "\\"),
            Platform::Posix => path.to_string(),
        }
    }
}
