//! The project a command runs against: its root, its configuration and the
//! storage generated files go through.

use std::path::{Path, PathBuf};

use stencil_core::{CONFIG_FILE, Config, LocalStorage, MemoryStorage, Result, Storage};

use crate::reports::{PreviewFile, PreviewReport};

pub struct Project {
    root: PathBuf,
    config: Config,
    storage: ProjectStorage,
}

enum ProjectStorage {
    Local(LocalStorage),
    DryRun(DryRunStorage),
}

impl Project {
    /// Open the project described by `config_path` (or `./stencil.toml`).
    /// Paths in the configuration are relative to the directory holding it.
    pub fn open(config_path: Option<&Path>, dry_run: bool) -> Result<Self> {
        let config_path = config_path.unwrap_or(Path::new(CONFIG_FILE));
        let root = config_path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        let config = Config::load(&LocalStorage, config_path)?;
        tracing::debug!(root = %root.display(), dry_run, "opened project");

        let storage = if dry_run {
            ProjectStorage::DryRun(DryRunStorage::default())
        } else {
            ProjectStorage::Local(LocalStorage)
        };
        Ok(Self {
            root,
            config,
            storage,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve a project-relative path. Absolute paths are kept as given.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        self.root.join(path)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn storage(&self) -> &dyn Storage {
        match &self.storage {
            ProjectStorage::Local(storage) => storage,
            ProjectStorage::DryRun(storage) => storage,
        }
    }

    /// Files a dry run held back from disk, or `None` when writing for real.
    pub fn preview(&self) -> Option<PreviewReport> {
        let ProjectStorage::DryRun(storage) = &self.storage else {
            return None;
        };
        let files = storage
            .pending
            .paths()
            .into_iter()
            .filter_map(|path| {
                let content = storage.pending.get(&path)?;
                Some(PreviewFile { path, content })
            })
            .collect();
        Some(PreviewReport { files })
    }
}

/// Reads fall through to disk until a path has been written; writes only
/// ever reach memory.
#[derive(Debug, Default)]
struct DryRunStorage {
    disk: LocalStorage,
    pending: MemoryStorage,
}

impl Storage for DryRunStorage {
    fn read_to_string(&self, path: &Path) -> Result<String> {
        match self.pending.get(path) {
            Some(content) => Ok(content),
            None => self.disk.read_to_string(path),
        }
    }

    fn write(&self, path: &Path, content: &str) -> Result<()> {
        tracing::debug!(path = %path.display(), "dry run, write held in memory");
        self.pending.write(path, content)
    }

    fn exists(&self, path: &Path) -> bool {
        self.pending.exists(path) || self.disk.exists(path)
    }
}
