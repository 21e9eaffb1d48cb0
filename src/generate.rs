//! Asset generation: the favicon, icon and PWA procedures.
//!
//! Each procedure is two steps:
//!
//! 1. **Plan**: turn the [`AssetConfig`] lists into an ordered list of
//!    [`AssetJob`]s. Pure; no filesystem access.
//! 2. **Run**: create every output directory the plan touches, then hand
//!    each job to the [`ImageBackend`] in order.
//!
//! ## Output Structure (stock config)
//!
//! ```text
//! public/
//! ├── assets/favicons/
//! │   └── favicon-{16,32,48}x….webp            # favicons
//! └── images/
//!     ├── icons/
//!     │   ├── icon-{72…512}x….webp             # icons
//!     │   ├── badge-72x72.webp                 # icons (special)
//!     │   ├── shortcut-{appointments,messages}.webp
//!     │   ├── apple-launch-{750x1334,1125x2436}.webp
//!     │   └── maskable-icon-{192,512}x….webp   # pwa
//!     └── screenshots/
//!         ├── {home,appointment,profile}-screen.webp  # icons
//!         └── wide-dashboard.webp              # pwa
//! ```
//!
//! ## Failure Handling
//!
//! A failing asset is recorded as [`AssetStatus::Failed`] and the run moves
//! on to the next job. Nothing is retried and already written files are left
//! in place. Only a directory that cannot be created aborts a procedure, and
//! [`run_each`] still moves on to the procedures after it.

use crate::config::{AssetConfig, NamedAsset};
use crate::imaging::{
    BackendError, ImageBackend, MaskableParams, MockupParams, Quality, ResizeParams, SafeZone,
    Size,
};
use crate::naming::{
    FAVICON_PREFIX, ICON_PREFIX, MASKABLE_PREFIX, named_file_name, sized_file_name,
};
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("Failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// One of the three asset families.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Procedure {
    Favicons,
    Icons,
    Pwa,
}

impl Procedure {
    pub const ALL: [Procedure; 3] = [Procedure::Favicons, Procedure::Icons, Procedure::Pwa];

    /// Plural noun used in summaries ("All favicons generated").
    pub fn noun(self) -> &'static str {
        match self {
            Procedure::Favicons => "favicons",
            Procedure::Icons => "icons",
            Procedure::Pwa => "PWA assets",
        }
    }
}

impl fmt::Display for Procedure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.noun())
    }
}

/// How an asset is derived from the source.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AssetKind {
    /// Plain stretch to the target size.
    Resize,
    /// Safe-zone padded icon on a transparent canvas.
    Maskable(SafeZone),
    /// Dashboard mockup with the source as logo.
    Mockup,
}

/// A single planned output.
#[derive(Debug, Clone, PartialEq)]
pub struct AssetJob {
    pub kind: AssetKind,
    pub output: PathBuf,
    pub size: Size,
}

impl AssetJob {
    fn resize(dir: &Path, file_name: String, size: Size) -> Self {
        Self {
            kind: AssetKind::Resize,
            output: dir.join(file_name),
            size,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum AssetStatus {
    Created,
    Failed(String),
}

/// Outcome of one job.
#[derive(Debug, Clone, PartialEq)]
pub struct AssetRecord {
    pub job: AssetJob,
    pub status: AssetStatus,
}

impl AssetRecord {
    pub fn is_created(&self) -> bool {
        self.status == AssetStatus::Created
    }
}

/// Everything one procedure did, in job order.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationReport {
    pub procedure: Procedure,
    pub records: Vec<AssetRecord>,
}

impl GenerationReport {
    pub fn created(&self) -> usize {
        self.records.iter().filter(|r| r.is_created()).count()
    }

    pub fn failed(&self) -> usize {
        self.records.len() - self.created()
    }
}

// ============================================================================
// Planning
// ============================================================================

/// Build the ordered job list for `procedure`.
pub fn plan(procedure: Procedure, config: &AssetConfig) -> Vec<AssetJob> {
    let public = Path::new(&config.public_dir);
    match procedure {
        Procedure::Favicons => plan_favicons(public, config),
        Procedure::Icons => plan_icons(public, config),
        Procedure::Pwa => plan_pwa(public, config),
    }
}

fn plan_favicons(public: &Path, config: &AssetConfig) -> Vec<AssetJob> {
    let dir = public.join(&config.favicons.dir);
    config
        .favicons
        .sizes
        .iter()
        .map(|&size| AssetJob::resize(&dir, sized_file_name(FAVICON_PREFIX, size), size))
        .collect()
}

fn plan_icons(public: &Path, config: &AssetConfig) -> Vec<AssetJob> {
    let icons_dir = public.join(&config.icons.dir);
    let screenshots_dir = public.join(&config.screenshots.dir);
    let named = |dir: &Path, asset: &NamedAsset| {
        AssetJob::resize(dir, named_file_name(&asset.name), asset.size)
    };

    let icons = config
        .icons
        .sizes
        .iter()
        .map(|&size| AssetJob::resize(&icons_dir, sized_file_name(ICON_PREFIX, size), size));
    let special = config.icons.special.iter().map(|a| named(&icons_dir, a));
    let screenshots = config
        .screenshots
        .assets
        .iter()
        .map(|a| named(&screenshots_dir, a));

    icons.chain(special).chain(screenshots).collect()
}

fn plan_pwa(public: &Path, config: &AssetConfig) -> Vec<AssetJob> {
    let icons_dir = public.join(&config.icons.dir);
    let screenshots_dir = public.join(&config.screenshots.dir);
    let safe_zone = SafeZone(config.pwa.safe_zone);

    let mut jobs: Vec<AssetJob> = config
        .pwa
        .maskable_sizes
        .iter()
        .map(|&size| AssetJob {
            kind: AssetKind::Maskable(safe_zone),
            output: icons_dir.join(sized_file_name(MASKABLE_PREFIX, size)),
            size,
        })
        .collect();
    jobs.push(AssetJob {
        kind: AssetKind::Mockup,
        output: screenshots_dir.join(named_file_name(&config.pwa.wide_name)),
        size: config.pwa.wide_size,
    });
    jobs
}

/// Output directories of `jobs`, deduplicated, in first-use order.
pub fn output_dirs(jobs: &[AssetJob]) -> Vec<PathBuf> {
    let mut dirs: Vec<PathBuf> = Vec::new();
    for dir in jobs.iter().filter_map(|j| j.output.parent()) {
        if !dirs.iter().any(|d| d == dir) {
            dirs.push(dir.to_path_buf());
        }
    }
    dirs
}

// ============================================================================
// Running
// ============================================================================

fn execute(
    backend: &impl ImageBackend,
    source: &Path,
    quality: Quality,
    job: &AssetJob,
) -> Result<(), BackendError> {
    let source = source.to_path_buf();
    let output = job.output.clone();
    match job.kind {
        AssetKind::Resize => backend.resize(&ResizeParams {
            source,
            output,
            size: job.size,
            quality,
        }),
        AssetKind::Maskable(safe_zone) => backend.maskable(&MaskableParams {
            source,
            output,
            size: job.size,
            safe_zone,
            quality,
        }),
        AssetKind::Mockup => backend.mockup(&MockupParams {
            source,
            output,
            size: job.size,
            quality,
        }),
    }
}

/// Run one procedure to completion.
///
/// `on_record` sees each outcome as soon as the job finishes, so callers can
/// stream progress. Per-asset failures never return `Err`.
pub fn run(
    backend: &impl ImageBackend,
    procedure: Procedure,
    config: &AssetConfig,
    mut on_record: impl FnMut(&AssetRecord),
) -> Result<GenerationReport, GenerateError> {
    let jobs = plan(procedure, config);

    for dir in output_dirs(&jobs) {
        std::fs::create_dir_all(&dir).map_err(|source| GenerateError::CreateDir {
            path: dir.clone(),
            source,
        })?;
    }

    let source = Path::new(&config.source);
    let quality = Quality::new(config.quality);
    let mut records = Vec::with_capacity(jobs.len());

    for job in jobs {
        let status = match execute(backend, source, quality, &job) {
            Ok(()) => AssetStatus::Created,
            Err(e) => AssetStatus::Failed(e.to_string()),
        };
        let record = AssetRecord { job, status };
        on_record(&record);
        records.push(record);
    }

    Ok(GenerationReport { procedure, records })
}

/// Run several procedures in order, e.g. for `all`.
///
/// A procedure aborted by [`GenerateError`] does not stop the ones after it.
/// `on_finish` sees every outcome; the first error is returned once all
/// procedures have had their turn.
pub fn run_each(
    backend: &impl ImageBackend,
    procedures: &[Procedure],
    config: &AssetConfig,
    mut on_record: impl FnMut(&AssetRecord),
    mut on_finish: impl FnMut(Procedure, &Result<GenerationReport, GenerateError>),
) -> Result<(), GenerateError> {
    let mut first_error = None;
    for &procedure in procedures {
        let outcome = run(backend, procedure, config, &mut on_record);
        on_finish(procedure, &outcome);
        if let Err(e) = outcome {
            first_error.get_or_insert(e);
        }
    }
    first_error.map_or(Ok(()), Err)
}
