//! Orchestrator (spec §4.8): the per-compilation driver. Consults the
//! signature cache before running the Transformer, runs the three
//! emitters plus composition on a miss, and writes the result
//! atomically.

use std::path::{Path, PathBuf};

use fakt_cache::{compute_signature, DeclKind, SignatureCache};
use fakt_codegen::{compose_file, EmitTarget};
use fakt_diagnostic::{Diagnostic, InternalError};
use fakt_frontend::ValidatedDeclaration;
use fakt_ir::{DeclHandle, DeclarationSource, IrClassLookup, RoutingRecord};

use crate::telemetry::{FakeMetrics, Telemetry};

#[derive(Debug, thiserror::Error)]
pub enum OrchestratorError {
    #[error("failed to create output directory {path}: {source}")]
    CreateOutputDir { path: PathBuf, source: std::io::Error },
}

/// One declaration's outcome. The orchestrator never stops the whole
/// compilation on a single declaration's failure (spec §4.8, §7.1–§7.2);
/// the caller decides what to do with each outcome (report a
/// diagnostic, log, or simply count it).
#[derive(Debug)]
pub enum DeclarationOutcome {
    CacheHit,
    Generated { path: PathBuf },
    Rejected(Diagnostic),
    Internal(InternalError),
    Io { qualified_id: String, error: std::io::Error },
}

/// Drives one compilation (spec §4.8). Constructed once per routing
/// record; `process` is called once per validated declaration.
pub struct Orchestrator<'a> {
    routing: &'a RoutingRecord,
    cache: SignatureCache,
    telemetry: Telemetry,
}

impl<'a> Orchestrator<'a> {
    /// Opens the telemetry timer and creates `routing.output_dir` if it
    /// does not already exist (spec §4.8 steps 1–2).
    pub fn new(routing: &'a RoutingRecord) -> Result<Self, OrchestratorError> {
        std::fs::create_dir_all(&routing.output_dir).map_err(|source| OrchestratorError::CreateOutputDir {
            path: routing.output_dir.clone(),
            source,
        })?;
        Ok(Self {
            routing,
            cache: SignatureCache::new(&routing.output_dir),
            telemetry: Telemetry::start(),
        })
    }

    pub fn telemetry(&self) -> &Telemetry {
        &self.telemetry
    }

    /// Runs one declaration through validate → signature check →
    /// (on miss) transform → emit → compose → atomic write → record
    /// (spec §4.8 step 3).
    pub fn process<S, L>(&self, source: &S, adapter: &L, decl: DeclHandle) -> DeclarationOutcome
    where
        S: DeclarationSource + ?Sized,
        L: IrClassLookup + ?Sized,
    {
        let started = std::time::Instant::now();

        let validated = match fakt_frontend::process_declaration(source, decl) {
            Ok(validated) => validated,
            Err(diagnostic) => {
                self.telemetry.record_failure(source.qualified_id(decl));
                return DeclarationOutcome::Rejected(diagnostic);
            }
        };

        let (qualified_id, signature) = signature_of(&validated);
        if self.cache.contains(&signature) {
            self.telemetry.record_cache_hit();
            tracing::debug!(qualified_id = %qualified_id, "cache hit, skipping transform and emit");
            return DeclarationOutcome::CacheHit;
        }

        let file_body = match self.emit(source, adapter, decl, &validated) {
            Ok(body) => body,
            Err(error) => {
                self.telemetry.record_failure(qualified_id);
                return DeclarationOutcome::Internal(error);
            }
        };

        let file_path = self.file_path(declared_package(&validated), declared_simple_name(&validated));
        match write_atomically(&file_path, &file_body) {
            Ok(()) => {
                self.cache.record(&signature);
                self.telemetry.record_generated(FakeMetrics {
                    qualified_id,
                    duration: started.elapsed(),
                    generated_lines: file_body.lines().count(),
                    file_size_bytes: file_body.len(),
                    import_count: file_body.matches("\nimport ").count(),
                });
                tracing::info!(path = %file_path.display(), "fake written");
                DeclarationOutcome::Generated { path: file_path }
            }
            Err(error) => {
                self.telemetry.record_failure(qualified_id.clone());
                DeclarationOutcome::Io { qualified_id, error }
            }
        }
    }

    fn emit<S, L>(&self, source: &S, adapter: &L, decl: DeclHandle, validated: &ValidatedDeclaration) -> Result<String, InternalError>
    where
        S: DeclarationSource + ?Sized,
        L: IrClassLookup + ?Sized,
    {
        match validated {
            ValidatedDeclaration::Interface(interface) => {
                let model = fakt_transform::transform_interface(source, adapter, decl, interface)?;
                let pattern = model.pattern(|| fakt_transform::classify(adapter, model.source_handle, &model.functions));
                let target = EmitTarget::from_interface(&model, pattern);
                let imports = fakt_resolve::resolve_imports(&model.package_name, &model.properties, &model.functions);
                Ok(compose_file(&target, &imports))
            }
            ValidatedDeclaration::Class(class) => {
                let model = fakt_transform::transform_class(source, adapter, decl, class)?;
                let functions: Vec<fakt_ir::IrFunctionMeta> = model.all_functions().cloned().collect();
                let pattern = model.pattern(|| fakt_transform::classify(adapter, model.source_handle, &functions));
                let target = EmitTarget::from_class(&model, pattern);
                let properties: Vec<fakt_ir::IrPropertyMeta> = model.all_properties().cloned().collect();
                let imports = fakt_resolve::resolve_imports(&model.package_name, &properties, &functions);
                Ok(compose_file(&target, &imports))
            }
        }
    }

    /// `<output_dir>/<package-as-path>/Fake<Name>Impl.kt` (spec §6.3).
    fn file_path(&self, package_name: &str, simple_name: &str) -> PathBuf {
        let mut path = self.routing.output_dir.clone();
        for segment in package_name.split('.').filter(|s| !s.is_empty()) {
            path.push(segment);
        }
        path.push(format!("Fake{simple_name}Impl.kt"));
        path
    }
}

fn declared_package(validated: &ValidatedDeclaration) -> &str {
    match validated {
        ValidatedDeclaration::Interface(interface) => &interface.package_name,
        ValidatedDeclaration::Class(class) => &class.package_name,
    }
}

fn declared_simple_name(validated: &ValidatedDeclaration) -> &str {
    match validated {
        ValidatedDeclaration::Interface(interface) => &interface.simple_name,
        ValidatedDeclaration::Class(class) => &class.simple_name,
    }
}

/// Computes `(qualified_id, signature)` from frontend descriptors alone
/// (spec §4.7), before the Transformer runs.
fn signature_of(validated: &ValidatedDeclaration) -> (String, String) {
    match validated {
        ValidatedDeclaration::Interface(interface) => {
            let signature = compute_signature(
                DeclKind::Interface,
                &interface.qualified_id,
                interface.type_params.len(),
                interface.all_properties().count(),
                interface.all_functions().count(),
            );
            (interface.qualified_id.clone(), signature)
        }
        ValidatedDeclaration::Class(class) => {
            let signature = compute_signature(
                DeclKind::Class,
                &class.qualified_id,
                class.type_params.len(),
                class.all_properties().count(),
                class.all_functions().count(),
            );
            (class.qualified_id.clone(), signature)
        }
    }
}

/// Writes `contents` to `path` via a temp file in the same directory
/// followed by a rename, so readers only ever observe the old or the
/// new file, never a partial write (spec §4.8, §5 "Atomic write").
fn write_atomically(path: &Path, contents: &str) -> std::io::Result<()> {
    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    std::fs::create_dir_all(dir)?;
    let mut temp = tempfile::NamedTempFile::new_in(dir)?;
    use std::io::Write as _;
    temp.write_all(contents.as_bytes())?;
    temp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
