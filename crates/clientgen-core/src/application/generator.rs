//! Generator Service - main application orchestrator.
//!
//! This service coordinates the generation workflow:
//! 1. Resolve namespace/path targets for the request
//! 2. Find the stub template (custom directory, then bundled)
//! 3. Render placeholder tokens
//! 4. Emit the file idempotently (existing targets are skipped, never
//!    overwritten)
//!
//! Non-fatal conditions (target exists, stub missing) are recorded as step
//! outcomes in a [`GenerationReport`]; only hard failures (I/O, unparseable
//! FQDN, missing source class) surface as errors.

use std::fmt;
use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, StubFlavor, StubId, StubStore},
    },
    domain::{
        ClassKind, GenerationRequest, GeneratorConfig, Overrides, ParsedFqdn, ResolvedTarget,
        TokenContext, fqdn,
        resolve::{NAMESPACE_SEPARATOR, join_namespace, resolve, resolve_macro, resolve_shared},
        validate_identifier,
    },
    error::{ClientgenError, ClientgenResult},
};

/// Which class a `test:*` command expects its FQDN to name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestTarget {
    Kind(ClassKind),
    /// Exact-match `BadResponse`; a generic `{Name}Response` does not qualify.
    BadResponse,
}

impl fmt::Display for TestTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Kind(kind) => write!(f, "{}", kind.suffix()),
            Self::BadResponse => write!(f, "BadResponse"),
        }
    }
}

/// Outcome of one emission step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    Created(PathBuf),
    /// Target already on disk; skipped, content untouched.
    AlreadyExists(PathBuf),
    /// No stub found for this step; the step was skipped.
    StubMissing(String),
    /// Aggregate test generation: the source class file was not found.
    SourceMissing(String),
}

/// One labelled step of a generation run.
#[derive(Debug, Clone)]
pub struct Step {
    /// The class the step concerns, e.g. `FetchTweetsAttribute` or
    /// `FetchTweetsAttributeTest`.
    pub label: String,
    pub outcome: StepOutcome,
}

/// Ordered record of everything a command invocation did (and skipped).
#[derive(Debug, Clone, Default)]
pub struct GenerationReport {
    pub steps: Vec<Step>,
}

impl GenerationReport {
    pub fn push(&mut self, label: impl Into<String>, outcome: StepOutcome) {
        self.steps.push(Step {
            label: label.into(),
            outcome,
        });
    }

    pub fn extend(&mut self, other: GenerationReport) {
        self.steps.extend(other.steps);
    }

    pub fn created_count(&self) -> usize {
        self.steps
            .iter()
            .filter(|s| matches!(s.outcome, StepOutcome::Created(_)))
            .count()
    }
}

/// Main generation service.
///
/// Stateless over injected ports; one instance serves any number of
/// invocations.
pub struct GeneratorService<'a> {
    stubs: &'a dyn StubStore,
    fs: &'a dyn Filesystem,
    config: &'a GeneratorConfig,
}

impl<'a> GeneratorService<'a> {
    pub fn new(
        stubs: &'a dyn StubStore,
        fs: &'a dyn Filesystem,
        config: &'a GeneratorConfig,
    ) -> Self {
        Self { stubs, fs, config }
    }

    /// Generate one class (and, when enabled, its test) for the request.
    #[instrument(skip_all, fields(client = %request.client, name = %request.name, kind = %request.kind))]
    pub fn generate(&self, request: &GenerationRequest) -> ClientgenResult<GenerationReport> {
        self.generate_with_stub(request, StubId::from_kind(request.kind))
    }

    /// Generate the `BadResponse` class for a client. Internally this is a
    /// Response named `Bad`, rendered from the dedicated BadResponse stub.
    pub fn generate_bad_response(
        &self,
        client: &str,
        overrides: Overrides,
        generate_tests: bool,
    ) -> ClientgenResult<GenerationReport> {
        let request = GenerationRequest::new(client, "Bad", ClassKind::Response)
            .with_overrides(overrides)
            .with_tests(generate_tests);
        self.generate_with_stub(&request, StubId::BadResponse)
    }

    /// Generate `{Client}Macro.php` (and its test), the class the macro
    /// registrar discovers by directory convention.
    #[instrument(skip_all, fields(client = %client))]
    pub fn generate_macro(
        &self,
        client: &str,
        generate_tests: bool,
    ) -> ClientgenResult<GenerationReport> {
        validate_identifier("client name", client)?;

        let target = resolve_macro(client, self.config);
        let mut tokens = TokenContext::new();
        tokens.insert("namespace", target.namespace.clone());
        tokens.insert("client", client);
        tokens.insert("method", client.to_lowercase());
        tokens.insert("test_namespace", target.test_namespace.clone());

        let mut report = GenerationReport::default();
        let outcome =
            self.render_and_emit(StubId::Macro, StubFlavor::Class, &tokens, &target.class_path)?;
        report.push(target.class_name.clone(), outcome);

        if generate_tests {
            let outcome =
                self.render_and_emit(StubId::Macro, StubFlavor::Test, &tokens, &target.test_path)?;
            report.push(format!("{}Test", target.class_name), outcome);
        }

        Ok(report)
    }

    /// Generate the shared `HasStatus` trait (and its test). The trait is
    /// client-independent and lands directly under the clients root.
    #[instrument(skip_all)]
    pub fn generate_has_status(&self, generate_tests: bool) -> ClientgenResult<GenerationReport> {
        let target = resolve_shared("HasStatus", self.config);
        let mut tokens = TokenContext::new();
        tokens.insert("namespace", target.namespace.clone());
        tokens.insert("test_namespace", target.test_namespace.clone());

        let mut report = GenerationReport::default();
        let outcome = self.render_and_emit(
            StubId::HasStatus,
            StubFlavor::Class,
            &tokens,
            &target.class_path,
        )?;
        report.push(target.class_name.clone(), outcome);

        if generate_tests {
            let outcome = self.render_and_emit(
                StubId::HasStatus,
                StubFlavor::Test,
                &tokens,
                &target.test_path,
            )?;
            report.push(format!("{}Test", target.class_name), outcome);
        }

        Ok(report)
    }

    /// Sequence Attribute → Request → Response → BadResponse → Factory.
    #[instrument(skip_all, fields(client = %client, name = %name))]
    pub fn generate_all(
        &self,
        client: &str,
        name: &str,
        generate_tests: bool,
    ) -> ClientgenResult<GenerationReport> {
        let mut report = GenerationReport::default();

        for kind in [ClassKind::Attribute, ClassKind::Request, ClassKind::Response] {
            let request = GenerationRequest::new(client, name, kind).with_tests(generate_tests);
            report.extend(self.generate(&request)?);
        }

        report.extend(self.generate_bad_response(client, Overrides::default(), generate_tests)?);

        let request =
            GenerationRequest::new(client, name, ClassKind::Factory).with_tests(generate_tests);
        report.extend(self.generate(&request)?);

        Ok(report)
    }

    /// Generate a test for an already-generated class, addressed by FQDN.
    ///
    /// Fatal (exit-1) conditions, per the error taxonomy: unparseable FQDN,
    /// kind mismatch with `expected`, and missing source class file.
    #[instrument(skip_all, fields(fqdn = %class_fqdn))]
    pub fn generate_test_for(
        &self,
        class_fqdn: &str,
        expected: TestTarget,
        test_namespace: Option<String>,
    ) -> ClientgenResult<GenerationReport> {
        let parsed = fqdn::parse(class_fqdn)?;

        let matches = match expected {
            TestTarget::Kind(kind) => parsed.kind == kind,
            TestTarget::BadResponse => parsed.is_bad_response(),
        };
        if !matches {
            return Err(ApplicationError::KindMismatch {
                fqdn: class_fqdn.into(),
                expected: expected.to_string(),
            }
            .into());
        }

        let source = self.source_path(&parsed);
        if !self.fs.exists(&source) {
            warn!(path = %source.display(), "source class file not found");
            return Err(ApplicationError::SourceClassMissing {
                fqdn: class_fqdn.into(),
                path: source,
            }
            .into());
        }

        let request = GenerationRequest::new(&parsed.client, &parsed.name, parsed.kind)
            .with_overrides(Overrides {
                test_namespace,
                ..Overrides::default()
            });
        let mut target = resolve(&request, self.config);
        // The test imports the class from where it actually lives, which may
        // differ from the configured base namespace.
        target.namespace = parsed.namespace.clone();

        let tokens = self.tokens_for(&request, &target);
        let id = if parsed.is_bad_response() {
            StubId::BadResponse
        } else {
            StubId::from_kind(parsed.kind)
        };

        let outcome = self.render_and_emit(id, StubFlavor::Test, &tokens, &target.test_path)?;
        let mut report = GenerationReport::default();
        report.push(format!("{}Test", target.class_name), outcome);
        Ok(report)
    }

    /// Generate tests for every kind under `base_namespace` whose source
    /// class exists; missing sources are recorded and skipped, not fatal.
    #[instrument(skip_all, fields(base = %base_namespace, name = %name))]
    pub fn generate_all_tests(
        &self,
        base_namespace: &str,
        name: &str,
        test_namespace: Option<String>,
    ) -> ClientgenResult<GenerationReport> {
        validate_identifier("class name", name)?;

        let sep = NAMESPACE_SEPARATOR.to_string();
        let mut candidates: Vec<(String, TestTarget)> = ClassKind::ALL
            .into_iter()
            .map(|kind| {
                let fqdn = [
                    base_namespace,
                    self.config.segments.for_kind(kind),
                    &format!("{name}{}", kind.suffix()),
                ]
                .join(&sep);
                (fqdn, TestTarget::Kind(kind))
            })
            .collect();
        candidates.push((
            [
                base_namespace,
                self.config.segments.for_kind(ClassKind::Response),
                "BadResponse",
            ]
            .join(&sep),
            TestTarget::BadResponse,
        ));

        let mut report = GenerationReport::default();
        for (fqdn, expected) in candidates {
            match self.generate_test_for(&fqdn, expected, test_namespace.clone()) {
                Ok(partial) => report.extend(partial),
                Err(ClientgenError::Application(ApplicationError::SourceClassMissing {
                    ..
                })) => {
                    debug!(%fqdn, "source class missing, skipping test");
                    report.push(fqdn.clone(), StepOutcome::SourceMissing(fqdn));
                }
                Err(e) => return Err(e),
            }
        }
        Ok(report)
    }

    // ── internals ─────────────────────────────────────────────────────────

    fn generate_with_stub(
        &self,
        request: &GenerationRequest,
        id: StubId,
    ) -> ClientgenResult<GenerationReport> {
        validate_identifier("client name", &request.client)?;
        validate_identifier("class name", &request.name)?;

        let target = resolve(request, self.config);
        let tokens = self.tokens_for(request, &target);
        let mut report = GenerationReport::default();

        let outcome =
            self.render_and_emit(id, StubFlavor::Class, &tokens, &target.class_path)?;
        report.push(target.class_name.clone(), outcome);

        if request.generate_tests {
            let outcome =
                self.render_and_emit(id, StubFlavor::Test, &tokens, &target.test_path)?;
            report.push(format!("{}Test", target.class_name), outcome);
        }

        Ok(report)
    }

    /// Idempotent render + emit. Existing targets and missing stubs become
    /// step outcomes; filesystem failures propagate.
    fn render_and_emit(
        &self,
        id: StubId,
        flavor: StubFlavor,
        tokens: &TokenContext,
        path: &Path,
    ) -> ClientgenResult<StepOutcome> {
        if self.fs.exists(path) {
            debug!(path = %path.display(), "target exists, skipping");
            return Ok(StepOutcome::AlreadyExists(path.to_path_buf()));
        }

        let stub = match self.stubs.find(id, flavor) {
            Ok(text) => text,
            Err(ClientgenError::Application(ApplicationError::StubNotFound { stub })) => {
                warn!(%stub, "stub not found, skipping step");
                return Ok(StepOutcome::StubMissing(stub));
            }
            Err(e) => return Err(e),
        };

        let rendered = tokens.render(&stub);
        if let Some(parent) = path.parent() {
            self.fs.create_dir_all(parent)?;
        }
        self.fs.write_file(path, &rendered)?;
        info!(path = %path.display(), "file created");
        Ok(StepOutcome::Created(path.to_path_buf()))
    }

    /// Token values for one request, computed once and passed positionally.
    fn tokens_for(&self, request: &GenerationRequest, target: &ResolvedTarget) -> TokenContext {
        let sibling = |kind: ClassKind| {
            let mut r = request.clone();
            r.kind = kind;
            resolve(&r, self.config).namespace
        };
        let base = request
            .overrides
            .namespace
            .as_deref()
            .unwrap_or(&self.config.base_namespace);
        let base_namespace = join_namespace(&[base, &request.client]);

        TokenContext::for_target(
            target,
            &request.client,
            &request.name,
            &base_namespace,
            &sibling(ClassKind::Attribute),
            &sibling(ClassKind::Request),
            &sibling(ClassKind::Response),
        )
    }

    /// Where the source class for a parsed FQDN should live on disk.
    fn source_path(&self, parsed: &ParsedFqdn) -> PathBuf {
        match self.config.path_for_namespace(&parsed.namespace) {
            Some(dir) => dir.join(format!("{}.php", parsed.class_name)),
            // Namespace outside the configured base: fall back to the
            // default resolution for (client, name, kind).
            None => {
                let request =
                    GenerationRequest::new(&parsed.client, &parsed.name, parsed.kind);
                resolve(&request, self.config).class_path
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// Map-backed stub store: `None` simulates a missing stub.
    struct FakeStubs {
        stubs: HashMap<(StubId, StubFlavor), String>,
    }

    impl FakeStubs {
        fn full() -> Self {
            let mut stubs = HashMap::new();
            for id in [
                StubId::Attribute,
                StubId::Request,
                StubId::Response,
                StubId::BadResponse,
                StubId::Factory,
                StubId::Macro,
                StubId::HasStatus,
            ] {
                stubs.insert(
                    (id, StubFlavor::Class),
                    "namespace {{ namespace }};\nclass {{ name }}".to_string(),
                );
                stubs.insert(
                    (id, StubFlavor::Test),
                    "namespace {{ test_namespace }};\nuse {{ namespace }};".to_string(),
                );
            }
            Self { stubs }
        }

        fn without(mut self, id: StubId, flavor: StubFlavor) -> Self {
            self.stubs.remove(&(id, flavor));
            self
        }
    }

    impl StubStore for FakeStubs {
        fn find(&self, id: StubId, flavor: StubFlavor) -> ClientgenResult<String> {
            self.stubs.get(&(id, flavor)).cloned().ok_or_else(|| {
                ApplicationError::StubNotFound {
                    stub: id.file_name().to_string(),
                }
                .into()
            })
        }
    }

    /// Minimal in-memory filesystem; just enough for the service.
    #[derive(Default)]
    struct FakeFs {
        files: Mutex<HashMap<PathBuf, String>>,
    }

    impl FakeFs {
        fn with_file(self, path: &str, content: &str) -> Self {
            self.files
                .lock()
                .unwrap()
                .insert(PathBuf::from(path), content.into());
            self
        }

        fn read(&self, path: &str) -> Option<String> {
            self.files.lock().unwrap().get(Path::new(path)).cloned()
        }
    }

    impl Filesystem for FakeFs {
        fn create_dir_all(&self, _path: &Path) -> ClientgenResult<()> {
            Ok(())
        }

        fn write_file(&self, path: &Path, content: &str) -> ClientgenResult<()> {
            self.files
                .lock()
                .unwrap()
                .insert(path.to_path_buf(), content.into());
            Ok(())
        }

        fn read_file(&self, path: &Path) -> ClientgenResult<String> {
            self.files.lock().unwrap().get(path).cloned().ok_or_else(|| {
                ApplicationError::Filesystem {
                    path: path.to_path_buf(),
                    reason: "not found".into(),
                }
                .into()
            })
        }

        fn exists(&self, path: &Path) -> bool {
            self.files.lock().unwrap().contains_key(path)
        }

        fn list_dirs(&self, _path: &Path) -> ClientgenResult<Vec<PathBuf>> {
            Ok(vec![])
        }
    }

    fn config() -> GeneratorConfig {
        GeneratorConfig::default()
    }

    #[test]
    fn generates_class_and_test() {
        let stubs = FakeStubs::full();
        let fs = FakeFs::default();
        let config = config();
        let service = GeneratorService::new(&stubs, &fs, &config);

        let request = GenerationRequest::new("Twitter", "FetchTweets", ClassKind::Attribute);
        let report = service.generate(&request).unwrap();

        assert_eq!(report.created_count(), 2);
        let class = fs
            .read("app/Http/Clients/Twitter/Attributes/FetchTweetsAttribute.php")
            .unwrap();
        assert!(class.contains(r"namespace App\Http\Clients\Twitter\Attributes;"));
        assert!(fs
            .read("tests/Unit/Http/Clients/Twitter/Attributes/FetchTweetsAttributeTest.php")
            .is_some());
    }

    #[test]
    fn no_tests_suppresses_test_file() {
        let stubs = FakeStubs::full();
        let fs = FakeFs::default();
        let config = config();
        let service = GeneratorService::new(&stubs, &fs, &config);

        let request = GenerationRequest::new("Twitter", "FetchTweets", ClassKind::Request)
            .with_tests(false);
        let report = service.generate(&request).unwrap();

        assert_eq!(report.steps.len(), 1);
        assert!(fs
            .read("tests/Unit/Http/Clients/Twitter/Requests/FetchTweetsRequestTest.php")
            .is_none());
    }

    #[test]
    fn second_run_skips_without_overwriting() {
        let stubs = FakeStubs::full();
        let fs = FakeFs::default();
        let config = config();
        let service = GeneratorService::new(&stubs, &fs, &config);
        let request = GenerationRequest::new("Twitter", "FetchTweets", ClassKind::Response);

        service.generate(&request).unwrap();
        let first = fs
            .read("app/Http/Clients/Twitter/Responses/FetchTweetsResponse.php")
            .unwrap();

        let report = service.generate(&request).unwrap();
        assert!(report
            .steps
            .iter()
            .all(|s| matches!(s.outcome, StepOutcome::AlreadyExists(_))));
        let second = fs
            .read("app/Http/Clients/Twitter/Responses/FetchTweetsResponse.php")
            .unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn missing_stub_is_a_step_outcome_not_an_error() {
        let stubs = FakeStubs::full().without(StubId::Factory, StubFlavor::Class);
        let fs = FakeFs::default();
        let config = config();
        let service = GeneratorService::new(&stubs, &fs, &config);

        let request = GenerationRequest::new("Twitter", "FetchTweets", ClassKind::Factory);
        let report = service.generate(&request).unwrap();

        assert!(matches!(report.steps[0].outcome, StepOutcome::StubMissing(_)));
        // The test step still ran.
        assert!(matches!(report.steps[1].outcome, StepOutcome::Created(_)));
    }

    #[test]
    fn all_generates_five_classes_in_order() {
        let stubs = FakeStubs::full();
        let fs = FakeFs::default();
        let config = config();
        let service = GeneratorService::new(&stubs, &fs, &config);

        let report = service.generate_all("PayPal", "CreateCharge", false).unwrap();

        let labels: Vec<&str> = report.steps.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(
            labels,
            vec![
                "CreateChargeAttribute",
                "CreateChargeRequest",
                "CreateChargeResponse",
                "BadResponse",
                "CreateChargeFactory",
            ]
        );
        assert!(fs
            .read("app/Http/Clients/PayPal/Responses/BadResponse.php")
            .is_some());
    }

    #[test]
    fn has_status_lands_at_the_clients_root() {
        let stubs = FakeStubs::full();
        let fs = FakeFs::default();
        let config = config();
        let service = GeneratorService::new(&stubs, &fs, &config);

        let report = service.generate_has_status(true).unwrap();

        assert_eq!(report.created_count(), 2);
        let class = fs.read("app/Http/Clients/HasStatus.php").unwrap();
        assert!(class.contains(r"namespace App\Http\Clients;"));
        let test = fs.read("tests/Unit/Http/Clients/HasStatusTest.php").unwrap();
        assert!(test.contains(r"namespace Tests\Unit\Http\Clients;"));

        // Second run skips both files.
        let report = service.generate_has_status(true).unwrap();
        assert_eq!(report.created_count(), 0);
    }

    #[test]
    fn test_for_fqdn_requires_source_class() {
        let stubs = FakeStubs::full();
        let fs = FakeFs::default();
        let config = config();
        let service = GeneratorService::new(&stubs, &fs, &config);

        let err = service
            .generate_test_for(
                r"App\Http\Clients\GitHub\Attributes\GetUserAttribute",
                TestTarget::Kind(ClassKind::Attribute),
                None,
            )
            .unwrap_err();

        assert!(matches!(
            err,
            ClientgenError::Application(ApplicationError::SourceClassMissing { .. })
        ));
    }

    #[test]
    fn test_for_fqdn_rejects_kind_mismatch() {
        let stubs = FakeStubs::full();
        let fs = FakeFs::default()
            .with_file("app/Http/Clients/GitHub/Requests/GetUserRequest.php", "x");
        let config = config();
        let service = GeneratorService::new(&stubs, &fs, &config);

        let err = service
            .generate_test_for(
                r"App\Http\Clients\GitHub\Requests\GetUserRequest",
                TestTarget::Kind(ClassKind::Response),
                None,
            )
            .unwrap_err();

        assert!(matches!(
            err,
            ClientgenError::Application(ApplicationError::KindMismatch { .. })
        ));
    }

    #[test]
    fn test_for_fqdn_emits_test_from_source() {
        let stubs = FakeStubs::full();
        let fs = FakeFs::default().with_file(
            "app/Http/Clients/GitHub/Attributes/GetUserAttribute.php",
            "<?php",
        );
        let config = config();
        let service = GeneratorService::new(&stubs, &fs, &config);

        let report = service
            .generate_test_for(
                r"App\Http\Clients\GitHub\Attributes\GetUserAttribute",
                TestTarget::Kind(ClassKind::Attribute),
                None,
            )
            .unwrap();

        assert_eq!(report.created_count(), 1);
        let test = fs
            .read("tests/Unit/Http/Clients/GitHub/Attributes/GetUserAttributeTest.php")
            .unwrap();
        assert!(test.contains(r"namespace Tests\Unit\Http\Clients\GitHub\Attributes;"));
        assert!(test.contains(r"use App\Http\Clients\GitHub\Attributes;"));
    }

    #[test]
    fn bad_response_test_uses_exact_match_rule() {
        let stubs = FakeStubs::full();
        let fs = FakeFs::default()
            .with_file("app/Http/Clients/PayPal/Responses/BadResponse.php", "<?php");
        let config = config();
        let service = GeneratorService::new(&stubs, &fs, &config);

        // The generic Response command must reject... BadResponse passes the
        // exact-match target; a named response does not.
        let report = service
            .generate_test_for(
                r"App\Http\Clients\PayPal\Responses\BadResponse",
                TestTarget::BadResponse,
                None,
            )
            .unwrap();
        assert_eq!(report.created_count(), 1);

        let err = service
            .generate_test_for(
                r"App\Http\Clients\PayPal\Responses\CreateChargeResponse",
                TestTarget::BadResponse,
                None,
            )
            .unwrap_err();
        assert!(matches!(
            err,
            ClientgenError::Application(ApplicationError::KindMismatch { .. })
        ));
    }

    #[test]
    fn all_tests_skips_missing_sources() {
        let stubs = FakeStubs::full();
        // Only the attribute class exists.
        let fs = FakeFs::default().with_file(
            "app/Http/Clients/GitHub/Attributes/GetUserAttribute.php",
            "<?php",
        );
        let config = config();
        let service = GeneratorService::new(&stubs, &fs, &config);

        let report = service
            .generate_all_tests(r"App\Http\Clients\GitHub", "GetUser", None)
            .unwrap();

        assert_eq!(report.created_count(), 1);
        let missing = report
            .steps
            .iter()
            .filter(|s| matches!(s.outcome, StepOutcome::SourceMissing(_)))
            .count();
        assert_eq!(missing, 4); // request, response, factory, bad-response
    }

    #[test]
    fn invalid_identifiers_are_rejected_before_any_io() {
        let stubs = FakeStubs::full();
        let fs = FakeFs::default();
        let config = config();
        let service = GeneratorService::new(&stubs, &fs, &config);

        let request = GenerationRequest::new("Pay Pal", "Create", ClassKind::Attribute);
        assert!(service.generate(&request).is_err());
        assert!(fs.files.lock().unwrap().is_empty());
    }
}
