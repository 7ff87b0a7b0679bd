//! End-to-end scenarios S1–S6 and the determinism/cache properties
//! (spec §8), driven through [`Orchestrator`] against `fakt_fixtures`
//! in-memory declarations exactly as a real host binding would supply
//! them to the pipeline.

use fakt_fixtures::{FixtureFunction, FixtureParam, FixtureProperty, FixtureSource};
use faktc::orchestrator::DeclarationOutcome;
use faktc::Orchestrator;
use pretty_assertions::assert_eq;

fn routing_record(output_dir: &std::path::Path) -> fakt_ir::RoutingRecord {
    fakt_ir::RoutingRecord {
        compilation_name: "commonTest".into(),
        target_name: "jvm".into(),
        platform_kind: "jvm".into(),
        is_test: true,
        default_source_set: fakt_ir::SourceSetRef::new("commonTest", vec![]),
        source_sets: vec![],
        output_dir: output_dir.to_path_buf(),
    }
}

/// S1: a plain interface with one function member.
#[test]
fn s1_plain_interface_emits_behavior_field_override_configure_factory_and_dsl() {
    let temp = tempfile::tempdir().unwrap();
    let record = routing_record(temp.path());

    let mut fx = FixtureSource::new();
    let decl = fx.declare_interface("com.example.UserService");
    fx.add_function(
        decl,
        FixtureFunction::new("getUser", "com.example.User").param(FixtureParam::new("id", "kotlin.String")),
    );

    let orchestrator = Orchestrator::new(&record).unwrap();
    let outcome = orchestrator.process(&fx, &fx, decl);
    assert!(matches!(outcome, DeclarationOutcome::Generated { .. }));

    let path = temp.path().join("com/example/FakeUserServiceImpl.kt");
    let source = std::fs::read_to_string(path).unwrap();

    assert!(source.contains("class FakeUserServiceImpl : UserService"));
    assert!(source.contains("getUserBehavior"));
    assert!(source.contains("getUserCallCount"));
    assert!(source.contains("override fun getUser(id: String): User"));
    assert!(source.contains("fun configureGetUser(behavior: (String) -> User)"));
    assert!(source.contains("fun fakeUserService(configure: FakeUserServiceConfig.() -> Unit = {}): UserService"));
    assert!(source.contains("class FakeUserServiceConfig(private val fake: FakeUserServiceImpl)"));
    assert!(source.contains("fun getUser(behavior: (String) -> User)"));
}

/// S2: a property-only interface.
#[test]
fn s2_property_only_interface_emits_getter_override_and_configure() {
    let temp = tempfile::tempdir().unwrap();
    let record = routing_record(temp.path());

    let mut fx = FixtureSource::new();
    let decl = fx.declare_interface("com.example.Clock");
    fx.add_property(decl, FixtureProperty::new("now", "kotlin.Long"));

    let orchestrator = Orchestrator::new(&record).unwrap();
    orchestrator.process(&fx, &fx, decl);

    let path = temp.path().join("com/example/FakeClockImpl.kt");
    let source = std::fs::read_to_string(path).unwrap();

    assert!(source.contains("nowBehavior"));
    assert!(source.contains("nowCallCount"));
    assert!(source.contains("override val now: Long"));
    assert!(source.contains("configureNow"));
    assert!(source.contains("fun now(behavior: () -> Long)"));
}

/// S3: a class-level generic interface erases `T` in member signatures
/// but stays generic at the factory.
#[test]
fn s3_class_level_generic_erases_member_signatures_but_factory_stays_generic() {
    let temp = tempfile::tempdir().unwrap();
    let record = routing_record(temp.path());

    let mut fx = FixtureSource::new();
    let decl = fx.declare_interface("com.example.Repo");
    fx.add_type_param(decl, "T", vec![]);
    fx.add_function(
        decl,
        FixtureFunction::new("save", "kotlin.Result<kotlin.Unit>").param(FixtureParam::new("item", "T")),
    );

    let orchestrator = Orchestrator::new(&record).unwrap();
    orchestrator.process(&fx, &fx, decl);

    let path = temp.path().join("com/example/FakeRepoImpl.kt");
    let source = std::fs::read_to_string(path).unwrap();

    assert!(source.contains("class FakeRepoImpl : Repo<Any>"));
    assert!(source.contains("saveBehavior: (Any) -> Result<Unit>"));
    assert!(source.contains("fun <T> fakeRepo(configure: FakeRepoConfig.() -> Unit = {}): Repo<T>"));
}

/// S4: a sealed interface is rejected by the frontend validator and no
/// file is written.
#[test]
fn s4_sealed_interface_is_rejected_with_stable_diagnostic() {
    let temp = tempfile::tempdir().unwrap();
    let record = routing_record(temp.path());

    let mut fx = FixtureSource::new();
    let decl = fx.declare_interface("com.example.Foo");
    fx.set_sealed(decl, true);

    let orchestrator = Orchestrator::new(&record).unwrap();
    let outcome = orchestrator.process(&fx, &fx, decl);

    match outcome {
        DeclarationOutcome::Rejected(diagnostic) => {
            assert_eq!(diagnostic.rendered(), "[FAKT] FAKE_CANNOT_BE_SEALED: `@Fake` cannot be applied to sealed interface `com.example.Foo`");
        }
        other => panic!("expected Rejected, got {other:?}"),
    }
    assert!(!temp.path().join("com/example/FakeFooImpl.kt").exists());
}

/// S5: two compilations against the same output root; the second
/// observes a cache hit for a declaration already emitted by the first
/// and writes nothing.
#[test]
fn s5_second_compilation_against_same_output_root_hits_cache() {
    let temp = tempfile::tempdir().unwrap();
    let record = routing_record(temp.path());

    let mut fx = FixtureSource::new();
    let decl = fx.declare_interface("com.example.UserService");
    fx.add_function(
        decl,
        FixtureFunction::new("getUser", "com.example.User").param(FixtureParam::new("id", "kotlin.String")),
    );

    let compilation_a = Orchestrator::new(&record).unwrap();
    let outcome_a = compilation_a.process(&fx, &fx, decl);
    assert!(matches!(outcome_a, DeclarationOutcome::Generated { .. }));

    let path = temp.path().join("com/example/FakeUserServiceImpl.kt");
    let written_at_a = std::fs::metadata(&path).unwrap().modified().unwrap();

    let compilation_b = Orchestrator::new(&record).unwrap();
    let outcome_b = compilation_b.process(&fx, &fx, decl);
    assert!(matches!(outcome_b, DeclarationOutcome::CacheHit));
    assert_eq!(compilation_b.telemetry().cache_hit_count(), 1);
    assert_eq!(compilation_b.telemetry().generated_count(), 0);

    let written_at_b = std::fs::metadata(&path).unwrap().modified().unwrap();
    assert_eq!(written_at_a, written_at_b);
}

/// S6: a vararg function unwraps to `Array<T>` on the behavior field
/// and preserves the `vararg` keyword on the override.
#[test]
fn s6_vararg_function_unwraps_behavior_field_and_preserves_override_keyword() {
    let temp = tempfile::tempdir().unwrap();
    let record = routing_record(temp.path());

    let mut fx = FixtureSource::new();
    let decl = fx.declare_interface("com.example.Logger");
    fx.add_function(
        decl,
        FixtureFunction::new("log", "kotlin.Unit").param(FixtureParam::new("msg", "kotlin.String").vararg()),
    );

    let orchestrator = Orchestrator::new(&record).unwrap();
    orchestrator.process(&fx, &fx, decl);

    let path = temp.path().join("com/example/FakeLoggerImpl.kt");
    let source = std::fs::read_to_string(path).unwrap();

    assert!(source.contains("logBehavior: (Array<String>) -> Unit"));
    assert!(source.contains("override fun log(vararg msg: String): Unit"));
    assert!(source.contains("fun log(behavior: (Array<String>) -> Unit)"));
}

/// Determinism (spec §8 property 1): emitting the same declaration
/// twice under independent output roots produces byte-identical files.
#[test]
fn emission_is_deterministic_across_independent_output_roots() {
    let mut fx = FixtureSource::new();
    let decl = fx.declare_interface("com.example.UserService");
    fx.add_function(
        decl,
        FixtureFunction::new("getUser", "com.example.User").param(FixtureParam::new("id", "kotlin.String")),
    );

    let temp_a = tempfile::tempdir().unwrap();
    let record_a = routing_record(temp_a.path());
    Orchestrator::new(&record_a).unwrap().process(&fx, &fx, decl);

    let temp_b = tempfile::tempdir().unwrap();
    let record_b = routing_record(temp_b.path());
    Orchestrator::new(&record_b).unwrap().process(&fx, &fx, decl);

    let source_a = std::fs::read_to_string(temp_a.path().join("com/example/FakeUserServiceImpl.kt")).unwrap();
    let source_b = std::fs::read_to_string(temp_b.path().join("com/example/FakeUserServiceImpl.kt")).unwrap();
    assert_eq!(source_a, source_b);
}

/// Boundary: an empty interface still produces a valid (if minimal)
/// implementation, factory and DSL class.
#[test]
fn empty_interface_emits_valid_empty_implementation_factory_and_dsl() {
    let temp = tempfile::tempdir().unwrap();
    let record = routing_record(temp.path());

    let mut fx = FixtureSource::new();
    let decl = fx.declare_interface("com.example.Marker");

    let orchestrator = Orchestrator::new(&record).unwrap();
    orchestrator.process(&fx, &fx, decl);

    let path = temp.path().join("com/example/FakeMarkerImpl.kt");
    let source = std::fs::read_to_string(path).unwrap();

    assert!(source.contains("internal class FakeMarkerImpl : Marker {"));
    assert!(source.contains("fun fakeMarker(configure: FakeMarkerConfig.() -> Unit = {}): Marker {"));
    assert!(source.contains("class FakeMarkerConfig(private val fake: FakeMarkerImpl) {"));
}
