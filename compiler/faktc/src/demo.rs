//! A canned, in-memory compilation used by the `generate` command (spec
//! §6, ambient addition: "this workspace ships a `fakt_fixtures`
//! test-only crate ... used by the test suite and the `faktc` demo
//! binary, so the pipeline is exercised end-to-end without a real host
//! compiler"). Mirrors the spec's own end-to-end scenarios S1–S3 and S6.

use fakt_fixtures::{FixtureFunction, FixtureParam, FixtureProperty, FixtureSource};

/// Builds the sample compilation: a plain interface (S1), a
/// property-only interface (S2), a class-level-generic interface (S3),
/// a sealed interface that the frontend validator rejects (S4), and a
/// vararg function (S6).
pub fn sample_compilation() -> FixtureSource {
    let mut fx = FixtureSource::new();

    let user_service = fx.declare_interface("com.example.UserService");
    fx.add_function(
        user_service,
        FixtureFunction::new("getUser", "com.example.User").param(FixtureParam::new("id", "kotlin.String")),
    );

    let clock = fx.declare_interface("com.example.Clock");
    fx.add_property(clock, FixtureProperty::new("now", "kotlin.Long"));

    let repo = fx.declare_interface("com.example.Repo");
    fx.add_type_param(repo, "T", vec![]);
    fx.add_function(
        repo,
        FixtureFunction::new("save", "kotlin.Result<kotlin.Unit>").param(FixtureParam::new("item", "T")),
    );

    let rejected = fx.declare_interface("com.example.Foo");
    fx.set_sealed(rejected, true);

    let logger = fx.declare_interface("com.example.Logger");
    fx.add_function(
        logger,
        FixtureFunction::new("log", "kotlin.Unit").param(FixtureParam::new("msg", "kotlin.String").vararg()),
    );

    fx
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declares_five_sample_declarations() {
        let fx = sample_compilation();
        assert_eq!(fx.all_declared().len(), 5);
    }
}
