//! Contract tests for consumers of the type registry.
//!
//! These exercise the registry only through its public interface, the way an
//! external generator would.

use std::collections::HashSet;

use gotypes_core::{Error, TypeRegistry, Variant};

fn both_variants() -> Vec<(Variant, TypeRegistry)> {
    let builtin = TypeRegistry::builtin();
    vec![
        (Variant::Extended, builtin.variant(Variant::Extended)),
        (Variant::Stringer, builtin.variant(Variant::Stringer)),
    ]
}

#[test]
fn test_every_template_has_one_placeholder() {
    for (_, registry) in both_variants() {
        for desc in registry.list_types() {
            let format = desc.format().to_string();
            assert_eq!(format.matches("%s").count(), 1, "{}", desc.source_type());

            if let Some(zero) = desc.zero() {
                assert_eq!(zero.to_string().matches("%s").count(), 1);
            }
        }
    }
}

#[test]
fn test_required_imports_cover_templates() {
    for (variant, registry) in both_variants() {
        let imports = registry
            .required_imports(variant.needs_zero_check())
            .expect("variant supplies what it needs");

        for desc in registry.list_types() {
            let mut packages: Vec<&str> = desc.format().packages();
            if variant.needs_zero_check() {
                packages.extend(desc.zero().map(|z| z.packages()).unwrap_or_default());
            }
            for pkg in packages {
                assert!(
                    imports.contains(pkg),
                    "{} needs '{}' in {} variant",
                    desc.source_type(),
                    pkg,
                    variant
                );
            }
        }
    }
}

#[test]
fn test_stringer_variant_rejects_zero_checks() {
    let stringer = TypeRegistry::builtin().variant(Variant::Stringer);
    let err = stringer.required_imports(true).unwrap_err();

    assert!(matches!(*err, Error::ZeroCheckUnsupported { .. }));
}

#[test]
fn test_stringer_variant_only_lacks_duration() {
    let builtin = TypeRegistry::builtin();
    let stringer = builtin.variant(Variant::Stringer);

    let full: HashSet<_> = builtin.list_types().iter().map(|d| d.source_type()).collect();
    let minimal: HashSet<_> = stringer.list_types().iter().map(|d| d.source_type()).collect();

    let missing: Vec<_> = full.difference(&minimal).collect();
    assert_eq!(missing, vec![&"time.Duration"]);
}

#[test]
fn test_list_types_idempotent() {
    let registry = TypeRegistry::builtin();
    let first: Vec<_> = registry.list_types().to_vec();
    let second: Vec<_> = registry.list_types().to_vec();
    assert_eq!(first, second);
}

#[test]
fn test_builtin_is_shared() {
    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(|| TypeRegistry::builtin().len()))
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), 15);
    }
}

#[test]
fn test_custom_table_from_toml() {
    let registry = TypeRegistry::from_toml_str(
        r#"
        imports = ["strconv", "net"]
        imports_stringer = ["strconv"]

        [[types]]
        source = "int"
        name = "Int"
        format = "strconv.Itoa(int(*%s))"
        zero = "*%s == 0"

        [[types]]
        source = "net.IP"
        name = "IP"
        format = "net.IP(*%s).String()"
        zero = "len(*%s) == 0"
        "#,
    )
    .unwrap();

    assert_eq!(registry.lookup("net.IP").unwrap().value_stem(), "netIP");
    assert_eq!(registry.variant(Variant::Stringer).len(), 1);
}
