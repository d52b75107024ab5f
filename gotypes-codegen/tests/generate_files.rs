use std::fs;

use gotypes_codegen::{GenerateOptions, Generator};
use gotypes_core::{TypeRegistry, Variant};
use tempfile::TempDir;

fn preview(registry: &TypeRegistry, options: GenerateOptions) -> Vec<(String, String)> {
    Generator::new(registry, options)
        .unwrap()
        .preview()
        .unwrap()
        .into_iter()
        .map(|f| (f.path, f.content))
        .collect()
}

fn file<'a>(files: &'a [(String, String)], path: &str) -> &'a str {
    files
        .iter()
        .find(|(p, _)| p == path)
        .map(|(_, c)| c.as_str())
        .unwrap_or_else(|| panic!("{} was not generated", path))
}

#[test]
fn test_preview_lists_three_files() {
    let files = preview(TypeRegistry::builtin(), GenerateOptions::default());
    let paths: Vec<_> = files.iter().map(|(p, _)| p.as_str()).collect();
    assert_eq!(paths, vec!["flags_gen.go", "value_gen.go", "values_gen.go"]);

    for (_, content) in &files {
        assert!(content.starts_with("// Code generated by gotypes; DO NOT EDIT.\n\npackage cli\n\n"));
    }
}

#[test]
fn test_value_file_follows_registry() {
    let files = preview(TypeRegistry::builtin(), GenerateOptions::default());
    let value = file(&files, "value_gen.go");

    assert!(value.contains("import (\n\t\"strconv\"\n\t\"time\"\n)\n"));
    assert!(value.contains("func (v *float64Value) String() string { return strconv.FormatFloat(float64(*v), 'g', -1, 64) }"));
    assert!(value.contains("func (v *float64Value) Empty() bool { return *v == 0.0 }"));
    assert!(value.contains("func (v *timeDurationValue) Empty() bool { return *v == 0 }"));

    let bool_at = value.find("type boolValue bool").unwrap();
    let duration_at = value.find("type timeDurationValue time.Duration").unwrap();
    assert!(bool_at < duration_at);
}

#[test]
fn test_stringer_variant_drops_duration_and_empty() {
    let files = preview(
        TypeRegistry::builtin(),
        GenerateOptions::default().with_variant(Variant::Stringer),
    );

    for (path, content) in &files {
        assert!(!content.contains("time.Duration"), "{} mentions time.Duration", path);
    }
    let value = file(&files, "value_gen.go");
    assert!(!value.contains("Empty() bool"));
    assert!(value.contains("import \"strconv\"\n"));
    assert!(file(&files, "values_gen.go").contains("import \"strings\"\n"));
    assert!(!file(&files, "flags_gen.go").contains("import"));
}

#[test]
fn test_package_name_is_used() {
    let files = preview(
        TypeRegistry::builtin(),
        GenerateOptions::default().with_package("flags"),
    );
    let flags = file(&files, "flags_gen.go");

    assert!(flags.contains("\npackage flags\n"));
    assert!(flags.contains("//   _ = flags.StringVar(register, &p, \"name\", flags.WithShort(\"n\"))"));
}

#[test]
fn test_generate_writes_files() {
    let dir = TempDir::new().unwrap();
    let generator = Generator::new(TypeRegistry::builtin(), GenerateOptions::default()).unwrap();

    let stats = generator.generate(dir.path()).unwrap();
    assert_eq!(stats.written, 3);

    let values = fs::read_to_string(dir.path().join("values_gen.go")).unwrap();
    assert!(values.contains("type uint64Values []uint64"));
    assert!(values.contains("func newUint64Values(p *[]uint64) *uint64Values {"));
}

#[test]
fn test_custom_table() {
    let registry = TypeRegistry::from_toml_str(
        r#"
        imports = ["net"]

        [[types]]
        source = "net.IP"
        name = "IP"
        format = "net.IP(*%s).String()"
        zero = "len(*%s) == 0"
        "#,
    )
    .unwrap();

    let files = preview(&registry, GenerateOptions::default());
    let value = file(&files, "value_gen.go");
    assert!(value.contains("import \"net\"\n"));
    assert!(value.contains("type netIPValue net.IP"));
    assert!(value.contains("func (v *netIPValue) Empty() bool { return len(*v) == 0 }"));
    assert!(file(&files, "flags_gen.go").contains("func IPVar(register Register, p *net.IP"));
}

#[test]
fn test_extended_requires_zero_predicates() {
    let registry = TypeRegistry::builder()
        .imports(["strconv"])
        .imports_stringer(["strconv"])
        .add("int", "Int", "strconv.Itoa(int(*%s))", None)
        .build()
        .unwrap();

    let generator = Generator::new(&registry, GenerateOptions::default()).unwrap();
    assert!(generator.files().is_err());
    let err = generator.preview().unwrap_err();
    assert!(err.to_string().contains("has no zero predicate"));

    let generator = Generator::new(
        &registry,
        GenerateOptions::default().with_variant(Variant::Stringer),
    )
    .unwrap();
    let files = generator.files().unwrap();
    assert_eq!(files.len(), 3);
    assert!(files.get("value_gen.go").unwrap().content.contains("type intValue int"));
}
