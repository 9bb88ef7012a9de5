//! Integration tests driving the full core + adapters stack.

use std::path::Path;

use kotlinit_adapters::{GradleKotlinTemplates, LocalFilesystem, MemoryFilesystem};
use kotlinit_core::{application::GeneratorService, domain::ProjectSpec};

fn spec(target: &str, name: &str, package: &str) -> ProjectSpec {
    ProjectSpec::new(target, name.parse().unwrap(), package.parse().unwrap()).unwrap()
}

fn memory_service() -> (GeneratorService, MemoryFilesystem) {
    let filesystem = MemoryFilesystem::new();
    let service = GeneratorService::new(
        Box::new(GradleKotlinTemplates::new()),
        Box::new(filesystem.clone()),
    );
    (service, filesystem)
}

#[test]
fn generates_the_example_scenario_tree() {
    let (service, fs) = memory_service();
    service
        .generate(&spec("/tmp/ws", "demo-app", "com.example"))
        .unwrap();

    assert!(fs.exists(Path::new("/tmp/ws/demo-app")));
    assert!(fs.exists(Path::new("/tmp/ws/demo-app/build.gradle.kts")));
    assert!(fs.exists(Path::new("/tmp/ws/demo-app/src/main/kotlin/com/example/Main.kt")));
    assert!(fs.exists(Path::new(
        "/tmp/ws/demo-app/src/test/kotlin/com/example/CalculatorTest.kt"
    )));
    assert!(fs.exists(Path::new("/tmp/ws/demo-app/gradle/wrapper")));
    assert!(fs.exists(Path::new("/tmp/ws/demo-app/.vscode")));

    let settings = fs
        .read_file(Path::new("/tmp/ws/demo-app/settings.gradle.kts"))
        .unwrap();
    assert_eq!(settings, "rootProject.name = \"demo-app\"\n");
}

#[test]
fn generated_project_is_never_empty() {
    let (service, fs) = memory_service();
    service
        .generate(&spec("/out", "svc", "org.demo.app"))
        .unwrap();

    assert!(fs.file_count() >= 10);
    assert!(
        fs.list_files()
            .iter()
            .all(|p| p.starts_with("/out/svc")),
        "all writes must land under the project root"
    );
}

#[test]
fn entry_point_embeds_name_and_package() {
    let (service, fs) = memory_service();
    service
        .generate(&spec("/out", "greeter", "org.demo"))
        .unwrap();

    let main = fs
        .read_file(Path::new("/out/greeter/src/main/kotlin/org/demo/Main.kt"))
        .unwrap();
    assert!(main.contains("package org.demo"));
    assert!(main.contains("Hello from greeter!"));
}

#[test]
fn launcher_script_is_marked_executable() {
    let (service, fs) = memory_service();
    service
        .generate(&spec("/out", "demo", "com.example"))
        .unwrap();

    assert!(fs.is_executable(Path::new("/out/demo/gradlew")));
    assert!(!fs.is_executable(Path::new("/out/demo/gradlew.bat")));
}

#[test]
fn regeneration_is_idempotent_for_directories() {
    let (service, fs) = memory_service();
    let spec = spec("/out", "demo", "com.example");

    service.generate(&spec).unwrap();
    let first_count = fs.file_count();

    // Same spec again: directories already exist, files are rewritten.
    service.generate(&spec).unwrap();
    assert_eq!(fs.file_count(), first_count);
}

#[test]
fn regeneration_resets_file_contents() {
    let (service, fs) = memory_service();
    let spec = spec("/out", "demo", "com.example");
    service.generate(&spec).unwrap();

    use kotlinit_core::application::ports::Filesystem;
    let build = Path::new("/out/demo/build.gradle.kts");
    fs.write_file(build, "tampered\n").unwrap();

    service.generate(&spec).unwrap();
    let content = fs.read_file(build).unwrap();
    assert!(content.contains("org.jetbrains.kotlin.jvm"));
    assert!(!content.contains("tampered"));
}

#[test]
fn two_runs_with_the_same_spec_are_byte_identical() {
    let (first_service, first_fs) = memory_service();
    let (second_service, second_fs) = memory_service();
    let spec = spec("/out", "demo", "com.example");

    first_service.generate(&spec).unwrap();
    second_service.generate(&spec).unwrap();

    let mut paths = first_fs.list_files();
    paths.sort();
    for path in paths {
        assert_eq!(
            first_fs.read_file(&path),
            second_fs.read_file(&path),
            "content diverged for {}",
            path.display()
        );
    }
}

// ── LocalFilesystem (real tree) ──────────────────────────────────────────────

#[test]
fn generates_a_real_tree_on_disk() {
    let temp = tempfile::TempDir::new().unwrap();
    let service = GeneratorService::new(
        Box::new(GradleKotlinTemplates::new()),
        Box::new(LocalFilesystem::new()),
    );

    let spec = spec(temp.path().to_str().unwrap(), "demo-app", "com.example");
    service.generate(&spec).unwrap();

    let root = temp.path().join("demo-app");
    assert!(root.join("build.gradle.kts").is_file());
    assert!(root.join("gradle/wrapper/gradle-wrapper.properties").is_file());
    assert!(root.join("src/main/kotlin/com/example/Main.kt").is_file());
    assert!(
        root.join("src/test/kotlin/com/example/CalculatorTest.kt")
            .is_file()
    );
    assert!(root.join(".vscode/launch.json").is_file());

    // Re-running over the existing tree must succeed.
    service.generate(&spec).unwrap();
}

#[test]
#[cfg(unix)]
fn gradlew_has_execute_bits_on_disk() {
    use std::os::unix::fs::PermissionsExt;

    let temp = tempfile::TempDir::new().unwrap();
    let service = GeneratorService::new(
        Box::new(GradleKotlinTemplates::new()),
        Box::new(LocalFilesystem::new()),
    );

    let spec = spec(temp.path().to_str().unwrap(), "demo-app", "com.example");
    service.generate(&spec).unwrap();

    let mode = std::fs::metadata(temp.path().join("demo-app/gradlew"))
        .unwrap()
        .permissions()
        .mode();
    assert_eq!(mode & 0o111, 0o111, "owner/group/other execute bits");

    let bat_mode = std::fs::metadata(temp.path().join("demo-app/gradlew.bat"))
        .unwrap()
        .permissions()
        .mode();
    assert_eq!(bat_mode & 0o111, 0, "batch script stays non-executable");
}
