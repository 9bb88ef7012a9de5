//! Implementation of the `kotlinit new` command.
//!
//! Responsibility: collect and validate the three inputs (target directory,
//! project name, package identifier), build a `ProjectSpec`, call the core
//! generator once, and display results. No generation logic lives here.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use kotlinit_adapters::{GradleKotlinTemplates, LocalFilesystem};
use kotlinit_core::{
    application::GeneratorService,
    domain::{DomainError, PackageName, ProjectName, ProjectSpec},
};

use crate::{
    cli::{NewArgs, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `kotlinit new` command.
///
/// Dispatch sequence:
/// 1. Collect the project name and package identifier (args, prompts, or
///    configured defaults) and validate both at the boundary
/// 2. Resolve the target directory and check it exists
/// 3. Confirm with the user unless `--yes` or `--quiet`
/// 4. Execute generation via `GeneratorService`
/// 5. Print next-steps guidance
#[instrument(skip_all, fields(project = ?args.name))]
pub fn execute(
    args: NewArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    // 1. Boundary validation — the core trusts these are already validated.
    let allow_prompt = !global.quiet;
    let project_name = resolve_project_name(args.name, allow_prompt)?;
    let package_name = resolve_package_name(args.package, &config, allow_prompt)?;

    // 2. Target directory must exist; canonicalize makes it absolute.
    let target_dir = resolve_target_dir(args.dir.as_deref())?;

    let spec = ProjectSpec::new(target_dir, project_name, package_name)
        .map_err(|e| CliError::Core(e.into()))?;

    debug!(
        project = %spec.project_name(),
        package = %spec.package_name(),
        target = %spec.target_dir().display(),
        "Spec resolved"
    );

    // Overwrite semantics are last-write-wins; surface that before writing.
    if spec.project_root().exists() {
        output.warning(&format!(
            "'{}' already exists; generated files will overwrite existing ones",
            spec.project_root().display()
        ))?;
    }

    // 3. Show configuration and confirm
    if !global.quiet && !args.yes {
        show_configuration(&spec, &output)?;
        if !confirm()? {
            return Err(CliError::Cancelled);
        }
    }

    // 4. Create adapters and generate
    let renderer = Box::new(GradleKotlinTemplates::new());
    let filesystem = Box::new(LocalFilesystem::new());
    let service = GeneratorService::new(renderer, filesystem);

    output.header(&format!("Creating '{}'...", spec.project_name()))?;
    info!(
        project = %spec.project_name(),
        path = %spec.project_root().display(),
        "Generation started"
    );

    service.generate(&spec).map_err(CliError::Core)?;

    info!(project = %spec.project_name(), "Generation completed");

    // 5. Success + next steps
    output.success(&format!(
        "Kotlin project '{}' created!",
        spec.project_name()
    ))?;

    if !global.quiet {
        output.print("")?;
        output.print("Next steps:")?;
        output.print(&format!("  cd {}", spec.project_name()))?;
        output.print("  ./gradlew build")?;
    }

    Ok(())
}

// ── Input collection ──────────────────────────────────────────────────────────

fn resolve_project_name(name: Option<String>, allow_prompt: bool) -> CliResult<ProjectName> {
    if let Some(name) = name {
        return parse_project_name(&name);
    }
    if allow_prompt {
        if let Some(prompted) = interactive::prompt_project_name() {
            return prompted;
        }
    }
    Err(CliError::InvalidInput {
        message: "project name is required (pass it as an argument)".into(),
    })
}

fn resolve_package_name(
    package: Option<String>,
    config: &AppConfig,
    allow_prompt: bool,
) -> CliResult<PackageName> {
    if let Some(package) = package {
        return parse_package_name(&package);
    }

    let default = config.defaults.package.as_deref().unwrap_or("com.example");
    if allow_prompt {
        if let Some(prompted) = interactive::prompt_package_name(default) {
            return prompted;
        }
    }
    parse_package_name(default)
}

fn resolve_target_dir(dir: Option<&Path>) -> CliResult<PathBuf> {
    let dir = dir.unwrap_or_else(|| Path::new("."));
    if !dir.is_dir() {
        return Err(CliError::TargetDirNotFound {
            path: dir.to_path_buf(),
        });
    }
    dir.canonicalize().map_err(|e| CliError::IoError {
        message: format!("failed to resolve target directory {}", dir.display()),
        source: e,
    })
}

fn parse_project_name(name: &str) -> CliResult<ProjectName> {
    name.parse().map_err(|e| match e {
        DomainError::InvalidProjectName { name, reason } => {
            CliError::InvalidProjectName { name, reason }
        }
        other => CliError::Core(other.into()),
    })
}

fn parse_package_name(package: &str) -> CliResult<PackageName> {
    package.parse().map_err(|e| match e {
        DomainError::InvalidPackageName { name, reason } => {
            CliError::InvalidPackageName { name, reason }
        }
        other => CliError::Core(other.into()),
    })
}

// ── Interactive prompts ───────────────────────────────────────────────────────

/// Prompt collection, mirroring the argument validation inline.
///
/// Each function returns `None` when prompting is unavailable (feature off,
/// or stdin is not a terminal), in which case the caller falls back to a
/// default or a hard error.
#[cfg(feature = "interactive")]
mod interactive {
    use std::io::IsTerminal as _;

    use kotlinit_core::domain::{PackageName, ProjectName};

    use crate::error::{CliError, CliResult};

    pub fn prompt_project_name() -> Option<CliResult<ProjectName>> {
        if !std::io::stdin().is_terminal() {
            return None;
        }
        Some(
            dialoguer::Input::<String>::new()
                .with_prompt("Project name")
                .validate_with(|value: &String| -> Result<(), String> {
                    value
                        .parse::<ProjectName>()
                        .map(|_| ())
                        .map_err(|e| e.to_string())
                })
                .interact_text()
                .map_err(read_error)
                .and_then(|value| super::parse_project_name(&value)),
        )
    }

    pub fn prompt_package_name(default: &str) -> Option<CliResult<PackageName>> {
        if !std::io::stdin().is_terminal() {
            return None;
        }
        Some(
            dialoguer::Input::<String>::new()
                .with_prompt("Package name")
                .default(default.to_string())
                .validate_with(|value: &String| -> Result<(), String> {
                    value
                        .parse::<PackageName>()
                        .map(|_| ())
                        .map_err(|e| e.to_string())
                })
                .interact_text()
                .map_err(read_error)
                .and_then(|value| super::parse_package_name(&value)),
        )
    }

    fn read_error(e: dialoguer::Error) -> CliError {
        CliError::IoError {
            message: "failed to read interactive input".into(),
            source: std::io::Error::other(e),
        }
    }
}

#[cfg(not(feature = "interactive"))]
mod interactive {
    use kotlinit_core::domain::{PackageName, ProjectName};

    use crate::error::CliResult;

    pub fn prompt_project_name() -> Option<CliResult<ProjectName>> {
        None
    }

    pub fn prompt_package_name(_default: &str) -> Option<CliResult<PackageName>> {
        None
    }
}

// ── UI helpers ────────────────────────────────────────────────────────────────

fn show_configuration(spec: &ProjectSpec, out: &OutputManager) -> CliResult<()> {
    out.header("Configuration")?;
    out.print(&format!("  Project:  {}", spec.project_name()))?;
    out.print(&format!("  Package:  {}", spec.package_name()))?;
    out.print(&format!("  Location: {}", spec.project_root().display()))?;
    out.print("")?;
    Ok(())
}

fn confirm() -> CliResult<bool> {
    use std::io::{self, Write};

    print!("Continue? [Y/n] ");
    io::stdout().flush().map_err(|e| CliError::IoError {
        message: "failed to flush stdout".into(),
        source: e,
    })?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| CliError::IoError {
            message: "failed to read confirmation input".into(),
            source: e,
        })?;

    let input = input.trim().to_ascii_lowercase();
    Ok(input.is_empty() || input == "y" || input == "yes")
}

// ── Tests ─────────────────────────────────────────────────────────────────────
