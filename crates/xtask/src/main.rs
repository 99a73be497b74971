use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

/// Crates each workspace crate must never depend on.
const FORBIDDEN_DEPENDENCIES: &[(&str, &[&str])] = &[
    (
        "deeper-domain",
        &["deeper-shared", "deeper-engine", "tokio", "async-trait", "tracing"],
    ),
    ("deeper-shared", &["deeper-engine", "tokio"]),
];

/// Source patterns that mean a pure crate is doing I/O.
const FORBIDDEN_SOURCE_PATTERNS: &[(&str, &[&str])] = &[(
    "deeper-domain",
    &["std::fs", "std::net", "std::env", "std::io::stdin", "std::thread"],
)];

#[derive(Debug, Deserialize)]
struct Metadata {
    packages: Vec<Package>,
}

#[derive(Debug, Deserialize)]
struct Package {
    name: String,
    manifest_path: PathBuf,
    dependencies: Vec<Dependency>,
}

#[derive(Debug, Deserialize)]
struct Dependency {
    name: String,
    kind: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    match args.next().as_deref() {
        Some("arch-check") => arch_check(),
        Some(cmd) => anyhow::bail!("Unknown xtask command: {cmd}"),
        None => anyhow::bail!("Usage: cargo xtask <command>\n\nCommands:\n  arch-check"),
    }
}

fn arch_check() -> anyhow::Result<()> {
    let output = std::process::Command::new("cargo")
        .args(["metadata", "--format-version", "1", "--no-deps"])
        .output()
        .context("running cargo metadata")?;

    if !output.status.success() {
        anyhow::bail!("cargo metadata failed")
    }

    let metadata: Metadata =
        serde_json::from_slice(&output.stdout).context("parsing cargo metadata output")?;
    let packages: BTreeMap<&str, &Package> = metadata
        .packages
        .iter()
        .map(|p| (p.name.as_str(), p))
        .collect();

    let mut violations = dependency_violations(&packages);
    violations.extend(source_violations(&packages)?);

    if violations.is_empty() {
        println!("arch-check: ok ({} crates)", packages.len());
        return Ok(());
    }

    for violation in &violations {
        eprintln!("arch-check: {violation}");
    }
    anyhow::bail!("{} layering violation(s)", violations.len())
}

fn dependency_violations(packages: &BTreeMap<&str, &Package>) -> Vec<String> {
    let mut violations = Vec::new();
    for (crate_name, forbidden) in FORBIDDEN_DEPENDENCIES {
        let Some(package) = packages.get(crate_name) else {
            violations.push(format!("{crate_name} is missing from the workspace"));
            continue;
        };
        for dependency in &package.dependencies {
            // dev-dependencies may use anything
            if dependency.kind.as_deref() == Some("dev") {
                continue;
            }
            if forbidden.contains(&dependency.name.as_str()) {
                violations.push(format!("{crate_name} must not depend on {}", dependency.name));
            }
        }
    }
    violations
}

fn source_violations(packages: &BTreeMap<&str, &Package>) -> anyhow::Result<Vec<String>> {
    let mut violations = Vec::new();
    for (crate_name, patterns) in FORBIDDEN_SOURCE_PATTERNS {
        let Some(package) = packages.get(crate_name) else {
            continue;
        };
        let src = package
            .manifest_path
            .parent()
            .map(|dir| dir.join("src"))
            .context("manifest path has no parent")?;

        for file in rust_files(&src)? {
            let text = std::fs::read_to_string(&file)
                .with_context(|| format!("reading {}", file.display()))?;
            for pattern in *patterns {
                if text.contains(pattern) {
                    violations.push(format!("{} uses {pattern}", file.display()));
                }
            }
        }
    }
    Ok(violations)
}

fn rust_files(dir: &Path) -> anyhow::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir).with_context(|| format!("listing {}", dir.display()))? {
        let path = entry?.path();
        if path.is_dir() {
            files.extend(rust_files(&path)?);
        } else if path.extension().is_some_and(|ext| ext == "rs") {
            files.push(path);
        }
    }
    Ok(files)
}
