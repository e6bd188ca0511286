use std::{
    fs,
    path::{Path, PathBuf},
};

use tempfile::{TempDir, tempdir};

use tensile_cli::{Args, CliError, GraphFileError, layout_positions, run};

fn demos_path() -> PathBuf {
    // Demos are at workspace root, relative to workspace not the crate
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .join("demos")
}

/// Collects all graph files from a directory
fn collect_graph_files(dir: PathBuf) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = if let Ok(entries) = fs::read_dir(&dir) {
        entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file()
                    && path.extension().and_then(|s| s.to_str()) == Some("toml")
                    && path.file_stem().and_then(|s| s.to_str()) != Some("config")
            })
            .collect()
    } else {
        Vec::new()
    };

    files.sort();
    files
}

/// Creates a temp directory holding an empty configuration file, so runs do
/// not pick up a local or user-wide configuration.
fn temp_dir_with_empty_config() -> (TempDir, PathBuf) {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let config = temp_dir.path().join("config.toml");
    fs::write(&config, "").expect("Failed to write empty config");
    (temp_dir, config)
}

fn args(input: &Path, config: &Path) -> Args {
    Args {
        input: input.to_string_lossy().to_string(),
        config: Some(config.to_string_lossy().to_string()),
        seed: Some(1),
        max_steps: Some(50_000),
        log_level: "off".to_string(),
    }
}

#[test]
fn e2e_smoke_test_demo_graphs() {
    let (_temp_dir, config) = temp_dir_with_empty_config();
    let graphs = collect_graph_files(demos_path());
    assert!(!graphs.is_empty(), "No demo graphs found in demos/");

    let mut failed = Vec::new();
    for graph_path in &graphs {
        let output = match layout_positions(&args(graph_path, &config)) {
            Ok(output) => output,
            Err(e) => {
                failed.push((graph_path.clone(), e));
                continue;
            }
        };

        assert!(!output.is_empty(), "No positions for {}", graph_path.display());
        for line in output.lines() {
            let fields: Vec<&str> = line.split_whitespace().collect();
            assert_eq!(fields.len(), 3, "Malformed line: {line}");
            for value in &fields[1..] {
                let value: f64 = value.parse().expect("Coordinate should be a number");
                assert!(value.is_finite());
            }
        }
    }

    if !failed.is_empty() {
        eprintln!("\nDemo graphs that failed:");
        for (path, err) in &failed {
            eprintln!("  - {}: {}", path.display(), err);
        }
        panic!("{} demo graph(s) failed unexpectedly", failed.len());
    }
}

#[test]
fn e2e_run_prints_positions() {
    let (_temp_dir, config) = temp_dir_with_empty_config();
    run(&args(&demos_path().join("triangle.toml"), &config)).expect("Triangle should lay out");
}

#[test]
fn e2e_demo_config_keeps_nodes_in_bounds() {
    let args = args(
        &demos_path().join("services.toml"),
        &demos_path().join("config.toml"),
    );
    let output = layout_positions(&args).expect("Demo configuration should work");

    assert_eq!(output.lines().count(), 9);
    for line in output.lines() {
        let fields: Vec<&str> = line.split_whitespace().collect();
        let x: f64 = fields[1].parse().unwrap();
        let y: f64 = fields[2].parse().unwrap();
        assert!((-30.0..=30.0).contains(&x), "{line}");
        assert!((-20.0..=20.0).contains(&y), "{line}");
    }
}

#[test]
fn e2e_undeclared_node_is_rejected() {
    let (temp_dir, config) = temp_dir_with_empty_config();
    let input = temp_dir.path().join("broken.toml");
    fs::write(&input, "nodes = [\"a\"]\nedges = [[\"a\", \"b\"]]\n").unwrap();

    let result = layout_positions(&args(&input, &config));
    assert!(matches!(
        result,
        Err(CliError::Graph(GraphFileError::UnknownNode { .. }))
    ));
}

#[test]
fn e2e_missing_input_is_io_error() {
    let (temp_dir, config) = temp_dir_with_empty_config();
    let result = layout_positions(&args(&temp_dir.path().join("absent.toml"), &config));
    assert!(matches!(result, Err(CliError::Io(_))));
}
