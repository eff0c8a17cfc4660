use std::{
    fs,
    path::{Path, PathBuf},
};

use tempfile::tempdir;

use coversketch_cli::{Args, OutputFormat, run};

const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

/// Collects all .toml job files from a directory
fn collect_job_files(dir: PathBuf) -> Vec<PathBuf> {
    let mut files = if let Ok(entries) = fs::read_dir(&dir) {
        entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("toml")
            })
            .collect()
    } else {
        Vec::new()
    };

    // Sort for consistent test output
    files.sort();
    files
}

/// Job files live at the workspace root, not inside the crate
fn jobs_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .join("jobs")
}

fn args_for(job: &Path, output: PathBuf, format: Option<OutputFormat>) -> Args {
    Args {
        input: job.to_string_lossy().to_string(),
        output: Some(output.to_string_lossy().to_string()),
        config: None,
        format,
        log_level: "off".to_string(),
    }
}

#[test]
fn e2e_smoke_test_valid_jobs() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let valid_jobs = collect_job_files(jobs_path());

    assert!(!valid_jobs.is_empty(), "No valid jobs found in jobs/");

    let mut failed_jobs = Vec::new();

    for job_path in &valid_jobs {
        let output_path = temp_dir.path().join(format!(
            "{}.png",
            job_path.file_stem().unwrap().to_string_lossy()
        ));

        match run(&args_for(job_path, output_path.clone(), None)) {
            Ok(written) => {
                assert_eq!(written, output_path);
                let bytes = fs::read(&written).expect("Failed to read output");
                assert_eq!(&bytes[..8], &PNG_SIGNATURE, "{}", job_path.display());
            }
            Err(e) => failed_jobs.push((job_path.clone(), e)),
        }
    }

    if !failed_jobs.is_empty() {
        eprintln!("\nValid jobs that failed:");
        for (path, err) in &failed_jobs {
            eprintln!("  - {}: {}", path.display(), err);
        }
        panic!("{} valid job(s) failed unexpectedly", failed_jobs.len());
    }

    println!("✅ All {} valid jobs passed", valid_jobs.len());
}

#[test]
fn e2e_smoke_test_svg_output() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let job_path = jobs_path().join("two_flues.toml");
    let output_path = temp_dir.path().join("two_flues.svg");

    let written = run(&args_for(&job_path, output_path, None)).expect("Failed to render job");
    let svg = fs::read_to_string(written).expect("Failed to read output");

    assert!(svg.contains("Job: Oak Street Duplex"));
    assert!(svg.contains("NO Drip-edge"));
    assert_eq!(svg.matches("<circle").count(), 2);
}

#[test]
fn e2e_smoke_test_explicit_config() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("config.toml");
    fs::write(
        &config_path,
        "[canvas]\ndisplay_width = 400\n\n[style]\nbackground_color = \"white\"\n",
    )
    .expect("Failed to write config");

    let job_path = jobs_path().join("centered.toml");
    let mut args = args_for(
        &job_path,
        temp_dir.path().join("centered.out"),
        Some(OutputFormat::Svg),
    );
    args.config = Some(config_path.to_string_lossy().to_string());

    let written = run(&args).expect("Failed to render job");
    let svg = fs::read_to_string(written).expect("Failed to read output");
    assert!(svg.contains(r#"viewBox="0 0 400 600""#));
    assert!(svg.contains("<rect"));
}

#[test]
fn e2e_smoke_test_error_jobs() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let error_jobs = collect_job_files(jobs_path().join("errors"));

    assert!(!error_jobs.is_empty(), "No error jobs found in jobs/errors/");

    let mut unexpectedly_succeeded = Vec::new();

    for job_path in &error_jobs {
        let output_path = temp_dir.path().join(format!(
            "error_{}.png",
            job_path.file_stem().unwrap().to_string_lossy()
        ));

        if run(&args_for(job_path, output_path.clone(), None)).is_ok() {
            unexpectedly_succeeded.push(job_path.clone());
        }
        assert!(!output_path.exists(), "{} wrote output", job_path.display());
    }

    if !unexpectedly_succeeded.is_empty() {
        eprintln!("\nError jobs that unexpectedly succeeded:");
        for path in &unexpectedly_succeeded {
            eprintln!("  - {}", path.display());
        }
        panic!(
            "{} error job(s) succeeded unexpectedly",
            unexpectedly_succeeded.len()
        );
    }

    println!("✅ All {} error jobs failed as expected", error_jobs.len());
}
