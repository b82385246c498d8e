//! Fake executables for tests that spawn or serve a "Tailwind CSS" binary

use std::path::{Path, PathBuf};

/// Shell script body of a fake Tailwind CSS CLI
///
/// It prints `tailwindcss <args>` to stdout, a marker to stderr, and exits
/// with `exit_code`.
pub fn fake_tailwind_script(exit_code: i32) -> String {
    format!(
        "#!/bin/sh\necho \"tailwindcss $*\"\necho \"fake tailwind stderr\" >&2\nexit {}\n",
        exit_code
    )
}

/// Writes `#!/bin/sh` + `body` to `dir/name` and marks it executable
///
/// # Panics
///
/// Panics if the file cannot be written or its permissions set
#[cfg(unix)]
pub fn write_fake_executable(dir: &Path, name: &str, body: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join(name);
    let script = if body.starts_with("#!") {
        body.to_string()
    } else {
        format!("#!/bin/sh\n{}\n", body)
    };

    std::fs::write(&path, script).expect("Failed to write fake executable");
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
        .expect("Failed to make fake executable runnable");

    path
}

#[cfg(test)]
#[cfg(unix)]
mod tests {
    use super::*;
    use std::process::Command;
    use tempfile::TempDir;

    #[test]
    fn test_fake_executable_runs() {
        let temp = TempDir::new().unwrap();
        let path = write_fake_executable(temp.path(), "tailwindcss", &fake_tailwind_script(7));

        let output = Command::new(&path).arg("--minify").output().unwrap();

        assert_eq!(output.status.code(), Some(7));
        assert_eq!(String::from_utf8_lossy(&output.stdout), "tailwindcss --minify\n");
        assert_eq!(String::from_utf8_lossy(&output.stderr), "fake tailwind stderr\n");
    }
}
