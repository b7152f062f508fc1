/// Probe Run Integration Tests
///
/// Drive the full run loop (settings → catalog expansion → compiler probe →
/// report) against a fake compiler. The fake compiler is a shell script that
/// rejects any source putting the vendor attribute on a `return` statement,
/// which leaves 30 of the 78 catalog variants valid.

#[cfg(all(test, unix))]
mod probe_run_integration {
    use std::fs;
    use std::path::{Path, PathBuf};

    use constprobe_cli::{run_with_writer, CliError, ProbeSettings, SettingsLoader};
    use constprobe_templates::{VariantGenerator, CATALOG};
    use tempfile::TempDir;

    const SEPARATOR_PREFIX: &str = "// *****";

    fn fake_compiler(dir: &Path) -> PathBuf {
        let path = dir.join("fake-cl.sh");
        fs::write(
            &path,
            r#"for last; do :; done
touch "$(basename "$last" .cpp).obj"
! grep -qF "[[msvc::constexpr]] return" "$last"
"#,
        )
        .unwrap();
        path
    }

    struct Workspace {
        tools: TempDir,
        work: TempDir,
    }

    impl Workspace {
        fn new() -> Self {
            Self {
                tools: tempfile::tempdir().unwrap(),
                work: tempfile::tempdir().unwrap(),
            }
        }

        fn settings(&self, verbose: bool) -> ProbeSettings {
            ProbeSettings {
                cl: Some(fake_compiler(self.tools.path())),
                launcher: Some("sh".to_string()),
                work_dir: Some(self.work.path().to_path_buf()),
                verbose,
                ..Default::default()
            }
        }
    }

    async fn run_to_string(settings: &ProbeSettings) -> String {
        let mut out = Vec::new();
        run_with_writer(settings, &mut out).await.unwrap();
        String::from_utf8(out).unwrap()
    }

    #[tokio::test]
    async fn test_quiet_run_prints_only_valid_variants() {
        let ws = Workspace::new();
        let output = run_to_string(&ws.settings(false)).await;

        assert_eq!(output.matches(SEPARATOR_PREFIX).count(), 30);
        assert!(!output.contains("> Valid"));
        assert!(!output.contains("> Invalid"));
        assert!(!output.contains("[[msvc::constexpr]] return"));
    }

    #[tokio::test]
    async fn test_quiet_run_output_format() {
        let ws = Workspace::new();
        let output = run_to_string(&ws.settings(false)).await;

        let expected_start = format!(
            "// {}\n\n         bool F() {{  return true; }}\n        static_assert(F());\n    \n",
            "*".repeat(77)
        );
        assert!(output.starts_with(&expected_start), "got: {:?}", &output[..output.len().min(200)]);
    }

    #[tokio::test]
    async fn test_verbose_run_labels_every_variant() {
        let ws = Workspace::new();
        let output = run_to_string(&ws.settings(true)).await;

        assert_eq!(output.matches(SEPARATOR_PREFIX).count(), 78);
        assert_eq!(output.matches("\n> Valid\n").count(), 30);
        assert_eq!(output.matches("\n> Invalid\n").count(), 48);
    }

    #[tokio::test]
    async fn test_verbose_output_follows_generation_order() {
        let ws = Workspace::new();
        let output = run_to_string(&ws.settings(true)).await;

        let expected: Vec<String> = VariantGenerator::default()
            .generate(&CATALOG)
            .unwrap()
            .into_iter()
            .map(|v| v.source)
            .collect();

        let mut cursor = 0;
        for source in &expected {
            let found = output[cursor..]
                .find(source.as_str())
                .expect("variant missing or out of order");
            cursor += found + source.len();
        }
    }

    #[tokio::test]
    async fn test_run_leaves_no_object_files() {
        let ws = Workspace::new();
        run_to_string(&ws.settings(false)).await;

        assert_eq!(fs::read_dir(ws.work.path()).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn test_settings_from_config_file() {
        let ws = Workspace::new();
        let config_path = ws.tools.path().join("constprobe.toml");
        fs::write(
            &config_path,
            format!(
                "cl = {:?}\nlauncher = \"sh\"\nverbose = true\nwork_dir = {:?}\n",
                fake_compiler(ws.tools.path()).display().to_string(),
                ws.work.path().display().to_string(),
            ),
        )
        .unwrap();

        let settings = SettingsLoader::new()
            .with_path(&config_path)
            .with_env_prefix("CONSTPROBE_INTEGRATION")
            .load()
            .unwrap();

        let mut out = Vec::new();
        let summary = run_with_writer(&settings, &mut out).await.unwrap();
        assert_eq!(summary.total, 78);
        assert_eq!(summary.valid, 30);
    }

    #[tokio::test]
    async fn test_missing_compiler_setting() {
        let result = run_with_writer(&ProbeSettings::default(), Vec::new()).await;
        assert!(matches!(result, Err(CliError::MissingCompiler)));
    }

    #[tokio::test]
    async fn test_nonexistent_compiler_is_invocation_error() {
        let settings = ProbeSettings {
            cl: Some(PathBuf::from("/nonexistent/cl.exe")),
            native: true,
            ..Default::default()
        };

        let mut out = Vec::new();
        let result = run_with_writer(&settings, &mut out).await;
        assert!(matches!(result, Err(CliError::Process(_))));
        assert!(out.is_empty());
    }
}
