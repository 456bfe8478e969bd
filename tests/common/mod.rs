//! Common test utilities for Inlay integration tests

use std::path::PathBuf;

use tempfile::TempDir;

/// A consumer project with a component library checkout next to it
pub struct TestProject {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to the consumer project root (the process cwd in tests)
    pub path: PathBuf,
}

impl TestProject {
    /// Create a new empty consumer project
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Seed the standard library fixture and return its source root
    ///
    /// Components: badge (pulls shared styles), chip (pulls badge + left-pad),
    /// input (pulls the internal form-core + a scoped package). Test and story
    /// files sit beside badge and must never be installed.
    pub fn seed_library(&self) -> PathBuf {
        let files: &[(&str, &str)] = &[
            ("styles/tokens.ts", "export const tokens = {};\n"),
            ("ui-badge/index.ts", "import './ui-badge';\n"),
            (
                "ui-badge/ui-badge.ts",
                "import { LitElement, html } from 'lit';\n\
                 import { badgeStyles } from './ui-badge.styles';\n\
                 import '../styles/tokens';\n",
            ),
            (
                "ui-badge/ui-badge.styles.ts",
                "import { css } from 'lit';\n",
            ),
            (
                "ui-badge/ui-badge.test.ts",
                "import './ui-badge';\nimport { fixture } from '@open-wc/testing';\n",
            ),
            ("ui-badge/ui-badge.stories.ts", "import './ui-badge';\n"),
            (
                "ui-chip/ui-chip.ts",
                "import { LitElement } from 'lit';\n\
                 import '../ui-badge/ui-badge';\n\
                 import pad from 'left-pad';\n",
            ),
            ("ui-form-core/index.ts", "import './ui-form-core';\n"),
            ("ui-form-core/ui-form-core.ts", "import 'tslib';\n"),
            (
                "ui-input/ui-input.ts",
                "import '../ui-form-core';\n\
                 import helpers from '@scope/box/sub/helpers.js';\n",
            ),
        ];

        let root = self.path.join("library/src");
        for (relative, content) in files {
            let path = root.join(relative);
            std::fs::create_dir_all(path.parent().expect("fixture path has parent"))
                .expect("Failed to create fixture directory");
            std::fs::write(&path, content).expect("Failed to write fixture file");
        }
        root
    }

    /// Write a file in the consumer project
    #[allow(dead_code)]
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file from the consumer project
    #[allow(dead_code)]
    pub fn read_file(&self, path: &str) -> String {
        std::fs::read_to_string(self.path.join(path)).expect("Failed to read file")
    }

    /// Check if a file exists in the consumer project
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// Command for the inlay binary, running inside the consumer project
    #[allow(deprecated)]
    pub fn inlay_cmd(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::Command::cargo_bin("inlay").expect("inlay binary builds");
        // Always ignore any developer INLAY_ROOT overrides during tests
        cmd.env_remove("INLAY_ROOT");
        cmd.current_dir(&self.path);
        cmd
    }

    /// Command pre-pointed at the seeded library root
    pub fn inlay_cmd_with_root(&self, root: &std::path::Path) -> assert_cmd::Command {
        let mut cmd = self.inlay_cmd();
        cmd.arg("--root").arg(root);
        cmd
    }
}
