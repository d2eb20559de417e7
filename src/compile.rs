//! Project compiler.
//!
//! Turns a launcher project into Windows batch scripts, one per command
//! button, and writes a manifest describing where each script landed.
//! Registering the scripts with the shell is left to the caller, which gets
//! the list of [`Binding`]s back.

use std::fs;
use std::path::{Component, Path, PathBuf};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::CompileError;

/// File name of the manifest written next to the scripts.
pub const MANIFEST_FILE: &str = "manifest.json";

/// Script extension for command buttons.
pub const SCRIPT_EXTENSION: &str = "cmd";

/// Button type that compiles to a script.
pub const COMMAND_KIND: &str = "command";

// =============================================================================
// Project model
// =============================================================================

/// A launcher menu project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    /// Compile every button as its own menu entry instead of only the first.
    #[serde(default)]
    pub cascade: bool,
    #[serde(default)]
    pub buttons: Vec<Button>,
    /// Fields this crate does not interpret, kept for the manifest.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// One menu entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Button {
    pub id: String,
    /// Button type; only `"command"` buttons get a script.
    #[serde(rename = "type", default, skip_serializing_if = "String::is_empty")]
    pub kind: String,
    #[serde(default)]
    pub action: String,
    /// Absolute path of the compiled script, filled in by [`compile`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<PathBuf>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Button {
    /// Runs `action` as a shell command through a generated script.
    pub fn is_command(&self) -> bool {
        self.kind == COMMAND_KIND
    }
}

impl Project {
    /// Parse a project from JSON.
    pub fn from_json_str(json: &str) -> Result<Self, CompileError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a project file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CompileError> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }
}

// =============================================================================
// Compilation
// =============================================================================

/// A button ready to be registered, with its script path if it has one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    pub button_id: String,
    pub location: Option<PathBuf>,
}

/// Result of a successful [`compile`].
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledProject {
    /// The project with button locations resolved, as written to the manifest.
    pub project: Project,
    pub bindings: Vec<Binding>,
    pub manifest: PathBuf,
}

/// Compile `project` into `out_dir`.
///
/// Cascade projects compile every button, possibly none; otherwise only the
/// first button is compiled. A non-cascade project without buttons, or a
/// compiled button whose id is not a plain file name, fails before anything
/// is written.
pub fn compile(project: &Project, out_dir: &Path) -> Result<CompiledProject, CompileError> {
    debug!("compiling project {}", project.id);

    let count = match (project.cascade, project.buttons.len()) {
        (true, n) => n,
        (false, 0) => {
            debug!("no buttons found for project {}", project.id);
            return Err(CompileError::NoButtons {
                project: project.id.clone(),
            });
        }
        (false, _) => 1,
    };

    if let Some(button) = project
        .buttons
        .iter()
        .take(count)
        .find(|button| !is_plain_file_name(&button.id))
    {
        return Err(CompileError::InvalidButtonId {
            id: button.id.clone(),
        });
    }

    fs::create_dir_all(out_dir)?;

    let mut compiled = project.clone();
    let mut bindings = Vec::with_capacity(count);
    for button in compiled.buttons.iter_mut().take(count) {
        button.location = process_button(button, out_dir)?;
        bindings.push(Binding {
            button_id: button.id.clone(),
            location: button.location.clone(),
        });
    }

    let manifest = out_dir.join(MANIFEST_FILE);
    fs::write(&manifest, serde_json::to_string_pretty(&compiled)?)?;
    debug!("wrote manifest {}", manifest.display());

    Ok(CompiledProject {
        project: compiled,
        bindings,
        manifest,
    })
}

/// True if `id` is exactly one normal path component, so `<id>.cmd` stays
/// inside the output directory.
fn is_plain_file_name(id: &str) -> bool {
    let mut components = Path::new(id).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}

/// Write the script for one button, returning where it went.
fn process_button(button: &Button, out_dir: &Path) -> Result<Option<PathBuf>, CompileError> {
    debug!("processing triggers for button {}", button.id);
    if !button.is_command() {
        return Ok(None);
    }
    let path = out_dir.join(format!("{}.{SCRIPT_EXTENSION}", button.id));
    fs::write(&path, compile_command(&button.action))?;
    debug!("compiled button action for {} to {}", button.id, path.display());
    Ok(Some(path))
}

/// Wrap a shell command in a batch script.
///
/// The script takes the target file as `%1`. `{filename}` in the command is
/// replaced by the full file name and `{filenameWE}` by the name without its
/// extension.
pub fn compile_command(command: &str) -> String {
    let body = format!(
        "\t{}",
        command
            .replace("{filename}", "%filename%")
            .replace("{filenameWE}", "%filenameWE%")
    );

    [
        "@echo off",
        ":: Generated by Microart Menuify",
        ":: DO NOT EDIT THIS FILE",
        "if exist %1% (",
        "\t:: Menuify variables",
        "\tset filename=%1%",
        "\tset filenameWE=",
        "\tfor %%a in (%filename%) do (@set filenameWE=%%~na)",
        body.as_str(),
        ")",
    ]
    .join("\n")
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("menuify-{name}-{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    fn project(json: &str) -> Project {
        Project::from_json_str(json).unwrap()
    }

    #[test]
    fn test_compile_command_substitutes_placeholders() {
        let script = compile_command("ffmpeg -i {filename} {filenameWE}.mp3");
        let lines: Vec<&str> = script.lines().collect();
        assert_eq!(lines[0], "@echo off");
        assert_eq!(lines[3], "if exist %1% (");
        assert_eq!(lines[8], "\tffmpeg -i %filename% %filenameWE%.mp3");
        assert_eq!(lines[9], ")");
        assert!(!script.ends_with('\n'));
    }

    #[test]
    fn test_button_type_parsing() {
        let p = project(
            r#"{"id": "p", "buttons": [
                {"id": "a", "type": "command", "action": "echo"},
                {"id": "b", "type": "folder"},
                {"id": "c"}
            ]}"#,
        );
        assert!(p.buttons[0].is_command());
        assert!(!p.buttons[1].is_command());
        assert_eq!(p.buttons[1].kind, "folder");
        assert!(!p.buttons[2].is_command());
        assert!(!p.cascade);
    }

    #[test]
    fn test_no_buttons() {
        let dir = scratch_dir("empty");
        let err = compile(&project(r#"{"id": "empty"}"#), &dir).unwrap_err();
        assert!(matches!(err, CompileError::NoButtons { ref project } if project == "empty"));
        assert_eq!(err.code(), 1302);
        assert!(!dir.exists());
    }

    #[test]
    fn test_cascade_without_buttons_writes_empty_manifest() {
        let dir = scratch_dir("cascade-empty");
        let compiled =
            compile(&project(r#"{"id": "c", "cascade": true, "buttons": []}"#), &dir).unwrap();

        assert!(compiled.bindings.is_empty());
        let manifest = Project::load(&compiled.manifest).unwrap();
        assert!(manifest.buttons.is_empty());
        assert!(manifest.cascade);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_button_id_must_stay_in_out_dir() {
        let root = scratch_dir("traversal");
        let dir = root.join("out");
        for id in ["../escaped", "nested/script", "/abs", "..", "."] {
            let json = format!(
                r#"{{"id": "t", "buttons": [{{"id": "{id}", "type": "command", "action": "x"}}]}}"#
            );
            let err = compile(&project(&json), &dir).unwrap_err();
            assert!(
                matches!(err, CompileError::InvalidButtonId { id: ref bad } if bad == id),
                "{id}: {err}"
            );
            assert_eq!(err.code(), 1303);
        }
        assert!(!root.exists());
    }

    #[test]
    fn test_unprocessed_button_ids_are_not_checked() {
        let dir = scratch_dir("unprocessed");
        let p = project(
            r#"{"id": "single", "buttons": [
                {"id": "ok", "type": "command", "action": "echo"},
                {"id": "../never", "type": "command", "action": "echo"}
            ]}"#,
        );
        let compiled = compile(&p, &dir).unwrap();
        assert_eq!(compiled.bindings.len(), 1);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_single_compiles_first_button_only() {
        let dir = scratch_dir("single");
        let p = project(
            r#"{"id": "single", "buttons": [
                {"id": "first", "type": "command", "action": "echo {filename}"},
                {"id": "second", "type": "command", "action": "echo"}
            ]}"#,
        );
        let compiled = compile(&p, &dir).unwrap();

        assert_eq!(compiled.bindings.len(), 1);
        assert_eq!(compiled.bindings[0].button_id, "first");
        let script = fs::read_to_string(dir.join("first.cmd")).unwrap();
        assert!(script.contains("\techo %filename%"));
        assert!(!dir.join("second.cmd").exists());
        assert!(compiled.manifest.exists());

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_cascade_compiles_every_button() {
        let dir = scratch_dir("cascade");
        let p = project(
            r#"{"id": "cascade", "cascade": true, "label": "Convert", "buttons": [
                {"id": "mp3", "type": "command", "action": "to-mp3 {filename}"},
                {"id": "open", "type": "link", "icon": "open.ico"}
            ]}"#,
        );
        let compiled = compile(&p, &dir).unwrap();

        assert_eq!(compiled.bindings.len(), 2);
        assert_eq!(compiled.bindings[0].location, Some(dir.join("mp3.cmd")));
        assert_eq!(compiled.bindings[1].location, None);

        let manifest: Project = Project::load(&compiled.manifest).unwrap();
        assert_eq!(manifest, compiled.project);
        assert_eq!(manifest.buttons[0].location, Some(dir.join("mp3.cmd")));
        assert_eq!(manifest.extra["label"], "Convert");
        assert_eq!(manifest.buttons[1].kind, "link");
        assert_eq!(manifest.buttons[1].extra["icon"], "open.ico");

        fs::remove_dir_all(&dir).unwrap();
    }
}
