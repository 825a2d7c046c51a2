//! Role declaration validation tests for issue-gate-config.
// crates/issue-gate-config/tests/roles_validation.rs
// =============================================================================
// Module: Role Declaration Validation Tests
// Description: Validate role/permission declarations and engine wiring.
// Purpose: Ensure declarations honor the closed vocabulary and limits.
// =============================================================================

use std::io::Write;

use issue_gate_config::ConfigError;
use issue_gate_config::IssueGateConfig;
use issue_gate_core::DenialMode;
use issue_gate_core::Permission;
use issue_gate_core::RoleId;
use tempfile::NamedTempFile;

type TestResult = Result<(), String>;

fn load_str(content: &str) -> Result<IssueGateConfig, ConfigError> {
    let mut file =
        NamedTempFile::new().map_err(|err| ConfigError::Io(err.to_string()))?;
    file.write_all(content.as_bytes()).map_err(|err| ConfigError::Io(err.to_string()))?;
    IssueGateConfig::load(Some(file.path()))
}

fn assert_invalid(result: Result<IssueGateConfig, ConfigError>, needle: &str) -> TestResult {
    match result {
        Err(error) => {
            let message = error.to_string();
            if message.contains(needle) {
                Ok(())
            } else {
                Err(format!("error {message} did not contain {needle}"))
            }
        }
        Ok(_) => Err("expected invalid config".to_string()),
    }
}

#[test]
fn duplicate_role_ids_are_rejected() -> TestResult {
    let content = r#"
[[roles]]
id = "reporter"
permissions = ["view_private_issues"]

[[roles]]
id = "reporter"
permissions = ["manage_private_issues"]
"#;
    assert_invalid(load_str(content), "duplicate role id: reporter")
}

#[test]
fn unknown_permission_names_are_rejected() -> TestResult {
    let content = r#"
[[roles]]
id = "reporter"
permissions = ["view_secret_issues"]
"#;
    assert_invalid(load_str(content), "unknown permission name: view_secret_issues")
}

#[test]
fn empty_role_id_is_rejected() -> TestResult {
    let content = r#"
[[roles]]
id = ""
permissions = []
"#;
    assert_invalid(load_str(content), "role id must not be empty")
}

#[test]
fn too_many_roles_are_rejected() -> TestResult {
    let mut content = String::new();
    for index in 0 .. 257 {
        content.push_str(&format!("[[roles]]\nid = \"role-{index}\"\npermissions = []\n\n"));
    }
    assert_invalid(load_str(&content), "too many role declarations")
}

#[test]
fn invalid_denial_mode_is_a_parse_error() -> TestResult {
    let content = r#"
[policy]
denial_mode = "teapot"
"#;
    match load_str(content) {
        Err(ConfigError::Parse(_)) => Ok(()),
        Err(other) => Err(format!("expected parse error, got {other}")),
        Ok(_) => Err("invalid denial mode must be rejected".to_string()),
    }
}

#[test]
fn valid_declarations_build_a_working_registry() -> TestResult {
    let content = r#"
[policy]
denial_mode = "not_found"

[[roles]]
id = "reporter"
permissions = ["view_private_issues"]

[[roles]]
id = "manager"
permissions = ["view_private_issues", "manage_private_issues"]
"#;
    let config = load_str(content).map_err(|err| err.to_string())?;
    if config.denial_mode() != DenialMode::NotFound {
        return Err("denial mode must parse from the wire name".to_string());
    }
    let registry = config.registry().map_err(|err| err.to_string())?;
    let reporter = RoleId::new("reporter");
    let manager = RoleId::new("manager");
    if !registry.has_permission(&reporter, Permission::ViewPrivateIssues) {
        return Err("reporter must hold the view grant".to_string());
    }
    if registry.has_permission(&reporter, Permission::ManagePrivateIssues) {
        return Err("reporter must not hold the manage grant".to_string());
    }
    if !registry.has_permission(&manager, Permission::ManagePrivateIssues) {
        return Err("manager must hold the manage grant".to_string());
    }
    let evaluator = config.evaluator();
    if evaluator.denial_mode() == DenialMode::NotFound {
        Ok(())
    } else {
        Err("evaluator must carry the configured denial mode".to_string())
    }
}
