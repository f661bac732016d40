use std::io::Write;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

fn payload(json: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file
}

// ============================================================================
// Help
// ============================================================================

#[test]
fn test_help_lists_subcommands() {
    cargo_bin_cmd!("cloudsdk")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("apis"))
        .stdout(predicate::str::contains("validate"))
        .stdout(predicate::str::contains("describe"));
}

// ============================================================================
// Inspection
// ============================================================================

#[test]
fn test_apis() {
    cargo_bin_cmd!("cloudsdk")
        .env("NO_COLOR", "1")
        .arg("apis")
        .assert()
        .success()
        .stdout(predicate::str::contains("AzureMonitor"))
        .stdout(predicate::str::contains("https://intersight.com"))
        .stdout(predicate::str::contains("XCLARITY_PASSWORD"));
}

#[test]
fn test_operations() {
    cargo_bin_cmd!("cloudsdk")
        .env("NO_COLOR", "1")
        .args(["operations", "oci"])
        .assert()
        .success()
        .stdout(predicate::str::contains("/20160918/vcns/{vcnId}"))
        .stdout(predicate::str::contains("ListVcns"));
}

#[test]
fn test_describe_vcn() {
    cargo_bin_cmd!("cloudsdk")
        .env("NO_COLOR", "1")
        .args(["describe", "Vcn"])
        .assert()
        .success()
        .stdout(predicate::str::contains("compartmentId"))
        .stdout(predicate::str::contains("lifecycle_state"));
}

#[test]
fn test_describe_unknown_model_fails() {
    cargo_bin_cmd!("cloudsdk")
        .args(["describe", "NoSuchModel"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown model 'NoSuchModel'"));
}

// ============================================================================
// Validation
// ============================================================================

#[test]
fn test_validate_valid_payload() {
    let file = payload(r#"{"compartmentId": "ocid1.compartment.oc1..aaaaaaaacomp", "cidrBlocks": ["10.0.0.0/16"]}"#);
    cargo_bin_cmd!("cloudsdk")
        .env("NO_COLOR", "1")
        .args(["validate", "CreateVcnDetails"])
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("is valid"));
}

#[test]
fn test_validate_invalid_payload_exits_nonzero() {
    let file = payload(r#"{"Name": "bad name!", "DnsServers": ["10.0.0.1", "10.0.0.2", "10.0.0.3", "10.0.0.4"]}"#);
    cargo_bin_cmd!("cloudsdk")
        .env("NO_COLOR", "1")
        .args(["validate", "KubernetesSysConfigPolicy"])
        .arg(file.path())
        .assert()
        .failure()
        .stdout(predicate::str::contains("violation(s)"))
        .stdout(predicate::str::contains("DnsServers"));
}

#[test]
fn test_validate_reads_stdin() {
    cargo_bin_cmd!("cloudsdk")
        .env("NO_COLOR", "1")
        .args(["validate", "Node", "-"])
        .write_stdin(r#"{"uuid": "0123456789ABCDEF0123456789ABCDEF"}"#)
        .assert()
        .success();
}

#[test]
fn test_validate_rejects_malformed_json() {
    let file = payload("{not json");
    cargo_bin_cmd!("cloudsdk")
        .args(["validate", "Node"])
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("not valid JSON"));
}

// ============================================================================
// Get
// ============================================================================

#[test]
fn test_get_rejects_bad_param_syntax() {
    cargo_bin_cmd!("cloudsdk")
        .args(["get", "oci", "GetVcn", "--param", "vcnId"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("KEY=VALUE"));
}

#[test]
fn test_get_rejects_write_endpoints() {
    cargo_bin_cmd!("cloudsdk")
        .args(["get", "oci", "DeleteVcn", "--param", "vcnId=ocid1.vcn.oc1..x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("only GET endpoints"));
}
