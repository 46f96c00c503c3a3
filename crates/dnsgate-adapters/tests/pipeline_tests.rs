//! ValidationService wired to the real parser over an in-memory tree.

use std::path::PathBuf;

use dnsgate_adapters::{MemoryFilesystem, YamlManifestParser};
use dnsgate_core::{
    application::{ValidationOptions, ValidationService},
    domain::ValidationError,
};

const RECORDS: &str = r#"
apiVersion: externaldns.nginx.org/v1
kind: DNSEndpoint
metadata: { name: web, namespace: prod }
spec:
  endpoints:
    - { dnsName: web.example.com, recordType: A, targets: [10.0.0.1] }
    - { dnsName: txt.example.com, recordType: TXT, targets: ["::1"] }
---
apiVersion: externaldns.nginx.org/v1
kind: DNSEndpoint
metadata: { name: bad }
spec:
  endpoints:
    - { dnsName: bad.example.com, recordType: cname, targets: [example.com] }
"#;

fn service(fs: MemoryFilesystem, all_errors: bool) -> ValidationService {
    ValidationService::new(
        Box::new(fs),
        Box::new(YamlManifestParser::new()),
        ValidationOptions {
            all_errors,
            ..ValidationOptions::default()
        },
    )
}

fn tree() -> MemoryFilesystem {
    MemoryFilesystem::new()
        .with_file("deploy/records.yaml", RECORDS)
        .with_file(
            "deploy/empty.json",
            r#"{"apiVersion":"externaldns.nginx.org/v1","kind":"DNSEndpoint","metadata":{"name":"empty"},"spec":{"endpoints":[]}}"#,
        )
        .with_file("deploy/notes.txt", "ignored")
}

#[test]
fn directory_report() {
    let report = service(tree(), false)
        .validate_paths(&[PathBuf::from("deploy")])
        .unwrap();

    let names: Vec<_> = report.resources.iter().map(|r| r.name.as_str()).collect();
    // files are visited in sorted order: empty.json, records.yaml
    assert_eq!(names, ["empty", "prod/web", "bad"]);
    assert!(!report.is_valid());
    assert_eq!(report.accepted().count(), 1);

    assert_eq!(report.resources[0].errors, [ValidationError::EmptySpec]);
    assert_eq!(report.resources[2].document, 1);
    assert_eq!(report.resources[2].errors.len(), 1);
    assert_eq!(
        report.resources[2].errors[0].field(),
        "spec.endpoints[0].recordType"
    );
}

#[test]
fn all_errors_collects_every_violation() {
    let report = service(tree(), true)
        .validate_paths(&[PathBuf::from("deploy/records.yaml")])
        .unwrap();

    let bad = &report.resources[1];
    assert_eq!(
        bad.errors.iter().map(|e| e.reason()).collect::<Vec<_>>(),
        ["UnsupportedRecordType", "InvalidTarget"]
    );
}

#[test]
fn missing_input_aborts() {
    let err = service(tree(), false)
        .validate_paths(&[PathBuf::from("deploy"), PathBuf::from("elsewhere")])
        .unwrap_err();
    assert!(err.to_string().contains("elsewhere"));
}
