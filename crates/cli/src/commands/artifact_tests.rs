// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use distci_adapters::FakeApiAdapter;
use distci_wire::Endpoint;

fn fake_with(content: &[u8]) -> FakeApiAdapter {
    let fake = FakeApiAdapter::new();
    let endpoint = Endpoint::GetArtifact {
        job: JobId::from("nightly"),
        build: "5".to_string(),
        artifact: ArtifactId::from("a1"),
    };
    fake.respond_bytes(&endpoint, content.to_vec());
    fake
}

#[tokio::test]
async fn writes_to_stdout_without_file() {
    let client = DistciClient::new(fake_with(b"\x00binary\xff"));

    let mut out: Vec<u8> = Vec::new();
    handle(&client, JobId::from("nightly"), "5", ArtifactId::from("a1"), None, &mut out)
        .await
        .unwrap();

    assert_eq!(out, b"\x00binary\xff");
}

#[tokio::test]
async fn writes_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("f1.txt");
    let client = DistciClient::new(fake_with(b"hello"));

    let mut out: Vec<u8> = Vec::new();
    handle(&client, JobId::from("nightly"), "5", ArtifactId::from("a1"), Some(&path), &mut out)
        .await
        .unwrap();

    assert_eq!(std::fs::read(&path).unwrap(), b"hello");
    assert!(out.is_empty());
}

#[tokio::test]
async fn unknown_artifact_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.txt");
    let client = DistciClient::new(FakeApiAdapter::new());

    let mut out: Vec<u8> = Vec::new();
    let result =
        handle(&client, JobId::from("nightly"), "5", ArtifactId::from("a1"), Some(&path), &mut out)
            .await;

    assert!(result.is_err());
    assert!(!path.exists());
}
