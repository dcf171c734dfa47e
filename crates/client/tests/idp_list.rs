mod common;

use common::MockAclServer;

#[tokio::test]
async fn test_found_none() {
    let server = MockAclServer::start().await;

    let output = server.run(&["idp", "list"]).await;

    assert_eq!(output.code, 0);
    assert!(output.stderr.is_empty());
    assert!(output.stdout.is_empty());
}

#[tokio::test]
async fn test_found_some() {
    let server = MockAclServer::start().await;
    let mut names = Vec::new();
    for _ in 0..5 {
        names.push(server.create_idp().await);
    }

    let output = server.run(&["idp", "list"]).await;

    assert_eq!(output.code, 0);
    assert!(output.stderr.is_empty());
    for name in &names {
        assert!(output.stdout.contains(name.as_str()));
    }
}

#[tokio::test]
async fn test_json_list() {
    let server = MockAclServer::start().await;
    let name = server.create_idp().await;

    let output = server.run(&["idp", "list", "--format=json"]).await;

    assert_eq!(output.code, 0);
    let json: Vec<serde_json::Value> = serde_json::from_str(&output.stdout).unwrap();
    assert_eq!(json.len(), 1);
    assert_eq!(json[0]["Name"], name);
    assert_eq!(json[0]["Type"], "kubernetes");
}

#[tokio::test]
async fn test_unreachable_server() {
    let output = MockAclServer::start()
        .await
        .run_raw(vec![
            "idpctl".to_string(),
            "--http-addr=127.0.0.1:1".to_string(),
            "idp".to_string(),
            "list".to_string(),
        ])
        .await;

    assert_eq!(output.code, 1);
    assert!(output
        .stderr
        .starts_with("Failed to retrieve the identity provider list: transport error:"));
}
