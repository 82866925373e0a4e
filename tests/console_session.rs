use assetdesk::data::{ApiResult, Catalog, ErrorCode};
use assetdesk::shell::Console;
use assetdesk::Config;
use serde_json::Value;
use tokio::io::BufReader;

// ============================================================================
// Helper Functions
// ============================================================================

/// Runs `script` through a fresh seeded console and returns every response.
async fn run_script(config: Config, script: &str) -> Vec<ApiResult<Value>> {
    let mut console = Console::new(config, Catalog::seeded()).unwrap();
    let mut output: Vec<u8> = Vec::new();

    console
        .run(BufReader::new(script.as_bytes()), &mut output)
        .await
        .unwrap();

    String::from_utf8(output)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

fn data(response: &ApiResult<Value>) -> &Value {
    match response {
        ApiResult::Success { data } => data,
        ApiResult::Error { error } => panic!("unexpected error: {}", error.message),
    }
}

// ============================================================================
// Session Tests
// ============================================================================

#[tokio::test]
async fn test_browsing_session() {
    let script = r#"
# open the asset list and page through it
{"op":"navigate","payload":{"path":"/assets"}}
{"op":"page_size","payload":{"size":5}}
{"op":"next_page"}
{"op":"navigate","payload":{"path":"employees"}}
{"op":"back"}
{"op":"forward"}
{"op":"home"}
"#;
    let responses = run_script(Config::default(), script).await;
    assert_eq!(responses.len(), 7);

    let paged = data(&responses[2]);
    assert_eq!(paged["page"]["current_page"], 2);
    assert_eq!(paged["page"]["first_item"], 6);
    assert_eq!(paged["page"]["last_item"], 8);
    assert_eq!(paged["content"]["rows"].as_array().unwrap().len(), 3);

    let employees = data(&responses[3]);
    assert_eq!(employees["path"], "/employees");
    assert_eq!(employees["view"], "employees");

    // pager state survives leaving and coming back
    let back = data(&responses[4]);
    assert_eq!(back["path"], "/assets");
    assert_eq!(back["page"]["current_page"], 2);
    assert_eq!(back["can_go_forward"], true);

    let forward = data(&responses[5]);
    assert_eq!(forward["path"], "/employees");

    let home = data(&responses[6]);
    assert_eq!(home["view"], "dashboard");
    assert_eq!(home["can_go_back"], true);
    assert_eq!(home["can_go_forward"], false);
}

#[tokio::test]
async fn test_repeated_navigation_does_not_pollute_history() {
    let script = r#"
{"op":"navigate","payload":{"path":"/reports"}}
{"op":"navigate","payload":{"path":"/reports"}}
{"op":"back"}
{"op":"back"}
"#;
    let responses = run_script(Config::default(), script).await;

    assert_eq!(data(&responses[2])["path"], "/");
    assert_eq!(data(&responses[2])["can_go_back"], false);
    // second back is a no-op, not an error
    assert_eq!(data(&responses[3])["path"], "/");
}

#[tokio::test]
async fn test_errors_do_not_end_the_session() {
    let script = r#"
{"op":"fly"}
{"op":"get","payload":{"collection":"assets","id":"404"}}
{"op":"create","payload":{"collection":"time_entries","record":{"date":"2024-06-10","projectId":"p-1","hours":25,"createdBy":"Lisa Brown","createdOn":"2024-06-10"}}}
{"op":"create","payload":{"collection":"time_entries","record":{"date":"2024-06-10","projectId":"p-1","hours":6,"createdBy":"Lisa Brown","createdOn":"2024-06-10"}}}
{"op":"state"}
"#;
    let responses = run_script(Config::default(), script).await;
    assert_eq!(responses.len(), 5);

    let codes: Vec<Option<ErrorCode>> = responses
        .iter()
        .map(|r| match r {
            ApiResult::Success { .. } => None,
            ApiResult::Error { error } => Some(error.code),
        })
        .collect();
    assert_eq!(
        codes,
        [
            Some(ErrorCode::BadRequest),
            Some(ErrorCode::NotFound),
            Some(ErrorCode::Invalid),
            None,
            None,
        ]
    );
    assert_eq!(data(&responses[3])["id"], "6");
}

#[tokio::test]
async fn test_filtering_shrinks_the_page_count() {
    let config = Config {
        page_size: 2,
        ..Config::default()
    };
    let script = r#"
{"op":"navigate","payload":{"path":"/assets"}}
{"op":"last_page"}
{"op":"filter","payload":{"search":"pro"}}
{"op":"filter","payload":{"search":"nothing matches this"}}
"#;
    let responses = run_script(config, script).await;

    assert_eq!(data(&responses[1])["page"]["current_page"], 4);

    // MacBook Pro, iPhone 14 Pro, iPad Pro, HP LaserJet Pro
    let filtered = data(&responses[2]);
    assert_eq!(filtered["path"], "/assets?q=pro");
    assert_eq!(filtered["page"]["total_items"], 4);
    assert_eq!(filtered["page"]["current_page"], 2);

    let empty = data(&responses[3]);
    assert_eq!(empty["page"]["total_pages"], 1);
    assert_eq!(empty["page"]["current_page"], 1);
    assert_eq!(empty["page"]["first_item"], 0);
    assert!(empty["content"]["rows"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_start_path_from_config() {
    let config = Config {
        start_path: "/locations".to_string(),
        ..Config::default()
    };
    let responses = run_script(config, r#"{"op":"state"}"#).await;
    let state = data(&responses[0]);

    assert_eq!(state["view"], "locations");
    assert_eq!(state["can_go_back"], false);
    assert_eq!(state["page"]["total_items"], 7);
}
