//! Async Pipeline Example
//!
//! Demonstrates chaining steps that have to wait. Each step is awaited
//! before the next one starts, and the first failure skips everything after
//! it.
//!
//! Run with: cargo run --example async_pipeline

use std::time::Duration;

use outcome::prelude::*;

#[derive(Debug)]
enum FetchError {
    Network(String),
    Http(u16),
    Decode(String),
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchError::Network(msg) => write!(f, "network error: {}", msg),
            FetchError::Http(status) => write!(f, "http status {}", status),
            FetchError::Decode(msg) => write!(f, "decode error: {}", msg),
        }
    }
}

async fn fetch(url: &'static str) -> Outcome<(u16, &'static str), FetchError> {
    tokio::time::sleep(Duration::from_millis(10)).await;
    match url {
        "https://api.example.com/user/1" => success((200, r#"{"name":"ada"}"#)),
        "https://api.example.com/user/2" => success((404, "")),
        _ => failure(FetchError::Network(format!("cannot resolve {}", url))),
    }
}

async fn check_status((status, body): (u16, &'static str)) -> Outcome<&'static str, FetchError> {
    if status == 200 {
        success(body)
    } else {
        failure(FetchError::Http(status))
    }
}

async fn decode(body: &'static str) -> Outcome<String, FetchError> {
    match body
        .strip_prefix(r#"{"name":""#)
        .and_then(|s| s.strip_suffix(r#""}"#))
    {
        Some(name) => success(name.to_string()),
        None => failure(FetchError::Decode(format!("unexpected body {:?}", body))),
    }
}

async fn load_user(url: &'static str) -> Outcome<String, FetchError> {
    fetch(url)
        .and_then_async(check_status)
        .and_then_async(decode)
        .await
}

#[tokio::main]
async fn main() {
    println!("Async Pipeline Examples");
    println!("=======================");

    println!("\n=== Example 1: Sequential chain ===");
    for url in [
        "https://api.example.com/user/1",
        "https://api.example.com/user/2",
        "https://nowhere.invalid/",
    ] {
        match load_user(url).await {
            Outcome::Success(name) => println!("  {} -> user {}", url, name),
            Outcome::Failure(e) => println!("  {} -> failed: {}", url, e),
        }
    }

    println!("\n=== Example 2: Independent chains in parallel ===");
    let both = combine_async(
        load_user("https://api.example.com/user/1"),
        load_user("https://api.example.com/user/2"),
    )
    .await;
    println!("  combined: {:?}", both);

    let urls = ["https://api.example.com/user/1"; 3];
    let everyone = combine_all_async(urls.map(load_user)).await;
    println!("  all three: {:?}", everyone);

    println!("\n=== Example 3: Async recovery ===");
    let name = load_user("https://api.example.com/user/2")
        .catch_async(|e| async move {
            println!("  falling back after {}", e);
            success::<_, FetchError>("guest".to_string())
        })
        .map_success(|n| n.to_uppercase())
        .await;
    println!("  name: {:?}", name);

    println!("\n=== All examples completed successfully! ===");
}
