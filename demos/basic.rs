//! Basic example demonstrating the awork API client.
//!
//! Run with:
//! ```
//! AWORK_API_TOKEN=your-token cargo run --example basic
//! ```

use awork::{AworkClient, Create, Get, List, ProjectStatus, Task, TaskParams};

#[tokio::main]
async fn main() -> awork::Result<()> {
    // Debug events carry every request URI, body and header set
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("Creating awork client...");
    let mut client = AworkClient::from_env()?;
    println!("Connected to: {}", client.base_url());

    // List project statuses, ordered by name
    println!("\n--- Project Statuses ---");
    client.set_order("name");
    let statuses = ProjectStatus::list(&client).await?;
    for status in &statuses {
        println!("  - {} ({})", status.name(), status.status_type());
        for child in status.project_statuses().unwrap_or_default() {
            println!("      - {}", child.name());
        }
    }

    // The order set above still applies; clear it before paging tasks
    client.reset_query();
    client.set_filter("isPrio eq true");

    println!("\n--- Priority Tasks (first page) ---");
    let page = Task::list_page(&client, 1, 10).await?;
    for task in &page {
        println!("  - {} ({})", task.name(), task.id());
    }

    println!("\n--- Creating a Task ---");
    let task = Task::create(
        &client,
        TaskParams {
            name: Some("Try the awork client".to_string()),
            base_type: Some("private".to_string()),
            ..Default::default()
        },
    )
    .await?;
    println!("Created: {} ({})", task.name(), task.id());

    let fetched = Task::get(&client, task.id().to_string()).await?;
    println!("Fetched back: {}", fetched.name());

    Ok(())
}
