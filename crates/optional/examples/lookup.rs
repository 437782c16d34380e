use std::collections::HashMap;

use anyhow::{anyhow, Result};
use optional::{option_of, Optional};
use tracing_subscriber::EnvFilter;

fn nickname(users: &HashMap<&str, &str>, id: &str) -> Optional<String> {
    option_of(users.get(id))
        .filter(|name| !name.is_empty())
        .map(|name| format!("@{}", name.to_lowercase()))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let users = HashMap::from([("1", "Ann"), ("2", "")]);

    for id in ["1", "2", "3"] {
        let shown = nickname(&users, id)
            .do_if_empty(|| tracing::info!(id, "no nickname"))
            .or_else_get(|| "<anonymous>".to_string());
        println!("{id}: {shown}");
    }

    let first = nickname(&users, "1").or_else_throw(|| anyhow!("user 1 vanished"))?;
    println!("first: {first}");
    println!("display: {} / {}", nickname(&users, "1"), nickname(&users, "3"));
    Ok(())
}
