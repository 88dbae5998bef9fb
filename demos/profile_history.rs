use profile_history::{
    HistoryConfig, InMemoryProfileStore, ProfileError, ProfileService, ProfileUpdate, UserProfile,
};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), ProfileError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let service = ProfileService::with_config(
        InMemoryProfileStore::new(),
        HistoryConfig::new().with_max_retention(3),
    );
    service.create_profile(UserProfile::new("u1", "Alice", "alice@example.com")?)?;

    for name in ["Bob", "Carol"] {
        service.update_profile("u1", ProfileUpdate::new().name(name))?;
    }

    service.undo("u1")?;
    service.undo("u1")?;
    service.update_profile("u1", ProfileUpdate::new().name("Dana").phone("555-0100"))?;

    for snapshot in service.history("u1")? {
        println!("{}", snapshot);
    }

    let stats = service.stats("u1")?;
    println!(
        "{}",
        serde_json::to_string_pretty(&stats).map_err(|e| ProfileError::Storage(e.to_string()))?
    );

    Ok(())
}
