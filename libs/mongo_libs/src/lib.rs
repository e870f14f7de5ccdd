use mongodb::{error::Error, options::ClientOptions, Client, Database};

pub type MongoDb = Database;

/// Connects to `url` and selects its default database, falling back to `name`.
pub async fn mongo_connect(
    url: &str,
    name: &str,
    min_pool_connection: u32,
    max_pool_connection: u32,
) -> Result<MongoDb, Error> {
    let mut options = ClientOptions::parse(url).await?;
    options.app_name = Some(String::from("post_services"));
    options.min_pool_size = Some(min_pool_connection);
    options.max_pool_size = Some(max_pool_connection);

    let client = Client::with_options(options)?;

    let database = match client.default_database() {
        Some(database) => database,
        None => client.database(name),
    };

    Ok(database)
}
