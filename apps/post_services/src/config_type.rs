use serde::Deserialize;

#[derive(Deserialize, Debug, Default, PartialEq, Eq)]
pub struct Apps{
    pub host: String,
    pub port: u16,
    #[serde(default)]
    pub workers: usize
}

#[derive(Deserialize, Debug, Default, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum StoreKind{
    #[default]
    Mongo,
    Memory
}

#[derive(Deserialize, Debug, Default, PartialEq, Eq)]
pub struct Database{
    #[serde(default)]
    pub kind: StoreKind,
    pub url: String,
    pub name: String,
    pub collection: String,
    pub min_pool_connection: u32,
    pub max_pool_connection: u32
}

#[derive(Deserialize, Debug, Default, PartialEq, Eq)]
pub struct Logger{
    pub log: String
}

#[derive(Deserialize, Debug, Default, PartialEq, Eq)]
pub struct PostAppConfig{
    pub apps: Apps,
    pub database: Database,
    pub logger: Logger
}
