use {super::*, anyhow::Context};

#[derive(Debug)]
pub(crate) struct Config {
  pub(crate) api_key: String,
  pub(crate) app_id: String,
  pub(crate) index_name: String,
}

impl Config {
  pub(crate) fn from_env() -> Result<Self> {
    Ok(Self {
      api_key: require("ALGOLIA_API_KEY")?,
      app_id: require("ALGOLIA_APP_ID")?,
      index_name: require("ALGOLIA_INDEX")?,
    })
  }
}

fn require(name: &str) -> Result<String> {
  env::var(name).with_context(|| format!("{name} is not set"))
}
