use {super::*, anyhow::Context};

#[derive(Clone)]
pub(crate) struct Client {
  client: reqwest::Client,
  index_url: String,
}

impl Client {
  const BATCH_SIZE: usize = 1000;

  const HITS_PER_PAGE: &str = "20";

  const TASK_POLL_INTERVAL: Duration = Duration::from_millis(200);

  fn batches(products: &[Product]) -> Result<Vec<serde_json::Value>> {
    products
      .chunks(Self::BATCH_SIZE)
      .map(|chunk| {
        let requests = chunk
          .iter()
          .map(|product| BatchRequest {
            action: "addObject",
            body: product,
          })
          .collect();

        Ok(serde_json::to_value(BatchWrite { requests })?)
      })
      .collect()
  }

  pub(crate) async fn clear_objects(&self) -> Result<u64> {
    let response = self
      .client
      .post(format!("{}/clear", self.index_url))
      .send()
      .await?
      .error_for_status()?
      .json::<TaskResponse>()
      .await?;

    Ok(response.task_id)
  }

  pub(crate) fn new(config: &Config) -> Result<Self> {
    let mut headers = HeaderMap::new();

    headers.insert(
      "X-Algolia-Application-Id",
      HeaderValue::from_str(&config.app_id)
        .context("application id is not a valid header value")?,
    );

    let mut api_key = HeaderValue::from_str(&config.api_key)
      .context("api key is not a valid header value")?;

    api_key.set_sensitive(true);

    headers.insert("X-Algolia-API-Key", api_key);

    let client = reqwest::Client::builder()
      .default_headers(headers)
      .build()?;

    Ok(Self {
      client,
      index_url: format!(
        "https://{}.algolia.net/1/indexes/{}",
        config.app_id, config.index_name
      ),
    })
  }

  pub(crate) async fn save_objects(
    &self,
    products: &[Product],
  ) -> Result<Vec<u64>> {
    let batches = Self::batches(products)?;

    let responses = stream::iter(batches.into_iter().map(|batch| {
      let client = self.clone();

      async move {
        client
          .client
          .post(format!("{}/batch", client.index_url))
          .json(&batch)
          .send()
          .await?
          .error_for_status()?
          .json::<TaskResponse>()
          .await
      }
    }))
    .buffered(4)
    .collect::<Vec<_>>()
    .await;

    let mut tasks = Vec::with_capacity(responses.len());

    for response in responses {
      tasks.push(response?.task_id);
    }

    Ok(tasks)
  }

  pub(crate) async fn search(&self, query: &str) -> Result<SearchResponse> {
    Ok(
      self
        .client
        .get(&self.index_url)
        .query(&[("query", query), ("hitsPerPage", Self::HITS_PER_PAGE)])
        .send()
        .await?
        .error_for_status()?
        .json::<SearchResponse>()
        .await?,
    )
  }

  pub(crate) async fn set_settings(
    &self,
    settings: &IndexSettings,
  ) -> Result<u64> {
    let response = self
      .client
      .put(format!("{}/settings", self.index_url))
      .json(settings)
      .send()
      .await?
      .error_for_status()?
      .json::<TaskResponse>()
      .await?;

    Ok(response.task_id)
  }

  pub(crate) async fn wait_task(&self, task_id: u64) -> Result {
    loop {
      let task = self
        .client
        .get(format!("{}/task/{task_id}", self.index_url))
        .send()
        .await?
        .error_for_status()?
        .json::<TaskStatus>()
        .await?;

      if task.status == "published" {
        return Ok(());
      }

      tokio::time::sleep(Self::TASK_POLL_INTERVAL).await;
    }
  }
}

#[derive(Serialize)]
struct BatchRequest<'a> {
  action: &'static str,
  body: &'a Product,
}

#[derive(Serialize)]
struct BatchWrite<'a> {
  requests: Vec<BatchRequest<'a>>,
}
