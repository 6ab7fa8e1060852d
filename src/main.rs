use {
  anyhow::{Context, bail},
  catalog::Discount,
  client::Client,
  command::Command,
  config::Config,
  crossterm::style::Stylize,
  event_binder::EventBinder,
  event_kind::EventKind,
  futures::stream::{self, StreamExt},
  highlight::HighlightResult,
  insights::InsightsBinder,
  product::Product,
  reqwest::header::{HeaderMap, HeaderValue},
  search_hit::SearchHit,
  search_response::SearchResponse,
  serde::{Deserialize, Serialize},
  serde_json::Number,
  settings::IndexSettings,
  std::{
    backtrace::BacktraceStatus,
    collections::BTreeMap,
    env,
    fmt::{self, Display, Formatter},
    fs,
    io::{self, IsTerminal},
    path::{Path, PathBuf},
    process,
    time::Duration,
  },
  task::{TaskResponse, TaskStatus},
};

mod catalog;
mod client;
mod command;
mod config;
mod event_binder;
mod event_kind;
mod highlight;
mod insights;
mod product;
mod result_hit;
mod search_hit;
mod search_response;
mod settings;
mod task;

const USAGE: &str = "\
Usage:
  plp index <data.json> [category percent]
      Clear the index, apply the product listing settings, optionally
      discount every product in a category, and upload the catalog.

  plp render <query>
      Search the index and print one result-hit fragment per hit.
";

type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;

async fn run() -> Result {
  let args = env::args().skip(1).collect::<Vec<_>>();

  match Command::parse(&args)? {
    Some(Command::Index { discount, path }) => {
      run_index(&path, discount).await
    }
    Some(Command::Render { query }) => run_render(&query).await,
    None => {
      eprintln!("{USAGE}");
      process::exit(2)
    }
  }
}

async fn run_index(path: &Path, discount: Option<Discount>) -> Result {
  let config = Config::from_env()?;

  let client = Client::new(&config)?;

  let mut products = catalog::load_products(path)?;

  eprintln!("loaded {} products from {}", products.len(), path.display());

  if let Some(discount) = &discount {
    discount.apply(&mut products);

    eprintln!(
      "reduced prices by {}% in {}",
      discount.percent, discount.category
    );
  }

  let task = client.clear_objects().await?;
  client.wait_task(task).await?;

  let task = client
    .set_settings(&IndexSettings::product_listing())
    .await?;
  client.wait_task(task).await?;

  eprintln!("index settings applied");

  let tasks = client.save_objects(&products).await?;

  for task in tasks {
    client.wait_task(task).await?;
  }

  eprintln!("indexed {} products", products.len());

  Ok(())
}

async fn run_render(query: &str) -> Result {
  let config = Config::from_env()?;

  let client = Client::new(&config)?;

  let response = client.search(query).await?;

  for hit in &response.hits {
    println!("{}", result_hit::render(hit, &InsightsBinder));
  }

  eprintln!(
    "rendered {} of {} hits (page {} of {})",
    response.hits.len(),
    response.nb_hits,
    response.page + 1,
    response.nb_pages.max(1)
  );

  Ok(())
}

#[tokio::main]
async fn main() {
  if let Err(error) = run().await {
    let use_color = io::stderr().is_terminal();

    if use_color {
      eprintln!("{} {error}", "error:".bold().red());
    } else {
      eprintln!("error: {error}");
    }

    for (i, error) in error.chain().skip(1).enumerate() {
      if i == 0 {
        eprintln!();

        if use_color {
          eprintln!("{}", "because:".bold().red());
        } else {
          eprintln!("because:");
        }
      }

      if use_color {
        eprintln!("{} {error}", "-".bold().red());
      } else {
        eprintln!("- {error}");
      }
    }

    let backtrace = error.backtrace();

    if backtrace.status() == BacktraceStatus::Captured {
      if use_color {
        eprintln!("{}", "backtrace:".bold().red());
      } else {
        eprintln!("backtrace:");
      }

      eprintln!("{backtrace}");
    }

    process::exit(1);
  }
}
