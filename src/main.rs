#[macro_use]
extern crate rocket;

mod resources;

use std::process::exit;

use futures::future::join_all;
use handlebars::{html_escape, Handlebars};
use rocket::http::Status;
use rocket::response::content::{RawCss, RawHtml};
use rocket::response::status::Custom;
use rocket::{Build, Rocket, State};
use serde_derive::Serialize;
use tracing::{error, info};

use wordnet_browser::config::{command, Config, SourceConfig};
use wordnet_browser::{logging, RemoteWordNet, SynsetDisplay, SynsetView, WordNet,
                      WordNetError, WordNetSource};

type PageResult = Result<RawHtml<String>, Custom<String>>;

#[derive(Debug, Serialize)]
struct Page {
    context : String,
    title : String,
    body : String,
    key : String,
    lemma_selected : bool
}

#[derive(Debug, Serialize)]
struct SynsetsData {
    context : String,
    key : String,
    synsets : Vec<SynsetDisplay>
}

struct WordNetBrowser {
    source : Box<dyn WordNetSource>,
    handlebars : Handlebars<'static>,
    context : String,
    page_size : usize
}

fn internal_error(msg : String) -> Custom<String> {
    error!("{}", msg);
    Custom(Status::InternalServerError, msg)
}

fn source_error(e : WordNetError) -> Custom<String> {
    match e {
        WordNetError::UnknownIndex(_) => Custom(Status::BadRequest, e.to_string()),
        e => {
            error!(error = %e, "lookup failed");
            Custom(Status::BadGateway, e.to_string())
        }
    }
}

impl WordNetBrowser {
    fn render<T : serde::Serialize>(&self, template : &str, data : &T) -> Result<String, Custom<String>> {
        self.handlebars.render(template, data)
            .map_err(|e| internal_error(e.to_string()))
    }

    fn page(&self, title : &str, body : String, index : &str, key : &str) -> PageResult {
        let page = self.render("layout", &Page {
            context : self.context.clone(),
            title : title.to_string(),
            body : body,
            key : key.to_string(),
            lemma_selected : index != "id"
        })?;
        Ok(RawHtml(page))
    }

    fn synsets_page(&self, title : &str, index : &str, key : &str,
                    views : &[SynsetView]) -> PageResult {
        let body = self.render("synsets", &SynsetsData {
            context : self.context.clone(),
            key : key.to_string(),
            synsets : views.iter().filter_map(|v| v.display(html_escape)).collect()
        })?;
        self.page(title, body, index, key)
    }
}

#[get("/assets/wordnet.css")]
fn stylesheet() -> RawCss<&'static str> {
    RawCss(resources::STYLESHEET)
}

#[get("/")]
fn index(state : &State<WordNetBrowser>) -> PageResult {
    state.page("WordNet", String::new(), "lemma", "")
}

#[get("/search?<index>&<key>")]
async fn search(index : Option<&str>, key : &str, state : &State<WordNetBrowser>) -> PageResult {
    let index = index.unwrap_or("lemma");
    let synsets = state.source.lookup(index, key).await.map_err(source_error)?;
    let mut views : Vec<SynsetView> = synsets.iter()
        .map(|_| SynsetView::new(state.page_size))
        .collect();
    let source : &dyn WordNetSource = &*state.source;
    join_all(views.iter_mut().zip(synsets)
             .map(|(view, synset)| view.load(source, synset))).await;
    state.synsets_page(key, index, key, &views)
}

#[get("/synset/<id>?<more>")]
async fn synset(id : &str, more : Option<usize>, state : &State<WordNetBrowser>) -> PageResult {
    let synset = state.source.lookup("id", id).await
        .map_err(source_error)?
        .into_iter().next()
        .ok_or_else(|| Custom(Status::NotFound, format!("No synset {}", id)))?;
    let mut view = SynsetView::new(state.page_size);
    view.load(&*state.source, synset).await;
    for _ in 0..more.unwrap_or(0) {
        if view.is_exhausted() {
            break;
        }
        view.extend();
    }
    state.synsets_page(id, "id", id, std::slice::from_ref(&view))
}

fn prepare_browser(config : &Config) -> Result<WordNetBrowser, String> {
    let source : Box<dyn WordNetSource> = match config.source {
        SourceConfig::Local(ref path) => {
            info!("Loading WordNet from {}", path);
            Box::new(WordNet::load(path)
                .map_err(|e| format!("Failed to load WordNet: {}", e))?)
        },
        SourceConfig::Remote(ref url) => {
            info!("Using WordNet server at {}", url);
            Box::new(RemoteWordNet::new(url).map_err(|e| e.to_string())?)
        }
    };
    let mut hbars = Handlebars::new();
    hbars.register_template_string("layout", resources::LAYOUT)
        .map_err(|e| format!("Failed to load layout: {}", e))?;
    hbars.register_template_string("synsets", resources::SYNSETS)
        .map_err(|e| format!("Failed to load synset template: {}", e))?;
    Ok(WordNetBrowser {
        source : source,
        handlebars : hbars,
        context : config.context.clone(),
        page_size : config.page_size
    })
}

fn build(browser : WordNetBrowser, port : u16) -> Rocket<Build> {
    rocket::custom(rocket::Config::figment().merge(("port", port)))
        .manage(browser)
        .mount("/", routes![index, stylesheet, search, synset])
}

#[rocket::main]
async fn main() {
    let matches = command().get_matches();
    let config = match Config::new(&matches) {
        Ok(config) => config,
        Err(msg) => {
            eprintln!("Failed: {}", msg);
            exit(-1)
        }
    };
    if let Err(e) = logging::init(config.log.as_deref()) {
        eprintln!("Could not open log: {}", e);
        exit(-1)
    }
    let browser = match prepare_browser(&config) {
        Ok(browser) => browser,
        Err(msg) => {
            error!("{}", msg);
            exit(-1)
        }
    };
    if let Err(e) = build(browser, config.port).launch().await {
        error!("Server stopped: {}", e);
        exit(-1)
    }
}
