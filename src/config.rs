use clap::{value_parser, Arg, ArgMatches, Command};

use crate::error::WordNetError;
use crate::pager::DEFAULT_PAGE_SIZE;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SourceConfig {
    Local(String),
    Remote(String)
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub port : u16,
    pub source : SourceConfig,
    pub context : String,
    pub page_size : usize,
    pub log : Option<String>
}

pub fn command() -> Command {
    Command::new("WordNet Browser")
        .version("0.1")
        .author("John P. McCrae <john@mccr.ae>")
        .about("Browse a WordNet: synsets, their relations and verb frames")
        .arg(Arg::new("port")
             .short('p')
             .long("port")
             .value_name("PORT")
             .help("The port to run the server on")
             .value_parser(value_parser!(u16))
             .default_value("8000"))
        .arg(Arg::new("wordnet")
             .long("wordnet")
             .value_name("wordnet.json")
             .help("The WordNet JSON dump to browse, may be bzip2 compressed. Default is wordnet.json")
             .conflicts_with("remote"))
        .arg(Arg::new("remote")
             .long("remote")
             .value_name("URL")
             .help("Fetch synsets and relations from a WordNet JSON server instead, e.g., http://localhost:8000"))
        .arg(Arg::new("context")
             .short('c')
             .long("context")
             .help("The full path of the server, e.g., http://example.com/wordnet"))
        .arg(Arg::new("page-size")
             .long("page-size")
             .value_name("N")
             .help("How many related synsets to show at a time")
             .value_parser(value_parser!(usize)))
        .arg(Arg::new("log")
             .long("log")
             .value_name("log.txt")
             .help("Where to write the log file to, instead of standard error"))
}

impl Config {
    pub fn new(matches : &ArgMatches) -> Result<Config, WordNetError> {
        let page_size = matches.get_one::<usize>("page-size")
            .copied()
            .unwrap_or(DEFAULT_PAGE_SIZE);
        if page_size == 0 {
            return Err(WordNetError::Config("page size must be at least 1".to_string()));
        }
        let source = match matches.get_one::<String>("remote") {
            Some(url) => SourceConfig::Remote(url.clone()),
            None => SourceConfig::Local(matches.get_one::<String>("wordnet")
                .cloned()
                .unwrap_or_else(|| "wordnet.json".to_string()))
        };
        Ok(Config {
            port : matches.get_one::<u16>("port").copied().unwrap_or(8000),
            source : source,
            context : matches.get_one::<String>("context").cloned().unwrap_or_default(),
            page_size : page_size,
            log : matches.get_one::<String>("log").cloned()
        })
    }
}
