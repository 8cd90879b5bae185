use std::io::{self, Error};

use clap::{ArgAction, Parser};
use tracing::debug;
use tracing_subscriber::filter::{EnvFilter, LevelFilter};

use dlist::LinkedList;

#[derive(Debug, Parser)]
#[command(about = "Doubly linked list demonstration driver")]
struct Dlutl {
    #[arg(
        long,
        short = 'v',
        action = ArgAction::Count,
        global = true,
        help = "Make tracing output more verbose",
    )]
    verbose: u8,
    #[arg(
        long,
        action = ArgAction::Count,
        global = true,
        help = "Make tracing output less verbose",
    )]
    silent: u8,

    #[arg(long, help = "Search for a payload and report whether it is present")]
    find: Option<String>,
    #[arg(long, help = "Remove the first payload equal to the given value")]
    remove: Vec<String>,

    #[arg(
        default_values_t = ["c".to_string(), "b".to_string(), "a".to_string()],
        help = "Payloads inserted at the head, in argument order",
    )]
    payloads: Vec<String>,
}

impl Dlutl {
    fn init_tracing(&self) {
        let level = match i16::from(self.verbose) - i16::from(self.silent) {
            i16::MIN..=-3 => LevelFilter::OFF,
            -2 => LevelFilter::ERROR,
            -1 => LevelFilter::WARN,
            0 => LevelFilter::INFO,
            1 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        };
        tracing_subscriber::fmt()
            .compact()
            .with_writer(io::stderr)
            .with_env_filter(
                EnvFilter::builder()
                    .with_default_directive(level.into())
                    .from_env_lossy(),
            )
            .init();
    }

    fn execute(&self) -> Result<(), Error> {
        let mut list = LinkedList::new();
        for payload in &self.payloads {
            debug!(%payload, "insert_front");
            list.insert_front(payload.clone());
        }

        if let Some(target) = &self.find {
            match list.find(target) {
                Some(payload) => println!("found: {payload}"),
                None => println!("not found: {target}"),
            }
        }

        for target in &self.remove {
            let removed = list.remove(target);
            debug!(%target, removed, "remove");
        }

        println!("{list}");
        Ok(())
    }
}

fn main() -> Result<(), Error> {
    let dlutl = Dlutl::parse();
    dlutl.init_tracing();
    dlutl.execute()
}
