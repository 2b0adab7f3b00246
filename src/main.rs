use log::{error, info};
use std::io;
use std::path::PathBuf;
use std::process;
use stockroom::{loader, Config};
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(name = "stockroom", about = "Runs a media store's commands against its stock.")]
struct Opt {
    /// Customer file, one `<id>, <name>` per line
    #[structopt(long, default_value = "customers.txt", parse(from_os_str))]
    customers: PathBuf,

    /// Inventory file, one stocked item per line
    #[structopt(long, default_value = "inventory.txt", parse(from_os_str))]
    inventory: PathBuf,

    /// Command file, one command per line
    #[structopt(long, default_value = "commands.txt", parse(from_os_str))]
    commands: PathBuf,
}

impl From<Opt> for Config {
    fn from(opt: Opt) -> Self {
        Config {
            customers: opt.customers,
            inventory: opt.inventory,
            commands: opt.commands,
        }
    }
}

fn main() {
    env_logger::init();
    let opt = Opt::from_args();
    info!("configuration: {:?}", opt);
    let config = Config::from(opt);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match loader::run(&config, &mut out) {
        Ok((_, summary)) => info!(
            "done: {} executed, {} rejected",
            summary.executed, summary.rejected
        ),
        Err(err) => {
            error!("{}", err);
            process::exit(1);
        }
    }
}
