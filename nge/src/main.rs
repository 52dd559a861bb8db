use {
    clap::{ColorChoice, Parser},
    flexi_logger::Logger,
};

mod circular;
mod daily;
mod demo;
mod display;
mod input;

#[derive(Parser, Debug)]
#[clap(version, author, color(ColorChoice::Auto), infer_subcommands = true)]
#[command(
    name = "nge",
    about = "Find the next greater element of every position in a sequence."
)]
pub struct Opts {
    #[clap(subcommand)]
    pub subcmd: SubCommand,
}

#[derive(Parser, Debug)]
pub enum SubCommand {
    /// For every day, count the days until a warmer one
    Daily(input::Opts),
    /// For every element, find the next greater element, wrapping around at the end
    Circular(input::Opts),
    /// Print the results of every strategy on some example inputs
    Demo,
}

fn main() {
    let opts = Opts::parse();

    let _logger = Logger::try_with_env()
        .and_then(|logger| logger.start())
        .unwrap_or_else(|e| panic!("Logger initialization failed with {e}"));

    let result = match opts.subcmd {
        SubCommand::Daily(d) => daily::run(d),
        SubCommand::Circular(c) => circular::run(c),
        SubCommand::Demo => demo::run(),
    };

    if let Err(e) = result {
        println!("Error: {e}");
        for cause in e.chain().skip(1) {
            println!("\tcaused by: {cause}");
        }
        std::process::exit(1);
    }
}
