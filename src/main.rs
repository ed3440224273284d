use esquina::{AddressData, AddressParser, TreeCache};
use std::io::{self, BufRead, Write};
use structopt::StructOpt;

#[derive(StructOpt)]
#[structopt(about = "argentine street address component extractor")]
enum Command {
    /// read addresses from stdin, one per line, until an empty line
    Repl,
    /// extract the components of a single address
    Parse { address: String },
}

fn print_data(data: &AddressData) {
    println!(
        "{}",
        serde_json::to_string_pretty(data).expect("address data serializes")
    );
}

fn main() {
    match Command::from_args() {
        Command::Parse { address } => {
            let mut parser = AddressParser::new();
            print_data(&parser.parse(&address));
        }
        Command::Repl => {
            let mut parser = AddressParser::with_cache(Box::new(TreeCache::new()));
            let stdin = io::stdin();
            loop {
                print!("> ");
                io::stdout().flush().expect("flush stdout");
                let mut line = String::new();
                match stdin.lock().read_line(&mut line) {
                    Ok(0) | Err(_) => break,
                    Ok(_) => {
                        let address = line.trim();
                        if address.is_empty() {
                            break;
                        }
                        print_data(&parser.parse(address));
                    }
                }
            }
        }
    }
}
