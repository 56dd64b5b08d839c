use receipt_engine::config::TaxConfig;
use receipt_engine::engine::Engine;
use receipt_engine::parser::Parser;
use std::io::Read;
use std::process;

fn read_input(path: Option<String>) -> std::io::Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path),
        None => {
            let mut input = String::new();
            std::io::stdin().read_to_string(&mut input)?;
            Ok(input)
        }
    }
}

fn main() {
    pretty_env_logger::init();

    let mut args = std::env::args();
    let _prog_name = args.next();
    let input = read_input(args.next()).unwrap_or_else(|err| {
        println!("could not read input: {}", err);
        process::exit(1);
    });

    let mut engine = Engine::new(TaxConfig::default());
    // An empty line ends the session; the first malformed line aborts it.
    for line in input.lines().take_while(|line| !line.trim().is_empty()) {
        let product = Parser::parse(line, engine.config()).unwrap_or_else(|err| {
            println!("Error: {}", err);
            process::exit(1);
        });
        engine.add_product(product);
    }
    print!("{}", engine.render());
}
