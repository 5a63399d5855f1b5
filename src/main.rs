use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    codefolio::cli::main()
}
