mod error;
mod invert;

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(name = "invimg", about = "Invert the colors of an image", version)]
struct Cli {
    /// Path to the input image (any format the decoder recognizes)
    #[arg(default_value = "logo.png")]
    input: PathBuf,

    /// Path for the inverted image; format is picked from the extension
    #[arg(short, long, default_value = "logo_inverted.png")]
    output: PathBuf,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = invert::invert_file(&cli.input, &cli.output) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    println!("Saved inverted image as: {}", cli.output.display());
}
