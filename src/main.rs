use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "docxside-props", about = "Print resolved paragraph properties of a DOCX file")]
struct Args {
    /// Input DOCX file
    input: PathBuf,
    /// Only print the paragraph at this zero-based index
    #[arg(short, long)]
    paragraph: Option<usize>,
    /// Also print paragraphs that carry no properties
    #[arg(short, long)]
    all: bool,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    if !args.input.is_file() {
        eprintln!("Error: not a file: {}", args.input.display());
        std::process::exit(1);
    }

    let paragraphs = match docxside_props::docx::parse(&args.input) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    if let Some(index) = args.paragraph {
        let Some(props) = paragraphs.get(index) else {
            eprintln!("Error: paragraph {index} out of range ({} paragraphs)", paragraphs.len());
            std::process::exit(1);
        };
        println!("{props:#?}");
        return;
    }

    for (i, props) in paragraphs.iter().enumerate() {
        if args.all || *props != docxside_props::ParagraphProperties::default() {
            println!("[{i}] {props:#?}");
        }
    }
}
