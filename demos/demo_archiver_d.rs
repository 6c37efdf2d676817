use cmdreader::derive::*;
use cmdreader::{squash, CmdReader};

#[derive(Debug, Enumerated)]
enum Format {
    Zip,
    Tar,
}

#[derive(Debug, Default, Descriptor)]
#[cmd(program = "archiver")]
struct Arguments {
    #[cmd(shorthand = 'v', description = "Print each file as it is added.")]
    verbose: bool,
    #[cmd(shorthand = 'l', description = "The compression level.")]
    level: Option<i32>,
    #[cmd(shorthand = 'f', excludes_group = "format")]
    format: Option<Format>,
    #[cmd(excludes_group = "format", description = "Store the files without compression.")]
    store: bool,
    #[cmd(mandatory, sequential = 1, description = "The archive to write.")]
    archive: String,
    #[cmd(sequential = 2, description = "The files to add.")]
    files: Vec<String>,
}

fn main() {
    let reader = match CmdReader::<Arguments>::of() {
        Ok(reader) => reader,
        Err(error) => {
            eprintln!("{error}");
            std::process::exit(1);
        }
    };
    let arguments = reader.parse();

    if arguments.verbose {
        println!("{arguments:?}");
    }

    println!(
        "Writing '{}' ({:?}, {}, level {}): {}",
        arguments.archive,
        arguments.format,
        if arguments.store { "stored" } else { "compressed" },
        arguments.level.unwrap_or(6),
        squash(&arguments.files)
    );
}
