use cmdreader::derive::Enumerated;
use cmdreader::{squash, Collection, Optional, Parameter, Scalar, Schema, Switch};

#[derive(Debug, Enumerated)]
enum Format {
    Zip,
    Tar,
}

#[derive(Debug, Default)]
struct Arguments {
    verbose: bool,
    level: Option<i32>,
    format: Option<Format>,
    store: bool,
    archive: String,
    files: Vec<String>,
}

fn main() {
    let reader = Schema::new()
        .program("archiver")
        .add(
            Parameter::new(Switch::new(|a: &mut Arguments| &mut a.verbose), "verbose")
                .shorthand('v')
                .description("Print each file as it is added."),
        )
        .add(
            Parameter::new(Optional::new(|a: &mut Arguments| &mut a.level), "level")
                .shorthand('l')
                .description("The compression level."),
        )
        .add(
            Parameter::new(Optional::new(|a: &mut Arguments| &mut a.format), "format")
                .shorthand('f')
                .excludes_group(["format"]),
        )
        .add(
            Parameter::new(Switch::new(|a: &mut Arguments| &mut a.store), "store")
                .excludes_group(["format"])
                .description("Store the files without compression."),
        )
        .add(
            Parameter::new(Scalar::new(|a: &mut Arguments| &mut a.archive), "archive")
                .mandatory()
                .sequential(1)
                .description("The archive to write."),
        )
        .add(
            Parameter::new(Collection::new(|a: &mut Arguments| &mut a.files), "files")
                .sequential(2)
                .description("The files to add."),
        )
        .build();
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
