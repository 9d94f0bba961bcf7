use anyhow::Context;
use clap::Parser;
use log::debug;
use std::path::PathBuf;
use std::process::ExitCode;

use pic2oled::imgproc::{BinarizeMode, PackMode};
use pic2oled::{ConvertOptions, Converter};

// what `exit(-1)` amounts to on unix
const FAILURE_EXIT_CODE: u8 = 255;

/// Convert a 200x200 picture into a C array header for OLED / e-paper firmware
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Picture to convert
    image_file: PathBuf,

    /// Directory receiving <name>.h
    output_dir: PathBuf,

    #[arg(long, value_enum, default_value_t = BinarizeMode::Raw)]
    binarize: BinarizeMode,

    #[arg(long, value_enum, default_value_t = PackMode::Copy)]
    pack: PackMode,
}

fn run(args: Args) -> anyhow::Result<()> {
    let converter = Converter::new(ConvertOptions {
        binarize: args.binarize,
        pack: args.pack,
        ..ConvertOptions::default()
    });
    debug!("Options: {:?}", converter.options());

    converter
        .convert(&args.image_file, &args.output_dir)
        .with_context(|| format!("failed to convert {}", args.image_file.display()))?;
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_default_env()
        .format_timestamp_micros()
        .init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            // usage errors go to stderr, --help / --version to stdout
            let _ = err.print();
            return if err.use_stderr() {
                ExitCode::from(FAILURE_EXIT_CODE)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    match run(args) {
        Ok(()) => {
            println!(">>>>DONE!<<<<<");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::from(FAILURE_EXIT_CODE)
        }
    }
}
