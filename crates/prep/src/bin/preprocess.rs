use clap::Parser;
use prep::{BatchConfig, DEFAULT_DATA_FOLDER, NameRule, OUTPUT_FILE_NAME, preprocess_image_folder};
use prep_base::{init_file_logger, init_stdout_logger, log_fatal};
use std::path::PathBuf;

/// Letterbox every *.jpg in a folder into 1x3x416x416 tensors and save them as one file.
#[derive(Parser, Debug)]
#[command(name = "preprocess", version, about, long_about = None)]
struct Args {
    /// Folder to scan (not recursive); images.pickle is written into it.
    #[arg(value_name = "DIR", default_value = DEFAULT_DATA_FOLDER)]
    data_folder: PathBuf,

    /// Name images by removing a literal ".jpg" instead of trimming '.', 'j', 'p', 'g'.
    #[arg(long)]
    strip_suffix: bool,

    /// Write logs to dated files in this folder instead of stdout.
    #[arg(long, value_name = "DIR")]
    log_dir: Option<PathBuf>,

    /// Log every image as it is processed.
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    match &args.log_dir {
        Some(dir) => {
            if let Err(e) = init_file_logger(dir, args.verbose) {
                eprintln!("cannot log to {}: {e}", dir.display());
                std::process::exit(1);
            }
        }
        None => init_stdout_logger(args.verbose),
    }

    let config = BatchConfig {
        names: if args.strip_suffix {
            NameRule::StripSuffix
        } else {
            NameRule::TrimChars
        },
        ..BatchConfig::default()
    };

    match preprocess_image_folder(&args.data_folder, &config) {
        Ok(batch) => println!(
            "Preprocessed {} images into {}",
            batch.len(),
            args.data_folder.join(OUTPUT_FILE_NAME).display()
        ),
        Err(e) => log_fatal!("preprocessing {} failed: {e}", args.data_folder.display()),
    }
}
