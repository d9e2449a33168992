//! Pixelveil CLI - interactive terminal front-end
//!
//! Thin glue around `pixelveil-core`: prompt for the four inputs (image
//! path, integer key, operation, mode), run the transform, write the
//! fixed-name PNG into the working directory. Any error prints a single
//! message and exits non-zero; no partial output file is left behind.

use std::io::{self, BufRead, Write};
use std::path::Path;
use std::process;

use thiserror::Error;

use pixelveil_core::{decode, encode, CipherJob, JobError, Mode, TransformKind};

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Job(#[from] JobError),
    #[error(transparent)]
    Decode(#[from] decode::DecodeError),
    #[error(transparent)]
    Encode(#[from] encode::EncodeError),
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

fn main() {
    let stdin = io::stdin();
    if let Err(err) = run(&mut stdin.lock()) {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn run(input: &mut impl BufRead) -> Result<(), CliError> {
    let path = prompt(input, "Enter the path of the image file: ")?;
    let key = prompt(input, "Enter the encryption key (integer): ")?;
    let operation = prompt(input, "Enter the operation ('add', 'subtract', 'xor', 'swap'): ")?;
    let mode = prompt(input, "Enter mode ('encrypt' or 'decrypt'): ")?;

    let job = CipherJob::from_raw(&path, &key, &operation, &mode)?;

    let grid = decode::load_image(&job.path)?;
    println!("{}", progress_message(&job));
    let result = pixelveil_core::apply_transform(&grid, job.key, job.kind, job.mode);

    let output = Path::new(job.mode.output_filename());
    encode::save_png(&result, output)?;
    println!("Image saved as '{}'", output.display());

    match job.mode {
        Mode::Encrypt => println!("Encryption complete."),
        Mode::Decrypt => println!("Decryption complete."),
    }
    Ok(())
}

/// Print a label, flush, and read one trimmed line.
fn prompt(input: &mut impl BufRead, label: &str) -> io::Result<String> {
    print!("{label}");
    io::stdout().flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Describe the formula actually being applied, in the chosen direction.
fn progress_message(job: &CipherJob) -> String {
    let verb = match job.mode {
        Mode::Encrypt => "Encrypting",
        Mode::Decrypt => "Decrypting",
    };
    let how = match (job.kind, job.mode) {
        (TransformKind::Add, Mode::Encrypt) | (TransformKind::Subtract, Mode::Decrypt) => {
            "with addition"
        }
        (TransformKind::Add, Mode::Decrypt) | (TransformKind::Subtract, Mode::Encrypt) => {
            "with subtraction"
        }
        (TransformKind::Xor, _) => "with XOR",
        (TransformKind::Swap, _) => "by swapping pixels",
    };
    format!("{verb} {how}...")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pixelveil_core::{encode_png, PixelGrid};
    use std::io::Cursor;

    fn job(kind: TransformKind, mode: Mode) -> CipherJob {
        CipherJob {
            path: "x.png".into(),
            key: 1,
            kind,
            mode,
        }
    }

    #[test]
    fn test_progress_message_names_applied_formula() {
        assert_eq!(
            progress_message(&job(TransformKind::Add, Mode::Encrypt)),
            "Encrypting with addition..."
        );
        // Decrypting Add runs the inverse formula
        assert_eq!(
            progress_message(&job(TransformKind::Add, Mode::Decrypt)),
            "Decrypting with subtraction..."
        );
        assert_eq!(
            progress_message(&job(TransformKind::Swap, Mode::Decrypt)),
            "Decrypting by swapping pixels..."
        );
    }

    #[test]
    fn test_prompt_trims_line() {
        let mut input = Cursor::new(b"  hello world \n".to_vec());
        let answer = prompt(&mut input, "").unwrap();
        assert_eq!(answer, "hello world");
    }

    #[test]
    fn test_run_rejects_bad_operation_before_decode() {
        // The operation is invalid AND the file is missing; the job error
        // must win because validation happens before any pixel I/O.
        let mut input = Cursor::new(b"missing.png\n5\nrotate\nencrypt\n".to_vec());
        let err = run(&mut input).unwrap_err();
        assert!(matches!(err, CliError::Job(JobError::UnsupportedOperation(_))));
    }

    #[test]
    fn test_run_reports_missing_file() {
        let mut input = Cursor::new(b"definitely_missing.png\n5\nadd\nencrypt\n".to_vec());
        let err = run(&mut input).unwrap_err();
        assert!(matches!(
            err,
            CliError::Decode(decode::DecodeError::FileNotFound(_))
        ));
    }

    #[test]
    fn test_run_end_to_end_add() {
        let dir = std::env::temp_dir().join("pixelveil_cli_test");
        std::fs::create_dir_all(&dir).unwrap();
        std::env::set_current_dir(&dir).unwrap();

        // 2x2 RGB zeros on disk
        let grid = PixelGrid::new(2, 2, 3, vec![0u8; 12]);
        std::fs::write(dir.join("input.png"), encode_png(&grid).unwrap()).unwrap();

        let mut input = Cursor::new(b"input.png\n5\nadd\nencrypt\n".to_vec());
        run(&mut input).unwrap();

        let sealed = decode::load_image(&dir.join("encrypted_image.png")).unwrap();
        assert_eq!(sealed.samples, vec![5u8; 12]);
    }
}
