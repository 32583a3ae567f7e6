/**
 * Generates the dataset types from resources/countrydata.proto and checks
 * that the compiled-in dataset keeps its country keys unique.
 */

use std::{collections::BTreeMap, fs::File, io::{BufRead, BufReader}};

use thiserror::Error;

#[derive(Debug, Error)]
enum BuildError {
    #[error("IO error occurred: {0}")]
    IO(#[from] std::io::Error),

    #[error("Line {line_num} is too long (max is {max_len} bytes)")]
    LineTooLong { line_num: usize, max_len: usize },

    #[error("Duplicate {field} '{value}' at line {line_num}, first seen at line {first_line}")]
    DuplicateKey {
        field: &'static str,
        value: String,
        line_num: usize,
        first_line: usize,
    },
}

const DATASET_PATH: &str = "resources/country_data.textproto";
const KEY_FIELDS: [&str; 2] = ["alpha2", "alpha3"];

/// Reads `field: "VALUE"` lines and fails on the first value that repeats.
fn check_unique_keys(path: &str) -> Result<(), BuildError> {
    let mut seen: BTreeMap<(&'static str, String), usize> = BTreeMap::new();

    let input = File::open(path)?;
    const MAX_LINE_LENGTH: usize = 2 * 1024;

    let mut reader = BufReader::new(input);
    let mut line_buffer = String::with_capacity(MAX_LINE_LENGTH);
    let mut line_number = 0;

    loop {
        line_number += 1;
        line_buffer.clear();

        let bytes_read = reader.read_line(&mut line_buffer)?;
        if bytes_read == 0 {
            break;
        }

        if line_buffer.len() > MAX_LINE_LENGTH {
            return Err(BuildError::LineTooLong {
                line_num: line_number,
                max_len: MAX_LINE_LENGTH,
            });
        }

        let line = line_buffer.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((field, value)) = line.split_once(':') else {
            continue;
        };
        let Some(field) = KEY_FIELDS.iter().find(|key| **key == field.trim()) else {
            continue;
        };
        let value = value.trim().trim_matches('"').to_ascii_uppercase();

        if let Some(first_line) = seen.get(&(*field, value.clone())) {
            return Err(BuildError::DuplicateKey {
                field,
                value,
                line_num: line_number,
                first_line: *first_line,
            });
        }
        seen.insert((*field, value), line_number);
    }

    Ok(())
}

fn main() -> Result<(), BuildError> {
    println!("cargo:rerun-if-changed=resources/countrydata.proto");
    println!("cargo:rerun-if-changed={DATASET_PATH}");

    check_unique_keys(DATASET_PATH)?;

    protobuf_codegen::Codegen::new()
        .pure()
        .includes(["resources"])
        .input("resources/countrydata.proto")
        .cargo_out_dir("proto_gen")
        .run_from_script();
    Ok(())
}
