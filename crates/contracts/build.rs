//! Build script for generating the department table from departments.json
//!
//! Reads the bundled data file, checks its integrity and writes
//! `departments_gen.rs` into OUT_DIR as a static slice of `DepartmentRecord`.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

const DATA_FILE: &str = "src/domain/a001_department/departments.json";

fn main() {
    println!("cargo:rerun-if-changed={}", DATA_FILE);

    let out_dir = match std::env::var("OUT_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(e) => panic!("OUT_DIR is not set: {}", e),
    };
    let output_rs = out_dir.join("departments_gen.rs");

    if let Err(e) = generate_table(Path::new(DATA_FILE), &output_rs) {
        panic!("Failed to generate department table: {:#}", e);
    }
}

// ============================================================================
// JSON Schema Types (owned Strings for serde deserialization)
// ============================================================================

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct DepartmentJson {
    code: String,
    name: String,
    #[serde(rename = "wikiUrl")]
    wiki_url: String,
}

// ============================================================================
// Validation
// ============================================================================

fn is_well_formed_code(code: &str) -> bool {
    let bytes = code.as_bytes();
    match bytes {
        [a, b] => a.is_ascii_digit() && (b.is_ascii_digit() || *b == b'A' || *b == b'B'),
        [a, b, c] => a.is_ascii_digit() && b.is_ascii_digit() && c.is_ascii_digit(),
        _ => false,
    }
}

fn validate(departments: &[DepartmentJson]) -> anyhow::Result<()> {
    if departments.is_empty() {
        bail!("{} contains no departments", DATA_FILE);
    }

    let mut seen = HashSet::new();
    for department in departments {
        if !is_well_formed_code(&department.code) {
            bail!("malformed department code {:?}", department.code);
        }
        if !seen.insert(department.code.as_str()) {
            bail!("duplicate department code {}", department.code);
        }
        if department.name.trim().is_empty() {
            bail!("department {} has an empty name", department.code);
        }
        if !department.wiki_url.starts_with("https://") {
            bail!(
                "department {} has a non-https reference URL: {}",
                department.code,
                department.wiki_url
            );
        }
    }
    Ok(())
}

// ============================================================================
// Code Generation
// ============================================================================

fn generate_table(json_path: &Path, output_path: &Path) -> anyhow::Result<()> {
    let json_content = fs::read_to_string(json_path)
        .with_context(|| format!("reading {}", json_path.display()))?;
    let departments: Vec<DepartmentJson> = serde_json::from_str(&json_content)
        .with_context(|| format!("parsing {}", json_path.display()))?;

    validate(&departments)?;

    fs::write(output_path, generate_rust_code(&departments))
        .with_context(|| format!("writing {}", output_path.display()))?;
    Ok(())
}

fn generate_rust_code(departments: &[DepartmentJson]) -> String {
    let mut code = String::from(
        "// ============================================================================\n\
         // AUTO-GENERATED FROM departments.json - DO NOT EDIT MANUALLY\n\
         // ============================================================================\n\n",
    );

    code.push_str(&format!(
        "/// Bundled departments, in data file order ({} entries)\n\
         pub static DEPARTMENTS: &[DepartmentRecord] = &[\n",
        departments.len()
    ));
    for department in departments {
        code.push_str(&format!(
            "    DepartmentRecord::new(\"{}\", \"{}\", \"{}\"),\n",
            escape_string(&department.code),
            escape_string(&department.name),
            escape_string(&department.wiki_url),
        ));
    }
    code.push_str("];\n");
    code
}

fn escape_string(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}
