// SPDX-License-Identifier: Apache-2.0
use convert_case::{Case, Casing};
use serde::Deserialize;
use std::{env, fmt::Write as _, fs, path::Path};

const TABLE: &str = "table.csv";
const OUTPUT: &str = "codec_table.rs";

#[derive(Deserialize)]
struct Row {
    name: String,
    tag: String,
    code: String,
    status: String,
    description: String,
}

struct Entry {
    variant: String,
    name: String,
    tag: String,
    code: u64,
    description: String,
}

fn main() {
    println!("cargo:rerun-if-changed={}", TABLE);

    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(TABLE)
        .expect("failed to open the multicodec table");

    let mut entries = Vec::new();
    for row in reader.deserialize() {
        let row: Row = row.expect("malformed multicodec table row");
        let code = u64::from_str_radix(row.code.trim_start_matches("0x"), 16)
            .expect("malformed multicodec code");
        entries.push(Entry {
            variant: row.name.to_case(Case::Pascal),
            description: format!("{} ({})", row.description, row.status),
            name: row.name,
            tag: row.tag,
            code,
        });
    }

    let mut out = String::new();

    // the enum
    out.push_str("/// The multicodec table entries compiled into this crate\n");
    out.push_str("#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]\n");
    out.push_str("#[non_exhaustive]\n");
    out.push_str("pub enum Codec {\n");
    for e in &entries {
        writeln!(out, "    /// {}", e.description).unwrap();
        writeln!(out, "    {},", e.variant).unwrap();
    }
    out.push_str("}\n\n");

    out.push_str("impl Codec {\n");

    // every codec in table order
    out.push_str("    /// Every codec in the table, in table order\n");
    out.push_str("    pub const ALL: &'static [Codec] = &[\n");
    for e in &entries {
        writeln!(out, "        Codec::{},", e.variant).unwrap();
    }
    out.push_str("    ];\n\n");

    // codec -> code
    out.push_str("    /// The numeric multicodec code\n");
    out.push_str("    pub const fn code(&self) -> u64 {\n        match self {\n");
    for e in &entries {
        writeln!(out, "            Codec::{} => {:#x},", e.variant, e.code).unwrap();
    }
    out.push_str("        }\n    }\n\n");

    // codec -> name
    out.push_str("    /// The canonical dash-form multicodec name\n");
    out.push_str("    pub const fn name(&self) -> &'static str {\n        match self {\n");
    for e in &entries {
        writeln!(out, "            Codec::{} => {:?},", e.variant, e.name).unwrap();
    }
    out.push_str("        }\n    }\n\n");

    // codec -> tag
    out.push_str("    /// The multicodec table tag (e.g. \"multihash\", \"ipld\")\n");
    out.push_str("    pub const fn tag(&self) -> &'static str {\n        match self {\n");
    for e in &entries {
        writeln!(out, "            Codec::{} => {:?},", e.variant, e.tag).unwrap();
    }
    out.push_str("        }\n    }\n\n");

    // codec -> description
    out.push_str("    /// The table description and status\n");
    out.push_str("    pub const fn description(&self) -> &'static str {\n        match self {\n");
    for e in &entries {
        writeln!(out, "            Codec::{} => {:?},", e.variant, e.description).unwrap();
    }
    out.push_str("        }\n    }\n\n");

    // code -> codec
    out.push_str("    pub(crate) const fn lookup_code(code: u64) -> Option<Codec> {\n        match code {\n");
    for e in &entries {
        writeln!(out, "            {:#x} => Some(Codec::{}),", e.code, e.variant).unwrap();
    }
    out.push_str("            _ => None,\n        }\n    }\n\n");

    // name -> codec
    out.push_str("    pub(crate) fn lookup_name(name: &str) -> Option<Codec> {\n        match name {\n");
    for e in &entries {
        writeln!(out, "            {:?} => Some(Codec::{}),", e.name, e.variant).unwrap();
    }
    out.push_str("            _ => None,\n        }\n    }\n");

    out.push_str("}\n");

    let out_dir = env::var("OUT_DIR").expect("OUT_DIR not set");
    fs::write(Path::new(&out_dir).join(OUTPUT), out).expect("failed to write the codec table");
}
