use std::fs;
use std::path::Path;

use clap::CommandFactory;

// cli.rs stands alone on clap + clap_complete, both of which are also
// build-dependencies, so the command tree can be included here without
// compiling the rest of the crate.
#[path = "src/cli.rs"]
mod cli;

fn main() {
    println!("cargo::rerun-if-changed=src/cli.rs");

    let out_dir = std::env::var_os("OUT_DIR").expect("OUT_DIR not set by Cargo");
    let man_dir = Path::new(&out_dir).join("man");
    fs::create_dir_all(&man_dir).expect("failed to create man output directory");

    write_man_pages(&cli::Cli::command(), &man_dir);
}

/// Write `wirecalc.1`, `wirecalc-transfer.1`, and so on down the command
/// tree, following the `name-subname` convention man expects.
fn write_man_pages(cmd: &clap::Command, dir: &Path) {
    let name = cmd.get_name().to_owned();

    let mut page = Vec::new();
    clap_mangen::Man::new(cmd.clone())
        .render(&mut page)
        .unwrap_or_else(|e| panic!("failed to render man page for `{name}`: {e}"));
    let path = dir.join(format!("{name}.1"));
    fs::write(&path, page)
        .unwrap_or_else(|e| panic!("failed to write {}: {e}", path.display()));

    for sub in cmd.get_subcommands() {
        let sub = sub.clone().name(format!("{name}-{}", sub.get_name()));
        write_man_pages(&sub, dir);
    }
}
