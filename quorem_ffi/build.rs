use std::{env, path::PathBuf};

fn main() {
    let crate_dir = env::var("CARGO_MANIFEST_DIR").unwrap();
    let header = PathBuf::from(&crate_dir).join("include").join("quorem.h");

    let mut conf = cbindgen::Config::default();
    conf.no_includes = true;

    cbindgen::Builder::new()
        .with_crate(crate_dir)
        .with_config(conf)
        .generate()
        .expect("Unable to generate bindings")
        .write_to_file(header);
}
