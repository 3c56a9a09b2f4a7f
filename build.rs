// CLASSIFICATION: COMMUNITY
// Filename: build.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-19

fn main() {
    use std::{env, path::PathBuf, process::Command};

    println!("cargo:rerun-if-env-changed=TAPE_ENTRY_OBJECT");
    println!("cargo:rerun-if-env-changed=TAPE_ENTRY_ASM");

    if env::var("CARGO_FEATURE_LINKED_ENTRY").is_err() {
        return;
    }

    if let Ok(obj) = env::var("TAPE_ENTRY_OBJECT") {
        println!("cargo:rerun-if-changed={obj}");
        println!("cargo:rustc-link-arg-bins={obj}");
        return;
    }

    let Ok(asm) = env::var("TAPE_ENTRY_ASM") else {
        println!("cargo:warning=linked-entry enabled but neither TAPE_ENTRY_OBJECT nor TAPE_ENTRY_ASM is set; `test` must come from the linker search path");
        return;
    };
    println!("cargo:rerun-if-changed={asm}");

    if which::which("nasm").is_err() {
        panic!("nasm missing; cannot assemble {asm}");
    }

    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR set by cargo"));
    let obj = out_dir.join("entry.o");
    let format = if cfg!(target_os = "macos") { "macho64" } else { "elf64" };
    let status = Command::new("nasm")
        .args(["-f", format, &asm, "-o"])
        .arg(&obj)
        .status();
    match status {
        Ok(s) if s.success() => println!("cargo:rustc-link-arg-bins={}", obj.display()),
        _ => panic!("nasm failed to assemble {asm}"),
    }
}
