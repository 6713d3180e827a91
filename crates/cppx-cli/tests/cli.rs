use std::fs;

use cppx_cli::{
    args::{Colors, CppxArgs},
    Cppx,
};

fn args(dir: std::path::PathBuf) -> CppxArgs {
    CppxArgs {
        dir,
        colors: Colors::Never,
        verbose: false,
    }
}

#[test]
fn splits_discovered_files() {
    let root = tempfile::tempdir().unwrap();
    let nested = root.path().join("nested/deeper");
    fs::create_dir_all(&nested).unwrap();

    fs::write(
        root.path().join("widget.cppx"),
        "namespace ui { class Widget { public: void draw() { render(); } }; }\n",
    )
    .unwrap();
    fs::write(
        nested.join("gadget.cppx"),
        "namespace ui { void spin(); }\n",
    )
    .unwrap();
    fs::write(root.path().join("notes.txt"), "not a source file").unwrap();

    Cppx::new().execute(args(root.path().to_path_buf())).unwrap();

    let header = fs::read_to_string(root.path().join("widget.h")).unwrap();
    let source = fs::read_to_string(root.path().join("widget.cpp")).unwrap();
    assert!(header.starts_with("#ifndef UI_WIDGET_H\n#define UI_WIDGET_H\n"));
    assert!(header.contains("void draw();"));
    assert!(source.contains("void ui::Widget::draw() { render(); }"));

    assert!(nested.join("gadget.h").is_file());
    assert!(nested.join("gadget.cpp").is_file());
    assert!(!root.path().join("notes.h").exists());
}

#[test]
fn repeated_runs_are_byte_identical() {
    let root = tempfile::tempdir().unwrap();
    fs::write(
        root.path().join("calc.cppx"),
        "namespace m { int twice(int v) { return v + v; } }\n",
    )
    .unwrap();

    Cppx::new().execute(args(root.path().to_path_buf())).unwrap();
    let first_header = fs::read(root.path().join("calc.h")).unwrap();
    let first_source = fs::read(root.path().join("calc.cpp")).unwrap();

    Cppx::new().execute(args(root.path().to_path_buf())).unwrap();
    assert_eq!(fs::read(root.path().join("calc.h")).unwrap(), first_header);
    assert_eq!(fs::read(root.path().join("calc.cpp")).unwrap(), first_source);
}

#[test]
fn missing_base_directory_fails() {
    let root = tempfile::tempdir().unwrap();
    let result = Cppx::new().execute(args(root.path().join("missing")));
    assert!(result.is_err());
}

#[test]
fn lexer_error_skips_file_but_run_succeeds() {
    let root = tempfile::tempdir().unwrap();
    fs::write(root.path().join("ok.cppx"), "namespace n { void f(); }\n").unwrap();
    fs::write(root.path().join("broken.cppx"), "/* never closed\n").unwrap();

    Cppx::new().execute(args(root.path().to_path_buf())).unwrap();

    assert!(root.path().join("ok.h").is_file());
    assert!(root.path().join("ok.cpp").is_file());
    // No partial outputs for the failed file.
    assert!(!root.path().join("broken.h").exists());
    assert!(!root.path().join("broken.cpp").exists());
}
